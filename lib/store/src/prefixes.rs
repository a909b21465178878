/// A namespace prefix table used to abbreviate IRIs for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixMap {
    // (prefix, namespace) pairs, longest-namespace match wins.
    pairs: Vec<(String, String)>,
}

impl PrefixMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `namespace` under `prefix`. A later registration of the same prefix wins.
    pub fn insert(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        let prefix = prefix.into();
        self.pairs.retain(|(p, _)| *p != prefix);
        self.pairs.push((prefix, namespace.into()));
    }

    /// Abbreviates `iri` to `prefix:local` form, if a registered namespace covers it.
    pub fn abbreviate(&self, iri: &str) -> Option<String> {
        self.pairs
            .iter()
            .filter(|(_, ns)| !ns.is_empty() && iri.starts_with(ns.as_str()))
            .max_by_key(|(_, ns)| ns.len())
            .map(|(prefix, ns)| format!("{prefix}:{}", &iri[ns.len()..]))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<P: Into<String>, N: Into<String>> FromIterator<(P, N)> for PrefixMap {
    fn from_iter<I: IntoIterator<Item = (P, N)>>(iter: I) -> Self {
        let mut map = PrefixMap::new();
        for (prefix, namespace) in iter {
            map.insert(prefix, namespace);
        }
        map
    }
}

use crate::{DatasetSnapshot, PrefixMap, QuadStore};
use quadql_model::{GraphQuad, TermPattern};
use std::sync::{Arc, RwLock};

/// An insertion-ordered in-memory [`QuadStore`].
///
/// Writers replace the quad list wholesale, so an open snapshot keeps observing the state it was
/// opened against. Iteration order is insertion order, which also defines the "first seen" term
/// for resolvers that pick the first match.
#[derive(Debug, Default)]
pub struct MemoryQuadStore {
    quads: RwLock<Arc<Vec<GraphQuad>>>,
    prefixes: Option<PrefixMap>,
}

impl MemoryQuadStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefixes(prefixes: PrefixMap) -> Self {
        Self {
            quads: RwLock::default(),
            prefixes: Some(prefixes),
        }
    }

    /// Appends a quad. Duplicate quads are kept; deduplication is a resolver concern.
    pub fn insert(&self, quad: GraphQuad) {
        let mut guard = self.quads.write().unwrap_or_else(|e| e.into_inner());
        Arc::make_mut(&mut guard).push(quad);
    }

    pub fn extend(&self, quads: impl IntoIterator<Item = GraphQuad>) {
        let mut guard = self.quads.write().unwrap_or_else(|e| e.into_inner());
        Arc::make_mut(&mut guard).extend(quads);
    }

    pub fn len(&self) -> usize {
        self.quads.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl QuadStore for MemoryQuadStore {
    fn snapshot(&self) -> Box<dyn DatasetSnapshot + '_> {
        let quads = Arc::clone(&self.quads.read().unwrap_or_else(|e| e.into_inner()));
        Box::new(MemorySnapshot {
            quads,
            prefixes: self.prefixes.as_ref(),
        })
    }
}

struct MemorySnapshot<'a> {
    quads: Arc<Vec<GraphQuad>>,
    prefixes: Option<&'a PrefixMap>,
}

impl DatasetSnapshot for MemorySnapshot<'_> {
    fn stream<'a>(
        &'a self,
        graph: &'a TermPattern,
        subject: &'a TermPattern,
        predicate: &'a TermPattern,
        object: &'a TermPattern,
    ) -> Box<dyn Iterator<Item = GraphQuad> + 'a> {
        Box::new(
            self.quads
                .iter()
                .filter(move |q| {
                    graph.matches(&q.graph)
                        && subject.matches(&q.subject)
                        && predicate.matches(&q.predicate)
                        && object.matches(&q.object)
                })
                .cloned(),
        )
    }

    fn prefixes(&self) -> Option<&PrefixMap> {
        self.prefixes
    }
}

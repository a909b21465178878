use crate::error::ResolverError;
use quadql_model::vocab::BLANK_NODE_PREFIX;
use quadql_model::GraphTerm;
use quadql_store::PrefixMap;
use sha2::{Digest, Sha256};
use std::sync::Arc;

/// A URI or blank node enriched with identity and prefix-abbreviated rendering.
///
/// The prefix table is shared across every node produced by one resolver call and may be
/// absent, in which case [`EntityNode::short_uri`] degrades to the full URI.
#[derive(Debug, Clone)]
pub struct EntityNode {
    term: GraphTerm,
    uri: String,
    prefixes: Option<Arc<PrefixMap>>,
}

impl EntityNode {
    /// Wraps `term` as an entity. Only URIs and blank nodes denote entities, anything else is
    /// rejected.
    pub fn new(term: GraphTerm, prefixes: Option<Arc<PrefixMap>>) -> Result<Self, ResolverError> {
        let uri = match &term {
            GraphTerm::NamedNode(node) => node.as_str().to_owned(),
            GraphTerm::BlankNode(node) => format!("{BLANK_NODE_PREFIX}{}", node.as_str()),
            other => {
                return Err(ResolverError::invalid(format!(
                    "Not a node with a URI: {other}"
                )))
            }
        };
        Ok(Self {
            term,
            uri,
            prefixes,
        })
    }

    pub fn term(&self) -> &GraphTerm {
        &self.term
    }

    /// The node's URI, with blank nodes rendered under the reserved `_:` prefix.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Stable identifier for client-side caching. Same string as [`EntityNode::uri`].
    pub fn id(&self) -> &str {
        &self.uri
    }

    /// Hex-encoded SHA-256 digest of the URI.
    pub fn uri_hash(&self) -> String {
        hex::encode(Sha256::digest(self.uri.as_bytes()))
    }

    /// Prefix-abbreviated form of the URI, or the full URI when no namespace applies. Blank
    /// nodes are never abbreviated.
    pub fn short_uri(&self) -> String {
        if !matches!(self.term, GraphTerm::NamedNode(_)) {
            return self.uri.clone();
        }
        self.prefixes
            .as_deref()
            .and_then(|prefixes| prefixes.abbreviate(&self.uri))
            .unwrap_or_else(|| self.uri.clone())
    }
}

impl PartialEq for EntityNode {
    fn eq(&self, other: &Self) -> bool {
        self.term == other.term
    }
}

impl Eq for EntityNode {}

#[cfg(test)]
mod tests {
    use super::*;
    use quadql_model::{BlankNode, Literal, NamedNode};

    fn prefixes() -> Option<Arc<PrefixMap>> {
        Some(Arc::new(
            [("ex", "http://example.org/")].into_iter().collect(),
        ))
    }

    #[test]
    fn uri_node_identity() {
        let node = EntityNode::new(
            NamedNode::new("http://example.org/a").unwrap().into(),
            prefixes(),
        )
        .unwrap();
        assert_eq!(node.uri(), "http://example.org/a");
        assert_eq!(node.id(), node.uri());
        assert_eq!(node.short_uri(), "ex:a");
        assert_eq!(node.uri_hash().len(), 64);
    }

    #[test]
    fn blank_node_uses_reserved_prefix() {
        let node =
            EntityNode::new(BlankNode::new("b1").unwrap().into(), prefixes()).unwrap();
        assert_eq!(node.uri(), "_:b1");
        assert_eq!(node.short_uri(), "_:b1");
    }

    #[test]
    fn short_uri_without_table_is_full_uri() {
        let node =
            EntityNode::new(NamedNode::new("http://example.org/a").unwrap().into(), None)
                .unwrap();
        assert_eq!(node.short_uri(), "http://example.org/a");
    }

    #[test]
    fn literals_are_not_entities() {
        assert!(matches!(
            EntityNode::new(Literal::new_simple_literal("x").into(), None),
            Err(ResolverError::InvalidArgument(_))
        ));
    }
}

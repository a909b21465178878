use super::EntityNode;
use sha2::{Digest, Sha256};
use std::sync::OnceLock;

/// A subject-predicate-object statement viewed as a directional relationship between entities.
///
/// The id is a SHA-256 digest of the N-Triples rendering `subject predicate object.`, computed
/// on first access.
#[derive(Debug, Clone)]
pub struct Relationship {
    domain: EntityNode,
    predicate: EntityNode,
    range: EntityNode,
    id: OnceLock<String>,
}

impl Relationship {
    pub fn new(domain: EntityNode, predicate: EntityNode, range: EntityNode) -> Self {
        Self {
            domain,
            predicate,
            range,
            id: OnceLock::new(),
        }
    }

    /// The subject of the relationship.
    pub fn domain(&self) -> &EntityNode {
        &self.domain
    }

    pub fn domain_id(&self) -> &str {
        self.domain.id()
    }

    /// The predicate URI.
    pub fn predicate(&self) -> &str {
        self.predicate.uri()
    }

    /// The object of the relationship.
    pub fn range(&self) -> &EntityNode {
        &self.range
    }

    pub fn range_id(&self) -> &str {
        self.range.id()
    }

    pub fn id(&self) -> &str {
        self.id.get_or_init(|| {
            let serialized = format!(
                "{} {} {}.",
                self.domain.term(),
                self.predicate.term(),
                self.range.term()
            );
            hex::encode(Sha256::digest(serialized.as_bytes()))
        })
    }
}

/// A (predicate, other entity) pair reported without a direction, used for state
/// relationships where the state sits between the two entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonDirectionalRelationship {
    predicate: EntityNode,
    node: EntityNode,
}

impl NonDirectionalRelationship {
    pub fn new(predicate: EntityNode, node: EntityNode) -> Self {
        Self { predicate, node }
    }

    pub fn predicate(&self) -> &EntityNode {
        &self.predicate
    }

    pub fn node(&self) -> &EntityNode {
        &self.node
    }
}

impl PartialEq for Relationship {
    fn eq(&self, other: &Self) -> bool {
        self.domain == other.domain
            && self.predicate == other.predicate
            && self.range == other.range
    }
}

impl Eq for Relationship {}

use crate::GraphTerm;

/// A (subject, predicate, object) statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GraphTriple {
    pub subject: GraphTerm,
    pub predicate: GraphTerm,
    pub object: GraphTerm,
}

impl GraphTriple {
    pub fn new(
        subject: impl Into<GraphTerm>,
        predicate: impl Into<GraphTerm>,
        object: impl Into<GraphTerm>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

/// A (graph, subject, predicate, object) statement as stored in a dataset.
///
/// Quads are owned by the store; this layer only ever reads them within a snapshot scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GraphQuad {
    pub graph: GraphTerm,
    pub subject: GraphTerm,
    pub predicate: GraphTerm,
    pub object: GraphTerm,
}

impl GraphQuad {
    pub fn new(
        graph: impl Into<GraphTerm>,
        subject: impl Into<GraphTerm>,
        predicate: impl Into<GraphTerm>,
        object: impl Into<GraphTerm>,
    ) -> Self {
        Self {
            graph: graph.into(),
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Drops the graph component.
    pub fn into_triple(self) -> GraphTriple {
        GraphTriple {
            subject: self.subject,
            predicate: self.predicate,
            object: self.object,
        }
    }
}

impl From<GraphQuad> for GraphTriple {
    fn from(quad: GraphQuad) -> Self {
        quad.into_triple()
    }
}

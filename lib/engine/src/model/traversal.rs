use quadql_model::{GraphTerm, WrappedNode};

/// Direction of an edge relative to the node it was traversed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDirection {
    In,
    Out,
}

impl EdgeDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeDirection::In => "IN",
            EdgeDirection::Out => "OUT",
        }
    }
}

/// A node reached by graph traversal. Unlike entities, traversal nodes may wrap any term kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalNode {
    node: WrappedNode,
}

impl TraversalNode {
    pub fn new(term: GraphTerm) -> Self {
        Self {
            node: WrappedNode::new(term),
        }
    }

    pub fn node(&self) -> &WrappedNode {
        &self.node
    }

    pub fn term(&self) -> &GraphTerm {
        self.node.term()
    }
}

/// A single directed edge from a traversal node to a neighbouring node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalEdge {
    predicate: WrappedNode,
    direction: EdgeDirection,
    target: TraversalNode,
}

impl TraversalEdge {
    pub fn new(predicate: GraphTerm, direction: EdgeDirection, target: GraphTerm) -> Self {
        Self {
            predicate: WrappedNode::new(predicate),
            direction,
            target: TraversalNode::new(target),
        }
    }

    pub fn predicate(&self) -> &WrappedNode {
        &self.predicate
    }

    pub fn direction(&self) -> EdgeDirection {
        self.direction
    }

    pub fn target(&self) -> &TraversalNode {
        &self.target
    }
}

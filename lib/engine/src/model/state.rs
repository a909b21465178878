use quadql_model::{GraphTerm, NamedNode};
use std::sync::OnceLock;

/// A reified state: an event or fact node linked to a parent entity through one of the state
/// relationship predicates.
///
/// The state's period is resolved lazily and cached with three observable phases: not yet
/// computed (cell unset), computed with no period found (`Some(None)`), and computed to a
/// concrete period node (`Some(Some(term))`).
#[derive(Debug, Clone)]
pub struct State {
    state: GraphTerm,
    predicate: NamedNode,
    parent: GraphTerm,
    period: OnceLock<Option<GraphTerm>>,
}

impl State {
    pub fn new(state: GraphTerm, predicate: NamedNode, parent: GraphTerm) -> Self {
        Self {
            state,
            predicate,
            parent,
            period: OnceLock::new(),
        }
    }

    /// The reified state node itself.
    pub fn state_term(&self) -> &GraphTerm {
        &self.state
    }

    /// The predicate that linked this state to its parent entity.
    pub fn linking_predicate(&self) -> &NamedNode {
        &self.predicate
    }

    /// The parent entity this state belongs to.
    pub fn parent_term(&self) -> &GraphTerm {
        &self.parent
    }

    /// Returns the state's period node, computing it through `resolve` on first access and
    /// reusing the cached outcome afterwards. A resolution that finds nothing is cached too,
    /// so `resolve` runs at most once per instance.
    pub fn period_term(
        &self,
        resolve: impl FnOnce() -> Option<GraphTerm>,
    ) -> Option<&GraphTerm> {
        self.period.get_or_init(resolve).as_ref()
    }

    /// The cached period, without triggering resolution. `None` means not yet computed.
    pub fn cached_period(&self) -> Option<Option<&GraphTerm>> {
        self.period.get().map(Option::as_ref)
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
            && self.predicate == other.predicate
            && self.parent == other.parent
    }
}

impl Eq for State {}

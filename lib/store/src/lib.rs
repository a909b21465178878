mod memory;
mod prefixes;

pub use memory::MemoryQuadStore;
pub use prefixes::PrefixMap;

use quadql_model::{GraphQuad, TermPattern};

/// A queryable quad dataset.
///
/// This is the interface the resolver layer consumes; the actual storage engine (transactional
/// semantics, indexing, persistence) lives behind it. Implementations must hand out
/// [`DatasetSnapshot`]s that observe a single consistent view of the dataset.
pub trait QuadStore: Send + Sync {
    /// Opens a read-only snapshot of the dataset.
    fn snapshot(&self) -> Box<dyn DatasetSnapshot + '_>;
}

/// A consistent read-only view of a dataset, scoped to one resolver invocation.
///
/// All pattern positions accept [`TermPattern::Any`] as a wildcard. Iteration order is
/// store-defined but must be stable for an unchanged snapshot.
pub trait DatasetSnapshot {
    /// Streams the quads matching the given pattern.
    fn stream<'a>(
        &'a self,
        graph: &'a TermPattern,
        subject: &'a TermPattern,
        predicate: &'a TermPattern,
        object: &'a TermPattern,
    ) -> Box<dyn Iterator<Item = GraphQuad> + 'a>;

    /// Returns whether any quad matches the given pattern.
    fn contains(
        &self,
        graph: &TermPattern,
        subject: &TermPattern,
        predicate: &TermPattern,
        object: &TermPattern,
    ) -> bool {
        self.stream(graph, subject, predicate, object)
            .next()
            .is_some()
    }

    /// The prefix abbreviation table registered with the dataset, if any.
    fn prefixes(&self) -> Option<&PrefixMap>;
}

/// Runs `f` against a single consistent snapshot of the store.
///
/// This is the scoped-read entry point every resolver uses; all reads performed through the
/// snapshot observe the same state of the dataset.
pub fn read<T>(store: &dyn QuadStore, f: impl FnOnce(&dyn DatasetSnapshot) -> T) -> T {
    let snapshot = store.snapshot();
    f(snapshot.as_ref())
}

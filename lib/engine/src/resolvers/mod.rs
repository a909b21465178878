//! The resolver functions, one per traversal or query shape.
//!
//! Every resolver follows the same pattern: read the dataset handle from the execution
//! context, decode filter arguments, perform all store reads against one snapshot, and map
//! the raw quads into the result-shaping types. Resolvers are stateless and safe to invoke
//! concurrently for sibling elements of a list result.

pub mod entities;
pub mod quads;
pub mod states;
pub mod traversal;

use quadql_store::{DatasetSnapshot, PrefixMap};
use std::sync::Arc;

/// Clones the snapshot's prefix table once so every node produced by a resolver call can
/// share it.
pub(crate) fn shared_prefixes(snapshot: &dyn DatasetSnapshot) -> Option<Arc<PrefixMap>> {
    snapshot.prefixes().cloned().map(Arc::new)
}

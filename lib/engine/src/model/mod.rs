//! Result-shaping types produced by the resolvers.

mod entity;
mod literal;
mod relationship;
mod search;
mod state;
mod traversal;

pub use entity::EntityNode;
pub use literal::LiteralProperty;
pub use relationship::{NonDirectionalRelationship, Relationship};
pub use search::{SearchResults, SearchType};
pub use state::State;
pub use traversal::{EdgeDirection, TraversalEdge, TraversalNode};

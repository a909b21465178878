//! The node-traversal and entity-resolution resolver layer.
//!
//! This crate supplies the resolver functions a GraphQL engine invokes per selected field:
//! pattern-matched quads queries, directional graph traversal, entity and type lookups,
//! temporal state resolution, and delegation to an external search service. Resolvers read
//! the dataset through the [`quadql_store::QuadStore`] abstraction and shape results into the
//! types under [`model`].

mod context;
mod env;
pub mod error;
pub mod filters;
pub mod model;
mod registry;
pub mod resolvers;
pub mod schema;
pub mod search;

pub use context::ExecutionContext;
pub use env::{ResolverEnv, SelectionSet};
pub use error::ResolverError;
pub use registry::{Executor, ExecutorRegistry, SchemaFlavor};
pub use search::{SearchClient, SearchClientConfig};

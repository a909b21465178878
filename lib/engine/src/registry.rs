//! Deploy-time selection of which GraphQL schema flavour a dataset serves.
//!
//! The registry is an explicit handle constructed once at startup and passed to whoever
//! wires resolvers into the GraphQL engine. Executors are looked up by a short key, with the
//! available implementations fixed at compile time.

use crate::error::ResolverError;
use crate::search::{SearchClient, SearchClientConfig};
use crate::ExecutionContext;
use quadql_model::JsonMap;
use quadql_store::QuadStore;
use std::collections::BTreeMap;
use std::sync::Arc;

/// The resolver families this crate can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFlavor {
    /// Raw quads queries over the dataset.
    Dataset,
    /// Node-to-node traversal with directional edges.
    Traversal,
    /// The entity graph: entities, types, properties, relationships, states and search.
    Graph,
}

impl SchemaFlavor {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaFlavor::Dataset => "dataset",
            SchemaFlavor::Traversal => "traversal",
            SchemaFlavor::Graph => "graph",
        }
    }
}

/// An executor binds a dataset to one schema flavour and builds per-query contexts.
pub trait Executor: Send + Sync {
    fn flavor(&self) -> SchemaFlavor;

    /// Builds the execution context for one query, reading the auth token from the request's
    /// GraphQL `extensions` map.
    fn context(&self, extensions: &JsonMap) -> ExecutionContext;

    /// The search client to delegate fuzzy search to, for flavours that support it.
    fn search_client(&self) -> Option<&SearchClient> {
        None
    }
}

struct DatasetExecutor {
    store: Arc<dyn QuadStore>,
}

impl Executor for DatasetExecutor {
    fn flavor(&self) -> SchemaFlavor {
        SchemaFlavor::Dataset
    }

    fn context(&self, extensions: &JsonMap) -> ExecutionContext {
        ExecutionContext::from_extensions(Arc::clone(&self.store), extensions)
    }
}

struct TraversalExecutor {
    store: Arc<dyn QuadStore>,
}

impl Executor for TraversalExecutor {
    fn flavor(&self) -> SchemaFlavor {
        SchemaFlavor::Traversal
    }

    fn context(&self, extensions: &JsonMap) -> ExecutionContext {
        ExecutionContext::from_extensions(Arc::clone(&self.store), extensions)
    }
}

struct GraphExecutor {
    store: Arc<dyn QuadStore>,
    search: SearchClient,
}

impl Executor for GraphExecutor {
    fn flavor(&self) -> SchemaFlavor {
        SchemaFlavor::Graph
    }

    fn context(&self, extensions: &JsonMap) -> ExecutionContext {
        ExecutionContext::from_extensions(Arc::clone(&self.store), extensions)
    }

    fn search_client(&self) -> Option<&SearchClient> {
        Some(&self.search)
    }
}

type ExecutorFactory =
    Box<dyn Fn(Arc<dyn QuadStore>) -> Result<Arc<dyn Executor>, ResolverError> + Send + Sync>;

/// Maps short configuration keys to executor factories.
///
/// Built once at startup; `create` is the deploy-time "pick an executor" entry point, keyed
/// by the value a deployment's configuration carries.
pub struct ExecutorRegistry {
    factories: BTreeMap<&'static str, ExecutorFactory>,
}

impl ExecutorRegistry {
    /// An empty registry with no executors registered.
    pub fn empty() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// A registry with every built-in executor registered under its flavour name. The graph
    /// executor reads its search configuration from the environment.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(SchemaFlavor::Dataset.as_str(), |store| {
            Ok(Arc::new(DatasetExecutor { store }) as Arc<dyn Executor>)
        });
        registry.register(SchemaFlavor::Traversal.as_str(), |store| {
            Ok(Arc::new(TraversalExecutor { store }) as Arc<dyn Executor>)
        });
        registry.register(SchemaFlavor::Graph.as_str(), |store| {
            let search = SearchClient::new(SearchClientConfig::from_env())?;
            Ok(Arc::new(GraphExecutor { store, search }) as Arc<dyn Executor>)
        });
        registry
    }

    /// Registers `factory` under `key`, replacing any previous registration.
    pub fn register(
        &mut self,
        key: &'static str,
        factory: impl Fn(Arc<dyn QuadStore>) -> Result<Arc<dyn Executor>, ResolverError>
            + Send
            + Sync
            + 'static,
    ) {
        self.factories.insert(key, Box::new(factory));
    }

    /// Instantiates the executor registered under `key` for `store`.
    pub fn create(
        &self,
        key: &str,
        store: Arc<dyn QuadStore>,
    ) -> Result<Arc<dyn Executor>, ResolverError> {
        let factory = self.factories.get(key).ok_or_else(|| {
            ResolverError::invalid(format!(
                "No executor registered for key {key}, available: {}",
                self.keys().collect::<Vec<_>>().join(", ")
            ))
        })?;
        factory(store)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }
}

use crate::schema;
use quadql_model::JsonMap;
use quadql_store::QuadStore;
use serde_json::Value;
use std::sync::Arc;

/// The per-query execution context threaded through every resolver invocation.
///
/// Constructed once per top-level query execution and immutable afterwards. Resolvers access the
/// dataset and the caller's auth token exclusively through this context.
#[derive(Clone)]
pub struct ExecutionContext {
    store: Arc<dyn QuadStore>,
    auth_token: Option<String>,
}

impl ExecutionContext {
    /// Creates a context over `store`. A blank `auth_token` counts as absent.
    pub fn new(store: Arc<dyn QuadStore>, auth_token: Option<String>) -> Self {
        let auth_token = auth_token.filter(|t| !t.trim().is_empty());
        Self { store, auth_token }
    }

    /// Creates a context reading the auth token from a GraphQL `extensions` map.
    pub fn from_extensions(store: Arc<dyn QuadStore>, extensions: &JsonMap) -> Self {
        let auth_token = extensions
            .get(schema::EXTENSION_AUTH_TOKEN)
            .and_then(Value::as_str)
            .map(str::to_owned);
        Self::new(store, auth_token)
    }

    pub fn store(&self) -> &dyn QuadStore {
        self.store.as_ref()
    }

    /// The caller's auth token, passed through opaquely to downstream services.
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    pub fn has_auth_token(&self) -> bool {
        self.auth_token.is_some()
    }
}

use quadql_model::NodeMapError;

/// The failure modes a resolver can surface to the GraphQL engine.
///
/// All of these propagate out of the resolver unchanged; the engine packages them into the
/// query's error list alongside whatever sibling data already resolved. None of them are retried
/// here.
#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    /// A malformed or type-mismatched GraphQL argument or variable, or a field name that a
    /// resolver does not handle.
    #[error("{0}")]
    InvalidArgument(String),

    /// A data-integrity assumption violated by the underlying dataset, e.g. a state node with no
    /// declared types. Indicates a data quality issue rather than a code defect.
    #[error("{0}")]
    IllegalState(String),

    /// The external search service is unreachable, errored, or returned a non-success status.
    #[error("{message}")]
    SearchUnavailable {
        message: String,
        #[source]
        cause: Option<anyhow::Error>,
    },
}

impl ResolverError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ResolverError::InvalidArgument(message.into())
    }

    pub fn illegal_state(message: impl Into<String>) -> Self {
        ResolverError::IllegalState(message.into())
    }
}

impl From<NodeMapError> for ResolverError {
    fn from(error: NodeMapError) -> Self {
        ResolverError::InvalidArgument(error.to_string())
    }
}

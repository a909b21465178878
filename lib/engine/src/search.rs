//! Delegation of fuzzy search to the external search service.

use crate::env::ResolverEnv;
use crate::error::ResolverError;
use crate::model::{EntityNode, SearchResults, SearchType};
use crate::resolvers::{self, entities};
use crate::schema;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use quadql_model::GraphTerm;
use quadql_store::read;
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use serde_json::Value;
use std::collections::HashSet;
use std::time::Duration;

/// Environment variable overriding the search service base URL.
pub const ENV_SEARCH_API_URL: &str = "SEARCH_API_URL";
/// Base URL used when no override is configured.
pub const DEFAULT_SEARCH_API_URL: &str = "http://localhost:8181";

const HEADER_AUTHORIZATION: &str = "Authorization";
const HEADER_AWS_OIDC_DATA: &str = "X-Amzn-Oidc-Data";

/// Configuration for the outbound search client.
#[derive(Debug, Clone)]
pub struct SearchClientConfig {
    base_url: String,
    timeout: Duration,
}

impl SearchClientConfig {
    /// Resolves the base URL from the `SEARCH_API_URL` environment variable, falling back to
    /// the default, and applies the default request timeout.
    pub fn from_env() -> Self {
        let base_url = std::env::var(ENV_SEARCH_API_URL)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SEARCH_API_URL.to_owned());
        Self::new(base_url)
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// A blocking HTTP client for the search service.
///
/// The resolver thread blocks for the duration of the call, bounded by the configured
/// timeout.
pub struct SearchClient {
    config: SearchClientConfig,
    http: Client,
}

impl SearchClient {
    pub fn new(config: SearchClientConfig) -> Result<Self, ResolverError> {
        tracing::info!(url = %config.base_url, "Configured search API URL");
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ResolverError::SearchUnavailable {
                message: "Failed to construct the search HTTP client".to_owned(),
                cause: Some(e.into()),
            })?;
        Ok(Self { config, http })
    }

    /// Resolves a search query: issues the remote search, then keeps only the hits that are
    /// actually used as a subject or object in the local dataset.
    ///
    /// The search index is eventually consistent with the graph store, so remote hits absent
    /// from the local dataset are silently dropped rather than treated as an error.
    pub fn search(&self, env: &ResolverEnv<'_>) -> Result<SearchResults, ResolverError> {
        let graph = entities::graph_filter(env)?;
        let search_term = env
            .argument(schema::ARGUMENT_SEARCH_TERM)
            .and_then(Value::as_str)
            .filter(|term| !term.trim().is_empty())
            .ok_or_else(|| {
                ResolverError::invalid("Failed to make query as no 'searchTerm' argument provided")
            })?;

        let url = self.build_request_url(search_term, env)?;
        tracing::debug!(%url, "Issuing search request");

        let mut request = self.http.get(url);
        if let Some(token) = env.context().auth_token() {
            // The deployment context is unknown here, so forward the token in both header
            // conventions a downstream service might expect.
            request = request
                .header(HEADER_AUTHORIZATION, format!("Bearer {token}"))
                .header(HEADER_AWS_OIDC_DATA, token);
        }

        let response = request.send().map_err(|e| search_failure(search_term, e))?;
        if response.status() != StatusCode::OK {
            return Err(ResolverError::SearchUnavailable {
                message: format!(
                    "Failed to make query for search term {search_term}, received status {}",
                    response.status().as_u16()
                ),
                cause: None,
            });
        }
        let body: Value = response
            .json()
            .map_err(|e| search_failure(search_term, e))?;

        let envelope = SearchResults::from_envelope(search_term, &body);
        let hits = document_uris(&body);

        let nodes = read(env.context().store(), |snapshot| {
            let prefixes = resolvers::shared_prefixes(snapshot);
            let mut seen = HashSet::new();
            let mut nodes = Vec::new();
            for term in hits {
                if !seen.insert(term.clone()) {
                    continue;
                }
                if entities::used_as_subject_or_object(snapshot, &term, &graph) {
                    nodes.push(EntityNode::new(term, prefixes.clone())?);
                }
            }
            Ok::<_, ResolverError>(nodes)
        })?;

        Ok(envelope.with_nodes(nodes))
    }

    fn build_request_url(
        &self,
        search_term: &str,
        env: &ResolverEnv<'_>,
    ) -> Result<Url, ResolverError> {
        let mut url = Url::parse(&format!("{}/documents", self.config.base_url)).map_err(|e| {
            ResolverError::SearchUnavailable {
                message: format!("Invalid search API URL {}", self.config.base_url),
                cause: Some(e.into()),
            }
        })?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("query", search_term);
            if let Some(raw) = env
                .argument(schema::ARGUMENT_SEARCH_TYPE)
                .and_then(Value::as_str)
            {
                query.append_pair("type", SearchType::parse_lenient(raw).as_str());
            }
            if let Some(limit) = env.argument(schema::ARGUMENT_LIMIT).and_then(Value::as_i64) {
                if limit > 0 {
                    query.append_pair("limit", &limit.to_string());
                }
            }
            if let Some(offset) = env.argument(schema::ARGUMENT_OFFSET).and_then(Value::as_i64) {
                if offset >= 1 {
                    query.append_pair("offset", &offset.to_string());
                }
            }
            if let Some(type_filter) = env
                .argument(schema::ARGUMENT_TYPE_FILTER)
                .and_then(Value::as_str)
                .filter(|f| !f.trim().is_empty())
            {
                query.append_pair("type-filter", &URL_SAFE_NO_PAD.encode(type_filter));
                query.append_pair("is-type-filter-base64", "true");
            }
        }
        Ok(url)
    }
}

fn search_failure(search_term: &str, cause: impl Into<anyhow::Error>) -> ResolverError {
    ResolverError::SearchUnavailable {
        message: format!(
            "Failed to make query for search term {search_term}.  \
             Search service may be unavailable in your environment."
        ),
        cause: Some(cause.into()),
    }
}

/// Extracts the document URIs from a raw results envelope, skipping malformed entries.
fn document_uris(body: &Value) -> Vec<GraphTerm> {
    let Some(results) = body.get("results").and_then(Value::as_array) else {
        return Vec::new();
    };
    results
        .iter()
        .filter_map(|result| result.get("document"))
        .filter_map(|document| document.get("uri"))
        .filter_map(Value::as_str)
        .filter(|uri| !uri.trim().is_empty())
        .filter_map(|uri| match entities::parse_node_uri(uri) {
            Ok(term) => Some(term),
            Err(e) => {
                tracing::warn!(uri, error = %e, "Skipping unparseable search result URI");
                None
            }
        })
        .collect()
}

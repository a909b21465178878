use super::EntityNode;
use serde_json::Value;

/// Query mode accepted by the search service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchType {
    #[default]
    Query,
    Term,
    Phrase,
    Wildcard,
}

impl SearchType {
    /// Wire form used in the outbound `type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Query => "query",
            SearchType::Term => "term",
            SearchType::Phrase => "phrase",
            SearchType::Wildcard => "wildcard",
        }
    }

    /// Case-insensitive parse, falling back to [`SearchType::Query`] for anything
    /// unrecognized. The service envelope is treated leniently throughout.
    pub fn parse_lenient(raw: &str) -> SearchType {
        match raw.to_ascii_lowercase().as_str() {
            "term" => SearchType::Term,
            "phrase" => SearchType::Phrase,
            "wildcard" => SearchType::Wildcard,
            _ => SearchType::Query,
        }
    }
}

/// A page of search results, combining the service's paging metadata with the subset of hits
/// that exist in the local dataset.
///
/// `maybe_more` is a non-binding hint only: the search index is eventually consistent with
/// the graph store, so it may claim further results that do not materialize, or vice versa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    search_term: String,
    search_type: SearchType,
    limit: i64,
    offset: i64,
    maybe_more: bool,
    nodes: Vec<EntityNode>,
}

impl SearchResults {
    pub fn new(
        search_term: impl Into<String>,
        search_type: SearchType,
        limit: i64,
        offset: i64,
        maybe_more: bool,
        nodes: Vec<EntityNode>,
    ) -> Self {
        Self {
            search_term: search_term.into(),
            search_type,
            limit,
            offset,
            maybe_more,
            nodes,
        }
    }

    /// Builds the metadata envelope from a raw service response body, with empty `nodes`.
    ///
    /// Parsing is lenient: missing or malformed `limit`/`offset` default to `-1`, a missing
    /// `maybeMore` defaults to `false`, an unrecognized `type` defaults to `QUERY`.
    pub fn from_envelope(search_term: &str, body: &Value) -> Self {
        let search_type = body
            .get("type")
            .and_then(Value::as_str)
            .map_or(SearchType::Query, SearchType::parse_lenient);
        Self::new(
            search_term,
            search_type,
            parse_count(body.get("limit")),
            parse_count(body.get("offset")),
            parse_flag(body.get("maybeMore")),
            Vec::new(),
        )
    }

    pub fn with_nodes(mut self, nodes: Vec<EntityNode>) -> Self {
        self.nodes = nodes;
        self
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn search_type(&self) -> SearchType {
        self.search_type
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn maybe_more(&self) -> bool {
        self.maybe_more
    }

    pub fn nodes(&self) -> &[EntityNode] {
        &self.nodes
    }
}

fn parse_count(raw: Option<&Value>) -> i64 {
    match raw {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(-1),
        Some(Value::String(s)) => s.parse().unwrap_or(-1),
        _ => -1,
    }
}

fn parse_flag(raw: Option<&Value>) -> bool {
    match raw {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_defaults_are_lenient() {
        let results = SearchResults::from_envelope("test", &json!({}));
        assert_eq!(results.search_term(), "test");
        assert_eq!(results.search_type(), SearchType::Query);
        assert_eq!(results.limit(), -1);
        assert_eq!(results.offset(), -1);
        assert!(!results.maybe_more());
        assert!(results.nodes().is_empty());
    }

    #[test]
    fn envelope_accepts_string_encoded_fields() {
        let body = json!({
            "type": "PHRASE",
            "limit": "25",
            "offset": "not a number",
            "maybeMore": "true"
        });
        let results = SearchResults::from_envelope("test", &body);
        assert_eq!(results.search_type(), SearchType::Phrase);
        assert_eq!(results.limit(), 25);
        assert_eq!(results.offset(), -1);
        assert!(results.maybe_more());
    }

    #[test]
    fn search_type_wire_names_are_lowercase() {
        assert_eq!(SearchType::Wildcard.as_str(), "wildcard");
        assert_eq!(SearchType::parse_lenient("TERM"), SearchType::Term);
        assert_eq!(SearchType::parse_lenient("unknown"), SearchType::Query);
    }
}

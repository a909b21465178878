//! Field and argument names fixed by the GraphQL schemas this layer serves.

// Node / Quad / Triple types.
pub const SUBJECT_FIELD: &str = "subject";
pub const PREDICATE_FIELD: &str = "predicate";
pub const OBJECT_FIELD: &str = "object";
pub const GRAPH_FIELD: &str = "graph";

// Traversal schema.
pub const STARTS_ARGUMENT: &str = "starts";
pub const KINDS_ARGUMENT: &str = "kinds";
pub const OUTGOING_FIELD: &str = "outgoing";
pub const INCOMING_FIELD: &str = "incoming";

// Graph schema query fields and arguments.
pub const ARGUMENT_GRAPH: &str = "graph";
pub const ARGUMENT_URI: &str = "uri";
pub const ARGUMENT_URIS: &str = "uris";
pub const ARGUMENT_SEARCH_TERM: &str = "searchTerm";
pub const ARGUMENT_SEARCH_TYPE: &str = "searchType";
pub const ARGUMENT_LIMIT: &str = "limit";
pub const ARGUMENT_OFFSET: &str = "offset";
pub const ARGUMENT_TYPE_FILTER: &str = "typeFilter";

// Graph schema node fields.
pub const FIELD_TYPES: &str = "types";
pub const FIELD_PROPERTIES: &str = "properties";
pub const FIELD_INBOUND_RELATIONSHIPS: &str = "inRels";
pub const FIELD_OUTBOUND_RELATIONSHIPS: &str = "outRels";
pub const FIELD_INSTANCES: &str = "instances";

// Graph schema state fields.
pub const FIELD_START: &str = "start";
pub const FIELD_END: &str = "end";
pub const FIELD_PERIOD: &str = "period";

/// The GraphQL `extensions` key carrying the caller's auth token.
pub const EXTENSION_AUTH_TOKEN: &str = "authToken";

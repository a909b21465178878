#![allow(dead_code)]

use quadql_engine::ExecutionContext;
use quadql_model::{BlankNode, GraphQuad, GraphTerm, JsonMap, Literal, NamedNode, WrappedNode};
use quadql_store::MemoryQuadStore;
use serde_json::Value;
use std::sync::Arc;

pub const EX: &str = "http://example.org/";
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

pub fn named(iri: &str) -> GraphTerm {
    NamedNode::new(iri).unwrap().into()
}

pub fn ex(local: &str) -> GraphTerm {
    named(&format!("{EX}{local}"))
}

pub fn blank(label: &str) -> GraphTerm {
    BlankNode::new(label).unwrap().into()
}

pub fn string_literal(value: &str) -> GraphTerm {
    Literal::new_simple_literal(value).into()
}

pub fn lang_literal(value: &str, language: &str) -> GraphTerm {
    Literal::new_language_tagged_literal(value, language)
        .unwrap()
        .into()
}

pub fn quad(
    graph: impl Into<GraphTerm>,
    subject: impl Into<GraphTerm>,
    predicate: impl Into<GraphTerm>,
    object: impl Into<GraphTerm>,
) -> GraphQuad {
    GraphQuad::new(graph, subject, predicate, object)
}

pub fn context(store: Arc<MemoryQuadStore>) -> ExecutionContext {
    ExecutionContext::new(store, None)
}

/// The map form of a node filter argument for `term`.
pub fn filter_for(term: &GraphTerm) -> Value {
    Value::Object(WrappedNode::new(term.clone()).to_map())
}

pub fn arguments(pairs: &[(&str, Value)]) -> JsonMap {
    pairs
        .iter()
        .map(|(name, value)| ((*name).to_owned(), value.clone()))
        .collect()
}

//! Decoding of GraphQL filter arguments into term match constraints.

use crate::error::ResolverError;
use quadql_model::{NodeKind, TermPattern, WrappedNode};
use serde_json::Value;
use std::collections::BTreeSet;

/// Parses a single node filter argument.
///
/// An absent argument, JSON `null`, or an empty map all normalize to the wildcard
/// [`TermPattern::Any`]; this is never an error.
pub fn parse(raw: Option<&Value>) -> Result<TermPattern, ResolverError> {
    match raw {
        None | Some(Value::Null) => Ok(TermPattern::Any),
        Some(Value::Object(map)) if map.is_empty() => Ok(TermPattern::Any),
        Some(Value::Object(map)) => Ok(WrappedNode::from_map(map)?.into_term().into()),
        Some(other) => Err(ResolverError::invalid(format!(
            "Node filter argument must be a map, got {}",
            json_type(other)
        ))),
    }
}

/// Parses an argument that accepts either a single node filter or a list of them.
///
/// A single filter is wrapped into a singleton list; an absent argument normalizes to a
/// singleton wildcard.
pub fn parse_list(raw: Option<&Value>) -> Result<Vec<TermPattern>, ResolverError> {
    match raw {
        Some(Value::Array(values)) => values
            .iter()
            .map(|value| parse(Some(value)))
            .collect(),
        other => Ok(vec![parse(other)?]),
    }
}

/// Parses a `NodeKind` enum-list argument. An absent argument admits every kind.
pub fn parse_kinds(raw: Option<&Value>) -> Result<BTreeSet<NodeKind>, ResolverError> {
    match raw {
        None | Some(Value::Null) => Ok(NodeKind::ALL.into_iter().collect()),
        Some(Value::Array(values)) => values
            .iter()
            .map(|value| {
                value
                    .as_str()
                    .ok_or_else(|| {
                        ResolverError::invalid(format!(
                            "Node kinds argument must contain enum values, got {}",
                            json_type(value)
                        ))
                    })?
                    .parse::<NodeKind>()
                    .map_err(|e| ResolverError::invalid(e.to_string()))
            })
            .collect(),
        Some(other) => Err(ResolverError::invalid(format!(
            "Node kinds argument must be a list, got {}",
            json_type(other)
        ))),
    }
}

/// Turns a term back into its filter map representation. `None` yields JSON `null`, used to omit
/// optional variables.
pub fn make(pattern: Option<&TermPattern>) -> Value {
    match pattern.and_then(TermPattern::as_term) {
        None => Value::Null,
        Some(term) => Value::Object(WrappedNode::new(term.clone()).to_map()),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a map",
    }
}

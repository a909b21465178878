//! Entity-graph resolvers: starting nodes, type membership, properties and relationships.

use crate::env::ResolverEnv;
use crate::error::ResolverError;
use crate::model::{EdgeDirection, EntityNode, LiteralProperty, Relationship};
use crate::schema;
use quadql_model::vocab::{rdf, BLANK_NODE_PREFIX};
use quadql_model::{BlankNode, GraphTerm, NamedNode, TermPattern};
use quadql_store::{read, DatasetSnapshot};
use serde_json::Value;
use std::collections::HashSet;

/// Parses a URI-shaped argument string into a term, honouring the reserved blank node prefix.
pub(crate) fn parse_node_uri(uri: &str) -> Result<GraphTerm, ResolverError> {
    if let Some(label) = uri.strip_prefix(BLANK_NODE_PREFIX) {
        BlankNode::new(label)
            .map(Into::into)
            .map_err(|e| ResolverError::invalid(e.to_string()))
    } else {
        NamedNode::new(uri)
            .map(Into::into)
            .map_err(|e| ResolverError::invalid(e.to_string()))
    }
}

/// Decodes the optional `graph` argument, defaulting blank or absent values to the wildcard.
pub(crate) fn graph_filter(env: &ResolverEnv<'_>) -> Result<TermPattern, ResolverError> {
    match env.argument(schema::ARGUMENT_GRAPH).and_then(Value::as_str) {
        Some(raw) if !raw.trim().is_empty() => Ok(parse_node_uri(raw)?.into()),
        _ => Ok(TermPattern::Any),
    }
}

/// Returns whether `term` appears as a subject or object anywhere under the graph filter.
pub(crate) fn used_as_subject_or_object(
    snapshot: &dyn DatasetSnapshot,
    term: &GraphTerm,
    graph: &TermPattern,
) -> bool {
    let pattern = TermPattern::from(term.clone());
    snapshot.contains(graph, &pattern, &TermPattern::Any, &TermPattern::Any)
        || snapshot.contains(graph, &TermPattern::Any, &TermPattern::Any, &pattern)
}

fn required_uris(env: &ResolverEnv<'_>, multi: bool) -> Result<Vec<GraphTerm>, ResolverError> {
    let argument = if multi {
        schema::ARGUMENT_URIS
    } else {
        schema::ARGUMENT_URI
    };
    let raw = env
        .argument(argument)
        .ok_or_else(|| ResolverError::invalid(format!("Required argument {argument} missing")))?;
    if multi {
        let Value::Array(values) = raw else {
            return Err(ResolverError::invalid(format!(
                "Argument {argument} received as wrong type, expected a list"
            )));
        };
        values
            .iter()
            .map(|value| {
                value.as_str().ok_or_else(|| {
                    ResolverError::invalid(format!(
                        "Argument {argument} received as wrong type, expected a list of strings"
                    ))
                })
            })
            .map(|uri| parse_node_uri(uri?))
            .collect()
    } else {
        let Value::String(uri) = raw else {
            return Err(ResolverError::invalid(format!(
                "Argument {argument} received as wrong type, expected a string"
            )));
        };
        Ok(vec![parse_node_uri(uri)?])
    }
}

fn admitted_nodes(
    env: &ResolverEnv<'_>,
    starts: Vec<GraphTerm>,
) -> Result<Vec<EntityNode>, ResolverError> {
    let graph = graph_filter(env)?;
    read(env.context().store(), |snapshot| {
        let prefixes = super::shared_prefixes(snapshot);
        let mut seen = HashSet::new();
        let mut nodes = Vec::new();
        for term in starts {
            if !seen.insert(term.clone()) {
                continue;
            }
            if used_as_subject_or_object(snapshot, &term, &graph) {
                nodes.push(EntityNode::new(term, prefixes.clone())?);
            }
        }
        Ok(nodes)
    })
}

/// Resolves a single starting node by `uri`, admitting it only if it is actually used as a
/// subject or object in the dataset.
pub fn starting_node(env: &ResolverEnv<'_>) -> Result<Option<EntityNode>, ResolverError> {
    let starts = required_uris(env, false)?;
    Ok(admitted_nodes(env, starts)?.into_iter().next())
}

/// Resolves multiple starting nodes by `uris`, keeping only those present in the dataset.
pub fn starting_nodes(env: &ResolverEnv<'_>) -> Result<Vec<EntityNode>, ResolverError> {
    let starts = required_uris(env, true)?;
    admitted_nodes(env, starts)
}

/// Resolves every entity in the dataset: the distinct subjects of `rdf:type` statements.
///
/// Literal and variable subjects are never returned as entities.
pub fn all_entities(env: &ResolverEnv<'_>) -> Result<Vec<EntityNode>, ResolverError> {
    let graph = graph_filter(env)?;
    let rdf_type = TermPattern::from(rdf::TYPE);

    read(env.context().store(), |snapshot| {
        let prefixes = super::shared_prefixes(snapshot);
        let mut seen = HashSet::new();
        let mut entities = Vec::new();
        for quad in snapshot.stream(&graph, &TermPattern::Any, &rdf_type, &TermPattern::Any) {
            if quad.subject.is_entity() && seen.insert(quad.subject.clone()) {
                entities.push(EntityNode::new(quad.subject, prefixes.clone())?);
            }
        }
        Ok(entities)
    })
}

/// Resolves the `rdf:type` objects of an entity.
///
/// Duplicate type statements are preserved; dedup is deliberately left to the data.
pub fn node_types(
    env: &ResolverEnv<'_>,
    source: &EntityNode,
) -> Result<Vec<EntityNode>, ResolverError> {
    let node = TermPattern::from(source.term().clone());
    let rdf_type = TermPattern::from(rdf::TYPE);

    read(env.context().store(), |snapshot| {
        let prefixes = super::shared_prefixes(snapshot);
        snapshot
            .stream(&TermPattern::Any, &node, &rdf_type, &TermPattern::Any)
            .filter(|quad| quad.object.is_entity())
            .map(|quad| EntityNode::new(quad.object, prefixes.clone()))
            .collect()
    })
}

/// Resolves the distinct instances of a type entity: subjects declaring it via `rdf:type`.
pub fn instances(
    env: &ResolverEnv<'_>,
    source: &EntityNode,
) -> Result<Vec<EntityNode>, ResolverError> {
    let node = TermPattern::from(source.term().clone());
    let rdf_type = TermPattern::from(rdf::TYPE);

    read(env.context().store(), |snapshot| {
        let prefixes = super::shared_prefixes(snapshot);
        let mut seen = HashSet::new();
        let mut instances = Vec::new();
        for quad in snapshot.stream(&TermPattern::Any, &TermPattern::Any, &rdf_type, &node) {
            if quad.subject.is_entity() && seen.insert(quad.subject.clone()) {
                instances.push(EntityNode::new(quad.subject, prefixes.clone())?);
            }
        }
        Ok(instances)
    })
}

/// Resolves the literal-valued properties of an entity.
pub fn literal_properties(
    env: &ResolverEnv<'_>,
    source: &EntityNode,
) -> Result<Vec<LiteralProperty>, ResolverError> {
    let node = TermPattern::from(source.term().clone());

    read(env.context().store(), |snapshot| {
        let prefixes = super::shared_prefixes(snapshot);
        snapshot
            .stream(&TermPattern::Any, &node, &TermPattern::Any, &TermPattern::Any)
            .filter_map(|quad| match quad.object {
                GraphTerm::Literal(literal) => Some((quad.predicate, literal)),
                _ => None,
            })
            .map(|(predicate, literal)| {
                Ok(LiteralProperty::new(
                    EntityNode::new(predicate, prefixes.clone())?,
                    literal,
                ))
            })
            .collect()
    })
}

/// Resolves the directional relationships of an entity, driven by the field name: `outRels`
/// matches the entity as subject, `inRels` matches it in the final pattern position.
pub fn relationships(
    env: &ResolverEnv<'_>,
    source: &EntityNode,
) -> Result<Vec<Relationship>, ResolverError> {
    let direction = match env.field_name() {
        schema::FIELD_OUTBOUND_RELATIONSHIPS => EdgeDirection::Out,
        schema::FIELD_INBOUND_RELATIONSHIPS => EdgeDirection::In,
        other => {
            return Err(ResolverError::invalid(format!(
                "Unrecognised field {other}"
            )))
        }
    };
    let node = TermPattern::from(source.term().clone());
    let any = TermPattern::Any;

    read(env.context().store(), |snapshot| {
        let prefixes = super::shared_prefixes(snapshot);
        let quads = match direction {
            EdgeDirection::Out => snapshot.stream(&any, &node, &any, &any),
            EdgeDirection::In => snapshot.stream(&any, &any, &any, &node),
        };
        quads
            .filter(|quad| match direction {
                EdgeDirection::Out => quad.object.is_entity(),
                EdgeDirection::In => quad.subject.is_entity(),
            })
            .map(|quad| {
                Ok(Relationship::new(
                    EntityNode::new(quad.subject, prefixes.clone())?,
                    EntityNode::new(quad.predicate, prefixes.clone())?,
                    EntityNode::new(quad.object, prefixes.clone())?,
                ))
            })
            .collect()
    })
}

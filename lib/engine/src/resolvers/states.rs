//! State resolvers: reified event/fact nodes and their temporal bounds.

use crate::env::ResolverEnv;
use crate::error::ResolverError;
use crate::model::{EntityNode, NonDirectionalRelationship, State};
use crate::schema;
use quadql_model::vocab::{ies, rdf, BLANK_NODE_PREFIX};
use quadql_model::{GraphTerm, NamedNodeRef, TermPattern};
use quadql_store::{read, DatasetSnapshot};
use serde_json::Value;
use std::collections::HashSet;

fn required_uri(env: &ResolverEnv<'_>) -> Result<GraphTerm, ResolverError> {
    let raw = env
        .argument(schema::ARGUMENT_URI)
        .and_then(Value::as_str)
        .ok_or_else(|| {
            ResolverError::invalid(format!(
                "Required argument {} missing",
                schema::ARGUMENT_URI
            ))
        })?;
    super::entities::parse_node_uri(raw)
}

/// Resolves the states attached to an entity through the state relationship predicates.
///
/// Untyped subjects are excluded: a state is expected to carry at least one `rdf:type`
/// statement, and reification artifacts without one are not states.
pub fn starting_states(env: &ResolverEnv<'_>) -> Result<Vec<State>, ResolverError> {
    let parent = required_uri(env)?;
    let parent_pattern = TermPattern::from(parent.clone());
    let rdf_type = TermPattern::from(rdf::TYPE);

    read(env.context().store(), |snapshot| {
        let mut states = Vec::new();
        for predicate in ies::STATE_PREDICATES {
            let predicate_pattern = TermPattern::from(predicate);
            let mut seen = HashSet::new();
            for quad in snapshot.stream(
                &TermPattern::Any,
                &TermPattern::Any,
                &predicate_pattern,
                &parent_pattern,
            ) {
                if !quad.subject.is_entity() {
                    continue;
                }
                let typed = snapshot.contains(
                    &TermPattern::Any,
                    &TermPattern::from(quad.subject.clone()),
                    &rdf_type,
                    &TermPattern::Any,
                );
                if typed && seen.insert(quad.subject.clone()) {
                    states.push(State::new(
                        quad.subject,
                        predicate.into_owned(),
                        parent.clone(),
                    ));
                }
            }
        }
        Ok(states)
    })
}

/// Resolves the `start`, `end` or `period` field of a state.
///
/// The state's own period node is resolved once through the `in period` predicate and cached
/// on the state. `start` and `end` fall back to a one-hop bounding sub-state (linked via
/// `is start of` / `is end of`) when the state's own linking predicate does not provide the
/// bound directly; `period` never takes that extra hop.
pub fn state_period(
    env: &ResolverEnv<'_>,
    source: &State,
) -> Result<Option<String>, ResolverError> {
    read(env.context().store(), |snapshot| {
        let period_node = source
            .period_term(|| find_period_node(snapshot, source.state_term()))
            .cloned();
        let period_value = find_period_value(snapshot, period_node.as_ref());

        match env.field_name() {
            schema::FIELD_START => Ok(find_bound(snapshot, source, period_value, ies::IS_START_OF)),
            schema::FIELD_END => Ok(find_bound(snapshot, source, period_value, ies::IS_END_OF)),
            schema::FIELD_PERIOD => Ok(period_value.filter(|v| !v.trim().is_empty())),
            other => Err(ResolverError::invalid(format!(
                "Field {other} not handled by this resolver"
            ))),
        }
    })
}

fn find_bound(
    snapshot: &dyn DatasetSnapshot,
    state: &State,
    period_value: Option<String>,
    bounding_predicate: NamedNodeRef<'_>,
) -> Option<String> {
    if let Some(value) = period_value.filter(|v| !v.trim().is_empty()) {
        if state.linking_predicate().as_ref() == bounding_predicate {
            return Some(value);
        }
    }

    // Is there a bounding sub-state of this state that declares the bound?
    let sub_state = find_sub_state(snapshot, bounding_predicate, state)?;
    let period = find_period_node(snapshot, &sub_state);
    find_period_value(snapshot, period.as_ref())
}

fn find_sub_state(
    snapshot: &dyn DatasetSnapshot,
    bounding_predicate: NamedNodeRef<'_>,
    state: &State,
) -> Option<GraphTerm> {
    snapshot
        .stream(
            &TermPattern::Any,
            &TermPattern::Any,
            &TermPattern::from(bounding_predicate),
            &TermPattern::from(state.state_term().clone()),
        )
        .find(|quad| quad.subject.is_entity())
        .map(|quad| quad.subject)
}

fn find_period_node(snapshot: &dyn DatasetSnapshot, state: &GraphTerm) -> Option<GraphTerm> {
    snapshot
        .stream(
            &TermPattern::Any,
            &TermPattern::from(state.clone()),
            &TermPattern::from(ies::IN_PERIOD),
            &TermPattern::Any,
        )
        .find(|quad| quad.object.is_entity())
        .map(|quad| quad.object)
}

fn find_period_value(snapshot: &dyn DatasetSnapshot, period: Option<&GraphTerm>) -> Option<String> {
    let period = period?;
    snapshot
        .stream(
            &TermPattern::Any,
            &TermPattern::from(period.clone()),
            &TermPattern::from(ies::PERIOD_REPRESENTATION),
            &TermPattern::Any,
        )
        .find_map(|quad| match quad.object {
            GraphTerm::Literal(literal) => Some(literal.value().to_owned()),
            _ => None,
        })
}

/// Resolves the primary `rdf:type` of a state: the first type in store iteration order.
///
/// A state with no declared types is a data integrity failure, not an empty result.
pub fn state_type(env: &ResolverEnv<'_>, source: &State) -> Result<String, ResolverError> {
    let node = TermPattern::from(source.state_term().clone());
    let rdf_type = TermPattern::from(rdf::TYPE);

    read(env.context().store(), |snapshot| {
        let primary = snapshot
            .stream(&TermPattern::Any, &node, &rdf_type, &TermPattern::Any)
            .map(|quad| quad.object)
            .find(GraphTerm::is_entity);
        match primary {
            Some(GraphTerm::NamedNode(uri)) => Ok(uri.into_string()),
            Some(GraphTerm::BlankNode(blank)) => {
                Ok(format!("{BLANK_NODE_PREFIX}{}", blank.as_str()))
            }
            _ => Err(ResolverError::illegal_state(format!(
                "No types available for state {}",
                source.state_term()
            ))),
        }
    })
}

/// Resolves the non-directional relationships of a state.
///
/// Unions the state's outbound statements (excluding its `rdf:type`s and its link back to the
/// parent entity) with inbound statements from typed subjects.
pub fn state_relationships(
    env: &ResolverEnv<'_>,
    source: &State,
) -> Result<Vec<NonDirectionalRelationship>, ResolverError> {
    let node = TermPattern::from(source.state_term().clone());
    let rdf_type = TermPattern::from(rdf::TYPE);
    let rdf_type_term = GraphTerm::from(rdf::TYPE);

    read(env.context().store(), |snapshot| {
        let prefixes = super::shared_prefixes(snapshot);
        let any = TermPattern::Any;
        let mut relationships = Vec::new();

        let outbound = snapshot
            .stream(&any, &node, &any, &any)
            .filter(|quad| {
                quad.predicate != rdf_type_term
                    && quad.object != *source.parent_term()
                    && quad.object.is_entity()
            });
        for quad in outbound {
            relationships.push(NonDirectionalRelationship::new(
                EntityNode::new(quad.predicate, prefixes.clone())?,
                EntityNode::new(quad.object, prefixes.clone())?,
            ));
        }

        let inbound: Vec<_> = snapshot
            .stream(&any, &any, &any, &node)
            .filter(|quad| quad.subject.is_entity())
            .collect();
        for quad in inbound {
            let typed = snapshot.contains(
                &TermPattern::Any,
                &TermPattern::from(quad.subject.clone()),
                &rdf_type,
                &TermPattern::Any,
            );
            if typed {
                relationships.push(NonDirectionalRelationship::new(
                    EntityNode::new(quad.predicate, prefixes.clone())?,
                    EntityNode::new(quad.subject, prefixes.clone())?,
                ));
            }
        }

        Ok(relationships)
    })
}

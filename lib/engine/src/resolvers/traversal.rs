//! Traversal-schema resolvers: starting nodes and directional edge expansion.

use crate::env::ResolverEnv;
use crate::error::ResolverError;
use crate::model::{EdgeDirection, TraversalEdge, TraversalNode};
use crate::{filters, schema};
use quadql_model::TermPattern;
use quadql_store::read;
use std::collections::HashSet;

/// Resolves the traversal starting nodes.
///
/// Each start filter is matched against the predicate position of the dataset, and the
/// distinct subjects of the matching quads become the starting nodes. An empty filter list
/// yields an empty result, not an error.
pub fn starts(env: &ResolverEnv<'_>) -> Result<Vec<TraversalNode>, ResolverError> {
    let start_filters = filters::parse_list(env.argument(schema::STARTS_ARGUMENT))?;

    read(env.context().store(), |snapshot| {
        let mut seen_filters = HashSet::new();
        let mut seen = HashSet::new();
        let mut nodes = Vec::new();
        for filter in &start_filters {
            if !seen_filters.insert(filter) {
                continue;
            }
            for quad in snapshot.stream(
                &TermPattern::Any,
                &TermPattern::Any,
                filter,
                &TermPattern::Any,
            ) {
                if seen.insert(quad.subject.clone()) {
                    nodes.push(TraversalNode::new(quad.subject));
                }
            }
        }
        Ok(nodes)
    })
}

/// Resolves the `incoming` or `outgoing` edges of a traversal node, constrained by predicate
/// filters and a target-kind set.
///
/// Returns `None` rather than an empty list when nothing matches: a null edge list
/// short-circuits nested field resolution in GraphQL where an empty list would not.
pub fn edges(
    env: &ResolverEnv<'_>,
    source: &TraversalNode,
) -> Result<Option<Vec<TraversalEdge>>, ResolverError> {
    let predicate_filters = filters::parse_list(env.argument(schema::PREDICATE_FIELD))?;
    let kinds = filters::parse_kinds(env.argument(schema::KINDS_ARGUMENT))?;
    let direction = match env.field_name() {
        schema::INCOMING_FIELD => EdgeDirection::In,
        schema::OUTGOING_FIELD => EdgeDirection::Out,
        other => {
            return Err(ResolverError::invalid(format!(
                "Unrecognised field {other}"
            )))
        }
    };
    let node = TermPattern::from(source.term().clone());
    let any = TermPattern::Any;

    read(env.context().store(), |snapshot| {
        let mut seen_filters = HashSet::new();
        let mut edges = Vec::new();
        for filter in &predicate_filters {
            if !seen_filters.insert(filter) {
                continue;
            }
            let quads = match direction {
                EdgeDirection::In => snapshot.stream(&any, &any, filter, &node),
                EdgeDirection::Out => snapshot.stream(&any, &node, filter, &any),
            };
            for quad in quads {
                let edge = match direction {
                    EdgeDirection::In => {
                        TraversalEdge::new(quad.predicate, direction, quad.subject)
                    }
                    EdgeDirection::Out => {
                        TraversalEdge::new(quad.predicate, direction, quad.object)
                    }
                };
                if kinds.contains(&edge.target().node().kind()) {
                    edges.push(edge);
                }
            }
        }
        Ok((!edges.is_empty()).then_some(edges))
    })
}

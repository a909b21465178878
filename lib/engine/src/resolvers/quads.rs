//! The generic dataset query: pattern-matched quads with selection-aware projection.

use crate::env::ResolverEnv;
use crate::error::ResolverError;
use crate::{filters, schema};
use quadql_model::{GraphQuad, GraphTerm, GraphTriple, WrappedNode};
use quadql_store::read;

/// One row of a quads query, shaped by which of the four positions the query selected.
///
/// Selecting all four positions yields full quads; selecting exactly subject, predicate and
/// object yields triples; any other selection yields a partial row carrying only the
/// requested positions. This avoids materializing unrequested fields and serves the
/// triple-vs-quad GraphQL type duality from one store query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuadView {
    Quad(GraphQuad),
    Triple(GraphTriple),
    Partial(PartialQuad),
}

/// The requested subset of a quad's positions, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialQuad {
    fields: Vec<(&'static str, GraphTerm)>,
}

impl PartialQuad {
    fn push(&mut self, field: &'static str, term: GraphTerm) {
        self.fields.push((field, term));
    }

    pub fn get(&self, field: &str) -> Option<&GraphTerm> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, term)| term)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &GraphTerm)> {
        self.fields.iter().map(|(name, term)| (*name, term))
    }
}

/// Resolves a quads query with optional subject/predicate/object/graph filters.
pub fn quads(env: &ResolverEnv<'_>) -> Result<Vec<QuadView>, ResolverError> {
    let subject = filters::parse(env.argument(schema::SUBJECT_FIELD))?;
    let predicate = filters::parse(env.argument(schema::PREDICATE_FIELD))?;
    let object = filters::parse(env.argument(schema::OBJECT_FIELD))?;
    let graph = filters::parse(env.argument(schema::GRAPH_FIELD))?;

    let selection = env.selection();
    let includes_subject = selection.contains(schema::SUBJECT_FIELD);
    let includes_predicate = selection.contains(schema::PREDICATE_FIELD);
    let includes_object = selection.contains(schema::OBJECT_FIELD);
    let includes_graph = selection.contains(schema::GRAPH_FIELD);
    let includes_triple = includes_subject && includes_predicate && includes_object;
    let includes_all = includes_triple && includes_graph;

    read(env.context().store(), |snapshot| {
        let stream = snapshot.stream(&graph, &subject, &predicate, &object);
        if includes_all {
            Ok(stream.map(QuadView::Quad).collect())
        } else if includes_triple {
            Ok(stream.map(|q| QuadView::Triple(q.into_triple())).collect())
        } else {
            Ok(stream
                .map(|q| {
                    let mut partial = PartialQuad::default();
                    if includes_subject {
                        partial.push(schema::SUBJECT_FIELD, q.subject);
                    }
                    if includes_predicate {
                        partial.push(schema::PREDICATE_FIELD, q.predicate);
                    }
                    if includes_object {
                        partial.push(schema::OBJECT_FIELD, q.object);
                    }
                    if includes_graph {
                        partial.push(schema::GRAPH_FIELD, q.graph);
                    }
                    QuadView::Partial(partial)
                })
                .collect())
        }
    })
}

/// Resolves a single node position of a quad, triple or partial row.
pub fn node(env: &ResolverEnv<'_>, source: &QuadView) -> Result<WrappedNode, ResolverError> {
    let field = env.field_name();
    let term = match source {
        QuadView::Quad(quad) => match field {
            schema::SUBJECT_FIELD => &quad.subject,
            schema::PREDICATE_FIELD => &quad.predicate,
            schema::OBJECT_FIELD => &quad.object,
            schema::GRAPH_FIELD => &quad.graph,
            other => {
                return Err(ResolverError::invalid(format!(
                    "Cannot fetch field {other} for a Quad"
                )))
            }
        },
        QuadView::Triple(triple) => match field {
            schema::SUBJECT_FIELD => &triple.subject,
            schema::PREDICATE_FIELD => &triple.predicate,
            schema::OBJECT_FIELD => &triple.object,
            other => {
                return Err(ResolverError::invalid(format!(
                    "Cannot fetch field {other} for a Triple"
                )))
            }
        },
        QuadView::Partial(partial) => partial.get(field).ok_or_else(|| {
            ResolverError::invalid(format!("Unrecognised field {field}"))
        })?,
    };
    Ok(WrappedNode::new(term.clone()))
}

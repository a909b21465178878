use crate::quad::GraphTriple;
use crate::{GraphTerm, NodeKind};
use oxrdf::vocab::rdf;
use oxrdf::{BlankNode, Literal, NamedNode, Variable};
use serde_json::Value;

/// The generic map representation used for GraphQL argument and variable values.
pub type JsonMap = serde_json::Map<String, Value>;

const KIND_FIELD: &str = "kind";
const VALUE_FIELD: &str = "value";
const LANGUAGE_FIELD: &str = "language";
const DATATYPE_FIELD: &str = "datatype";
const TRIPLE_FIELD: &str = "triple";
const SUBJECT_FIELD: &str = "subject";
const PREDICATE_FIELD: &str = "predicate";
const OBJECT_FIELD: &str = "object";

/// An error raised when a generic map cannot be decoded into a [`WrappedNode`].
#[derive(Debug, thiserror::Error)]
pub enum NodeMapError {
    #[error("cannot convert a map to a node if the `kind` field is not present")]
    MissingKind,
    #[error("the `{0}` field must be a string")]
    NotAString(&'static str),
    #[error(transparent)]
    UnknownKind(#[from] crate::kind::UnknownNodeKind),
    #[error("the `{field}` field is required to recreate a {kind} node")]
    MissingField { field: &'static str, kind: NodeKind },
    #[error("the `triple` field is required to recreate a TRIPLE node")]
    MissingTriple,
    #[error("insufficient fields to recreate a TRIPLE node")]
    IncompleteTriple,
    #[error(transparent)]
    InvalidIri(#[from] oxrdf::IriParseError),
    #[error(transparent)]
    InvalidBlankNodeId(#[from] oxrdf::BlankNodeIdParseError),
    #[error(transparent)]
    InvalidLanguageTag(#[from] oxrdf::LanguageTagParseError),
    #[error(transparent)]
    InvalidVariableName(#[from] oxrdf::VariableNameParseError),
}

/// A wrapper around a [`GraphTerm`] that maps it into the shape used by the GraphQL schema.
///
/// A wrapped node exposes the `kind`/`value`/`language`/`datatype`/`triple` fields of the `Node`
/// GraphQL type and can round-trip through the generic map representation used for filter
/// arguments and variables. Instances are immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WrappedNode {
    term: GraphTerm,
    kind: NodeKind,
}

impl WrappedNode {
    pub fn new(term: GraphTerm) -> Self {
        let kind = term.kind();
        Self { term, kind }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn term(&self) -> &GraphTerm {
        &self.term
    }

    pub fn into_term(self) -> GraphTerm {
        self.term
    }

    /// The lexical value of the node, unless this is of kind [`NodeKind::Triple`].
    pub fn value(&self) -> Option<&str> {
        match &self.term {
            GraphTerm::NamedNode(node) => Some(node.as_str()),
            GraphTerm::BlankNode(node) => Some(node.as_str()),
            GraphTerm::Literal(literal) => Some(literal.value()),
            GraphTerm::Variable(variable) => Some(variable.as_str()),
            GraphTerm::Triple(_) => None,
        }
    }

    /// The language tag, if and only if this is of kind [`NodeKind::LanguageLiteral`].
    pub fn language(&self) -> Option<&str> {
        self.term.as_literal().and_then(Literal::language)
    }

    /// The datatype IRI for typed literals. Language literals report `rdf:langString`.
    pub fn datatype(&self) -> Option<&str> {
        match self.kind {
            NodeKind::TypedLiteral => self.term.as_literal().map(|l| l.datatype().as_str()),
            NodeKind::LanguageLiteral => Some(rdf::LANG_STRING.as_str()),
            _ => None,
        }
    }

    /// The embedded triple, if and only if this is of kind [`NodeKind::Triple`].
    pub fn triple(&self) -> Option<&GraphTriple> {
        match &self.term {
            GraphTerm::Triple(triple) => Some(triple),
            _ => None,
        }
    }

    /// Decodes GraphQL output (or a filter argument) back into a wrapped node.
    ///
    /// Since a GraphQL selection may only have selected some fields, the decoded node is not
    /// guaranteed to equal the node that produced the map; this is most visible for embedded
    /// triples whose sub-terms were partially selected.
    pub fn from_map(map: &JsonMap) -> Result<Self, NodeMapError> {
        let kind: NodeKind = require_str(map, KIND_FIELD, NodeMapError::MissingKind)?.parse()?;
        let term = match kind {
            NodeKind::Uri => GraphTerm::from(NamedNode::new(required_value(map, kind)?)?),
            NodeKind::Blank => GraphTerm::from(BlankNode::new(required_value(map, kind)?)?),
            NodeKind::Variable => GraphTerm::from(Variable::new(required_value(map, kind)?)?),
            NodeKind::PlainLiteral => {
                GraphTerm::from(Literal::new_simple_literal(required_value(map, kind)?))
            }
            NodeKind::LanguageLiteral => {
                let value = required_value(map, kind)?;
                let language = require_str(
                    map,
                    LANGUAGE_FIELD,
                    NodeMapError::MissingField {
                        field: LANGUAGE_FIELD,
                        kind,
                    },
                )?;
                GraphTerm::from(Literal::new_language_tagged_literal(value, language)?)
            }
            NodeKind::TypedLiteral => {
                let value = required_value(map, kind)?;
                let datatype = require_str(
                    map,
                    DATATYPE_FIELD,
                    NodeMapError::MissingField {
                        field: DATATYPE_FIELD,
                        kind,
                    },
                )?;
                GraphTerm::from(Literal::new_typed_literal(value, NamedNode::new(datatype)?))
            }
            NodeKind::Triple => {
                let triple = map
                    .get(TRIPLE_FIELD)
                    .and_then(Value::as_object)
                    .ok_or(NodeMapError::MissingTriple)?;
                let component = |field: &str| {
                    triple
                        .get(field)
                        .and_then(Value::as_object)
                        .ok_or(NodeMapError::IncompleteTriple)
                };
                let subject = WrappedNode::from_map(component(SUBJECT_FIELD)?)?;
                let predicate = WrappedNode::from_map(component(PREDICATE_FIELD)?)?;
                let object = WrappedNode::from_map(component(OBJECT_FIELD)?)?;
                GraphTerm::from(GraphTriple::new(
                    subject.into_term(),
                    predicate.into_term(),
                    object.into_term(),
                ))
            }
        };
        Ok(Self { term, kind })
    }

    /// The map representation of this node, usable as a filter argument or variable.
    ///
    /// This is the exact inverse projection of [`WrappedNode::from_map`].
    pub fn to_map(&self) -> JsonMap {
        let mut map = JsonMap::new();
        map.insert(KIND_FIELD.to_owned(), self.kind.as_str().into());
        if self.kind != NodeKind::Triple {
            map.insert(VALUE_FIELD.to_owned(), self.value().into());
        }
        if self.kind == NodeKind::LanguageLiteral {
            map.insert(LANGUAGE_FIELD.to_owned(), self.language().into());
        }
        if matches!(self.kind, NodeKind::LanguageLiteral | NodeKind::TypedLiteral) {
            map.insert(DATATYPE_FIELD.to_owned(), self.datatype().into());
        }
        if let Some(triple) = self.triple() {
            let mut nested = JsonMap::new();
            nested.insert(
                SUBJECT_FIELD.to_owned(),
                WrappedNode::new(triple.subject.clone()).to_map().into(),
            );
            nested.insert(
                PREDICATE_FIELD.to_owned(),
                WrappedNode::new(triple.predicate.clone()).to_map().into(),
            );
            nested.insert(
                OBJECT_FIELD.to_owned(),
                WrappedNode::new(triple.object.clone()).to_map().into(),
            );
            map.insert(TRIPLE_FIELD.to_owned(), nested.into());
        }
        map
    }
}

impl From<GraphTerm> for WrappedNode {
    fn from(term: GraphTerm) -> Self {
        WrappedNode::new(term)
    }
}

fn require_str<'a>(
    map: &'a JsonMap,
    field: &'static str,
    missing: NodeMapError,
) -> Result<&'a str, NodeMapError> {
    match map.get(field) {
        None | Some(Value::Null) => Err(missing),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(NodeMapError::NotAString(field)),
    }
}

fn required_value(map: &JsonMap, kind: NodeKind) -> Result<&str, NodeMapError> {
    require_str(
        map,
        VALUE_FIELD,
        NodeMapError::MissingField {
            field: VALUE_FIELD,
            kind,
        },
    )
}

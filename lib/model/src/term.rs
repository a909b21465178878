use crate::quad::GraphTriple;
use crate::NodeKind;
use oxrdf::vocab::xsd;
use oxrdf::{BlankNode, Literal, NamedNode, Variable};
use std::fmt;

/// A single RDF graph value.
///
/// This is the full union of values that can occur in a quad position: an IRI, a blank node, a
/// literal, a query variable, or an embedded (quoted) triple. Unlike [`oxrdf::Term`] the embedded
/// triple variant may itself contain variables, which GraphQL filter arguments can express.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GraphTerm {
    NamedNode(NamedNode),
    BlankNode(BlankNode),
    Literal(Literal),
    Variable(Variable),
    Triple(Box<GraphTriple>),
}

impl GraphTerm {
    /// Classifies this term into the GraphQL-facing [`NodeKind`].
    ///
    /// Literals with a language tag are [`NodeKind::LanguageLiteral`], literals with a
    /// non-`xsd:string` datatype are [`NodeKind::TypedLiteral`], and everything else is a
    /// [`NodeKind::PlainLiteral`]. A literal never reports both a language and a datatype.
    pub fn kind(&self) -> NodeKind {
        match self {
            GraphTerm::NamedNode(_) => NodeKind::Uri,
            GraphTerm::BlankNode(_) => NodeKind::Blank,
            GraphTerm::Variable(_) => NodeKind::Variable,
            GraphTerm::Triple(_) => NodeKind::Triple,
            GraphTerm::Literal(literal) => {
                if literal.language().is_some() {
                    NodeKind::LanguageLiteral
                } else if literal.datatype() != xsd::STRING {
                    NodeKind::TypedLiteral
                } else {
                    NodeKind::PlainLiteral
                }
            }
        }
    }

    /// Returns whether this term can denote an entity, i.e. is an IRI or a blank node.
    pub fn is_entity(&self) -> bool {
        matches!(self, GraphTerm::NamedNode(_) | GraphTerm::BlankNode(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, GraphTerm::Literal(_))
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            GraphTerm::Literal(literal) => Some(literal),
            _ => None,
        }
    }
}

impl fmt::Display for GraphTerm {
    /// Formats the term in N-Triples-like syntax (variables as `?name`, embedded triples quoted).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphTerm::NamedNode(node) => node.fmt(f),
            GraphTerm::BlankNode(node) => node.fmt(f),
            GraphTerm::Literal(literal) => literal.fmt(f),
            GraphTerm::Variable(variable) => variable.fmt(f),
            GraphTerm::Triple(triple) => {
                write!(
                    f,
                    "<< {} {} {} >>",
                    triple.subject, triple.predicate, triple.object
                )
            }
        }
    }
}

impl From<NamedNode> for GraphTerm {
    fn from(node: NamedNode) -> Self {
        GraphTerm::NamedNode(node)
    }
}

impl From<oxrdf::NamedNodeRef<'_>> for GraphTerm {
    fn from(node: oxrdf::NamedNodeRef<'_>) -> Self {
        GraphTerm::NamedNode(node.into_owned())
    }
}

impl From<BlankNode> for GraphTerm {
    fn from(node: BlankNode) -> Self {
        GraphTerm::BlankNode(node)
    }
}

impl From<Literal> for GraphTerm {
    fn from(literal: Literal) -> Self {
        GraphTerm::Literal(literal)
    }
}

impl From<Variable> for GraphTerm {
    fn from(variable: Variable) -> Self {
        GraphTerm::Variable(variable)
    }
}

impl From<GraphTriple> for GraphTerm {
    fn from(triple: GraphTriple) -> Self {
        GraphTerm::Triple(Box::new(triple))
    }
}

/// A match constraint for one position of a quad pattern.
///
/// [`TermPattern::Any`] matches every term; this is the normal form of an absent or empty GraphQL
/// filter argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TermPattern {
    #[default]
    Any,
    Term(GraphTerm),
}

impl TermPattern {
    pub fn matches(&self, term: &GraphTerm) -> bool {
        match self {
            TermPattern::Any => true,
            TermPattern::Term(expected) => expected == term,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, TermPattern::Any)
    }

    /// The concrete term of this pattern, unless it is the wildcard.
    pub fn as_term(&self) -> Option<&GraphTerm> {
        match self {
            TermPattern::Any => None,
            TermPattern::Term(term) => Some(term),
        }
    }
}

impl From<GraphTerm> for TermPattern {
    fn from(term: GraphTerm) -> Self {
        TermPattern::Term(term)
    }
}

impl From<NamedNode> for TermPattern {
    fn from(node: NamedNode) -> Self {
        TermPattern::Term(node.into())
    }
}

impl From<oxrdf::NamedNodeRef<'_>> for TermPattern {
    fn from(node: oxrdf::NamedNodeRef<'_>) -> Self {
        TermPattern::Term(node.into())
    }
}

impl From<BlankNode> for TermPattern {
    fn from(node: BlankNode) -> Self {
        TermPattern::Term(node.into())
    }
}

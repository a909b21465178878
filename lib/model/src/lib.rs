mod kind;
mod quad;
mod term;
pub mod vocab;
mod wrapped;

pub use kind::{NodeKind, UnknownNodeKind};
pub use quad::{GraphQuad, GraphTriple};
pub use term::{GraphTerm, TermPattern};
pub use wrapped::{JsonMap, NodeMapError, WrappedNode};

// Re-export the oxrdf types that appear in our public API.
pub use oxrdf::{
    BlankNode, BlankNodeIdParseError, BlankNodeRef, IriParseError, LanguageTagParseError, Literal,
    LiteralRef, NamedNode, NamedNodeRef, Variable, VariableNameParseError, VariableRef,
};

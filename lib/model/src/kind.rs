use std::fmt;
use std::str::FromStr;

/// The discriminator for [`crate::GraphTerm`] values as exposed through the GraphQL schema.
///
/// The wire names (`URI`, `PLAIN_LITERAL`, ...) are the GraphQL enum values used by the `kind`
/// field and by filter arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    Uri,
    Blank,
    Variable,
    Triple,
    PlainLiteral,
    LanguageLiteral,
    TypedLiteral,
}

impl NodeKind {
    pub const ALL: [NodeKind; 7] = [
        NodeKind::Uri,
        NodeKind::Blank,
        NodeKind::Variable,
        NodeKind::Triple,
        NodeKind::PlainLiteral,
        NodeKind::LanguageLiteral,
        NodeKind::TypedLiteral,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            NodeKind::Uri => "URI",
            NodeKind::Blank => "BLANK",
            NodeKind::Variable => "VARIABLE",
            NodeKind::Triple => "TRIPLE",
            NodeKind::PlainLiteral => "PLAIN_LITERAL",
            NodeKind::LanguageLiteral => "LANGUAGE_LITERAL",
            NodeKind::TypedLiteral => "TYPED_LITERAL",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error returned when parsing a string that is not a GraphQL `NodeKind` value.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown node kind `{0}`")]
pub struct UnknownNodeKind(pub String);

impl FromStr for NodeKind {
    type Err = UnknownNodeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownNodeKind(s.to_owned()))
    }
}

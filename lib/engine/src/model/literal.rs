use super::EntityNode;
use quadql_model::vocab::rdf;
use quadql_model::Literal;

/// A literal-valued property of an entity: the predicate plus the literal object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralProperty {
    predicate: EntityNode,
    literal: Literal,
}

impl LiteralProperty {
    pub fn new(predicate: EntityNode, literal: Literal) -> Self {
        Self { predicate, literal }
    }

    pub fn predicate(&self) -> &EntityNode {
        &self.predicate
    }

    /// Prefix-abbreviated predicate URI.
    pub fn short_predicate(&self) -> String {
        self.predicate.short_uri()
    }

    /// The literal's lexical form.
    pub fn value(&self) -> &str {
        self.literal.value()
    }

    pub fn language(&self) -> Option<&str> {
        self.literal.language()
    }

    /// The literal's datatype URI. Language-tagged literals report `rdf:langString`.
    pub fn datatype(&self) -> &str {
        if self.literal.language().is_some() {
            rdf::LANG_STRING.as_str()
        } else {
            self.literal.datatype().as_str()
        }
    }
}

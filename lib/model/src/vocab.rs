//! Vocabulary constants used by the resolver layer.

pub use oxrdf::vocab::rdf;

/// The string prefix that denotes blank node identity in all URI-shaped outputs.
pub const BLANK_NODE_PREFIX: &str = "_:";

/// [IES 4](https://github.com/dstl/IES4) predicates used to model temporal states.
pub mod ies {
    use oxrdf::NamedNodeRef;

    /// Links a state node to the entity it is a state of.
    pub const IS_STATE_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ies.data.gov.uk/ontology/ies4#isStateOf");
    /// Links a participation state to the event it participates in.
    pub const IS_PARTICIPANT_IN: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ies.data.gov.uk/ontology/ies4#isParticipantIn");
    /// Links a bounding state to the state whose beginning it marks.
    pub const IS_START_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ies.data.gov.uk/ontology/ies4#isStartOf");
    /// Links a bounding state to the state whose end it marks.
    pub const IS_END_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ies.data.gov.uk/ontology/ies4#isEndOf");
    /// Links a state to the period it holds in.
    pub const IN_PERIOD: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ies.data.gov.uk/ontology/ies4#inPeriod");
    /// Links a period to its textual (ISO 8601) representation.
    pub const PERIOD_REPRESENTATION: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://ies.data.gov.uk/ontology/ies4#iso8601PeriodRepresentation",
    );

    /// The relationship predicates that link a state to its parent entity.
    pub const STATE_PREDICATES: [NamedNodeRef<'_>; 2] = [IS_STATE_OF, IS_PARTICIPANT_IN];
}

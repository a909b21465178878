mod common;

use common::*;
use quadql_engine::resolvers::states;
use quadql_engine::{ResolverEnv, ResolverError};
use quadql_model::vocab::ies;
use quadql_store::MemoryQuadStore;
use serde_json::json;
use std::sync::Arc;

fn state_store() -> Arc<MemoryQuadStore> {
    let store = MemoryQuadStore::new();
    // s1 is a typed state of the entity with a directly attached period.
    store.insert(quad(ex("g"), ex("s1"), ies::IS_STATE_OF, ex("entity")));
    store.insert(quad(ex("g"), ex("s1"), named(RDF_TYPE), ex("BirthState")));
    store.insert(quad(ex("g"), ex("s1"), ies::IN_PERIOD, ex("p1")));
    store.insert(quad(
        ex("g"),
        ex("p1"),
        ies::PERIOD_REPRESENTATION,
        string_literal("2020-01-01"),
    ));
    // s2 participates in the entity and has no period of its own.
    store.insert(quad(ex("g"), ex("s2"), ies::IS_PARTICIPANT_IN, ex("entity")));
    store.insert(quad(ex("g"), ex("s2"), named(RDF_TYPE), ex("Participation")));
    // An untyped subject linked like a state is a reification artifact, not a state.
    store.insert(quad(ex("g"), ex("untyped"), ies::IS_STATE_OF, ex("entity")));
    Arc::new(store)
}

fn states_of(store: &Arc<MemoryQuadStore>) -> Vec<quadql_engine::model::State> {
    let ctx = context(Arc::clone(store));
    let env = ResolverEnv::new(&ctx, "states")
        .with_argument("uri", json!("http://example.org/entity"));
    states::starting_states(&env).unwrap()
}

#[test]
fn starting_states_require_a_declared_type() {
    let store = state_store();
    let found = states_of(&store);
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].state_term(), &ex("s1"));
    assert_eq!(found[0].linking_predicate().as_ref(), ies::IS_STATE_OF);
    assert_eq!(found[1].state_term(), &ex("s2"));
    assert_eq!(found[1].linking_predicate().as_ref(), ies::IS_PARTICIPANT_IN);
}

#[test]
fn direct_period_resolves_for_the_period_field() {
    let store = state_store();
    let state = states_of(&store).remove(0);
    let ctx = context(store);

    let period = states::state_period(&ResolverEnv::new(&ctx, "period"), &state).unwrap();
    assert_eq!(period.as_deref(), Some("2020-01-01"));
}

#[test]
fn start_and_end_fall_back_to_bounding_states() {
    let store = state_store();
    // A bounding sub-state declares the start of s2, another its end.
    store.insert(quad(ex("g"), ex("b1"), ies::IS_START_OF, ex("s2")));
    store.insert(quad(ex("g"), ex("b1"), ies::IN_PERIOD, ex("p2")));
    store.insert(quad(
        ex("g"),
        ex("p2"),
        ies::PERIOD_REPRESENTATION,
        string_literal("2021-03"),
    ));
    store.insert(quad(ex("g"), ex("b2"), ies::IS_END_OF, ex("s2")));
    store.insert(quad(ex("g"), ex("b2"), ies::IN_PERIOD, ex("p3")));
    store.insert(quad(
        ex("g"),
        ex("p3"),
        ies::PERIOD_REPRESENTATION,
        string_literal("2021-09"),
    ));

    let state = states_of(&store).remove(1);
    let ctx = context(store);

    let start = states::state_period(&ResolverEnv::new(&ctx, "start"), &state).unwrap();
    assert_eq!(start.as_deref(), Some("2021-03"));
    let end = states::state_period(&ResolverEnv::new(&ctx, "end"), &state).unwrap();
    assert_eq!(end.as_deref(), Some("2021-09"));

    // A bound reached through a bounding sub-state never surfaces as the state's own period.
    let period = states::state_period(&ResolverEnv::new(&ctx, "period"), &state).unwrap();
    assert_eq!(period, None);
}

#[test]
fn start_is_direct_when_the_state_itself_starts_its_target() {
    let store = Arc::new(MemoryQuadStore::new());
    store.insert(quad(ex("g"), ex("b1"), ies::IS_START_OF, ex("entity")));
    store.insert(quad(ex("g"), ex("b1"), named(RDF_TYPE), ex("BoundingState")));
    store.insert(quad(ex("g"), ex("b1"), ies::IN_PERIOD, ex("p1")));
    store.insert(quad(
        ex("g"),
        ex("p1"),
        ies::PERIOD_REPRESENTATION,
        string_literal("1999"),
    ));
    let state = quadql_engine::model::State::new(
        ex("b1"),
        ies::IS_START_OF.into_owned(),
        ex("entity"),
    );
    let ctx = context(store);

    let start = states::state_period(&ResolverEnv::new(&ctx, "start"), &state).unwrap();
    assert_eq!(start.as_deref(), Some("1999"));
    // The direct period is also visible through the period field.
    let period = states::state_period(&ResolverEnv::new(&ctx, "period"), &state).unwrap();
    assert_eq!(period.as_deref(), Some("1999"));
    // But not as an end bound.
    let end = states::state_period(&ResolverEnv::new(&ctx, "end"), &state).unwrap();
    assert_eq!(end, None);
}

#[test]
fn period_resolution_is_idempotent_across_fields() {
    let store = state_store();
    let state = states_of(&store).remove(0);
    let ctx = context(store);

    let first = states::state_period(&ResolverEnv::new(&ctx, "period"), &state).unwrap();
    let second = states::state_period(&ResolverEnv::new(&ctx, "period"), &state).unwrap();
    assert_eq!(first, second);
    assert!(state.cached_period().is_some());
}

#[test]
fn unknown_period_field_is_rejected() {
    let store = state_store();
    let state = states_of(&store).remove(0);
    let ctx = context(store);
    assert!(matches!(
        states::state_period(&ResolverEnv::new(&ctx, "middle"), &state),
        Err(ResolverError::InvalidArgument(_))
    ));
}

#[test]
fn state_type_returns_a_declared_type() {
    let store = state_store();
    store.insert(quad(ex("g"), ex("s1"), named(RDF_TYPE), ex("SecondType")));
    let state = states_of(&store).remove(0);
    let ctx = context(store);

    // Which declared type is primary is store iteration order; only membership is contractual.
    let primary = states::state_type(&ResolverEnv::new(&ctx, "type"), &state).unwrap();
    assert!(
        primary == "http://example.org/BirthState" || primary == "http://example.org/SecondType"
    );
}

#[test]
fn state_type_without_types_is_an_integrity_failure() {
    let store = state_store();
    let state = quadql_engine::model::State::new(
        ex("untyped"),
        ies::IS_STATE_OF.into_owned(),
        ex("entity"),
    );
    let ctx = context(store);
    assert!(matches!(
        states::state_type(&ResolverEnv::new(&ctx, "type"), &state),
        Err(ResolverError::IllegalState(_))
    ));
}

#[test]
fn state_relationships_union_both_directions() {
    let store = Arc::new(MemoryQuadStore::new());
    store.insert(quad(ex("g"), ex("s1"), ies::IS_STATE_OF, ex("entity")));
    store.insert(quad(ex("g"), ex("s1"), named(RDF_TYPE), ex("BirthState")));
    // Outbound from s1: a generic relationship; the rdf:type above and the link back to
    // the parent entity are excluded.
    store.insert(quad(ex("g"), ex("s1"), ex("atLocation"), ex("place")));
    // Inbound into s1 from a typed subject, and from an untyped one (excluded).
    store.insert(quad(ex("g"), ex("observer"), named(RDF_TYPE), ex("Person")));
    store.insert(quad(ex("g"), ex("observer"), ex("observed"), ex("s1")));
    store.insert(quad(ex("g"), ex("shadow"), ex("observed"), ex("s1")));

    let state = states_of(&store).remove(0);
    let ctx = context(store);

    let rels = states::state_relationships(&ResolverEnv::new(&ctx, "relationships"), &state)
        .unwrap();
    assert_eq!(rels.len(), 2);
    assert_eq!(rels[0].predicate().uri(), "http://example.org/atLocation");
    assert_eq!(rels[0].node().uri(), "http://example.org/place");
    assert_eq!(rels[1].predicate().uri(), "http://example.org/observed");
    assert_eq!(rels[1].node().uri(), "http://example.org/observer");
}

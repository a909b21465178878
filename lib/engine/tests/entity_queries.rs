mod common;

use common::*;
use quadql_engine::model::EntityNode;
use quadql_engine::resolvers::entities;
use quadql_engine::{ResolverEnv, ResolverError};
use quadql_store::{DatasetSnapshot, MemoryQuadStore, PrefixMap, QuadStore};
use serde_json::json;
use std::sync::Arc;

const RDFS_CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";

fn typed_store() -> Arc<MemoryQuadStore> {
    let store = MemoryQuadStore::with_prefixes(
        [("ex", EX), ("rdfs", "http://www.w3.org/2000/01/rdf-schema#")]
            .into_iter()
            .collect::<PrefixMap>(),
    );
    store.insert(quad(ex("g"), ex("type"), named(RDF_TYPE), named(RDFS_CLASS)));
    for i in 1..=10 {
        store.insert(quad(
            ex("g"),
            ex(&format!("instances/{i}")),
            named(RDF_TYPE),
            ex("type"),
        ));
    }
    Arc::new(store)
}

fn entity(store: &Arc<MemoryQuadStore>, term: quadql_model::GraphTerm) -> EntityNode {
    let snapshot = store.snapshot();
    let prefixes = snapshot.prefixes().cloned().map(Arc::new);
    EntityNode::new(term, prefixes).unwrap()
}

#[test]
fn instances_of_a_type_are_distinct_entities() {
    let store = typed_store();
    // A duplicate statement must not produce a duplicate instance.
    store.insert(quad(ex("g"), ex("instances/1"), named(RDF_TYPE), ex("type")));
    let source = entity(&store, ex("type"));
    let ctx = context(store);

    let instances = entities::instances(&ResolverEnv::new(&ctx, "instances"), &source).unwrap();
    assert_eq!(instances.len(), 10);
    assert_eq!(instances[0].uri(), "http://example.org/instances/1");
    assert_eq!(instances[0].short_uri(), "ex:instances/1");
}

#[test]
fn types_of_a_type_entity() {
    let store = typed_store();
    let source = entity(&store, ex("type"));
    let ctx = context(store);

    let types = entities::node_types(&ResolverEnv::new(&ctx, "types"), &source).unwrap();
    assert_eq!(types.len(), 1);
    assert_eq!(types[0].uri(), RDFS_CLASS);
    assert_eq!(types[0].short_uri(), "rdfs:Class");
}

#[test]
fn all_entities_are_distinct_typed_subjects() {
    let store = typed_store();
    let ctx = context(store);

    let all = entities::all_entities(&ResolverEnv::new(&ctx, "nodes")).unwrap();
    // ex:type plus the ten instances.
    assert_eq!(all.len(), 11);
    assert!(all.iter().all(|e| !e.uri().is_empty()));
}

#[test]
fn all_entities_respects_the_graph_argument() {
    let store = typed_store();
    store.insert(quad(
        ex("other"),
        ex("elsewhere"),
        named(RDF_TYPE),
        named(RDFS_CLASS),
    ));
    let ctx = context(store);

    let scoped = ResolverEnv::new(&ctx, "nodes")
        .with_argument("graph", json!("http://example.org/other"));
    let all = entities::all_entities(&scoped).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].uri(), "http://example.org/elsewhere");
}

#[test]
fn starting_node_requires_local_presence() {
    let store = typed_store();
    let ctx = context(store);

    let present = ResolverEnv::new(&ctx, "node")
        .with_argument("uri", json!("http://example.org/type"));
    let node = entities::starting_node(&present).unwrap().unwrap();
    assert_eq!(node.uri(), "http://example.org/type");

    let absent = ResolverEnv::new(&ctx, "node")
        .with_argument("uri", json!("http://example.org/unknown"));
    assert!(entities::starting_node(&absent).unwrap().is_none());
}

#[test]
fn starting_nodes_keep_known_uris_in_order() {
    let store = typed_store();
    let ctx = context(store);

    let env = ResolverEnv::new(&ctx, "nodes").with_argument(
        "uris",
        json!([
            "http://example.org/instances/2",
            "http://example.org/unknown",
            "http://example.org/instances/2",
            "http://example.org/type"
        ]),
    );
    let nodes = entities::starting_nodes(&env).unwrap();
    let uris: Vec<_> = nodes.iter().map(EntityNode::uri).collect();
    assert_eq!(
        uris,
        vec!["http://example.org/instances/2", "http://example.org/type"]
    );
}

#[test]
fn starting_node_arguments_are_validated() {
    let store = typed_store();
    let ctx = context(store);

    let missing = ResolverEnv::new(&ctx, "node");
    assert!(matches!(
        entities::starting_node(&missing),
        Err(ResolverError::InvalidArgument(_))
    ));

    let wrong_type = ResolverEnv::new(&ctx, "node").with_argument("uri", json!(42));
    assert!(entities::starting_node(&wrong_type).is_err());

    let wrong_list = ResolverEnv::new(&ctx, "nodes")
        .with_argument("uris", json!("http://example.org/type"));
    assert!(entities::starting_nodes(&wrong_list).is_err());
}

#[test]
fn blank_node_uris_resolve_with_the_reserved_prefix() {
    let store = Arc::new(MemoryQuadStore::new());
    store.insert(quad(ex("g"), blank("b1"), named(RDF_TYPE), ex("type")));
    let ctx = context(store);

    let env = ResolverEnv::new(&ctx, "node").with_argument("uri", json!("_:b1"));
    let node = entities::starting_node(&env).unwrap().unwrap();
    assert_eq!(node.uri(), "_:b1");
}

#[test]
fn literal_properties_keep_only_literal_objects() {
    let store = typed_store();
    store.insert(quad(
        ex("g"),
        ex("type"),
        ex("label"),
        lang_literal("Der Typ", "de"),
    ));
    store.insert(quad(ex("g"), ex("type"), ex("seeAlso"), ex("other")));
    let source = entity(&store, ex("type"));
    let ctx = context(store);

    let properties =
        entities::literal_properties(&ResolverEnv::new(&ctx, "properties"), &source).unwrap();
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].short_predicate(), "ex:label");
    assert_eq!(properties[0].value(), "Der Typ");
    assert_eq!(properties[0].language(), Some("de"));
    assert_eq!(
        properties[0].datatype(),
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString"
    );
}

#[test]
fn outbound_relationships_match_the_subject_position() {
    let store = typed_store();
    store.insert(quad(ex("g"), ex("type"), ex("related"), ex("other")));
    store.insert(quad(ex("g"), ex("type"), ex("label"), string_literal("x")));
    let source = entity(&store, ex("type"));
    let ctx = context(store);

    let rels = entities::relationships(&ResolverEnv::new(&ctx, "outRels"), &source).unwrap();
    // The rdf:type statement and the entity-valued relationship; the literal is skipped.
    assert_eq!(rels.len(), 2);
    assert_eq!(rels[1].domain().uri(), "http://example.org/type");
    assert_eq!(rels[1].predicate(), "http://example.org/related");
    assert_eq!(rels[1].range().uri(), "http://example.org/other");
    assert_eq!(rels[1].id().len(), 64);
}

#[test]
fn in_relationships_match_the_final_pattern_position() {
    // The IN direction matches the node in the final (object) position of the pattern. A
    // quad carrying the node in its graph position must not surface as an inbound
    // relationship. This pins intentional behaviour; a change here needs sign-off.
    let store = Arc::new(MemoryQuadStore::new());
    store.insert(quad(ex("g"), ex("x"), ex("p"), ex("n")));
    store.insert(quad(ex("n"), ex("y"), ex("p"), ex("z")));
    let source = EntityNode::new(ex("n"), None).unwrap();
    let ctx = context(store);

    let rels = entities::relationships(&ResolverEnv::new(&ctx, "inRels"), &source).unwrap();
    assert_eq!(rels.len(), 1);
    assert_eq!(rels[0].domain().uri(), "http://example.org/x");
    assert_eq!(rels[0].range().uri(), "http://example.org/n");
}

#[test]
fn unknown_relationship_field_is_rejected() {
    let store = typed_store();
    let source = entity(&store, ex("type"));
    let ctx = context(store);
    assert!(entities::relationships(&ResolverEnv::new(&ctx, "rels"), &source).is_err());
}

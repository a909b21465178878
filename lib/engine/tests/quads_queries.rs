mod common;

use common::*;
use quadql_engine::resolvers::quads::{self, QuadView};
use quadql_engine::{ResolverEnv, SelectionSet};
use quadql_model::NodeKind;
use quadql_store::MemoryQuadStore;
use std::sync::Arc;

const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";

fn language_literal_store() -> Arc<MemoryQuadStore> {
    let store = MemoryQuadStore::new();
    store.insert(quad(
        ex("defaultGraph"),
        blank("b1"),
        named(RDFS_COMMENT),
        lang_literal("foo", "en-gb"),
    ));
    Arc::new(store)
}

#[test]
fn triple_selection_projects_language_literal_quad() {
    let store = language_literal_store();
    let ctx = context(store);
    let env = ResolverEnv::new(&ctx, "quads").with_selection(SelectionSet::new([
        "subject/kind",
        "predicate/kind",
        "predicate/value",
        "object/kind",
        "object/value",
        "object/language",
    ]));

    let views = quads::quads(&env).unwrap();
    assert_eq!(views.len(), 1);
    assert!(matches!(views[0], QuadView::Triple(_)));

    let subject = quads::node(&ResolverEnv::new(&ctx, "subject"), &views[0]).unwrap();
    assert_eq!(subject.kind(), NodeKind::Blank);

    let predicate = quads::node(&ResolverEnv::new(&ctx, "predicate"), &views[0]).unwrap();
    assert_eq!(predicate.kind(), NodeKind::Uri);
    assert_eq!(predicate.value(), Some(RDFS_COMMENT));

    let object = quads::node(&ResolverEnv::new(&ctx, "object"), &views[0]).unwrap();
    assert_eq!(object.kind(), NodeKind::LanguageLiteral);
    assert_eq!(object.value(), Some("foo"));
    assert_eq!(object.language(), Some("en-gb"));
}

#[test]
fn full_selection_returns_quads() {
    let store = language_literal_store();
    let ctx = context(store);
    let env = ResolverEnv::new(&ctx, "quads").with_selection(SelectionSet::new([
        "subject/kind",
        "predicate/kind",
        "object/kind",
        "graph/kind",
    ]));

    let views = quads::quads(&env).unwrap();
    assert_eq!(views.len(), 1);
    let QuadView::Quad(quad) = &views[0] else {
        panic!("expected a full quad");
    };
    assert_eq!(quad.graph, ex("defaultGraph"));

    let graph = quads::node(&ResolverEnv::new(&ctx, "graph"), &views[0]).unwrap();
    assert_eq!(graph.value(), Some("http://example.org/defaultGraph"));
}

#[test]
fn partial_selection_keeps_only_requested_positions() {
    let store = language_literal_store();
    let ctx = context(store);
    let env = ResolverEnv::new(&ctx, "quads")
        .with_selection(SelectionSet::new(["subject/kind", "graph/kind"]));

    let views = quads::quads(&env).unwrap();
    let QuadView::Partial(partial) = &views[0] else {
        panic!("expected a partial row");
    };
    assert_eq!(partial.get("subject"), Some(&blank("b1")));
    // The graph slot must carry the graph term, not a copy of the object.
    assert_eq!(partial.get("graph"), Some(&ex("defaultGraph")));
    assert_eq!(partial.get("object"), None);

    let object = quads::node(&ResolverEnv::new(&ctx, "object"), &views[0]);
    assert!(object.is_err());
}

#[test]
fn filters_narrow_the_stream() {
    let store = language_literal_store();
    store.insert(quad(
        ex("defaultGraph"),
        ex("other"),
        named(RDFS_COMMENT),
        string_literal("bar"),
    ));
    let ctx = context(store);

    let env = ResolverEnv::new(&ctx, "quads")
        .with_arguments(arguments(&[("subject", filter_for(&ex("other")))]))
        .with_selection(SelectionSet::new(["subject/kind", "object/value"]));
    let views = quads::quads(&env).unwrap();
    assert_eq!(views.len(), 1);

    let unfiltered = ResolverEnv::new(&ctx, "quads")
        .with_selection(SelectionSet::new(["subject/kind", "object/value"]));
    assert_eq!(quads::quads(&unfiltered).unwrap().len(), 2);
}

#[test]
fn node_rejects_unknown_fields() {
    let store = language_literal_store();
    let ctx = context(store);
    let env = ResolverEnv::new(&ctx, "quads").with_selection(SelectionSet::new([
        "subject/kind",
        "predicate/kind",
        "object/kind",
        "graph/kind",
    ]));
    let views = quads::quads(&env).unwrap();
    assert!(quads::node(&ResolverEnv::new(&ctx, "lexical"), &views[0]).is_err());
}

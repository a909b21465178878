use crate::ExecutionContext;
use quadql_model::JsonMap;
use serde_json::Value;
use std::collections::BTreeSet;

/// The sub-fields a GraphQL query actually selected beneath the current field.
///
/// Paths are `/`-separated as in `subject/kind`. [`SelectionSet::contains`] answers the
/// "was anything under this field requested" question resolvers use to avoid materializing
/// unrequested positions.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    paths: BTreeSet<String>,
}

impl SelectionSet {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns whether `field` itself or any sub-path of it was selected.
    pub fn contains(&self, field: &str) -> bool {
        self.paths
            .iter()
            .any(|path| path == field || path.strip_prefix(field).is_some_and(|r| r.starts_with('/')))
    }
}

/// Everything the GraphQL engine hands a resolver for one field resolution.
///
/// Mirrors the engine-side data-fetching environment: the field being resolved, its arguments,
/// the requested sub-selection, and the per-query [`ExecutionContext`]. The `source` (the parent
/// resolver's result) is passed to resolvers as a typed parameter instead of living here.
pub struct ResolverEnv<'a> {
    context: &'a ExecutionContext,
    field_name: &'a str,
    arguments: JsonMap,
    selection: SelectionSet,
}

impl<'a> ResolverEnv<'a> {
    pub fn new(context: &'a ExecutionContext, field_name: &'a str) -> Self {
        Self {
            context,
            field_name,
            arguments: JsonMap::new(),
            selection: SelectionSet::empty(),
        }
    }

    pub fn with_arguments(mut self, arguments: JsonMap) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }

    pub fn with_selection(mut self, selection: SelectionSet) -> Self {
        self.selection = selection;
        self
    }

    pub fn context(&self) -> &ExecutionContext {
        self.context
    }

    pub fn field_name(&self) -> &str {
        self.field_name
    }

    /// The raw argument value, with JSON `null` normalized to absent.
    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments.get(name).filter(|v| !v.is_null())
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }
}

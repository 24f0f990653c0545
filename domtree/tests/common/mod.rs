#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use domtree::{
    Children, DomTree, Element, MemberProvider, ProviderError, Reflect, Resolver, RowId, deferred,
};

/// An opaque handle standing in for a remote object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Handle(pub &'static str);

impl Reflect for Handle {}

#[derive(Default)]
struct GraphState {
    edges: HashMap<&'static str, Vec<&'static str>>,
    deferred: HashSet<&'static str>,
    failing: HashSet<&'static str>,
    resolvers: Vec<(&'static str, Resolver<Handle>)>,
    fetches: HashMap<&'static str, usize>,
}

/// In-memory provider over a graph of named handles.
///
/// Clones share state, so a test can keep one clone to mutate the graph,
/// resolve deferred fetches and count fetch calls after handing another to
/// the tree.
#[derive(Clone, Default)]
pub struct GraphProvider {
    state: Rc<RefCell<GraphState>>,
}

impl GraphProvider {
    pub fn new(edges: &[(&'static str, &[&'static str])]) -> Self {
        let provider = Self::default();
        for (parent, children) in edges {
            provider.set_children(parent, children);
        }
        provider
    }

    pub fn set_children(&self, parent: &'static str, children: &[&'static str]) {
        self.state.borrow_mut().edges.insert(parent, children.to_vec());
    }

    /// Answer fetches for `name` with a pending result.
    pub fn defer(&self, name: &'static str) {
        self.state.borrow_mut().deferred.insert(name);
    }

    /// Fail fetches for `name`.
    pub fn fail(&self, name: &'static str) {
        self.state.borrow_mut().failing.insert(name);
    }

    pub fn fetch_count(&self, name: &'static str) -> usize {
        self.state.borrow().fetches.get(name).copied().unwrap_or(0)
    }

    /// Take the resolver of the oldest outstanding deferred fetch for `name`.
    pub fn take_resolver(&self, name: &'static str) -> Option<Resolver<Handle>> {
        let mut state = self.state.borrow_mut();
        let index = state.resolvers.iter().position(|(n, _)| *n == name)?;
        Some(state.resolvers.remove(index).1)
    }

    fn children_of(&self, name: &str) -> Vec<Handle> {
        self.state
            .borrow()
            .edges
            .get(name)
            .map(|c| c.iter().copied().map(Handle).collect())
            .unwrap_or_default()
    }
}

impl MemberProvider<Handle> for GraphProvider {
    fn children(&self, value: &Handle) -> Result<Children<Handle>, ProviderError> {
        let mut state = self.state.borrow_mut();
        *state.fetches.entry(value.0).or_default() += 1;

        if state.failing.contains(value.0) {
            return Err(ProviderError::failed(format!("cannot read {}", value.0)));
        }
        if state.deferred.contains(value.0) {
            let (resolver, pending) = deferred();
            state.resolvers.push((value.0, resolver));
            return Ok(Children::Pending(pending));
        }
        drop(state);
        Ok(Children::Ready(self.children_of(value.0)))
    }

    fn has_children(&self, value: &Handle) -> Result<bool, ProviderError> {
        let state = self.state.borrow();
        if state.failing.contains(value.0) {
            return Err(ProviderError::failed("unreachable"));
        }
        Ok(state.deferred.contains(value.0)
            || state.edges.get(value.0).is_some_and(|c| !c.is_empty()))
    }

    fn label(&self, value: &Handle) -> Result<String, ProviderError> {
        Ok(value.0.to_string())
    }

    fn kind(&self, _value: &Handle) -> Result<Option<String>, ProviderError> {
        Ok(Some("node".to_string()))
    }
}

/// Build and render a tree without auto-expansion.
pub fn rendered(root: &'static str, provider: &GraphProvider) -> DomTree<Handle> {
    let mut tree = DomTree::with_provider(Handle(root), provider.clone());
    tree.render(Element::new("table"), None, true);
    tree
}

/// Visible row names in display order.
pub fn names(tree: &DomTree<Handle>) -> Vec<String> {
    tree.members().map(|m| m.name.clone()).collect()
}

/// Visible (name, level) pairs in display order.
pub fn layout(tree: &DomTree<Handle>) -> Vec<(String, u16)> {
    tree.members().map(|m| (m.name.clone(), m.level)).collect()
}

pub fn row(tree: &DomTree<Handle>, name: &'static str) -> RowId {
    tree.get_row(&Handle(name))
        .unwrap_or_else(|| panic!("no row for {name}"))
}

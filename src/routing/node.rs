//! Route tree node model.
//!
//! A `RouteNode` declares one addressable path segment: its pattern, a
//! unique symbolic name, the view it renders, the props handed to that
//! view, and any nested children. Children use patterns relative to the
//! parent; a branch always carries an empty-path "default" child that is
//! rendered when the branch itself is the navigation target.

use crate::views::ViewName;

/// A single prop value passed into a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropValue {
    Text(String),
    Flag(bool),
}

impl PropValue {
    pub fn text(value: &str) -> Self {
        PropValue::Text(value.to_string())
    }
}

/// Props attached to a route node.
///
/// Either a fixed mapping declared with the route, or a pure function of
/// the concrete matched path (used to derive the profile tab identifier).
#[derive(Debug, Clone)]
pub enum Props {
    Static(Vec<(String, PropValue)>),
    Derived(fn(&str) -> Vec<(String, PropValue)>),
}

/// One addressable node in the route tree.
#[derive(Debug, Clone)]
pub struct RouteNode {
    /// Path pattern. Absolute for root nodes ("/workouts/:workoutId"),
    /// relative for children ("preferences", "" for the default child).
    pub path: String,

    /// Symbolic identifier, unique across the whole tree.
    pub name: String,

    /// The view module this node renders, resolved lazily on navigation.
    pub view: ViewName,

    /// Props passed to the view, if any.
    pub props: Option<Props>,

    /// Ordered child nodes.
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    pub fn new(path: &str, name: &str, view: ViewName) -> Self {
        Self {
            path: path.to_string(),
            name: name.to_string(),
            view,
            props: None,
            children: Vec::new(),
        }
    }

    /// Attach a fixed prop mapping.
    pub fn props_static(mut self, props: &[(&str, PropValue)]) -> Self {
        self.props = Some(Props::Static(
            props
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        ));
        self
    }

    /// Attach a prop function of the matched path.
    pub fn props_derived(mut self, derive: fn(&str) -> Vec<(String, PropValue)>) -> Self {
        self.props = Some(Props::Derived(derive));
        self
    }

    pub fn child(mut self, node: RouteNode) -> Self {
        self.children.push(node);
        self
    }

    /// The empty-path child rendered when this branch is the target.
    pub fn default_child(&self) -> Option<&RouteNode> {
        self.children.iter().find(|c| c.path.is_empty())
    }

    /// Depth-first walk over this node and all descendants.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a RouteNode)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

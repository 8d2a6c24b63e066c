use std::collections::HashMap;

use crate::view::{AnonymousChildProvider, ClassResolver, StructuralView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Class declared directly in a package (`qualified_name` is dotted).
    TopLevel { qualified_name: String },
    /// Named class declared as a member of its parent class.
    Member { name: String },
    /// Named class declared inside a method body or block.
    Local { name: String },
    Anonymous,
    /// Non-class syntax node: method, initializer, lambda body, block.
    Scope { label: String },
}

impl NodeKind {
    pub fn is_class(&self) -> bool {
        !matches!(self, NodeKind::Scope { .. })
    }
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// In-memory class structure for callers that have no syntax tree of their own.
///
/// Nodes are appended in declaration order; child order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct ClassTree {
    nodes: Vec<NodeData>,
    top_level: HashMap<String, NodeId>,
}

impl ClassTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `None` for ids minted by a different tree.
    pub fn kind(&self, node: NodeId) -> Option<&NodeKind> {
        self.nodes.get(node.index()).map(|data| &data.kind)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.index()).and_then(|data| data.parent)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node.index())
            .map_or(&[], |data| data.children.as_slice())
    }

    pub fn add_top_level(&mut self, qualified_name: impl Into<String>) -> NodeId {
        let qualified_name = qualified_name.into();
        let id = self.push(
            NodeKind::TopLevel {
                qualified_name: qualified_name.clone(),
            },
            None,
        );
        self.top_level.insert(qualified_name, id);
        id
    }

    pub fn add_member_class(&mut self, container: NodeId, name: impl Into<String>) -> NodeId {
        self.push(NodeKind::Member { name: name.into() }, Some(container))
    }

    pub fn add_local_class(&mut self, parent: NodeId, name: impl Into<String>) -> NodeId {
        self.push(NodeKind::Local { name: name.into() }, Some(parent))
    }

    pub fn add_anonymous_class(&mut self, parent: NodeId) -> NodeId {
        self.push(NodeKind::Anonymous, Some(parent))
    }

    /// Add a non-class node. A `None` parent creates a detached scope.
    ///
    /// # Panics
    ///
    /// Like every `add_*` method, panics if `parent` does not belong to this tree.
    pub fn add_scope(&mut self, parent: Option<NodeId>, label: impl Into<String>) -> NodeId {
        self.push(NodeKind::Scope { label: label.into() }, parent)
    }

    fn push(&mut self, kind: NodeKind, parent: Option<NodeId>) -> NodeId {
        if let Some(parent) = parent {
            assert!(
                parent.index() < self.nodes.len(),
                "parent node belongs to another ClassTree"
            );
        }
        let raw = u32::try_from(self.nodes.len()).expect("too many class tree nodes");
        let id = NodeId(raw);
        self.nodes.push(NodeData {
            kind,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent.index()].children.push(id);
        }
        id
    }

    fn collect_anonymous(&self, node: NodeId, out: &mut Vec<NodeId>) {
        for &child in self.children(node) {
            match self.kind(child) {
                Some(NodeKind::Anonymous | NodeKind::Local { .. }) => out.push(child),
                // Classes nested in another class number their own anonymous classes.
                Some(NodeKind::Member { .. } | NodeKind::TopLevel { .. }) | None => {}
                Some(NodeKind::Scope { .. }) => self.collect_anonymous(child, out),
            }
        }
    }
}

impl StructuralView for ClassTree {
    type Node = NodeId;

    fn containing_class(&self, node: &NodeId) -> Option<NodeId> {
        match self.kind(*node)? {
            NodeKind::Member { .. } => self.parent(*node),
            _ => None,
        }
    }

    fn lexical_parent(&self, node: &NodeId) -> Option<NodeId> {
        self.parent(*node)
    }

    fn is_class(&self, node: &NodeId) -> bool {
        self.kind(*node).is_some_and(NodeKind::is_class)
    }

    fn simple_name(&self, node: &NodeId) -> Option<String> {
        match self.kind(*node)? {
            NodeKind::TopLevel { qualified_name } => Some(
                qualified_name
                    .rsplit_once('.')
                    .map_or(qualified_name.as_str(), |(_, simple)| simple)
                    .to_string(),
            ),
            NodeKind::Member { name } | NodeKind::Local { name } => Some(name.clone()),
            NodeKind::Anonymous | NodeKind::Scope { .. } => None,
        }
    }

    fn top_level_name(&self, node: &NodeId) -> Option<String> {
        match self.kind(*node)? {
            NodeKind::TopLevel { qualified_name } => Some(qualified_name.clone()),
            _ => None,
        }
    }
}

impl AnonymousChildProvider<ClassTree> for ClassTree {
    fn anonymous_children_of(&self, _view: &ClassTree, container: &NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        if self.is_class(container) {
            self.collect_anonymous(*container, &mut out);
        }
        out
    }
}

impl ClassResolver for ClassTree {
    fn find_top_level_class(&self, qualified_name: &str) -> Option<NodeId> {
        self.top_level.get(qualified_name).copied()
    }

    fn find_member_class(&self, container: &NodeId, simple_name: &str) -> Option<NodeId> {
        self.children(*container).iter().copied().find(|child| {
            matches!(self.kind(*child), Some(NodeKind::Member { name }) if name == simple_name)
        })
    }
}

//! Tree Node Model
//!
//! Every entry in the virtual file system is a `Node`, whether it is a file
//! or a directory. Directory nodes carry the synthetic `.` and `..` entries
//! as ordinary children, so path walking needs no special cases.

use indexmap::IndexMap;

use super::types::{NodeId, NodeKind, Permissions};

/// A single vertex of the file system tree.
#[derive(Debug, Clone)]
pub struct Node {
    kind: NodeKind,
    name: String,
    parent: NodeId,
    children: IndexMap<String, NodeId>,
    content: Option<Vec<u8>>,
    permissions: Permissions,
    child_count: usize,
}

impl Node {
    pub(crate) fn new(kind: NodeKind, name: &str, parent: NodeId) -> Self {
        Self {
            kind,
            name: name.to_string(),
            parent,
            children: IndexMap::new(),
            content: None,
            permissions: Permissions::none(),
            child_count: 0,
        }
    }

    /// Insert a child under `name`. A colliding name overwrites the existing
    /// entry silently; the running child count still advances.
    pub fn add_child(&mut self, name: &str, child: NodeId) {
        self.children.insert(name.to_string(), child);
        self.child_count += 1;
    }

    pub fn child(&self, name: &str) -> Option<NodeId> {
        self.children.get(name).copied()
    }

    pub(crate) fn remove_child(&mut self, name: &str) -> Option<NodeId> {
        self.children.shift_remove(name)
    }

    /// All child names, synthetic entries included, in insertion order.
    pub fn child_names(&self) -> Vec<&str> {
        self.children.keys().map(String::as_str).collect()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, NodeId)> {
        self.children.iter().map(|(name, id)| (name.as_str(), *id))
    }

    pub fn child_count(&self) -> usize {
        self.child_count
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> NodeId {
        self.parent
    }

    pub fn permissions(&self) -> Permissions {
        self.permissions
    }

    pub fn set_permissions(&mut self, permissions: Permissions) {
        self.permissions = permissions;
    }

    pub fn content(&self) -> Option<&[u8]> {
        self.content.as_deref()
    }

    pub fn set_content(&mut self, content: Vec<u8>) {
        self.content = Some(content);
    }

    /// Drop children and payload when the node leaves the tree.
    pub(crate) fn clear(&mut self) {
        self.children.clear();
        self.content = None;
    }
}

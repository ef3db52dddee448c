//! Virtual File System
//!
//! Owns the node arena, the root node, and the current working node, and
//! provides the node lifecycle: creation, lookup, and removal. All links in
//! the tree are arena ids, so the cyclic `.`/`..`/root references never form
//! ownership loops. Arena slots of removed nodes are cleared but not reused;
//! the arena lives only as long as one interactive session.

use log::debug;

use super::node::Node;
use super::path::{resolve, Resolution};
use super::types::{FsError, NodeId, NodeKind, Permissions};

/// Presentation-metadata files seeded into every directory at creation.
/// They are ordinary hidden children, opaque to the tree logic.
const AUX_ENTRIES: [&str; 2] = [".css", ".html"];

pub struct Vfs {
    nodes: Vec<Node>,
    root: NodeId,
    cwd: NodeId,
}

impl Vfs {
    pub fn new() -> Self {
        let mut vfs = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            cwd: NodeId(0),
        };
        let root = vfs.new_node(NodeKind::Directory, "/", None);
        vfs.node_mut(root).set_permissions(Permissions::read_only());
        vfs.root = root;
        vfs.cwd = root;
        vfs
    }

    /// Construct a node without attaching it to any parent; attachment is the
    /// caller's responsibility. Directories are seeded with `.`, `..`
    /// (pointing back at `parent`, or at the node itself when there is none),
    /// and the fixed auxiliary metadata entries.
    pub fn new_node(&mut self, kind: NodeKind, name: &str, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let up = parent.unwrap_or(id);
        self.nodes.push(Node::new(kind, name, up));

        if kind.is_directory() {
            self.node_mut(id).add_child(".", id);
            self.node_mut(id).add_child("..", up);
            for aux in AUX_ENTRIES {
                let file = self.new_node(NodeKind::File, aux, Some(id));
                self.node_mut(file).set_permissions(Permissions::read_only());
                self.node_mut(id).add_child(aux, file);
            }
        }

        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn cwd(&self) -> NodeId {
        self.cwd
    }

    pub fn set_cwd(&mut self, id: NodeId) {
        self.cwd = id;
    }

    /// Resolve a path relative to the current working node.
    pub fn resolve(&self, path: &str) -> Resolution {
        resolve(self, self.cwd, path)
    }

    /// Lookup that keeps only the fully-resolved outcome.
    pub fn get_file(&self, path: &str) -> Option<NodeId> {
        match self.resolve(path) {
            Resolution::Found(id) => Some(id),
            _ => None,
        }
    }

    /// Create a node of `kind` at `path` with read/write permissions.
    pub fn create_at(&mut self, path: &str, kind: NodeKind) -> Result<NodeId, FsError> {
        match self.resolve(path) {
            Resolution::Found(_) => Err(FsError::AlreadyExists { path: path.to_string() }),
            Resolution::NotFound => Err(FsError::NotFound { path: path.to_string() }),
            Resolution::Creatable { parent, name } => {
                let id = self.new_node(kind, &name, Some(parent));
                self.node_mut(id).set_permissions(Permissions::read_write());
                self.node_mut(parent).add_child(&name, id);
                debug!("created {:?} '{}'", kind, name);
                Ok(id)
            }
        }
    }

    /// Remove a node and its entire subtree. Requires the write capability on
    /// the node itself; on failure the tree is left untouched. Directory
    /// removal takes the whole subtree with it, without confirmation.
    pub fn remove_file(&mut self, id: NodeId) -> Result<(), FsError> {
        let node = self.node(id);
        if !node.permissions().write {
            return Err(FsError::PermissionDenied { path: node.name().to_string() });
        }

        let name = node.name().to_string();
        let parent = node.parent();
        if self.node(parent).child(&name) == Some(id) {
            self.node_mut(parent).remove_child(&name);
        }
        self.release(id);
        debug!("removed '{}'", name);
        Ok(())
    }

    /// Clear every node of a detached subtree. `.` and `..` entries are
    /// skipped during the walk; they point back into the subtree or at its
    /// former parent.
    fn release(&mut self, id: NodeId) {
        let mut stack = vec![id];
        let mut released: Vec<NodeId> = Vec::new();
        while let Some(next) = stack.pop() {
            if released.contains(&next) {
                continue;
            }
            released.push(next);
            for (name, child) in self.node(next).entries() {
                if name == "." || name == ".." {
                    continue;
                }
                stack.push(child);
            }
        }
        for node_id in &released {
            self.node_mut(*node_id).clear();
        }
        if released.contains(&self.cwd) {
            self.cwd = self.root;
        }
    }

    /// Absolute path of a node, collected by walking parent links up to the
    /// root. The root itself prints as `/`.
    pub fn path_of(&self, id: NodeId) -> String {
        let mut names = Vec::new();
        let mut current = id;
        while current != self.root {
            names.push(self.node(current).name().to_string());
            current = self.node(current).parent();
        }
        names.reverse();
        format!("/{}", names.join("/"))
    }
}

impl Default for Vfs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_links_point_at_root() {
        let vfs = Vfs::new();
        let root = vfs.root();
        assert_eq!(vfs.node(root).child("."), Some(root));
        assert_eq!(vfs.node(root).child(".."), Some(root));
        assert_eq!(vfs.node(root).parent(), root);
        assert_eq!(vfs.path_of(root), "/");
    }

    #[test]
    fn test_new_directory_is_seeded() {
        let mut vfs = Vfs::new();
        let docs = vfs.create_at("docs", NodeKind::Directory).unwrap();
        assert_eq!(vfs.node(docs).child_names(), vec![".", "..", ".css", ".html"]);
        assert_eq!(vfs.node(docs).child("."), Some(docs));
        assert_eq!(vfs.node(docs).child(".."), Some(vfs.root()));
    }

    #[test]
    fn test_new_file_has_no_synthetic_children() {
        let mut vfs = Vfs::new();
        let file = vfs.create_at("notes.txt", NodeKind::File).unwrap();
        assert!(vfs.node(file).child_names().is_empty());
        assert_eq!(vfs.node(file).parent(), vfs.root());
    }

    #[test]
    fn test_create_grants_read_write() {
        let mut vfs = Vfs::new();
        let docs = vfs.create_at("docs", NodeKind::Directory).unwrap();
        assert_eq!(vfs.node(docs).permissions(), Permissions::read_write());
    }

    #[test]
    fn test_create_with_missing_parent_fails() {
        let mut vfs = Vfs::new();
        let err = vfs.create_at("/a/b", NodeKind::Directory).unwrap_err();
        assert_eq!(err, FsError::NotFound { path: "/a/b".to_string() });
    }

    #[test]
    fn test_create_existing_fails() {
        let mut vfs = Vfs::new();
        vfs.create_at("/a", NodeKind::Directory).unwrap();
        let err = vfs.create_at("/a", NodeKind::Directory).unwrap_err();
        assert_eq!(err, FsError::AlreadyExists { path: "/a".to_string() });
    }

    #[test]
    fn test_get_file_walks_dots() {
        let mut vfs = Vfs::new();
        vfs.create_at("/a", NodeKind::Directory).unwrap();
        let b = vfs.create_at("/a/b", NodeKind::Directory).unwrap();
        assert_eq!(vfs.get_file("/a/../a/./b"), Some(b));
        assert_eq!(vfs.get_file("/a/missing"), None);
    }

    #[test]
    fn test_remove_requires_write_permission() {
        let mut vfs = Vfs::new();
        let file = vfs.create_at("notes.txt", NodeKind::File).unwrap();
        vfs.node_mut(file).set_permissions(Permissions::read_only());

        let err = vfs.remove_file(file).unwrap_err();
        assert_eq!(err, FsError::PermissionDenied { path: "notes.txt".to_string() });
        // Denied removal leaves the entry in place.
        assert_eq!(vfs.get_file("notes.txt"), Some(file));
    }

    #[test]
    fn test_remove_detaches_entry() {
        let mut vfs = Vfs::new();
        let file = vfs.create_at("notes.txt", NodeKind::File).unwrap();
        vfs.remove_file(file).unwrap();
        assert_eq!(vfs.get_file("notes.txt"), None);
    }

    #[test]
    fn test_remove_directory_takes_subtree() {
        let mut vfs = Vfs::new();
        let a = vfs.create_at("/a", NodeKind::Directory).unwrap();
        vfs.create_at("/a/b", NodeKind::Directory).unwrap();
        vfs.create_at("/a/b/deep.txt", NodeKind::File).unwrap();

        vfs.remove_file(a).unwrap();
        assert_eq!(vfs.get_file("/a"), None);
        assert_eq!(vfs.get_file("/a/b"), None);
        assert_eq!(vfs.get_file("/a/b/deep.txt"), None);
    }

    #[test]
    fn test_remove_cwd_resets_to_root() {
        let mut vfs = Vfs::new();
        let a = vfs.create_at("/a", NodeKind::Directory).unwrap();
        vfs.set_cwd(a);
        vfs.remove_file(a).unwrap();
        assert_eq!(vfs.cwd(), vfs.root());
    }

    #[test]
    fn test_root_is_not_removable() {
        let mut vfs = Vfs::new();
        let root = vfs.root();
        assert!(matches!(
            vfs.remove_file(root),
            Err(FsError::PermissionDenied { .. })
        ));
    }

    #[test]
    fn test_path_of_round_trip() {
        let mut vfs = Vfs::new();
        vfs.create_at("/a", NodeKind::Directory).unwrap();
        vfs.create_at("/a/b", NodeKind::Directory).unwrap();
        let c = vfs.create_at("/a/b/c", NodeKind::Directory).unwrap();

        let path = vfs.path_of(c);
        assert_eq!(path, "/a/b/c");
        // The collected path resolves back to the same node.
        assert_eq!(vfs.get_file(&path), Some(c));
    }

    #[test]
    fn test_parent_link_fixed_at_creation() {
        let mut vfs = Vfs::new();
        let a = vfs.create_at("/a", NodeKind::Directory).unwrap();
        let b = vfs.create_at("/a/b", NodeKind::Directory).unwrap();
        assert_eq!(vfs.node(b).parent(), a);
        assert_eq!(vfs.node(b).child(".."), Some(a));
    }
}

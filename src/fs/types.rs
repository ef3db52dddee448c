//! File System Types
//!
//! Core types shared across the virtual file system.

use thiserror::Error;

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("{path}: no such file or directory")]
    NotFound { path: String },

    #[error("{path}: File exists")]
    AlreadyExists { path: String },

    #[error("{path}: is a directory")]
    IsDirectory { path: String },

    #[error("{path}: not a directory")]
    NotDirectory { path: String },

    #[error("cannot remove '{path}': permission denied")]
    PermissionDenied { path: String },
}

/// Kind of a node, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
}

impl NodeKind {
    pub fn is_directory(self) -> bool {
        matches!(self, NodeKind::Directory)
    }

    pub fn is_file(self) -> bool {
        matches!(self, NodeKind::File)
    }
}

/// Index of a node in the arena owned by [`crate::fs::Vfs`].
///
/// Child and parent links are stored as ids rather than owning pointers,
/// which keeps the `.`/`..`/root cycles free of ownership loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// Capability flags carried by every node. An absent flag means the
/// capability is denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Permissions {
    pub read: bool,
    pub write: bool,
}

impl Permissions {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn read_only() -> Self {
        Self { read: true, write: false }
    }

    pub fn read_write() -> Self {
        Self { read: true, write: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FsError::NotFound { path: "a/b".to_string() };
        assert_eq!(err.to_string(), "a/b: no such file or directory");

        let err = FsError::AlreadyExists { path: "docs".to_string() };
        assert_eq!(err.to_string(), "docs: File exists");

        let err = FsError::PermissionDenied { path: "notes.txt".to_string() };
        assert_eq!(err.to_string(), "cannot remove 'notes.txt': permission denied");
    }

    #[test]
    fn test_node_kind() {
        assert!(NodeKind::Directory.is_directory());
        assert!(!NodeKind::Directory.is_file());
        assert!(NodeKind::File.is_file());
    }

    #[test]
    fn test_permissions() {
        assert!(!Permissions::none().read);
        assert!(Permissions::read_only().read);
        assert!(!Permissions::read_only().write);
        assert!(Permissions::read_write().write);
    }
}

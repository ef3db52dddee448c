//! Virtual File System
//!
//! An in-memory tree of file and directory nodes with POSIX-style path
//! resolution. Nothing here touches a real disk; the tree is rebuilt fresh
//! for every session.

pub mod node;
pub mod path;
pub mod types;
pub mod vfs;

pub use node::Node;
pub use path::{resolve, split_segments, Resolution};
pub use types::{FsError, NodeId, NodeKind, Permissions};
pub use vfs::Vfs;

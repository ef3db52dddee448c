//! Path Resolution
//!
//! Walks a node tree along a slash-delimited path. `.` and `..` are ordinary
//! children seeded at directory creation, so every segment is looked up the
//! same way through the children map.

use super::types::NodeId;
use super::vfs::Vfs;

/// Outcome of resolving a path against the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Every segment was found; the path denotes this node.
    Found(NodeId),
    /// All segments except the last were found. Create operations use the
    /// parent node plus the pending name to insert a new entry.
    Creatable { parent: NodeId, name: String },
    /// An intermediate segment was missing; the path carries no usable parent.
    NotFound,
}

/// Split a path on `/`, dropping empty segments. Handles leading, trailing,
/// and repeated slashes in one pass.
pub fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

/// Resolve `path` starting from `start`, or from the root when the path is
/// absolute. An empty path (after segment stripping) resolves to the start
/// node itself.
pub fn resolve(vfs: &Vfs, start: NodeId, path: &str) -> Resolution {
    let start = if path.starts_with('/') { vfs.root() } else { start };
    let segments = split_segments(path);

    let mut current = start;
    for (index, segment) in segments.iter().enumerate() {
        match vfs.node(current).child(segment) {
            Some(next) => current = next,
            None if index + 1 == segments.len() => {
                return Resolution::Creatable {
                    parent: current,
                    name: (*segment).to_string(),
                };
            }
            None => return Resolution::NotFound,
        }
    }

    Resolution::Found(current)
}

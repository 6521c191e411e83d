use log::{trace, warn};

use crate::config::SEPARATOR;
use crate::core::error::FsError;

/// Handle to a node stored in a [`VirtualFs`].
///
/// Handles are only meaningful for the filesystem that issued them. Nodes are
/// never removed, so a handle stays valid for the lifetime of its filesystem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Kind of a node. Only directories exist today; lookups that should only see
/// directories match on this instead of assuming it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
}

#[derive(Clone, Debug)]
struct DirectoryNode {
    name: String,
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// In-memory directory tree.
///
/// Nodes live in an arena and refer to each other by [`NodeId`]. Ownership
/// flows from parent to child; `parent` links are plain handles used for `..`
/// and path rendering.
///
/// # Invariants
///
/// - Node 0 is the root and is the only node without a parent.
/// - A node's parent lists it in `children`, in insertion order.
#[derive(Clone, Debug)]
pub struct VirtualFs {
    nodes: Vec<DirectoryNode>,
}

impl VirtualFs {
    /// Create a filesystem holding only the root directory.
    pub fn new() -> Self {
        Self {
            nodes: vec![DirectoryNode {
                name: SEPARATOR.to_string(),
                kind: NodeKind::Directory,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Create the startup skeleton: `/<home_root>/<user>/{dirs...}`.
    ///
    /// Returns the filesystem and the user's home directory. Seed directories
    /// go through [`make_dir`](Self::make_dir); rejected ones are skipped.
    pub fn seeded(home_root: &str, user: &str, dirs: &[String]) -> (Self, NodeId) {
        let mut fs = Self::new();
        let home = fs.create_node(home_root, fs.root());
        let user_dir = fs.create_node(user, home);
        for dir in dirs {
            if let Err(err) = fs.make_dir(user_dir, dir) {
                warn!("skipping seed directory: {err}");
            }
        }
        (fs, user_dir)
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node(&self, id: NodeId) -> &DirectoryNode {
        &self.nodes[id.0]
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.node(id).name
    }

    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.node(id).kind
    }

    pub fn is_directory(&self, id: NodeId) -> bool {
        matches!(self.kind(id), NodeKind::Directory)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Children of a node in insertion order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Allocate a new directory under `parent` and link it in.
    ///
    /// Does not check for name collisions; see [`make_dir`](Self::make_dir).
    pub fn create_node(&mut self, name: &str, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(DirectoryNode {
            name: name.to_string(),
            kind: NodeKind::Directory,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Create a directory named `name` under `parent`.
    ///
    /// Rejects names containing the separator and names already used by any
    /// child of `parent`, whatever its kind. Nothing is created on error.
    pub fn make_dir(&mut self, parent: NodeId, name: &str) -> Result<NodeId, FsError> {
        if name.contains(SEPARATOR) {
            return Err(FsError::InvalidName(name.to_string()));
        }
        if self.child_named(parent, name).is_some() {
            return Err(FsError::AlreadyExists(name.to_string()));
        }
        Ok(self.create_node(name, parent))
    }

    /// Find a child of any kind by exact name.
    pub fn child_named(&self, id: NodeId, name: &str) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|&child| self.name(child) == name)
    }

    /// Find a directory child by exact name.
    pub fn child_dir(&self, id: NodeId, name: &str) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|&child| self.is_directory(child) && self.name(child) == name)
    }

    /// Names of the directory children of `id`, sorted ascending.
    pub fn list_dirs(&self, id: NodeId) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .children(id)
            .iter()
            .filter(|&&child| self.is_directory(child))
            .map(|&child| self.name(child))
            .collect();
        names.sort_unstable();
        names
    }

    /// Absolute path of a node, e.g. `/home/user`. The root renders as `/`.
    pub fn path_of(&self, id: NodeId) -> String {
        let mut segments = Vec::new();
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            segments.push(self.name(current));
            current = parent;
        }

        let mut path = String::new();
        for segment in segments.iter().rev() {
            path.push(SEPARATOR);
            path.push_str(segment);
        }
        if path.is_empty() {
            path.push(SEPARATOR);
        }
        path
    }

    /// Resolve `path` to a directory, starting from `current` for relative
    /// paths and from the root for absolute ones.
    ///
    /// - Empty path returns `current`.
    /// - Empty segments are skipped, so `a//b/` equals `a/b`.
    /// - `.` stays put; `..` moves to the parent and is a no-op at the root.
    /// - Any other segment must name a directory child, otherwise `None`.
    pub fn resolve(&self, path: &str, current: NodeId) -> Option<NodeId> {
        if path.is_empty() {
            return Some(current);
        }

        let mut target = if path.starts_with(SEPARATOR) {
            self.root()
        } else {
            current
        };

        for segment in path.split(SEPARATOR).filter(|s| !s.is_empty()) {
            target = match segment {
                "." => target,
                ".." => self.parent(target).unwrap_or(target),
                name => match self.child_dir(target, name) {
                    Some(child) => child,
                    None => {
                        trace!("resolve {path:?}: no directory {name:?}");
                        return None;
                    }
                },
            };
        }

        Some(target)
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::new()
    }
}

//! Scene hierarchy nodes.

use nalgebra::Matrix4;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node in the scene hierarchy.
///
/// Nodes own their children. Mesh references are indices into
/// [`Scene::meshes`](crate::Scene::meshes) and do not own the meshes.
///
/// Dropping a node releases its subtree iteratively, so hierarchies of any
/// depth can be freed. `Clone`, `PartialEq` and the serde impls still recurse
/// once per level.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    /// Node name, may be empty.
    pub name: String,
    /// Transform relative to the parent node.
    pub transform: Matrix4<f64>,
    /// Indices of the meshes drawn at this node.
    pub meshes: Vec<u32>,
    /// Child nodes.
    pub children: Vec<Node>,
}

impl Node {
    /// Create a node with an identity transform, no meshes and no children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Matrix4::identity(),
            meshes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style helper setting the mesh references.
    #[must_use]
    pub fn with_meshes(mut self, meshes: Vec<u32>) -> Self {
        self.meshes = meshes;
        self
    }

    /// Builder-style helper appending a child.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// Find the first node named `name` in this subtree (pre-order).
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Self> {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.name == name {
                return Some(node);
            }
            stack.extend(node.children.iter().rev());
        }
        None
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

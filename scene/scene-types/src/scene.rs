//! The scene container.

use crate::{Animation, Mesh, Node};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An imported scene.
///
/// Owns all meshes and animations along with the root of the node
/// hierarchy. Nodes reference meshes by their position in `meshes`.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scene {
    /// All meshes in the scene.
    pub meshes: Vec<Mesh>,
    /// All animations in the scene.
    pub animations: Vec<Animation>,
    /// Root of the node hierarchy.
    pub root: Node,
}

impl Scene {
    /// Create a scene from meshes and a root node, without animations.
    #[must_use]
    pub const fn new(meshes: Vec<Mesh>, root: Node) -> Self {
        Self {
            meshes,
            animations: Vec::new(),
            root,
        }
    }

    /// Builder-style helper setting the animations.
    #[must_use]
    pub fn with_animations(mut self, animations: Vec<Animation>) -> Self {
        self.animations = animations;
        self
    }

    /// Whether the scene has any animations.
    #[inline]
    #[must_use]
    pub fn has_animations(&self) -> bool {
        !self.animations.is_empty()
    }

    /// Total vertex count over all meshes.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.meshes.iter().map(Mesh::vertex_count).sum()
    }

    /// Total face count over all meshes.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.meshes.iter().map(Mesh::face_count).sum()
    }
}

//! Mesh reference remapping over the node hierarchy.
//!
//! When meshes are removed from a scene, the remaining meshes shift down to
//! fill the gaps. Every node's mesh references must then be translated to
//! the new positions, and references to removed meshes dropped.

use scene_types::Node;

/// Where an original mesh ended up after compaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshSlot {
    /// The mesh survived and now lives at this index.
    Kept(u32),
    /// The mesh was removed.
    Removed,
}

/// Mapping from original mesh index to its slot after compaction.
///
/// # Example
///
/// ```
/// use scene_scrub::{MeshIndexMap, MeshSlot};
///
/// let map: MeshIndexMap = [MeshSlot::Kept(0), MeshSlot::Removed, MeshSlot::Kept(1)]
///     .into_iter()
///     .collect();
///
/// assert_eq!(map.get(2), Some(1));
/// assert_eq!(map.get(1), None);
/// assert_eq!(map.removed_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeshIndexMap {
    slots: Vec<MeshSlot>,
}

impl MeshIndexMap {
    /// Create an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Create an empty map with room for `mesh_count` entries.
    #[must_use]
    pub fn with_capacity(mesh_count: usize) -> Self {
        Self {
            slots: Vec::with_capacity(mesh_count),
        }
    }

    /// Record the next original mesh.
    pub fn push(&mut self, slot: MeshSlot) {
        self.slots.push(slot);
    }

    /// New index of original mesh `original`.
    ///
    /// Returns `None` if the mesh was removed or `original` is out of range.
    #[must_use]
    pub fn get(&self, original: u32) -> Option<u32> {
        match self.slots.get(original as usize)? {
            MeshSlot::Kept(index) => Some(*index),
            MeshSlot::Removed => None,
        }
    }

    /// Slot of original mesh `original`, if in range.
    #[must_use]
    pub fn slot(&self, original: usize) -> Option<MeshSlot> {
        self.slots.get(original).copied()
    }

    /// Number of original meshes recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no meshes are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of removed meshes.
    #[must_use]
    pub fn removed_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, MeshSlot::Removed))
            .count()
    }

    /// Number of surviving meshes.
    #[must_use]
    pub fn kept_count(&self) -> usize {
        self.len() - self.removed_count()
    }
}

impl FromIterator<MeshSlot> for MeshIndexMap {
    fn from_iter<I: IntoIterator<Item = MeshSlot>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

/// Rewrite every node's mesh references through `map`.
///
/// Visits each node exactly once using an explicit stack, so arbitrarily
/// deep hierarchies are handled without recursion. References to removed or
/// unknown meshes are dropped; the remaining references keep their order.
/// Nodes themselves are never removed, even when left without meshes.
///
/// # Example
///
/// ```
/// use scene_scrub::{reindex_mesh_references, MeshIndexMap, MeshSlot};
/// use scene_types::Node;
///
/// let map: MeshIndexMap = [MeshSlot::Kept(0), MeshSlot::Removed, MeshSlot::Kept(1)]
///     .into_iter()
///     .collect();
///
/// let mut root = Node::new("root")
///     .with_meshes(vec![0, 1, 2])
///     .with_child(Node::new("only_removed").with_meshes(vec![1]));
///
/// reindex_mesh_references(&mut root, &map);
///
/// assert_eq!(root.meshes, vec![0, 1]);
/// assert!(root.children[0].meshes.is_empty());
/// ```
pub fn reindex_mesh_references(root: &mut Node, map: &MeshIndexMap) {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        node.meshes.retain_mut(|index| match map.get(*index) {
            Some(new_index) => {
                *index = new_index;
                true
            }
            None => false,
        });
        stack.extend(node.children.iter_mut().rev());
    }
}

//! Core scene types for imported 3D content.
//!
//! This crate provides the in-memory representation that loaders produce and
//! post-processing steps consume:
//!
//! - [`Scene`] - Owns meshes, animations and the root of the node hierarchy
//! - [`Mesh`] - Per-vertex attribute arrays plus faces
//! - [`Face`] / [`PrimitiveTypes`] - Face topology and the primitive kinds present
//! - [`Animation`] / [`NodeAnim`] - Keyframed node animation tracks
//! - [`Node`] - A node in the scene hierarchy, referencing meshes by index
//!
//! # Layer 0
//!
//! This is a Layer 0 crate with zero Bevy dependencies.
//!
//! # Optional attributes
//!
//! Per-vertex attributes other than positions are `Option<Vec<_>>`. `None`
//! means the attribute is absent; when present the array has exactly one
//! element per vertex. Texture coordinate and color channels are stacked: if
//! channel `i` is absent, no channel after `i` is present either.
//!
//! # Example
//!
//! ```
//! use scene_types::{Face, Mesh, Node, Point3, Scene};
//!
//! let mut mesh = Mesh::new("triangle");
//! mesh.positions = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! mesh.faces.push(Face::new(vec![0, 1, 2]));
//! mesh.update_primitive_types();
//!
//! let mut root = Node::new("root");
//! root.meshes.push(0);
//!
//! let scene = Scene::new(vec![mesh], root);
//! assert_eq!(scene.meshes.len(), 1);
//! assert_eq!(scene.vertex_count(), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod animation;
mod mesh;
mod node;
mod scene;

pub use animation::{Animation, NodeAnim, QuatKey, VectorKey};
pub use mesh::{Color4, Face, Mesh, PrimitiveTypes, MAX_COLOR_SETS, MAX_TEXTURE_COORDS};
pub use node::Node;
pub use scene::Scene;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix4, Point3, UnitQuaternion, Vector3};

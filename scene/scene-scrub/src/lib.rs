//! Invalid data removal for imported scenes.
//!
//! Loaders frequently produce data that is structurally present but useless:
//! normals that are all zero, texture coordinates collapsed to one point,
//! NaN positions, animation tracks that never move. This crate scans a
//! [`Scene`](scene_types::Scene) and removes such data at the smallest
//! granularity possible:
//!
//! - Attribute arrays with non-finite or constant content are dropped
//! - Meshes with unusable positions are removed and node references remapped
//! - Animation channels without motion are removed, and animations left
//!   without channels are removed too
//!
//! Nothing is ever recomputed or repaired; data is only detected and deleted.
//!
//! # Layer 0
//!
//! This is a Layer 0 crate with zero Bevy dependencies.
//!
//! # Example
//!
//! ```
//! use scene_scrub::{scrub_scene, RecordingSink, ScrubParams};
//! use scene_types::{Face, Mesh, Node, Point3, Scene, Vector3};
//!
//! let mut mesh = Mesh::new("triangle");
//! mesh.positions = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! // Every normal identical: carries no information.
//! mesh.normals = Some(vec![Vector3::new(0.0, 0.0, 0.0); 3]);
//! mesh.faces.push(Face::new(vec![0, 1, 2]));
//! mesh.update_primitive_types();
//!
//! let mut scene = Scene::new(vec![mesh], Node::new("root").with_meshes(vec![0]));
//! let mut sink = RecordingSink::new();
//!
//! let summary = scrub_scene(&mut scene, &ScrubParams::default(), &mut sink).unwrap();
//! assert_eq!(summary.arrays_removed, 1);
//! assert!(scene.meshes[0].normals.is_none());
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod animation;
mod diagnostics;
mod dirty_mask;
mod error;
mod mesh;
mod params;
mod process;
mod reindex;
mod scrub;
mod validate;

pub use animation::{is_dummy_channel, scrub_animation, AnimationOutcome};
pub use diagnostics::{DiagnosticSink, RecordingSink, Severity, TracingSink};
pub use dirty_mask::{build_dirty_mask, DirtyMask};
pub use error::{ScrubError, ScrubResult};
pub use mesh::{scrub_mesh, MeshOutcome};
pub use params::{DegeneracyBaseline, DummyChannelRule, ScrubParams};
pub use process::{FindInvalidData, PostProcessStep, ProcessSteps};
pub use reindex::{reindex_mesh_references, MeshIndexMap, MeshSlot};
pub use scrub::{scrub_scene, ScrubSummary};
pub use validate::{validate_array, validate_array_with_params, ArrayDiagnosis, ArrayElement};

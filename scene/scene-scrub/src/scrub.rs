//! Scene-level orchestration of the invalid data scrub.

use scene_types::Scene;

use crate::animation::{scrub_animation, AnimationOutcome};
use crate::diagnostics::DiagnosticSink;
use crate::error::{ScrubError, ScrubResult};
use crate::mesh::{scrub_mesh, MeshOutcome};
use crate::reindex::{reindex_mesh_references, MeshIndexMap, MeshSlot};
use crate::ScrubParams;

/// Summary of a completed scrub.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrubSummary {
    /// Number of meshes before scrubbing.
    pub initial_meshes: usize,
    /// Number of meshes after scrubbing.
    pub final_meshes: usize,
    /// Meshes removed because their positions were invalid.
    pub meshes_removed: usize,
    /// Meshes that lost one or more attribute arrays.
    pub meshes_modified: usize,
    /// Attribute arrays removed across all surviving meshes.
    pub arrays_removed: usize,
    /// Number of animations before scrubbing.
    pub initial_animations: usize,
    /// Animations removed because all their channels were dummy tracks.
    pub animations_removed: usize,
    /// Animations that lost one or more channels.
    pub animations_modified: usize,
    /// Channels removed from surviving animations.
    pub channels_removed: usize,
}

impl ScrubSummary {
    /// Whether anything in the scene was changed.
    #[must_use]
    pub const fn had_changes(&self) -> bool {
        self.meshes_removed > 0
            || self.meshes_modified > 0
            || self.animations_removed > 0
            || self.animations_modified > 0
    }

    /// Number of animations after scrubbing.
    #[must_use]
    pub const fn final_animations(&self) -> usize {
        self.initial_animations - self.animations_removed
    }
}

impl std::fmt::Display for ScrubSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Scrub: {} meshes ({} removed, {} modified, {} arrays dropped), ",
            self.final_meshes, self.meshes_removed, self.meshes_modified, self.arrays_removed
        )?;
        write!(
            f,
            "{} animations ({} removed, {} modified, {} channels dropped)",
            self.final_animations(),
            self.animations_removed,
            self.animations_modified,
            self.channels_removed
        )
    }
}

/// Find and remove invalid data throughout a scene.
///
/// Every mesh is scrubbed in order; unusable meshes are removed and the rest
/// compacted. Every animation is scrubbed the same way. If any mesh was
/// removed the node hierarchy is walked once to remap mesh references.
///
/// # Errors
///
/// Returns [`ScrubError::NoMeshesRemaining`] if every mesh had to be
/// removed. The scene is left partially scrubbed in that case and should be
/// discarded.
///
/// # Example
///
/// ```
/// use scene_scrub::{scrub_scene, ScrubParams, TracingSink};
/// use scene_types::{Face, Mesh, Node, Point3, Scene};
///
/// let mut good = Mesh::new("good");
/// good.positions = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// good.faces.push(Face::new(vec![0, 1, 2]));
/// good.update_primitive_types();
///
/// let mut bad = good.clone();
/// bad.name = "bad".into();
/// bad.positions[1].x = f64::NAN;
///
/// let root = Node::new("root").with_meshes(vec![0, 1]);
/// let mut scene = Scene::new(vec![bad, good], root);
///
/// let summary = scrub_scene(&mut scene, &ScrubParams::default(), &mut TracingSink).unwrap();
/// assert_eq!(summary.meshes_removed, 1);
/// assert_eq!(scene.meshes[0].name, "good");
/// assert_eq!(scene.root.meshes, vec![0]);
/// ```
pub fn scrub_scene(
    scene: &mut Scene,
    params: &ScrubParams,
    sink: &mut impl DiagnosticSink,
) -> ScrubResult<ScrubSummary> {
    sink.debug("FindInvalidData begin");

    let mut summary = ScrubSummary {
        initial_meshes: scene.meshes.len(),
        initial_animations: scene.animations.len(),
        ..ScrubSummary::default()
    };

    let mut map = MeshIndexMap::with_capacity(scene.meshes.len());
    let mut kept = Vec::with_capacity(scene.meshes.len());
    for mut mesh in std::mem::take(&mut scene.meshes) {
        match scrub_mesh(&mut mesh, params, sink) {
            MeshOutcome::Unusable => {
                summary.meshes_removed += 1;
                map.push(MeshSlot::Removed);
                continue;
            }
            MeshOutcome::Modified { arrays_removed } => {
                summary.meshes_modified += 1;
                summary.arrays_removed += arrays_removed;
            }
            MeshOutcome::Unchanged => {}
        }
        map.push(MeshSlot::Kept(mesh_index(kept.len())));
        kept.push(mesh);
    }
    scene.meshes = kept;
    summary.final_meshes = scene.meshes.len();

    scene.animations.retain_mut(|animation| {
        match scrub_animation(animation, params, sink) {
            AnimationOutcome::Unusable => {
                summary.animations_removed += 1;
                return false;
            }
            AnimationOutcome::Modified { channels_removed } => {
                summary.animations_modified += 1;
                summary.channels_removed += channels_removed;
            }
            AnimationOutcome::Unchanged => {}
        }
        true
    });

    if !summary.had_changes() {
        sink.debug("FindInvalidData finished. Everything seems to be OK.");
        return Ok(summary);
    }

    if scene.meshes.is_empty() {
        return Err(ScrubError::NoMeshesRemaining {
            removed: summary.meshes_removed,
        });
    }

    if summary.meshes_removed > 0 {
        reindex_mesh_references(&mut scene.root, &map);
    }

    sink.info(&format!("FindInvalidData finished. Found issues. {summary}"));
    Ok(summary)
}

/// Mesh indices are `u32` in the node hierarchy.
#[allow(clippy::cast_possible_truncation)]
const fn mesh_index(position: usize) -> u32 {
    position as u32
}

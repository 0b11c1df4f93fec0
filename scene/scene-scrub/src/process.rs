//! Post-processing step integration.
//!
//! Import pipelines select steps with a [`ProcessSteps`] bitfield. This
//! module exposes the scrub as a [`PostProcessStep`] so a pipeline can check
//! activation once and run it.

use bitflags::bitflags;
use scene_types::Scene;

use crate::diagnostics::DiagnosticSink;
use crate::error::ScrubResult;
use crate::scrub::{scrub_scene, ScrubSummary};
use crate::ScrubParams;

bitflags! {
    /// Processing steps requested by the caller of an import.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ProcessSteps: u32 {
        /// Remove invalid data (non-finite values, degenerate arrays,
        /// dummy animation tracks).
        const FIND_INVALID_DATA = 0x0002_0000;
    }
}

/// A step run over a loaded scene.
pub trait PostProcessStep {
    /// Whether `steps` requests this step.
    fn is_active(&self, steps: ProcessSteps) -> bool;

    /// Run the step.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene cannot be used after the step.
    fn execute(&self, scene: &mut Scene, sink: &mut dyn DiagnosticSink)
        -> ScrubResult<ScrubSummary>;
}

/// The invalid data scrub as a pipeline step.
///
/// # Example
///
/// ```
/// use scene_scrub::{FindInvalidData, ProcessSteps, RecordingSink};
/// use scene_types::{Face, Mesh, Node, Point3, Scene};
///
/// let mut mesh = Mesh::new("tri");
/// mesh.positions = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// mesh.faces.push(Face::new(vec![0, 1, 2]));
/// let mut scene = Scene::new(vec![mesh], Node::new("root"));
///
/// let step = FindInvalidData::default();
/// let mut sink = RecordingSink::new();
///
/// let skipped = step.run_if_active(ProcessSteps::empty(), &mut scene, &mut sink).unwrap();
/// assert!(skipped.is_none());
///
/// let ran = step
///     .run_if_active(ProcessSteps::FIND_INVALID_DATA, &mut scene, &mut sink)
///     .unwrap();
/// assert!(ran.is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FindInvalidData {
    /// Scrub configuration.
    pub params: ScrubParams,
}

impl FindInvalidData {
    /// Create the step with the given parameters.
    #[must_use]
    pub const fn new(params: ScrubParams) -> Self {
        Self { params }
    }

    /// Run the step if `steps` requests it.
    ///
    /// Returns `Ok(None)` without touching the scene when inactive.
    ///
    /// # Errors
    ///
    /// Returns [`ScrubError::NoMeshesRemaining`](crate::ScrubError::NoMeshesRemaining)
    /// if the scrub removed every mesh.
    pub fn run_if_active(
        &self,
        steps: ProcessSteps,
        scene: &mut Scene,
        sink: &mut dyn DiagnosticSink,
    ) -> ScrubResult<Option<ScrubSummary>> {
        if !self.is_active(steps) {
            return Ok(None);
        }
        self.execute(scene, sink).map(Some)
    }
}

impl PostProcessStep for FindInvalidData {
    fn is_active(&self, steps: ProcessSteps) -> bool {
        steps.contains(ProcessSteps::FIND_INVALID_DATA)
    }

    fn execute(
        &self,
        scene: &mut Scene,
        mut sink: &mut dyn DiagnosticSink,
    ) -> ScrubResult<ScrubSummary> {
        scrub_scene(scene, &self.params, &mut sink)
    }
}

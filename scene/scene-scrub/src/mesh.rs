//! Per-mesh scrubbing of vertex attribute arrays.

use scene_types::{Mesh, MAX_TEXTURE_COORDS};

use crate::diagnostics::DiagnosticSink;
use crate::dirty_mask::build_dirty_mask;
use crate::validate::{validate_array_with_params, ArrayDiagnosis, ArrayElement};
use crate::ScrubParams;

/// Result of scrubbing a single mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshOutcome {
    /// Every array passed validation.
    Unchanged,
    /// One or more attribute arrays were removed.
    Modified {
        /// Number of attribute arrays removed.
        arrays_removed: usize,
    },
    /// Positions are invalid; the mesh must be removed from the scene.
    Unusable,
}

impl MeshOutcome {
    fn from_removed(arrays_removed: usize) -> Self {
        if arrays_removed == 0 {
            Self::Unchanged
        } else {
            Self::Modified { arrays_removed }
        }
    }

    /// Whether the mesh must be removed.
    #[inline]
    #[must_use]
    pub const fn is_unusable(self) -> bool {
        matches!(self, Self::Unusable)
    }

    /// Whether the mesh was changed or must be removed.
    #[inline]
    #[must_use]
    pub const fn had_changes(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Validate a mesh's attribute arrays and remove the invalid ones.
///
/// Positions are checked first; if they fail the mesh is
/// [`Unusable`](MeshOutcome::Unusable) and left as is for the caller to drop.
/// A failing texture coordinate channel is removed together with every
/// channel after it. Normals, tangents and bitangents are checked with the
/// point/line exemption mask, and tangents and bitangents are always removed
/// as a pair. Vertex colors are never checked.
///
/// # Example
///
/// ```
/// use scene_scrub::{scrub_mesh, MeshOutcome, RecordingSink, ScrubParams};
/// use scene_types::{Face, Mesh, Point3, Vector3};
///
/// let mut mesh = Mesh::new("tri");
/// mesh.positions = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// mesh.normals = Some(vec![Vector3::new(f64::NAN, 0.0, 0.0); 3]);
/// mesh.faces.push(Face::new(vec![0, 1, 2]));
/// mesh.update_primitive_types();
///
/// let mut sink = RecordingSink::new();
/// let outcome = scrub_mesh(&mut mesh, &ScrubParams::default(), &mut sink);
/// assert_eq!(outcome, MeshOutcome::Modified { arrays_removed: 1 });
/// assert!(mesh.normals.is_none());
/// ```
pub fn scrub_mesh(
    mesh: &mut Mesh,
    params: &ScrubParams,
    sink: &mut impl DiagnosticSink,
) -> MeshOutcome {
    let diagnosis = validate_array_with_params(&mesh.positions, None, params);
    if !diagnosis.is_ok() {
        report(sink, &mesh.name, "positions", diagnosis);
        sink.error(&format!(
            "Deleting mesh '{}': unable to continue without vertex positions",
            mesh.name
        ));
        return MeshOutcome::Unusable;
    }

    let mut removed = 0;

    for channel in 0..MAX_TEXTURE_COORDS {
        let Some(coords) = mesh.texture_coords[channel].as_deref() else {
            break;
        };
        let diagnosis = validate_array_with_params(coords, None, params);
        if diagnosis.is_ok() {
            continue;
        }
        report(sink, &mesh.name, "uvcoords", diagnosis);
        // Channels are stacked, nothing after a removed channel survives.
        removed += mesh.texture_coords[channel..]
            .iter_mut()
            .filter_map(Option::take)
            .count();
        break;
    }

    if mesh.normals.is_none() && mesh.tangents.is_none() {
        return MeshOutcome::from_removed(removed);
    }

    let mask = build_dirty_mask(&mesh.faces, mesh.primitive_types, mesh.vertex_count());
    if mask.skips_all() {
        return MeshOutcome::from_removed(removed);
    }
    let mask = mask.as_slice();

    if let Some(failure) = failing(mesh.normals.as_deref(), mask, params) {
        report(sink, &mesh.name, "normals", failure);
        mesh.normals = None;
        removed += 1;
    }

    if let Some(failure) = failing(mesh.tangents.as_deref(), mask, params) {
        report(sink, &mesh.name, "tangents", failure);
        mesh.tangents = None;
        removed += 1 + usize::from(mesh.bitangents.take().is_some());
    }

    if let Some(failure) = failing(mesh.bitangents.as_deref(), mask, params) {
        report(sink, &mesh.name, "bitangents", failure);
        mesh.bitangents = None;
        removed += 1 + usize::from(mesh.tangents.take().is_some());
    }

    MeshOutcome::from_removed(removed)
}

/// Diagnosis of a present array that fails validation.
fn failing<T: ArrayElement>(
    array: Option<&[T]>,
    mask: Option<&[bool]>,
    params: &ScrubParams,
) -> Option<ArrayDiagnosis> {
    let diagnosis = validate_array_with_params(array?, mask, params);
    (!diagnosis.is_ok()).then_some(diagnosis)
}

fn report(sink: &mut impl DiagnosticSink, mesh: &str, array: &str, diagnosis: ArrayDiagnosis) {
    sink.error(&format!(
        "Invalid data in mesh '{mesh}', removing {array}: {diagnosis}"
    ));
}

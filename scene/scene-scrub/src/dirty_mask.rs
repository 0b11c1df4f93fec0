//! Vertex exemption masks for normal and tangent validation.
//!
//! Normals and tangents are undefined for point and line primitives, so the
//! vertices used only by those primitives may hold arbitrary values there.

use scene_types::{Face, PrimitiveTypes};

/// Which vertices are exempt from normal/tangent validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirtyMask {
    /// No exemptions: the mesh has no point or line primitives.
    None,
    /// Per-vertex exemptions. `true` marks a vertex referenced by a point or
    /// line face.
    Partial(Vec<bool>),
    /// Every vertex is exempt: the mesh has only points and lines. Normal and
    /// tangent validation should be skipped entirely.
    SkipAll,
}

impl DirtyMask {
    /// The mask to hand to the array validator, if any.
    ///
    /// Returns `None` for both [`DirtyMask::None`] and [`DirtyMask::SkipAll`];
    /// callers are expected to check [`DirtyMask::skips_all`] first.
    #[must_use]
    pub fn as_slice(&self) -> Option<&[bool]> {
        match self {
            Self::Partial(mask) => Some(mask),
            Self::None | Self::SkipAll => None,
        }
    }

    /// Whether normal/tangent validation should be skipped.
    #[inline]
    #[must_use]
    pub const fn skips_all(&self) -> bool {
        matches!(self, Self::SkipAll)
    }

    /// Number of exempt vertices in a partial mask.
    #[must_use]
    pub fn exempt_count(&self) -> usize {
        match self {
            Self::Partial(mask) => mask.iter().filter(|&&dirty| dirty).count(),
            Self::None | Self::SkipAll => 0,
        }
    }
}

/// Build the exemption mask for a mesh.
///
/// Face indices outside `0..vertex_count` are ignored.
///
/// # Example
///
/// ```
/// use scene_scrub::{build_dirty_mask, DirtyMask};
/// use scene_types::{Face, PrimitiveTypes};
///
/// let faces = vec![Face::new(vec![0, 1]), Face::new(vec![1, 2, 3])];
/// let types = PrimitiveTypes::from_faces(&faces);
///
/// let mask = build_dirty_mask(&faces, types, 4);
/// assert_eq!(mask, DirtyMask::Partial(vec![true, true, false, false]));
/// ```
#[must_use]
pub fn build_dirty_mask(
    faces: &[Face],
    primitive_types: PrimitiveTypes,
    vertex_count: usize,
) -> DirtyMask {
    if !primitive_types.has_points_or_lines() {
        return DirtyMask::None;
    }
    if !primitive_types.has_surfaces() {
        return DirtyMask::SkipAll;
    }

    let mut mask = vec![false; vertex_count];
    for face in faces {
        if matches!(face.len(), 1 | 2) {
            for &index in &face.indices {
                if let Some(slot) = mask.get_mut(index as usize) {
                    *slot = true;
                }
            }
        }
    }
    DirtyMask::Partial(mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faces(list: &[&[u32]]) -> Vec<Face> {
        list.iter().map(|f| Face::new(f.to_vec())).collect()
    }

    #[test]
    fn triangles_only_needs_no_mask() {
        let faces = faces(&[&[0, 1, 2], &[2, 1, 3]]);
        let mask = build_dirty_mask(&faces, PrimitiveTypes::TRIANGLE, 4);
        assert_eq!(mask, DirtyMask::None);
        assert_eq!(mask.as_slice(), None);
    }

    #[test]
    fn lines_only_skips_all() {
        let faces = faces(&[&[0, 1], &[1, 2]]);
        let mask = build_dirty_mask(&faces, PrimitiveTypes::LINE, 3);
        assert!(mask.skips_all());
        assert_eq!(mask.as_slice(), None);
    }

    #[test]
    fn points_and_lines_skip_all() {
        let faces = faces(&[&[0], &[1, 2]]);
        let types = PrimitiveTypes::POINT | PrimitiveTypes::LINE;
        assert!(build_dirty_mask(&faces, types, 3).skips_all());
    }

    #[test]
    fn mixed_marks_point_and_line_vertices() {
        let faces = faces(&[&[0, 1, 2, 3], &[4], &[5, 6], &[2, 3, 7]]);
        let types = PrimitiveTypes::from_faces(&faces);
        let mask = build_dirty_mask(&faces, types, 8);

        assert_eq!(
            mask,
            DirtyMask::Partial(vec![false, false, false, false, true, true, true, false])
        );
        assert_eq!(mask.exempt_count(), 3);
    }

    #[test]
    fn shared_vertex_stays_exempt() {
        // Vertex 1 belongs to both a line and a triangle.
        let faces = faces(&[&[0, 1], &[1, 2, 3]]);
        let types = PrimitiveTypes::LINE | PrimitiveTypes::TRIANGLE;
        let mask = build_dirty_mask(&faces, types, 4);
        assert_eq!(mask.as_slice(), Some(&[true, true, false, false][..]));
    }

    #[test]
    fn out_of_range_indices_ignored() {
        let faces = faces(&[&[0, 99], &[0, 1, 2]]);
        let types = PrimitiveTypes::LINE | PrimitiveTypes::TRIANGLE;
        let mask = build_dirty_mask(&faces, types, 3);
        assert_eq!(mask, DirtyMask::Partial(vec![true, false, false]));
    }
}

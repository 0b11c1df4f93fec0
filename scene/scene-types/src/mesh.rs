//! Meshes, faces and primitive type tracking.

use bitflags::bitflags;
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of texture coordinate channels a mesh can carry.
pub const MAX_TEXTURE_COORDS: usize = 8;

/// Maximum number of vertex color channels a mesh can carry.
pub const MAX_COLOR_SETS: usize = 8;

bitflags! {
    /// Kinds of primitives that occur among a mesh's faces.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct PrimitiveTypes: u32 {
        /// Single-index faces.
        const POINT = 0b0001;
        /// Two-index faces.
        const LINE = 0b0010;
        /// Three-index faces.
        const TRIANGLE = 0b0100;
        /// Faces with more than three indices.
        const POLYGON = 0b1000;
    }
}

impl PrimitiveTypes {
    /// Primitive kind for a face with the given number of indices.
    ///
    /// Returns an empty set for a face with no indices.
    #[must_use]
    pub const fn for_arity(index_count: usize) -> Self {
        match index_count {
            0 => Self::empty(),
            1 => Self::POINT,
            2 => Self::LINE,
            3 => Self::TRIANGLE,
            _ => Self::POLYGON,
        }
    }

    /// Collect the primitive kinds that occur in `faces`.
    ///
    /// # Example
    ///
    /// ```
    /// use scene_types::{Face, PrimitiveTypes};
    ///
    /// let faces = [Face::new(vec![0, 1]), Face::new(vec![0, 1, 2])];
    /// let types = PrimitiveTypes::from_faces(&faces);
    /// assert_eq!(types, PrimitiveTypes::LINE | PrimitiveTypes::TRIANGLE);
    /// ```
    #[must_use]
    pub fn from_faces(faces: &[Face]) -> Self {
        faces
            .iter()
            .fold(Self::empty(), |acc, face| acc | Self::for_arity(face.len()))
    }

    /// Whether points or lines are present.
    ///
    /// Normals and tangents are undefined for these primitives.
    #[must_use]
    pub const fn has_points_or_lines(self) -> bool {
        self.intersects(Self::POINT.union(Self::LINE))
    }

    /// Whether triangles or polygons are present.
    #[must_use]
    pub const fn has_surfaces(self) -> bool {
        self.intersects(Self::TRIANGLE.union(Self::POLYGON))
    }
}

/// A single face: an ordered list of vertex indices.
///
/// The number of indices determines the primitive kind (1 = point,
/// 2 = line, 3 = triangle, more = polygon). Indices are not checked
/// against the owning mesh.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Face {
    /// Vertex indices into the owning mesh's per-vertex arrays.
    pub indices: Vec<u32>,
}

impl Face {
    /// Create a face from vertex indices.
    #[inline]
    #[must_use]
    pub const fn new(indices: Vec<u32>) -> Self {
        Self { indices }
    }

    /// Number of indices in this face.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the face has no indices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl From<Vec<u32>> for Face {
    fn from(indices: Vec<u32>) -> Self {
        Self::new(indices)
    }
}

/// RGBA color with floating point components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color4 {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component.
    pub a: f32,
}

impl Color4 {
    /// Create a color from RGBA components.
    #[inline]
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// A mesh with per-vertex attribute arrays.
///
/// `positions` is required and defines the vertex count. Every other
/// attribute is optional; when present it holds exactly one element per
/// vertex.
///
/// # Example
///
/// ```
/// use scene_types::{Face, Mesh, Point3, PrimitiveTypes, Vector3};
///
/// let mut mesh = Mesh::new("quad");
/// mesh.positions = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// mesh.normals = Some(vec![Vector3::z(); 4]);
/// mesh.faces.push(Face::new(vec![0, 1, 2, 3]));
/// mesh.update_primitive_types();
///
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.primitive_types, PrimitiveTypes::POLYGON);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mesh {
    /// Mesh name, may be empty.
    pub name: String,

    /// Vertex positions.
    pub positions: Vec<Point3<f64>>,

    /// Texture coordinate channels. Stacked: a `None` ends the sequence.
    pub texture_coords: [Option<Vec<Vector3<f64>>>; MAX_TEXTURE_COORDS],

    /// Vertex color channels. Stacked like `texture_coords`.
    pub colors: [Option<Vec<Color4>>; MAX_COLOR_SETS],

    /// Per-vertex normals.
    pub normals: Option<Vec<Vector3<f64>>>,

    /// Per-vertex tangents. Paired with `bitangents`.
    pub tangents: Option<Vec<Vector3<f64>>>,

    /// Per-vertex bitangents. Paired with `tangents`.
    pub bitangents: Option<Vec<Vector3<f64>>>,

    /// Faces referencing vertices by index.
    pub faces: Vec<Face>,

    /// Primitive kinds occurring in `faces`.
    pub primitive_types: PrimitiveTypes,
}

impl Mesh {
    /// Create an empty mesh with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of texture coordinate channels, counting up to the first gap.
    #[must_use]
    pub fn texture_coord_channels(&self) -> usize {
        self.texture_coords
            .iter()
            .take_while(|channel| channel.is_some())
            .count()
    }

    /// Number of vertex color channels, counting up to the first gap.
    #[must_use]
    pub fn color_channels(&self) -> usize {
        self.colors
            .iter()
            .take_while(|channel| channel.is_some())
            .count()
    }

    /// Whether the mesh has normals.
    #[inline]
    #[must_use]
    pub const fn has_normals(&self) -> bool {
        self.normals.is_some()
    }

    /// Whether the mesh has both tangents and bitangents.
    #[inline]
    #[must_use]
    pub const fn has_tangents_and_bitangents(&self) -> bool {
        self.tangents.is_some() && self.bitangents.is_some()
    }

    /// Recompute `primitive_types` from the current faces.
    pub fn update_primitive_types(&mut self) {
        self.primitive_types = PrimitiveTypes::from_faces(&self.faces);
    }
}

//! CPU-side mesh representation produced by importers and primitive generators.

use corelib::{Vec2, Vec3};

/// How consecutive vertices (or indices) are assembled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshPrimitive {
    Points,
    Lines,
    LineStrip,
    LineLoop,
    Triangles,
    TriangleStrip,
    TriangleFan,
}

/// Three-dimensional mesh data.
///
/// Every attribute kind may carry several arrays (e.g. morph targets or more
/// UV sets). Any of them can be empty. Indices are not range-checked against
/// the vertex count; an empty index list means the mesh is not indexed.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshData3D {
    primitive: MeshPrimitive,
    indices: Vec<u32>,
    positions: Vec<Vec<Vec3>>,
    normals: Vec<Vec<Vec3>>,
    texture_coords_2d: Vec<Vec<Vec2>>,
}

impl MeshData3D {
    pub fn new(
        primitive: MeshPrimitive,
        indices: Vec<u32>,
        positions: Vec<Vec<Vec3>>,
        normals: Vec<Vec<Vec3>>,
        texture_coords_2d: Vec<Vec<Vec2>>,
    ) -> Self {
        Self {
            primitive,
            indices,
            positions,
            normals,
            texture_coords_2d,
        }
    }

    #[inline]
    pub fn primitive(&self) -> MeshPrimitive {
        self.primitive
    }

    /// Returns `true` if the mesh has an index buffer.
    #[inline]
    pub fn is_indexed(&self) -> bool {
        !self.indices.is_empty()
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn position_array_count(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self, id: usize) -> Option<&[Vec3]> {
        self.positions.get(id).map(Vec::as_slice)
    }

    #[inline]
    pub fn normal_array_count(&self) -> usize {
        self.normals.len()
    }

    pub fn normals(&self, id: usize) -> Option<&[Vec3]> {
        self.normals.get(id).map(Vec::as_slice)
    }

    #[inline]
    pub fn texture_coords_2d_array_count(&self) -> usize {
        self.texture_coords_2d.len()
    }

    pub fn texture_coords_2d(&self, id: usize) -> Option<&[Vec2]> {
        self.texture_coords_2d.get(id).map(Vec::as_slice)
    }

    /// Vertex count taken from the first position array (0 without positions).
    pub fn vertex_count(&self) -> usize {
        self.positions.first().map_or(0, Vec::len)
    }

    /// Number of elements a draw call would consume: indices when indexed,
    /// vertices otherwise.
    pub fn element_count(&self) -> usize {
        if self.is_indexed() {
            self.indices.len()
        } else {
            self.vertex_count()
        }
    }
}

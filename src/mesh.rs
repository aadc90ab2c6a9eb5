use crate::error::{MeshChannel, SliceError};
use crate::math::{Point, Real, Vector, UV};
use crate::vertex::VertexData;

/// Raw triangle-mesh buffers: parallel per-vertex attribute channels plus an
/// index list.
///
/// Used both as the input of a slice and as its two frozen outputs. The
/// buffers are immutable once constructed; [`MeshData::new`] validates that
/// all three attribute channels have one entry per vertex and that every
/// index is in range.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshData {
    vertices: Vec<Point>,
    normals: Vec<Vector>,
    uvs: Vec<UV>,
    indices: Vec<[u32; 3]>,
}

impl MeshData {
    /// Builds a mesh from raw buffers, validating their consistency.
    ///
    /// Errors with [`SliceError::MissingMeshData`] if any attribute channel is
    /// empty, [`SliceError::ChannelLengthMismatch`] if the channels are not
    /// parallel, and [`SliceError::IndexOutOfBounds`] if a triangle refers to
    /// a vertex that does not exist.
    pub fn new(
        vertices: Vec<Point>,
        normals: Vec<Vector>,
        uvs: Vec<UV>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, SliceError> {
        if vertices.is_empty() {
            return Err(SliceError::MissingMeshData(MeshChannel::Positions));
        }
        if normals.is_empty() {
            return Err(SliceError::MissingMeshData(MeshChannel::Normals));
        }
        if uvs.is_empty() {
            return Err(SliceError::MissingMeshData(MeshChannel::Uvs));
        }

        if normals.len() != vertices.len() {
            return Err(SliceError::ChannelLengthMismatch {
                channel: MeshChannel::Normals,
                len: normals.len(),
                expected: vertices.len(),
            });
        }
        if uvs.len() != vertices.len() {
            return Err(SliceError::ChannelLengthMismatch {
                channel: MeshChannel::Uvs,
                len: uvs.len(),
                expected: vertices.len(),
            });
        }

        for (tri_id, tri) in indices.iter().enumerate() {
            for &index in tri {
                if index as usize >= vertices.len() {
                    return Err(SliceError::IndexOutOfBounds {
                        triangle: tri_id as u32,
                        index,
                        num_vertices: vertices.len(),
                    });
                }
            }
        }

        Ok(Self {
            vertices,
            normals,
            uvs,
            indices,
        })
    }

    /// Assembles a mesh from buffers that are consistent by construction
    /// (the accumulator freeze path). Unlike [`MeshData::new`], empty buffers
    /// are allowed: a slice that leaves one side empty produces an empty mesh
    /// on that side.
    pub(crate) fn from_raw_buffers(
        vertices: Vec<Point>,
        normals: Vec<Vector>,
        uvs: Vec<UV>,
        indices: Vec<[u32; 3]>,
    ) -> Self {
        debug_assert_eq!(vertices.len(), normals.len());
        debug_assert_eq!(vertices.len(), uvs.len());
        Self {
            vertices,
            normals,
            uvs,
            indices,
        }
    }

    /// The vertex positions.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// The vertex normals.
    pub fn normals(&self) -> &[Vector] {
        &self.normals
    }

    /// The vertex texture coordinates.
    pub fn uvs(&self) -> &[UV] {
        &self.uvs
    }

    /// The triangles, as triples of vertex indices.
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// `true` iff this mesh contains no geometry at all.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The full attribute bundle of the `i`-th vertex.
    pub fn vertex_data(&self, i: u32) -> VertexData {
        VertexData::new(
            self.vertices[i as usize],
            self.normals[i as usize],
            self.uvs[i as usize],
        )
    }

    /// The area of one triangle.
    pub fn triangle_area(&self, tri: &[u32; 3]) -> Real {
        let a = self.vertices[tri[0] as usize];
        let b = self.vertices[tri[1] as usize];
        let c = self.vertices[tri[2] as usize];
        (b - a).cross(&(c - a)).norm() * 0.5
    }

    /// The total surface area of this mesh.
    pub fn total_area(&self) -> Real {
        self.indices.iter().map(|tri| self.triangle_area(tri)).sum()
    }
}

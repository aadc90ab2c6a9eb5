use core::fmt;

/// One of the per-vertex attribute channels of a mesh.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeshChannel {
    /// The vertex positions.
    Positions,
    /// The vertex normals.
    Normals,
    /// The vertex texture coordinates.
    Uvs,
}

impl fmt::Display for MeshChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshChannel::Positions => f.pad("positions"),
            MeshChannel::Normals => f.pad("normals"),
            MeshChannel::Uvs => f.pad("texture coordinates"),
        }
    }
}

/// Indicates why a mesh could not be sliced.
///
/// A failed slice never produces partial output: either both halves are fully
/// valid, or the call reports one of these errors and yields nothing.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum SliceError {
    /// The cutting plane's normal has a zero (or non-finite) length.
    #[error("the cutting plane normal must have a non-zero length.")]
    InvalidPlane,
    /// A required attribute channel of the input mesh is empty.
    #[error("the mesh {0} channel is empty; slicing requires positions, normals and texture coordinates.")]
    MissingMeshData(MeshChannel),
    /// An attribute channel does not have one entry per vertex.
    #[error("the mesh {channel} channel has {len} entries but the mesh has {expected} vertices.")]
    ChannelLengthMismatch {
        /// The offending channel.
        channel: MeshChannel,
        /// The number of entries in that channel.
        len: usize,
        /// The number of vertices in the mesh.
        expected: usize,
    },
    /// A triangle refers to a vertex past the end of the vertex buffers.
    #[error("triangle {triangle} refers to vertex {index} but the mesh only has {num_vertices} vertices.")]
    IndexOutOfBounds {
        /// The offending triangle.
        triangle: u32,
        /// The out-of-bounds vertex index.
        index: u32,
        /// The number of vertices in the mesh.
        num_vertices: usize,
    },
}

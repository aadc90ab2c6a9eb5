use crate::math::{Point, Vector, UV};
use crate::mesh::MeshData;
use crate::vertex::{VertexData, VertexKey};
use hashbrown::hash_map::Entry;
use hashbrown::HashMap;

/// How an accumulator decides whether two equal-valued vertices share an
/// index.
///
/// Dedup is never required for correctness; it only makes the output buffers
/// more compact.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DedupMode {
    /// Every pushed vertex gets a fresh index.
    #[default]
    None,
    /// Bundles with bit-identical position, normal and texture coordinate
    /// collapse to a single index.
    Exact,
}

impl DedupMode {
    fn strategy(self) -> Box<dyn VertexDedup> {
        match self {
            DedupMode::None => Box::new(NoDedup),
            DedupMode::Exact => Box::<ExactDedup>::default(),
        }
    }
}

/// Strategy consulted before a vertex is appended to an accumulator.
pub trait VertexDedup {
    /// Returns the index to reuse for `vertex`, or `None` if the vertex must
    /// be appended at `next_index` (in which case the strategy records that
    /// index for future lookups).
    fn resolve(&mut self, vertex: &VertexData, next_index: u32) -> Option<u32>;
}

/// Appends every vertex unconditionally, duplicating equal-valued bundles.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDedup;

impl VertexDedup for NoDedup {
    fn resolve(&mut self, _: &VertexData, _: u32) -> Option<u32> {
        None
    }
}

/// Collapses bit-identical attribute bundles to a single index.
#[derive(Debug, Default)]
pub struct ExactDedup {
    map: HashMap<VertexKey, u32>,
}

impl VertexDedup for ExactDedup {
    fn resolve(&mut self, vertex: &VertexData, next_index: u32) -> Option<u32> {
        match self.map.entry(vertex.key()) {
            Entry::Occupied(entry) => Some(*entry.get()),
            Entry::Vacant(entry) => {
                entry.insert(next_index);
                None
            }
        }
    }
}

/// Append-only build buffers for one output mesh of a slice.
///
/// Vertices are pushed one attribute bundle at a time and the builder hands
/// back the explicit index each bundle landed on; triangles are wired up from
/// those returned indices. Plane-generated vertices are additionally recorded
/// so the cut boundary can be capped afterwards.
pub struct MeshBuilder {
    vertices: Vec<Point>,
    normals: Vec<Vector>,
    uvs: Vec<UV>,
    indices: Vec<[u32; 3]>,
    boundary: Vec<u32>,
    dedup: Box<dyn VertexDedup>,
}

impl Default for MeshBuilder {
    fn default() -> Self {
        Self::with_mode(DedupMode::None)
    }
}

impl MeshBuilder {
    /// Creates an empty accumulator with a custom dedup strategy.
    pub fn new(dedup: Box<dyn VertexDedup>) -> Self {
        Self {
            vertices: Vec::new(),
            normals: Vec::new(),
            uvs: Vec::new(),
            indices: Vec::new(),
            boundary: Vec::new(),
            dedup,
        }
    }

    /// Creates an empty accumulator using one of the built-in dedup modes.
    pub fn with_mode(mode: DedupMode) -> Self {
        Self::new(mode.strategy())
    }

    /// Appends an attribute bundle and returns the index it can be referred
    /// to by, reusing an existing index if the dedup strategy says so.
    pub fn push_vertex(&mut self, vertex: VertexData) -> u32 {
        let next_index = self.vertices.len() as u32;
        if let Some(existing) = self.dedup.resolve(&vertex, next_index) {
            return existing;
        }

        self.vertices.push(vertex.position);
        self.normals.push(vertex.normal);
        self.uvs.push(vertex.uv);
        next_index
    }

    /// Appends a plane-generated vertex, remembering its index as part of the
    /// cut boundary.
    ///
    /// Boundary vertices are always pushed in pairs, one pair per straddling
    /// triangle, so consecutive entries of the boundary list form the cut
    /// edges.
    pub fn push_boundary_vertex(&mut self, vertex: VertexData) -> u32 {
        let index = self.push_vertex(vertex);
        self.boundary.push(index);
        index
    }

    /// Appends one triangle referring to previously pushed vertices.
    pub fn push_triangle(&mut self, triangle: [u32; 3]) {
        self.indices.push(triangle);
    }

    /// Appends a whole source triangle verbatim: three bundles plus the
    /// triangle wiring them up, preserving the winding order of the input.
    pub fn push_copied_triangle(&mut self, [a, b, c]: [VertexData; 3]) {
        let ia = self.push_vertex(a);
        let ib = self.push_vertex(b);
        let ic = self.push_vertex(c);
        self.push_triangle([ia, ib, ic]);
    }

    /// The indices of the plane-generated vertices, in emission order.
    pub fn boundary(&self) -> &[u32] {
        &self.boundary
    }

    /// The full attribute bundle of a previously pushed vertex.
    pub fn vertex_data(&self, i: u32) -> VertexData {
        VertexData::new(
            self.vertices[i as usize],
            self.normals[i as usize],
            self.uvs[i as usize],
        )
    }

    /// The triangles pushed so far.
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The number of vertices pushed so far (after dedup).
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The number of triangles pushed so far.
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// `true` iff no triangle was routed to this side.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Freezes the accumulated buffers into an immutable mesh. Consumes the
    /// builder; no further mutation is possible afterwards.
    pub fn build(self) -> MeshData {
        MeshData::from_raw_buffers(self.vertices, self.normals, self.uvs, self.indices)
    }
}

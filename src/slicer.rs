//! The slicing pass: triangle classification, routing and edge patching.

use crate::builder::{DedupMode, MeshBuilder};
use crate::cap;
use crate::error::{MeshChannel, SliceError};
use crate::math::{Point, Real, Vector};
use crate::mesh::MeshData;
use crate::plane::Plane;
use na::Affine3;

/// Options for a slice pass.
#[derive(Clone, Debug, Default)]
pub struct SliceConfig {
    /// Close each side's planar cross-section with a triangle fan.
    pub cap: bool,
    /// Vertex sharing policy for the output buffers.
    pub dedup: DedupMode,
    /// Maps mesh-local positions into the plane's frame before the side
    /// classification and the cut-point computation.
    ///
    /// Stored attributes always remain in the mesh's local frame; only the
    /// side tests and interpolation factors are evaluated in the transformed
    /// frame. An affine map (rather than an isometry) so that a host
    /// transform carrying non-uniform scale can be passed through verbatim.
    pub classification_transform: Option<Affine3<Real>>,
}

/// The two halves produced by slicing a mesh with a plane.
#[derive(Clone, Debug)]
pub struct SlicePair {
    /// The half lying on the plane's normal side.
    pub normal_side: MeshData,
    /// The half lying on the opposite side.
    pub other_side: MeshData,
}

impl SlicePair {
    /// `true` iff the plane actually crossed the mesh, leaving geometry on
    /// both sides.
    pub fn is_split(&self) -> bool {
        !self.normal_side.is_empty() && !self.other_side.is_empty()
    }
}

/// Slices `mesh` with `plane` using the default configuration (no capping,
/// no dedup, no classification transform).
///
/// See [`slice_with`].
pub fn slice(mesh: &MeshData, plane: &Plane) -> Result<SlicePair, SliceError> {
    slice_with(mesh, plane, &SliceConfig::default())
}

/// Slices `mesh` with `plane`, partitioning its triangles into two new
/// meshes, one per half-space, with the cut filled by interpolated patch
/// triangles.
///
/// Every source triangle lands in exactly one half, except straddling
/// triangles which are split into one triangle on their minority side and two
/// on their majority side; the union of both outputs covers the source
/// surface exactly. A mesh entirely on one side of the plane is not an error:
/// that side's output holds the whole mesh and the other is empty (check
/// [`SlicePair::is_split`]).
///
/// Fails fast with [`SliceError::InvalidPlane`] on a zero-length plane normal
/// and [`SliceError::MissingMeshData`] on an empty input; on failure no
/// partial output exists.
pub fn slice_with(
    mesh: &MeshData,
    plane: &Plane,
    config: &SliceConfig,
) -> Result<SlicePair, SliceError> {
    let plane = plane.normalized()?;

    if mesh.vertices().is_empty() {
        return Err(SliceError::MissingMeshData(MeshChannel::Positions));
    }

    let transform = config.classification_transform.as_ref();

    // 1. Classify every vertex once, in the classification frame.
    let sides: Vec<bool> = mesh
        .vertices()
        .iter()
        .map(|pt| plane.is_normal_side(&to_plane_frame(transform, pt)))
        .collect();

    let mut front = MeshBuilder::with_mode(config.dedup);
    let mut back = MeshBuilder::with_mode(config.dedup);

    // 2. Route every triangle: verbatim copy when all three vertices agree,
    //    otherwise patch around the lone vertex. The same-side pair is always
    //    passed in an order that preserves the source winding.
    for tri in mesh.indices() {
        let [v1, v2, v3] = *tri;
        match (
            sides[v1 as usize],
            sides[v2 as usize],
            sides[v3 as usize],
        ) {
            (true, true, true) => front.push_copied_triangle([
                mesh.vertex_data(v1),
                mesh.vertex_data(v2),
                mesh.vertex_data(v3),
            ]),
            (false, false, false) => back.push_copied_triangle([
                mesh.vertex_data(v1),
                mesh.vertex_data(v2),
                mesh.vertex_data(v3),
            ]),
            // The lone vertex sits on the normal side.
            (true, false, false) => {
                patch(mesh, &plane, transform, (v2, v3), v1, &mut back, &mut front)
            }
            (false, true, false) => {
                patch(mesh, &plane, transform, (v3, v1), v2, &mut back, &mut front)
            }
            (false, false, true) => {
                patch(mesh, &plane, transform, (v1, v2), v3, &mut back, &mut front)
            }
            // The lone vertex sits on the far side.
            (false, true, true) => {
                patch(mesh, &plane, transform, (v2, v3), v1, &mut front, &mut back)
            }
            (true, false, true) => {
                patch(mesh, &plane, transform, (v3, v1), v2, &mut front, &mut back)
            }
            (true, true, false) => {
                patch(mesh, &plane, transform, (v1, v2), v3, &mut front, &mut back)
            }
        }
    }

    // 3. Optionally close the cross-section of each half. The cap normal
    //    lives in the storage frame, so a classification transform has to be
    //    pulled back onto it.
    if config.cap {
        let cap_normal = storage_frame_normal(transform, &plane.normal);
        cap::cap_boundary(&mut front, &(-cap_normal));
        cap::cap_boundary(&mut back, &cap_normal);
    }

    // 4. Freeze. No mutation can happen past this point.
    Ok(SlicePair {
        normal_side: front.build(),
        other_side: back.build(),
    })
}

fn to_plane_frame(transform: Option<&Affine3<Real>>, pt: &Point) -> Point {
    match transform {
        Some(m) => m * *pt,
        None => *pt,
    }
}

/// Pulls a plane-frame normal back into the mesh's storage frame. Normals
/// transform by the inverse-transpose of the linear part, so the inverse map
/// is the plain transpose.
fn storage_frame_normal(transform: Option<&Affine3<Real>>, normal: &Vector) -> Vector {
    match transform {
        Some(m) => {
            let linear = m.matrix().fixed_view::<3, 3>(0, 0).into_owned();
            (linear.transpose() * normal).normalize()
        }
        None => *normal,
    }
}

/// Splits one straddling triangle.
///
/// `pair` is the same-side pair and `opposite` the lone vertex, in an order
/// that preserves the source triangle's winding. Emits one triangle around
/// the lone corner into `minority` and two triangles tiling the remaining
/// quadrilateral into `majority`; the two cut vertices are recorded as cut
/// boundary on both sides.
fn patch(
    mesh: &MeshData,
    plane: &Plane,
    transform: Option<&Affine3<Real>>,
    pair: (u32, u32),
    opposite: u32,
    majority: &mut MeshBuilder,
    minority: &mut MeshBuilder,
) {
    let p1 = mesh.vertex_data(pair.0);
    let p2 = mesh.vertex_data(pair.1);
    let o = mesh.vertex_data(opposite);

    let o_pos = to_plane_frame(transform, &o.position);

    // A `None` factor means the edge's endpoints are equidistant from the
    // plane at epsilon level; clamp the cut onto the same-side endpoint
    // instead of letting a non-finite value into the output.
    let t1 = plane
        .edge_lerp(&to_plane_frame(transform, &p1.position), &o_pos)
        .unwrap_or(0.0);
    let t2 = plane
        .edge_lerp(&to_plane_frame(transform, &p2.position), &o_pos)
        .unwrap_or(0.0);

    // Interpolation happens on the mesh-local attributes.
    let l1 = p1.lerp(&o, t1);
    let l2 = p2.lerp(&o, t2);

    // Lone corner: (o, l1, l2) matches the winding of (o, p1, p2).
    let io = minority.push_vertex(o);
    let il1 = minority.push_boundary_vertex(l1);
    let il2 = minority.push_boundary_vertex(l2);
    minority.push_triangle([io, il1, il2]);

    // Majority quad, tiled in a fixed order; swapping these two triangles
    // flips the winding of the second one.
    let ip1 = majority.push_vertex(p1);
    let ip2 = majority.push_vertex(p2);
    let jl1 = majority.push_boundary_vertex(l1);
    let jl2 = majority.push_boundary_vertex(l2);
    majority.push_triangle([ip1, ip2, jl1]);
    majority.push_triangle([jl1, ip2, jl2]);
}

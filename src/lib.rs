/*!
slicemesh
=========

**slicemesh** cuts an indexed triangle mesh with a plane, producing one new
mesh per half-space. Triangles crossing the plane are split along it, with
positions, normals and texture coordinates interpolated at the cut; the
planar cross-section can optionally be closed with a capping fan.

```
use slicemesh::{slice, MeshData, Plane};
use slicemesh::na::{Point2, Point3, Vector3};

let mesh = MeshData::new(
    vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
        Point3::new(0.0, 2.0, 0.0),
    ],
    vec![Vector3::z(); 3],
    vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(0.0, 1.0),
    ],
    vec![[0, 1, 2]],
)?;

let halves = slice(&mesh, &Plane::new(Vector3::x(), Point3::new(1.0, 0.0, 0.0)))?;
assert_eq!(halves.normal_side.indices().len(), 1);
assert_eq!(halves.other_side.indices().len(), 2);
# Ok::<(), slicemesh::SliceError>(())
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![warn(missing_docs)]
#![warn(unused_imports)]

#[macro_use]
extern crate approx;

/// The linear algebra crate used throughout slicemesh.
pub extern crate nalgebra as na;

mod builder;
mod cap;
mod error;
pub mod math;
mod mesh;
mod plane;
mod slicer;
mod vertex;
#[cfg(feature = "wavefront")]
mod wavefront;

pub use crate::builder::{DedupMode, ExactDedup, MeshBuilder, NoDedup, VertexDedup};
pub use crate::error::{MeshChannel, SliceError};
pub use crate::mesh::MeshData;
pub use crate::plane::Plane;
pub use crate::slicer::{slice, slice_with, SliceConfig, SlicePair};
pub use crate::vertex::VertexData;

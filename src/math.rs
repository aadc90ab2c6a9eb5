//! Linear algebra type aliases.

use na::{Point2, Point3, Vector3};

/// The scalar type used throughout this crate.
#[cfg(feature = "f64")]
pub type Real = f64;

/// The scalar type used throughout this crate.
#[cfg(not(feature = "f64"))]
pub type Real = f32;

/// A position in 3D space.
pub type Point = Point3<Real>;

/// A direction or displacement in 3D space.
pub type Vector = Vector3<Real>;

/// A texture coordinate.
pub type UV = Point2<Real>;

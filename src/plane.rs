use crate::error::SliceError;
use crate::math::{Point, Real, Vector};

/// A cutting plane defined by a normal direction and a point it passes through.
///
/// The plane partitions space into two half-spaces. The *normal side* is the
/// half-space the normal points into; points lying exactly on the plane count
/// as being on the normal side.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane {
    /// The direction the plane faces. Does not need to be unit-sized; it is
    /// normalized when the slice runs.
    pub normal: Vector,
    /// A point the plane passes through.
    pub point: Point,
}

impl Plane {
    /// Creates a plane from a (not necessarily unit) normal and a point it
    /// passes through.
    pub fn new(normal: Vector, point: Point) -> Self {
        Self { normal, point }
    }

    /// Returns this plane with its normal rescaled to unit length.
    ///
    /// Errors with [`SliceError::InvalidPlane`] if the normal has a zero or
    /// non-finite length.
    pub fn normalized(&self) -> Result<Self, SliceError> {
        let norm = self.normal.norm();
        if !norm.is_finite() || relative_eq!(norm, 0.0) {
            return Err(SliceError::InvalidPlane);
        }

        Ok(Self {
            normal: self.normal / norm,
            point: self.point,
        })
    }

    /// The signed distance from `pt` to this plane, positive on the normal
    /// side.
    ///
    /// This is a true distance only if the normal is unit-sized; the sign is
    /// correct either way.
    pub fn signed_distance(&self, pt: &Point) -> Real {
        self.normal.dot(&(pt - self.point))
    }

    /// `true` iff `pt` lies on the normal side of this plane.
    ///
    /// Points exactly on the plane are classified as normal-side. Pure and
    /// deterministic: identical inputs always yield the same answer.
    pub fn is_normal_side(&self, pt: &Point) -> bool {
        self.signed_distance(pt) >= 0.0
    }

    /// The interpolation factor `t` such that `a + t * (b - a)` lies on this
    /// plane.
    ///
    /// Returns `None` when both endpoints are equidistant from the plane (the
    /// denominator vanishes), which only happens for an edge lying parallel to
    /// the plane.
    pub fn edge_lerp(&self, a: &Point, b: &Point) -> Option<Real> {
        let dist_a = self.signed_distance(a);
        let dist_b = self.signed_distance(b);

        if relative_eq!(dist_a, dist_b) {
            None
        } else {
            Some(dist_a / (dist_a - dist_b))
        }
    }
}

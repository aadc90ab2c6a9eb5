use crate::math::{Point, Real, Vector, UV};
use ordered_float::OrderedFloat;

/// The interpolable per-vertex attribute bundle: position, normal and texture
/// coordinate.
///
/// This is a flat value type with no topology attached; two equal-valued
/// bundles may be collapsed to a single index by a dedup strategy without
/// changing the geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VertexData {
    /// The vertex position, in the mesh's local frame.
    pub position: Point,
    /// The vertex normal.
    pub normal: Vector,
    /// The vertex texture coordinate.
    pub uv: UV,
}

impl VertexData {
    /// Creates a new attribute bundle.
    pub fn new(position: Point, normal: Vector, uv: UV) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }

    /// Linear interpolation toward `other`, applied channel-wise.
    ///
    /// The interpolated normal is *not* renormalized; cut vertices carry the
    /// raw lerp of their edge's endpoint normals.
    pub fn lerp(&self, other: &VertexData, t: Real) -> VertexData {
        VertexData {
            position: self.position + (other.position - self.position) * t,
            normal: self.normal + (other.normal - self.normal) * t,
            uv: self.uv + (other.uv - self.uv) * t,
        }
    }

    pub(crate) fn key(&self) -> VertexKey {
        VertexKey([
            OrderedFloat(self.position.x),
            OrderedFloat(self.position.y),
            OrderedFloat(self.position.z),
            OrderedFloat(self.normal.x),
            OrderedFloat(self.normal.y),
            OrderedFloat(self.normal.z),
            OrderedFloat(self.uv.x),
            OrderedFloat(self.uv.y),
        ])
    }
}

/// Exact-bits hashable key over a full attribute bundle, used by the vertex
/// dedup map.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct VertexKey([OrderedFloat<Real>; 8]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_is_channel_wise() {
        let a = VertexData::new(
            Point::new(0.0, 0.0, 0.0),
            Vector::new(1.0, 0.0, 0.0),
            UV::new(0.0, 0.0),
        );
        let b = VertexData::new(
            Point::new(2.0, 4.0, -2.0),
            Vector::new(0.0, 1.0, 0.0),
            UV::new(1.0, 0.5),
        );

        let mid = a.lerp(&b, 0.5);
        assert_relative_eq!(mid.position, Point::new(1.0, 2.0, -1.0));
        assert_relative_eq!(mid.uv, UV::new(0.5, 0.25));
        // The interpolated normal keeps its raw (non-unit) length.
        assert_relative_eq!(mid.normal, Vector::new(0.5, 0.5, 0.0));
        assert!(mid.normal.norm() < 1.0);
    }

    #[test]
    fn key_distinguishes_every_channel() {
        let base = VertexData::new(Point::origin(), Vector::y(), UV::new(0.0, 0.0));
        let mut other = base;
        assert_eq!(base.key(), other.key());

        other.uv.x = 1.0;
        assert_ne!(base.key(), other.key());
    }
}

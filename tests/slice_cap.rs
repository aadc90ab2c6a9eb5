use approx::assert_relative_eq;
use slicemesh::math::{Point, Vector, UV};
use slicemesh::{slice_with, MeshData, Plane, SliceConfig};

/// An axis-aligned cube spanning [-1, 1]^3, four vertices per face, CCW seen
/// from outside.
fn build_cube() -> MeshData {
    let mut vertices = Vec::new();
    let mut normals = Vec::new();
    let mut uvs = Vec::new();
    let mut indices = Vec::new();

    let mut face = |normal: Vector, corners: [Point; 4]| {
        let base = vertices.len() as u32;
        vertices.extend_from_slice(&corners);
        normals.extend_from_slice(&[normal; 4]);
        uvs.extend_from_slice(&[
            UV::new(0.0, 0.0),
            UV::new(1.0, 0.0),
            UV::new(1.0, 1.0),
            UV::new(0.0, 1.0),
        ]);
        indices.push([base, base + 1, base + 2]);
        indices.push([base, base + 2, base + 3]);
    };

    face(
        Vector::x(),
        [
            Point::new(1.0, -1.0, -1.0),
            Point::new(1.0, 1.0, -1.0),
            Point::new(1.0, 1.0, 1.0),
            Point::new(1.0, -1.0, 1.0),
        ],
    );
    face(
        -Vector::x(),
        [
            Point::new(-1.0, -1.0, -1.0),
            Point::new(-1.0, -1.0, 1.0),
            Point::new(-1.0, 1.0, 1.0),
            Point::new(-1.0, 1.0, -1.0),
        ],
    );
    face(
        Vector::y(),
        [
            Point::new(-1.0, 1.0, -1.0),
            Point::new(-1.0, 1.0, 1.0),
            Point::new(1.0, 1.0, 1.0),
            Point::new(1.0, 1.0, -1.0),
        ],
    );
    face(
        -Vector::y(),
        [
            Point::new(-1.0, -1.0, -1.0),
            Point::new(1.0, -1.0, -1.0),
            Point::new(1.0, -1.0, 1.0),
            Point::new(-1.0, -1.0, 1.0),
        ],
    );
    face(
        Vector::z(),
        [
            Point::new(-1.0, -1.0, 1.0),
            Point::new(1.0, -1.0, 1.0),
            Point::new(1.0, 1.0, 1.0),
            Point::new(-1.0, 1.0, 1.0),
        ],
    );
    face(
        -Vector::z(),
        [
            Point::new(-1.0, -1.0, -1.0),
            Point::new(-1.0, 1.0, -1.0),
            Point::new(1.0, 1.0, -1.0),
            Point::new(1.0, -1.0, -1.0),
        ],
    );

    MeshData::new(vertices, normals, uvs, indices).unwrap()
}

fn geometric_normal(mesh: &MeshData, tri: &[u32; 3]) -> Vector {
    let a = mesh.vertices()[tri[0] as usize];
    let b = mesh.vertices()[tri[1] as usize];
    let c = mesh.vertices()[tri[2] as usize];
    (b - a).cross(&(c - a))
}

#[test]
fn capping_closes_the_cube_cross_section() {
    let cube = build_cube();
    let plane = Plane::new(Vector::y(), Point::origin());

    let open = slice_with(&cube, &plane, &SliceConfig::default()).unwrap();
    let capped = slice_with(
        &cube,
        &plane,
        &SliceConfig {
            cap: true,
            ..Default::default()
        },
    )
    .unwrap();

    // The cut rim of a centered cube has 8 vertices (4 corners plus the 4
    // points where the face diagonals cross the plane), so a closed fan adds
    // 8 triangles per half.
    assert_eq!(open.normal_side.indices().len(), 14);
    assert_eq!(capped.normal_side.indices().len(), 22);
    assert_eq!(capped.other_side.indices().len(), 22);

    // The cap fills the 2x2 cross-section square on each side.
    assert_relative_eq!(
        capped.normal_side.total_area() - open.normal_side.total_area(),
        4.0,
        max_relative = 1.0e-5
    );
    assert_relative_eq!(
        capped.other_side.total_area() - open.other_side.total_area(),
        4.0,
        max_relative = 1.0e-5
    );
}

#[test]
fn cap_faces_point_away_from_each_half() {
    let cube = build_cube();
    let plane = Plane::new(Vector::y(), Point::origin());

    let capped = slice_with(
        &cube,
        &plane,
        &SliceConfig {
            cap: true,
            ..Default::default()
        },
    )
    .unwrap();

    // Cap triangles are appended after the 14 surface triangles. The upper
    // half's cap faces -y, the lower half's faces +y.
    for (half, outward) in [
        (&capped.normal_side, -Vector::y()),
        (&capped.other_side, Vector::y()),
    ] {
        assert_eq!(half.indices().len(), 22);
        for tri in &half.indices()[14..] {
            assert!(geometric_normal(half, tri).dot(&outward) > 0.0);
        }
    }
}

#[test]
fn cap_geometry_lies_on_the_plane() {
    let cube = build_cube();
    let plane = Plane::new(Vector::y(), Point::origin());

    let capped = slice_with(
        &cube,
        &plane,
        &SliceConfig {
            cap: true,
            ..Default::default()
        },
    )
    .unwrap();

    for half in [&capped.normal_side, &capped.other_side] {
        for tri in &half.indices()[14..] {
            for &i in tri {
                assert!(half.vertices()[i as usize].y.abs() < 1.0e-6);
            }
        }
    }

    // The fan centroid of the centered cube's rim is the origin, and it
    // carries the cap's face normal.
    let centroid = capped
        .normal_side
        .vertices()
        .iter()
        .position(|v| *v == Point::origin())
        .unwrap();
    assert_relative_eq!(capped.normal_side.normals()[centroid], -Vector::y());
}

use crate::mesh::MeshData;
use obj::{Group, IndexTuple, ObjData, ObjError, Object, SimplePolygon};
use std::path::PathBuf;

impl MeshData {
    /// Outputs a Wavefront (`.obj`) file at the given path, with positions,
    /// texture coordinates and normals.
    ///
    /// Purely diagnostic; this function is enabled by the `wavefront` feature
    /// flag.
    pub fn to_obj_file(&self, path: &PathBuf) -> Result<(), ObjError> {
        let mut file = std::fs::File::create(path).unwrap();

        ObjData {
            #[expect(clippy::unnecessary_cast)]
            position: self
                .vertices()
                .iter()
                .map(|v| [v.x as f32, v.y as f32, v.z as f32])
                .collect(),
            #[expect(clippy::unnecessary_cast)]
            texture: self
                .uvs()
                .iter()
                .map(|uv| [uv.x as f32, uv.y as f32])
                .collect(),
            #[expect(clippy::unnecessary_cast)]
            normal: self
                .normals()
                .iter()
                .map(|n| [n.x as f32, n.y as f32, n.z as f32])
                .collect(),
            objects: vec![Object {
                groups: vec![Group {
                    polys: self
                        .indices()
                        .iter()
                        .map(|tri| {
                            SimplePolygon(
                                tri.iter()
                                    .map(|&i| {
                                        IndexTuple(
                                            i as usize,
                                            Some(i as usize),
                                            Some(i as usize),
                                        )
                                    })
                                    .collect(),
                            )
                        })
                        .collect(),
                    name: "".to_string(),
                    index: 0,
                    material: None,
                }],
                name: "".to_string(),
            }],
            ..Default::default()
        }
        .write_to_buf(&mut file)
    }
}

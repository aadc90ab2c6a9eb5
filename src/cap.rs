//! Closing the planar cross-section left behind by a slice.
//!
//! The slicing pass records the plane-generated vertices of each side in
//! emission order, so consecutive pairs are the cut edges. Those edges arrive
//! in whatever order the triangles were visited; before fan-triangulating we
//! stitch them into loops by walking shared endpoint positions.

use crate::builder::MeshBuilder;
use crate::math::{Point, Real, Vector, UV};
use crate::vertex::VertexData;
use hashbrown::hash_map::Entry;
use hashbrown::HashMap;
use na::Vector2;
use ordered_float::OrderedFloat;

/// Exact-bits position key. Cut points generated from the same mesh edge land
/// on bit-identical coordinates, so exact equality is enough to stitch the
/// rim even when the two sides never shared vertex indices.
type PosKey = [OrderedFloat<Real>; 3];

fn pos_key(p: &Point) -> PosKey {
    [OrderedFloat(p.x), OrderedFloat(p.y), OrderedFloat(p.z)]
}

/// Closes the cut boundary of one accumulator with centroid fans.
///
/// `normal` is the outward direction of the cap face for this side, in the
/// mesh's storage frame: the opposite of the cutting normal for the
/// normal-side half, the cutting normal itself for the other half.
pub(crate) fn cap_boundary(builder: &mut MeshBuilder, normal: &Vector) {
    // One node per distinct rim position, with a representative vertex index.
    let mut node_ids: HashMap<PosKey, usize> = HashMap::new();
    let mut nodes: Vec<u32> = Vec::new();
    let mut adjacency: Vec<Vec<usize>> = Vec::new();

    let boundary = builder.boundary().to_vec();
    for pair in boundary.chunks_exact(2) {
        let mut edge = [0usize; 2];
        for (slot, &index) in edge.iter_mut().zip(pair) {
            let key = pos_key(&builder.vertex_data(index).position);
            *slot = match node_ids.entry(key) {
                Entry::Occupied(entry) => *entry.get(),
                Entry::Vacant(entry) => {
                    let id = nodes.len();
                    entry.insert(id);
                    nodes.push(index);
                    adjacency.push(Vec::new());
                    id
                }
            };
        }

        // A clamped cut can degenerate an edge to a single point; it
        // contributes nothing to the rim.
        if edge[0] != edge[1] {
            adjacency[edge[0]].push(edge[1]);
            adjacency[edge[1]].push(edge[0]);
        }
    }

    // Trace each loop by walking to an unvisited neighbor until stuck.
    let mut visited = vec![false; nodes.len()];
    for start in 0..nodes.len() {
        if visited[start] || adjacency[start].is_empty() {
            continue;
        }

        let mut ring = vec![start];
        visited[start] = true;
        let mut current = start;
        while let Some(&next) = adjacency[current].iter().find(|&&n| !visited[n]) {
            visited[next] = true;
            ring.push(next);
            current = next;
        }

        if ring.len() < 3 {
            continue;
        }

        let closed = adjacency[current].contains(&start);
        if !closed {
            log::debug!(
                "cut boundary does not close into a loop ({} rim vertices); capping the open chain",
                ring.len()
            );
        }

        fan_triangulate(builder, &nodes, &ring, normal, closed);
    }
}

/// Fans one ordered rim around its centroid.
fn fan_triangulate(
    builder: &mut MeshBuilder,
    nodes: &[u32],
    ring: &[usize],
    normal: &Vector,
    closed: bool,
) {
    let mut position_sum = Vector::zeros();
    let mut uv_sum = Vector2::<Real>::zeros();
    for &node in ring {
        let vertex = builder.vertex_data(nodes[node]);
        position_sum += vertex.position.coords;
        uv_sum += vertex.uv.coords;
    }

    let inv_len = 1.0 / ring.len() as Real;
    let centroid = VertexData::new(
        Point::from(position_sum * inv_len),
        *normal,
        UV::from(uv_sum * inv_len),
    );
    let center = builder.push_vertex(centroid);
    let c = centroid.position;

    let num_edges = if closed { ring.len() } else { ring.len() - 1 };
    for i in 0..num_edges {
        let ia = nodes[ring[i]];
        let ib = nodes[ring[(i + 1) % ring.len()]];
        let a = builder.vertex_data(ia).position;
        let b = builder.vertex_data(ib).position;

        // Orient each fan triangle so its face points along the cap normal.
        if (a - c).cross(&(b - c)).dot(normal) > 0.0 {
            builder.push_triangle([center, ia, ib]);
        } else {
            builder.push_triangle([center, ib, ia]);
        }
    }
}

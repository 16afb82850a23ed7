use crate::model::{EdgeKey, Polygon, Vertex, VertexId};
use std::collections::HashMap;
use tracing::debug;

/// Boundary edge keys of a closed vertex ring, in walk order, with the
/// last -> first edge included and self-pairs skipped.
pub fn boundary_keys(vertices: &[Vertex], ring: &[VertexId]) -> Vec<EdgeKey> {
    let n = ring.len();
    // a two-vertex ring is a single segment, not a pair of edges
    let walk = if n == 2 { 1 } else { n };
    let mut keys = Vec::with_capacity(walk);
    for i in 0..walk {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        if a == b {
            continue;
        }
        let (Some(va), Some(vb)) = (vertices.get(a as usize), vertices.get(b as usize)) else {
            continue;
        };
        let key = EdgeKey::new(va.key(), vb.key());
        if !key.is_degenerate() {
            keys.push(key);
        }
    }
    keys
}

/// Number of boundary keys backed by a correct drawn edge.
pub fn satisfied_count(poly: &Polygon, drawn: &HashMap<EdgeKey, bool>) -> u32 {
    poly.boundary
        .iter()
        .filter(|k| drawn.get(k).copied().unwrap_or(false))
        .count() as u32
}

/// Updates `completed_edges` on every open polygon and completes those
/// whose whole boundary is drawn. Completed polygons are left untouched.
pub fn check_polygons(polygons: &mut [Polygon], drawn: &HashMap<EdgeKey, bool>) -> Vec<u32> {
    let mut newly = Vec::new();
    for (i, poly) in polygons.iter_mut().enumerate() {
        if poly.completed {
            continue;
        }
        poly.completed_edges = satisfied_count(poly, drawn);
        if poly.completed_edges == poly.required_edges() {
            poly.completed = true;
            poly.opacity = 1.0;
            debug!(polygon = i, id = poly.id.as_deref(), "polygon completed");
            newly.push(i as u32);
        }
    }
    newly
}

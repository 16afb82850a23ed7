use crate::geometry::tolerance::dist2;
use crate::model::{Vertex, VertexId};

// Nearest vertex within `radius`; on equal distance the lower id wins.
pub fn pick_vertex_impl(vertices: &[Vertex], x: f32, y: f32, radius: f32) -> Option<(VertexId, f32)> {
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    let r2 = radius * radius;
    let mut best: Option<(VertexId, f32)> = None;
    for (i, v) in vertices.iter().enumerate() {
        let d2 = dist2(v.x, v.y, x, y);
        if d2 <= r2 && best.map_or(true, |(_, bd)| d2 < bd) {
            best = Some((i as VertexId, d2));
        }
    }
    best.map(|(id, d2)| (id, d2.sqrt()))
}

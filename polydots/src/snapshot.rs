//! Read-only view of a [`Puzzle`] with everything a renderer needs.

use crate::model::VertexId;
use crate::svg::to_path_data;
use crate::Puzzle;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VertexView {
    pub id: VertexId,
    pub x: f32,
    pub y: f32,
    pub remaining: u32,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EdgeView {
    pub a: VertexId,
    pub b: VertexId,
    pub correct: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PolygonView {
    pub id: Option<String>,
    pub vertices: Vec<VertexId>,
    pub d: String,
    pub fill: String,
    pub fill_rgba: String,
    pub opacity: f32,
    pub completed: bool,
    pub completed_edges: u32,
    pub required_edges: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub version: u64,
    pub solved: bool,
    pub vertices: Vec<VertexView>,
    pub edges: Vec<EdgeView>,
    pub polygons: Vec<PolygonView>,
}

pub fn snapshot_impl(p: &Puzzle) -> Snapshot {
    let vertices = p
        .vertices
        .iter()
        .enumerate()
        .map(|(i, v)| VertexView {
            id: i as VertexId,
            x: v.x,
            y: v.y,
            remaining: v.remaining,
            selected: v.selected,
        })
        .collect();
    let edges = p
        .edges
        .iter()
        .map(|e| EdgeView { a: e.a, b: e.b, correct: e.correct })
        .collect();
    let polygons = p
        .polygons
        .iter()
        .enumerate()
        .map(|(i, poly)| PolygonView {
            id: poly.id.clone(),
            vertices: poly.vertices.clone(),
            d: to_path_data(&p.polygon_points(i as u32).unwrap_or_default()),
            fill: poly.fill.to_hex(),
            fill_rgba: poly.fill.to_rgba_css(poly.opacity),
            opacity: poly.opacity,
            completed: poly.completed,
            completed_edges: poly.completed_edges,
            required_edges: poly.required_edges(),
        })
        .collect();
    Snapshot {
        version: p.version,
        solved: p.is_solved(),
        vertices,
        edges,
        polygons,
    }
}

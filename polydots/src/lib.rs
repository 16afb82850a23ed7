pub mod document;
pub mod error;
pub mod model;
pub mod options;
pub mod session;
pub mod snapshot;
pub mod svg;
pub mod geometry {
    pub mod limits;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod builder;
    pub mod completion;
    pub mod picking;
}

pub use error::{LoadError, ParseError};
pub use model::{Color, CoordKey, Edge, EdgeKey, Point, Polygon, SourcePath, Vertex, VertexId};
pub use options::{CommandPolicy, PuzzleOptions};
pub use session::{LoadStatus, Session};
pub use snapshot::Snapshot;

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Owned game state: the vertex graph derived from the artwork, the
/// edges drawn so far and per-polygon completion.
#[derive(Clone, Debug)]
pub struct Puzzle {
    pub(crate) vertices: Vec<Vertex>,                 // id is index
    pub(crate) vertex_index: HashMap<CoordKey, VertexId>,
    pub(crate) polygons: Vec<Polygon>,
    pub(crate) correct: HashSet<EdgeKey>,             // fixed at load
    pub(crate) edges: Vec<Edge>,                      // draw order
    pub(crate) drawn: HashMap<EdgeKey, bool>,         // key -> correct
    pub(crate) selected: Option<VertexId>,
    pub(crate) pick_radius: f32,
    pub(crate) version: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    SameVertex,
    UnknownVertex,
    Duplicate,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConnectOutcome {
    Rejected { reason: RejectReason },
    Incorrect { edge: u32 },
    Correct { edge: u32, completed: Vec<u32> },
}

impl ConnectOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, ConnectOutcome::Rejected { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectOutcome {
    Missed,
    Cleared { vertex: VertexId },
    Selected { vertex: VertexId },
    Deselected { vertex: VertexId },
    Connected { outcome: ConnectOutcome },
}

impl Puzzle {
    pub fn from_paths(paths: &[SourcePath]) -> Result<Puzzle, LoadError> {
        algorithms::builder::build_impl(paths)
    }

    pub fn from_svg(svg: &str, options: &PuzzleOptions) -> Result<Puzzle, LoadError> {
        let paths = document::load_source_paths(svg, options.unknown_commands)?;
        let mut p = Puzzle::from_paths(&paths)?;
        p.set_pick_radius(options.pick_radius);
        Ok(p)
    }

    /// Increments on every state change; a changed version means repaint.
    pub fn version(&self) -> u64 {
        self.version
    }

    fn bump(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    pub fn pick_radius(&self) -> f32 {
        self.pick_radius
    }

    pub fn set_pick_radius(&mut self, r: f32) -> bool {
        if !geometry::limits::in_pick_bounds(r) {
            return false;
        }
        self.pick_radius = r;
        true
    }

    // Read access
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id as usize)
    }
    pub fn vertex_at(&self, x: f32, y: f32) -> Option<VertexId> {
        self.vertex_index.get(&CoordKey::of(x, y)).copied()
    }
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
    pub fn edge_count(&self) -> u32 {
        self.edges.len() as u32
    }
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }
    pub fn polygon(&self, idx: u32) -> Option<&Polygon> {
        self.polygons.get(idx as usize)
    }
    pub fn polygon_count(&self) -> u32 {
        self.polygons.len() as u32
    }
    pub fn correct_connections(&self) -> &HashSet<EdgeKey> {
        &self.correct
    }
    pub fn selected(&self) -> Option<VertexId> {
        self.selected
    }

    pub fn edge_key(&self, a: VertexId, b: VertexId) -> Option<EdgeKey> {
        let va = self.vertex(a)?;
        let vb = self.vertex(b)?;
        Some(EdgeKey::new(va.key(), vb.key()))
    }

    pub fn is_correct_pair(&self, a: VertexId, b: VertexId) -> bool {
        self.edge_key(a, b).map_or(false, |k| self.correct.contains(&k))
    }

    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.edge_key(a, b).map_or(false, |k| self.drawn.contains_key(&k))
    }

    pub fn completed_count(&self) -> u32 {
        self.polygons.iter().filter(|p| p.completed).count() as u32
    }

    pub fn is_solved(&self) -> bool {
        !self.polygons.is_empty() && self.polygons.iter().all(|p| p.completed)
    }

    /// Outline of a polygon in vertex coordinates.
    pub fn polygon_points(&self, idx: u32) -> Option<Vec<Point>> {
        let poly = self.polygon(idx)?;
        Some(
            poly.vertices
                .iter()
                .filter_map(|&v| self.vertex(v))
                .map(|v| Point::new(v.x, v.y))
                .collect(),
        )
    }

    // Player actions

    pub fn connect(&mut self, a: VertexId, b: VertexId) -> ConnectOutcome {
        let key = match self.edge_key(a, b) {
            Some(k) => k,
            None => return ConnectOutcome::Rejected { reason: RejectReason::UnknownVertex },
        };
        if a == b || key.is_degenerate() {
            return ConnectOutcome::Rejected { reason: RejectReason::SameVertex };
        }
        if self.drawn.contains_key(&key) {
            debug!(a, b, "duplicate connection ignored");
            return ConnectOutcome::Rejected { reason: RejectReason::Duplicate };
        }
        let correct = self.correct.contains(&key);
        let edge = self.edges.len() as u32;
        self.edges.push(Edge { a, b, correct });
        self.drawn.insert(key, correct);
        self.bump();
        if !correct {
            debug!(a, b, "incorrect connection");
            return ConnectOutcome::Incorrect { edge };
        }
        for v in [a, b] {
            if let Some(vx) = self.vertices.get_mut(v as usize) {
                vx.remaining = vx.remaining.saturating_sub(1);
            }
        }
        let completed = self.check_completion();
        debug!(a, b, completed = completed.len(), "correct connection");
        ConnectOutcome::Correct { edge, completed }
    }

    /// Re-evaluates every incomplete polygon; returns indices newly completed.
    pub fn check_completion(&mut self) -> Vec<u32> {
        let done = algorithms::completion::check_polygons(&mut self.polygons, &self.drawn);
        if !done.is_empty() {
            self.bump();
        }
        done
    }

    pub fn pick_vertex(&self, x: f32, y: f32) -> Option<VertexId> {
        algorithms::picking::pick_vertex_impl(&self.vertices, x, y, self.pick_radius).map(|(id, _)| id)
    }

    fn set_selected(&mut self, v: Option<VertexId>) {
        if let Some(prev) = self.selected.and_then(|id| self.vertices.get_mut(id as usize)) {
            prev.selected = false;
        }
        if let Some(next) = v.and_then(|id| self.vertices.get_mut(id as usize)) {
            next.selected = true;
        }
        self.selected = v;
        self.bump();
    }

    /// Click/tap handling: select a vertex, toggle it off, or connect the
    /// previously selected vertex to the one under the pointer.
    pub fn select_or_connect(&mut self, x: f32, y: f32) -> SelectOutcome {
        let hit = self.pick_vertex(x, y);
        match (self.selected, hit) {
            (None, None) => SelectOutcome::Missed,
            (Some(prev), None) => {
                self.set_selected(None);
                SelectOutcome::Cleared { vertex: prev }
            }
            (None, Some(v)) => {
                self.set_selected(Some(v));
                SelectOutcome::Selected { vertex: v }
            }
            (Some(prev), Some(v)) if prev == v => {
                self.set_selected(None);
                SelectOutcome::Deselected { vertex: v }
            }
            (Some(prev), Some(v)) => {
                self.set_selected(None);
                SelectOutcome::Connected { outcome: self.connect(prev, v) }
            }
        }
    }

    /// Drag gesture released at `(x, y)` after starting on `start`.
    pub fn drag_connect(&mut self, start: VertexId, x: f32, y: f32) -> SelectOutcome {
        if self.selected.is_some() {
            self.set_selected(None);
        }
        if self.vertex(start).is_none() {
            return SelectOutcome::Missed;
        }
        match self.pick_vertex(x, y) {
            Some(end) if end != start => SelectOutcome::Connected { outcome: self.connect(start, end) },
            _ => SelectOutcome::Missed,
        }
    }

    /// Removes the incorrect edges only; correct progress and completed
    /// polygons are kept. Returns how many edges were removed.
    pub fn erase(&mut self) -> u32 {
        let before = self.edges.len();
        self.edges.retain(|e| e.correct);
        self.drawn.retain(|_, correct| *correct);
        let removed = (before - self.edges.len()) as u32;
        if self.selected.is_some() {
            self.set_selected(None);
        }
        if removed > 0 {
            self.bump();
        }
        debug!(removed, "erased incorrect edges");
        removed
    }

    /// Back to the freshly loaded state: no edges, full counters, nothing
    /// completed.
    pub fn reset(&mut self) {
        self.edges.clear();
        self.drawn.clear();
        self.selected = None;
        for v in self.vertices.iter_mut() {
            v.remaining = v.required;
            v.selected = false;
        }
        for p in self.polygons.iter_mut() {
            p.completed = false;
            p.opacity = 0.0;
            p.completed_edges = 0;
        }
        self.bump();
    }

    // Render contract
    pub fn snapshot(&self) -> Snapshot {
        snapshot::snapshot_impl(self)
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self.snapshot()).unwrap_or(serde_json::Value::Null)
    }
}

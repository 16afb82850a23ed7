use crate::algorithms::completion::boundary_keys;
use crate::error::LoadError;
use crate::geometry::{limits, tolerance};
use crate::model::{Color, CoordKey, EdgeKey, Point, Polygon, SourcePath, Vertex, VertexId};
use crate::Puzzle;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

#[derive(Default)]
pub(crate) struct GraphBuilder {
    vertices: Vec<Vertex>,
    index: HashMap<CoordKey, VertexId>,
    correct: HashSet<EdgeKey>,
    polygons: Vec<Polygon>,
}

impl GraphBuilder {
    fn vertex_for(&mut self, p: Point) -> Result<VertexId, LoadError> {
        let key = p.key();
        if let Some(&id) = self.index.get(&key) {
            return Ok(id);
        }
        if self.vertices.len() >= limits::MAX_VERTICES {
            return Err(LoadError::TooLarge("vertices"));
        }
        let id = self.vertices.len() as VertexId;
        self.vertices.push(Vertex { x: p.x, y: p.y, required: 0, remaining: 0, selected: false });
        self.index.insert(key, id);
        Ok(id)
    }

    fn add_polygon(&mut self, id: Option<String>, fill: Color, points: &[Point]) -> Result<bool, LoadError> {
        let mark = self.vertices.len();
        let mut ring: Vec<VertexId> = Vec::with_capacity(points.len());
        for &p in points {
            let v = self.vertex_for(p)?;
            if ring.last() != Some(&v) {
                ring.push(v);
            }
        }
        // the explicit closing point duplicates the first vertex
        while ring.len() > 1 && ring.first() == ring.last() {
            ring.pop();
        }
        let boundary = boundary_keys(&self.vertices, &ring);
        if boundary.is_empty() {
            debug!(?id, points = points.len(), "subpath without boundary dropped");
            for v in self.vertices.drain(mark..) {
                self.index.remove(&v.key());
            }
            return Ok(false);
        }
        for key in &boundary {
            // each distinct edge counts once per endpoint, however many polygons share it
            if self.correct.insert(*key) {
                for end in [key.lo, key.hi] {
                    if let Some(&v) = self.index.get(&end) {
                        self.vertices[v as usize].required += 1;
                    }
                }
            }
        }
        self.polygons.push(Polygon {
            id,
            vertices: ring,
            boundary,
            fill,
            opacity: 0.0,
            completed: false,
            completed_edges: 0,
        });
        Ok(true)
    }

    fn finish(mut self) -> Puzzle {
        for v in self.vertices.iter_mut() {
            v.remaining = v.required;
        }
        Puzzle {
            vertices: self.vertices,
            vertex_index: self.index,
            polygons: self.polygons,
            correct: self.correct,
            edges: Vec::new(),
            drawn: HashMap::new(),
            selected: None,
            pick_radius: tolerance::PICK_RADIUS,
            version: 1,
        }
    }
}

pub fn build_impl(paths: &[SourcePath]) -> Result<Puzzle, LoadError> {
    let mut b = GraphBuilder::default();
    for path in paths {
        for sub in &path.subpaths {
            b.add_polygon(path.id.clone(), path.fill, sub)?;
        }
    }
    if b.polygons.is_empty() {
        return Err(LoadError::NoPaths);
    }
    info!(
        vertices = b.vertices.len(),
        polygons = b.polygons.len(),
        edges = b.correct.len(),
        "puzzle built"
    );
    Ok(b.finish())
}

use crate::geometry::tolerance::quantize;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type VertexId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }

    pub fn key(&self) -> CoordKey {
        CoordKey::of(self.x, self.y)
    }
}

/// Rounded coordinate used as vertex identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CoordKey(pub i32, pub i32);

impl CoordKey {
    pub fn of(x: f32, y: f32) -> Self {
        CoordKey(quantize(x), quantize(y))
    }
}

/// Unordered pair of coordinate keys; the smaller key is always stored first,
/// so `EdgeKey::new(a, b) == EdgeKey::new(b, a)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeKey {
    pub lo: CoordKey,
    pub hi: CoordKey,
}

impl EdgeKey {
    pub fn new(a: CoordKey, b: CoordKey) -> Self {
        if a <= b { EdgeKey { lo: a, hi: b } } else { EdgeKey { lo: b, hi: a } }
    }

    pub fn is_degenerate(&self) -> bool {
        self.lo == self.hi
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    /// Parses `#rgb` or `#rrggbb`; the leading `#` is optional.
    pub fn parse_hex(s: &str) -> Option<Color> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let nib = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            3 => Some(Color { r: nib(0)? * 17, g: nib(1)? * 17, b: nib(2)? * 17 }),
            6 => Some(Color { r: byte(0)?, g: byte(2)?, b: byte(4)? }),
            _ => None,
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_rgba_css(&self, opacity: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, opacity)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub required: u32,
    pub remaining: u32,
    pub selected: bool,
}

impl Vertex {
    pub fn key(&self) -> CoordKey {
        CoordKey::of(self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub a: VertexId,
    pub b: VertexId,
    pub correct: bool,
}

impl Edge {
    pub fn touches(&self, v: VertexId) -> bool {
        self.a == v || self.b == v
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Polygon {
    pub id: Option<String>,
    pub vertices: Vec<VertexId>, // closed loop, last -> first implied
    pub boundary: Vec<EdgeKey>,  // walk order, degenerate pairs removed
    pub fill: Color,
    pub opacity: f32,
    pub completed: bool,
    pub completed_edges: u32,
}

impl Polygon {
    pub fn required_edges(&self) -> u32 {
        self.boundary.len() as u32
    }
}

/// One `<path>` worth of input for the graph builder.
#[derive(Clone, Debug)]
pub struct SourcePath {
    pub id: Option<String>,
    pub fill: Color,
    pub subpaths: Vec<Vec<Point>>,
}

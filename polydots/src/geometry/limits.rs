// Centralized ingestion limits to harden against untrusted SVG input

// Document caps
pub const MAX_DOCUMENT_BYTES: usize = 16 * 1024 * 1024;
pub const MAX_PATHS: usize = 20_000;

// Path data caps
pub const MAX_SVG_TOKENS: usize = 8 * 1024 * 1024; // 8 MB worth of characters in the 'd' string
pub const MAX_SVG_COMMANDS: usize = 200_000;
pub const MAX_SVG_SUBPATHS: usize = 10_000;
pub const MAX_SVG_POINTS: usize = 500_000;

// Puzzle caps
pub const MAX_VERTICES: usize = 200_000;

// Numeric bounds
pub const COORD_MIN: f32 = -10_000_000.0;
pub const COORD_MAX: f32 =  10_000_000.0;
pub const PICK_RADIUS_MAX: f32 = 10_000.0;

#[inline]
pub fn in_coord_bounds(x: f32) -> bool { x.is_finite() && x >= COORD_MIN && x <= COORD_MAX }

#[inline]
pub fn in_pick_bounds(r: f32) -> bool { r.is_finite() && r > 0.0 && r <= PICK_RADIUS_MAX }

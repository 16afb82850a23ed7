// Centralized rounding and distance tolerances

// Vertex identity grid: coordinates are merged at 2 decimal places (0.01 px)
pub const COORD_SCALE: f32 = 100.0; // 1.0 / 0.01

// Default hit radius for pointer picking (world units)
pub const PICK_RADIUS: f32 = 15.0;

#[inline]
pub fn quantize(v: f32) -> i32 { (v * COORD_SCALE).round() as i32 }

#[inline]
pub fn dist2(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let dx = ax - bx;
    let dy = ay - by;
    dx * dx + dy * dy
}

use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

/// Browser handle for one game: owns the load session and, once the
/// artwork is installed, the puzzle itself.
#[wasm_bindgen]
pub struct Puzzle { pub(crate) session: polydots::Session }

impl Puzzle {
    pub fn rs_new() -> Puzzle { Puzzle { session: polydots::Session::new() } }
    pub fn rs_version(&self) -> u64 { self.session.puzzle().map_or(0, |p| p.version()) }
}

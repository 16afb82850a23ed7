use crate::Puzzle;
use crate::error;
use crate::interop::{arr_f32, arr_u32, arr_u8, new_obj, set_kv, set_num};
use polydots::{LoadStatus, PuzzleOptions, Session};
use wasm_bindgen::prelude::*;
use web_sys::console;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn status_str(s: LoadStatus) -> &'static str {
    match s {
        LoadStatus::Pending => "pending",
        LoadStatus::Ready => "ready",
        LoadStatus::Failed => "failed",
    }
}

fn to_js<T: serde::Serialize>(v: &T) -> JsValue {
    serde_wasm_bindgen::to_value(v).unwrap_or(JsValue::NULL)
}

// Error for an action attempted before a puzzle is installed.
fn refused(session: &Session) -> JsValue {
    match session.failure() {
        Some(reason) => error::load_failed(reason),
        None => error::not_ready(status_str(session.status())),
    }
}

#[wasm_bindgen]
impl Puzzle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Puzzle {
        crate::Puzzle::rs_new()
    }
    /// Monotonic state version; repaint whenever it changes.
    pub fn version(&self) -> u64 {
        self.rs_version()
    }

    // Loading
    pub fn status(&self) -> String {
        status_str(self.session.status()).to_string()
    }
    pub fn failure(&self) -> Option<String> {
        self.session.failure().map(str::to_string)
    }
    pub fn set_options_res(&mut self, v: JsValue) -> JsValue {
        let val = match serde_wasm_bindgen::from_value::<serde_json::Value>(v) {
            Ok(val) => val,
            Err(e) => return error::err("invalid_options", format!("{}", e), None),
        };
        let res = PuzzleOptions::from_json_value(val).and_then(|o| self.session.set_options(o));
        match res {
            Ok(()) => error::ok(JsValue::TRUE),
            Err((code, msg)) => error::err(code, msg, None),
        }
    }
    pub fn load_svg(&mut self, svg: &str) -> bool {
        let _ = self.load_svg_res(svg);
        self.session.status() == LoadStatus::Ready
    }
    pub fn load_svg_res(&mut self, svg: &str) -> JsValue {
        match self.session.install_svg(svg) {
            Ok(p) => {
                let o = new_obj();
                set_num(&o, "vertices", p.vertex_count() as f64);
                set_num(&o, "polygons", p.polygon_count() as f64);
                set_num(&o, "edges", p.correct_connections().len() as f64);
                error::ok(o.into())
            }
            Err(e) => {
                console::warn_1(&JsValue::from_str(&format!("puzzle load failed: {}", e)));
                error::load_error(&e)
            }
        }
    }
    /// Host-side failure (fetch error, missing asset) before any SVG arrived.
    pub fn load_failed(&mut self, reason: &str) {
        console::warn_1(&JsValue::from_str(&format!("puzzle load failed: {}", reason)));
        self.session.fail(reason);
    }

    // Counts
    pub fn vertex_count(&self) -> u32 {
        self.session.puzzle().map_or(0, |p| p.vertex_count())
    }
    pub fn edge_count(&self) -> u32 {
        self.session.puzzle().map_or(0, |p| p.edge_count())
    }
    pub fn polygon_count(&self) -> u32 {
        self.session.puzzle().map_or(0, |p| p.polygon_count())
    }
    pub fn completed_count(&self) -> u32 {
        self.session.puzzle().map_or(0, |p| p.completed_count())
    }
    pub fn is_solved(&self) -> bool {
        self.session.puzzle().map_or(false, |p| p.is_solved())
    }
    pub fn selected(&self) -> Option<u32> {
        self.session.puzzle().and_then(|p| p.selected())
    }

    // Player actions
    pub fn connect(&mut self, a: u32, b: u32) -> JsValue {
        match self.session.puzzle_mut() {
            Some(p) => to_js(&p.connect(a, b)),
            None => JsValue::NULL,
        }
    }
    pub fn connect_res(&mut self, a: u32, b: u32) -> JsValue {
        let Some(p) = self.session.puzzle_mut() else { return refused(&self.session) };
        for id in [a, b] {
            if p.vertex(id).is_none() {
                return error::invalid_id("vertex", id);
            }
        }
        error::ok(to_js(&p.connect(a, b)))
    }
    pub fn select_or_connect(&mut self, x: f32, y: f32) -> JsValue {
        match self.session.puzzle_mut() {
            Some(p) => to_js(&p.select_or_connect(x, y)),
            None => JsValue::NULL,
        }
    }
    pub fn select_or_connect_res(&mut self, x: f32, y: f32) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        let Some(p) = self.session.puzzle_mut() else { return refused(&self.session) };
        error::ok(to_js(&p.select_or_connect(x, y)))
    }
    pub fn drag_connect(&mut self, start: u32, x: f32, y: f32) -> JsValue {
        match self.session.puzzle_mut() {
            Some(p) => to_js(&p.drag_connect(start, x, y)),
            None => JsValue::NULL,
        }
    }
    pub fn drag_connect_res(&mut self, start: u32, x: f32, y: f32) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        let Some(p) = self.session.puzzle_mut() else { return refused(&self.session) };
        if p.vertex(start).is_none() {
            return error::invalid_id("vertex", start);
        }
        error::ok(to_js(&p.drag_connect(start, x, y)))
    }
    pub fn pick_vertex(&self, x: f32, y: f32) -> Option<u32> {
        self.session.puzzle().and_then(|p| p.pick_vertex(x, y))
    }
    /// Removes incorrect edges; returns how many were removed.
    pub fn erase(&mut self) -> u32 {
        self.session.puzzle_mut().map_or(0, |p| p.erase())
    }
    pub fn reset(&mut self) {
        if let Some(p) = self.session.puzzle_mut() {
            p.reset();
        }
    }

    // Typed arrays getters
    pub fn get_vertex_data(&self) -> JsValue {
        let mut ids = Vec::new();
        let mut positions = Vec::new();
        let mut remaining = Vec::new();
        let mut selected = Vec::new();
        if let Some(p) = self.session.puzzle() {
            for (i, v) in p.vertices().iter().enumerate() {
                ids.push(i as u32);
                positions.push(v.x);
                positions.push(v.y);
                remaining.push(v.remaining);
                selected.push(v.selected as u8);
            }
        }
        let obj = new_obj();
        set_kv(&obj, "ids", &arr_u32(&ids).into());
        set_kv(&obj, "positions", &arr_f32(&positions).into());
        set_kv(&obj, "remaining", &arr_u32(&remaining).into());
        set_kv(&obj, "selected", &arr_u8(&selected).into());
        obj.into()
    }
    pub fn get_edge_data(&self) -> JsValue {
        let mut endpoints = Vec::new();
        let mut correct = Vec::new();
        if let Some(p) = self.session.puzzle() {
            for e in p.edges() {
                endpoints.push(e.a);
                endpoints.push(e.b);
                correct.push(e.correct as u8);
            }
        }
        let obj = new_obj();
        set_kv(&obj, "endpoints", &arr_u32(&endpoints).into());
        set_kv(&obj, "correct", &arr_u8(&correct).into());
        obj.into()
    }
    pub fn get_polygons(&self) -> JsValue {
        match self.session.puzzle() {
            Some(p) => to_js(&p.snapshot().polygons),
            None => JsValue::NULL,
        }
    }
    pub fn snapshot(&self) -> JsValue {
        match self.session.puzzle() {
            Some(p) => to_js(&p.snapshot()),
            None => JsValue::NULL,
        }
    }
    pub fn snapshot_res(&self) -> JsValue {
        match self.session.puzzle() {
            Some(p) => error::ok(to_js(&p.snapshot())),
            None => refused(&self.session),
        }
    }
}

impl Default for Puzzle {
    fn default() -> Self {
        Self::new()
    }
}

use js_sys::Reflect;
use polydots_wasm::Puzzle;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const TRIANGLE: &str = r##"<svg><path id="t" fill="#c33" d="M 0 0 L 10 0 L 5 10 Z"/></svg>"##;

fn get(v: &JsValue, k: &str) -> JsValue {
    Reflect::get(v, &JsValue::from_str(k)).unwrap_or(JsValue::UNDEFINED)
}

fn is_err(v: &JsValue, code: &str) -> bool {
    if get(v, "ok").as_bool() != Some(false) {
        return false;
    }
    get(&get(v, "error"), "code").as_string().map_or(false, |s| s == code)
}

fn is_ok(v: &JsValue) -> bool {
    get(v, "ok").as_bool() == Some(true)
}

#[wasm_bindgen_test]
fn actions_before_load_report_not_ready() {
    let mut p = Puzzle::new();
    assert_eq!(p.status(), "pending");
    assert!(is_err(&p.connect_res(0, 1), "not_ready"));
    assert!(is_err(&p.select_or_connect_res(0.0, 0.0), "not_ready"));
    assert!(is_err(&p.snapshot_res(), "not_ready"));
    assert_eq!(p.erase(), 0);
    assert_eq!(p.vertex_count(), 0);
    assert!(!p.is_solved());
}

#[wasm_bindgen_test]
fn load_errors_carry_codes() {
    let mut p = Puzzle::new();
    assert!(is_err(&p.load_svg_res("<svg"), "invalid_svg"));
    assert_eq!(p.status(), "failed");
    assert!(p.failure().is_some());
    assert!(is_err(&p.load_svg_res("<svg></svg>"), "no_paths"));

    let r = p.load_svg_res(r#"<svg><path id="bad" d="M 0 0 C 1 1 2 2 3 3"/></svg>"#);
    assert!(is_err(&r, "parse_error"));
    let data = get(&get(&r, "error"), "data");
    assert_eq!(get(&data, "index").as_f64(), Some(0.0));
    assert_eq!(get(&data, "id").as_string().as_deref(), Some("bad"));

    p.load_failed("fetch failed: 404");
    assert_eq!(p.status(), "failed");
    assert_eq!(p.failure().as_deref(), Some("fetch failed: 404"));
    let r = p.connect_res(0, 1);
    assert!(is_err(&r, "load_failed"));
    assert_eq!(get(&get(&get(&r, "error"), "data"), "reason").as_string().as_deref(), Some("fetch failed: 404"));
}

#[wasm_bindgen_test]
fn bad_arguments_do_not_mutate() {
    let mut p = Puzzle::new();
    assert!(is_ok(&p.load_svg_res(TRIANGLE)));
    let ver = p.version();
    assert!(is_err(&p.connect_res(0, 99), "invalid_id"));
    assert!(is_err(&p.drag_connect_res(42, 0.0, 0.0), "invalid_id"));
    assert!(is_err(&p.select_or_connect_res(f32::NAN, 0.0), "non_finite"));
    assert!(is_err(&p.drag_connect_res(0, 0.0, f32::INFINITY), "non_finite"));
    assert_eq!(p.version(), ver, "state mutated on error");
}

#[wasm_bindgen_test]
fn options_are_validated() {
    let mut p = Puzzle::new();
    let bad = js_sys::JSON::parse(r#"{"pick_radius": -3}"#).unwrap();
    assert!(is_err(&p.set_options_res(bad), "out_of_range"));
    let bad = js_sys::JSON::parse(r#"{"unknown_commands": "maybe"}"#).unwrap();
    assert!(is_err(&p.set_options_res(bad), "invalid_options"));
    let good = js_sys::JSON::parse(r#"{"unknown_commands": "skip"}"#).unwrap();
    assert!(is_ok(&p.set_options_res(good)));
    // curves are now skipped instead of failing the load
    assert!(p.load_svg(r#"<svg><path d="M 0 0 C 1 1 2 2 3 3 L 10 0 L 5 10 Z"/></svg>"#));
}

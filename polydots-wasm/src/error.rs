use wasm_bindgen::prelude::*;
use js_sys::Object;
use polydots::LoadError;
use crate::interop::{new_obj, set_kv, set_num};

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "param", &JsValue::from_str(param));
    err("non_finite", format!("parameter '{}' must be finite", param), Some(d.into()))
}

#[inline]
pub fn invalid_id(kind: &str, id: u32) -> JsValue {
    let d = new_obj();
    set_kv(&d, "kind", &JsValue::from_str(kind));
    set_num(&d, "id", id as f64);
    err("invalid_id", format!("invalid {} id", kind), Some(d.into()))
}

#[inline]
pub fn not_ready(status: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "status", &JsValue::from_str(status));
    err("not_ready", "puzzle is not loaded", Some(d.into()))
}

#[inline]
pub fn load_failed(reason: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "reason", &JsValue::from_str(reason));
    err("load_failed", format!("puzzle failed to load: {}", reason), Some(d.into()))
}

pub fn load_error(e: &LoadError) -> JsValue {
    let data: Option<Object> = match e {
        LoadError::Path { index, id, .. } => {
            let d = new_obj();
            set_num(&d, "index", *index as f64);
            if let Some(id) = id { set_kv(&d, "id", &JsValue::from_str(id)); }
            Some(d)
        }
        _ => None,
    };
    err(e.code(), e.to_string(), data.map(Into::into))
}

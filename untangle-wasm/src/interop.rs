// Plain-object and typed-array builders for values handed to JS.

use js_sys::{Float32Array, Object, Reflect, Uint32Array, Uint8Array};
use wasm_bindgen::JsValue;

/// Value for one object field.
pub enum Field<'a> {
    Num(f64),
    Str(&'a str),
    Js(JsValue),
}

impl From<u32> for Field<'_> {
    fn from(v: u32) -> Self { Field::Num(v as f64) }
}
impl From<f32> for Field<'_> {
    fn from(v: f32) -> Self { Field::Num(v as f64) }
}
impl<'a> From<&'a str> for Field<'a> {
    fn from(v: &'a str) -> Self { Field::Str(v) }
}
impl From<JsValue> for Field<'_> {
    fn from(v: JsValue) -> Self { Field::Js(v) }
}

pub fn set_field(obj: &Object, key: &str, field: Field<'_>) {
    let v = match field {
        Field::Num(n) => JsValue::from_f64(n),
        Field::Str(s) => JsValue::from_str(s),
        Field::Js(v) => v,
    };
    let _ = Reflect::set(obj, &JsValue::from_str(key), &v);
}

/// `{ k0: v0, k1: v1, .. }` in the given order.
pub fn obj_from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, Field<'a>)>) -> Object {
    let obj = Object::new();
    for (k, v) in pairs { set_field(&obj, k, v); }
    obj
}

// Typed arrays copy out of wasm memory, so the JS side may keep them
pub fn u32s(data: &[u32]) -> Uint32Array { Uint32Array::from(data) }
pub fn f32s(data: &[f32]) -> Float32Array { Float32Array::from(data) }
pub fn bytes(data: impl IntoIterator<Item = u8>) -> Uint8Array {
    let v: Vec<u8> = data.into_iter().collect();
    Uint8Array::from(v.as_slice())
}

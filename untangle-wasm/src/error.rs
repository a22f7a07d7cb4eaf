use untangle::{ConfigError, PuzzleError};
use wasm_bindgen::prelude::*;

use crate::interop::{obj_from_pairs, Field};

pub fn ok(v: JsValue) -> JsValue {
    obj_from_pairs([("ok", Field::Js(JsValue::TRUE)), ("value", Field::Js(v))]).into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let message = message.into();
    let mut fields = vec![("code", Field::Str(code)), ("message", Field::Str(&message))];
    if let Some(d) = data { fields.push(("data", Field::Js(d))); }
    let e = obj_from_pairs(fields);
    obj_from_pairs([("ok", Field::Js(JsValue::FALSE)), ("error", Field::Js(e.into()))]).into()
}

#[inline]
pub fn invalid_id(kind: &str, id: u32) -> JsValue {
    let d = obj_from_pairs([("kind", Field::from(kind)), ("id", Field::from(id))]);
    err("invalid_id", format!("invalid {} id", kind), Some(d.into()))
}

fn config_data(e: &ConfigError) -> JsValue {
    let d = match *e {
        ConfigError::TooFewOrbs(n) => obj_from_pairs([("min_orbs", Field::from(n))]),
        ConfigError::OrbRange { min, max } => obj_from_pairs([("min_orbs", Field::from(min)), ("max_orbs", Field::from(max))]),
        ConfigError::CanvasTooSmall { width, height, margin } => {
            obj_from_pairs([("width", Field::from(width)), ("height", Field::from(height)), ("margin", Field::from(margin))])
        }
        ConfigError::NonFinite(param) | ConfigError::ZeroAttempts(param) => obj_from_pairs([("param", Field::from(param))]),
    };
    d.into()
}

/// Config objects that fail to deserialize at all.
pub fn bad_config_shape(message: impl Into<String>) -> JsValue {
    err("invalid_config", message, None)
}

pub fn puzzle_error(e: &PuzzleError) -> JsValue {
    match e {
        PuzzleError::InvalidConfig(c) => err("invalid_config", e.to_string(), Some(config_data(c))),
        PuzzleError::NoTangledLayout { regenerations } => {
            let d = obj_from_pairs([("regenerations", Field::from(*regenerations))]);
            err("no_tangled_layout", e.to_string(), Some(d.into()))
        }
    }
}

#[inline]
pub fn invalid_snapshot() -> JsValue {
    err("invalid_snapshot", "snapshot JSON is malformed or references missing vertices", None)
}

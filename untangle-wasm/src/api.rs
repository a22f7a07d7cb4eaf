use crate::Puzzle;
use js_sys::{Float32Array, Uint32Array, Uint8Array};
use untangle::PuzzleConfig;
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;
use crate::interop::Field;
use crate::{error, interop, logging};

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// `level` is one of off/error/warn/info/debug/trace.
#[wasm_bindgen]
pub fn init_logging(level: &str) {
    logging::init(logging::parse_level(level));
}

fn parse_config(config: JsValue) -> Result<PuzzleConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(PuzzleConfig::default());
    }
    serde_wasm_bindgen::from_value(config).map_err(|e| error::bad_config_shape(e.to_string()))
}

fn js_seed() -> u64 {
    (js_sys::Math::random() * u32::MAX as f64) as u64
}

#[wasm_bindgen]
impl Puzzle {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Result<Puzzle, JsValue> {
        Puzzle::rs_new(seed, PuzzleConfig::default()).map_err(|e| error::puzzle_error(&e))
    }
    /// Seeded from `Math.random()`.
    pub fn random() -> Result<Puzzle, JsValue> {
        Puzzle::new(js_seed())
    }
    /// Throws the coded error object; `config` may be partial.
    pub fn with_config(seed: u64, config: JsValue) -> Result<Puzzle, JsValue> {
        let cfg = parse_config(config)?;
        Puzzle::rs_new(seed, cfg).map_err(|e| error::puzzle_error(&e))
    }
    /// `{ ok: true, value: Puzzle }` or a coded error.
    pub fn with_config_res(seed: u64, config: JsValue) -> JsValue {
        match Puzzle::with_config(seed, config) {
            Ok(p) => error::ok(JsValue::from(p)),
            Err(e) => e,
        }
    }
    /// Next puzzle from the same config and random stream.
    pub fn restart(&mut self) -> JsValue {
        match untangle::Puzzle::new(&self.config, &mut self.rng) {
            Ok(p) => {
                self.inner = p;
                error::ok(JsValue::TRUE)
            }
            Err(e) => error::puzzle_error(&e),
        }
    }

    pub fn vertex_count(&self) -> u32 { self.inner.graph().vertex_count() }
    pub fn edge_count(&self) -> u32 { self.inner.graph().edge_count() }
    pub fn cycle_count(&self) -> u32 { self.inner.graph().cycle_count() }

    pub fn get_node(&self, id: u32) -> JsValue {
        match self.inner.graph().position(id) {
            Some((x, y)) => serde_wasm_bindgen::to_value(&[x, y]).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }

    // Typed arrays getters
    pub fn get_node_data(&self) -> JsValue {
        let g = self.inner.graph();
        let ids: Vec<u32> = g.vertices.iter().map(|v| v.id).collect();
        interop::obj_from_pairs([
            ("ids", Field::Js(interop::u32s(&ids).into())),
            ("positions", Field::Js(interop::f32s(&g.position_array()).into())),
        ])
        .into()
    }
    pub fn get_edge_data(&self) -> JsValue {
        let g = self.inner.graph();
        let cycles: Vec<u32> = g.edges.iter().map(|e| e.cycle).collect();
        interop::obj_from_pairs([
            ("endpoints", Field::Js(interop::u32s(&g.endpoint_array()).into())),
            ("cycles", Field::Js(interop::u32s(&cycles).into())),
            ("crossing", Field::Js(interop::bytes(g.edges.iter().map(|e| e.crossing as u8)).into())),
            ("styles", Field::Js(interop::bytes(self.inner.edge_styles().into_iter().map(|s| s as u8)).into())),
        ])
        .into()
    }
    /// One byte per orb: 1 when its cycle is clean.
    pub fn get_orb_styles(&self) -> Uint8Array {
        interop::bytes(self.inner.orb_styles().into_iter().map(|s| s as u8))
    }
    /// `[x0, y0, x1, y1, ...]`, one point per crossing edge pair, for hint markers.
    pub fn get_crossing_points(&self) -> Float32Array {
        let pts: Vec<f32> = self.inner.crossing_hits().into_iter().flat_map(|h| [h.x, h.y]).collect();
        interop::f32s(&pts)
    }

    // Interaction
    pub fn select(&mut self, id: u32) -> JsValue {
        if !self.inner.graph().contains(id) {
            return JsValue::NULL;
        }
        serde_wasm_bindgen::to_value(&self.inner.select(id)).unwrap_or(JsValue::NULL)
    }
    pub fn select_res(&mut self, id: u32) -> JsValue {
        if !self.inner.graph().contains(id) {
            return error::invalid_id("vertex", id);
        }
        error::ok(self.select(id))
    }
    /// -1 when idle.
    pub fn selected(&self) -> i32 {
        self.inner.selected().map_or(-1, |v| v as i32)
    }
    pub fn clear_selection(&mut self) { self.inner.clear_selection(); }
    pub fn swap(&mut self, a: u32, b: u32) -> bool {
        let g = self.inner.graph();
        if !g.contains(a) || !g.contains(b) {
            return false;
        }
        self.inner.swap(a, b);
        true
    }
    pub fn swap_res(&mut self, a: u32, b: u32) -> JsValue {
        for id in [a, b] {
            if !self.inner.graph().contains(id) {
                return error::invalid_id("vertex", id);
            }
        }
        error::ok(JsValue::from_bool(self.swap(a, b)))
    }
    /// Call once a swap animation finishes: `{ crossings, solved, announce }`.
    pub fn settle(&mut self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.settle()).unwrap_or(JsValue::NULL)
    }

    // Classification
    pub fn detect_crossings(&mut self) -> u32 { self.inner.detect_crossings() as u32 }
    pub fn crossings(&self) -> u32 { self.inner.crossings() as u32 }
    pub fn is_solved(&self) -> bool { self.inner.is_solved() }
    pub fn clean_cycles(&self) -> Uint32Array {
        let ids: Vec<u32> = self.inner.clean_cycles().into_iter().collect();
        interop::u32s(&ids)
    }
    pub fn cycle_is_clean(&self, cycle: u32) -> bool { self.inner.cycle_is_clean(cycle) }
    /// -1 when the orb has no edge.
    pub fn owner_cycle(&self, id: u32) -> i32 {
        self.inner.owner_cycle(id).map_or(-1, |c| c as i32)
    }

    // JSON
    pub fn to_json(&self) -> String { self.inner.to_json() }
    /// Restores a snapshot; `seed` drives later restarts.
    pub fn from_json_res(json: &str, seed: u64) -> JsValue {
        match untangle::Puzzle::from_json(json) {
            Some(inner) => {
                let p = Puzzle { inner, config: PuzzleConfig::default(), rng: untangle::seeded(seed) };
                error::ok(JsValue::from(p))
            }
            None => error::invalid_snapshot(),
        }
    }
}

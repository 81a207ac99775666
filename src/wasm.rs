use crate::predict::Weights;
use crate::session::*;
use wasm_bindgen::prelude::*;

// Plain-data bridge for a browser front end. Every result crosses the
// boundary as a JSON string; every error as a JS string.

#[wasm_bindgen]
pub struct WasmSession(Session);

fn json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn js(e: SessionError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
impl WasmSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self(Session::default())
    }

    #[wasm_bindgen]
    pub fn weighted(recency: f32, response: f32, frequency: f32) -> Self {
        console_error_panic_hook::set_once();
        Self(Session::new(Weights::new(recency, response, frequency)))
    }

    /// `{ round, agent }`
    #[wasm_bindgen]
    pub fn start_round(&mut self) -> Result<String, JsValue> {
        json(&self.0.start_round().map_err(js)?)
    }

    /// `{ round, opponent, description }` for "Win", "Lose" or "Draw".
    #[wasm_bindgen]
    pub fn report_outcome(&mut self, outcome: &str) -> Result<String, JsValue> {
        json(&self.0.report_raw(outcome).map_err(js)?)
    }

    /// `{ observed, frequency: { scissors, rock, paper }, trend }`
    #[wasm_bindgen]
    pub fn analysis(&self) -> Result<String, JsValue> {
        json(&self.0.analysis())
    }

    #[wasm_bindgen]
    pub fn history(&self) -> Result<String, JsValue> {
        json(&self.0.state().history())
    }

    #[wasm_bindgen]
    pub fn round(&self) -> usize {
        self.0.state().round()
    }

    #[wasm_bindgen]
    pub fn in_progress(&self) -> bool {
        self.0.state().phase().is_active()
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.0.reset()
    }
}

impl Default for WasmSession {
    fn default() -> Self {
        Self::new()
    }
}

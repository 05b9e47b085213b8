// WebAssembly bindings for the tea calculator form
use crate::form::{FormOutcome, FormState};
use crate::ratio;
use wasm_bindgen::prelude::*;

/// Convert raw form text into quantities
/// Returns JSON string: {"sugar": ..., "tea": ...}
#[wasm_bindgen]
pub fn convert_volume(input: &str) -> Result<String, JsValue> {
    let quantities = ratio::convert_str(input).map_err(|e| JsValue::from_str(e.message()))?;

    serde_json::to_string(&quantities)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
}

#[wasm_bindgen]
pub struct TeaCalculatorWasm {
    form: FormState,
}

impl Default for TeaCalculatorWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl TeaCalculatorWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            form: FormState::new(),
        }
    }

    /// Call on every keystroke; clears a visible error
    #[wasm_bindgen]
    pub fn set_input(&mut self, text: &str) {
        self.form.set_input(text);
    }

    #[wasm_bindgen]
    pub fn input(&self) -> String {
        self.form.input().to_string()
    }

    /// Run the conversion. Returns true when quantities are available
    #[wasm_bindgen]
    pub fn submit(&mut self) -> bool {
        matches!(self.form.submit(), FormOutcome::Calculated { .. })
    }

    #[wasm_bindgen]
    pub fn error(&self) -> Option<String> {
        self.form.error_message().map(str::to_string)
    }

    /// Last result as JSON string: {"water": "675", "sugar": ..., "tea": ...}
    #[wasm_bindgen]
    pub fn result_json(&self) -> Result<Option<String>, JsValue> {
        let (water, quantities) = match self.form.outcome() {
            Some(FormOutcome::Calculated { water, quantities }) => (water, quantities),
            _ => return Ok(None),
        };

        let result_obj = serde_json::json!({
            "water": water,
            "sugar": quantities.sugar(),
            "tea": quantities.tea(),
        });

        serde_json::to_string(&result_obj)
            .map(Some)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.form.reset();
    }
}

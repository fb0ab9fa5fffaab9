use wasm_bindgen::prelude::*;

use crate::domain::config::SimulationConfig;
use crate::error::EngineError;
use crate::io::{decode_grid, encode_grid};

use super::perf_stats::PerfStats;
use super::SimulationCore;

fn to_js(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Browser-facing handle around [`SimulationCore`]
#[wasm_bindgen]
pub struct Automaton {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Automaton {
    /// Decode grid text and prepare a run with the default generation count
    #[wasm_bindgen(js_name = fromText)]
    pub fn from_text(text: &str, workers: usize) -> Result<Automaton, JsValue> {
        let config = SimulationConfig::default().with_workers(workers);
        Self::build(text, config).map_err(to_js)
    }

    /// Decode grid text and prepare a run from a JSON config
    #[wasm_bindgen(js_name = fromTextWithConfig)]
    pub fn from_text_with_config(text: &str, config_json: &str) -> Result<Automaton, JsValue> {
        let config = SimulationConfig::from_json(config_json).map_err(to_js)?;
        Self::build(text, config).map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u32 { self.core.generation() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Advance one generation
    pub fn step(&mut self) -> Result<(), JsValue> {
        self.core.step().map_err(to_js)
    }

    /// Advance `generations` more generations
    pub fn run(&mut self, generations: u32) -> Result<u32, JsValue> {
        self.core.run_for(generations).map_err(to_js)
    }

    /// Advance until the configured generation count is reached
    #[wasm_bindgen(js_name = runToEnd)]
    pub fn run_to_end(&mut self) -> Result<u32, JsValue> {
        self.core.run().map_err(to_js)
    }

    /// Current grid as text, one line per row
    #[wasm_bindgen(js_name = toText)]
    pub fn to_text(&self) -> String {
        encode_grid(self.core.grid())
    }

    /// Row-major cell values (-2..=2), for rendering
    pub fn cells(&self) -> Vec<i8> {
        self.core.grid().cells().iter().map(|c| c.value()).collect()
    }
}

impl Automaton {
    fn build(text: &str, config: SimulationConfig) -> Result<Automaton, EngineError> {
        let grid = decode_grid(text)?;
        Ok(Automaton {
            core: SimulationCore::new(grid, config)?,
        })
    }
}

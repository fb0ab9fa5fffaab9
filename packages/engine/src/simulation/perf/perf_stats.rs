use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::domain::cells::CellState;
use crate::grid::CellCensus;

/// Snapshot of the last generation's work
#[wasm_bindgen]
#[derive(Clone, Debug, Default, Serialize)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) partition_ms: f64,
    pub(super) compute_ms: f64,
    pub(super) merge_ms: f64,
    pub(super) generation: u32,
    pub(super) workers: u32,
    pub(super) partitions: u32,
    pub(super) cells_processed: u32,
    pub(super) cells_changed: u32,
    pub(super) healthy_positive: u32,
    pub(super) weak_positive: u32,
    pub(super) dead: u32,
    pub(super) weak_negative: u32,
    pub(super) healthy_negative: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(crate) fn record_census(&mut self, census: &CellCensus) {
        self.healthy_positive = census.count(CellState::HealthyPositive);
        self.weak_positive = census.count(CellState::WeakPositive);
        self.dead = census.count(CellState::Dead);
        self.weak_negative = census.count(CellState::WeakNegative);
        self.healthy_negative = census.count(CellState::HealthyNegative);
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn partition_ms(&self) -> f64 { self.partition_ms }
    #[wasm_bindgen(getter)]
    pub fn compute_ms(&self) -> f64 { self.compute_ms }
    #[wasm_bindgen(getter)]
    pub fn merge_ms(&self) -> f64 { self.merge_ms }
    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u32 { self.generation }
    #[wasm_bindgen(getter)]
    pub fn workers(&self) -> u32 { self.workers }
    #[wasm_bindgen(getter)]
    pub fn partitions(&self) -> u32 { self.partitions }
    #[wasm_bindgen(getter)]
    pub fn cells_processed(&self) -> u32 { self.cells_processed }
    #[wasm_bindgen(getter)]
    pub fn cells_changed(&self) -> u32 { self.cells_changed }
    #[wasm_bindgen(getter)]
    pub fn healthy_positive(&self) -> u32 { self.healthy_positive }
    #[wasm_bindgen(getter)]
    pub fn weak_positive(&self) -> u32 { self.weak_positive }
    #[wasm_bindgen(getter)]
    pub fn dead(&self) -> u32 { self.dead }
    #[wasm_bindgen(getter)]
    pub fn weak_negative(&self) -> u32 { self.weak_negative }
    #[wasm_bindgen(getter)]
    pub fn healthy_negative(&self) -> u32 { self.healthy_negative }

    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json_js(&self) -> String { self.to_json() }
}

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::spatial::partition::PartitionStrategy;

/// Number of generations a full run advances through
pub const DEFAULT_GENERATIONS: u32 = 100;

pub const DEFAULT_WORKERS: usize = 1;

/// Run parameters, loadable from JSON
///
/// Missing fields fall back to their defaults, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub generations: u32,
    pub workers: usize,
    pub partition: PartitionStrategy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            generations: DEFAULT_GENERATIONS,
            workers: DEFAULT_WORKERS,
            partition: PartitionStrategy::default(),
        }
    }
}

impl SimulationConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(EngineError::InvalidWorkerCount(self.workers));
        }
        Ok(())
    }

    pub fn with_generations(mut self, generations: u32) -> Self {
        self.generations = generations;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_partition(mut self, partition: PartitionStrategy) -> Self {
        self.partition = partition;
        self
    }
}

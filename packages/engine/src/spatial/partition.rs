//! Row Partitioning - splits a generation's rows across workers
//!
//! Each worker gets a disjoint set of row indices. Every row lands in
//! exactly one partition, and the worker count is clamped to the row count
//! so no partition is ever empty.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartitionStrategy {
    /// Worker `w` takes rows `w, w + n, w + 2n, ...`
    #[default]
    Interleaved,
    /// Worker `w` takes one contiguous run of rows
    Blocks,
}

impl std::str::FromStr for PartitionStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "interleaved" => Ok(PartitionStrategy::Interleaved),
            "blocks" => Ok(PartitionStrategy::Blocks),
            other => Err(format!("unknown partition strategy: {}", other)),
        }
    }
}

/// Row indices owned by one worker, ascending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowPartition {
    rows: Vec<u32>,
}

impl RowPartition {
    #[inline]
    pub fn rows(&self) -> &[u32] {
        &self.rows
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Worker count actually used for a grid with `height` rows
#[inline]
pub fn effective_workers(height: u32, workers: usize) -> usize {
    workers.min(height as usize).max(1)
}

pub fn partition_rows(
    height: u32,
    workers: usize,
    strategy: PartitionStrategy,
) -> Result<Vec<RowPartition>> {
    if workers == 0 {
        return Err(EngineError::InvalidWorkerCount(workers));
    }
    let n = effective_workers(height, workers);

    let partitions = match strategy {
        PartitionStrategy::Interleaved => (0..n)
            .map(|w| RowPartition {
                rows: (w as u32..height).step_by(n).collect(),
            })
            .collect(),
        PartitionStrategy::Blocks => {
            // First `extra` blocks get one additional row
            let base = height as usize / n;
            let extra = height as usize % n;
            let mut start = 0u32;
            (0..n)
                .map(|w| {
                    let len = (base + usize::from(w < extra)) as u32;
                    let rows = (start..start + len).collect();
                    start += len;
                    RowPartition { rows }
                })
                .collect()
        }
    };
    Ok(partitions)
}

//! Worker Pool - fixed-size fan-out over row partitions
//!
//! With `parallel`, natively: a dedicated rayon pool with one thread per
//! worker, reused across generations. In the browser the global pool set
//! up by `init_thread_pool` is used instead; its thread count is whatever
//! JS passed there, so `workers` only fixes how many partitions (tasks)
//! a generation fans out to, not how many threads run them. Without
//! `parallel`, partitions run one after another on the caller's thread.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::Result;
#[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
use crate::error::EngineError;
use crate::spatial::partition::RowPartition;

pub(crate) struct WorkerPool {
    workers: usize,
    #[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
    pool: Option<rayon::ThreadPool>,
}

impl WorkerPool {
    /// `workers` must already be validated (>= 1) and clamped to the row count
    pub(crate) fn new(workers: usize) -> Result<Self> {
        debug_assert!(workers >= 1, "WorkerPool::new: zero workers");

        #[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
        {
            // A single worker needs no threads of its own
            let pool = if workers > 1 {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(workers)
                    .thread_name(|i| format!("cell-worker-{}", i))
                    .build()
                    .map_err(|e| EngineError::WorkerPool(e.to_string()))?;
                Some(pool)
            } else {
                None
            };
            log::debug!("worker pool ready: {} worker(s)", workers);
            Ok(Self { workers, pool })
        }

        #[cfg(not(all(feature = "parallel", not(target_arch = "wasm32"))))]
        {
            Ok(Self { workers })
        }
    }

    /// Partitions per generation. Natively also the thread count; on wasm32
    /// the global pool's size is set by `init_thread_pool`.
    #[inline]
    pub(crate) fn workers(&self) -> usize {
        self.workers
    }

    /// Run `f` once per partition and return the results in partition order.
    /// Returns only after every partition has finished.
    pub(crate) fn map_partitions<T, F>(&self, partitions: &[RowPartition], f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(&RowPartition) -> T + Sync + Send,
    {
        #[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
        {
            if let Some(pool) = &self.pool {
                return pool.install(|| partitions.par_iter().map(&f).collect());
            }
        }

        #[cfg(all(feature = "parallel", target_arch = "wasm32"))]
        {
            if self.workers > 1 {
                // One task per partition regardless of the global pool's size
                return partitions.par_iter().with_max_len(1).map(&f).collect();
            }
        }

        partitions.iter().map(f).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::partition::{partition_rows, PartitionStrategy};

    #[test]
    fn results_keep_partition_order() {
        let partitions = partition_rows(10, 4, PartitionStrategy::Interleaved).unwrap();
        let pool = WorkerPool::new(4).unwrap();
        let firsts: Vec<u32> = pool.map_partitions(&partitions, |p| p.rows()[0]);
        assert_eq!(firsts, vec![0, 1, 2, 3]);
    }

    #[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
    #[test]
    fn partitions_run_on_the_pool_threads() {
        let partitions = partition_rows(8, 3, PartitionStrategy::Blocks).unwrap();
        let pool = WorkerPool::new(3).unwrap();
        let names: Vec<String> = pool.map_partitions(&partitions, |_| {
            std::thread::current().name().unwrap_or_default().to_string()
        });
        assert_eq!(names.len(), 3);
        assert!(names.iter().all(|n| n.starts_with("cell-worker-")), "{:?}", names);
    }

    #[test]
    fn single_worker_runs_inline() {
        let partitions = partition_rows(3, 1, PartitionStrategy::Blocks).unwrap();
        let pool = WorkerPool::new(1).unwrap();
        assert_eq!(pool.workers(), 1);
        let lens: Vec<usize> = pool.map_partitions(&partitions, |p| p.len());
        assert_eq!(lens, vec![3]);
    }
}

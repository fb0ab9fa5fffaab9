use proptest::prelude::*;

use cellular_life_engine::{advance, run, CellState, Grid, PartitionStrategy, SimulationConfig};

fn state() -> impl Strategy<Value = CellState> {
    prop::sample::select(CellState::ALL.to_vec())
}

fn grid() -> impl Strategy<Value = Grid> {
    (1usize..12, 1usize..12).prop_flat_map(|(width, height)| {
        prop::collection::vec(prop::collection::vec(state(), width), height)
            .prop_map(|rows| Grid::from_rows(rows).unwrap())
    })
}

fn strategy() -> impl Strategy<Value = PartitionStrategy> {
    prop_oneof![Just(PartitionStrategy::Interleaved), Just(PartitionStrategy::Blocks)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn any_worker_count_gives_the_same_grid(
        start in grid(),
        generations in 0u32..12,
        extra in 0usize..12,
        partition in strategy(),
    ) {
        let height = start.height() as usize;
        let single = SimulationConfig::default().with_generations(generations);
        let reference = run(start.clone(), &single).unwrap();

        for workers in [2, 4, height, height + extra + 1] {
            let config = single.clone().with_workers(workers).with_partition(partition);
            let end = run(start.clone(), &config).unwrap();
            prop_assert_eq!(&end, &reference);
        }
    }

    #[test]
    fn partition_scheme_does_not_reorder_rows(start in grid(), workers in 1usize..16) {
        let interleaved = advance(&start, workers, PartitionStrategy::Interleaved).unwrap();
        let blocks = advance(&start, workers, PartitionStrategy::Blocks).unwrap();
        prop_assert_eq!(interleaved.width(), start.width());
        prop_assert_eq!(interleaved.height(), start.height());
        prop_assert_eq!(interleaved, blocks);
    }

    #[test]
    fn states_stay_in_range(start in grid(), workers in 1usize..6) {
        let next = advance(&start, workers, PartitionStrategy::Interleaved).unwrap();
        for cell in next.cells() {
            prop_assert!((-2..=2).contains(&cell.value()));
        }
    }
}

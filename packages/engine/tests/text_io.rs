use std::fs;
use std::path::PathBuf;

use cellular_life_engine::{
    decode_grid, encode_grid, load_grid, run, save_grid, EngineError, SimulationConfig,
};
use proptest::prelude::*;

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("cellular-life-{}-{}", std::process::id(), name))
}

#[test]
fn file_round_trip_through_a_run() {
    let input = scratch_path("in.txt");
    let output = scratch_path("out.txt");
    fs::write(&input, "OOO\n...\n...\n").unwrap();

    let grid = load_grid(&input).unwrap();
    let config = SimulationConfig::default().with_generations(1).with_workers(3);
    let grid = run(grid, &config).unwrap();
    save_grid(&grid, &output).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written.lines().next(), Some("..."));
    assert_eq!(written.lines().count(), 3);
    assert!(written.ends_with('\n'));

    let _ = fs::remove_file(input);
    let _ = fs::remove_file(output);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_grid(scratch_path("missing.txt")).unwrap_err();
    assert!(matches!(err, EngineError::Io(_)));
}

fn grid_text() -> impl Strategy<Value = String> {
    (1usize..10, 1usize..10).prop_flat_map(|(width, height)| {
        prop::collection::vec(
            prop::collection::vec(prop::sample::select(vec!['O', 'o', '.', 'x', 'X']), width),
            height,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .map(|row| row.into_iter().collect::<String>() + "\n")
                .collect::<String>()
        })
    })
}

proptest! {
    #[test]
    fn encode_decode_is_identity(text in grid_text()) {
        let grid = decode_grid(&text).unwrap();
        prop_assert_eq!(encode_grid(&grid), text);
    }
}

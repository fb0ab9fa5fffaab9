//! Command-line runner: read a grid file, advance it, write the result.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cellular_life_engine::{load_grid, run, save_grid, PartitionStrategy, SimulationConfig};

/// Run the cellular life simulator.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Path to the input grid file.
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
    /// Path to the output grid file.
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,
    /// Number of workers per generation. Must be > 0.
    #[arg(
        short,
        long,
        value_name = "COUNT",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    processes: Option<u32>,
    /// Number of generations to run.
    #[arg(short, long, value_name = "COUNT")]
    generations: Option<u32>,
    /// How rows are split across workers (interleaved or blocks).
    #[arg(long, value_name = "STRATEGY")]
    partition: Option<PartitionStrategy>,
    /// JSON file with simulation settings; flags above take precedence.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl CliArgs {
    fn validate(&self) -> Result<()> {
        if !self.input.is_file() {
            bail!("input file '{}' does not exist", self.input.display());
        }
        let output_dir = self.output.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(dir) = output_dir {
            if !dir.is_dir() {
                bail!("output directory '{}' does not exist", dir.display());
            }
        }
        Ok(())
    }

    fn simulation_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => SimulationConfig::default(),
        };
        if let Some(processes) = self.processes {
            config.workers = processes as usize;
        }
        if let Some(generations) = self.generations {
            config.generations = generations;
        }
        if let Some(partition) = self.partition {
            config.partition = partition;
        }
        config.validate()?;
        Ok(config)
    }
}

fn read_config(path: &Path) -> Result<SimulationConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading config '{}'", path.display()))?;
    SimulationConfig::from_json(&json).with_context(|| format!("parsing config '{}'", path.display()))
}

fn try_main(args: &CliArgs) -> Result<PathBuf> {
    args.validate()?;
    let config = args.simulation_config()?;

    let grid = load_grid(&args.input)
        .with_context(|| format!("loading grid from '{}'", args.input.display()))?;
    log::info!(
        "loaded {}x{} grid from {}",
        grid.width(),
        grid.height(),
        args.input.display()
    );

    let grid = run(grid, &config)?;

    save_grid(&grid, &args.output)
        .with_context(|| format!("writing grid to '{}'", args.output.display()))?;
    Ok(std::fs::canonicalize(&args.output).unwrap_or_else(|_| args.output.clone()))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = CliArgs::parse();

    match try_main(&args) {
        Ok(path) => {
            println!("Output file written to: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

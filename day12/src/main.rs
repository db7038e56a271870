use std::{env, fs, path::PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use day12::{count_paths, parse_cave_system, Part};

const DEFAULT_INPUT: &str = "input/day12.txt";
const EXAMPLE_INPUT: &str = "example/day12.txt";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PartArg {
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
}

impl From<PartArg> for Part {
    fn from(part: PartArg) -> Self {
        match part {
            PartArg::One => Part::One,
            PartArg::Two => Part::Two,
        }
    }
}

/// Count the paths through a cave system.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Puzzle part: 1 forbids revisiting small caves, 2 allows one revisit per path.
    #[arg(value_enum, default_value = "2")]
    part: PartArg,

    /// Read the worked example instead of the puzzle input.
    #[arg(short, long, conflicts_with = "input")]
    example: bool,

    /// Read the cave map from this file.
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn input_path(&self) -> PathBuf {
        match (&self.input, self.example) {
            (Some(path), _) => path.clone(),
            (None, true) => PathBuf::from(EXAMPLE_INPUT),
            (None, false) => PathBuf::from(DEFAULT_INPUT),
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("DAY12_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "day12=debug" } else { "day12=warn" })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose || env::var("DEBUG").is_ok());

    let input_file = cli.input_path();
    let content = fs::read_to_string(&input_file)
        .with_context(|| format!("failed to read {}", input_file.display()))?;

    let caves = parse_cave_system(&content)
        .with_context(|| format!("invalid cave map in {}", input_file.display()))?;

    let result = count_paths(&caves, cli.part.into());
    println!("{}", result);
    Ok(())
}

use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{curves, generate};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "fardist-sim", about = "Divergent GP experiment generation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate, rank, and select divergent experiments from a YAML config.
    Generate(generate::GenerateArgs),
    /// Emit posterior curve data for one selected experiment.
    Curves(curves::CurvesArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => generate::run(&args),
        Command::Curves(args) => curves::run(&args),
    }
}

//! Command-line front end for Yacht roll evaluation.
//!
//! - `evaluate` ranks the categories a given roll qualifies for
//! - `roll` throws random dice and ranks them
//! - `rules` prints how to play

use clap::Parser;
use yacht::cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    yacht::log(args.level())?;
    yacht::cli::run(&args)
}

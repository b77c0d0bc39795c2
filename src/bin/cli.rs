// src/bin/cli.rs
use clap::Parser;
use color_eyre::eyre::WrapErr;

use reg_scrape::cli::{self, Args};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    reg_scrape::log::init(args.log_file.as_deref()).wrap_err("could not open log file")?;

    // The written path and row count are reported by the progress sink.
    cli::run(args)?;
    Ok(())
}

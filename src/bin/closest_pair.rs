use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use divide_conquer::report::run_closest_pair;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Closest pair of points in D dimensions", long_about = None)]
struct Args {
    /// Input file: `N D`, then N lines of D reals. Reads stdin when omitted
    #[arg(index = 1)]
    input: Option<PathBuf>,

    /// Skip the O(n^2) brute force cross-check
    #[arg(long)]
    skip_brute: bool,
}

fn open_input(path: Option<&PathBuf>) -> Result<Box<dyn Read>> {
    Ok(match path {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {:?}", path))?,
        )),
        None => Box::new(io::stdin().lock()),
    })
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();
    let args = Args::parse();

    let input = open_input(args.input.as_ref())?;
    run_closest_pair(input, io::stdout().lock(), args.skip_brute)
}

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use divide_conquer::report::run_count_inversions;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Sort a sequence and count its inversions", long_about = None)]
struct Args {
    /// Input file: `N`, then N integers. Reads stdin when omitted
    #[arg(index = 1)]
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();
    let args = Args::parse();

    let input: Box<dyn Read> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {:?}", path))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    run_count_inversions(input, io::stdout().lock())
}

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use divide_conquer::format::{write_point_set, write_sequence};
use divide_conquer::generator::InputGenerator;
use log::{LevelFilter, info};

/// Writes random inputs for `closest_pair` (default) or `count_inversions`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of points, or sequence length with --sequence
    #[arg(short = 'n', long, default_value_t = 10)]
    count: usize,

    /// Number of dimensions per point
    #[arg(short, long, default_value_t = 2)]
    dimensions: usize,

    /// Lower bound of every coordinate (inclusive)
    #[arg(long, default_value_t = 0.0)]
    low: f64,

    /// Upper bound of every coordinate (exclusive)
    #[arg(long, default_value_t = 10000.0)]
    high: f64,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Write an inversion counting input instead of points
    #[arg(long)]
    sequence: bool,

    #[arg(short, long, default_value = "ClosestPairDim-In.txt")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();
    let args = Args::parse();

    if !(args.low.is_finite() && args.high.is_finite() && args.low < args.high) {
        anyhow::bail!("--low must be below --high, got [{}, {})", args.low, args.high);
    }
    if !args.sequence && args.dimensions == 0 {
        anyhow::bail!("--dimensions must be at least 1");
    }

    let generator = InputGenerator::new(args.low, args.high, args.seed);
    if args.sequence && generator.integer_range().is_none() {
        anyhow::bail!(
            "no i64 values in [{}, {}) to fill a sequence",
            args.low,
            args.high
        );
    }
    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {:?}", args.output))?;
    let mut writer = BufWriter::new(file);
    if args.sequence {
        write_sequence(&mut writer, &generator.generate_sequence(args.count))?;
    } else {
        let points = generator.generate_points(args.count, args.dimensions);
        write_point_set(&mut writer, &points, args.dimensions)?;
    }
    writer.flush()?;
    info!("wrote {:?}", args.output);
    Ok(())
}

//! What the `closest_pair` and `count_inversions` programs print.

use std::io::{Read, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use itertools::Itertools;
use log::info;
use thiserror::Error;

use crate::closest_pair::{closest_pair, closest_pair_brute};
use crate::format::{read_point_set, read_sequence};
use crate::inversions::sort_and_count;

#[derive(Debug, Error, PartialEq)]
#[error("divide and conquer result {dac} disagrees with brute force {brute}")]
pub struct Disagreement {
    pub brute: f64,
    pub dac: f64,
}

/// Relative tolerance 1e-9, absolute below 1.
pub fn check_agreement(brute: f64, dac: f64) -> Result<(), Disagreement> {
    let tolerance = 1e-9 * brute.abs().max(1.0);
    if (brute - dac).abs() > tolerance {
        return Err(Disagreement { brute, dac });
    }
    Ok(())
}

/// Reads a point set from `input`, reports the brute force result (unless
/// `skip_brute`) and the divide and conquer result with timings.
pub fn run_closest_pair(input: impl Read, mut out: impl Write, skip_brute: bool) -> Result<()> {
    let (points, dimensions) = read_point_set(input).context("invalid closest pair input")?;
    info!("read {} points in {} dimensions", points.len(), dimensions);

    let brute = if skip_brute {
        None
    } else {
        let timer = Instant::now();
        let distance = closest_pair_brute(&points)?;
        let elapsed = timer.elapsed();
        writeln!(out, "BruteForce found: {}", distance)?;
        writeln!(out, "Time taken by BruteForce: {} microseconds", elapsed.as_micros())?;
        Some(distance)
    };

    let timer = Instant::now();
    let distance = closest_pair(&points, dimensions)?;
    let elapsed = timer.elapsed();
    writeln!(out, "DAC found: {}", distance)?;
    writeln!(out, "Time taken by DAC: {} microseconds", elapsed.as_micros())?;

    if let Some(brute) = brute {
        check_agreement(brute, distance)?;
    }
    Ok(())
}

pub fn run_count_inversions(input: impl Read, mut out: impl Write) -> Result<()> {
    let mut seq = read_sequence(input).context("invalid sequence input")?;
    info!("read sequence of {} integers", seq.len());

    let inversions = sort_and_count(&mut seq);
    writeln!(out, "The sorted array:")?;
    writeln!(out, "{}", seq.iter().join(" "))?;
    writeln!(out, "Inversions needed:")?;
    writeln!(out, "{}", inversions)?;
    Ok(())
}

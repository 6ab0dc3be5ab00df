use itertools::Itertools;
use log::{debug, trace};
use thiserror::Error;

use crate::point::{Distance, Point};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClosestPairError {
    #[error("closest pair needs at least 2 points, got {found}")]
    TooFewPoints { found: usize },
    #[error("points must have at least one dimension")]
    ZeroDimensions,
    #[error("point {index} has {found} coordinates, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
}

fn check_points(points: &[Point], dimensions: usize) -> Result<(), ClosestPairError> {
    if dimensions == 0 {
        return Err(ClosestPairError::ZeroDimensions);
    }
    if points.len() < 2 {
        return Err(ClosestPairError::TooFewPoints {
            found: points.len(),
        });
    }
    if let Some((index, point)) = points
        .iter()
        .enumerate()
        .find(|(_, p)| p.dimensions() != dimensions)
    {
        return Err(ClosestPairError::DimensionMismatch {
            index,
            expected: dimensions,
            found: point.dimensions(),
        });
    }
    Ok(())
}

fn brute_min(points: &[&Point]) -> f64 {
    points
        .iter()
        .tuple_combinations()
        .map(|(a, b)| a.distance(b))
        .fold(f64::INFINITY, f64::min)
}

/// O(n²) reference: the minimum distance over every unordered pair.
pub fn closest_pair_brute(points: &[Point]) -> Result<f64, ClosestPairError> {
    if points.len() < 2 {
        return Err(ClosestPairError::TooFewPoints {
            found: points.len(),
        });
    }
    let refs = points.iter().collect::<Vec<_>>();
    Ok(brute_min(&refs))
}

/// Minimum Euclidean distance between any two of `points`, each of which must
/// have exactly `dimensions` coordinates.
///
/// Divide and conquer over point count and dimension, O(n (log n)^(D-1)).
/// The caller's slice is not reordered; the solver sorts a working array of
/// references instead.
pub fn closest_pair(points: &[Point], dimensions: usize) -> Result<f64, ClosestPairError> {
    check_points(points, dimensions)?;
    debug!(
        "closest pair over {} points in {} dimensions",
        points.len(),
        dimensions
    );
    let mut working = points.iter().collect::<Vec<_>>();
    working.sort_by_key(|p| p.key(0));
    Ok(closest_util(&mut working, 0, dimensions, f64::INFINITY))
}

// Entry: `points` sorted by coordinate `d`.
// Exit (split and base cases): `points` sorted by coordinate `d + 1`.
fn closest_util(points: &mut [&Point], d: usize, dimensions: usize, min_dist: f64) -> f64 {
    let n = points.len();
    if n <= 1 {
        return min_dist;
    }
    if n <= 3 {
        if d + 1 < dimensions {
            points.sort_by_key(|p| p.key(d + 1));
        }
        return min_dist.min(brute_min(points));
    }

    if d == dimensions - 1 {
        return strip_scan(points, d, dimensions, min_dist);
    }

    let mid = n / 2;
    let mid_coord = points[mid].coord(d);

    let (left, right) = points.split_at_mut(mid);
    let best = closest_util(left, d, dimensions, min_dist)
        .min(closest_util(right, d, dimensions, min_dist));

    let merged = merge_by_axis(left, right, d + 1);
    points.copy_from_slice(&merged);

    let mut strip = points
        .iter()
        .copied()
        .filter(|p| (p.coord(d) - mid_coord).abs() < best)
        .collect::<Vec<_>>();
    trace!(
        "dimension {}: {} of {} points within {} of the split",
        d,
        strip.len(),
        n,
        best
    );
    closest_util(&mut strip, d + 1, dimensions, best.min(min_dist))
}

// Only one axis left; `points` is sorted along it.
fn strip_scan(points: &[&Point], d: usize, dimensions: usize, min_dist: f64) -> f64 {
    if dimensions == 1 {
        return points
            .windows(2)
            .map(|pair| pair[1].coord(0).distance(&pair[0].coord(0)))
            .fold(min_dist, f64::min);
    }
    let mut minimum = min_dist;
    for (i, p) in points.iter().enumerate() {
        for q in &points[i + 1..] {
            if q.coord(d) - p.coord(d) >= min_dist {
                break;
            }
            minimum = minimum.min(p.distance(q));
        }
    }
    minimum
}

fn merge_by_axis<'a>(left: &[&'a Point], right: &[&'a Point], axis: usize) -> Vec<&'a Point> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i].key(axis) <= right[j].key(axis) {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

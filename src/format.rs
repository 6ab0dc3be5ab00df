//! Text formats read by the drivers.
//!
//! Closest pair: a header `N D`, then N points of D whitespace separated
//! reals. Inversions: a header `N`, then N whitespace separated integers.
//! Line breaks carry no meaning beyond separating tokens.

use std::io::{self, Read, Write};
use std::str::FromStr;

use itertools::Itertools;
use thiserror::Error;

use crate::point::{Point, PointError};

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("input is empty")]
    Empty,
    #[error("token {position} ({token:?}) is not a valid {expected}")]
    InvalidNumber {
        position: usize,
        token: String,
        expected: &'static str,
    },
    #[error("input ended after {found} values, expected {expected}")]
    UnexpectedEof { expected: usize, found: usize },
    #[error("unexpected data after the last value: {token:?}")]
    TrailingData { token: String },
    #[error("point {index}: {source}")]
    BadPoint {
        index: usize,
        #[source]
        source: PointError,
    },
    #[error("dimension count must be at least 1")]
    ZeroDimensions,
}

/// Whitespace separated tokens of a fully read input.
struct Tokens {
    tokens: Vec<String>,
    next: usize,
}

impl Tokens {
    fn read(mut reader: impl Read) -> Result<Self, FormatError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        let tokens = text.split_whitespace().map(str::to_owned).collect_vec();
        if tokens.is_empty() {
            return Err(FormatError::Empty);
        }
        Ok(Self { tokens, next: 0 })
    }

    fn parse<T: FromStr>(
        &mut self,
        expected: &'static str,
        total: usize,
    ) -> Result<T, FormatError> {
        let position = self.next;
        let token = self.tokens.get(position).ok_or(FormatError::UnexpectedEof {
            expected: total,
            found: position,
        })?;
        self.next += 1;
        token.parse().map_err(|_| FormatError::InvalidNumber {
            position,
            token: token.clone(),
            expected,
        })
    }

    fn finish(self) -> Result<(), FormatError> {
        match self.tokens.into_iter().nth(self.next) {
            Some(token) => Err(FormatError::TrailingData { token }),
            None => Ok(()),
        }
    }
}

/// Reads a closest-pair input, returning the points and the declared
/// dimension count.
pub fn read_point_set(reader: impl Read) -> Result<(Vec<Point>, usize), FormatError> {
    let mut tokens = Tokens::read(reader)?;
    let n: usize = tokens.parse("point count", 2)?;
    let dimensions: usize = tokens.parse("dimension count", 2)?;
    if dimensions == 0 {
        return Err(FormatError::ZeroDimensions);
    }
    let total = n
        .checked_mul(dimensions)
        .and_then(|values| values.checked_add(2))
        .unwrap_or(usize::MAX);

    let mut points = Vec::with_capacity(n.min(tokens.tokens.len()));
    for index in 0..n {
        let coords = (0..dimensions)
            .map(|_| tokens.parse::<f64>("real number", total))
            .collect::<Result<Vec<_>, _>>()?;
        let point =
            Point::new(coords).map_err(|source| FormatError::BadPoint { index, source })?;
        points.push(point);
    }
    tokens.finish()?;
    Ok((points, dimensions))
}

/// Reads an inversion-counting input.
pub fn read_sequence(reader: impl Read) -> Result<Vec<i64>, FormatError> {
    let mut tokens = Tokens::read(reader)?;
    let n: usize = tokens.parse("sequence length", 1)?;
    let total = n.saturating_add(1);
    let mut seq = Vec::with_capacity(n.min(tokens.tokens.len()));
    for _ in 0..n {
        seq.push(tokens.parse("integer", total)?);
    }
    tokens.finish()?;
    Ok(seq)
}

pub fn write_point_set(
    mut writer: impl Write,
    points: &[Point],
    dimensions: usize,
) -> io::Result<()> {
    writeln!(writer, "{} {}", points.len(), dimensions)?;
    for point in points {
        writeln!(writer, "{}", point.coords().join(" "))?;
    }
    Ok(())
}

pub fn write_sequence(mut writer: impl Write, seq: &[i64]) -> io::Result<()> {
    writeln!(writer, "{}", seq.len())?;
    writeln!(writer, "{}", seq.iter().join(" "))
}

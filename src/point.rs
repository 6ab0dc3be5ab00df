use ordered_float::NotNan;
use thiserror::Error;

pub trait Distance {
    fn distance(&self, other: &Self) -> f64;
}

impl Distance for f64 {
    fn distance(&self, other: &Self) -> f64 {
        (*self - *other).abs()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PointError {
    #[error("a point needs at least one coordinate")]
    Empty,
    #[error("coordinate {axis} is not a finite number")]
    NonFiniteCoordinate { axis: usize },
}

/// A point in D-dimensional space. Coordinates are always finite, so any axis
/// gives a total order and distances between points are finite.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Point {
    coords: Vec<NotNan<f64>>,
}

impl Point {
    pub fn new(coords: Vec<f64>) -> Result<Self, PointError> {
        if coords.is_empty() {
            return Err(PointError::Empty);
        }
        let coords = coords
            .into_iter()
            .enumerate()
            .map(|(axis, x)| match NotNan::new(x) {
                Ok(x) if x.is_finite() => Ok(x),
                _ => Err(PointError::NonFiniteCoordinate { axis }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { coords })
    }

    pub fn dimensions(&self) -> usize {
        self.coords.len()
    }

    /// Panics if `axis` is out of range.
    pub fn coord(&self, axis: usize) -> f64 {
        self.coords[axis].into_inner()
    }

    /// Sort key along `axis`.
    pub fn key(&self, axis: usize) -> NotNan<f64> {
        self.coords[axis]
    }

    pub fn coords(&self) -> impl Iterator<Item = f64> + '_ {
        self.coords.iter().map(|x| x.into_inner())
    }
}

impl Distance for Point {
    fn distance(&self, other: &Self) -> f64 {
        self.coords
            .iter()
            .zip(&other.coords)
            .map(|(a, b)| {
                let delta = a.into_inner() - b.into_inner();
                delta * delta
            })
            .sum::<f64>()
            .sqrt()
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, x) in self.coords().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, ")")
    }
}

impl std::fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

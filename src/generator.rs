use rand::distr::Uniform;
use rand::prelude::*;
use std::cell::RefCell;
use std::ops::Range;

use crate::point::Point;

// 2^63, the first f64 past i64::MAX
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Seeded source of random test inputs. Coordinates are uniform in
/// `[low, high)` on every axis; sequence values are uniform integers in the
/// same range.
pub struct InputGenerator {
    pub low: f64,
    pub high: f64,
    pub rng: RefCell<StdRng>,
}

impl InputGenerator {
    /// Panics if `low >= high` or either bound is not finite.
    pub fn new(low: f64, high: f64, seed: u64) -> Self {
        assert!(
            low.is_finite() && high.is_finite() && low < high,
            "invalid range [{}, {})",
            low,
            high
        );
        Self {
            low,
            high,
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn generate_points(&self, num_points: usize, dimensions: usize) -> Vec<Point> {
        assert!(dimensions > 0, "points need at least one dimension");
        let mut rng = self.rng.borrow_mut();
        let dist = Uniform::new(self.low, self.high).expect("range checked in new");
        (0..num_points)
            .map(|_| {
                let coords = (0..dimensions).map(|_| rng.sample(&dist)).collect();
                Point::new(coords).expect("uniform samples over a finite range are finite")
            })
            .collect()
    }

    /// The integers in `[low, high)`, or `None` when there are none or they do
    /// not fit in an `i64`.
    pub fn integer_range(&self) -> Option<Range<i64>> {
        let (low, high) = (self.low.ceil(), self.high.ceil());
        if low < -I64_LIMIT || high > I64_LIMIT || low >= high {
            return None;
        }
        // `high` may be exactly 2^63, which saturates to i64::MAX
        let range = low as i64..high as i64;
        (!range.is_empty()).then_some(range)
    }

    /// Panics if `integer_range` is `None`.
    pub fn generate_sequence(&self, len: usize) -> Vec<i64> {
        let range = self
            .integer_range()
            .unwrap_or_else(|| panic!("no i64 values in [{}, {})", self.low, self.high));
        let mut rng = self.rng.borrow_mut();
        (0..len).map(|_| rng.random_range(range.clone())).collect()
    }
}

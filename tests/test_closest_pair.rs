use divide_conquer::closest_pair::{ClosestPairError, closest_pair, closest_pair_brute};
use divide_conquer::generator::InputGenerator;
use divide_conquer::point::{Point, PointError};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

fn points(coords: &[&[f64]]) -> Vec<Point> {
    coords
        .iter()
        .map(|c| Point::new(c.to_vec()).unwrap())
        .collect()
}

fn assert_close(a: f64, b: f64) {
    assert!(
        (a - b).abs() <= 1e-9 * a.abs().max(1.0),
        "{} and {} differ",
        a,
        b
    );
}

#[test]
fn test_three_points_in_plane() {
    let points = points(&[&[0.0, 0.0], &[3.0, 4.0], &[1.0, 1.0]]);
    let distance = closest_pair(&points, 2).unwrap();
    assert_close(distance, 2f64.sqrt());
    assert_close(closest_pair_brute(&points).unwrap(), 2f64.sqrt());
}

#[test]
fn test_matches_brute_force() {
    for dimensions in [1, 2, 3, 5] {
        for (seed, num_points) in [2, 3, 4, 5, 7, 16, 33, 100, 500].into_iter().enumerate() {
            let generator = InputGenerator::new(0.0, 1000.0, seed as u64 * 31 + dimensions as u64);
            let points = generator.generate_points(num_points, dimensions);
            let expected = closest_pair_brute(&points).unwrap();
            let actual = closest_pair(&points, dimensions).unwrap();
            assert_close(actual, expected);
        }
    }
}

#[test]
fn test_matches_brute_force_on_integer_grid() {
    // many ties along every axis
    for dimensions in [2, 3] {
        let generator = InputGenerator::new(0.0, 16.0, 7);
        let points = generator
            .generate_points(60, dimensions)
            .into_iter()
            .map(|p| Point::new(p.coords().map(f64::floor).collect()).unwrap())
            .collect::<Vec<_>>();
        let expected = closest_pair_brute(&points).unwrap();
        assert_close(closest_pair(&points, dimensions).unwrap(), expected);
    }
}

#[test]
fn test_permutation_invariance() {
    let generator = InputGenerator::new(-50.0, 50.0, 3);
    let mut points = generator.generate_points(200, 3);
    let expected = closest_pair(&points, 3).unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..5 {
        points.shuffle(&mut rng);
        assert_close(closest_pair(&points, 3).unwrap(), expected);
    }
}

#[test]
fn test_axis_order_invariance() {
    let generator = InputGenerator::new(0.0, 100.0, 5);
    let points = generator.generate_points(150, 3);
    let expected = closest_pair(&points, 3).unwrap();
    for order in [[1, 2, 0], [2, 0, 1], [2, 1, 0]] {
        let rotated = points
            .iter()
            .map(|p| Point::new(order.iter().map(|&axis| p.coord(axis)).collect()).unwrap())
            .collect::<Vec<_>>();
        assert_close(closest_pair(&rotated, 3).unwrap(), expected);
    }
}

#[test]
fn test_duplicate_point_gives_zero() {
    let generator = InputGenerator::new(0.0, 100.0, 9);
    for dimensions in [1, 2, 4] {
        let mut points = generator.generate_points(64, dimensions);
        points.push(points[17].clone());
        assert_eq!(closest_pair(&points, dimensions).unwrap(), 0.0);
    }
    let pair = points(&[&[1.5, -2.0], &[1.5, -2.0]]);
    assert_eq!(closest_pair(&pair, 2).unwrap(), 0.0);
}

#[test]
fn test_one_dimension_uses_adjacent_gaps() {
    let points = points(&[&[10.0], &[-4.0], &[3.5], &[7.0], &[0.0], &[3.0]]);
    assert_close(closest_pair(&points, 1).unwrap(), 0.5);
}

#[test]
fn test_too_few_points() {
    assert_eq!(
        closest_pair(&[], 2),
        Err(ClosestPairError::TooFewPoints { found: 0 })
    );
    let single = points(&[&[1.0, 2.0]]);
    assert_eq!(
        closest_pair(&single, 2),
        Err(ClosestPairError::TooFewPoints { found: 1 })
    );
    assert_eq!(
        closest_pair_brute(&single),
        Err(ClosestPairError::TooFewPoints { found: 1 })
    );
}

#[test]
fn test_dimension_mismatch() {
    let points = points(&[&[0.0, 0.0], &[1.0, 1.0], &[2.0, 2.0, 2.0]]);
    assert_eq!(
        closest_pair(&points, 2),
        Err(ClosestPairError::DimensionMismatch {
            index: 2,
            expected: 2,
            found: 3
        })
    );
    assert_eq!(
        closest_pair(&points, 0),
        Err(ClosestPairError::ZeroDimensions)
    );
}

#[test]
fn test_input_order_is_untouched() {
    let points = points(&[&[5.0, 0.0], &[1.0, 9.0], &[3.0, 3.0], &[0.0, 1.0], &[4.0, 4.0]]);
    let before = points.clone();
    closest_pair(&points, 2).unwrap();
    assert_eq!(points, before);
}

#[test]
fn test_points_must_be_finite() {
    for bad in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
        assert_eq!(
            Point::new(vec![0.0, bad]),
            Err(PointError::NonFiniteCoordinate { axis: 1 })
        );
    }
    assert_eq!(Point::new(vec![]), Err(PointError::Empty));

    let near_limit = points(&[&[f64::MAX, 0.0], &[f64::MAX, 0.0], &[0.0, 0.0]]);
    assert_eq!(closest_pair(&near_limit, 2).unwrap(), 0.0);
}

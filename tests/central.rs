mod common;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use vision_moments::{Central, Float, Moments, Spatial};
use common::{BLOB_CONTOUR, translate, unit_square};

fn random_points(rng: &mut SmallRng, n: usize) -> Vec<(Float, Float)> {
    (0..n).map(|_| (rng.gen_range(-20.0..20.0), rng.gen_range(-5.0..30.0))).collect()
}

fn central_of(points: &[(Float, Float)]) -> Central<Float, 3> {
    let spatial: Spatial<Float, 3> = points.iter().collect();
    Central::from(&spatial)
}

#[test]
fn test_unit_square() {
    let central = central_of(&unit_square());

    assert_eq!(central.get::<0, 0>(), 4.0);
    assert_eq!(central.get::<1, 0>(), 0.0);
    assert_eq!(central.get::<0, 1>(), 0.0);
    assert_eq!(central.get::<2, 0>(), 1.0);
    assert_eq!(central.get::<1, 1>(), 0.0);
    assert_eq!(central.get::<0, 2>(), 1.0);
    assert_abs_diff_eq!(central.get::<3, 0>(), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(central.get::<2, 1>(), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(central.get::<1, 2>(), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(central.get::<0, 3>(), 0.0, epsilon = 1e-12);
}

#[test]
fn test_first_order_vanishes() {
    let mut rng = SmallRng::seed_from_u64(3);
    for n in 1..20 {
        let central = central_of(&random_points(&mut rng, n));
        assert_eq!(central.get::<1, 0>(), 0.0);
        assert_eq!(central.get::<0, 1>(), 0.0);
        assert_eq!(central.get::<0, 0>(), n as Float);
    }
}

#[test]
fn test_translation_invariance() {
    let mut rng = SmallRng::seed_from_u64(11);
    for _ in 0..10 {
        let points = random_points(&mut rng, 50);
        let dx = rng.gen_range(-100.0..100.0);
        let dy = rng.gen_range(-100.0..100.0);

        let original = central_of(&points);
        let shifted = central_of(&translate(&points, dx, dy));

        assert_relative_eq!(shifted.get::<0, 0>(), original.get::<0, 0>());
        assert_relative_eq!(shifted.get::<2, 0>(), original.get::<2, 0>(), epsilon = 1e-6, max_relative = 1e-8);
        assert_relative_eq!(shifted.get::<1, 1>(), original.get::<1, 1>(), epsilon = 1e-6, max_relative = 1e-8);
        assert_relative_eq!(shifted.get::<0, 2>(), original.get::<0, 2>(), epsilon = 1e-6, max_relative = 1e-8);
        assert_relative_eq!(shifted.get::<3, 0>(), original.get::<3, 0>(), epsilon = 1e-4, max_relative = 1e-7);
        assert_relative_eq!(shifted.get::<2, 1>(), original.get::<2, 1>(), epsilon = 1e-4, max_relative = 1e-7);
        assert_relative_eq!(shifted.get::<1, 2>(), original.get::<1, 2>(), epsilon = 1e-4, max_relative = 1e-7);
        assert_relative_eq!(shifted.get::<0, 3>(), original.get::<0, 3>(), epsilon = 1e-4, max_relative = 1e-7);
    }
}

fn central_of_contour() -> Central<Float, 3> {
    let spatial: Spatial<Float, 3> = Spatial::from_contour(BLOB_CONTOUR.iter());
    Central::from(&spatial)
}

#[test]
fn test_contour_central_moments() {
    let central = central_of_contour();

    assert_eq!(central.get::<0, 0>(), 703.0);
    assert_eq!(central.get::<1, 0>(), 0.0);
    assert_eq!(central.get::<0, 1>(), 0.0);
    assert_relative_eq!(central.get::<2, 0>(), 212120.628694484, max_relative = 1e-9);
    assert_relative_eq!(central.get::<1, 1>(), 119935.73091512569, max_relative = 1e-9);
    assert_relative_eq!(central.get::<0, 2>(), 134538.24431009952, max_relative = 1e-9);
    assert_relative_eq!(central.get::<3, 0>(), -2035756.4570507407, max_relative = 1e-9);
    assert_relative_eq!(central.get::<2, 1>(), -158011.91380318906, max_relative = 1e-9);
    assert_relative_eq!(central.get::<1, 2>(), 862112.1277520265, max_relative = 1e-9);
    assert_relative_eq!(central.get::<0, 3>(), 1343240.7361632437, max_relative = 1e-9);
}

#[test]
fn test_lower_orders() {
    let points = [(0.0, 0.0), (2.0, 0.0), (2.0, 1.0)];
    let spatial: Spatial<Float, 2> = points.iter().collect();
    let central = Central::from(&spatial);

    assert_eq!(central.get::<0, 0>(), 3.0);
    assert_eq!(central.get::<1, 0>(), 0.0);
    assert_relative_eq!(central.get::<2, 0>(), 8.0 - 16.0 / 3.0, max_relative = 1e-12);
    assert_relative_eq!(central.get::<1, 1>(), 2.0 - 4.0 / 3.0, max_relative = 1e-12);
    assert_relative_eq!(central.get::<0, 2>(), 1.0 - 1.0 / 3.0, max_relative = 1e-12);

    let spatial: Spatial<Float, 1> = points.iter().collect();
    assert_eq!(format!("{}", Central::from(&spatial)), "mu00 = 3, mu10 = 0, mu01 = 0");
}

#[test]
fn test_empty_is_not_finite() {
    let spatial: Spatial<Float, 3> = Vec::<(Float, Float)>::new().iter().collect();
    let central = Central::from(&spatial);

    assert_eq!(central.get::<0, 0>(), 0.0);
    assert_eq!(central.get::<1, 0>(), 0.0);
    assert!(central.get::<2, 0>().is_nan());
    assert!(central.get::<1, 1>().is_nan());
    assert!(central.get::<3, 0>().is_nan());
    assert!(central.get::<0, 3>().is_nan());
}

#[test]
fn test_single_precision() {
    let points = unit_square().iter().map(|&(x, y)| (x as f32, y as f32)).collect::<Vec<_>>();
    let spatial: Spatial<f32, 3> = points.iter().collect();
    let central: Central<f32, 3> = Central::from(&spatial);
    assert_eq!(central.get::<0, 0>(), 4.0f32);
    assert_eq!(central.get::<1, 0>(), 0.0f32);
    assert_eq!(central.get::<2, 0>(), 1.0f32);
    assert_eq!(central.get::<1, 1>(), 0.0f32);
    assert_eq!(central.get::<0, 2>(), 1.0f32);
    assert_abs_diff_eq!(central.get::<2, 1>(), 0.0f32, epsilon = 1e-6);

    let blob = BLOB_CONTOUR.iter().map(|&(x, y)| (x as f32, y as f32)).collect::<Vec<_>>();
    let single: Central<f32, 3> = Central::from(&Spatial::<f32, 3>::from_contour(&blob));
    let double = central_of_contour();
    assert_relative_eq!(single.get::<2, 0>() as Float, double.get::<2, 0>(), max_relative = 1e-4);
    assert_relative_eq!(single.get::<1, 1>() as Float, double.get::<1, 1>(), max_relative = 1e-4);
}

#[test]
fn test_referential_transparency() {
    let points = BLOB_CONTOUR.iter().map(|&(x, y)| (x as Float, y as Float)).collect::<Vec<_>>();
    assert_eq!(central_of(&points), central_of(&points));
}

use super::*;
use approx::assert_abs_diff_eq;
use std::f64::consts::PI;

fn params(a: f64, b: f64, theta_end: f64, num_points: u32) -> SpiralParams {
    SpiralParams::builder()
        .a(a)
        .b(b)
        .theta_start(0.0)
        .theta_end(theta_end)
        .num_points(num_points)
        .build()
        .unwrap()
}

#[test]
fn test_sample_length_and_endpoints() {
    let p = params(1.0, 0.2, 4.0 * PI, 37);
    let curve = sample(&p).unwrap();

    assert_eq!(curve.len(), 37);
    assert!(!curve.is_empty());
    assert_eq!(curve.first().theta, 0.0);
    assert_eq!(curve.last().theta, 4.0 * PI);
}

#[test]
fn test_sample_two_points_hits_both_ends() {
    let p = params(2.0, 0.1, -3.0, 2);
    let curve = sample(&p).unwrap();
    let thetas: Vec<f64> = curve.points().iter().map(|pt| pt.theta).collect();
    assert_eq!(thetas, vec![0.0, -3.0]);
}

#[test]
fn test_sample_positions_follow_polar_form() {
    let p = params(1.5, 0.3, 2.0 * PI, 9);
    let curve = sample(&p).unwrap();

    for point in curve.points() {
        let expected_r = 1.5 * (0.3 * point.theta).exp();
        assert_abs_diff_eq!(point.radius, expected_r, epsilon = 1e-12);
        assert_abs_diff_eq!(point.position.x, expected_r * point.theta.cos(), epsilon = 1e-12);
        assert_abs_diff_eq!(point.position.y, expected_r * point.theta.sin(), epsilon = 1e-12);
        assert_abs_diff_eq!(point.position.length(), expected_r, epsilon = 1e-12);
    }
}

#[test]
fn test_radius_is_monotone_in_growth_direction() {
    let growing = sample(&params(1.0, 0.2, 6.0 * PI, 200)).unwrap();
    assert!(growing
        .points()
        .windows(2)
        .all(|w| w[1].radius > w[0].radius));

    let shrinking = sample(&params(1.0, -0.2, 6.0 * PI, 200)).unwrap();
    assert!(shrinking
        .points()
        .windows(2)
        .all(|w| w[1].radius < w[0].radius));
}

#[test]
fn test_zero_growth_rate_is_a_circle() {
    let circle = sample(&params(3.0, 0.0, 2.0 * PI, 50)).unwrap();
    for point in circle.points() {
        assert_eq!(point.radius, 3.0);
    }
    let (tangent, normal) = tangent_normal(&params(3.0, 0.0, 1.0, 2), 0.0).unwrap();
    assert_abs_diff_eq!(tangent.x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(tangent.y, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(normal.x, -1.0, epsilon = 1e-12);
}

#[test]
fn test_theta_runs_backwards_for_negative_range() {
    let p = params(1.0, 0.1, -2.0 * PI, 20);
    let curve = sample(&p).unwrap();
    assert!(curve.points().windows(2).all(|w| w[1].theta < w[0].theta));
}

#[test]
fn test_forward_example_end_radius_and_turns() {
    let p = params(1.0, 0.17, 7.0 * PI, 400);
    assert_abs_diff_eq!(turns(&p), 3.5, epsilon = 1e-12);
    let expected = (0.17 * 7.0 * PI).exp();
    assert_abs_diff_eq!(end_radius(&p).unwrap(), expected, epsilon = 1e-9);
    assert_abs_diff_eq!(end_radius(&p).unwrap(), 42.0347, epsilon = 1e-2);
    assert_abs_diff_eq!(sample(&p).unwrap().last().radius, expected, epsilon = 1e-9);
}

#[test]
fn test_tangent_is_unit_and_normal_is_perpendicular() {
    let p = params(0.5, 0.25, 10.0, 2);
    for theta in [-3.0, 0.0, 0.7, 2.5, 9.0] {
        let (tangent, normal) = tangent_normal(&p, theta).unwrap();
        assert_abs_diff_eq!(tangent.length(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normal.length(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(tangent.dot(normal), 0.0, epsilon = 1e-12);
        // +90° rotation
        assert_abs_diff_eq!(tangent.perp_dot(normal), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_tangent_matches_finite_difference() {
    let p = params(1.0, 0.2, 10.0, 2);
    let theta = 1.3;
    let h = 1e-6;
    let ahead = radius_at(&p, theta + h).unwrap() * DVec2::from_angle(theta + h);
    let behind = radius_at(&p, theta - h).unwrap() * DVec2::from_angle(theta - h);
    let numeric = (ahead - behind).normalize();
    let (tangent, _) = tangent_normal(&p, theta).unwrap();
    assert_abs_diff_eq!(tangent.x, numeric.x, epsilon = 1e-6);
    assert_abs_diff_eq!(tangent.y, numeric.y, epsilon = 1e-6);
}

#[test]
fn test_tangent_fails_at_vanishing_radius() {
    let p = params(1.0, -1.0, 1.0, 2);
    let err = tangent_normal(&p, 800.0).unwrap_err();
    assert!(matches!(err, SpiralError::DegenerateVector { radius, .. } if radius == 0.0));

    let tiny = params(1e-15, 0.1, 1.0, 2);
    assert!(matches!(
        tangent_normal(&tiny, 0.0),
        Err(SpiralError::DegenerateVector { .. })
    ));
}

#[test]
fn test_radius_overflow_is_reported() {
    let p = params(1.0, 5.0, 1.0, 2);
    assert!(matches!(
        radius_at(&p, 1000.0),
        Err(SpiralError::NumericOverflow { .. })
    ));
    let wide = params(1.0, 5.0, 1000.0, 3);
    assert!(matches!(sample(&wide), Err(SpiralError::NumericOverflow { .. })));
}

#[test]
fn test_helical_lift_is_linear_in_theta() {
    let p = SpiralParams::default().with_helix(0.5, 4.0).unwrap();
    assert_eq!(helical_lift(&p, 0.0), 0.0);
    assert_abs_diff_eq!(helical_lift(&p, 3.0), 6.0, epsilon = 1e-12);

    let curve = sample(&p.with_num_points(10).unwrap()).unwrap();
    for point in curve.points() {
        assert_abs_diff_eq!(point.z, point.theta * 2.0, epsilon = 1e-12);
        assert_eq!(point.position_3d().z, point.z);
    }
}

#[test]
fn test_sampling_is_pure() {
    let p = params(1.0, 0.17, 7.0 * PI, 64);
    assert_eq!(sample(&p).unwrap(), sample(&p).unwrap());
}

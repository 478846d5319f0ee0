use super::*;
use approx::assert_abs_diff_eq;
use std::f64::consts::PI;

fn base_curve() -> SampledCurve {
    let params = SpiralParams::builder()
        .a(1.0)
        .b(0.17)
        .theta_end(4.0 * PI)
        .num_points(120)
        .build()
        .unwrap();
    sample(&params).unwrap()
}

#[test]
fn test_three_fold_rays_at_120_degrees() {
    let layout = expand(&base_curve(), 3, 8.0).unwrap();
    let degrees: Vec<f64> = layout.rays().iter().map(|r| r.angle.to_degrees()).collect();

    assert_eq!(layout.rays().len(), 3);
    for (actual, expected) in degrees.iter().zip([0.0, 120.0, 240.0]) {
        assert_abs_diff_eq!(*actual, expected, epsilon = 1e-9);
    }
    for ray in layout.rays() {
        assert_eq!(ray.start, DVec2::ZERO);
        assert_abs_diff_eq!(ray.end.length(), 8.0, epsilon = 1e-12);
    }
    assert_abs_diff_eq!(layout.rays()[1].end.x, -4.0, epsilon = 1e-12);
    assert_abs_diff_eq!(layout.rays()[1].end.y, 8.0 * (3f64).sqrt() / 2.0, epsilon = 1e-12);
}

#[test]
fn test_three_fold_copies_are_exact_rotations() {
    let curve = base_curve();
    let layout = expand(&curve, 3, 1.0).unwrap();
    assert_eq!(layout.arms().len(), 3);

    let rotation = DMat2::from_angle(2.0 * PI / 3.0);
    for pair in layout.arms().windows(2) {
        for (p, q) in pair[0].curve.points().iter().zip(pair[1].curve.points()) {
            let expected = rotation * p.position;
            assert_abs_diff_eq!(q.position.x, expected.x, epsilon = 1e-9);
            assert_abs_diff_eq!(q.position.y, expected.y, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_first_copy_is_the_base_arm() {
    let curve = base_curve();
    let layout = expand(&curve, 4, 1.0).unwrap();
    assert_eq!(layout.arms()[0].curve, curve);
    assert_eq!(layout.arms()[0].angle, 0.0);
}

#[test]
fn test_rotation_preserves_parameterization() {
    let curve = base_curve();
    let layout = expand(&curve, 5, 1.0).unwrap();
    for arm in layout.arms() {
        assert_eq!(arm.curve.len(), curve.len());
        for (rotated, base) in arm.curve.points().iter().zip(curve.points()) {
            assert_eq!(rotated.theta, base.theta);
            assert_eq!(rotated.radius, base.radius);
            assert_eq!(rotated.z, base.z);
            assert_abs_diff_eq!(rotated.position.length(), base.radius, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_angular_order_and_spacing() {
    let layout = expand(&base_curve(), 12, 2.0).unwrap();
    assert_abs_diff_eq!(layout.spacing(), PI / 6.0, epsilon = 1e-15);
    for (k, (arm, ray)) in layout.arms().iter().zip(layout.rays()).enumerate() {
        assert_eq!(arm.index as usize, k);
        assert_eq!(ray.index as usize, k);
        assert_eq!(arm.angle, ray.angle);
    }
    assert!(layout.rays().windows(2).all(|w| w[1].angle > w[0].angle));
}

#[test]
fn test_invalid_spiral_counts() {
    let curve = base_curve();
    for count in [0, 13] {
        assert_eq!(
            expand(&curve, count, 1.0).unwrap_err(),
            SpiralError::InvalidSpiralCount {
                count,
                min: 1,
                max: 12
            }
        );
    }
}

#[test]
fn test_negative_ray_length_is_rejected() {
    assert!(matches!(
        expand(&base_curve(), 2, -1.0),
        Err(SpiralError::InvalidParameter { field: "ray_length", .. })
    ));
}

#[test]
fn test_expand_params_uses_record_settings() {
    let params = SpiralParams::default()
        .with_num_spirals(6)
        .and_then(|p| p.with_ray_length(3.5))
        .and_then(|p| p.with_num_points(16))
        .unwrap();
    let layout = expand_params(&params).unwrap();
    assert_eq!(layout.arm_count(), 6);
    assert_eq!(layout.arms()[0].curve.len(), 16);
    assert_abs_diff_eq!(layout.rays()[3].end.x, -3.5, epsilon = 1e-12);
}

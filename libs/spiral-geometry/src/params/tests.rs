use super::*;
use std::f64::consts::PI;

#[test]
fn test_default_params_are_valid() {
    let params = SpiralParams::default();
    assert!(params.to_builder().build().is_ok());
    assert_eq!(params.a(), DEFAULT_A);
    assert_eq!(params.num_spirals(), 1);
}

#[test]
fn test_builder_sets_every_field() {
    let params = SpiralParams::builder()
        .a(2.0)
        .b(-0.3)
        .theta_start(1.0)
        .theta_end(-4.0)
        .num_points(12)
        .num_spirals(4)
        .pitch(0.25)
        .height_scale(3.0)
        .ray_length(0.0)
        .build()
        .unwrap();

    assert_eq!(params.a(), 2.0);
    assert_eq!(params.b(), -0.3);
    assert_eq!(params.theta_start(), 1.0);
    assert_eq!(params.theta_end(), -4.0);
    assert_eq!(params.num_points(), 12);
    assert_eq!(params.num_spirals(), 4);
    assert_eq!(params.pitch(), 0.25);
    assert_eq!(params.height_scale(), 3.0);
    assert_eq!(params.ray_length(), 0.0);
}

#[test]
fn test_new_matches_builder() {
    let direct = SpiralParams::new(1.0, 0.17, 0.0, 7.0 * PI, 100, 3, 0.5, 2.0, 5.0).unwrap();
    let built = SpiralParams::builder()
        .a(1.0)
        .b(0.17)
        .theta_start(0.0)
        .theta_end(7.0 * PI)
        .num_points(100)
        .num_spirals(3)
        .pitch(0.5)
        .height_scale(2.0)
        .ray_length(5.0)
        .build()
        .unwrap();
    assert_eq!(direct, built);
}

#[test]
fn test_overrides_leave_original_untouched() {
    let params = SpiralParams::default();
    let updated = params.with_b(0.3).unwrap();
    assert_eq!(params.b(), DEFAULT_B);
    assert_eq!(updated.b(), 0.3);
    assert_eq!(updated.a(), params.a());
}

#[test]
fn test_zero_growth_rate_is_accepted() {
    let circle = SpiralParams::default().with_b(0.0).unwrap();
    assert_eq!(circle.b(), 0.0);
}

#[test]
fn test_rejects_non_positive_scale() {
    let err = SpiralParams::default().with_a(0.0).unwrap_err();
    assert!(matches!(err, SpiralError::InvalidParameter { field: "a", .. }));
    assert!(SpiralParams::default().with_a(-1.0).is_err());
    assert!(SpiralParams::default().with_a(f64::NAN).is_err());
}

#[test]
fn test_rejects_empty_angular_range() {
    let err = SpiralParams::default().with_theta_range(2.0, 2.0).unwrap_err();
    assert!(matches!(
        err,
        SpiralError::InvalidParameter {
            field: "theta_end",
            ..
        }
    ));
}

#[test]
fn test_rejects_too_few_points() {
    let err = SpiralParams::default().with_num_points(1).unwrap_err();
    assert!(matches!(
        err,
        SpiralError::InvalidParameter {
            field: "num_points",
            ..
        }
    ));
    assert!(SpiralParams::default().with_num_points(2).is_ok());
}

#[test]
fn test_spiral_count_bounds() {
    for count in [0, 13] {
        assert_eq!(
            SpiralParams::default().with_num_spirals(count).unwrap_err(),
            SpiralError::InvalidSpiralCount {
                count,
                min: 1,
                max: 12
            }
        );
    }
    assert!(SpiralParams::default().with_num_spirals(1).is_ok());
    assert!(SpiralParams::default().with_num_spirals(12).is_ok());
}

#[test]
fn test_rejects_negative_ray_length() {
    assert!(SpiralParams::default().with_ray_length(-0.5).is_err());
    assert!(SpiralParams::default().with_helix(f64::INFINITY, 1.0).is_err());
}

#[test]
fn test_design_target_validation() {
    let target = DesignTarget::new(10.0, 2.0, 15.0).unwrap();
    assert_eq!(target.width_root(), 10.0);
    assert_eq!(target.width_tip(), 2.0);
    assert_eq!(target.length(), 15.0);

    assert!(matches!(
        DesignTarget::new(2.0, 2.0, 15.0),
        Err(SpiralError::InvalidTarget {
            field: "width_root",
            ..
        })
    ));
    assert!(matches!(
        DesignTarget::new(10.0, 0.0, 15.0),
        Err(SpiralError::InvalidTarget {
            field: "width_tip",
            ..
        })
    ));
    assert!(matches!(
        DesignTarget::new(10.0, 2.0, -1.0),
        Err(SpiralError::InvalidTarget { field: "length", .. })
    ));
    assert!(DesignTarget::new(f64::NAN, 2.0, 15.0).is_err());
}

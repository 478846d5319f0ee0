use super::*;
use approx::assert_abs_diff_eq;

fn reference_target() -> DesignTarget {
    DesignTarget::new(10.0, 2.0, 15.0).unwrap()
}

#[test]
fn test_arm_length_is_decreasing() {
    let samples: Vec<f64> = [1e-3, 0.01, 0.1, 0.3, 0.5, 1.0, 2.0, 5.0]
        .iter()
        .map(|&b| arm_length(b, 10.0, 2.0).unwrap())
        .collect();
    assert!(samples.windows(2).all(|w| w[1] < w[0]));
}

#[test]
fn test_arm_length_at_domain_bounds() {
    // Large b: √(b²+1)/b → 1 and coth(πb) → 1, so L → (W_r − W_t)/2
    assert_abs_diff_eq!(arm_length(5.0, 10.0, 2.0).unwrap(), 4.0792, epsilon = 1e-3);
    assert!(arm_length(1e-6, 10.0, 2.0).unwrap() > 1e12);
}

#[test]
fn test_arm_length_at_zero_growth_overflows() {
    assert!(matches!(
        arm_length(0.0, 10.0, 2.0),
        Err(SpiralError::NumericOverflow { .. })
    ));
}

#[test]
fn test_reference_target_solution() {
    let params = InverseSolver::default().solve(&reference_target()).unwrap();

    assert_abs_diff_eq!(params.b(), 0.352175, epsilon = 1e-4);
    assert_abs_diff_eq!(params.a(), 0.245666, epsilon = 1e-4);
    assert_abs_diff_eq!(params.theta_start(), 0.0);
    assert_abs_diff_eq!(params.theta_end(), 10.85318, epsilon = 1e-3);
}

#[test]
fn test_solution_reproduces_targets() {
    let target = reference_target();
    let params = InverseSolver::default().solve(&target).unwrap();

    let length = arm_length(params.b(), target.width_root(), target.width_tip()).unwrap();
    assert_abs_diff_eq!(length, target.length(), epsilon = 1e-6);

    let tip = section_width(&params, params.theta_start()).unwrap();
    assert_abs_diff_eq!(tip, target.width_tip(), epsilon = 1e-9);

    let theta_root = params.theta_end() - std::f64::consts::TAU;
    let root = section_width(&params, theta_root).unwrap();
    assert_abs_diff_eq!(root, target.width_root(), epsilon = 1e-9);
}

#[test]
fn test_free_function_matches_solver() {
    let direct = solve(10.0, 2.0, 15.0).unwrap();
    let via_solver = InverseSolver::default().solve(&reference_target()).unwrap();
    assert_eq!(direct, via_solver);
}

#[test]
fn test_long_arm_needs_slow_growth() {
    let params = solve(10.0, 2.0, 1000.0).unwrap();
    let length = arm_length(params.b(), 10.0, 2.0).unwrap();
    assert_abs_diff_eq!(length, 1000.0, epsilon = 1e-6);
    assert!(params.b() < 0.1);
}

#[test]
fn test_short_length_is_unreachable() {
    let err = solve(10.0, 2.0, 3.0).unwrap_err();
    match err {
        SpiralError::UnreachableLength { length, min, max } => {
            assert_eq!(length, 3.0);
            assert_abs_diff_eq!(min, arm_length(5.0, 10.0, 2.0).unwrap());
            assert_abs_diff_eq!(max, arm_length(1e-6, 10.0, 2.0).unwrap());
        }
        other => panic!("expected UnreachableLength, got {other:?}"),
    }
}

#[test]
fn test_narrow_domain_makes_long_arm_unreachable() {
    let config = SolverConfig::new(0.2, 1.0, 1e-6, 80, 0.0).unwrap();
    let solver = InverseSolver::new(config);
    let target = DesignTarget::new(10.0, 2.0, 1000.0).unwrap();
    assert!(matches!(
        solver.solve(&target),
        Err(SpiralError::UnreachableLength { .. })
    ));
}

#[test]
fn test_huge_widths_overflow() {
    let err = solve(1e308, 1.0, 10.0).unwrap_err();
    assert!(matches!(err, SpiralError::NumericOverflow { .. }));
}

#[test]
fn test_invalid_target_is_rejected_before_solving() {
    assert!(matches!(
        solve(2.0, 10.0, 15.0),
        Err(SpiralError::InvalidTarget { .. })
    ));
}

#[test]
fn test_iteration_cap_still_returns_bracketed_value() {
    // One refinement cannot reach the tolerance; the midpoint is returned
    let config = SolverConfig::new(1e-6, 5.0, 1e-6, 1, 0.0).unwrap();
    let b = InverseSolver::new(config)
        .solve_growth_rate(&reference_target())
        .unwrap();
    assert_abs_diff_eq!(b, 0.5 * (1e-6 + 5.0));
}

#[test]
fn test_theta_offset_shifts_spiral_but_keeps_widths() {
    let config = SolverConfig::default().with_theta_offset(1.0).unwrap();
    let target = reference_target();
    let params = InverseSolver::new(config).solve(&target).unwrap();
    let baseline = solve(10.0, 2.0, 15.0).unwrap();

    assert_abs_diff_eq!(params.b(), baseline.b(), epsilon = 1e-12);
    assert_eq!(params.theta_start(), 1.0);
    assert_abs_diff_eq!(params.theta_end(), baseline.theta_end() + 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(
        section_width(&params, 1.0).unwrap(),
        target.width_tip(),
        epsilon = 1e-9
    );
}

#[test]
fn test_template_fields_are_preserved() {
    let template = SpiralParams::default()
        .with_num_spirals(5)
        .and_then(|p| p.with_ray_length(42.0))
        .and_then(|p| p.with_num_points(64))
        .unwrap();
    let params = InverseSolver::default()
        .solve_with_template(&reference_target(), &template)
        .unwrap();
    assert_eq!(params.num_spirals(), 5);
    assert_eq!(params.ray_length(), 42.0);
    assert_eq!(params.num_points(), 64);
}

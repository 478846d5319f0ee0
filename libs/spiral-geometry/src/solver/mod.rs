//! # Inverse Solver
//!
//! Turns physical design targets (root width, tip width, arm length) into an
//! explicit spiral `(a, b, θ_end)`.
//!
//! ## Relations
//!
//! ```text
//! width_tip  = a·e^(b·θ0)·(e^(2πb) − 1)
//! width_root = a·e^(b·θ_root)·(e^(2πb) − 1)
//! L(b)       = (√(b²+1)/b) · (W_r − W_t) · 0.5 · (e^(2πb)+1)/(e^(2πb)−1)
//! ```
//!
//! ## Algorithm
//!
//! 1. Find `b` in `[b_min, b_max]` with `L(b) = length` by bisection: at most
//!    `max_iterations` halvings, stopping early once `|L(mid) − length| < ε`.
//! 2. `a = width_tip / (e^(b·θ0)·(e^(2πb) − 1))`.
//! 3. `θ_root = θ0 + ln(W_r/W_t)/b` and `θ_end = θ_root + 2π`, so the sampled
//!    spiral spans one revolution past the root cross-section.
//!
//! ## Monotonicity
//!
//! `L(b)` is strictly decreasing on `(0, ∞)`: both `√(b²+1)/b` and
//! `coth(πb)` decrease. The bisection relies on this to treat a sign change
//! between the bracket ends as a unique root. A change to the length model
//! must re-establish it.
//!
//! ## Limitation
//!
//! The domain bounds exclude spirals winding slower than `b_min` or faster than
//! `b_max`; targets that would need them are reported as unreachable.

use std::f64::consts::TAU;

use config::constants::SolverConfig;

use crate::error::{SpiralError, SpiralResult};
use crate::params::{DesignTarget, SpiralParams};

// =============================================================================
// LENGTH MODEL
// =============================================================================

/// Arm length `L(b)` of a finger with the given root and tip widths.
///
/// ```rust
/// use spiral_geometry::arm_length;
///
/// let short = arm_length(0.5, 10.0, 2.0)?;
/// let long = arm_length(0.1, 10.0, 2.0)?;
/// assert!(long > short);
/// # Ok::<(), spiral_geometry::SpiralError>(())
/// ```
///
/// # Errors
/// `NumericOverflow` when `e^(2πb)` or the result is not finite (this includes
/// `b = 0`, where the length diverges).
pub fn arm_length(b: f64, width_root: f64, width_tip: f64) -> SpiralResult<f64> {
    let growth = revolution_growth(b)?;
    let slant = (b * b + 1.0).sqrt() / b;
    let coth = (growth + 1.0) / (growth - 1.0);
    let length = slant * (width_root - width_tip) * 0.5 * coth;
    if length.is_finite() {
        Ok(length)
    } else {
        Err(SpiralError::overflow("arm length L(b)", b))
    }
}

/// `e^(2πb)`, the radius ratio across one revolution.
pub(crate) fn revolution_growth(b: f64) -> SpiralResult<f64> {
    let growth = (TAU * b).exp();
    if growth.is_finite() {
        Ok(growth)
    } else {
        Err(SpiralError::overflow("e^(2πb)", b))
    }
}

// =============================================================================
// SOLVER
// =============================================================================

/// Bisection-based inverse solver.
///
/// ## Example
///
/// ```rust
/// use spiral_geometry::{DesignTarget, InverseSolver};
///
/// let solver = InverseSolver::default();
/// let params = solver.solve(&DesignTarget::new(10.0, 2.0, 15.0)?)?;
/// assert!((params.b() - 0.3522).abs() < 1e-3);
/// # Ok::<(), spiral_geometry::SpiralError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InverseSolver {
    config: SolverConfig,
}

impl InverseSolver {
    /// Creates a solver with explicit settings.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Settings in use.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves a target, filling the non-geometric fields from the defaults.
    pub fn solve(&self, target: &DesignTarget) -> SpiralResult<SpiralParams> {
        self.solve_with_template(target, &SpiralParams::default())
    }

    /// Solves a target, copying `num_points`, `num_spirals`, `pitch`,
    /// `height_scale` and `ray_length` from `template`.
    ///
    /// # Errors
    /// - `UnreachableLength` when the length is outside `[L(b_max), L(b_min)]`.
    /// - `NumericOverflow` when an exponential term leaves the `f64` range.
    pub fn solve_with_template(
        &self,
        target: &DesignTarget,
        template: &SpiralParams,
    ) -> SpiralResult<SpiralParams> {
        let b = self.solve_growth_rate(target)?;
        let theta_offset = self.config.theta_offset();

        let growth = revolution_growth(b)?;
        let tip_scale = (b * theta_offset).exp() * (growth - 1.0);
        let a = target.width_tip() / tip_scale;
        if !(a.is_finite() && a > 0.0) {
            return Err(SpiralError::overflow("scale coefficient a", b));
        }

        let theta_root = theta_offset + (target.width_root() / target.width_tip()).ln() / b;
        let theta_end = theta_root + TAU;

        log::debug!(
            "solved target (root {}, tip {}, length {}) -> a = {a}, b = {b}, theta_end = {theta_end}",
            target.width_root(),
            target.width_tip(),
            target.length()
        );

        template
            .to_builder()
            .a(a)
            .b(b)
            .theta_start(theta_offset)
            .theta_end(theta_end)
            .build()
    }

    /// Finds the growth rate `b` whose arm length matches the target.
    pub fn solve_growth_rate(&self, target: &DesignTarget) -> SpiralResult<f64> {
        let b_min = self.config.b_min();
        let b_max = self.config.b_max();
        let tolerance = self.config.tolerance();
        let max_iterations = self.config.max_iterations();
        let length_at = |b: f64| arm_length(b, target.width_root(), target.width_tip());
        let residual = |b: f64| -> SpiralResult<f64> { Ok(length_at(b)? - target.length()) };

        let mut low = b_min;
        let mut high = b_max;
        let length_low = length_at(low)?;
        let length_high = length_at(high)?;
        let mut f_low = length_low - target.length();
        let f_high = length_high - target.length();

        if f_low.abs() < tolerance {
            return Ok(low);
        }
        if f_high.abs() < tolerance {
            return Ok(high);
        }
        if f_low.signum() == f_high.signum() {
            return Err(SpiralError::UnreachableLength {
                length: target.length(),
                min: length_low.min(length_high),
                max: length_low.max(length_high),
            });
        }

        log::debug!(
            "bisection bracket [{low}, {high}] with residuals [{f_low}, {f_high}]"
        );

        let mut mid = 0.5 * (low + high);
        for iteration in 1..=max_iterations {
            mid = 0.5 * (low + high);
            let f_mid = residual(mid)?;
            if f_mid.abs() < tolerance {
                log::debug!("bisection converged after {iteration} iterations: b = {mid}");
                return Ok(mid);
            }
            if f_mid.signum() == f_low.signum() {
                low = mid;
                f_low = f_mid;
            } else {
                high = mid;
            }
        }

        log::warn!(
            "bisection hit the {max_iterations}-iteration cap; bracket [{low}, {high}], returning b = {mid}"
        );
        Ok(mid)
    }
}

/// Solves `(width_root, width_tip, length)` with the default solver settings.
///
/// ```rust
/// use spiral_geometry::solve;
///
/// let params = solve(10.0, 2.0, 15.0)?;
/// assert!((params.a() - 0.2457).abs() < 1e-3);
/// # Ok::<(), spiral_geometry::SpiralError>(())
/// ```
///
/// # Errors
/// `InvalidTarget` for inconsistent widths or length, otherwise as
/// [`InverseSolver::solve_with_template`].
pub fn solve(width_root: f64, width_tip: f64, length: f64) -> SpiralResult<SpiralParams> {
    let target = DesignTarget::new(width_root, width_tip, length)?;
    InverseSolver::default().solve(&target)
}

/// Width of the cross-section one revolution wide starting at `theta`:
/// `a·e^(bθ)·(e^(2πb) − 1)`.
pub fn section_width(params: &SpiralParams, theta: f64) -> SpiralResult<f64> {
    let growth = revolution_growth(params.b())?;
    let width = params.a() * (params.b() * theta).exp() * (growth - 1.0);
    if width.is_finite() {
        Ok(width)
    } else {
        Err(SpiralError::overflow("section width", theta))
    }
}

#[cfg(test)]
mod tests;

//! # Spiral Model
//!
//! Pure geometric sampling of `r = a·e^(bθ)`.
//!
//! ```text
//! θ_i = θ_start + (θ_end − θ_start)·i/(n − 1)      i = 0..n−1
//! r_i = a·e^(b·θ_i)
//! (x_i, y_i) = r_i·(cos θ_i, sin θ_i)
//! z_i = θ_i · pitch · height_scale
//! ```
//!
//! Nothing here divides by `b`, so `b = 0` yields a circle of radius `a`.

use std::f64::consts::TAU;

use config::constants::DEGENERATE_VECTOR_EPSILON;
use glam::{DVec2, DVec3};

use crate::error::{SpiralError, SpiralResult};
use crate::params::SpiralParams;

// =============================================================================
// SAMPLED CURVE
// =============================================================================

/// One sample of a spiral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Spiral parameter θ, in radians.
    pub theta: f64,
    /// Distance from the spiral center.
    pub radius: f64,
    /// Cartesian position in the plane.
    pub position: DVec2,
    /// Helical lift at θ.
    pub z: f64,
}

impl CurvePoint {
    /// Position lifted onto the helix.
    pub fn position_3d(&self) -> DVec3 {
        self.position.extend(self.z)
    }
}

/// Ordered samples of a spiral. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledCurve {
    points: Vec<CurvePoint>,
}

impl SampledCurve {
    pub(crate) fn from_points(points: Vec<CurvePoint>) -> Self {
        debug_assert!(!points.is_empty());
        Self { points }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All samples in θ order.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Sample at `theta_start`.
    pub fn first(&self) -> &CurvePoint {
        &self.points[0]
    }

    /// Sample at `theta_end`.
    pub fn last(&self) -> &CurvePoint {
        &self.points[self.points.len() - 1]
    }

    /// Planar positions in θ order.
    pub fn positions(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.points.iter().map(|p| p.position)
    }

    /// Helically lifted positions in θ order.
    pub fn positions_3d(&self) -> impl Iterator<Item = DVec3> + '_ {
        self.points.iter().map(CurvePoint::position_3d)
    }
}

// =============================================================================
// SAMPLING
// =============================================================================

/// Samples `num_points` points uniformly in θ over `[theta_start, theta_end]`.
///
/// Both ends are included and the last sample sits exactly on `theta_end`.
///
/// ```rust
/// use spiral_geometry::{sample, SpiralParams};
///
/// let params = SpiralParams::default().with_num_points(5)?;
/// let curve = sample(&params)?;
/// assert_eq!(curve.len(), 5);
/// assert_eq!(curve.last().theta, params.theta_end());
/// # Ok::<(), spiral_geometry::SpiralError>(())
/// ```
///
/// # Errors
/// `NumericOverflow` when `a·e^(bθ)` leaves the `f64` range.
pub fn sample(params: &SpiralParams) -> SpiralResult<SampledCurve> {
    let count = params.num_points() as usize;
    let last = count - 1;
    let start = params.theta_start();
    let end = params.theta_end();
    let span = end - start;

    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        let theta = if i == last {
            end
        } else {
            start + span * (i as f64) / (last as f64)
        };
        let radius = radius_at(params, theta)?;
        let (sin, cos) = theta.sin_cos();
        points.push(CurvePoint {
            theta,
            radius,
            position: DVec2::new(radius * cos, radius * sin),
            z: helical_lift(params, theta),
        });
    }

    log::trace!(
        "sampled {} points over [{}, {}] (a = {}, b = {})",
        count,
        start,
        end,
        params.a(),
        params.b()
    );
    Ok(SampledCurve::from_points(points))
}

/// Radius `a·e^(bθ)` at an arbitrary angle.
///
/// # Errors
/// `NumericOverflow` when the result is not finite.
pub fn radius_at(params: &SpiralParams, theta: f64) -> SpiralResult<f64> {
    let radius = params.a() * (params.b() * theta).exp();
    if radius.is_finite() {
        Ok(radius)
    } else {
        Err(SpiralError::overflow("radius a·e^(bθ)", theta))
    }
}

/// Radius at `theta_end`.
pub fn end_radius(params: &SpiralParams) -> SpiralResult<f64> {
    radius_at(params, params.theta_end())
}

/// Number of revolutions covered by `[theta_start, theta_end]`; negative when
/// the range runs clockwise.
pub fn turns(params: &SpiralParams) -> f64 {
    (params.theta_end() - params.theta_start()) / TAU
}

/// Vertical lift of the helical (3D) rendering: `θ · pitch · height_scale`.
pub fn helical_lift(params: &SpiralParams, theta: f64) -> f64 {
    theta * params.pitch() * params.height_scale()
}

// =============================================================================
// TANGENT / NORMAL
// =============================================================================

/// Unit tangent and unit normal at `theta`.
///
/// The tangent follows increasing θ and is the normalized derivative
/// `r·(b·cos θ − sin θ, b·sin θ + cos θ)`; the normal is the tangent rotated
/// by +90°.
///
/// ```rust
/// use spiral_geometry::{tangent_normal, SpiralParams};
///
/// let params = SpiralParams::default();
/// let (tangent, normal) = tangent_normal(&params, 1.0)?;
/// assert!((tangent.length() - 1.0).abs() < 1e-12);
/// assert!(tangent.dot(normal).abs() < 1e-12);
/// # Ok::<(), spiral_geometry::SpiralError>(())
/// ```
///
/// # Errors
/// - `DegenerateVector` when the radius at `theta` is effectively zero.
/// - `NumericOverflow` when the radius is not finite.
pub fn tangent_normal(params: &SpiralParams, theta: f64) -> SpiralResult<(DVec2, DVec2)> {
    let radius = radius_at(params, theta)?;
    let b = params.b();
    let (sin, cos) = theta.sin_cos();
    let raw = DVec2::new(b * cos - sin, b * sin + cos) * radius;
    let magnitude = raw.length();

    if magnitude.is_infinite() {
        return Err(SpiralError::overflow("spiral derivative", theta));
    }
    if magnitude.is_nan() || magnitude < DEGENERATE_VECTOR_EPSILON {
        return Err(SpiralError::DegenerateVector { theta, radius });
    }

    let tangent = raw / magnitude;
    Ok((tangent, tangent.perp()))
}

#[cfg(test)]
mod tests;

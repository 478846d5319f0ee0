//! # Symmetry Expander
//!
//! Distributes `n` copies of one sampled arm uniformly around the common
//! center and adds one structural ray per arm.
//!
//! Copies are produced by rotating the sampled Cartesian positions with a 2D
//! rotation matrix, not by re-sampling with a shifted θ: the arms are spread in
//! physical space while each keeps its own spiral parameterization.

use std::f64::consts::TAU;

use glam::{DMat2, DVec2};

use crate::error::{SpiralError, SpiralResult};
use crate::model::{sample, CurvePoint, SampledCurve};
use crate::params::{check_spiral_count, SpiralParams};

// =============================================================================
// LAYOUT TYPES
// =============================================================================

/// One rotated copy of the base arm.
#[derive(Debug, Clone, PartialEq)]
pub struct ArmCopy {
    /// Position of this arm in the layout, `0..n`.
    pub index: u32,
    /// Rotation applied to the base arm, in radians.
    pub angle: f64,
    /// Rotated samples. θ, radius and z are those of the base arm.
    pub curve: SampledCurve,
}

/// Straight reference line from the common center outward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Position of this ray in the layout, `0..n`.
    pub index: u32,
    /// Direction of the ray, in radians.
    pub angle: f64,
    /// Always the origin.
    pub start: DVec2,
    /// `ray_length·(cos angle, sin angle)`.
    pub end: DVec2,
}

/// `n` arms and `n` rays in angular order `0, Δθ, 2Δθ, …`.
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricLayout {
    arms: Vec<ArmCopy>,
    rays: Vec<Ray>,
}

impl SymmetricLayout {
    /// Rotated arms.
    pub fn arms(&self) -> &[ArmCopy] {
        &self.arms
    }

    /// Structural rays.
    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    /// Number of arms (equal to the number of rays).
    pub fn arm_count(&self) -> usize {
        self.arms.len()
    }

    /// Angular spacing `2π/n` between neighbouring arms.
    pub fn spacing(&self) -> f64 {
        TAU / self.arms.len() as f64
    }
}

// =============================================================================
// EXPANSION
// =============================================================================

/// Rotates `curve` to `count` uniformly spaced angles and builds the matching
/// rays.
///
/// ```rust
/// use spiral_geometry::{expand, sample, SpiralParams};
///
/// let curve = sample(&SpiralParams::default())?;
/// let layout = expand(&curve, 3, 5.0)?;
/// assert_eq!(layout.arms().len(), 3);
/// assert_eq!(layout.rays().len(), 3);
/// # Ok::<(), spiral_geometry::SpiralError>(())
/// ```
///
/// # Errors
/// - `InvalidSpiralCount` when `count` is outside `[1, 12]`.
/// - `InvalidParameter` when `ray_length` is negative or not finite.
pub fn expand(curve: &SampledCurve, count: u32, ray_length: f64) -> SpiralResult<SymmetricLayout> {
    check_spiral_count(count)?;
    if !(ray_length.is_finite() && ray_length >= 0.0) {
        return Err(SpiralError::InvalidParameter {
            field: "ray_length",
            value: ray_length,
            reason: "must be finite and not negative",
        });
    }

    let step = TAU / f64::from(count);
    let mut arms = Vec::with_capacity(count as usize);
    let mut rays = Vec::with_capacity(count as usize);

    for index in 0..count {
        let angle = step * f64::from(index);
        arms.push(ArmCopy {
            index,
            angle,
            curve: rotate_curve(curve, angle),
        });
        rays.push(Ray {
            index,
            angle,
            start: DVec2::ZERO,
            end: DVec2::from_angle(angle) * ray_length,
        });
    }

    log::trace!("expanded {} samples into {count} arms", curve.len());
    Ok(SymmetricLayout { arms, rays })
}

/// Samples `params` and expands it with its own arm count and ray length.
pub fn expand_params(params: &SpiralParams) -> SpiralResult<SymmetricLayout> {
    let curve = sample(params)?;
    expand(&curve, params.num_spirals(), params.ray_length())
}

fn rotate_curve(curve: &SampledCurve, angle: f64) -> SampledCurve {
    let rotation = DMat2::from_angle(angle);
    let points = curve
        .points()
        .iter()
        .map(|point| CurvePoint {
            position: rotation * point.position,
            ..*point
        })
        .collect();
    SampledCurve::from_points(points)
}

#[cfg(test)]
mod tests;

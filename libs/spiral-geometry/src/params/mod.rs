//! # Spiral Parameters
//!
//! Immutable parameter records consumed by every other module.
//!
//! - [`SpiralParams`]: the explicit description `r = a·e^(bθ)` over
//!   `[theta_start, theta_end]` together with its sampling and layout settings.
//! - [`DesignTarget`]: the physical targets the inverse solver turns into a
//!   [`SpiralParams`].
//!
//! Neither type has setters. Changing a value means building a new instance
//! through [`SpiralParams::builder`] or one of the `with_*` overrides, each of
//! which re-validates the whole record.

use config::constants::{
    DEFAULT_A, DEFAULT_B, DEFAULT_HEIGHT_SCALE, DEFAULT_NUM_POINTS, DEFAULT_NUM_SPIRALS,
    DEFAULT_PITCH, DEFAULT_RAY_LENGTH, DEFAULT_THETA_END, DEFAULT_THETA_START, MAX_SPIRALS,
    MIN_SAMPLE_POINTS, MIN_SPIRALS,
};

use crate::error::{SpiralError, SpiralResult};

// =============================================================================
// SPIRAL PARAMS
// =============================================================================

/// Validated, immutable description of one logarithmic spiral.
///
/// ## Example
///
/// ```rust
/// use spiral_geometry::SpiralParams;
///
/// let params = SpiralParams::builder()
///     .a(1.0)
///     .b(0.17)
///     .theta_end(7.0 * std::f64::consts::PI)
///     .build()?;
/// let wider = params.with_a(2.0)?;
/// assert_eq!(params.a(), 1.0);
/// assert_eq!(wider.a(), 2.0);
/// # Ok::<(), spiral_geometry::SpiralError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralParams {
    a: f64,
    b: f64,
    theta_start: f64,
    theta_end: f64,
    num_points: u32,
    num_spirals: u32,
    pitch: f64,
    height_scale: f64,
    ray_length: f64,
}

impl Default for SpiralParams {
    /// The finger designer's default spiral: three turns of
    /// `4.95·e^(0.1764θ)` sampled with 500 points.
    fn default() -> Self {
        Self {
            a: DEFAULT_A,
            b: DEFAULT_B,
            theta_start: DEFAULT_THETA_START,
            theta_end: DEFAULT_THETA_END,
            num_points: DEFAULT_NUM_POINTS,
            num_spirals: DEFAULT_NUM_SPIRALS,
            pitch: DEFAULT_PITCH,
            height_scale: DEFAULT_HEIGHT_SCALE,
            ray_length: DEFAULT_RAY_LENGTH,
        }
    }
}

impl SpiralParams {
    /// Creates a record from every field at once.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        a: f64,
        b: f64,
        theta_start: f64,
        theta_end: f64,
        num_points: u32,
        num_spirals: u32,
        pitch: f64,
        height_scale: f64,
        ray_length: f64,
    ) -> SpiralResult<Self> {
        let params = Self {
            a,
            b,
            theta_start,
            theta_end,
            num_points,
            num_spirals,
            pitch,
            height_scale,
            ray_length,
        };
        params.validate()?;
        Ok(params)
    }

    /// Starts a builder seeded with the default values.
    pub fn builder() -> SpiralParamsBuilder {
        SpiralParamsBuilder::default()
    }

    /// Starts a builder seeded with this record's values.
    pub fn to_builder(&self) -> SpiralParamsBuilder {
        SpiralParamsBuilder { params: *self }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Scale coefficient `a`.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Growth rate `b`. Its sign is the winding direction.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// First sampled angle, in radians.
    pub fn theta_start(&self) -> f64 {
        self.theta_start
    }

    /// Last sampled angle, in radians.
    pub fn theta_end(&self) -> f64 {
        self.theta_end
    }

    /// Number of samples along the curve.
    pub fn num_points(&self) -> u32 {
        self.num_points
    }

    /// Number of arms in the symmetric layout.
    pub fn num_spirals(&self) -> u32 {
        self.num_spirals
    }

    /// Vertical rise per radian of the helical lift.
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Scale applied to the helical z-axis.
    pub fn height_scale(&self) -> f64 {
        self.height_scale
    }

    /// Length of the structural rays.
    pub fn ray_length(&self) -> f64 {
        self.ray_length
    }

    // -------------------------------------------------------------------------
    // Overrides
    // -------------------------------------------------------------------------

    /// Returns a copy with a different scale coefficient.
    pub fn with_a(&self, a: f64) -> SpiralResult<Self> {
        self.to_builder().a(a).build()
    }

    /// Returns a copy with a different growth rate.
    pub fn with_b(&self, b: f64) -> SpiralResult<Self> {
        self.to_builder().b(b).build()
    }

    /// Returns a copy spanning a different angular range.
    pub fn with_theta_range(&self, theta_start: f64, theta_end: f64) -> SpiralResult<Self> {
        self.to_builder()
            .theta_start(theta_start)
            .theta_end(theta_end)
            .build()
    }

    /// Returns a copy with a different sampling resolution.
    pub fn with_num_points(&self, num_points: u32) -> SpiralResult<Self> {
        self.to_builder().num_points(num_points).build()
    }

    /// Returns a copy with a different arm count.
    pub fn with_num_spirals(&self, num_spirals: u32) -> SpiralResult<Self> {
        self.to_builder().num_spirals(num_spirals).build()
    }

    /// Returns a copy with a different helical pitch and height scale.
    pub fn with_helix(&self, pitch: f64, height_scale: f64) -> SpiralResult<Self> {
        self.to_builder()
            .pitch(pitch)
            .height_scale(height_scale)
            .build()
    }

    /// Returns a copy with a different ray length.
    pub fn with_ray_length(&self, ray_length: f64) -> SpiralResult<Self> {
        self.to_builder().ray_length(ray_length).build()
    }

    fn validate(&self) -> SpiralResult<()> {
        require_finite("a", self.a)?;
        if self.a <= 0.0 {
            return Err(invalid("a", self.a, "must be greater than zero"));
        }
        require_finite("b", self.b)?;
        require_finite("theta_start", self.theta_start)?;
        require_finite("theta_end", self.theta_end)?;
        if self.theta_end == self.theta_start {
            return Err(invalid(
                "theta_end",
                self.theta_end,
                "must differ from theta_start",
            ));
        }
        if self.num_points < MIN_SAMPLE_POINTS {
            return Err(invalid(
                "num_points",
                f64::from(self.num_points),
                "must be at least 2",
            ));
        }
        check_spiral_count(self.num_spirals)?;
        require_finite("pitch", self.pitch)?;
        require_finite("height_scale", self.height_scale)?;
        require_finite("ray_length", self.ray_length)?;
        if self.ray_length < 0.0 {
            return Err(invalid("ray_length", self.ray_length, "must not be negative"));
        }
        Ok(())
    }
}

/// Checks an arm count against the supported range.
pub(crate) fn check_spiral_count(count: u32) -> SpiralResult<()> {
    if (MIN_SPIRALS..=MAX_SPIRALS).contains(&count) {
        Ok(())
    } else {
        Err(SpiralError::InvalidSpiralCount {
            count,
            min: MIN_SPIRALS,
            max: MAX_SPIRALS,
        })
    }
}

fn require_finite(field: &'static str, value: f64) -> SpiralResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, value, "must be finite"))
    }
}

fn invalid(field: &'static str, value: f64, reason: &'static str) -> SpiralError {
    SpiralError::InvalidParameter {
        field,
        value,
        reason,
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// Builder for [`SpiralParams`]. Nothing is checked until [`build`](Self::build).
#[derive(Debug, Clone, Copy, Default)]
pub struct SpiralParamsBuilder {
    params: SpiralParams,
}

impl SpiralParamsBuilder {
    /// Sets the scale coefficient.
    pub fn a(mut self, a: f64) -> Self {
        self.params.a = a;
        self
    }

    /// Sets the growth rate.
    pub fn b(mut self, b: f64) -> Self {
        self.params.b = b;
        self
    }

    /// Sets the first sampled angle.
    pub fn theta_start(mut self, theta_start: f64) -> Self {
        self.params.theta_start = theta_start;
        self
    }

    /// Sets the last sampled angle.
    pub fn theta_end(mut self, theta_end: f64) -> Self {
        self.params.theta_end = theta_end;
        self
    }

    /// Sets the sampling resolution.
    pub fn num_points(mut self, num_points: u32) -> Self {
        self.params.num_points = num_points;
        self
    }

    /// Sets the arm count.
    pub fn num_spirals(mut self, num_spirals: u32) -> Self {
        self.params.num_spirals = num_spirals;
        self
    }

    /// Sets the helical pitch.
    pub fn pitch(mut self, pitch: f64) -> Self {
        self.params.pitch = pitch;
        self
    }

    /// Sets the helical height scale.
    pub fn height_scale(mut self, height_scale: f64) -> Self {
        self.params.height_scale = height_scale;
        self
    }

    /// Sets the structural ray length.
    pub fn ray_length(mut self, ray_length: f64) -> Self {
        self.params.ray_length = ray_length;
        self
    }

    /// Validates and freezes the record.
    pub fn build(self) -> SpiralResult<SpiralParams> {
        self.params.validate()?;
        Ok(self.params)
    }
}

// =============================================================================
// DESIGN TARGET
// =============================================================================

/// Physical design targets for the inverse solver.
///
/// Invariant: `width_root > width_tip > 0` and `length > 0`, all finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignTarget {
    width_root: f64,
    width_tip: f64,
    length: f64,
}

impl DesignTarget {
    /// Validates and creates a target.
    ///
    /// ```rust
    /// use spiral_geometry::DesignTarget;
    ///
    /// assert!(DesignTarget::new(10.0, 2.0, 15.0).is_ok());
    /// assert!(DesignTarget::new(2.0, 10.0, 15.0).is_err());
    /// ```
    pub fn new(width_root: f64, width_tip: f64, length: f64) -> SpiralResult<Self> {
        for (field, value) in [
            ("width_root", width_root),
            ("width_tip", width_tip),
            ("length", length),
        ] {
            if !value.is_finite() {
                return Err(target_error(field, value, "must be finite"));
            }
        }
        if width_tip <= 0.0 {
            return Err(target_error("width_tip", width_tip, "must be greater than zero"));
        }
        if width_root <= width_tip {
            return Err(target_error(
                "width_root",
                width_root,
                "must be greater than width_tip",
            ));
        }
        if length <= 0.0 {
            return Err(target_error("length", length, "must be greater than zero"));
        }
        Ok(Self {
            width_root,
            width_tip,
            length,
        })
    }

    /// Width of the finger at its root.
    pub fn width_root(&self) -> f64 {
        self.width_root
    }

    /// Width of the finger at its tip.
    pub fn width_tip(&self) -> f64 {
        self.width_tip
    }

    /// Arm length.
    pub fn length(&self) -> f64 {
        self.length
    }
}

fn target_error(field: &'static str, value: f64, reason: &'static str) -> SpiralError {
    SpiralError::InvalidTarget {
        field,
        value,
        reason,
    }
}

#[cfg(test)]
mod tests;

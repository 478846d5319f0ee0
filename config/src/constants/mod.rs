//! Centralized configuration values shared across the spiral profile solver.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::f64::consts::PI;
use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Absolute tolerance on the arm-length residual `|L(b) - length|` at which
/// bisection stops early.
///
/// Expressed in the natural length unit of the design target (millimetres in
/// the finger designer).
///
/// # Examples
/// ```
/// use config::constants::SOLVER_TOLERANCE;
/// assert!(SOLVER_TOLERANCE <= 1.0e-6);
/// ```
pub const SOLVER_TOLERANCE: f64 = 1.0e-6;

/// Magnitude below which a raw derivative vector is treated as degenerate and
/// cannot be normalized.
///
/// # Examples
/// ```
/// use config::constants::DEGENERATE_VECTOR_EPSILON;
/// let raw = 1.0e-15_f64;
/// assert!(raw < DEGENERATE_VECTOR_EPSILON);
/// ```
pub const DEGENERATE_VECTOR_EPSILON: f64 = 1.0e-12;

/// Tolerance for planar constructions such as reflecting a point across a
/// chord. Chords shorter than this (squared) leave the point unchanged.
///
/// # Examples
/// ```
/// use config::constants::GEOMETRY_EPSILON;
/// assert!(GEOMETRY_EPSILON > 0.0);
/// ```
pub const GEOMETRY_EPSILON: f64 = 1.0e-12;

// =============================================================================
// SOLVER CONSTANTS
// =============================================================================

/// Lower bound of the growth-rate search domain.
///
/// Spirals that wind slower than this are outside the solver's reach.
///
/// # Examples
/// ```
/// use config::constants::B_MIN;
/// assert!(B_MIN > 0.0);
/// ```
pub const B_MIN: f64 = 1.0e-6;

/// Upper bound of the growth-rate search domain.
///
/// `e^(2π·B_MAX)` is about `4.4e13`, comfortably inside `f64` range.
///
/// # Examples
/// ```
/// use config::constants::B_MAX;
/// assert!((2.0 * std::f64::consts::PI * B_MAX).exp().is_finite());
/// ```
pub const B_MAX: f64 = 5.0;

/// Hard cap on bisection refinements.
///
/// After 80 halvings the bracket `[B_MIN, B_MAX]` is narrower than `1e-23`.
///
/// # Examples
/// ```
/// use config::constants::MAX_BISECTION_ITERATIONS;
/// assert_eq!(MAX_BISECTION_ITERATIONS, 80);
/// ```
pub const MAX_BISECTION_ITERATIONS: u32 = 80;

/// Default angular offset θ0 of the tip cross-section, in radians.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_THETA_OFFSET;
/// assert_eq!(DEFAULT_THETA_OFFSET, 0.0);
/// ```
pub const DEFAULT_THETA_OFFSET: f64 = 0.0;

// =============================================================================
// SAMPLING LIMITS
// =============================================================================

/// Minimum number of samples on a curve (both endpoints).
///
/// # Examples
/// ```
/// use config::constants::MIN_SAMPLE_POINTS;
/// assert_eq!(MIN_SAMPLE_POINTS, 2);
/// ```
pub const MIN_SAMPLE_POINTS: u32 = 2;

/// Minimum number of arms in a symmetric layout.
pub const MIN_SPIRALS: u32 = 1;

/// Maximum number of arms in a symmetric layout.
///
/// # Examples
/// ```
/// use config::constants::{MIN_SPIRALS, MAX_SPIRALS};
/// let requested = 6;
/// assert!((MIN_SPIRALS..=MAX_SPIRALS).contains(&requested));
/// ```
pub const MAX_SPIRALS: u32 = 12;

// =============================================================================
// DEFAULT SPIRAL PARAMETERS
// =============================================================================

/// Default scale coefficient `a` (mm).
pub const DEFAULT_A: f64 = 4.95;

/// Default growth rate `b`. Together with [`DEFAULT_A`] this produces a finger
/// with a taper angle of about 10°.
pub const DEFAULT_B: f64 = 0.1764;

/// Default start angle (radians).
pub const DEFAULT_THETA_START: f64 = 0.0;

/// Default end angle: three full turns.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_THETA_END, DEFAULT_THETA_START};
/// let turns = (DEFAULT_THETA_END - DEFAULT_THETA_START) / std::f64::consts::TAU;
/// assert!((turns - 3.0).abs() < 1e-12);
/// ```
pub const DEFAULT_THETA_END: f64 = 6.0 * PI;

/// Default sampling resolution.
pub const DEFAULT_NUM_POINTS: u32 = 500;

/// Default number of arms.
pub const DEFAULT_NUM_SPIRALS: u32 = 1;

/// Default vertical rise per radian of the helical lift.
pub const DEFAULT_PITCH: f64 = 1.0;

/// Default scale of the helical z-axis.
pub const DEFAULT_HEIGHT_SCALE: f64 = 1.0;

/// Default length of the structural rays in the symmetric view.
pub const DEFAULT_RAY_LENGTH: f64 = 10.0;

// =============================================================================
// PROFILE CONSTANTS
// =============================================================================

/// Default angular width of one finger unit, in whole degrees.
pub const DEFAULT_UNIT_ANGLE_DEG: u32 = 30;

/// Smallest accepted unit angle, in whole degrees.
pub const MIN_UNIT_ANGLE_DEG: u32 = 1;

/// Default position of the central spiral between one turn and the next
/// (0 = on the outer spiral, 1 = one full turn further out).
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_CENTRAL_FRACTION;
/// assert!((0.0..=1.0).contains(&DEFAULT_CENTRAL_FRACTION));
/// ```
pub const DEFAULT_CENTRAL_FRACTION: f64 = 0.5;

/// Largest number of units a single profile may contain.
///
/// 1° units over the default range yield 720 units. Long arms solved with a
/// small growth rate can span thousands of turns; those are rejected instead
/// of allocated.
pub const MAX_PROFILE_UNITS: u32 = 10_000;

/// Default opening of the elastic layer, as a percentage of the half taper
/// angle.
pub const DEFAULT_ELASTIC_PERCENT: f64 = 5.0;

/// Largest accepted elastic-layer percentage.
pub const MAX_ELASTIC_PERCENT: f64 = 100.0;

/// Minimum length of the elastic-layer construction rays.
pub const MIN_ELASTIC_RAY_LENGTH: f64 = 10.0;

// =============================================================================
// SOLVER CONFIGURATION
// =============================================================================

/// Immutable snapshot of the inverse-solver settings.
///
/// Fields are private: every value reachable from outside went through
/// [`SolverConfig::new`] or is the documented default.
///
/// # Examples
/// ```
/// use config::constants::SolverConfig;
/// let config = SolverConfig::default();
/// assert!(config.tolerance() > 0.0);
/// assert!(config.b_max() > config.b_min());
/// ```
///
/// Unchecked struct literals do not compile:
///
/// ```compile_fail
/// use config::constants::SolverConfig;
/// let config = SolverConfig {
///     b_min: 1.0e-6,
///     b_max: 5.0,
///     tolerance: 1.0e-6,
///     max_iterations: 0,
///     theta_offset: 0.0,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    b_min: f64,
    b_max: f64,
    tolerance: f64,
    max_iterations: u32,
    theta_offset: f64,
}

impl SolverConfig {
    /// Builds a configuration enforcing strict validation of every field.
    ///
    /// # Examples
    /// ```
    /// use config::constants::SolverConfig;
    /// let cfg = SolverConfig::new(1.0e-4, 2.0, 1.0e-8, 60, 0.0).expect("valid config");
    /// assert_eq!(cfg.max_iterations(), 60);
    /// ```
    pub fn new(
        b_min: f64,
        b_max: f64,
        tolerance: f64,
        max_iterations: u32,
        theta_offset: f64,
    ) -> Result<Self, ConfigError> {
        if !(b_min.is_finite() && b_min > 0.0) {
            return Err(ConfigError::InvalidLowerBound(b_min));
        }
        if !(b_max.is_finite() && b_max > b_min) {
            return Err(ConfigError::InvalidUpperBound { b_min, b_max });
        }
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if max_iterations == 0 {
            return Err(ConfigError::InvalidIterations(max_iterations));
        }
        if !theta_offset.is_finite() {
            return Err(ConfigError::InvalidThetaOffset(theta_offset));
        }
        Ok(Self {
            b_min,
            b_max,
            tolerance,
            max_iterations,
            theta_offset,
        })
    }

    /// Returns a copy with a different tip-section offset θ0.
    ///
    /// # Examples
    /// ```
    /// use config::constants::SolverConfig;
    /// let cfg = SolverConfig::default().with_theta_offset(1.5).unwrap();
    /// assert_eq!(cfg.theta_offset(), 1.5);
    /// ```
    pub fn with_theta_offset(self, theta_offset: f64) -> Result<Self, ConfigError> {
        Self::new(
            self.b_min,
            self.b_max,
            self.tolerance,
            self.max_iterations,
            theta_offset,
        )
    }

    /// Lower bound of the growth-rate search domain.
    pub fn b_min(&self) -> f64 {
        self.b_min
    }

    /// Upper bound of the growth-rate search domain.
    pub fn b_max(&self) -> f64 {
        self.b_max
    }

    /// Absolute tolerance on the arm-length residual.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Maximum number of bisection refinements, at least 1.
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Angular offset θ0 at which the tip cross-section is measured.
    pub fn theta_offset(&self) -> f64 {
        self.theta_offset
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            b_min: B_MIN,
            b_max: B_MAX,
            tolerance: SOLVER_TOLERANCE,
            max_iterations: MAX_BISECTION_ITERATIONS,
            theta_offset: DEFAULT_THETA_OFFSET,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the lower search bound is not a positive finite number.
    InvalidLowerBound(f64),
    /// Raised when the upper search bound does not exceed the lower bound.
    InvalidUpperBound { b_min: f64, b_max: f64 },
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the iteration cap is zero.
    InvalidIterations(u32),
    /// Raised when the tip-section offset is not finite.
    InvalidThetaOffset(f64),
}

impl ConfigError {
    /// Name of the offending configuration field.
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::InvalidLowerBound(_) => "b_min",
            ConfigError::InvalidUpperBound { .. } => "b_max",
            ConfigError::InvalidTolerance(_) => "tolerance",
            ConfigError::InvalidIterations(_) => "max_iterations",
            ConfigError::InvalidThetaOffset(_) => "theta_offset",
        }
    }

    /// The rejected value, widened to `f64`.
    pub fn value(&self) -> f64 {
        match *self {
            ConfigError::InvalidLowerBound(value)
            | ConfigError::InvalidTolerance(value)
            | ConfigError::InvalidThetaOffset(value) => value,
            ConfigError::InvalidUpperBound { b_max, .. } => b_max,
            ConfigError::InvalidIterations(value) => f64::from(value),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidLowerBound(value) => {
                write!(f, "b_min must be positive and finite: {value}")
            }
            ConfigError::InvalidUpperBound { b_min, b_max } => {
                write!(f, "b_max must be finite and greater than b_min ({b_min}): {b_max}")
            }
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidIterations(value) => {
                write!(f, "max_iterations must be >= 1: {value}")
            }
            ConfigError::InvalidThetaOffset(value) => {
                write!(f, "theta_offset must be finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

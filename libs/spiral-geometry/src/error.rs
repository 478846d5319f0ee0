//! # Error Types
//!
//! Error types for spiral operations. Every failure is a local, recoverable
//! condition carrying the attempted value and the valid range so a caller can
//! display it and let the user retry.
//!
//! ## Error Policy
//!
//! - NO partial results: an operation yields a complete value or an error
//! - NO silent clamping of out-of-range input
//! - Errors include the offending value and what would have been accepted

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while sampling, solving, expanding or decoding
/// spirals.
///
/// ## Example
///
/// ```rust
/// use spiral_geometry::{solve, SpiralError};
///
/// match solve(10.0, 2.0, 3.0) {
///     Ok(params) => println!("b = {}", params.b()),
///     Err(SpiralError::UnreachableLength { min, max, .. }) => {
///         eprintln!("length must lie in [{min}, {max}]")
///     }
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpiralError {
    /// A tangent/normal frame was requested where the spiral radius is
    /// effectively zero, so the derivative cannot be normalized.
    #[error("degenerate derivative at theta = {theta}: radius {radius} is too close to zero")]
    DegenerateVector {
        /// Angle at which the frame was requested.
        theta: f64,
        /// Spiral radius at that angle.
        radius: f64,
    },

    /// No growth rate in the search domain produces the requested length.
    #[error("arm length {length} is unreachable: attainable lengths lie in [{min}, {max}]")]
    UnreachableLength {
        /// Requested arm length.
        length: f64,
        /// Shortest attainable arm length.
        min: f64,
        /// Longest attainable arm length.
        max: f64,
    },

    /// An exponential term overflowed `f64`.
    #[error("numeric overflow while evaluating {quantity} (input {input})")]
    NumericOverflow {
        /// Name of the quantity being evaluated.
        quantity: &'static str,
        /// Input value that triggered the overflow.
        input: f64,
    },

    /// The arm count lies outside the supported range.
    #[error("spiral count {count} is outside [{min}, {max}]")]
    InvalidSpiralCount {
        /// Requested number of arms.
        count: u32,
        /// Smallest supported count.
        min: u32,
        /// Largest supported count.
        max: u32,
    },

    /// A persisted record could not be decoded.
    #[error("malformed config at key '{key}': {reason}")]
    MalformedConfig {
        /// Key that failed to decode (empty for document-level failures).
        key: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A parameter record field violates its constraint.
    #[error("invalid parameter '{field}' = {value}: {reason}")]
    InvalidParameter {
        /// Field name.
        field: &'static str,
        /// Rejected value.
        value: f64,
        /// Constraint that was violated.
        reason: &'static str,
    },

    /// A design target violates `width_root > width_tip > 0, length > 0`.
    #[error("invalid design target '{field}' = {value}: {reason}")]
    InvalidTarget {
        /// Field name.
        field: &'static str,
        /// Rejected value.
        value: f64,
        /// Constraint that was violated.
        reason: &'static str,
    },
}

impl SpiralError {
    /// Creates a malformed-config error.
    pub fn malformed(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedConfig {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Creates a numeric-overflow error.
    pub fn overflow(quantity: &'static str, input: f64) -> Self {
        Self::NumericOverflow { quantity, input }
    }

    /// Short stable identifier of the variant, used by UI layers to pick a
    /// message template.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DegenerateVector { .. } => "degenerate_vector",
            Self::UnreachableLength { .. } => "unreachable_length",
            Self::NumericOverflow { .. } => "numeric_overflow",
            Self::InvalidSpiralCount { .. } => "invalid_spiral_count",
            Self::MalformedConfig { .. } => "malformed_config",
            Self::InvalidParameter { .. } => "invalid_parameter",
            Self::InvalidTarget { .. } => "invalid_target",
        }
    }
}

impl From<ConfigError> for SpiralError {
    fn from(err: ConfigError) -> Self {
        let reason = match err {
            ConfigError::InvalidLowerBound(_) => "must be positive and finite",
            ConfigError::InvalidUpperBound { .. } => "must be finite and greater than b_min",
            ConfigError::InvalidTolerance(_) => "must be positive and finite",
            ConfigError::InvalidIterations(_) => "must be at least 1",
            ConfigError::InvalidThetaOffset(_) => "must be finite",
        };
        Self::InvalidParameter {
            field: err.field(),
            value: err.value(),
            reason,
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for spiral operations.
pub type SpiralResult<T> = Result<T, SpiralError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages carry the offending values.
    #[test]
    fn test_error_display() {
        let err = SpiralError::UnreachableLength {
            length: 3.0,
            min: 4.0,
            max: 1.0e12,
        };
        let text = err.to_string();
        assert!(text.contains("unreachable"));
        assert!(text.contains('3'));

        let err = SpiralError::InvalidSpiralCount {
            count: 13,
            min: 1,
            max: 12,
        };
        assert!(err.to_string().contains("13"));
        assert!(err.to_string().contains("[1, 12]"));
    }

    /// Test error types are Send + Sync for concurrent callers.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SpiralError>();
    }

    #[test]
    fn test_config_error_converts_to_invalid_parameter() {
        let err: SpiralError = ConfigError::InvalidTolerance(-1.0).into();
        assert_eq!(
            err,
            SpiralError::InvalidParameter {
                field: "tolerance",
                value: -1.0,
                reason: "must be positive and finite",
            }
        );
    }

    #[test]
    fn test_codes_are_distinct() {
        let codes = [
            SpiralError::overflow("e^(2πb)", 300.0).code(),
            SpiralError::malformed("a", "missing").code(),
            SpiralError::DegenerateVector { theta: 0.0, radius: 0.0 }.code(),
        ];
        assert_eq!(codes, ["numeric_overflow", "malformed_config", "degenerate_vector"]);
    }
}

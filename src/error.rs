//! Error types for lineal operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for lineal operations.
///
/// Carries the detail needed to report dimension mismatches, unsupported
/// cross-product dimensions, and rejected Monte Carlo parameters.
///
/// # Examples
///
/// ```
/// use lineal::error::LinealError;
///
/// let err = LinealError::DimensionMismatch {
///     expected: "2x2".to_string(),
///     actual: "3x2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum LinealError {
    /// Operand sizes are incompatible for the requested operation.
    DimensionMismatch {
        /// Dimensions the operation needed
        expected: String,
        /// Dimensions it was given
        actual: String,
    },

    /// Cross product requested outside the 2D and 3D cases.
    UnsupportedDimension {
        /// Dimension of the left operand
        left: usize,
        /// Dimension of the right operand
        right: usize,
    },

    /// Monte Carlo configuration value outside its valid range.
    InvalidParameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },
}

impl fmt::Display for LinealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinealError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            LinealError::UnsupportedDimension { left, right } => {
                write!(
                    f,
                    "cross product is only defined for 2D or 3D vectors, got {left}D and {right}D"
                )
            }
            LinealError::InvalidParameter {
                param,
                value,
                constraint,
            } => {
                write!(f, "invalid parameter: {param} = {value}, expected {constraint}")
            }
        }
    }
}

impl std::error::Error for LinealError {}

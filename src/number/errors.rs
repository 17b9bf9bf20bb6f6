// ============================================================================
// Numeric Errors
// Failure types for conversion, literal parsing and constant folding
// ============================================================================

use super::kind::NumberKind;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a checked conversion could not produce a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConversionFailure {
    /// Source value is above the destination's highest value
    ExceedsPositiveLimit,
    /// Source value is below the destination's lowest value
    ExceedsNegativeLimit,
}

impl fmt::Display for ConversionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionFailure::ExceedsPositiveLimit => write!(f, "exceeds positive limit"),
            ConversionFailure::ExceedsNegativeLimit => write!(f, "exceeds negative limit"),
        }
    }
}

impl std::error::Error for ConversionFailure {}

/// Errors surfaced by literal parsing and constant folding.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericError {
    /// Token is not a well-formed numeric literal
    InvalidLiteral(String),
    /// Literal is well-formed but its value does not fit the literal's type
    LiteralOutOfRange { literal: String, kind: NumberKind },
    /// Folded expression result is not representable
    Overflow { expression: String, kind: NumberKind },
    /// Value conversion failed
    Conversion {
        value: String,
        kind: NumberKind,
        failure: ConversionFailure,
    },
    /// Integral division or remainder by zero
    DivisionByZero { kind: NumberKind },
    /// Binary operands are of different kinds
    KindMismatch { lhs: NumberKind, rhs: NumberKind },
    /// Operation is not defined for the kind
    UnsupportedOperation {
        operation: &'static str,
        kind: NumberKind,
    },
    /// An f16 value was used without the f16 extension enabled
    F16NotEnabled,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidLiteral(token) => {
                write!(f, "invalid numeric literal '{}'", token)
            }
            NumericError::LiteralOutOfRange { literal, kind } => {
                write!(f, "value {} cannot be represented as '{}'", literal, kind)
            }
            NumericError::Overflow { expression, kind } => {
                write!(f, "'{}' cannot be represented as '{}'", expression, kind)
            }
            NumericError::Conversion {
                value,
                kind,
                failure,
            } => write!(
                f,
                "value {} cannot be represented as '{}' ({})",
                value, kind, failure
            ),
            NumericError::DivisionByZero { kind } => {
                write!(f, "integer division by zero is invalid for '{}'", kind)
            }
            NumericError::KindMismatch { lhs, rhs } => write!(
                f,
                "no matching overload for operands of type '{}' and '{}'",
                lhs, rhs
            ),
            NumericError::UnsupportedOperation { operation, kind } => write!(
                f,
                "operation '{}' is not supported for type '{}'",
                operation, kind
            ),
            NumericError::F16NotEnabled => {
                write!(f, "f16 type used without 'f16' extension enabled")
            }
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for literal parsing and folding
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::Overflow {
                expression: "9223372036854775807 + 1".to_string(),
                kind: NumberKind::AbstractInt,
            }
            .to_string(),
            "'9223372036854775807 + 1' cannot be represented as 'abstract-int'"
        );
        assert_eq!(
            NumericError::LiteralOutOfRange {
                literal: "3000000000i".to_string(),
                kind: NumberKind::I32,
            }
            .to_string(),
            "value 3000000000i cannot be represented as 'i32'"
        );
        assert_eq!(
            NumericError::DivisionByZero {
                kind: NumberKind::U32
            }
            .to_string(),
            "integer division by zero is invalid for 'u32'"
        );
        assert_eq!(
            NumericError::F16NotEnabled.to_string(),
            "f16 type used without 'f16' extension enabled"
        );
    }

    #[test]
    fn test_conversion_failure_display() {
        assert_eq!(
            ConversionFailure::ExceedsPositiveLimit.to_string(),
            "exceeds positive limit"
        );
        assert_eq!(
            NumericError::Conversion {
                value: "300".to_string(),
                kind: NumberKind::I8,
                failure: ConversionFailure::ExceedsPositiveLimit,
            }
            .to_string(),
            "value 300 cannot be represented as 'i8' (exceeds positive limit)"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::F16NotEnabled, NumericError::F16NotEnabled);
        assert_ne!(
            ConversionFailure::ExceedsPositiveLimit,
            ConversionFailure::ExceedsNegativeLimit
        );
    }
}

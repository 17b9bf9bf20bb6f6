// ============================================================================
// Constant Folder
// Evaluates constant expressions over scalars and reports WGSL diagnostics
// ============================================================================

use super::config::FoldConfig;
use crate::literal::parse_literal;
use crate::number::{NumberKind, NumericError, NumericResult};
use crate::scalar::{BinaryOp, Scalar, UnaryOp};

/// Folds constant expressions.
///
/// Every operation either produces a representable value or an error naming
/// the expression and result type, matching what a WGSL front-end reports
/// for a const-expression that overflows.
///
/// # Example
/// ```
/// use wgsl_numeric::fold::{ConstantFolder, FoldConfig};
/// use wgsl_numeric::scalar::BinaryOp;
///
/// let folder = ConstantFolder::new(FoldConfig::strict());
/// let max = folder.literal("2147483647i").unwrap();
/// let one = folder.literal("1i").unwrap();
///
/// let err = folder.fold_binary(BinaryOp::Add, max, one).unwrap_err();
/// assert_eq!(err.to_string(), "'2147483647i + 1i' cannot be represented as 'i32'");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantFolder {
    config: FoldConfig,
}

impl ConstantFolder {
    pub fn new(config: FoldConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FoldConfig {
        &self.config
    }

    /// Parse a literal token, rejecting f16 literals unless enabled.
    pub fn literal(&self, token: &str) -> NumericResult<Scalar> {
        let value = parse_literal(token)?;
        self.check_kind(value.kind())?;
        tracing::trace!("Parsed literal {} as {}", token, value.kind());
        Ok(value)
    }

    /// Fold `lhs op rhs`. Both operands must be of the same kind.
    pub fn fold_binary(&self, op: BinaryOp, lhs: Scalar, rhs: Scalar) -> NumericResult<Scalar> {
        let kind = self.check_operands(lhs, rhs)?;

        if kind.is_integral() {
            if op == BinaryOp::Power {
                return Err(NumericError::UnsupportedOperation {
                    operation: op.symbol(),
                    kind,
                });
            }
            if matches!(op, BinaryOp::Divide | BinaryOp::Modulo) && rhs.is_zero() {
                tracing::debug!("Division by zero folding {} {} {}", lhs, op, rhs);
                return Err(NumericError::DivisionByZero { kind });
            }
        }

        match lhs.checked_binary(op, &rhs) {
            Some(result) => {
                tracing::trace!("Folded {} {} {} = {}", lhs, op, rhs, result);
                Ok(result)
            }
            None => Err(overflow(binary_expression(op, lhs, rhs), kind)),
        }
    }

    /// Fold `op value`.
    pub fn fold_unary(&self, op: UnaryOp, value: Scalar) -> NumericResult<Scalar> {
        let kind = value.kind();
        self.check_kind(kind)?;

        match value.checked_unary(op) {
            Some(result) => {
                tracing::trace!("Folded {}({}) = {}", op, value, result);
                Ok(result)
            }
            None => Err(overflow(format!("{}({})", op, value), kind)),
        }
    }

    /// Fold `a * b + c`. The product must itself be representable.
    pub fn fold_madd(&self, a: Scalar, b: Scalar, c: Scalar) -> NumericResult<Scalar> {
        let kind = self.check_operands(a, b)?;
        self.check_operands(a, c)?;

        let result = a
            .checked_binary(BinaryOp::Multiply, &b)
            .and_then(|product| product.checked_binary(BinaryOp::Add, &c));

        match result {
            Some(result) => {
                tracing::trace!("Folded {} * {} + {} = {}", a, b, c, result);
                Ok(result)
            }
            None => Err(overflow(format!("{} * {} + {}", a, b, c), kind)),
        }
    }

    /// Convert `value` to `kind` with WGSL conversion rules.
    pub fn convert(&self, value: Scalar, kind: NumberKind) -> NumericResult<Scalar> {
        self.check_kind(value.kind())?;
        self.check_kind(kind)?;

        match value.convert(kind) {
            Ok(result) => {
                tracing::trace!("Converted {} to {} = {}", value, kind, result);
                Ok(result)
            }
            Err(failure) => {
                tracing::debug!("Conversion of {} to {} failed: {}", value, kind, failure);
                Err(NumericError::Conversion {
                    value: value.to_string(),
                    kind,
                    failure,
                })
            }
        }
    }

    // ========================================================================
    // Operand checks
    // ========================================================================

    fn check_kind(&self, kind: NumberKind) -> NumericResult<()> {
        if kind == NumberKind::F16 && !self.config.f16_enabled {
            tracing::debug!("Rejected f16 operand: extension not enabled");
            return Err(NumericError::F16NotEnabled);
        }
        Ok(())
    }

    fn check_operands(&self, lhs: Scalar, rhs: Scalar) -> NumericResult<NumberKind> {
        let (l, r) = (lhs.kind(), rhs.kind());
        if l != r {
            tracing::debug!("Operand kind mismatch: {} and {}", l, r);
            return Err(NumericError::KindMismatch { lhs: l, rhs: r });
        }
        self.check_kind(l)?;
        Ok(l)
    }
}

fn binary_expression(op: BinaryOp, lhs: Scalar, rhs: Scalar) -> String {
    match op {
        BinaryOp::Power => format!("pow({}, {})", lhs, rhs),
        _ => format!("{} {} {}", lhs, op, rhs),
    }
}

fn overflow(expression: String, kind: NumberKind) -> NumericError {
    tracing::debug!("Constant expression overflow: '{}' as {}", expression, kind);
    NumericError::Overflow { expression, kind }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::{AFloat, AInt, ConversionFailure, F16, F32, I32, I8, U32};

    fn strict() -> ConstantFolder {
        ConstantFolder::new(FoldConfig::strict())
    }

    fn with_f16() -> ConstantFolder {
        ConstantFolder::new(FoldConfig::with_f16())
    }

    #[test]
    fn test_fold_binary_success() {
        let folder = strict();
        let r = folder
            .fold_binary(BinaryOp::Subtract, I32::new(5).into(), I32::new(7).into())
            .unwrap();
        assert_eq!(r, Scalar::I32(I32::new(-2)));

        let r = folder
            .fold_binary(BinaryOp::Modulo, AFloat::new(-7.5).into(), AFloat::new(2.0).into())
            .unwrap();
        assert_eq!(r, Scalar::AbstractFloat(AFloat::new(-1.5)));
    }

    #[test]
    fn test_abstract_int_overflow_message() {
        let err = strict()
            .fold_binary(BinaryOp::Add, AInt::new(i64::MAX).into(), AInt::new(1).into())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "'9223372036854775807 + 1' cannot be represented as 'abstract-int'"
        );
    }

    #[test]
    fn test_float_overflow() {
        let err = strict()
            .fold_binary(BinaryOp::Multiply, F32::new(f32::MAX).into(), F32::new(2.0).into())
            .unwrap_err();
        assert!(matches!(
            err,
            NumericError::Overflow {
                kind: NumberKind::F32,
                ..
            }
        ));
    }

    #[test]
    fn test_pow() {
        let folder = strict();
        let r = folder
            .fold_binary(BinaryOp::Power, F32::new(2.0).into(), F32::new(10.0).into())
            .unwrap();
        assert_eq!(r, Scalar::F32(F32::new(1024.0)));

        let err = folder
            .fold_binary(BinaryOp::Power, F32::new(-2.0).into(), F32::new(2.0).into())
            .unwrap_err();
        assert_eq!(err.to_string(), "'pow(-2.0f, 2.0f)' cannot be represented as 'f32'");

        let err = folder
            .fold_binary(BinaryOp::Power, I32::new(2).into(), I32::new(2).into())
            .unwrap_err();
        assert_eq!(
            err,
            NumericError::UnsupportedOperation {
                operation: "pow",
                kind: NumberKind::I32
            }
        );
    }

    #[test]
    fn test_integer_division_by_zero() {
        let folder = strict();
        for op in [BinaryOp::Divide, BinaryOp::Modulo] {
            let err = folder
                .fold_binary(op, U32::new(1).into(), U32::new(0).into())
                .unwrap_err();
            assert_eq!(
                err,
                NumericError::DivisionByZero {
                    kind: NumberKind::U32
                }
            );
        }
        // i32::MIN / -1 is an overflow, not a division by zero
        let err = folder
            .fold_binary(BinaryOp::Divide, I32::new(i32::MIN).into(), I32::new(-1).into())
            .unwrap_err();
        assert!(matches!(err, NumericError::Overflow { .. }));
    }

    #[test]
    fn test_kind_mismatch() {
        let err = strict()
            .fold_binary(BinaryOp::Add, I32::new(1).into(), U32::new(1).into())
            .unwrap_err();
        assert_eq!(
            err,
            NumericError::KindMismatch {
                lhs: NumberKind::I32,
                rhs: NumberKind::U32
            }
        );
    }

    #[test]
    fn test_unary_negate() {
        let folder = strict();
        let err = folder
            .fold_unary(UnaryOp::Negate, I32::new(i32::MIN).into())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "'-(-2147483648i)' cannot be represented as 'i32'"
        );
        let r = folder
            .fold_unary(UnaryOp::Negate, F32::new(0.0).into())
            .unwrap();
        let Scalar::F32(f) = r else {
            panic!("expected f32");
        };
        assert!(f.value().is_sign_negative());
    }

    #[test]
    fn test_madd_short_circuits_on_product() {
        let folder = strict();
        let r = folder
            .fold_madd(I8::new(10).into(), I8::new(12).into(), I8::new(7).into())
            .unwrap();
        assert_eq!(r, Scalar::I8(I8::new(127)));

        // 20 * 10 overflows i8 even though 20 * 10 - 100 would fit
        let err = folder
            .fold_madd(I8::new(20).into(), I8::new(10).into(), I8::new(-100).into())
            .unwrap_err();
        assert_eq!(err.to_string(), "'20 * 10 + -100' cannot be represented as 'i8'");
    }

    #[test]
    fn test_convert() {
        let folder = strict();
        let r = folder
            .convert(F32::new(2147483648.0).into(), NumberKind::I32)
            .unwrap();
        assert_eq!(r, Scalar::I32(I32::new(0x7FFF_FF80)));

        let err = folder
            .convert(AInt::new(300).into(), NumberKind::I8)
            .unwrap_err();
        assert_eq!(
            err,
            NumericError::Conversion {
                value: "300".to_string(),
                kind: NumberKind::I8,
                failure: ConversionFailure::ExceedsPositiveLimit,
            }
        );
    }

    #[test]
    fn test_f16_requires_extension() {
        let folder = strict();
        assert_eq!(folder.literal("1h"), Err(NumericError::F16NotEnabled));
        assert_eq!(
            folder.convert(AFloat::new(1.0).into(), NumberKind::F16),
            Err(NumericError::F16NotEnabled)
        );
        assert_eq!(
            folder.fold_unary(UnaryOp::Negate, F16::new(1.0).into()),
            Err(NumericError::F16NotEnabled)
        );

        let folder = with_f16();
        let a = folder.literal("60000h").unwrap();
        let b = folder.literal("10000h").unwrap();
        let err = folder.fold_binary(BinaryOp::Add, a, b).unwrap_err();
        assert!(matches!(
            err,
            NumericError::Overflow {
                kind: NumberKind::F16,
                ..
            }
        ));
        assert_eq!(
            folder.convert(AFloat::new(1.0009).into(), NumberKind::F16),
            Ok(Scalar::F16(F16::new(1.0)))
        );
    }

    #[test]
    fn test_literal_errors_pass_through() {
        assert_eq!(
            strict().literal("3000000000i"),
            Err(NumericError::LiteralOutOfRange {
                literal: "3000000000i".to_string(),
                kind: NumberKind::I32,
            })
        );
    }
}

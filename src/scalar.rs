// ============================================================================
// Scalar Values
// Tagged union over every numeric kind, with kind-dispatched operations
// ============================================================================

use crate::number::{
    checked_add, checked_convert, checked_div, checked_mod, checked_mul, checked_neg,
    checked_pow, checked_sub, AFloat, AInt, CheckedArithmetic, CheckedPow, ConversionFailure,
    Half, Native, Number, NumberKind, Numeric, F16, F32, I32, I8, U32, U64, U8,
};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single value of any numeric kind.
///
/// This is the form values take once their kind is only known at runtime,
/// e.g. after parsing a literal. Operations dispatch on the tag to the typed
/// [`Number`] functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    AbstractInt(AInt),
    AbstractFloat(AFloat),
    I8(I8),
    U8(U8),
    I32(I32),
    U32(U32),
    U64(U64),
    F16(F16),
    F32(F32),
}

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    /// Floating kinds only
    Power,
}

impl BinaryOp {
    /// Operator token as written in WGSL. `Power` has no operator and is
    /// spelled as the builtin name.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulo => "%",
            BinaryOp::Power => "pow",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOp {
    Negate,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Negate => f.write_str("-"),
        }
    }
}

/// Run `$body` with `$n` bound to the wrapped number, whatever its kind.
macro_rules! with_number {
    ($scalar:expr, $n:ident => $body:expr) => {
        match $scalar {
            Scalar::AbstractInt($n) => $body,
            Scalar::AbstractFloat($n) => $body,
            Scalar::I8($n) => $body,
            Scalar::U8($n) => $body,
            Scalar::I32($n) => $body,
            Scalar::U32($n) => $body,
            Scalar::U64($n) => $body,
            Scalar::F16($n) => $body,
            Scalar::F32($n) => $body,
        }
    };
}

/// Wrap a typed number back into its `Scalar` variant.
pub trait IntoScalar: Numeric {
    fn into_scalar(value: Number<Self>) -> Scalar;
}

macro_rules! into_scalar {
    ($($t:ty => $variant:ident),+ $(,)?) => {
        $(
            impl IntoScalar for $t {
                #[inline]
                fn into_scalar(value: Number<$t>) -> Scalar {
                    Scalar::$variant(value)
                }
            }

            impl From<Number<$t>> for Scalar {
                #[inline]
                fn from(value: Number<$t>) -> Self {
                    Scalar::$variant(value)
                }
            }
        )+
    };
}

into_scalar! {
    i64 => AbstractInt,
    f64 => AbstractFloat,
    i8 => I8,
    u8 => U8,
    i32 => I32,
    u32 => U32,
    u64 => U64,
    Half => F16,
    f32 => F32,
}

impl Scalar {
    pub fn kind(&self) -> NumberKind {
        match self {
            Scalar::AbstractInt(_) => NumberKind::AbstractInt,
            Scalar::AbstractFloat(_) => NumberKind::AbstractFloat,
            Scalar::I8(_) => NumberKind::I8,
            Scalar::U8(_) => NumberKind::U8,
            Scalar::I32(_) => NumberKind::I32,
            Scalar::U32(_) => NumberKind::U32,
            Scalar::U64(_) => NumberKind::U64,
            Scalar::F16(_) => NumberKind::F16,
            Scalar::F32(_) => NumberKind::F32,
        }
    }

    pub fn to_native(&self) -> Native {
        with_number!(*self, n => n.to_native())
    }

    /// True for zero, including `-0.0`.
    pub fn is_zero(&self) -> bool {
        with_number!(*self, n => n.is_zero())
    }

    /// The zero value of `kind`.
    pub fn zero(kind: NumberKind) -> Scalar {
        match kind {
            NumberKind::AbstractInt => Scalar::AbstractInt(AInt::default()),
            NumberKind::AbstractFloat => Scalar::AbstractFloat(AFloat::default()),
            NumberKind::I8 => Scalar::I8(I8::default()),
            NumberKind::U8 => Scalar::U8(U8::default()),
            NumberKind::I32 => Scalar::I32(I32::default()),
            NumberKind::U32 => Scalar::U32(U32::default()),
            NumberKind::U64 => Scalar::U64(U64::default()),
            NumberKind::F16 => Scalar::F16(F16::default()),
            NumberKind::F32 => Scalar::F32(F32::default()),
        }
    }

    /// Range-checked conversion to `kind`, see
    /// [`checked_convert`](crate::number::checked_convert).
    pub fn convert(&self, kind: NumberKind) -> Result<Scalar, ConversionFailure> {
        with_number!(*self, n => convert_number(n, kind))
    }

    /// Apply `op` to two scalars of the same kind.
    ///
    /// Returns `None` when the result is not representable, when the kinds
    /// differ, or when `op` is `Power` on an integral kind. Callers that need
    /// to tell these apart check the kinds first.
    pub fn checked_binary(&self, op: BinaryOp, rhs: &Scalar) -> Option<Scalar> {
        match (*self, *rhs) {
            (Scalar::AbstractInt(a), Scalar::AbstractInt(b)) => arithmetic_binary(op, a, b),
            (Scalar::AbstractFloat(a), Scalar::AbstractFloat(b)) => float_binary(op, a, b),
            (Scalar::I8(a), Scalar::I8(b)) => arithmetic_binary(op, a, b),
            (Scalar::U8(a), Scalar::U8(b)) => arithmetic_binary(op, a, b),
            (Scalar::I32(a), Scalar::I32(b)) => arithmetic_binary(op, a, b),
            (Scalar::U32(a), Scalar::U32(b)) => arithmetic_binary(op, a, b),
            (Scalar::U64(a), Scalar::U64(b)) => arithmetic_binary(op, a, b),
            (Scalar::F16(a), Scalar::F16(b)) => float_binary(op, a, b),
            (Scalar::F32(a), Scalar::F32(b)) => float_binary(op, a, b),
            _ => None,
        }
    }

    /// Apply `op` to a scalar. `None` when the result is not representable.
    pub fn checked_unary(&self, op: UnaryOp) -> Option<Scalar> {
        match op {
            UnaryOp::Negate => match *self {
                Scalar::AbstractInt(n) => negate(n),
                Scalar::AbstractFloat(n) => negate(n),
                Scalar::I8(n) => negate(n),
                Scalar::U8(n) => negate(n),
                Scalar::I32(n) => negate(n),
                Scalar::U32(n) => negate(n),
                Scalar::U64(n) => negate(n),
                Scalar::F16(n) => negate(n),
                Scalar::F32(n) => negate(n),
            },
        }
    }
}

fn convert_number<F: Numeric>(n: Number<F>, kind: NumberKind) -> Result<Scalar, ConversionFailure> {
    fn to<T: IntoScalar, F: Numeric>(n: Number<F>) -> Result<Scalar, ConversionFailure> {
        checked_convert::<T, F>(n).map(T::into_scalar)
    }

    match kind {
        NumberKind::AbstractInt => to::<i64, F>(n),
        NumberKind::AbstractFloat => to::<f64, F>(n),
        NumberKind::I8 => to::<i8, F>(n),
        NumberKind::U8 => to::<u8, F>(n),
        NumberKind::I32 => to::<i32, F>(n),
        NumberKind::U32 => to::<u32, F>(n),
        NumberKind::U64 => to::<u64, F>(n),
        NumberKind::F16 => to::<Half, F>(n),
        NumberKind::F32 => to::<f32, F>(n),
    }
}

fn arithmetic_binary<T>(op: BinaryOp, a: Number<T>, b: Number<T>) -> Option<Scalar>
where
    T: CheckedArithmetic + IntoScalar,
{
    let result = match op {
        BinaryOp::Add => checked_add(a, b),
        BinaryOp::Subtract => checked_sub(a, b),
        BinaryOp::Multiply => checked_mul(a, b),
        BinaryOp::Divide => checked_div(a, b),
        BinaryOp::Modulo => checked_mod(a, b),
        BinaryOp::Power => None,
    };
    result.map(T::into_scalar)
}

fn float_binary<T>(op: BinaryOp, a: Number<T>, b: Number<T>) -> Option<Scalar>
where
    T: CheckedPow + IntoScalar,
{
    match op {
        BinaryOp::Power => checked_pow(a, b).map(T::into_scalar),
        _ => arithmetic_binary(op, a, b),
    }
}

fn negate<T: CheckedArithmetic + IntoScalar>(n: Number<T>) -> Option<Scalar> {
    checked_neg(n).map(T::into_scalar)
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        with_number!(*self, n => fmt::Display::fmt(&n, f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(Scalar::from(AInt::new(1)).kind(), NumberKind::AbstractInt);
        assert_eq!(Scalar::from(F16::new(1.0)).kind(), NumberKind::F16);
        for kind in NumberKind::ALL {
            let zero = Scalar::zero(kind);
            assert_eq!(zero.kind(), kind);
            assert!(zero.is_zero());
        }
    }

    #[test]
    fn test_convert_dispatches_to_checked_convert() {
        let v = Scalar::from(AInt::new(300));
        assert_eq!(v.convert(NumberKind::I8), Err(ConversionFailure::ExceedsPositiveLimit));
        assert_eq!(v.convert(NumberKind::U32), Ok(Scalar::U32(U32::new(300))));
        assert_eq!(v.convert(NumberKind::F16), Ok(Scalar::F16(F16::new(300.0))));

        let f = Scalar::from(F32::new(2147483648.0));
        assert_eq!(f.convert(NumberKind::I32), Ok(Scalar::I32(I32::new(0x7FFF_FF80))));
    }

    #[test]
    fn test_binary_same_kind() {
        let a = Scalar::from(I32::new(6));
        let b = Scalar::from(I32::new(7));
        assert_eq!(a.checked_binary(BinaryOp::Multiply, &b), Some(Scalar::I32(I32::new(42))));
        assert_eq!(
            Scalar::from(I32::new(i32::MAX)).checked_binary(BinaryOp::Add, &Scalar::from(I32::new(1))),
            None
        );
        let x = Scalar::from(AFloat::new(2.0));
        let y = Scalar::from(AFloat::new(3.0));
        assert_eq!(x.checked_binary(BinaryOp::Power, &y), Some(Scalar::AbstractFloat(AFloat::new(8.0))));
    }

    #[test]
    fn test_binary_rejects_mismatch_and_integral_pow() {
        let a = Scalar::from(I32::new(1));
        let b = Scalar::from(U32::new(1));
        assert_eq!(a.checked_binary(BinaryOp::Add, &b), None);
        assert_eq!(a.checked_binary(BinaryOp::Power, &a), None);
    }

    #[test]
    fn test_unary_negate() {
        assert_eq!(
            Scalar::from(AInt::new(i64::MIN)).checked_unary(UnaryOp::Negate),
            None
        );
        assert_eq!(
            Scalar::from(F16::new(1.5)).checked_unary(UnaryOp::Negate),
            Some(Scalar::F16(F16::new(-1.5)))
        );
        assert_eq!(Scalar::from(U32::new(3)).checked_unary(UnaryOp::Negate), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Scalar::from(I32::new(-4)).to_string(), "-4i");
        assert_eq!(Scalar::from(F16::new(0.25)).to_string(), "0.25h");
        assert_eq!(BinaryOp::Modulo.to_string(), "%");
        assert_eq!(UnaryOp::Negate.to_string(), "-");
    }
}

// ============================================================================
// Checked Arithmetic
// Overflow-detecting operations with WGSL constant-expression semantics
// ============================================================================
//
// Integral kinds fail on overflow, on a zero divisor and on LOWEST / -1.
// Floating kinds compute the IEEE result and fail when it is not finite, so
// overflow to infinity is reported rather than produced. No payload is carried
// on failure: the caller knows the operation and operands.

use super::value::{Half, Number, Numeric};

/// Kinds that support checked add/sub/mul/div/mod/neg.
pub trait CheckedArithmetic: Numeric {
    fn checked_add(a: Self::Repr, b: Self::Repr) -> Option<Self::Repr>;
    fn checked_sub(a: Self::Repr, b: Self::Repr) -> Option<Self::Repr>;
    fn checked_mul(a: Self::Repr, b: Self::Repr) -> Option<Self::Repr>;
    fn checked_div(a: Self::Repr, b: Self::Repr) -> Option<Self::Repr>;
    /// Truncating remainder: the result takes the sign of `a`.
    fn checked_mod(a: Self::Repr, b: Self::Repr) -> Option<Self::Repr>;
    fn checked_neg(a: Self::Repr) -> Option<Self::Repr>;
}

/// Floating kinds additionally support checked `pow`.
pub trait CheckedPow: CheckedArithmetic {
    fn checked_pow(base: Self::Repr, exponent: Self::Repr) -> Option<Self::Repr>;
}

// ============================================================================
// Abstract-Int Overflow Strategy
// ============================================================================

/// Explicit pre-check overflow detection for `i64`, for targets where the
/// overflow-detecting primitives are not wanted.
#[cfg_attr(not(feature = "portable-overflow"), allow(dead_code))]
pub(crate) mod portable {
    const HIGHEST: i64 = i64::MAX;
    const LOWEST: i64 = i64::MIN;

    pub fn add(a: i64, b: i64) -> Option<i64> {
        if a >= 0 {
            if b > HIGHEST - a {
                return None;
            }
        } else if b < LOWEST - a {
            return None;
        }
        Some(a + b)
    }

    pub fn sub(a: i64, b: i64) -> Option<i64> {
        if b >= 0 {
            if a < LOWEST + b {
                return None;
            }
        } else if a > HIGHEST + b {
            return None;
        }
        Some(a - b)
    }

    pub fn mul(a: i64, b: i64) -> Option<i64> {
        if a > 0 {
            if b > 0 {
                if a > HIGHEST / b {
                    return None;
                }
            } else if b < LOWEST / a {
                return None;
            }
        } else if b > 0 {
            if a < LOWEST / b {
                return None;
            }
        } else if a != 0 && b < HIGHEST / a {
            return None;
        }
        Some(a * b)
    }

    pub fn div(a: i64, b: i64) -> Option<i64> {
        if b == 0 || (a == LOWEST && b == -1) {
            return None;
        }
        Some(a / b)
    }

    pub fn rem(a: i64, b: i64) -> Option<i64> {
        if b == 0 || (a == LOWEST && b == -1) {
            return None;
        }
        Some(a % b)
    }

    pub fn neg(a: i64) -> Option<i64> {
        if a == LOWEST {
            return None;
        }
        Some(-a)
    }
}

#[cfg(not(feature = "portable-overflow"))]
mod abstract_int {
    #[inline]
    pub fn add(a: i64, b: i64) -> Option<i64> {
        a.checked_add(b)
    }
    #[inline]
    pub fn sub(a: i64, b: i64) -> Option<i64> {
        a.checked_sub(b)
    }
    #[inline]
    pub fn mul(a: i64, b: i64) -> Option<i64> {
        a.checked_mul(b)
    }
    #[inline]
    pub fn div(a: i64, b: i64) -> Option<i64> {
        a.checked_div(b)
    }
    #[inline]
    pub fn rem(a: i64, b: i64) -> Option<i64> {
        a.checked_rem(b)
    }
    #[inline]
    pub fn neg(a: i64) -> Option<i64> {
        a.checked_neg()
    }
}

#[cfg(feature = "portable-overflow")]
use portable as abstract_int;

impl CheckedArithmetic for i64 {
    #[inline]
    fn checked_add(a: i64, b: i64) -> Option<i64> {
        abstract_int::add(a, b)
    }
    #[inline]
    fn checked_sub(a: i64, b: i64) -> Option<i64> {
        abstract_int::sub(a, b)
    }
    #[inline]
    fn checked_mul(a: i64, b: i64) -> Option<i64> {
        abstract_int::mul(a, b)
    }
    #[inline]
    fn checked_div(a: i64, b: i64) -> Option<i64> {
        abstract_int::div(a, b)
    }
    #[inline]
    fn checked_mod(a: i64, b: i64) -> Option<i64> {
        abstract_int::rem(a, b)
    }
    #[inline]
    fn checked_neg(a: i64) -> Option<i64> {
        abstract_int::neg(a)
    }
}

// ============================================================================
// Concrete Integral Kinds
// ============================================================================

macro_rules! integral_checked {
    ($($t:ty),+) => {
        $(
            impl CheckedArithmetic for $t {
                #[inline]
                fn checked_add(a: $t, b: $t) -> Option<$t> {
                    a.checked_add(b)
                }
                #[inline]
                fn checked_sub(a: $t, b: $t) -> Option<$t> {
                    a.checked_sub(b)
                }
                #[inline]
                fn checked_mul(a: $t, b: $t) -> Option<$t> {
                    a.checked_mul(b)
                }
                #[inline]
                fn checked_div(a: $t, b: $t) -> Option<$t> {
                    a.checked_div(b)
                }
                #[inline]
                fn checked_mod(a: $t, b: $t) -> Option<$t> {
                    a.checked_rem(b)
                }
                #[inline]
                fn checked_neg(a: $t) -> Option<$t> {
                    a.checked_neg()
                }
            }
        )+
    };
}

integral_checked!(i8, u8, i32, u32, u64);

// ============================================================================
// Floating Kinds
// ============================================================================

/// Floating results are normalized (quantized for f16) before the finiteness
/// check, so an f16 sum above 65504 fails even though it fits in f32.
macro_rules! float_checked {
    ($($t:ty),+) => {
        $(
            impl CheckedArithmetic for $t {
                #[inline]
                fn checked_add(a: Self::Repr, b: Self::Repr) -> Option<Self::Repr> {
                    finite::<$t>(a + b)
                }
                #[inline]
                fn checked_sub(a: Self::Repr, b: Self::Repr) -> Option<Self::Repr> {
                    finite::<$t>(a - b)
                }
                #[inline]
                fn checked_mul(a: Self::Repr, b: Self::Repr) -> Option<Self::Repr> {
                    finite::<$t>(a * b)
                }
                #[inline]
                fn checked_div(a: Self::Repr, b: Self::Repr) -> Option<Self::Repr> {
                    if b == 0.0 {
                        return None;
                    }
                    finite::<$t>(a / b)
                }
                #[inline]
                fn checked_mod(a: Self::Repr, b: Self::Repr) -> Option<Self::Repr> {
                    if b == 0.0 {
                        return None;
                    }
                    finite::<$t>(a - b * (a / b).trunc())
                }
                #[inline]
                fn checked_neg(a: Self::Repr) -> Option<Self::Repr> {
                    Some(<$t as Numeric>::negate(a))
                }
            }

            impl CheckedPow for $t {
                fn checked_pow(base: Self::Repr, exponent: Self::Repr) -> Option<Self::Repr> {
                    // Negative bases would produce complex results
                    if base < 0.0 {
                        return None;
                    }
                    // 0^0 and negative powers of zero are undefined
                    if base == 0.0 && exponent <= 0.0 {
                        return None;
                    }
                    finite::<$t>(base.powf(exponent))
                }
            }
        )+
    };
}

float_checked!(f64, f32, Half);

#[inline]
fn finite<T>(value: T::Repr) -> Option<T::Repr>
where
    T: Numeric,
    T::Repr: FloatRepr,
{
    let value = T::normalize(value);
    value.is_finite_value().then_some(value)
}

/// Float storage types, for the finiteness check shared by all floating kinds.
trait FloatRepr: Copy {
    fn is_finite_value(self) -> bool;
}

impl FloatRepr for f32 {
    #[inline]
    fn is_finite_value(self) -> bool {
        self.is_finite()
    }
}

impl FloatRepr for f64 {
    #[inline]
    fn is_finite_value(self) -> bool {
        self.is_finite()
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// `a + b`, or `None` on overflow.
#[inline]
pub fn checked_add<T: CheckedArithmetic>(a: Number<T>, b: Number<T>) -> Option<Number<T>> {
    T::checked_add(a.value(), b.value()).map(Number::from_raw)
}

/// `a - b`, or `None` on overflow.
#[inline]
pub fn checked_sub<T: CheckedArithmetic>(a: Number<T>, b: Number<T>) -> Option<Number<T>> {
    T::checked_sub(a.value(), b.value()).map(Number::from_raw)
}

/// `a * b`, or `None` on overflow.
#[inline]
pub fn checked_mul<T: CheckedArithmetic>(a: Number<T>, b: Number<T>) -> Option<Number<T>> {
    T::checked_mul(a.value(), b.value()).map(Number::from_raw)
}

/// `a / b`, or `None` on overflow or a zero divisor (including `-0.0`).
#[inline]
pub fn checked_div<T: CheckedArithmetic>(a: Number<T>, b: Number<T>) -> Option<Number<T>> {
    T::checked_div(a.value(), b.value()).map(Number::from_raw)
}

/// Truncating remainder `a - b * trunc(a / b)`, or `None` on overflow or a
/// zero divisor.
///
/// ```
/// use wgsl_numeric::number::{checked_mod, AFloat};
///
/// let r = checked_mod(AFloat::new(-7.5), AFloat::new(2.0)).unwrap();
/// assert_eq!(r.value(), -1.5);
/// ```
#[inline]
pub fn checked_mod<T: CheckedArithmetic>(a: Number<T>, b: Number<T>) -> Option<Number<T>> {
    T::checked_mod(a.value(), b.value()).map(Number::from_raw)
}

/// `-a`, or `None` when the negation is not representable (integral
/// `LOWEST`, or any non-zero unsigned value).
#[inline]
pub fn checked_neg<T: CheckedArithmetic>(a: Number<T>) -> Option<Number<T>> {
    T::checked_neg(a.value()).map(Number::from_raw)
}

/// `a * b + c`. The addition only runs if the multiplication succeeded.
#[inline]
pub fn checked_madd<T: CheckedArithmetic>(
    a: Number<T>,
    b: Number<T>,
    c: Number<T>,
) -> Option<Number<T>> {
    checked_mul(a, b).and_then(|product| checked_add(product, c))
}

/// `base ^ exponent` for floating kinds, or `None` for a negative base, a zero
/// base with a non-positive exponent, or a non-finite result.
#[inline]
pub fn checked_pow<T: CheckedPow>(base: Number<T>, exponent: Number<T>) -> Option<Number<T>> {
    T::checked_pow(base.value(), exponent.value()).map(Number::from_raw)
}

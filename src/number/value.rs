// ============================================================================
// Number Wrapper
// Strongly-typed scalar values with explicit-only conversion between kinds
// ============================================================================

use super::half::quantize_f16;
use super::kind::{
    Native, NumberKind, F16_HIGHEST, F16_SMALLEST, F16_SMALLEST_SUBNORMAL,
};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;

mod sealed {
    pub trait Sealed {}
}

/// Marker for the software-emulated binary16 kind.
///
/// Uninhabited: it only selects the `Numeric` implementation whose storage is
/// a quantized `f32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Half {}

/// A scalar kind that can be wrapped in a [`Number`].
///
/// Implemented for `i8`, `u8`, `i32`, `u32`, `u64`, `i64` (abstract-int),
/// `f32`, `f64` (abstract-float) and [`Half`]. The set is closed.
pub trait Numeric: sealed::Sealed + Copy + fmt::Debug + 'static {
    /// Storage type of the wrapped value
    type Repr: Copy + PartialEq + PartialOrd + Default + fmt::Debug;

    const KIND: NumberKind;
    const BITS: u32;
    /// Highest finite value
    const HIGHEST: Self::Repr;
    /// Lowest finite value
    const LOWEST: Self::Repr;
    /// Smallest positive normal value, zero for integral kinds
    const SMALLEST: Self::Repr;
    /// Smallest positive subnormal value, zero for integral kinds
    const SMALLEST_SUBNORMAL: Self::Repr;

    /// Bring a raw value into the representable set of the kind.
    fn normalize(value: Self::Repr) -> Self::Repr;

    fn to_native(value: Self::Repr) -> Native;

    /// `as`-cast from any native value, then normalize.
    fn from_native(value: Native) -> Self::Repr;

    /// Negation. Integral kinds wrap.
    fn negate(value: Self::Repr) -> Self::Repr;
}

macro_rules! integral_numeric {
    ($($t:ty => $kind:ident, $variant:ident as $wide:ty);+ $(;)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Numeric for $t {
                type Repr = $t;

                const KIND: NumberKind = NumberKind::$kind;
                const BITS: u32 = <$t>::BITS;
                const HIGHEST: $t = <$t>::MAX;
                const LOWEST: $t = <$t>::MIN;
                const SMALLEST: $t = 0;
                const SMALLEST_SUBNORMAL: $t = 0;

                #[inline]
                fn normalize(value: $t) -> $t {
                    value
                }

                #[inline]
                fn to_native(value: $t) -> Native {
                    Native::$variant(value as $wide)
                }

                #[inline]
                fn from_native(value: Native) -> $t {
                    match value {
                        Native::Signed(v) => v as $t,
                        Native::Unsigned(v) => v as $t,
                        Native::Float(v) => v as $t,
                    }
                }

                #[inline]
                fn negate(value: $t) -> $t {
                    value.wrapping_neg()
                }
            }
        )+
    };
}

macro_rules! float_numeric {
    ($($t:ty => $kind:ident, $bits:expr);+ $(;)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Numeric for $t {
                type Repr = $t;

                const KIND: NumberKind = NumberKind::$kind;
                const BITS: u32 = $bits;
                const HIGHEST: $t = <$t>::MAX;
                const LOWEST: $t = <$t>::MIN;
                const SMALLEST: $t = <$t>::MIN_POSITIVE;
                const SMALLEST_SUBNORMAL: $t = <$t>::from_bits(1);

                #[inline]
                fn normalize(value: $t) -> $t {
                    value
                }

                #[inline]
                fn to_native(value: $t) -> Native {
                    Native::Float(value as f64)
                }

                #[inline]
                fn from_native(value: Native) -> $t {
                    match value {
                        Native::Signed(v) => v as $t,
                        Native::Unsigned(v) => v as $t,
                        Native::Float(v) => v as $t,
                    }
                }

                #[inline]
                fn negate(value: $t) -> $t {
                    -value
                }
            }
        )+
    };
}

integral_numeric! {
    i64 => AbstractInt, Signed as i64;
    i8 => I8, Signed as i64;
    u8 => U8, Unsigned as u64;
    i32 => I32, Signed as i64;
    u32 => U32, Unsigned as u64;
    u64 => U64, Unsigned as u64;
}

float_numeric! {
    f64 => AbstractFloat, 64;
    f32 => F32, 32;
}

impl sealed::Sealed for Half {}

impl Numeric for Half {
    type Repr = f32;

    const KIND: NumberKind = NumberKind::F16;
    const BITS: u32 = 16;
    const HIGHEST: f32 = F16_HIGHEST;
    const LOWEST: f32 = -F16_HIGHEST;
    const SMALLEST: f32 = F16_SMALLEST;
    const SMALLEST_SUBNORMAL: f32 = F16_SMALLEST_SUBNORMAL;

    #[inline]
    fn normalize(value: f32) -> f32 {
        quantize_f16(value)
    }

    #[inline]
    fn to_native(value: f32) -> Native {
        Native::Float(value as f64)
    }

    #[inline]
    fn from_native(value: Native) -> f32 {
        quantize_f16(<f32 as Numeric>::from_native(value))
    }

    #[inline]
    fn negate(value: f32) -> f32 {
        quantize_f16(-value)
    }
}

// ============================================================================
// Number
// ============================================================================

/// A single scalar value of kind `T`.
///
/// There are no implicit conversions between kinds: values of a different
/// kind are brought in with [`Number::cast_from`] (plain `as` semantics) or
/// [`checked_convert`](super::checked_convert) (range checked).
///
/// For [`F16`] the stored `f32` is always exactly representable in binary16;
/// every constructor quantizes.
///
/// # Example
/// ```
/// use wgsl_numeric::number::{AInt, F16, I32};
///
/// let a = I32::new(7);
/// let b = AInt::new(7);
/// assert!(a == b);
///
/// let h = F16::new(1.0009);
/// assert_eq!(h.value(), 1.0);
/// ```
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Number<T: Numeric>(T::Repr);

/// Abstract integer
pub type AInt = Number<i64>;
/// Abstract float
pub type AFloat = Number<f64>;
pub type I8 = Number<i8>;
pub type U8 = Number<u8>;
pub type I32 = Number<i32>;
pub type U32 = Number<u32>;
pub type U64 = Number<u64>;
pub type F32 = Number<f32>;
/// Half precision, stored as a quantized `f32`
pub type F16 = Number<Half>;

impl<T: Numeric> Number<T> {
    /// Highest finite value of the kind
    pub const HIGHEST: Self = Self(T::HIGHEST);

    /// Lowest finite value of the kind
    pub const LOWEST: Self = Self(T::LOWEST);

    /// Smallest positive normal value (zero for integral kinds)
    pub const SMALLEST: Self = Self(T::SMALLEST);

    /// Smallest positive subnormal value (zero for integral kinds)
    pub const SMALLEST_SUBNORMAL: Self = Self(T::SMALLEST_SUBNORMAL);

    /// Number of bits in the representation of the kind
    pub const BITS: u32 = T::BITS;

    pub const KIND: NumberKind = T::KIND;

    /// Wrap a value of the kind's own representation.
    #[inline]
    pub fn new(value: T::Repr) -> Self {
        Self(T::normalize(value))
    }

    /// Wrap without normalizing. Callers guarantee `value` is already in the
    /// representable set.
    #[inline]
    pub(crate) const fn from_raw(value: T::Repr) -> Self {
        Self(value)
    }

    /// Cast from any native numeric value with `as` semantics.
    #[inline]
    pub fn from_native(value: impl Into<Native>) -> Self {
        Self(T::from_native(value.into()))
    }

    /// Cast from a number of another kind with `as` semantics.
    ///
    /// No range checking is performed; use
    /// [`checked_convert`](super::checked_convert) for that.
    #[inline]
    pub fn cast_from<U: Numeric>(other: Number<U>) -> Self {
        Self(T::from_native(other.to_native()))
    }

    /// The wrapped value.
    #[inline]
    pub fn value(self) -> T::Repr {
        self.0
    }

    #[inline]
    pub fn to_native(self) -> Native {
        T::to_native(self.0)
    }

    /// True for zero, including `-0.0`.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == <T::Repr as Default>::default()
    }
}

impl<T: Numeric> Default for Number<T> {
    #[inline]
    fn default() -> Self {
        Self(<T::Repr as Default>::default())
    }
}

impl<T: Numeric> Neg for Number<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(T::negate(self.0))
    }
}

// ============================================================================
// Comparison
// ============================================================================

/// Equality after promotion: floating if either side is floating, otherwise
/// exact integral comparison.
#[inline]
pub(crate) fn native_eq(a: Native, b: Native) -> bool {
    if a.is_float() || b.is_float() {
        a.as_f64() == b.as_f64()
    } else {
        a.as_i128() == b.as_i128()
    }
}

impl<A: Numeric, B: Numeric> PartialEq<Number<B>> for Number<A> {
    #[inline]
    fn eq(&self, other: &Number<B>) -> bool {
        native_eq(self.to_native(), other.to_native())
    }
}

impl<T: Numeric> Eq for Number<T> where T::Repr: Eq {}

impl<T: Numeric> PartialOrd for Number<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<T: Numeric> Hash for Number<T>
where
    T::Repr: Hash,
{
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

macro_rules! native_comparisons {
    ($($t:ty),+) => {
        $(
            impl<T: Numeric> PartialEq<$t> for Number<T> {
                #[inline]
                fn eq(&self, other: &$t) -> bool {
                    native_eq(self.to_native(), Native::from(*other))
                }
            }
        )+
    };
}

native_comparisons!(i8, u8, i32, u32, i64, u64, f32, f64);

// ============================================================================
// Native Conversions
// ============================================================================

macro_rules! native_wrapping {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Number<$t> {
                #[inline]
                fn from(value: $t) -> Self {
                    Self(value)
                }
            }

            impl From<Number<$t>> for $t {
                #[inline]
                fn from(value: Number<$t>) -> Self {
                    value.0
                }
            }
        )+
    };
}

native_wrapping!(i8, u8, i32, u32, u64, i64, f32, f64);

impl From<Number<Half>> for f32 {
    #[inline]
    fn from(value: Number<Half>) -> Self {
        value.0
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<T: Numeric> fmt::Debug for Number<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number<{}>({:?})", T::KIND, self.0)
    }
}

/// Prints the value followed by its WGSL literal suffix, e.g. `3i`, `0.5h`.
impl<T: Numeric> fmt::Display for Number<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{}", self.0, T::KIND.suffix())
    }
}

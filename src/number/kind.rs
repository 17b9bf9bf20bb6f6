// ============================================================================
// Numeric Kinds
// Closed set of scalar kind tags with their per-kind constant tables
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tag identifying one of the scalar kinds of the value model.
///
/// The two abstract kinds are wider than any concrete kind and carry
/// literals before their concrete type is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumberKind {
    /// Abstract integer, backed by `i64`
    AbstractInt,
    /// Abstract float, backed by `f64`
    AbstractFloat,
    I8,
    U8,
    I32,
    U32,
    U64,
    /// Software binary16, stored as a quantized `f32`
    F16,
    F32,
}

/// A raw native value of any numeric type, before wrapping.
///
/// Integral values are carried at 64 bits (signed or unsigned so that the
/// full `u64` range survives), floating values as `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Native {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

/// Constant facts about a kind, looked up by tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindInfo {
    /// WGSL-facing name, e.g. `"abstract-int"` or `"f16"`
    pub name: &'static str,
    /// Literal suffix used when printing values of this kind
    pub suffix: &'static str,
    /// Width of the representation in bits
    pub bits: u32,
    pub is_floating_point: bool,
    pub is_signed: bool,
    pub is_abstract: bool,
    /// Highest finite value
    pub highest: Native,
    /// Lowest finite value
    pub lowest: Native,
    /// Smallest positive normal value (zero for integral kinds)
    pub smallest: Native,
    /// Smallest positive subnormal value (zero for integral kinds)
    pub smallest_subnormal: Native,
}

// ============================================================================
// Constant Table
// ============================================================================

/// Largest finite binary16 value.
pub(crate) const F16_HIGHEST: f32 = 65504.0;
/// Smallest normal binary16 value, 2^-14.
pub(crate) const F16_SMALLEST: f32 = f32::from_bits(0x3880_0000);
/// Smallest subnormal binary16 value, 2^-24.
pub(crate) const F16_SMALLEST_SUBNORMAL: f32 = f32::from_bits(0x3380_0000);

const fn integral(
    name: &'static str,
    suffix: &'static str,
    bits: u32,
    highest: Native,
    lowest: Native,
) -> KindInfo {
    KindInfo {
        name,
        suffix,
        bits,
        is_floating_point: false,
        is_signed: matches!(lowest, Native::Signed(v) if v < 0),
        is_abstract: false,
        highest,
        lowest,
        smallest: Native::Signed(0),
        smallest_subnormal: Native::Signed(0),
    }
}

const fn floating(
    name: &'static str,
    suffix: &'static str,
    bits: u32,
    highest: f64,
    smallest: f64,
    smallest_subnormal: f64,
) -> KindInfo {
    KindInfo {
        name,
        suffix,
        bits,
        is_floating_point: true,
        is_signed: true,
        is_abstract: false,
        highest: Native::Float(highest),
        lowest: Native::Float(-highest),
        smallest: Native::Float(smallest),
        smallest_subnormal: Native::Float(smallest_subnormal),
    }
}

/// Indexed by `NumberKind as usize`; order must follow the enum.
static KIND_TABLE: [KindInfo; 9] = [
    KindInfo {
        is_abstract: true,
        ..integral(
            "abstract-int",
            "",
            64,
            Native::Signed(i64::MAX),
            Native::Signed(i64::MIN),
        )
    },
    KindInfo {
        is_abstract: true,
        ..floating(
            "abstract-float",
            "",
            64,
            f64::MAX,
            f64::MIN_POSITIVE,
            f64::from_bits(1),
        )
    },
    integral(
        "i8",
        "",
        8,
        Native::Signed(i8::MAX as i64),
        Native::Signed(i8::MIN as i64),
    ),
    integral("u8", "", 8, Native::Unsigned(u8::MAX as u64), Native::Unsigned(0)),
    integral(
        "i32",
        "i",
        32,
        Native::Signed(i32::MAX as i64),
        Native::Signed(i32::MIN as i64),
    ),
    integral("u32", "u", 32, Native::Unsigned(u32::MAX as u64), Native::Unsigned(0)),
    integral("u64", "", 64, Native::Unsigned(u64::MAX), Native::Unsigned(0)),
    floating(
        "f16",
        "h",
        16,
        F16_HIGHEST as f64,
        F16_SMALLEST as f64,
        F16_SMALLEST_SUBNORMAL as f64,
    ),
    floating(
        "f32",
        "f",
        32,
        f32::MAX as f64,
        f32::MIN_POSITIVE as f64,
        f32::from_bits(1) as f64,
    ),
];

impl NumberKind {
    /// Every kind, in table order.
    pub const ALL: [NumberKind; 9] = [
        NumberKind::AbstractInt,
        NumberKind::AbstractFloat,
        NumberKind::I8,
        NumberKind::U8,
        NumberKind::I32,
        NumberKind::U32,
        NumberKind::U64,
        NumberKind::F16,
        NumberKind::F32,
    ];

    /// Look up the constant table entry for this kind.
    #[inline]
    pub fn info(self) -> &'static KindInfo {
        &KIND_TABLE[self as usize]
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.info().name
    }

    #[inline]
    pub fn suffix(self) -> &'static str {
        self.info().suffix
    }

    #[inline]
    pub fn bits(self) -> u32 {
        self.info().bits
    }

    #[inline]
    pub fn is_floating_point(self) -> bool {
        self.info().is_floating_point
    }

    #[inline]
    pub fn is_integral(self) -> bool {
        !self.info().is_floating_point
    }

    #[inline]
    pub fn is_signed(self) -> bool {
        self.info().is_signed
    }

    #[inline]
    pub fn is_unsigned_integral(self) -> bool {
        self.is_integral() && !self.is_signed()
    }

    #[inline]
    pub fn is_abstract(self) -> bool {
        self.info().is_abstract
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Native Values
// ============================================================================

impl Native {
    /// `as i64` view of the value (wrapping for large `u64`, truncating for floats).
    #[inline]
    pub fn as_i64(self) -> i64 {
        match self {
            Native::Signed(v) => v,
            Native::Unsigned(v) => v as i64,
            Native::Float(v) => v as i64,
        }
    }

    /// `as f64` view of the value.
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Native::Signed(v) => v as f64,
            Native::Unsigned(v) => v as f64,
            Native::Float(v) => v,
        }
    }

    /// Exact integral view. Floats truncate toward zero.
    #[inline]
    pub fn as_i128(self) -> i128 {
        match self {
            Native::Signed(v) => v as i128,
            Native::Unsigned(v) => v as i128,
            Native::Float(v) => v as i128,
        }
    }

    #[inline]
    pub fn is_float(self) -> bool {
        matches!(self, Native::Float(_))
    }

    /// True for values strictly below zero. `-0.0` and NaN are not negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        match self {
            Native::Signed(v) => v < 0,
            Native::Unsigned(_) => false,
            Native::Float(v) => v < 0.0,
        }
    }
}

macro_rules! native_from {
    ($variant:ident, $wide:ty, $($t:ty),+) => {
        $(
            impl From<$t> for Native {
                #[inline]
                fn from(v: $t) -> Self {
                    Native::$variant(v as $wide)
                }
            }
        )+
    };
}

native_from!(Signed, i64, i8, i16, i32, i64);
native_from!(Unsigned, u64, u8, u16, u32, u64);
native_from!(Float, f64, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_tags() {
        for (i, kind) in NumberKind::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, i);
        }
        assert_eq!(NumberKind::AbstractInt.name(), "abstract-int");
        assert_eq!(NumberKind::F16.name(), "f16");
        assert_eq!(NumberKind::U32.suffix(), "u");
    }

    #[test]
    fn test_kind_predicates() {
        assert!(NumberKind::AbstractInt.is_abstract());
        assert!(NumberKind::AbstractFloat.is_floating_point());
        assert!(NumberKind::I8.is_signed());
        assert!(NumberKind::U64.is_unsigned_integral());
        assert!(!NumberKind::F32.is_integral());
        assert!(!NumberKind::I32.is_abstract());
        assert_eq!(NumberKind::F16.bits(), 16);
        assert_eq!(NumberKind::U64.bits(), 64);
    }

    #[test]
    fn test_f16_limits() {
        let info = NumberKind::F16.info();
        assert_eq!(info.highest, Native::Float(65504.0));
        assert_eq!(info.lowest, Native::Float(-65504.0));
        assert_eq!(info.smallest, Native::Float(2f64.powi(-14)));
        assert_eq!(info.smallest_subnormal, Native::Float(2f64.powi(-24)));
    }

    #[test]
    fn test_native_views() {
        assert_eq!(Native::from(-3i8).as_i64(), -3);
        assert_eq!(Native::from(u64::MAX).as_i128(), u64::MAX as i128);
        assert_eq!(Native::from(2.75f32).as_i64(), 2);
        assert!(Native::from(-1i32).is_negative());
        assert!(!Native::from(-0.0f64).is_negative());
        assert!(!Native::from(f64::NAN).is_negative());
    }
}

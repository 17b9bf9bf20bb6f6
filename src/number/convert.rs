// ============================================================================
// Checked Conversion
// Range-checked conversion between numeric kinds
// ============================================================================

use super::errors::ConversionFailure;
use super::kind::{Native, NumberKind};
use super::value::{Number, Numeric};

/// Highest i32 value exactly representable as f32.
const F32_TO_I32_SATURATION: i32 = 0x7FFF_FF80;
/// Highest u32 value exactly representable as f32.
const F32_TO_U32_SATURATION: u32 = 0xFFFF_FF00;

/// Convert `num` to kind `To`.
///
/// Float to integral conversions saturate: out-of-range values clamp to the
/// destination's limits. An f32 converted to i32 or u32 clamps to the largest
/// integer that is itself representable as an f32 (`0x7FFFFF80` and
/// `0xFFFFFF00`), not to the integer type's maximum. Every other direction
/// fails with the side of the range that was exceeded.
///
/// # Example
/// ```
/// use wgsl_numeric::number::{checked_convert, AInt, ConversionFailure, F32, I32};
///
/// let saturated: I32 = checked_convert(F32::new(2147483648.0)).unwrap();
/// assert_eq!(saturated.value(), 0x7FFF_FF80);
///
/// let failed = checked_convert::<i8, _>(AInt::new(300));
/// assert_eq!(failed, Err(ConversionFailure::ExceedsPositiveLimit));
/// ```
pub fn checked_convert<To: Numeric, From: Numeric>(
    num: Number<From>,
) -> Result<Number<To>, ConversionFailure> {
    let saturate = From::KIND.is_floating_point() && To::KIND.is_integral();
    let source = num.to_native();

    if To::KIND == NumberKind::U64 && source.is_negative() {
        return if saturate {
            Ok(Number::from_native(0u64))
        } else {
            Err(ConversionFailure::ExceedsNegativeLimit)
        };
    }

    if From::KIND == NumberKind::F32 {
        let value = source.as_f64();
        match To::KIND {
            NumberKind::I32 if value > F32_TO_I32_SATURATION as f64 => {
                return Ok(Number::from_native(F32_TO_I32_SATURATION));
            }
            NumberKind::U32 if value > F32_TO_U32_SATURATION as f64 => {
                return Ok(Number::from_native(F32_TO_U32_SATURATION));
            }
            _ => {}
        }
    }

    match range_violation(source, To::KIND) {
        Some(failure @ ConversionFailure::ExceedsPositiveLimit) => {
            clamp_or_fail(saturate, Number::<To>::HIGHEST, failure)
        }
        Some(failure @ ConversionFailure::ExceedsNegativeLimit) => {
            clamp_or_fail(saturate, Number::<To>::LOWEST, failure)
        }
        None => Ok(Number::from_native(source)),
    }
}

#[inline]
fn clamp_or_fail<To: Numeric>(
    saturate: bool,
    limit: Number<To>,
    failure: ConversionFailure,
) -> Result<Number<To>, ConversionFailure> {
    if saturate {
        Ok(limit)
    } else {
        Err(failure)
    }
}

/// Which limit of `kind` the value lies beyond, if any.
///
/// Compared in `f64` if either side is floating, otherwise exactly so the
/// full `u64` range holds.
fn range_violation(value: Native, kind: NumberKind) -> Option<ConversionFailure> {
    let info = kind.info();
    let (above, below) = if value.is_float() || kind.is_floating_point() {
        let v = value.as_f64();
        (v > info.highest.as_f64(), v < info.lowest.as_f64())
    } else {
        let v = value.as_i128();
        (v > info.highest.as_i128(), v < info.lowest.as_i128())
    };

    if above {
        Some(ConversionFailure::ExceedsPositiveLimit)
    } else if below {
        Some(ConversionFailure::ExceedsNegativeLimit)
    } else {
        None
    }
}

/// Whether `value` is within the finite range of `kind`, using the same
/// comparison as [`checked_convert`].
pub fn fits_in(value: Native, kind: NumberKind) -> bool {
    range_violation(value, kind).is_none()
}

// ============================================================================
// Half-Precision Codec
// IEEE 754 binary16 emulated on top of f32 storage
// ============================================================================
//
// Values are quantized by truncation toward zero, never rounded to nearest.
// Every `F16` holds an f32 that is exactly representable in binary16, so the
// encoder below only ever sees exponents in the normal or subnormal bands.

use super::kind::{F16_HIGHEST, F16_SMALLEST, F16_SMALLEST_SUBNORMAL};
use super::value::{Half, Number};

/// f32 mantissa bits minus binary16 mantissa bits.
const MANTISSA_BITS_DIFF: u32 = 23 - 10;

const F32_SIGN_MASK: u32 = 0x8000_0000;
const F32_EXP_MASK: u32 = 0x7f80_0000;
const F32_MANTISSA_MASK: u32 = 0x007f_ffff;
const F32_EXP_BIAS: u32 = 127;

const F16_SIGN_MASK: u16 = 0x8000;
const F16_EXP_MASK: u16 = 0x7c00;
const F16_MANTISSA_MASK: u16 = 0x03ff;
const F16_EXP_BIAS: u32 = 15;
const F16_MANTISSA_BITS: u32 = 10;

/// Canonical quiet NaN pattern.
pub const F16_NAN_BITS: u16 = 0x7e00;
pub const F16_INFINITY_BITS: u16 = 0x7c00;
pub const F16_NEG_INFINITY_BITS: u16 = 0xfc00;

/// f32 biased exponents whose values are normal binary16 numbers.
const NORMAL_EXP_LOW: u32 = 113;
const NORMAL_EXP_HIGH: u32 = 142;
/// f32 biased exponents whose values are subnormal binary16 numbers.
const SUBNORMAL_EXP_LOW: u32 = 103;
const SUBNORMAL_EXP_HIGH: u32 = 112;

#[inline]
fn biased_exponent(bits: u32) -> u32 {
    (bits & F32_EXP_MASK) >> 23
}

/// Quantize an f32 down to the nearest binary16 value toward zero.
///
/// - Magnitudes above 65504 become infinity of the same sign.
/// - ±0, NaN and ±infinity pass through unchanged.
/// - Normal binary16 magnitudes (≥ 2^-14) drop the low 13 mantissa bits.
/// - Subnormal magnitudes (≥ 2^-24) drop `126 - biased_exponent` bits.
/// - Anything smaller becomes zero of the same sign.
pub fn quantize_f16(value: f32) -> f32 {
    if value > F16_HIGHEST {
        return f32::INFINITY;
    }
    if value < -F16_HIGHEST {
        return f32::NEG_INFINITY;
    }
    if value == 0.0 || !value.is_finite() {
        return value;
    }

    let bits = value.to_bits();
    let magnitude = value.abs();

    if magnitude >= F16_SMALLEST {
        let discard_mask = (1u32 << MANTISSA_BITS_DIFF) - 1;
        f32::from_bits(bits & !discard_mask)
    } else if magnitude >= F16_SMALLEST_SUBNORMAL {
        // Exponent is in [103, 112] here, so 14..=23 bits are discarded.
        let discard_bits = 126 - biased_exponent(bits);
        let discard_mask = (1u32 << discard_bits) - 1;
        f32::from_bits(bits & !discard_mask)
    } else if value > 0.0 {
        0.0
    } else {
        -0.0
    }
}

/// Encode an already-quantized f32 as a binary16 bit pattern.
///
/// # Panics
/// If `value` is not exactly representable in binary16. `F16` never holds
/// such a value, so reaching the panic means the quantization invariant was
/// broken upstream.
pub fn f16_bits_from_quantized(value: f32) -> u16 {
    if value.is_nan() {
        return F16_NAN_BITS;
    }
    if value == f32::INFINITY {
        return F16_INFINITY_BITS;
    }
    if value == f32::NEG_INFINITY {
        return F16_NEG_INFINITY_BITS;
    }

    let bits = value.to_bits();
    let sign = ((bits & F32_SIGN_MASK) >> 16) as u16;
    if value == 0.0 {
        return sign;
    }

    let exponent = biased_exponent(bits);
    let mantissa = bits & F32_MANTISSA_MASK;

    match exponent {
        NORMAL_EXP_LOW..=NORMAL_EXP_HIGH => {
            // Rebias 127 -> 15; exponent >= 113 keeps this non-negative
            let f16_exponent = (exponent - (F32_EXP_BIAS - F16_EXP_BIAS)) as u16;
            let f16_mantissa = (mantissa >> MANTISSA_BITS_DIFF) as u16;
            sign | (f16_exponent << F16_MANTISSA_BITS) | f16_mantissa
        }
        SUBNORMAL_EXP_LOW..=SUBNORMAL_EXP_HIGH => {
            // exponent - 103 + 1 valid bits, from 1 (2^-24) to 10 (2^-15)
            let with_implicit_one = mantissa | (1 << 23);
            let f16_mantissa = (with_implicit_one >> (126 - exponent)) as u16;
            sign | f16_mantissa
        }
        _ => unreachable!("f16 storage holds unquantized value {value:e} (bits {bits:#010x})"),
    }
}

/// Decode a binary16 bit pattern into its exact f32 value.
pub fn f32_from_f16_bits(bits: u16) -> f32 {
    if bits == F16_INFINITY_BITS {
        return f32::INFINITY;
    }
    if bits == F16_NEG_INFINITY_BITS {
        return f32::NEG_INFINITY;
    }

    let sign = ((bits & F16_SIGN_MASK) as u32) << 16;
    if bits & !F16_SIGN_MASK == 0 {
        return f32::from_bits(sign);
    }

    let f16_exponent = ((bits & F16_EXP_MASK) >> F16_MANTISSA_BITS) as u32;
    let mut mantissa = (bits & F16_MANTISSA_MASK) as u32;

    if f16_exponent == 0x1f {
        // Remaining all-ones exponent patterns carry a payload
        return f32::from_bits(sign | F32_EXP_MASK | (mantissa << MANTISSA_BITS_DIFF));
    }

    let exponent = if f16_exponent == 0 {
        // Subnormal: shift the leading one up to the implicit bit position,
        // lowering the exponent once per shift.
        let mut exponent = F32_EXP_BIAS - F16_EXP_BIAS + 1;
        while mantissa & (1 << F16_MANTISSA_BITS) == 0 {
            mantissa <<= 1;
            exponent -= 1;
        }
        mantissa &= F16_MANTISSA_MASK as u32;
        exponent
    } else {
        f16_exponent + F32_EXP_BIAS - F16_EXP_BIAS
    };

    f32::from_bits(sign | (exponent << 23) | (mantissa << MANTISSA_BITS_DIFF))
}

// ============================================================================
// F16 Accessors
// ============================================================================

impl Number<Half> {
    /// Positive infinity.
    pub const INFINITY: Self = Self::from_raw(f32::INFINITY);

    /// Negative infinity.
    pub const NEG_INFINITY: Self = Self::from_raw(f32::NEG_INFINITY);

    /// Canonical NaN.
    pub const NAN: Self = Self::from_raw(f32::NAN);

    /// The IEEE 754 binary16 encoding of this value.
    #[inline]
    pub fn bits_representation(self) -> u16 {
        f16_bits_from_quantized(self.value())
    }

    /// Build a value from its IEEE 754 binary16 encoding.
    #[inline]
    pub fn from_bits(bits: u16) -> Self {
        Self::from_raw(f32_from_f16_bits(bits))
    }

    /// Whether `value` survives quantization unchanged.
    #[inline]
    pub fn is_representable(value: f32) -> bool {
        let quantized = quantize_f16(value);
        quantized.to_bits() == value.to_bits() || (value.is_nan() && quantized.is_nan())
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        self.value()
    }
}

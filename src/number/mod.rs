// ============================================================================
// Numeric Module
// Typed scalar values for WGSL constant evaluation
// ============================================================================
//
// This module provides:
// - Number<T>: strongly-typed wrapper per scalar kind (AInt, AFloat, I32, ...)
// - F16: software binary16 with bit-exact, truncating quantization
// - Checked arithmetic: add/sub/mul/div/mod/madd/pow returning Option
// - Checked conversion: saturating float->int, failing otherwise
// - NumericError / ConversionFailure: error types
//
// Design principles:
// - No implicit conversions between kinds
// - Arithmetic reports overflow instead of wrapping or producing infinity
// - Pure value types, no allocation, no shared state

mod checked;
mod convert;
mod errors;
mod half;
mod kind;
mod value;

pub use checked::{
    checked_add, checked_div, checked_madd, checked_mod, checked_mul, checked_neg, checked_pow,
    checked_sub, CheckedArithmetic, CheckedPow,
};
pub use convert::{checked_convert, fits_in};
pub use errors::{ConversionFailure, NumericError, NumericResult};
pub use half::{
    f16_bits_from_quantized, f32_from_f16_bits, quantize_f16, F16_INFINITY_BITS, F16_NAN_BITS,
    F16_NEG_INFINITY_BITS,
};
pub use kind::{KindInfo, Native, NumberKind};
pub use value::{Half, Number, Numeric, AFloat, AInt, F16, F32, I32, I8, U32, U64, U8};

// ============================================================================
// WGSL Numeric Library
// Typed scalars, bit-exact f16, checked arithmetic and conversion
// ============================================================================

//! # WGSL Numeric
//!
//! The numeric value model of a WGSL shader compiler front-end.
//!
//! ## Features
//!
//! - **Typed scalars** `Number<T>` for every WGSL numeric kind, including the
//!   abstract-int and abstract-float types of const-expressions
//! - **Emulated f16** stored in an `f32` and kept quantized to binary16, with a
//!   bit-exact encoder and decoder
//! - **Checked arithmetic** that reports overflow instead of wrapping
//! - **Checked conversion** with WGSL's saturating float to integer rules
//! - **Constant folding** over runtime-typed scalars with compiler-style
//!   diagnostics
//!
//! ## Example
//!
//! ```rust
//! use wgsl_numeric::prelude::*;
//!
//! // f16 values are quantized on construction
//! let h = F16::new(1.0009);
//! assert_eq!(h.value(), 1.0);
//! assert_eq!(h.bits_representation(), 0x3c00);
//!
//! // Overflow is reported rather than wrapped
//! assert_eq!(checked_add(I32::new(i32::MAX), I32::new(1)), None);
//!
//! // Constant folding with diagnostics
//! let folder = ConstantFolder::new(FoldConfig::with_f16());
//! let a = folder.literal("60000h").unwrap();
//! let err = folder.fold_binary(BinaryOp::Add, a, a).unwrap_err();
//! assert_eq!(err.to_string(), "'60000.0h + 60000.0h' cannot be represented as 'f16'");
//! ```

pub mod fold;
pub mod literal;
#[cfg(feature = "logging")]
pub mod logging;
pub mod number;
pub mod scalar;

// Re-exports for convenience
pub mod prelude {
    pub use crate::fold::{ConstantFolder, FoldConfig};
    pub use crate::literal::parse_literal;
    pub use crate::number::{
        checked_add, checked_convert, checked_div, checked_madd, checked_mod, checked_mul,
        checked_neg, checked_pow, checked_sub, AFloat, AInt, ConversionFailure, Number,
        NumberKind, NumericError, NumericResult, F16, F32, I32, I8, U32, U64, U8,
    };
    pub use crate::scalar::{BinaryOp, Scalar, UnaryOp};
}

// ============================================================================
// Numeric Literals
// Parse WGSL integer and decimal float literal tokens into scalars
// ============================================================================

use crate::number::{AFloat, NumberKind, NumericError, NumericResult, U64};
use crate::scalar::Scalar;

/// Parse a single WGSL numeric literal token.
///
/// Integer literals are decimal or `0x` hex with an optional `i` (i32) or `u`
/// (u32) suffix and default to abstract-int. Float literals are decimal, with
/// a fraction and/or exponent or with an `f` (f32) or `h` (f16) suffix, and
/// default to abstract-float. Literals carry no sign; negation is an operator.
///
/// # Example
/// ```
/// use wgsl_numeric::literal::parse_literal;
/// use wgsl_numeric::number::NumberKind;
///
/// assert_eq!(parse_literal("0x7fu").unwrap().kind(), NumberKind::U32);
/// assert_eq!(parse_literal("1.5h").unwrap().kind(), NumberKind::F16);
/// assert!(parse_literal("3000000000i").is_err());
/// ```
pub fn parse_literal(token: &str) -> NumericResult<Scalar> {
    let invalid = || NumericError::InvalidLiteral(token.to_string());

    if let Some(digits) = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        return parse_hex_int(token, digits);
    }

    let (body, suffix) = match token.as_bytes().last() {
        Some(&c @ (b'i' | b'u' | b'f' | b'h')) => (&token[..token.len() - 1], Some(c)),
        _ => (token, None),
    };
    if body.is_empty() {
        return Err(invalid());
    }

    let kind = match suffix {
        Some(b'i') => NumberKind::I32,
        Some(b'u') => NumberKind::U32,
        Some(b'f') => NumberKind::F32,
        Some(b'h') => NumberKind::F16,
        _ if body.contains(['.', 'e', 'E']) => NumberKind::AbstractFloat,
        _ => NumberKind::AbstractInt,
    };

    if kind.is_floating_point() {
        if !is_decimal_float(body) {
            return Err(invalid());
        }
        let value: f64 = body.parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(out_of_range(token, kind));
        }
        Scalar::AbstractFloat(AFloat::new(value))
            .convert(kind)
            .map_err(|_| out_of_range(token, kind))
    } else {
        if !is_decimal_int(body) {
            return Err(invalid());
        }
        let value = body
            .parse::<u64>()
            .map_err(|_| out_of_range(token, kind))?;
        narrow(token, value, kind)
    }
}

fn parse_hex_int(token: &str, rest: &str) -> NumericResult<Scalar> {
    let (digits, kind) = match rest.as_bytes().last() {
        Some(b'i') => (&rest[..rest.len() - 1], NumberKind::I32),
        Some(b'u') => (&rest[..rest.len() - 1], NumberKind::U32),
        _ => (rest, NumberKind::AbstractInt),
    };
    // Hex floats (`0x1.8p3`) are not accepted.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(NumericError::InvalidLiteral(token.to_string()));
    }
    let value = u64::from_str_radix(digits, 16).map_err(|_| out_of_range(token, kind))?;
    narrow(token, value, kind)
}

fn narrow(token: &str, value: u64, kind: NumberKind) -> NumericResult<Scalar> {
    Scalar::U64(U64::new(value))
        .convert(kind)
        .map_err(|_| out_of_range(token, kind))
}

fn out_of_range(token: &str, kind: NumberKind) -> NumericError {
    NumericError::LiteralOutOfRange {
        literal: token.to_string(),
        kind,
    }
}

/// `0` or a digit run without a leading zero.
fn is_decimal_int(s: &str) -> bool {
    match s.as_bytes() {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        bytes => bytes.iter().all(u8::is_ascii_digit),
    }
}

/// Mantissa with at least one digit and an optional `.`, then an optional
/// signed exponent. Without a `.` or exponent the token is an integer body
/// that took an `f`/`h` suffix, which keeps the integer leading-zero rule.
fn is_decimal_float(s: &str) -> bool {
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
        None => (s, None),
    };

    let mantissa_ok = match mantissa.split_once('.') {
        Some((whole, frac)) => {
            (!whole.is_empty() || !frac.is_empty())
                && whole.bytes().all(|b| b.is_ascii_digit())
                && frac.bytes().all(|b| b.is_ascii_digit())
        }
        None if exponent.is_some() => {
            !mantissa.is_empty() && mantissa.bytes().all(|b| b.is_ascii_digit())
        }
        None => is_decimal_int(mantissa),
    };

    let exponent_ok = match exponent {
        Some(e) => {
            let digits = e.strip_prefix(['+', '-']).unwrap_or(e);
            !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
        }
        None => true,
    };

    mantissa_ok && exponent_ok
}

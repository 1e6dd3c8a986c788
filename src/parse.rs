//! Decimal parsing and conversions from arbitrary-precision integers.
//!
//! The accepted grammar is
//!
//! ```text
//! sign? digits ('.' digits?)? ([eE] sign? digits)? (' '* '+' ' '* double)?
//! ```
//!
//! plus `nan` and `[+-]?inf(inity)?`, case-insensitive. The optional
//! trailing `+ double` is the two-word form written by
//! [`show_sum`](crate::DoubleDouble::show_sum); parsing it recovers the
//! original words bit-for-bit. The main lexeme goes through an exact
//! integer significand so that every digit participates in the rounding.

use std::str::FromStr;

use num_bigint::{BigInt, Sign};
use thiserror::Error;

use crate::dd::DoubleDouble;

/// The error returned when a string is not a double-double literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid double-double literal")]
pub struct ParseDdError;

// significand digits beyond this cannot move the rounding of a value
// with 31 decimal digits of precision
const MAX_PARSE_DIGITS: usize = 40;

struct Lexeme {
    neg: bool,
    digits: String, // integer and fraction digits, no separator
    exp10: i64,     // declared exponent minus fraction length
    end: usize,     // byte offset one past the lexeme
}

fn scan_lexeme(b: &[u8]) -> Option<Lexeme> {
    let mut i = 0;
    let neg = match b.first() {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };
    let mut digits = String::new();
    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        digits.push(b[i] as char);
        i += 1;
    }
    if i == int_start {
        return None;
    }
    let mut frac_len: i64 = 0;
    if i < b.len() && b[i] == b'.' {
        i += 1;
        while i < b.len() && b[i].is_ascii_digit() {
            digits.push(b[i] as char);
            frac_len += 1;
            i += 1;
        }
    }
    let mut exp: i64 = 0;
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mark = i;
        i += 1;
        let eneg = match b.get(i) {
            Some(b'-') => {
                i += 1;
                true
            }
            Some(b'+') => {
                i += 1;
                false
            }
            _ => false,
        };
        let digit_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            exp = exp
                .saturating_mul(10)
                .saturating_add((b[i] - b'0') as i64);
            i += 1;
        }
        if i == digit_start {
            // not an exponent after all; leave it for the caller
            i = mark;
            exp = 0;
        } else if eneg {
            exp = -exp;
        }
    }
    Some(Lexeme {
        neg,
        digits,
        exp10: exp.saturating_sub(frac_len),
        end: i,
    })
}

fn parse_special(s: &str) -> Option<DoubleDouble> {
    let (neg, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let v = if rest.eq_ignore_ascii_case("nan") {
        DoubleDouble::NAN
    } else if rest.eq_ignore_ascii_case("inf") || rest.eq_ignore_ascii_case("infinity") {
        DoubleDouble::INFINITY
    } else {
        return None;
    };
    Some(if neg { -v } else { v })
}

impl FromStr for DoubleDouble {
    type Err = ParseDdError;

    fn from_str(s: &str) -> Result<Self, ParseDdError> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseDdError);
        }
        if let Some(v) = parse_special(t) {
            return Ok(v);
        }
        let lex = scan_lexeme(t.as_bytes()).ok_or(ParseDdError)?;
        let rest = t[lex.end..].trim_start();
        if let Some(lo_str) = rest.strip_prefix('+') {
            // dual-word sum form: both lexemes are plain binary64
            let hi: f64 = t[..lex.end].trim().parse().map_err(|_| ParseDdError)?;
            let lo: f64 = lo_str.trim().parse().map_err(|_| ParseDdError)?;
            return Ok(Self::new(hi, lo));
        }
        if !rest.is_empty() {
            return Err(ParseDdError);
        }
        Ok(from_lexeme(lex))
    }
}

fn from_lexeme(lex: Lexeme) -> DoubleDouble {
    let mut digits = lex.digits.trim_start_matches('0').to_string();
    let mut e = lex.exp10;
    // drop trailing zeros into the exponent, and digits that sit far
    // below the representable precision
    let stripped_len = digits.trim_end_matches('0').len();
    e = e.saturating_add((digits.len() - stripped_len) as i64);
    digits.truncate(stripped_len);
    if digits.len() > MAX_PARSE_DIGITS {
        e = e.saturating_add((digits.len() - MAX_PARSE_DIGITS) as i64);
        digits.truncate(MAX_PARSE_DIGITS);
    }
    if digits.is_empty() {
        let zero = DoubleDouble::ZERO;
        return if lex.neg { -zero } else { zero };
    }
    let e = e.clamp(-700, 700) as i32;
    let w = from_decimal_digits(&digits);
    let v = scale_pow10(w, e);
    if lex.neg {
        -v
    } else {
        v
    }
}

/// `w · 10^e`. Negative exponents divide by the exact positive power,
/// which keeps short decimal literals exact, chunked so the divisor
/// itself never overflows.
fn scale_pow10(w: DoubleDouble, e: i32) -> DoubleDouble {
    if e >= 0 {
        return w * DoubleDouble::pow10(e);
    }
    let mut v = w;
    let mut k = -e;
    while k > 0 {
        let step = k.min(308);
        v = v / DoubleDouble::pow10(step);
        k -= step;
    }
    v
}

/// At most 15 decimal digits, so the value stays far under 2^53 and the
/// conversion to binary64 is exact.
fn chunk_to_u64(s: &str) -> u64 {
    s.bytes().fold(0u64, |acc, b| acc * 10 + (b - b'0') as u64)
}

/// Exact-chunk conversion of a decimal digit string (no sign, no
/// leading zeros). Every 15-digit slice is an exactly representable
/// binary64 integer; slices are recombined by Horner steps in
/// double-double.
fn from_decimal_digits(s: &str) -> DoubleDouble {
    let s = s.trim_start_matches('0');
    let d = s.len();
    if d == 0 {
        return DoubleDouble::ZERO;
    }
    if d <= 15 {
        return DoubleDouble::from(chunk_to_u64(s));
    }
    if d <= 30 {
        let hi = DoubleDouble::from(chunk_to_u64(&s[..15]));
        let lo = DoubleDouble::from(chunk_to_u64(&s[15..]));
        return hi * DoubleDouble::pow10((d - 15) as i32) + lo;
    }
    let c1 = DoubleDouble::from(chunk_to_u64(&s[..15]));
    let c2 = DoubleDouble::from(chunk_to_u64(&s[15..30]));
    let rest = &s[30..];
    let stripped = rest.trim_end_matches('0');
    let zeros = (rest.len() - stripped.len()) as i32;
    let head = c1 * DoubleDouble::pow10(15) + c2;
    let tail = if stripped.is_empty() {
        DoubleDouble::ZERO
    } else {
        from_decimal_digits(stripped) * DoubleDouble::pow10(zeros)
    };
    head * DoubleDouble::pow10((d - 30) as i32) + tail
}

impl DoubleDouble {
    /// Parses a decimal literal, yielding NaN instead of an error.
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or(Self::NAN)
    }

    /// Converts an arbitrary-precision integer, faithfully rounded once
    /// the value exceeds the 106-bit significand.
    pub fn from_bigint(i: &BigInt) -> Self {
        let v = from_decimal_digits(&i.magnitude().to_string());
        if i.sign() == Sign::Minus {
            -v
        } else {
            v
        }
    }

    /// `i · 10^e` as a double-double.
    pub fn from_int_exp(i: &BigInt, e: i32) -> Self {
        scale_pow10(Self::from_bigint(i), e)
    }

    /// `d · 10^e` as a double-double.
    pub fn from_f64_exp(d: f64, e: i32) -> Self {
        scale_pow10(Self::from(d), e)
    }
}

impl From<BigInt> for DoubleDouble {
    fn from(i: BigInt) -> Self {
        Self::from_bigint(&i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_literals() {
        let x: DoubleDouble = "1.5".parse().unwrap();
        assert_eq!(x, DoubleDouble::from(1.5));
        let x: DoubleDouble = "-2".parse().unwrap();
        assert_eq!(x, DoubleDouble::from(-2.0));
        let x: DoubleDouble = "1e3".parse().unwrap();
        assert_eq!(x, DoubleDouble::from(1000.0));
        // 0.025 is not dyadic: the parse carries the full 106-bit value
        let x: DoubleDouble = "2.5E-2".parse().unwrap();
        assert_eq!(x, DoubleDouble::from(25.0) / DoubleDouble::from(1000.0));
        assert_eq!(x.hi(), 0.025);
        let x: DoubleDouble = "+0.125".parse().unwrap();
        assert_eq!(x, DoubleDouble::from(0.125));
        let x: DoubleDouble = "3.".parse().unwrap();
        assert_eq!(x, DoubleDouble::from(3.0));
    }

    #[test]
    fn parses_specials() {
        assert!(DoubleDouble::from_str_lossy("nan").is_nan());
        assert!(DoubleDouble::from_str_lossy("NaN").is_nan());
        assert!("inf".parse::<DoubleDouble>().unwrap().is_pos_infinity());
        assert!("-Infinity".parse::<DoubleDouble>().unwrap().is_neg_infinity());
        assert!("+INF".parse::<DoubleDouble>().unwrap().is_pos_infinity());
    }

    #[test]
    fn rejects_malformed() {
        for s in ["", "abc", ".5", "1..2", "1e", "1.5x", "--1", "1 2"] {
            assert!(s.parse::<DoubleDouble>().is_err(), "accepted {s:?}");
            assert!(DoubleDouble::from_str_lossy(s).is_nan());
        }
    }

    #[test]
    fn tenth_parses_to_closest_pair() {
        let x: DoubleDouble = "0.1".parse().unwrap();
        assert_eq!(x.hi(), 0.1);
        assert_eq!(x.lo(), -5.551115123125783e-18);
    }

    #[test]
    fn sum_form_is_bit_exact() {
        let x: DoubleDouble = "0.10000000000000000555 + -5.5511151231257830103e-18"
            .parse()
            .unwrap();
        assert_eq!(x.hi(), 0.1);
        assert_eq!(x.lo(), -5.551115123125783e-18);
        let y: DoubleDouble = "0.10000000000000000555 + 0".parse().unwrap();
        assert_eq!((y.hi(), y.lo()), (0.1, 0.0));
    }

    #[test]
    fn signed_zero_survives() {
        let z: DoubleDouble = "-0.0".parse().unwrap();
        assert!(z.is_zero());
        assert!(z.is_sign_negative());
        let z: DoubleDouble = "-0e99".parse().unwrap();
        assert!(z.is_zero() && z.is_sign_negative());
    }

    #[test]
    fn big_integer_literals() {
        let x: DoubleDouble = "1267650600228229401496703205376".parse().unwrap();
        assert_eq!(x, DoubleDouble::from(2.0).powi(100));

        let i: BigInt = "123456789012345678901234567890".parse().unwrap();
        let d = DoubleDouble::from_bigint(&i);
        // round trip through the exact integer conversion
        assert_eq!(d.to_int().unwrap(), i);
    }

    #[test]
    fn int_exp_constructors() {
        let i = BigInt::from(15);
        assert_eq!(DoubleDouble::from_int_exp(&i, -1), DoubleDouble::from(1.5));
        assert_eq!(DoubleDouble::from_int_exp(&i, 2), DoubleDouble::from(1500.0));
    }

    #[test]
    fn huge_exponents_saturate() {
        assert!("1e999".parse::<DoubleDouble>().unwrap().is_pos_infinity());
        assert!("-1e999".parse::<DoubleDouble>().unwrap().is_neg_infinity());
        let z: DoubleDouble = "1e-999".parse().unwrap();
        assert!(z.is_zero());
        let z: DoubleDouble = "123456789123456789e9999999999999999999".parse().unwrap();
        assert!(z.is_pos_infinity());
    }
}

//! Decimal rendering.
//!
//! The digit extractor normalizes the magnitude to `[1, 10)` by a
//! power-of-ten divide (with guards against over- and under-scaling at
//! the exponent extremes), peels digits off the high word, and applies
//! a half-up round on the final digit with carry propagation. The
//! renderers then lay the digits out in fixed or scientific notation.

use std::fmt::{self, Display, LowerExp};

use crate::dd::DoubleDouble;

const DEFAULT_PRECISION: usize = 31;

/// `n` significant decimal digits of `|x|` plus the decimal exponent of
/// the leading digit. `x` must be finite and non-zero.
fn extract_digits(x: DoubleDouble, n: usize) -> (Vec<u8>, i32) {
    let ax = x.abs();
    let mut e = ax.hi().log10().floor() as i32;
    let mut r = if e < -300 {
        // lift out of the subnormal range before scaling down
        (ax * DoubleDouble::pow10(300)) / DoubleDouble::pow10(e + 300)
    } else if e > 300 {
        // 10^e would overflow against a near-max hi word
        (ax.ldexp(-53) / DoubleDouble::pow10(e)).ldexp(53)
    } else {
        ax / DoubleDouble::pow10(e)
    };
    // the log10 estimate can be off by one at either side
    if r.hi() >= 10.0 {
        e += 1;
        r = r / DoubleDouble::from(10.0);
    } else if r.hi() < 1.0 {
        e -= 1;
        r = r.mul_f64(10.0);
    }

    let mut ds: Vec<i32> = Vec::with_capacity(n + 1);
    for _ in 0..=n {
        let d = r.hi().trunc();
        ds.push(d as i32);
        r = (r - DoubleDouble::from(d)).mul_f64(10.0);
    }

    // the faithful divides can leave a digit at -1 or 10; rebalance
    for i in (1..ds.len()).rev() {
        while ds[i] < 0 {
            ds[i] += 10;
            ds[i - 1] -= 1;
        }
        while ds[i] > 9 {
            ds[i] -= 10;
            ds[i - 1] += 1;
        }
    }

    // round half-up on the guard digit, then carry
    if ds[n] >= 5 {
        ds[n - 1] += 1;
    }
    ds.truncate(n);
    for i in (1..n).rev() {
        if ds[i] > 9 {
            ds[i] -= 10;
            ds[i - 1] += 1;
        } else {
            break;
        }
    }
    if ds[0] > 9 {
        ds[0] -= 10;
        ds.insert(0, 1);
        e += 1;
        ds.truncate(n);
    }
    (ds.into_iter().map(|d| d as u8).collect(), e)
}

fn digit_str(ds: &[u8]) -> String {
    ds.iter().map(|d| (b'0' + d) as char).collect()
}

fn special_str(x: DoubleDouble) -> Option<&'static str> {
    if x.is_nan() {
        Some("nan")
    } else if x.is_pos_infinity() {
        Some("inf")
    } else if x.is_neg_infinity() {
        Some("-inf")
    } else {
        None
    }
}

fn render_fixed(sign: &str, s: &str, e: i32, frac_digits: Option<usize>, trim: bool) -> String {
    let (ip, mut fp) = if e >= 0 {
        let cut = (e + 1) as usize;
        if s.len() <= cut {
            (format!("{s:0<cut$}"), String::new())
        } else {
            (s[..cut].to_string(), s[cut..].to_string())
        }
    } else {
        ("0".to_string(), format!("{}{s}", "0".repeat((-e - 1) as usize)))
    };
    if let Some(n) = frac_digits {
        fp.truncate(n);
        while fp.len() < n {
            fp.push('0');
        }
    }
    if trim {
        while fp.ends_with('0') {
            fp.pop();
        }
    }
    if fp.is_empty() {
        format!("{sign}{ip}")
    } else {
        format!("{sign}{ip}.{fp}")
    }
}

fn render_exp(sign: &str, s: &str, e: i32, trim: bool) -> String {
    let mut frac = s[1..].to_string();
    if trim {
        while frac.ends_with('0') {
            frac.pop();
        }
    }
    let mant = if frac.is_empty() {
        s[..1].to_string()
    } else {
        format!("{}.{frac}", &s[..1])
    };
    match e {
        0 => format!("{sign}{mant}"),
        _ if e > 0 => format!("{sign}{mant}e+{e}"),
        _ => format!("{sign}{mant}e{e}"),
    }
}

fn format_auto(x: DoubleDouble, prec: Option<usize>) -> String {
    if let Some(s) = special_str(x) {
        return s.to_string();
    }
    let sign = if x.is_sign_negative() { "-" } else { "" };
    if x.is_zero() {
        return format!("{sign}0");
    }
    let trim = prec.is_none();
    let p = prec.unwrap_or(DEFAULT_PRECISION).clamp(1, DEFAULT_PRECISION);
    let (ds, e) = extract_digits(x, p);
    let s = digit_str(&ds);
    let fixed = (p as i32) > e
        && e >= -4
        && (e <= 27 || (e <= 30 && x.is_integer()));
    if fixed {
        render_fixed(sign, &s, e, None, trim)
    } else {
        render_exp(sign, &s, e, trim)
    }
}

impl DoubleDouble {
    /// Shortest-looking decimal form: up to 31 significant digits with
    /// trailing zeros trimmed, fixed notation for moderate exponents
    /// and scientific otherwise. This is also the `Display` output.
    pub fn show(self) -> String {
        format_auto(self, None)
    }

    /// Like [`show`](Self::show) with an explicit number of significant
    /// digits (clamped to 31); trailing zeros are kept.
    pub fn show_prec(self, prec: usize) -> String {
        format_auto(self, Some(prec))
    }

    /// Fixed-point notation with exactly `dprec` digits after the
    /// decimal point (unless `trim_zeros` removes trailing zeros).
    pub fn show_fixed(self, dprec: i32, trim_zeros: bool) -> String {
        if let Some(s) = special_str(self) {
            return s.to_string();
        }
        let sign = if self.is_sign_negative() { "-" } else { "" };
        // nothing lives below 10^-1074, so deeper requests only pad
        let dprec = (dprec.max(0) as usize).min(1100);
        let pad = |trimmed: bool| {
            if trimmed || dprec == 0 {
                String::new()
            } else {
                format!(".{}", "0".repeat(dprec))
            }
        };
        if self.is_zero() {
            return format!("{sign}0{}", pad(trim_zeros));
        }

        let (probe, e) = extract_digits(self, 2);
        let n = e + 1 + dprec as i32;
        if n < 1 {
            // everything rounds away; half-up may leave one unit in the
            // last fractional place
            if n == 0 && probe[0] >= 5 {
                if dprec == 0 {
                    return format!("{sign}1");
                }
                let fp = format!("{}1", "0".repeat(dprec - 1));
                return format!("{sign}0.{fp}");
            }
            return format!("{sign}0{}", pad(trim_zeros));
        }
        let (ds, e2) = extract_digits(self, n as usize);
        if e2 != e {
            // the probe exponent was bumped by its own rounding
            let n = e2 + 1 + dprec as i32;
            if n < 1 {
                return format!("{sign}0{}", pad(trim_zeros));
            }
            let (ds, e2) = extract_digits(self, n as usize);
            return render_fixed(sign, &digit_str(&ds), e2, Some(dprec), trim_zeros);
        }
        render_fixed(sign, &digit_str(&ds), e2, Some(dprec), trim_zeros)
    }

    /// Scientific notation `d.ddd…e±k` with `prec` significant digits;
    /// a zero exponent is omitted. Negative `prec` means full precision.
    pub fn show_exp(self, prec: i32, trim_zeros: bool) -> String {
        if let Some(s) = special_str(self) {
            return s.to_string();
        }
        let sign = if self.is_sign_negative() { "-" } else { "" };
        if self.is_zero() {
            return format!("{sign}0");
        }
        let p = if prec < 1 {
            DEFAULT_PRECISION
        } else {
            (prec as usize).min(DEFAULT_PRECISION)
        };
        let (ds, e) = extract_digits(self, p);
        render_exp(sign, &digit_str(&ds), e, trim_zeros)
    }

    /// The two binary64 words rendered separately as `hi + lo`.
    /// Parsing this form recovers the value bit-for-bit.
    pub fn show_sum(self, prec: usize) -> String {
        format!(
            "{} + {}",
            Self::from(self.hi()).show_prec(prec),
            Self::from(self.lo()).show_prec(prec)
        )
    }
}

impl Display for DoubleDouble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => f.write_str(&self.show_prec(p)),
            None => f.write_str(&self.show()),
        }
    }
}

impl LowerExp for DoubleDouble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().map(|p| p as i32).unwrap_or(-1);
        f.write_str(&self.show_exp(p, p < 0))
    }
}

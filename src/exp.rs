//! Exponential and logarithms.
//!
//! `exp` reduces modulo ln 2, scales the residual down by 512, runs a
//! short Taylor tail off the 1/k! table, and undoes the scaling with
//! nine `(1+a)² - 1` squarings. `ln` is a single Newton correction of
//! the binary64 logarithm, which already supplies half the digits.

use crate::consts::{E, INV_FACT, LN_10, LN_2};
use crate::dd::DoubleDouble;

// epsilon / 512: once a Taylor term drops below this it cannot affect
// the 106-bit result after the squarings.
const TAYLOR_THRESH: f64 = f64::from_bits(0x38e0000000000000); // 2^-113

impl DoubleDouble {
    /// e raised to `self`.
    pub fn exp(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.hi() <= -709.0 {
            return Self::ZERO;
        }
        if self.hi() >= 709.0 {
            return Self::INFINITY;
        }
        if self.is_zero() {
            return Self::ONE;
        }
        if self == Self::ONE {
            return E;
        }

        let m = (self.hi() / LN_2.hi() + 0.5).floor();
        let r = (self - LN_2.mul_f64(m)).mul_pwr2(1.0 / 512.0);

        // exp(r) - 1, Taylor from the r²/2 term
        let mut p = r.sqr();
        let mut s = r + p.mul_pwr2(0.5);
        for c in INV_FACT {
            p = p * r;
            let t = p * c;
            s = s + t;
            if t.hi().abs() <= TAYLOR_THRESH {
                break;
            }
        }

        // nine squarings: a <- 2a + a² computes (1+a)² - 1
        for _ in 0..9 {
            s = s.mul_pwr2(2.0) + s.sqr();
        }
        (s + Self::ONE).ldexp(m as i32)
    }

    /// Natural logarithm. Non-positive arguments are NaN.
    pub fn ln(self) -> Self {
        if self == Self::ONE {
            return Self::ZERO;
        }
        if self.is_nan() || self.hi() <= 0.0 {
            return Self::NAN;
        }
        if self.is_pos_infinity() {
            return Self::INFINITY;
        }
        if self == E {
            return Self::ONE;
        }
        // Newton on f(y) = exp(y) - x: the binary64 seed has 16 good
        // digits and one step doubles them.
        let y = Self::from(self.hi().ln());
        y + self * (-y).exp() - Self::ONE
    }

    /// Base-2 logarithm.
    #[inline]
    pub fn log2(self) -> Self {
        self.ln() / LN_2
    }

    /// Base-10 logarithm.
    #[inline]
    pub fn log10(self) -> Self {
        self.ln() / LN_10
    }
}

//! Rounding to integers and decimal places, remainders, and the exact
//! conversion to an arbitrary-precision integer.

use std::ops::{Rem, RemAssign};

use num_bigint::BigInt;
use num_traits::FromPrimitive;

use crate::dd::DoubleDouble;

impl DoubleDouble {
    /// Nearest integer, ties to even.
    ///
    /// When the high word lands exactly on a half-integer the low word
    /// breaks the tie; when the high word is already integral the low
    /// word is rounded on its own and the pair renormalized.
    pub fn round(self) -> Self {
        let r = self.hi().round_ties_even();
        let d = r - self.hi();
        if d == 0.0 {
            Self::dquicksum(r, self.lo().round_ties_even())
        } else if d == 0.5 && self.lo() < 0.0 {
            Self::from(r - 1.0)
        } else if d == -0.5 && self.lo() > 0.0 {
            Self::from(r + 1.0)
        } else {
            Self::from(r)
        }
    }

    /// Largest integer not above the value.
    pub fn floor(self) -> Self {
        let f = self.hi().floor();
        if f == self.hi() {
            Self::dquicksum(f, self.lo().floor())
        } else {
            Self::from(f)
        }
    }

    /// Smallest integer not below the value.
    pub fn ceil(self) -> Self {
        let c = self.hi().ceil();
        if c == self.hi() {
            Self::dquicksum(c, self.lo().ceil())
        } else {
            Self::from(c)
        }
    }

    /// Rounds toward zero.
    #[inline]
    pub fn trunc(self) -> Self {
        if self.hi() < 0.0 {
            self.ceil()
        } else {
            self.floor()
        }
    }

    /// Fractional part with the sign of `self`: `self - trunc(self)`.
    #[inline]
    pub fn fract(self) -> Self {
        self - self.trunc()
    }

    /// Floored fractional part, always in `[0, 1)`: `self - floor(self)`.
    #[inline]
    pub fn floor_fract(self) -> Self {
        self - self.floor()
    }

    /// Rounded quotient and the corresponding remainder
    /// `self - round(self / rhs) * rhs`.
    pub fn div_rem(self, rhs: Self) -> (Self, Self) {
        let q = (self / rhs).round();
        (q, self - q * rhs)
    }

    /// Rounds to `prec` decimal digits after the point. Non-positive
    /// precision rounds to an integer; anything beyond the supported 31
    /// digits returns the value unchanged.
    pub fn round_to_prec(self, prec: i32) -> Self {
        if prec <= 0 {
            self.round()
        } else if prec as u32 > Self::MAX_PRECISION {
            self
        } else {
            let scale = Self::pow10(prec);
            (self * scale).round() / scale
        }
    }

    /// Nearest arbitrary-precision integer, or `None` for NaN and
    /// infinities. Both words of the rounded value are integral
    /// binary64s, so each converts exactly and their sum is the exact
    /// result even beyond 2^53.
    pub fn to_int(self) -> Option<BigInt> {
        if !self.is_finite() {
            return None;
        }
        let r = self.round();
        let hi = BigInt::from_f64(r.hi())?;
        let lo = BigInt::from_f64(r.lo())?;
        Some(hi + lo)
    }
}

impl Rem for DoubleDouble {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: Self) -> Self {
        let q = (self / rhs).round();
        self - q * rhs
    }
}

impl RemAssign for DoubleDouble {
    #[inline]
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

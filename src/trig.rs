//! Trigonometric functions and their inverses.
//!
//! `sin_cos` reduces three times: modulo 2π, then to a quadrant
//! (multiples of π/2), then to a sixteenth (multiples of π/16), leaving
//! a residual below π/32 for the polynomial. The table of sin(i·π/16)
//! values and the angle-addition formulas reassemble the result.

use crate::consts::{FRAC_PI_16, FRAC_PI_2, FRAC_PI_4, FRAC_3PI_4, PI, SIN_COEF, SIN_PI_16, TAU};
use crate::dd::DoubleDouble;

// below this the two-term Taylor answer is already exact to 106 bits
const SMALL_ANGLE: f64 = 1e-11;

/// sin(s) for |s| <= π/32: s times a polynomial in s².
fn sin_poly(s: DoubleDouble) -> DoubleDouble {
    let s2 = s.sqr();
    let mut acc = SIN_COEF[SIN_COEF.len() - 1];
    for c in SIN_COEF[..SIN_COEF.len() - 1].iter().rev() {
        acc = acc * s2 + *c;
    }
    s * (acc * s2 + DoubleDouble::ONE)
}

impl DoubleDouble {
    /// Simultaneous sine and cosine.
    pub fn sin_cos(self) -> (Self, Self) {
        if !self.is_finite() {
            return (Self::NAN, Self::NAN);
        }
        if self.hi().abs() < SMALL_ANGLE {
            return (self, Self::ONE - self.sqr().mul_pwr2(0.5));
        }

        // θ = 2π·z + (π/2)·a + (π/16)·b + s,  |s| <= π/32
        let z = (self / TAU).round();
        let r = self - TAU * z;
        let qa = (r.hi() / FRAC_PI_2.hi() + 0.5).floor();
        let a = qa as i32;
        let t = r - FRAC_PI_2.mul_f64(qa);
        let qb = (t.hi() / FRAC_PI_16.hi() + 0.5).floor();
        let b = qb as i32;
        let s = t - FRAC_PI_16.mul_f64(qb);

        let sin_s = sin_poly(s);
        let cos_s = (Self::ONE - sin_s.sqr()).sqrt();

        let ab = b.unsigned_abs() as usize;
        let sin_b = if b >= 0 { SIN_PI_16[ab] } else { -SIN_PI_16[ab] };
        let cos_b = SIN_PI_16[8 - ab];

        let sin_t = sin_s * cos_b + cos_s * sin_b;
        let cos_t = cos_s * cos_b - sin_s * sin_b;

        match a {
            0 => (sin_t, cos_t),
            1 => (cos_t, -sin_t),
            -1 => (-cos_t, sin_t),
            _ => (-sin_t, -cos_t), // a = ±2: shifted by π
        }
    }

    pub fn sin(self) -> Self {
        self.sin_cos().0
    }

    pub fn cos(self) -> Self {
        self.sin_cos().1
    }

    pub fn tan(self) -> Self {
        let (s, c) = self.sin_cos();
        s / c
    }

    /// Arcsine, NaN outside `[-1, 1]`.
    pub fn asin(self) -> Self {
        let a = self.abs();
        if a > Self::ONE {
            return Self::NAN;
        }
        if a == Self::ONE {
            return FRAC_PI_2.with_sign_of(self);
        }
        self.atan2((Self::ONE - self.sqr()).sqrt())
    }

    /// Arccosine, NaN outside `[-1, 1]`.
    pub fn acos(self) -> Self {
        let a = self.abs();
        if a > Self::ONE {
            return Self::NAN;
        }
        if self == Self::ONE {
            return Self::ZERO;
        }
        if self == -Self::ONE {
            return PI;
        }
        (Self::ONE - self.sqr()).sqrt().atan2(self)
    }

    pub fn atan(self) -> Self {
        self.atan2(Self::ONE)
    }

    /// Four-quadrant arctangent of `self / x` (`self` is the ordinate).
    ///
    /// Axis and diagonal inputs produce the exact constants; the
    /// general case normalizes onto the unit circle and applies one
    /// Newton correction to the binary64 seed.
    pub fn atan2(self, x: Self) -> Self {
        let y = self;
        if y.is_nan() || x.is_nan() {
            return Self::NAN;
        }
        if x.is_zero() && y.is_zero() {
            return Self::ZERO;
        }
        if x.is_zero() {
            return FRAC_PI_2.with_sign_of(y);
        }
        if y.is_zero() {
            return if x.is_positive() { Self::ZERO } else { PI };
        }
        if x.is_infinite() || y.is_infinite() {
            // degenerate directions: the binary64 quadrant answer is exact
            return Self::from(y.hi().atan2(x.hi()));
        }
        if x == y {
            return if y.is_positive() { FRAC_PI_4 } else { -FRAC_3PI_4 };
        }
        if x == -y {
            return if y.is_positive() { FRAC_3PI_4 } else { -FRAC_PI_4 };
        }

        let r = (x.sqr() + y.sqr()).sqrt();
        let xr = x / r;
        let yr = y / r;

        let mut z = Self::from(y.hi().atan2(x.hi()));
        let (sin_z, cos_z) = z.sin_cos();
        if xr.hi().abs() > yr.hi().abs() {
            // sin z is the better-conditioned residual
            z = z + (yr - sin_z) / cos_z;
        } else {
            z = z - (xr - cos_z) / sin_z;
        }
        z
    }
}

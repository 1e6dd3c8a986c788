//! Integer powers, square roots, and n-th roots.

use crate::dd::DoubleDouble;
use crate::eft::two_sum;

impl DoubleDouble {
    /// Raises to an integer power by binary exponentiation. `0^0` is
    /// NaN; a negative exponent inverts at the end.
    pub fn powi(self, n: i32) -> Self {
        if n == 0 {
            return if self.is_zero() { Self::NAN } else { Self::ONE };
        }
        let mut base = self;
        let mut acc = Self::ONE;
        let mut m = n.unsigned_abs();
        while m > 0 {
            if m & 1 == 1 {
                acc = acc * base;
            }
            m >>= 1;
            if m > 0 {
                base = base.sqr();
            }
        }
        if n < 0 {
            acc.recip()
        } else {
            acc
        }
    }

    /// 2^n as a double-double.
    #[inline]
    pub fn pow2(n: i32) -> Self {
        Self::from(2.0).powi(n)
    }

    /// 10^n as a double-double; exact through 10^31.
    #[inline]
    pub fn pow10(n: i32) -> Self {
        Self::from(10.0).powi(n)
    }

    /// Square root by Karp's method: a binary64 reciprocal-root seed,
    /// one correction step carried in double-double, and a final
    /// error-free sum of the two estimates.
    pub fn sqrt(self) -> Self {
        if self.is_zero() {
            return self;
        }
        if self.is_sign_negative() {
            return Self::NAN;
        }
        if !self.is_finite() {
            return self; // +inf or NaN
        }
        let a = 1.0 / self.hi().sqrt();
        let t1 = self.hi() * a;
        let t2 = ((self - Self::from(t1).sqr()).hi() * a) * 0.5;
        let (s, e) = two_sum(t1, t2);
        Self::raw(s, e)
    }

    /// Principal n-th root. Even roots of negative values, roots of
    /// non-positive order, and `nroot(x, 0)` are NaN; odd roots keep the
    /// sign of `self`.
    pub fn nroot(self, n: i32) -> Self {
        match n {
            1 => return self,
            2 => return self.sqrt(),
            _ if n <= 0 => return Self::NAN,
            _ => {}
        }
        if n % 2 == 0 && self.is_negative() {
            return Self::NAN;
        }
        if self.is_zero() {
            return Self::ZERO.with_sign_of(self);
        }
        if !self.is_finite() {
            return self;
        }
        // one Newton step on f(a) = a^-n - |x|, seeded in binary64
        let ax = self.abs();
        let a0 = Self::from((-ax.hi().ln() / n as f64).exp());
        let residual = Self::ONE - ax * a0.powi(n);
        let a1 = a0 + a0 * residual / Self::from(n as f64);
        let root = a1.recip();
        if self.is_negative() {
            -root
        } else {
            root
        }
    }
}

//! Hyperbolic functions and their inverses.

use crate::dd::DoubleDouble;

// exponential-form crossover; below it e^x - e^-x cancels too much
const TAYLOR_CUTOFF: f64 = 0.05;

// (2k)(2k+1) for k = 1.., denominators of the nested sinh series
const SINH_DENOM: [f64; 7] = [210.0, 156.0, 110.0, 72.0, 42.0, 20.0, 6.0];

impl DoubleDouble {
    pub fn sinh(self) -> Self {
        if self.is_zero() || !self.is_finite() {
            return self;
        }
        if self.hi().abs() > TAYLOR_CUTOFF {
            let ex = self.exp();
            return (ex - ex.recip()).mul_pwr2(0.5);
        }
        // x·(1 + x²/6·(1 + x²/20·(1 + …))), carried to the x^14 term
        let x2 = self.sqr();
        let mut acc = Self::ONE;
        for d in SINH_DENOM {
            acc = Self::ONE + x2 * acc / Self::from(d);
        }
        self * acc
    }

    pub fn cosh(self) -> Self {
        if self.is_zero() {
            return Self::ONE;
        }
        if self.is_nan() {
            return Self::NAN;
        }
        if self.is_infinite() {
            return Self::INFINITY;
        }
        if self.hi().abs() > TAYLOR_CUTOFF {
            let ex = self.exp();
            return (ex + ex.recip()).mul_pwr2(0.5);
        }
        (Self::ONE + self.sinh().sqr()).sqrt()
    }

    pub fn tanh(self) -> Self {
        if self.is_zero() || self.is_nan() {
            return self;
        }
        if self.is_infinite() {
            return Self::ONE.with_sign_of(self);
        }
        if self.hi().abs() > TAYLOR_CUTOFF {
            let ex = self.exp();
            let emx = ex.recip();
            return (ex - emx) / (ex + emx);
        }
        let s = self.sinh();
        s / (Self::ONE + s.sqr()).sqrt()
    }

    /// Inverse hyperbolic sine: `ln(x + √(x²+1))`, mirrored through the
    /// odd symmetry so large negative arguments keep their precision.
    pub fn asinh(self) -> Self {
        if self.is_zero() || !self.is_finite() {
            return self;
        }
        if self.is_negative() {
            return -(-self).asinh();
        }
        (self + (self.sqr() + Self::ONE).sqrt()).ln()
    }

    /// Inverse hyperbolic cosine: `ln(x + √(x²-1))`, NaN below 1.
    pub fn acosh(self) -> Self {
        if self.is_nan() || self < Self::ONE {
            return Self::NAN;
        }
        (self + (self.sqr() - Self::ONE).sqrt()).ln()
    }

    /// Inverse hyperbolic tangent: `½·ln((1+x)/(1-x))`, NaN outside the
    /// open interval (-1, 1).
    pub fn atanh(self) -> Self {
        if self.is_nan() || self.abs() >= Self::ONE {
            return Self::NAN;
        }
        let ratio = (Self::ONE + self) / (Self::ONE - self);
        ratio.ln().mul_pwr2(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 4.930380657631324e-32;

    fn close(a: DoubleDouble, b: DoubleDouble, tol: f64) -> bool {
        (a - b).abs().to_f64() <= tol
    }

    #[test]
    fn both_branches_agree_at_cutoff() {
        // straddle 0.05 and require the two evaluation schemes to match
        for &v in &[0.049999, 0.050001, -0.049999, -0.050001] {
            let x = DoubleDouble::from(v);
            let s = x.sinh();
            let ex = x.exp();
            let want = (ex - ex.recip()).mul_pwr2(0.5);
            assert!(close(s, want, 8.0 * EPS), "sinh({v}) branch mismatch");
        }
    }

    #[test]
    fn identities() {
        for &v in &[-3.0, -0.7, -0.01, 0.02, 0.5, 2.0, 10.0] {
            let x = DoubleDouble::from(v);
            let (s, c, t) = (x.sinh(), x.cosh(), x.tanh());
            // cosh² - sinh² = 1, with the cancellation scaled by cosh²
            let p = c.sqr() - s.sqr() - DoubleDouble::ONE;
            let tol = 32.0 * EPS * c.sqr().to_f64().max(1.0);
            assert!(p.abs().to_f64() < tol, "cosh²-sinh² at {v}: {p:?}");
            // tanh = sinh / cosh
            assert!(close(t, s / c, 8.0 * EPS * t.abs().to_f64().max(1e-2)));
        }
    }

    #[test]
    fn odd_even_symmetry() {
        // the Taylor branch negates exactly
        let x = DoubleDouble::from(0.01f64);
        assert_eq!(x.sinh(), -(-x).sinh());
        assert_eq!(x.tanh(), -(-x).tanh());
        // the exponential branch is only faithfully symmetric
        for &v in &[0.3, 2.5] {
            let x = DoubleDouble::from(v);
            assert!(close(x.sinh(), -(-x).sinh(), 8.0 * EPS * x.sinh().to_f64().abs()));
            assert!(close(x.cosh(), (-x).cosh(), 8.0 * EPS * x.cosh().to_f64()));
            assert!(close(x.tanh(), -(-x).tanh(), 8.0 * EPS));
        }
        // asinh mirrors through the sign, so it is exactly odd
        for &v in &[0.01, 0.3, 2.5] {
            let x = DoubleDouble::from(v);
            assert_eq!(x.asinh(), -(-x).asinh());
        }
    }

    #[test]
    fn inverses_round_trip() {
        for &v in &[-5.0f64, -0.3, 0.004, 1.25, 20.0] {
            let x = DoubleDouble::from(v);
            let back = x.sinh().asinh();
            assert!(
                close(back, x, 1e-28 * v.abs().max(1.0)),
                "asinh(sinh({v})) = {back:?}"
            );
        }
        for &v in &[1.0f64, 1.5, 3.0, 40.0] {
            let x = DoubleDouble::from(v);
            let back = x.cosh().acosh();
            assert!(
                close(back, x, 1e-27 * v.abs()),
                "acosh(cosh({v})) = {back:?}"
            );
        }
        for &v in &[-0.9, -0.2, 0.04, 0.77] {
            let x = DoubleDouble::from(v);
            let back = x.tanh().atanh();
            assert!(close(back, x, 1e-28), "atanh(tanh({v})) = {back:?}");
        }
    }

    #[test]
    fn domain_edges() {
        assert!(DoubleDouble::from(0.999).acosh().is_nan());
        assert_eq!(DoubleDouble::ONE.acosh(), DoubleDouble::ZERO);
        assert!(DoubleDouble::ONE.atanh().is_nan());
        assert!(DoubleDouble::from(-1.0).atanh().is_nan());
        assert!(DoubleDouble::from(2.0).atanh().is_nan());
        assert!(DoubleDouble::NAN.sinh().is_nan());
        assert!(DoubleDouble::INFINITY.sinh().is_pos_infinity());
        assert!(DoubleDouble::NEG_INFINITY.cosh().is_pos_infinity());
        assert_eq!(DoubleDouble::INFINITY.tanh(), DoubleDouble::ONE);
        assert_eq!(DoubleDouble::ZERO.sinh(), DoubleDouble::ZERO);
    }
}

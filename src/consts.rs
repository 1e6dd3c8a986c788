//! Double-double mathematical constants.
//!
//! Each constant is a correctly rounded two-word expansion embedded as
//! bit patterns; the decimal comments are informative only.

use crate::dd::DoubleDouble;

const fn dd(hi: u64, lo: u64) -> DoubleDouble {
    DoubleDouble::raw(f64::from_bits(hi), f64::from_bits(lo))
}

/// π
pub const PI: DoubleDouble = dd(0x400921fb54442d18, 0x3ca1a62633145c07);
/// 2π
pub const TAU: DoubleDouble = dd(0x401921fb54442d18, 0x3cb1a62633145c07);
/// π/2
pub const FRAC_PI_2: DoubleDouble = dd(0x3ff921fb54442d18, 0x3c91a62633145c07);
/// π/4
pub const FRAC_PI_4: DoubleDouble = dd(0x3fe921fb54442d18, 0x3c81a62633145c07);
/// 3π/4
pub const FRAC_3PI_4: DoubleDouble = dd(0x4002d97c7f3321d2, 0x3c9a79394c9e8a0a);
/// π/16
pub const FRAC_PI_16: DoubleDouble = dd(0x3fc921fb54442d18, 0x3c61a62633145c07);
/// Euler's number e
pub const E: DoubleDouble = dd(0x4005bf0a8b145769, 0x3ca4d57ee2b1013a);
/// ln 2
pub const LN_2: DoubleDouble = dd(0x3fe62e42fefa39ef, 0x3c7abc9e3b39803f);
/// ln 10
pub const LN_10: DoubleDouble = dd(0x40026bb1bbb55516, 0xbcaf48ad494ea3e9);

/// sin(i·π/16) for i = 0..=8, used by the trigonometric kernel; the
/// cosine of the same angles is read back as `SIN_PI_16[8 - i]`.
pub(crate) const SIN_PI_16: [DoubleDouble; 9] = [
    DoubleDouble::raw(0.0, 0.0),
    dd(0x3fc8f8b83c69a60b, 0xbc626d19b9ff8d82), // 0.19509032201612828
    dd(0x3fd87de2a6aea963, 0xbc672cedd3d5a610), // 0.3826834323650898
    dd(0x3fe1c73b39ae68c8, 0x3c8b25dd267f6600), // 0.5555702330196022
    dd(0x3fe6a09e667f3bcd, 0xbc8bdd3413b26456), // 0.7071067811865476
    dd(0x3fea9b66290ea1a3, 0x3c39f630e8b6dac8), // 0.8314696123025452
    dd(0x3fed906bcf328d46, 0x3c7457e610231ac2), // 0.9238795325112867
    dd(0x3fef6297cff75cb0, 0x3c7562172a361fd3), // 0.9807852804032304
    DoubleDouble::raw(1.0, 0.0),
];

/// 1/k! for k = 3..=8, the tail of the exp Taylor series.
pub(crate) const INV_FACT: [DoubleDouble; 6] = [
    dd(0x3fc5555555555555, 0x3c65555555555555), // 1/3!
    dd(0x3fa5555555555555, 0x3c45555555555555), // 1/4!
    dd(0x3f81111111111111, 0x3c01111111111111), // 1/5!
    dd(0x3f56c16c16c16c17, 0xbbef49f49f49f49f), // 1/6!
    dd(0x3f2a01a01a01a01a, 0x3b6a01a01a01a01a), // 1/7!
    dd(0x3efa01a01a01a01a, 0x3b3a01a01a01a01a), // 1/8!
];

/// (-1)^k / (2k+1)! for k = 1..=8: the sine series in s², truncated far
/// below double-double epsilon for |s| <= π/32.
pub(crate) const SIN_COEF: [DoubleDouble; 8] = [
    dd(0xbfc5555555555555, 0xbc65555555555555), // -1/3!
    dd(0x3f81111111111111, 0x3c01111111111111), // +1/5!
    dd(0xbf2a01a01a01a01a, 0xbb6a01a01a01a01a), // -1/7!
    dd(0x3ec71de3a556c734, 0xbb6c154f8ddc6c00), // +1/9!
    dd(0xbe5ae64567f544e4, 0x3afc062e06d1f209), // -1/11!
    dd(0x3de6124613a86d09, 0x3a8f28e0cc748ebe), // +1/13!
    dd(0xbd6ae7f3e733b81f, 0xb9e1d8656b0ee8cb), // -1/15!
    dd(0x3ce952c77030ad4a, 0x398ac981465ddc6c), // +1/17!
];

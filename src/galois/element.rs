//! Tagged element representations for GF(2^M)
//!
//! A field element has two views: a [`GfValue`] is the raw bit pattern in
//! [0, 2^M), a [`GfIndex`] is the discrete logarithm of a nonzero element,
//! i.e. the exponent i with α^i = v. Keeping them as distinct newtypes makes
//! it impossible to feed an exponent where a bit pattern is expected.
//!
//! Addition only makes sense on values (it is XOR), multiplication and
//! division are exponent arithmetic and only make sense on indices; those
//! three come as operator impls because they need no table access at all.
//! Everything that crosses between the views lives on
//! [`GfField`](super::GfField).

use std::fmt;

/// Field element as a raw bit pattern in [0, 2^M)
///
/// 0 is the field zero; nonzero patterns are powers of the primitive α.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GfValue<const M: usize, const POLY: u32>(u16);

impl<const M: usize, const POLY: u32> GfValue<M, POLY> {
    /// Number of field elements Q = 2^M
    pub const FIELD_SIZE: usize = 1 << M;

    pub fn new(v: u16) -> Self {
        debug_assert!((v as usize) < Self::FIELD_SIZE);
        GfValue(v)
    }

    pub fn zero() -> Self {
        GfValue(0)
    }

    pub fn one() -> Self {
        GfValue(1)
    }

    pub fn value(self) -> u16 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl<const M: usize, const POLY: u32> std::ops::Add for GfValue<M, POLY> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        GfValue(self.0 ^ rhs.0)
    }
}

impl<const M: usize, const POLY: u32> std::ops::AddAssign for GfValue<M, POLY> {
    fn add_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl<const M: usize, const POLY: u32> fmt::Display for GfValue<M, POLY> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Field element as an exponent of the primitive α, in [0, N)
///
/// The value N itself is the "undefined" sentinel standing in for the field
/// zero, which has no logarithm. A sentinel index must never reach a
/// multiplicative operation; the operator impls check this in debug builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GfIndex<const M: usize, const POLY: u32>(u16);

impl<const M: usize, const POLY: u32> GfIndex<M, POLY> {
    /// Multiplicative group order N = 2^M - 1, doubling as the sentinel
    pub const MODULUS: u16 = ((1 << M) - 1) as u16;

    pub fn new(i: u16) -> Self {
        debug_assert!(i <= Self::MODULUS);
        GfIndex(i)
    }

    pub fn index(self) -> u16 {
        self.0
    }

    /// Whether this is the sentinel for the (log-less) field zero
    pub fn is_undefined(self) -> bool {
        self.0 == Self::MODULUS
    }

    /// Exponent scaling: α^i raised to the e-th power, e may be negative
    pub fn pow(self, e: i32) -> Self {
        debug_assert!(!self.is_undefined());
        let n = Self::MODULUS as i64;
        GfIndex((self.0 as i64 * e as i64).rem_euclid(n) as u16)
    }
}

impl<const M: usize, const POLY: u32> std::ops::Mul for GfIndex<M, POLY> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        debug_assert!(!self.is_undefined());
        debug_assert!(!rhs.is_undefined());
        let sum = self.0 as u32 + rhs.0 as u32;
        let n = Self::MODULUS as u32;
        GfIndex(if sum >= n { (sum - n) as u16 } else { sum as u16 })
    }
}

impl<const M: usize, const POLY: u32> std::ops::Div for GfIndex<M, POLY> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        debug_assert!(!self.is_undefined());
        debug_assert!(!rhs.is_undefined());
        let n = Self::MODULUS as u32;
        let diff = self.0 as u32 + n - rhs.0 as u32;
        GfIndex(if diff >= n { (diff - n) as u16 } else { diff as u16 })
    }
}

//! Galois field GF(2^M) arithmetic
//!
//! This module implements arithmetic over binary extension fields GF(2^M)
//! for 2 <= M <= 16, parameterized by a primitive polynomial `POLY` of
//! degree M. Elements are represented either as raw bit patterns
//! ([`GfValue`]) or as exponents of the primitive element α ([`GfIndex`]);
//! see the [`element`] module for the distinction.
//!
//! Multiplication and division are table lookups: `log` maps a bit pattern
//! to its exponent, `exp` maps back, so `a * b = exp[log[a] + log[b]]`. The
//! tables are built once per `(M, POLY)` pair and shared process-wide (see
//! [`GfTables`]).
//!
//! The third table, the Artin-Schreier inverse map, solves the equation
//! y² + y = k, which has no closed form over GF(2^M) other than a lookup.
//! It is what lets the Reed-Solomon decoder factor quadratic error-locator
//! polynomials without a field sweep.

mod element;
mod tables;

pub use element::{GfIndex, GfValue};
pub use tables::{GfTables, TableError, TableResult};

/// Arithmetic handle for one GF(2^M) field
///
/// A cheap `Copy` wrapper over the process-wide shared tables. All
/// table-backed operations live here; the zero-free exponent arithmetic is
/// on [`GfIndex`] directly.
#[derive(Clone, Copy)]
pub struct GfField<const M: usize, const POLY: u32> {
    tables: &'static GfTables,
}

impl<const M: usize, const POLY: u32> GfField<M, POLY> {
    /// Number of field elements Q = 2^M
    pub const FIELD_SIZE: usize = 1 << M;
    /// Multiplicative group order N = 2^M - 1
    pub const ORDER: u16 = ((1 << M) - 1) as u16;

    /// Look up (or build) the shared tables for this field
    pub fn new() -> TableResult<Self> {
        let tables = GfTables::cached(M as u32, POLY)?;
        Ok(GfField { tables })
    }

    /// The discrete logarithm of `a`; the sentinel index for `a` = 0
    #[inline]
    pub fn index(self, a: GfValue<M, POLY>) -> GfIndex<M, POLY> {
        GfIndex::new(self.tables.log(a.value()))
    }

    /// The bit pattern α^i; `i` must not be the sentinel
    #[inline]
    pub fn value(self, i: GfIndex<M, POLY>) -> GfValue<M, POLY> {
        debug_assert!(!i.is_undefined());
        GfValue::new(self.tables.exp(i.index()))
    }

    /// Value-domain multiplication, short-circuiting on zero
    #[inline]
    pub fn mul(self, a: GfValue<M, POLY>, b: GfValue<M, POLY>) -> GfValue<M, POLY> {
        if a.is_zero() || b.is_zero() {
            GfValue::zero()
        } else {
            self.value(self.index(a) * self.index(b))
        }
    }

    /// Value-domain division; `b` must be nonzero
    #[inline]
    pub fn div(self, a: GfValue<M, POLY>, b: GfValue<M, POLY>) -> GfValue<M, POLY> {
        debug_assert!(!b.is_zero());
        if a.is_zero() {
            GfValue::zero()
        } else {
            self.value(self.index(a) / self.index(b))
        }
    }

    /// Multiplicative inverse; `a` must be nonzero
    #[inline]
    pub fn rcp(self, a: GfValue<M, POLY>) -> GfValue<M, POLY> {
        debug_assert!(!a.is_zero());
        self.value(GfIndex::new(0) / self.index(a))
    }

    /// Mixed-domain multiplication `a * α^b`, short-circuiting on zero `a`
    #[inline]
    pub fn mul_index(self, a: GfValue<M, POLY>, b: GfIndex<M, POLY>) -> GfValue<M, POLY> {
        debug_assert!(!b.is_undefined());
        if a.is_zero() {
            GfValue::zero()
        } else {
            self.value(self.index(a) * b)
        }
    }

    /// Fused multiply-add `α^a * b + c`, short-circuiting on zero `b`
    #[inline]
    pub fn fma(
        self,
        a: GfIndex<M, POLY>,
        b: GfValue<M, POLY>,
        c: GfValue<M, POLY>,
    ) -> GfValue<M, POLY> {
        debug_assert!(!a.is_undefined());
        if b.is_zero() {
            c
        } else {
            self.value(a * self.index(b)) + c
        }
    }

    /// Fused multiply-add `α^a * α^b + c` with both factors as exponents
    #[inline]
    pub fn fma_index(
        self,
        a: GfIndex<M, POLY>,
        b: GfIndex<M, POLY>,
        c: GfValue<M, POLY>,
    ) -> GfValue<M, POLY> {
        debug_assert!(!a.is_undefined());
        debug_assert!(!b.is_undefined());
        self.value(a * b) + c
    }

    /// Artin-Schreier inverse: the even solution y of y² + y = k, or zero
    /// if the equation is unsolvable in this field
    #[inline]
    pub fn imap(self, k: GfValue<M, POLY>) -> GfValue<M, POLY> {
        GfValue::new(self.tables.imap(k.value()))
    }
}

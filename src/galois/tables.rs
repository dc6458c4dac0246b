//! Log/exp table construction for GF(2^M)
//!
//! Tables are built once per `(M, POLY)` pair by walking the multiplicative
//! group of the field, and cached for the lifetime of the process. Every
//! codec instance parameterized over the same field shares one table set;
//! the registry lock is only taken at construction time, never on the
//! arithmetic fast path.

use std::sync::{Mutex, OnceLock};

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors that can occur while building field tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// Field extension degree outside the supported range
    #[error("field extension degree {m} outside supported range 2..=16")]
    UnsupportedDegree { m: u32 },

    /// Polynomial degree does not match the field extension degree
    #[error("polynomial {poly:#b} is not of degree {m}")]
    WrongDegree { poly: u32, m: u32 },

    /// Polynomial does not generate the full multiplicative group
    #[error("polynomial {poly:#b} is not primitive over GF(2)")]
    NotPrimitive { poly: u32 },
}

/// Type alias for Result with TableError
pub type TableResult<T> = std::result::Result<T, TableError>;

/// Immutable log/exp/Artin-Schreier tables for one GF(2^M) field
///
/// Layout invariants:
/// - `log[0] = N` (the sentinel for "undefined"), `log[v] = i` with α^i = v
/// - `exp[N] = 0` (sentinel position), `exp[i] = α^i` for i in [0, N)
/// - `imap[y² ⊕ y] = y` for every even y in [2, N), 0 where undefined
#[derive(Debug)]
pub struct GfTables {
    m: u32,
    poly: u32,
    log: Vec<u16>,
    exp: Vec<u16>,
    imap: Vec<u16>,
}

static REGISTRY: OnceLock<Mutex<FxHashMap<(u32, u32), &'static GfTables>>> = OnceLock::new();

impl GfTables {
    /// Build the tables for GF(2^M) defined by the primitive polynomial `poly`
    ///
    /// `poly` is the full degree-M polynomial with bit M set, e.g. `0b10011`
    /// for x⁴ + x + 1. Fails if `poly` has the wrong degree or does not
    /// generate the whole multiplicative group.
    pub fn build(m: u32, poly: u32) -> TableResult<GfTables> {
        if !(2..=16).contains(&m) {
            return Err(TableError::UnsupportedDegree { m });
        }
        if poly >> m != 1 {
            return Err(TableError::WrongDegree { poly, m });
        }

        let q: u32 = 1 << m;
        let n = q - 1;
        let mut log = vec![0u16; q as usize];
        let mut exp = vec![0u16; q as usize];
        log[0] = n as u16;
        exp[n as usize] = 0;

        // Walk the powers of the primitive element α = x. A non-primitive
        // polynomial shows up as a cycle shorter or longer than N.
        let mut a: u32 = 1;
        for i in 0..n {
            if i > 0 && a == 1 {
                return Err(TableError::NotPrimitive { poly });
            }
            exp[i as usize] = a as u16;
            log[a as usize] = i as u16;
            a = if a & (q >> 1) != 0 { (a << 1) ^ poly } else { a << 1 };
        }
        if a != 1 {
            return Err(TableError::NotPrimitive { poly });
        }

        // Artin-Schreier inverse map: y² + y = k is solved by y = imap[k].
        // The map x ↦ x² ⊕ x identifies {x, x+1}; recording the even member
        // of each pair fills every reachable slot exactly once.
        let mut imap = vec![0u16; n as usize];
        for x in (2..n).step_by(2) {
            let y = exp[((2 * log[x as usize] as u32) % n) as usize] ^ x as u16;
            if y == 0 || imap[y as usize] != 0 {
                return Err(TableError::NotPrimitive { poly });
            }
            imap[y as usize] = x as u16;
        }

        Ok(GfTables { m, poly, log, exp, imap })
    }

    /// Fetch the process-wide shared tables for `(m, poly)`, building them
    /// on first use
    pub fn cached(m: u32, poly: u32) -> TableResult<&'static GfTables> {
        let registry = REGISTRY.get_or_init(|| Mutex::new(FxHashMap::default()));
        let mut map = registry.lock().expect("galois table registry poisoned");
        if let Some(tables) = map.get(&(m, poly)) {
            return Ok(tables);
        }
        let tables: &'static GfTables = Box::leak(Box::new(GfTables::build(m, poly)?));
        map.insert((m, poly), tables);
        Ok(tables)
    }

    /// Field extension degree M
    pub fn degree(&self) -> u32 {
        self.m
    }

    /// The defining polynomial
    pub fn polynomial(&self) -> u32 {
        self.poly
    }

    /// Multiplicative group order N = 2^M - 1
    pub fn order(&self) -> u16 {
        ((1u32 << self.m) - 1) as u16
    }

    /// `log[v]`: the exponent of `v`, or N for `v` = 0
    #[inline]
    pub fn log(&self, v: u16) -> u16 {
        self.log[v as usize]
    }

    /// `exp[i]`: the bit pattern of α^i, or 0 at the sentinel position N
    #[inline]
    pub fn exp(&self, i: u16) -> u16 {
        self.exp[i as usize]
    }

    /// `imap[k]`: the even solution of y² + y = k, or 0 where undefined
    #[inline]
    pub fn imap(&self, y: u16) -> u16 {
        self.imap[y as usize]
    }
}

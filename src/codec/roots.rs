//! Root finding for error-locator polynomials
//!
//! Locators of degree 1 and 2 are solved in closed form; the quadratic case
//! reduces to y² + y = k via the substitution x = (b/a)y and is answered by
//! the precomputed Artin-Schreier inverse map. Anything higher falls back to
//! a Chien search over the whole multiplicative group.

use crate::galois::{GfField, GfIndex, GfValue};

use super::DecodeError;

/// Find the roots of the trimmed `locator` and convert them to codeword
/// locations.
///
/// Returns exactly `degree` locations or an error: a locator that does not
/// split into distinct roots over the field means the error pattern exceeded
/// the correction capability.
pub(crate) fn find_locations<const M: usize, const POLY: u32>(
    gf: GfField<M, POLY>,
    locator: &[GfValue<M, POLY>],
    degree: usize,
) -> Result<Vec<GfIndex<M, POLY>>, DecodeError> {
    debug_assert!(degree >= 1 && degree < locator.len());
    match degree {
        1 => {
            let root = gf.index(locator[0]) / gf.index(locator[1]);
            Ok(vec![root / GfIndex::new(1)])
        }
        2 => solve_quadratic(gf, locator),
        _ => chien_search(gf, locator, degree),
    }
}

/// Closed-form factorization of c + bx + ax²
fn solve_quadratic<const M: usize, const POLY: u32>(
    gf: GfField<M, POLY>,
    locator: &[GfValue<M, POLY>],
) -> Result<Vec<GfIndex<M, POLY>>, DecodeError> {
    let (a, b, c) = (locator[2], locator[1], locator[0]);
    if b.is_zero() || c.is_zero() {
        // b = 0 is a repeated root, never a valid two-error locator
        return Err(DecodeError::QuadraticUnsolvable);
    }
    let ba = gf.div(b, a);
    let k = gf.div(gf.mul(a, c), gf.mul(b, b));
    let r = gf.imap(k);
    if r.is_zero() {
        return Err(DecodeError::QuadraticUnsolvable);
    }
    // Roots are (b/a)·r and (b/a)·(r + 1)
    let x0 = gf.mul(ba, r);
    let x1 = x0 + ba;
    Ok(vec![
        gf.index(x0) / GfIndex::new(1),
        gf.index(x1) / GfIndex::new(1),
    ])
}

/// Evaluate the locator at every α^(i+1) by advancing per-coefficient
/// running products one α-step at a time
fn chien_search<const M: usize, const POLY: u32>(
    gf: GfField<M, POLY>,
    locator: &[GfValue<M, POLY>],
    degree: usize,
) -> Result<Vec<GfIndex<M, POLY>>, DecodeError> {
    let n = GfField::<M, POLY>::ORDER as usize;
    let mut terms = locator[..=degree].to_vec();
    let mut locations = Vec::with_capacity(degree);
    for i in 0..n {
        let mut sum = terms[0];
        for (j, term) in terms.iter_mut().enumerate().skip(1) {
            *term = gf.mul_index(*term, GfIndex::new(j as u16));
            sum += *term;
        }
        if sum.is_zero() {
            locations.push(GfIndex::new(i as u16));
        }
    }
    if locations.len() != degree {
        return Err(DecodeError::RootSearchFailed {
            found: locations.len(),
            expected: degree,
        });
    }
    Ok(locations)
}

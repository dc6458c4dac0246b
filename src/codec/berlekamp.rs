//! Berlekamp-Massey locator synthesis with erasure support
//!
//! Finds the shortest LFSR (connection polynomial) generating the syndrome
//! sequence. Erasures are handled in one pass: the locator arrives already
//! seeded with the erasure-locator product, the auxiliary polynomial starts
//! as a copy of it, and the iteration begins after the known-erasure prefix
//! with the register length preloaded to the erasure count.

use crate::galois::{GfField, GfValue};

/// Run the algorithm over `syndromes`, refining `locator` in place.
///
/// `locator` must hold NR+1 coefficients with `locator[0]` = 1 and the
/// erasure locator in the low coefficients. Returns the synthesized register
/// length L; the caller derives the effective polynomial degree by trimming.
pub(crate) fn berlekamp_massey<const M: usize, const POLY: u32>(
    gf: GfField<M, POLY>,
    syndromes: &[GfValue<M, POLY>],
    locator: &mut [GfValue<M, POLY>],
    erasures: usize,
) -> usize {
    let nr = syndromes.len();
    debug_assert_eq!(locator.len(), nr + 1);
    debug_assert!(erasures <= nr);

    let mut prev = locator.to_vec();
    let mut prev_discrepancy = GfValue::one();
    let mut len = erasures;
    let mut shift = 1usize;

    for n in erasures..nr {
        let mut discrepancy = syndromes[n];
        for i in 1..=len {
            discrepancy += gf.mul(locator[i], syndromes[n - i]);
        }

        if discrepancy.is_zero() {
            shift += 1;
        } else if 2 * len <= n + erasures {
            let saved = locator.to_vec();
            let ratio = gf.index(gf.div(discrepancy, prev_discrepancy));
            for i in shift..=nr {
                locator[i] = gf.fma(ratio, prev[i - shift], locator[i]);
            }
            len = n + 1 - len + erasures;
            prev.copy_from_slice(&saved);
            prev_discrepancy = discrepancy;
            shift = 1;
        } else {
            let ratio = gf.index(gf.div(discrepancy, prev_discrepancy));
            for i in shift..=nr {
                locator[i] = gf.fma(ratio, prev[i - shift], locator[i]);
            }
            shift += 1;
        }
    }

    len
}

//! Forney magnitude evaluation
//!
//! Once the error locations are known, the magnitude at each location comes
//! from the error-evaluator polynomial Ω(x) = S(x)·Λ(x) mod x^NR:
//!
//!   e_k = X_k^(1-FCR) · Ω(X_k⁻¹) / Λ'(X_k⁻¹)
//!
//! where X_k is the position indicator of location k and Λ' the formal
//! derivative. In characteristic 2 the derivative keeps only the odd-power
//! terms, each dropping one degree, and the textbook minus sign vanishes.

use crate::galois::{GfField, GfIndex, GfValue};

/// Compute the evaluator polynomial and the magnitude for every location.
///
/// `locator` is the trimmed locator of the given `degree`. Returns the
/// evaluator (for diagnostics) and the magnitudes, location-aligned.
pub(crate) fn error_magnitudes<const M: usize, const POLY: u32>(
    gf: GfField<M, POLY>,
    fcr: u16,
    syndromes: &[GfValue<M, POLY>],
    locator: &[GfValue<M, POLY>],
    degree: usize,
    locations: &[GfIndex<M, POLY>],
) -> (Vec<GfValue<M, POLY>>, Vec<GfValue<M, POLY>>) {
    let nr = syndromes.len();

    // Ω = S·Λ mod x^NR as a direct convolution
    let mut evaluator = vec![GfValue::zero(); nr];
    for (i, out) in evaluator.iter_mut().enumerate() {
        let mut sum = GfValue::zero();
        for j in 0..=i.min(degree) {
            sum += gf.mul(locator[j], syndromes[i - j]);
        }
        *out = sum;
    }

    let order = GfField::<M, POLY>::ORDER;
    let mut magnitudes = Vec::with_capacity(locations.len());
    for &location in locations {
        // X_k⁻¹ = α^(location + 1), see the location convention in `codec`
        let x_inv = location * GfIndex::new(1);

        // Horner evaluation of Ω at X_k⁻¹
        let mut omega = GfValue::zero();
        for &coeff in evaluator.iter().rev() {
            omega = gf.fma(x_inv, omega, coeff);
        }

        // Λ'(X_k⁻¹): odd terms only, powers advance by X_k⁻²
        let x_inv_sq = x_inv * x_inv;
        let mut power = GfValue::one();
        let mut derivative = GfValue::zero();
        let mut j = 1;
        while j <= degree {
            derivative += gf.mul(locator[j], power);
            power = gf.mul_index(power, x_inv_sq);
            j += 2;
        }

        // X_k^(1-FCR) is unity for the common FCR = 1
        let x_k = GfIndex::new(order - 1) / location;
        let scale = gf.value(x_k.pow(1 - fcr as i32));
        magnitudes.push(gf.mul(scale, gf.div(omega, derivative)));
    }

    (evaluator, magnitudes)
}

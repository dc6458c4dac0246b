//! Systematic Reed-Solomon encoding and decoding
//!
//! A codec is parameterized by the field (`M`, `POLY`), the parity symbol
//! count `NR` and the first consecutive root `FCR`. Codewords are N = 2^M - 1
//! symbols long: the first K = N - NR are the message, the rest the parity
//! computed so the whole word is divisible by the generator polynomial
//! g(x) = ∏ (x - α^(FCR+i)). Up to ⌊NR/2⌋ unknown errors are corrected, and
//! up to NR erasures, combined as 2·errors + erasures <= NR.
//!
//! ## Location convention
//!
//! `code[0]` carries the highest polynomial degree, so the symbol at
//! codeword index p corresponds to the position indicator X = α^(N-1-p).
//! Locations reported by the root finder and erasure positions supplied by
//! callers are both plain codeword indices in [0, N).
//!
//! ## Example
//!
//! ```
//! use rsgf::Rs255_239;
//!
//! let rs = Rs255_239::new().unwrap();
//! let mut code = vec![0u16; 255];
//! code[..239].copy_from_slice(&[7u16; 239]);
//! rs.encode(&mut code);
//!
//! code[42] ^= 0x55;
//! assert_eq!(rs.decode(&mut code, &[]), Ok(1));
//! assert!(code[..239].iter().all(|&s| s == 7));
//! ```

mod berlekamp;
mod forney;
mod roots;

use std::fmt;

use log::debug;
use thiserror::Error;

use crate::galois::{GfField, GfIndex, GfValue, TableResult};

/// Errors reported by [`ReedSolomon::decode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// More erasures supplied than parity symbols
    #[error("{count} erasures exceed the {max} parity symbols")]
    TooManyErasures { count: usize, max: usize },

    /// The locator degenerated; the error pattern exceeds the capability
    #[error("error pattern exceeds correction capability")]
    TooManyErrors,

    /// Chien search found fewer roots than the locator degree
    #[error("locator polynomial has {found} roots in the field, expected {expected}")]
    RootSearchFailed { found: usize, expected: usize },

    /// A quadratic locator with no Artin-Schreier solution
    #[error("quadratic locator polynomial does not factor over the field")]
    QuadraticUnsolvable,
}

impl DecodeError {
    /// Whether this reports an uncorrectable word rather than a misuse of
    /// the API
    pub fn is_uncorrectable(&self) -> bool {
        !matches!(self, DecodeError::TooManyErasures { .. })
    }
}

/// Type alias for Result with DecodeError
pub type DecodeResult = std::result::Result<usize, DecodeError>;

/// Systematic Reed-Solomon codec over GF(2^M)
///
/// Immutable after construction and safe to share across threads; encode
/// and decode only touch caller-supplied buffers.
pub struct ReedSolomon<const M: usize, const POLY: u32, const NR: usize, const FCR: u16> {
    gf: GfField<M, POLY>,
    generator: Vec<GfIndex<M, POLY>>,
}

/// BBC WHP031 RS(15, 11), corrects 2 errors
pub type Rs15_11 = ReedSolomon<4, 0b10011, 4, 1>;

/// DVB-T RS(255, 239), corrects 8 errors
pub type Rs255_239 = ReedSolomon<8, 0b1_0001_1101, 16, 1>;

/// RS(65535, 65471) over GF(2^16), corrects 32 errors
pub type Rs65535_65471 = ReedSolomon<16, 0b1_0001_0000_0000_1011, 64, 1>;

impl<const M: usize, const POLY: u32, const NR: usize, const FCR: u16>
    ReedSolomon<M, POLY, NR, FCR>
{
    /// Codeword length N = 2^M - 1
    pub const BLOCK_LEN: usize = (1 << M) - 1;
    /// Message length K = N - NR
    pub const MESSAGE_LEN: usize = Self::BLOCK_LEN - NR;
    /// Parity length NR
    pub const PARITY_LEN: usize = NR;

    /// Build the codec: field tables plus the generator polynomial
    /// g(x) = ∏ (x - α^(FCR+i)) for i in [0, NR)
    pub fn new() -> TableResult<Self> {
        assert!(NR >= 1 && NR < Self::BLOCK_LEN, "invalid parity count");
        assert!((FCR as usize) < Self::BLOCK_LEN, "invalid first root");
        let gf = GfField::<M, POLY>::new()?;

        let mut tmp = vec![GfValue::zero(); NR + 1];
        let mut root = GfIndex::new(FCR);
        let step = GfIndex::new(1);
        for i in 0..NR {
            tmp[i] = GfValue::one();
            for j in (1..=i).rev() {
                tmp[j] = gf.fma(root, tmp[j], tmp[j - 1]);
            }
            tmp[0] = gf.mul_index(tmp[0], root);
            root = root * step;
        }
        tmp[NR] = GfValue::one();
        debug!("generator = {}", PolyDisplay(&tmp));

        // All generator coefficients are nonzero (the generator is itself a
        // minimum-weight codeword), so the log-index form is total.
        let generator = tmp.iter().map(|&c| gf.index(c)).collect();
        Ok(ReedSolomon { gf, generator })
    }

    /// Systematic encode: reads `code[0..K)` as the message and overwrites
    /// `code[K..N)` with the parity symbols.
    ///
    /// The parity is the remainder of message·x^NR divided by the generator,
    /// produced by an LFSR with the generator as feedback taps.
    pub fn encode(&self, code: &mut [u16]) {
        assert_eq!(code.len(), Self::BLOCK_LEN, "codeword length mismatch");
        let k = Self::MESSAGE_LEN;
        let n = Self::BLOCK_LEN;

        for parity in code[k..].iter_mut() {
            *parity = 0;
        }
        for i in 0..k {
            let feedback = GfValue::<M, POLY>::new(code[i]) + GfValue::new(code[k]);
            if !feedback.is_zero() {
                let fb = self.gf.index(feedback);
                for j in 1..NR {
                    code[k + j - 1] = self
                        .gf
                        .fma_index(fb, self.generator[NR - j], GfValue::new(code[k + j]))
                        .value();
                }
                code[n - 1] = self.gf.value(self.generator[0] * fb).value();
            } else {
                for j in 1..NR {
                    code[k + j - 1] = code[k + j];
                }
                code[n - 1] = 0;
            }
        }
    }

    /// Evaluate the received word at every generator root, writing S_i =
    /// R(α^(FCR+i)) into `syndromes`. Returns the number of nonzero
    /// syndromes; zero means no detected error.
    pub fn compute_syndromes(&self, code: &[u16], syndromes: &mut [u16]) -> usize {
        assert_eq!(code.len(), Self::BLOCK_LEN, "codeword length mismatch");
        assert_eq!(syndromes.len(), NR, "syndrome buffer length mismatch");
        let (syn, nonzero) = self.syndromes(code);
        for (out, s) in syndromes.iter_mut().zip(syn.iter()) {
            *out = s.value();
        }
        nonzero
    }

    /// Correct `code` in place given up to NR known-erased positions.
    ///
    /// Erasure entries are codeword indices in [0, N); the erased symbols
    /// may hold arbitrary values. Returns the number of symbols actually
    /// changed, or an error for an uncorrectable word.
    pub fn decode(&self, code: &mut [u16], erasures: &[u16]) -> DecodeResult {
        assert_eq!(code.len(), Self::BLOCK_LEN, "codeword length mismatch");
        assert!(
            erasures.iter().all(|&e| (e as usize) < Self::BLOCK_LEN),
            "erasure position out of range"
        );
        if erasures.len() > NR {
            return Err(DecodeError::TooManyErasures {
                count: erasures.len(),
                max: NR,
            });
        }

        let (syndromes, nonzero) = self.syndromes(code);
        if nonzero == 0 {
            return Ok(0);
        }
        self.correct(code, &syndromes, erasures)
    }

    /// Horner evaluation of the received word at all NR roots at once
    fn syndromes(&self, code: &[u16]) -> (Vec<GfValue<M, POLY>>, usize) {
        let mut syn = vec![GfValue::<M, POLY>::new(code[0]); NR];
        let step = GfIndex::new(1);
        for &symbol in &code[1..] {
            let symbol = GfValue::new(symbol);
            let mut root = GfIndex::new(FCR);
            for s in syn.iter_mut() {
                *s = self.gf.fma(root, *s, symbol);
                root = root * step;
            }
        }
        let nonzero = syn.iter().filter(|s| !s.is_zero()).count();
        (syn, nonzero)
    }

    /// Λ(x) = ∏ (1 - x·α^(N-1-e)) over the erasure positions
    fn erasure_locator(&self, erasures: &[GfIndex<M, POLY>]) -> Vec<GfValue<M, POLY>> {
        let mut locator = vec![GfValue::zero(); NR + 1];
        locator[0] = GfValue::one();
        if let Some((&first, rest)) = erasures.split_first() {
            let top = GfIndex::new(GfIndex::<M, POLY>::MODULUS - 1);
            locator[1] = self.gf.value(top / first);
            for (i, &erasure) in rest.iter().enumerate() {
                let factor = top / erasure;
                for j in (0..=i + 1).rev() {
                    let carry = self.gf.mul_index(locator[j], factor);
                    locator[j + 1] += carry;
                }
            }
        }
        locator
    }

    fn correct(
        &self,
        code: &mut [u16],
        syndromes: &[GfValue<M, POLY>],
        erasures: &[u16],
    ) -> DecodeResult {
        debug!(
            "syndromes = {:?}",
            syndromes.iter().map(|s| s.value()).collect::<Vec<_>>()
        );
        let erasures: Vec<GfIndex<M, POLY>> =
            erasures.iter().map(|&e| GfIndex::new(e)).collect();

        let mut locator = self.erasure_locator(&erasures);
        let mut degree =
            berlekamp::berlekamp_massey(self.gf, syndromes, &mut locator, erasures.len());
        debug_assert!(degree <= NR);
        while locator[degree].is_zero() {
            if degree == 0 {
                break;
            }
            degree -= 1;
        }
        if degree == 0 {
            return Err(DecodeError::TooManyErrors);
        }
        debug!("locator = {}", PolyDisplay(&locator));

        let locations = roots::find_locations(self.gf, &locator, degree)?;
        debug!(
            "locations = {:?}",
            locations.iter().map(|l| l.index()).collect::<Vec<_>>()
        );

        let (evaluator, magnitudes) =
            forney::error_magnitudes(self.gf, FCR, syndromes, &locator, degree, &locations);
        debug!("evaluator = {}", PolyDisplay(&evaluator));
        debug!(
            "magnitudes = {:?}",
            magnitudes.iter().map(|m| m.value()).collect::<Vec<_>>()
        );

        let mut corrections = 0;
        for (&location, &magnitude) in locations.iter().zip(magnitudes.iter()) {
            code[location.index() as usize] ^= magnitude.value();
            corrections += usize::from(!magnitude.is_zero());
        }
        Ok(corrections)
    }
}

/// Human-readable polynomial rendering for debug logs, high degree first
struct PolyDisplay<'a, const M: usize, const POLY: u32>(&'a [GfValue<M, POLY>]);

impl<const M: usize, const POLY: u32> fmt::Display for PolyDisplay<'_, M, POLY> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, coeff) in self.0.iter().enumerate().skip(1).rev() {
            if coeff.is_zero() {
                continue;
            }
            if *coeff != GfValue::one() {
                write!(f, "{}*", coeff)?;
            }
            write!(f, "x")?;
            if i != 1 {
                write!(f, "^{}", i)?;
            }
            write!(f, " + ")?;
        }
        match self.0.first() {
            Some(c) => write!(f, "{}", c),
            None => write!(f, "0"),
        }
    }
}

//! Systematic Reed-Solomon error correction over GF(2^M)
//!
//! This crate implements a generic Reed-Solomon codec over arbitrary binary
//! extension fields GF(2^M), 2 <= M <= 16, with a configurable parity count
//! and first consecutive root. Decoding handles unknown errors and known
//! erasures combined, up to 2·errors + erasures <= NR.
//!
//! The pipeline is the classic one: syndrome computation, Berlekamp-Massey
//! locator synthesis (seeded with the erasure locator), root finding with
//! closed forms for degree 1 and 2 plus a Chien search beyond that, and
//! Forney magnitude evaluation, applied in place.
//!
//! ## Usage
//!
//! ```
//! use rsgf::Rs15_11;
//!
//! let rs = Rs15_11::new().unwrap();
//! let mut code = [0u16; 15];
//! code[..11].copy_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
//! rs.encode(&mut code);
//! let sent = code;
//!
//! // Two corrupted symbols are within the 2-error capability
//! code[0] ^= 7;
//! code[7] ^= 5;
//! assert_eq!(rs.decode(&mut code, &[]), Ok(2));
//! assert_eq!(code, sent);
//! ```
//!
//! Erasure positions are codeword indices; the erased symbols may hold any
//! value when `decode` is called:
//!
//! ```
//! use rsgf::Rs15_11;
//!
//! let rs = Rs15_11::new().unwrap();
//! let mut code = [0u16; 15];
//! rs.encode(&mut code);
//! code[3] = 9; // garbage at a known-bad position
//! assert_eq!(rs.decode(&mut code, &[3]), Ok(1));
//! assert_eq!(code, [0u16; 15]);
//! ```
//!
//! Custom parameterizations are type aliases away; see [`ReedSolomon`].

pub mod codec;
pub mod galois;

pub use codec::{DecodeError, DecodeResult, ReedSolomon, Rs15_11, Rs255_239, Rs65535_65471};
pub use galois::{GfField, GfIndex, GfTables, GfValue, TableError, TableResult};

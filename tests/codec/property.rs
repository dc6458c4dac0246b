//! Property-based tests for the field arithmetic and the codec
//!
//! These use proptest to validate the GF(2^M) field laws and the
//! encode/decode invariants across randomly generated inputs.

use proptest::collection::hash_set;
use proptest::prelude::*;
use rsgf::{GfField, GfTables, GfValue, Rs255_239};

type F = GfField<8, 0b1_0001_1101>;
type Value = GfValue<8, 0b1_0001_1101>;

fn gf() -> F {
    F::new().unwrap()
}

proptest! {
    /// Property: addition is commutative and self-inverse
    #[test]
    fn prop_addition_laws(a in 0u16..256, b in 0u16..256) {
        let (va, vb) = (Value::new(a), Value::new(b));
        prop_assert_eq!(va + vb, vb + va);
        prop_assert_eq!(va + vb + vb, va);
        prop_assert_eq!(va + Value::zero(), va);
    }

    /// Property: multiplication is commutative: a * b = b * a
    #[test]
    fn prop_multiplication_commutative(a in 0u16..256, b in 0u16..256) {
        let gf = gf();
        let (va, vb) = (Value::new(a), Value::new(b));
        prop_assert_eq!(gf.mul(va, vb), gf.mul(vb, va));
    }

    /// Property: multiplication is associative: (a * b) * c = a * (b * c)
    #[test]
    fn prop_multiplication_associative(
        a in 0u16..256,
        b in 0u16..256,
        c in 0u16..256,
    ) {
        let gf = gf();
        let (va, vb, vc) = (Value::new(a), Value::new(b), Value::new(c));
        prop_assert_eq!(gf.mul(gf.mul(va, vb), vc), gf.mul(va, gf.mul(vb, vc)));
    }

    /// Property: distributive law: a * (b + c) = (a * b) + (a * c)
    #[test]
    fn prop_distributive(
        a in 0u16..256,
        b in 0u16..256,
        c in 0u16..256,
    ) {
        let gf = gf();
        let (va, vb, vc) = (Value::new(a), Value::new(b), Value::new(c));
        prop_assert_eq!(gf.mul(va, vb + vc), gf.mul(va, vb) + gf.mul(va, vc));
    }

    /// Property: one is the multiplicative identity and every nonzero
    /// element has a working reciprocal
    #[test]
    fn prop_multiplicative_inverses(a in 1u16..256) {
        let gf = gf();
        let va = Value::new(a);
        prop_assert_eq!(gf.mul(va, Value::one()), va);
        prop_assert_eq!(gf.mul(va, gf.rcp(va)), Value::one());
        prop_assert_eq!(gf.div(va, va), Value::one());
    }

    /// Property: every encoded word has all-zero syndromes and decodes
    /// to itself with no corrections
    #[test]
    fn prop_encode_then_decode_is_identity(
        message in proptest::collection::vec(0u16..256, 239),
    ) {
        let rs = Rs255_239::new().unwrap();
        let mut code = [0u16; 255];
        code[..239].copy_from_slice(&message);
        rs.encode(&mut code);
        let sent = code;

        let mut syndromes = [0u16; 16];
        prop_assert_eq!(rs.compute_syndromes(&code, &mut syndromes), 0);

        prop_assert_eq!(rs.decode(&mut code, &[]), Ok(0));
        prop_assert_eq!(code, sent);
    }

    /// Property: any error pattern within half the parity budget is
    /// corrected exactly
    #[test]
    fn prop_correctable_patterns_roundtrip(
        message in proptest::collection::vec(0u16..256, 239),
        positions in hash_set(0usize..255, 1..=8),
        seed_value in 1u16..256,
    ) {
        let rs = Rs255_239::new().unwrap();
        let mut code = [0u16; 255];
        code[..239].copy_from_slice(&message);
        rs.encode(&mut code);
        let sent = code;

        // Derive per-position nonzero corruption from the seed so the
        // pattern varies but never degenerates to a no-op
        for (i, &p) in positions.iter().enumerate() {
            let flip = 1 + (seed_value as usize + i * 37) % 255;
            code[p] ^= flip as u16;
        }
        prop_assert_eq!(rs.decode(&mut code, &[]), Ok(positions.len()));
        prop_assert_eq!(code, sent);
    }
}

#[test]
fn test_table_consistency() {
    let tables = GfTables::cached(8, 0b1_0001_1101).unwrap();
    for i in 0..255u16 {
        assert_eq!(tables.log(tables.exp(i)), i);
    }
    for v in 1..=255u16 {
        assert_eq!(tables.exp(tables.log(v)), v);
    }
    assert_eq!(tables.order(), 255);
}

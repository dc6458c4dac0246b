//! End-to-end encode/corrupt/decode round trips
//!
//! Exercises the standard parametrizations across the error-count range,
//! from the clean channel up to one error beyond capability.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rsgf::{DecodeError, Rs15_11, Rs255_239, Rs65535_65471};

#[test]
fn test_clean_codeword_needs_no_correction() {
    let rs = Rs15_11::new().unwrap();
    let mut code = [0u16; 15];
    code[..11].copy_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
    rs.encode(&mut code);
    let sent = code;

    assert_eq!(rs.decode(&mut code, &[]), Ok(0));
    assert_eq!(code, sent);
}

#[test]
fn test_rs15_two_errors() {
    let rs = Rs15_11::new().unwrap();
    let mut code = [0u16; 15];
    code[..11].copy_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
    rs.encode(&mut code);
    let sent = code;

    code[0] ^= 7;
    code[7] ^= 5;
    assert_eq!(rs.decode(&mut code, &[]), Ok(2));
    assert_eq!(code, sent);
}

#[test]
fn test_rs15_two_errors_sparse_message() {
    let rs = Rs15_11::new().unwrap();
    let mut code = [0u16; 15];
    code[0] = 8;
    rs.encode(&mut code);
    let sent = code;

    code[4] ^= 11;
    code[13] ^= 2;
    assert_eq!(rs.decode(&mut code, &[]), Ok(2));
    assert_eq!(code, sent);
}

#[test]
fn test_rs15_three_errors_detected_as_uncorrectable() {
    // One error beyond capability; this pattern leaves the locator without
    // roots in the field, so the decoder must refuse rather than guess
    let rs = Rs15_11::new().unwrap();
    let mut code = [0u16; 15];
    rs.encode(&mut code);

    code[2] ^= 3;
    code[5] ^= 7;
    code[11] ^= 9;
    let err = rs.decode(&mut code, &[]).unwrap_err();
    assert_eq!(err, DecodeError::QuadraticUnsolvable);
    assert!(err.is_uncorrectable());
}

#[test]
fn test_rs255_zero_message_encodes_to_zero() {
    let rs = Rs255_239::new().unwrap();
    let mut code = [0u16; 255];
    rs.encode(&mut code);
    assert!(code.iter().all(|&s| s == 0));
}

#[test]
fn test_rs255_eight_errors_at_capability() {
    let rs = Rs255_239::new().unwrap();
    let mut code = [0u16; 255];
    rs.encode(&mut code);

    let positions = [0usize, 17, 33, 64, 100, 150, 200, 254];
    let values = [1u16, 2, 4, 8, 16, 32, 64, 128];
    for (&p, &v) in positions.iter().zip(values.iter()) {
        code[p] ^= v;
    }
    assert_eq!(rs.decode(&mut code, &[]), Ok(8));
    assert!(code.iter().all(|&s| s == 0));
}

#[test]
fn test_rs255_random_messages_roundtrip() {
    let rs = Rs255_239::new().unwrap();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for errors in 1..=8usize {
        let mut code = [0u16; 255];
        for symbol in code[..239].iter_mut() {
            *symbol = rng.gen_range(0..256);
        }
        rs.encode(&mut code);
        let sent = code;

        let mut hit = [false; 255];
        let mut placed = 0;
        while placed < errors {
            let p = rng.gen_range(0..255);
            if !hit[p] {
                hit[p] = true;
                code[p] ^= rng.gen_range(1..256) as u16;
                placed += 1;
            }
        }
        assert_eq!(rs.decode(&mut code, &[]), Ok(errors));
        assert_eq!(code, sent, "{} errors", errors);
    }
}

#[test]
fn test_rs65535_thirtytwo_random_errors() {
    let rs = Rs65535_65471::new().unwrap();
    let mut rng = StdRng::seed_from_u64(0xfec);

    let mut code = vec![0u16; 65535];
    for symbol in code[..65471].iter_mut() {
        *symbol = rng.gen();
    }
    rs.encode(&mut code);
    let sent = code.clone();

    let mut hit = vec![false; 65535];
    let mut placed = 0;
    while placed < 32 {
        let p = rng.gen_range(0..65535);
        if !hit[p] {
            hit[p] = true;
            code[p] ^= rng.gen_range(1..65536) as u16;
            placed += 1;
        }
    }
    assert_eq!(rs.decode(&mut code, &[]), Ok(32));
    assert_eq!(code, sent);
}

#[test]
fn test_decode_diagnostics_with_logging() {
    // Run a multi-error correction with the logger wired up so the debug
    // dumps (generator, syndromes, locator, locations, evaluator,
    // magnitudes) render; `RUST_LOG=debug` makes them visible
    let _ = env_logger::builder().is_test(true).try_init();

    let rs = Rs255_239::new().unwrap();
    let mut code = [0u16; 255];
    code[..239].copy_from_slice(&[0x5A; 239]);
    rs.encode(&mut code);
    let sent = code;

    // Four errors force the Chien path, so every stage logs
    for (p, v) in [(3usize, 0x11u16), (60, 0x22), (127, 0x44), (200, 0x88)] {
        code[p] ^= v;
    }
    assert_eq!(rs.decode(&mut code, &[]), Ok(4));
    assert_eq!(code, sent);
}

#[test]
fn test_syndromes_reflect_corruption() {
    let rs = Rs15_11::new().unwrap();
    let mut code = [0u16; 15];
    code[..11].copy_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
    rs.encode(&mut code);

    let mut syndromes = [0u16; 4];
    assert_eq!(rs.compute_syndromes(&code, &mut syndromes), 0);

    code[3] ^= 1;
    assert!(rs.compute_syndromes(&code, &mut syndromes) > 0);
}

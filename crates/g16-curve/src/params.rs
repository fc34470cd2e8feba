// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! BN254 curve parameters shared by every backend.

use num_bigint::BigUint;
use std::sync::OnceLock;

/// Scalar-field modulus `r` in decimal, as published with the curve parameters.
pub const SCALAR_MODULUS_DEC: &str =
    "21888242871839275222246405745257275088548364400416034343698204186575808495617";

/// Scalar-field modulus `r`, big-endian.
pub const SCALAR_MODULUS_BE: [u8; 32] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58, 0x5d,
    0x28, 0x33, 0xe8, 0x48, 0x79, 0xb9, 0x70, 0x91, 0x43, 0xe1, 0xf5, 0x93, 0xf0, 0x00, 0x00, 0x01,
];

/// Width of one serialized base-field coordinate.
pub const COORDINATE_LEN: usize = 32;

/// `r` as an arbitrary-precision integer. Initialized once, read-only afterwards.
pub fn scalar_modulus() -> &'static BigUint {
    static MODULUS: OnceLock<BigUint> = OnceLock::new();
    MODULUS.get_or_init(|| BigUint::from_bytes_be(&SCALAR_MODULUS_BE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::PrimeField;

    #[test]
    fn modulus_bytes_match_decimal() {
        let dec = BigUint::parse_bytes(SCALAR_MODULUS_DEC.as_bytes(), 10).unwrap();
        assert_eq!(scalar_modulus(), &dec);
    }

    #[test]
    fn modulus_matches_arkworks_fr() {
        let ark: BigUint = ark_bn254::Fr::MODULUS.into();
        assert_eq!(scalar_modulus(), &ark);
    }

    #[test]
    fn modulus_is_254_bits() {
        assert_eq!(scalar_modulus().bits(), 254);
    }
}

// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Arkworks BN254 backend.
//!
//! # Byte layout
//!
//! Points use the EIP-197 layout (go-ethereum `bn256`, Ethereum alt_bn128
//! precompiles), not arkworks' little-endian canonical form:
//!
//! - **G1**: 64 bytes, `x ‖ y`, each coordinate 32 bytes big-endian.
//! - **G2**: 128 bytes, `x.c1 ‖ x.c0 ‖ y.c1 ‖ y.c0` (imaginary part first).
//! - All-zero bytes are the point at infinity.

use ark_bn254::{Bn254, Fq, Fq2, Fr, G1Affine, G2Affine};
use ark_ec::pairing::Pairing;
use ark_ec::short_weierstrass::{Affine, SWCurveConfig};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{BigInt, BigInteger, One, PrimeField};
use num_bigint::BigUint;

use crate::backend::{PairingBackend, PointError};
use crate::params::{scalar_modulus, COORDINATE_LEN};

/// BN254 via `ark-bn254`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArkBn254;

/// Parse one 32-byte big-endian coordinate, refusing values `>= p`.
fn fq_from_be(chunk: &[u8], index: usize) -> Result<Fq, PointError> {
    let mut limbs = [0u64; 4];
    for (limb, word) in limbs.iter_mut().zip(chunk.rchunks(8)) {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(word);
        *limb = u64::from_be_bytes(buf);
    }
    Fq::from_bigint(BigInt::new(limbs)).ok_or(PointError::NonCanonicalCoordinate { index })
}

fn fq_to_be(fq: &Fq, out: &mut Vec<u8>) {
    out.extend_from_slice(&fq.into_bigint().to_bytes_be());
}

fn check_len(bytes: &[u8], expected: usize) -> Result<(), PointError> {
    if bytes.len() != expected {
        return Err(PointError::InvalidLength {
            expected,
            found: bytes.len(),
        });
    }
    Ok(())
}

fn validated<P: SWCurveConfig>(point: Affine<P>) -> Result<Affine<P>, PointError> {
    if !point.is_on_curve() {
        return Err(PointError::NotOnCurve);
    }
    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(PointError::NotInSubgroup);
    }
    Ok(point)
}

impl PairingBackend for ArkBn254 {
    type G1 = G1Affine;
    type G2 = G2Affine;

    const G1_LEN: usize = 2 * COORDINATE_LEN;
    const G2_LEN: usize = 4 * COORDINATE_LEN;

    fn g1_from_bytes(bytes: &[u8]) -> Result<G1Affine, PointError> {
        check_len(bytes, Self::G1_LEN)?;
        if bytes.iter().all(|b| *b == 0) {
            return Ok(G1Affine::zero());
        }
        let x = fq_from_be(&bytes[..32], 0)?;
        let y = fq_from_be(&bytes[32..], 1)?;
        validated(G1Affine::new_unchecked(x, y))
    }

    fn g2_from_bytes(bytes: &[u8]) -> Result<G2Affine, PointError> {
        check_len(bytes, Self::G2_LEN)?;
        if bytes.iter().all(|b| *b == 0) {
            return Ok(G2Affine::zero());
        }
        let x_c1 = fq_from_be(&bytes[..32], 0)?;
        let x_c0 = fq_from_be(&bytes[32..64], 1)?;
        let y_c1 = fq_from_be(&bytes[64..96], 2)?;
        let y_c0 = fq_from_be(&bytes[96..], 3)?;
        let x = Fq2::new(x_c0, x_c1);
        let y = Fq2::new(y_c0, y_c1);
        validated(G2Affine::new_unchecked(x, y))
    }

    fn g1_to_bytes(point: &G1Affine) -> Vec<u8> {
        if point.is_zero() {
            return vec![0u8; Self::G1_LEN];
        }
        let mut out = Vec::with_capacity(Self::G1_LEN);
        fq_to_be(&point.x, &mut out);
        fq_to_be(&point.y, &mut out);
        out
    }

    fn g2_to_bytes(point: &G2Affine) -> Vec<u8> {
        if point.is_zero() {
            return vec![0u8; Self::G2_LEN];
        }
        let mut out = Vec::with_capacity(Self::G2_LEN);
        fq_to_be(&point.x.c1, &mut out);
        fq_to_be(&point.x.c0, &mut out);
        fq_to_be(&point.y.c1, &mut out);
        fq_to_be(&point.y.c0, &mut out);
        out
    }

    fn g1_identity() -> G1Affine {
        G1Affine::zero()
    }

    fn g1_add(a: &G1Affine, b: &G1Affine) -> G1Affine {
        (a.into_group() + b).into_affine()
    }

    fn g1_neg(point: &G1Affine) -> G1Affine {
        -*point
    }

    fn g1_mul(point: &G1Affine, scalar: &BigUint) -> G1Affine {
        let scalar = Fr::from_le_bytes_mod_order(&scalar.to_bytes_le());
        (point.into_group() * scalar).into_affine()
    }

    fn pairing_product_is_identity(pairs: &[(G1Affine, G2Affine)]) -> bool {
        let (g1, g2): (Vec<G1Affine>, Vec<G2Affine>) = pairs.iter().copied().unzip();
        Bn254::multi_pairing(g1, g2).0.is_one()
    }

    fn scalar_modulus() -> &'static BigUint {
        scalar_modulus()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::UniformRand;
    use ark_std::rand::{rngs::StdRng, SeedableRng};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn g1_generator_layout() {
        let bytes = ArkBn254::g1_to_bytes(&G1Affine::generator());
        assert_eq!(bytes.len(), 64);
        // generator is (1, 2)
        assert_eq!(bytes[31], 1);
        assert_eq!(bytes[63], 2);
        assert!(bytes[..31].iter().all(|b| *b == 0));
        assert_eq!(ArkBn254::g1_from_bytes(&bytes).unwrap(), G1Affine::generator());
    }

    #[test]
    fn g2_bytes_put_imaginary_part_first() {
        let g = G2Affine::generator();
        let bytes = ArkBn254::g2_to_bytes(&g);
        assert_eq!(bytes[..32], g.x.c1.into_bigint().to_bytes_be()[..]);
        assert_eq!(bytes[32..64], g.x.c0.into_bigint().to_bytes_be()[..]);
        assert_eq!(ArkBn254::g2_from_bytes(&bytes).unwrap(), g);
    }

    #[test]
    fn zero_bytes_are_identity() {
        assert!(ArkBn254::g1_from_bytes(&[0u8; 64]).unwrap().is_zero());
        assert!(ArkBn254::g2_from_bytes(&[0u8; 128]).unwrap().is_zero());
        assert_eq!(ArkBn254::g1_to_bytes(&G1Affine::zero()), vec![0u8; 64]);
        assert_eq!(ArkBn254::g2_to_bytes(&G2Affine::zero()), vec![0u8; 128]);
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            ArkBn254::g1_from_bytes(&[0u8; 63]),
            Err(PointError::InvalidLength { expected: 64, found: 63 })
        );
        assert_eq!(
            ArkBn254::g2_from_bytes(&[0u8; 129]),
            Err(PointError::InvalidLength { expected: 128, found: 129 })
        );
    }

    #[test]
    fn rejects_off_curve() {
        let mut bytes = [0u8; 64];
        bytes[31] = 1;
        bytes[63] = 1;
        assert_eq!(ArkBn254::g1_from_bytes(&bytes), Err(PointError::NotOnCurve));
    }

    #[test]
    fn rejects_non_canonical_coordinate() {
        // x = p, which would alias x = 0
        let p: BigUint = Fq::MODULUS.into();
        let mut bytes = vec![0u8; 64];
        let p_bytes = p.to_bytes_be();
        bytes[32 - p_bytes.len()..32].copy_from_slice(&p_bytes);
        bytes[63] = 2;
        assert_eq!(
            ArkBn254::g1_from_bytes(&bytes),
            Err(PointError::NonCanonicalCoordinate { index: 0 })
        );
    }

    #[test]
    fn rejects_g2_outside_subgroup() {
        let point = (1u64..)
            .filter_map(|i| G2Affine::get_point_from_x_unchecked(Fq2::from(i), false))
            .find(|p| !p.is_in_correct_subgroup_assuming_on_curve())
            .unwrap();
        let bytes = ArkBn254::g2_to_bytes(&point);
        assert_eq!(ArkBn254::g2_from_bytes(&bytes), Err(PointError::NotInSubgroup));
    }

    #[test]
    fn mul_and_add_agree() {
        let g = G1Affine::generator();
        let two = ArkBn254::g1_mul(&g, &BigUint::from(2u8));
        assert_eq!(two, ArkBn254::g1_add(&g, &g));
        let zero = ArkBn254::g1_add(&g, &ArkBn254::g1_neg(&g));
        assert_eq!(zero, ArkBn254::g1_identity());
    }

    #[test]
    fn pairing_bilinearity() {
        let mut rng = rng();
        let a = Fr::rand(&mut rng);
        let a_big: BigUint = a.into_bigint().into();
        let g1 = G1Affine::generator();
        let g2 = G2Affine::generator();
        let a_g1 = ArkBn254::g1_mul(&g1, &a_big);
        let a_g2 = (g2.into_group() * a).into_affine();

        // e(aG1, G2) · e(-G1, aG2) = 1
        assert!(ArkBn254::pairing_product_is_identity(&[
            (a_g1, g2),
            (ArkBn254::g1_neg(&g1), a_g2),
        ]));
        assert!(!ArkBn254::pairing_product_is_identity(&[(a_g1, g2), (g1, a_g2)]));
    }

    #[test]
    fn random_points_roundtrip() {
        let mut rng = rng();
        for _ in 0..8 {
            let p1 = ark_bn254::G1Projective::rand(&mut rng).into_affine();
            let p2 = ark_bn254::G2Projective::rand(&mut rng).into_affine();
            let b1 = ArkBn254::g1_to_bytes(&p1);
            let b2 = ArkBn254::g2_to_bytes(&p2);
            assert_eq!(ArkBn254::g1_from_bytes(&b1).unwrap(), p1);
            assert_eq!(ArkBn254::g2_from_bytes(&b2).unwrap(), p2);
        }
    }
}

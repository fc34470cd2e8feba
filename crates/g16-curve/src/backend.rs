// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! The capability boundary between Groth16 verification and curve arithmetic.
//!
//! Verification only needs a handful of operations from a pairing-friendly
//! curve: build a validated point from bytes, the group law on G1 and a
//! batched pairing check. [`PairingBackend`] names exactly those, so the
//! decoder and verifier never touch field arithmetic directly.

use num_bigint::BigUint;
use std::fmt::Debug;

/// Why a byte string was refused by a point deserializer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PointError {
    #[error("expected {expected} bytes, found {found}")]
    InvalidLength { expected: usize, found: usize },

    #[error("coordinate {index} is not a canonical base-field element")]
    NonCanonicalCoordinate { index: usize },

    #[error("point is not on the curve")]
    NotOnCurve,

    #[error("point is not in the prime-order subgroup")]
    NotInSubgroup,
}

/// Pairing-friendly curve operations used by the Groth16 verifier.
///
/// Point types are only ever produced by [`g1_from_bytes`](Self::g1_from_bytes),
/// [`g2_from_bytes`](Self::g2_from_bytes) or group operations on points that
/// came from them, so holding a `G1`/`G2` means holding a validated point.
pub trait PairingBackend {
    type G1: Clone + Debug + PartialEq + Send + Sync;
    type G2: Clone + Debug + PartialEq + Send + Sync;

    /// Serialized width of a G1 point.
    const G1_LEN: usize;
    /// Serialized width of a G2 point.
    const G2_LEN: usize;

    fn g1_from_bytes(bytes: &[u8]) -> Result<Self::G1, PointError>;
    fn g2_from_bytes(bytes: &[u8]) -> Result<Self::G2, PointError>;

    fn g1_to_bytes(point: &Self::G1) -> Vec<u8>;
    fn g2_to_bytes(point: &Self::G2) -> Vec<u8>;

    fn g1_identity() -> Self::G1;
    fn g1_add(a: &Self::G1, b: &Self::G1) -> Self::G1;
    fn g1_neg(point: &Self::G1) -> Self::G1;

    /// `scalar` must already be reduced below [`scalar_modulus`](Self::scalar_modulus).
    fn g1_mul(point: &Self::G1, scalar: &BigUint) -> Self::G1;

    /// True iff `Π e(g1_i, g2_i)` is the identity of the target group.
    fn pairing_product_is_identity(pairs: &[(Self::G1, Self::G2)]) -> bool;

    fn scalar_modulus() -> &'static BigUint;
}

// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Decoded Groth16 values.

use g16_curve::{ArkBn254, PairingBackend};

/// Groth16 verification key.
///
/// IC is a unified vector: ic[0] is the constant term, ic[1..] are the
/// coefficients for public inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct VerificationKey<B: PairingBackend = ArkBn254> {
    pub alpha: B::G1,
    pub beta: B::G2,
    pub gamma: B::G2,
    pub delta: B::G2,
    /// ic[0] is the constant term, ic[1..] match public inputs
    pub ic: Vec<B::G1>,
}

impl<B: PairingBackend> VerificationKey<B> {
    /// Number of public inputs this key expects.
    pub fn num_inputs(&self) -> usize {
        self.ic.len().saturating_sub(1)
    }
}

/// Groth16 proof.
#[derive(Clone, Debug, PartialEq)]
pub struct Proof<B: PairingBackend = ArkBn254> {
    pub a: B::G1,
    pub b: B::G2,
    pub c: B::G1,
}

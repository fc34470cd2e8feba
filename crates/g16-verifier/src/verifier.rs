// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Groth16 verification over decoded values.
//!
//! Algorithm:
//! 1. Arity: `len(inputs) + 1 == len(IC)`
//! 2. Every input strictly below the scalar modulus `r`
//! 3. `vkX = IC[0] + Σ IC[i+1]·input[i]`, accumulated from the identity
//! 4. Check: `e(A,B) · e(-α,β) · e(-vkX,γ) · e(-C,δ) == 1`

use g16_codec::{Proof, Scalar, VerificationKey};
use g16_curve::PairingBackend;
use num_bigint::BigUint;
use tracing::{debug, trace};

use crate::error::{VerifyError, VerifyResult};

/// Progress of one verification call, as reported in trace events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Start,
    InputsValidated,
    LinearCombinationComputed,
    PairingChecked,
}

pub fn verify_decoded<B: PairingBackend>(
    vk: &VerificationKey<B>,
    proof: &Proof<B>,
    inputs: &[Scalar],
) -> VerifyResult<()> {
    trace!(stage = ?Stage::Start, inputs = inputs.len(), ic = vk.ic.len());

    check_arity(vk.ic.len(), inputs.len())?;
    check_field(inputs, B::scalar_modulus())?;
    trace!(stage = ?Stage::InputsValidated);

    let vk_x = linear_combination::<B>(&vk.ic, inputs);
    trace!(stage = ?Stage::LinearCombinationComputed);

    let pairs = [
        (proof.a.clone(), proof.b.clone()),
        (B::g1_neg(&vk.alpha), vk.beta.clone()),
        (B::g1_neg(&vk_x), vk.gamma.clone()),
        (B::g1_neg(&proof.c), vk.delta.clone()),
    ];
    let ok = B::pairing_product_is_identity(&pairs);
    trace!(stage = ?Stage::PairingChecked, ok);

    if !ok {
        debug!("pairing product is not the identity");
        return Err(VerifyError::PairingCheckFailed);
    }
    Ok(())
}

fn check_arity(ic: usize, inputs: usize) -> VerifyResult<()> {
    if inputs.checked_add(1) != Some(ic) {
        debug!(inputs, ic, "arity mismatch");
        return Err(VerifyError::ArityMismatch { inputs, ic });
    }
    Ok(())
}

fn check_field(inputs: &[Scalar], modulus: &BigUint) -> VerifyResult<()> {
    match inputs.iter().position(|s| !s.is_below(modulus)) {
        Some(index) => {
            debug!(index, "public input outside the scalar field");
            Err(VerifyError::InputOutOfField {
                index,
                value: inputs[index].clone(),
            })
        }
        None => Ok(()),
    }
}

/// `IC[0] + Σ IC[i+1]·input[i]`. Callers check arity first.
pub fn linear_combination<B: PairingBackend>(ic: &[B::G1], inputs: &[Scalar]) -> B::G1 {
    let mut terms = ic.iter();
    let mut acc = B::g1_identity();
    if let Some(constant) = terms.next() {
        acc = B::g1_add(&acc, constant);
    }
    for (point, input) in terms.zip(inputs) {
        acc = B::g1_add(&acc, &B::g1_mul(point, input.as_biguint()));
    }
    acc
}

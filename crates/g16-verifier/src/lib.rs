// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # g16-verifier
//!
//! Groth16 proof verification over BN254 for snarkjs-style JSON keys and proofs.
//!
//! ## Crate layout
//!
//! | Module | Purpose |
//! |---|---|
//! | [`verifier`] | Arity check, field check, linear combination, pairing check |
//! | [`error`] | [`VerifyError`] and the top-level [`Error`] |
//!
//! Decoding lives in [`g16_codec`], curve arithmetic behind
//! [`g16_curve::PairingBackend`].
//!
//! ## Example
//!
//! ```rust,no_run
//! # fn example(proof_json: &[u8], vk_json: &[u8]) {
//! match g16_verifier::verify(proof_json, vk_json, &["14", "42"]) {
//!     Ok(()) => println!("valid"),
//!     Err(e) if e.is_invalid_proof() => println!("proof rejected"),
//!     Err(e) => println!("bad input: {e}"),
//! }
//! # }
//! ```

pub mod error;
pub mod verifier;

pub use error::{Error, Result, VerifyError, VerifyResult};
pub use verifier::{linear_combination, verify_decoded, Stage};

pub use g16_codec::{DecodeError, Proof, Scalar, VerificationKey};
pub use g16_curve::{ArkBn254, PairingBackend};

use g16_codec::{decode_proof, decode_public_inputs, decode_verification_key};
use tracing::{debug, instrument};

/// Decode and verify on BN254.
///
/// `Ok(())` means the proof verifies. [`Error::is_invalid_proof`] separates
/// a proof that does not verify from malformed input.
pub fn verify<S: AsRef<str>>(
    proof_bytes: &[u8],
    vk_bytes: &[u8],
    public_inputs: &[S],
) -> Result<()> {
    verify_with::<ArkBn254, S>(proof_bytes, vk_bytes, public_inputs)
}

/// [`verify`] over any [`PairingBackend`].
#[instrument(
    level = "debug",
    skip_all,
    fields(proof_len = proof_bytes.len(), vk_len = vk_bytes.len(), inputs = public_inputs.len())
)]
pub fn verify_with<B: PairingBackend, S: AsRef<str>>(
    proof_bytes: &[u8],
    vk_bytes: &[u8],
    public_inputs: &[S],
) -> Result<()> {
    let vk = decode_verification_key::<B>(vk_bytes)?;
    let proof = decode_proof::<B>(proof_bytes)?;
    let inputs = decode_public_inputs(public_inputs)?;

    verify_decoded(&vk, &proof, &inputs)?;
    debug!("proof verified");
    Ok(())
}

// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # g16-codec
//!
//! Decodes snarkjs-style Groth16 verification keys, proofs and public inputs
//! into validated curve points and scalars, and encodes them back.
//!
//! ## Crate layout
//!
//! | Module | Purpose |
//! |---|---|
//! | [`scalar`] | [`Scalar`] and [`decode_scalar`] (decimal / `0x` hex) |
//! | [`encoding`] | Encoding detection and the legacy point-format rules |
//! | [`point`] | [`decode_g1`] / [`decode_g2`] |
//! | [`json`] | JSON documents and the structural decoders |
//! | [`encode`] | The inverse serializers |
//! | [`types`] | [`VerificationKey`] / [`Proof`] |
//! | [`error`] | [`DecodeError`] with field paths |
//!
//! ## Example
//!
//! ```rust,no_run
//! use g16_codec::{decode_proof, decode_public_inputs, decode_verification_key};
//! use g16_curve::ArkBn254;
//!
//! # fn example(vk_json: &[u8], proof_json: &[u8]) -> Result<(), g16_codec::DecodeError> {
//! let vk = decode_verification_key::<ArkBn254>(vk_json)?;
//! let proof = decode_proof::<ArkBn254>(proof_json)?;
//! let inputs = decode_public_inputs(&["14"])?;
//! assert_eq!(inputs.len(), vk.num_inputs());
//! # let _ = proof;
//! # Ok(())
//! # }
//! ```

pub mod encode;
pub mod encoding;
pub mod error;
pub mod json;
pub mod point;
pub mod scalar;
pub mod types;

pub use encode::{encode_g1, encode_g2, encode_scalar};
pub use encoding::{legacy_placeholder_zero, reverse_columns, Encoding};
pub use error::{DecodeError, DecodeResult, FieldPath};
pub use json::{
    decode_proof, decode_public_inputs, decode_verification_key, ProofJson, VerificationKeyJson,
};
pub use point::{decode_g1, decode_g2};
pub use scalar::{decode_scalar, Scalar};
pub use types::{Proof, VerificationKey};

// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! snarkjs-style JSON documents and the structural decoders built on them.
//!
//! ```json
//! {
//!   "protocol": "groth16", "curve": "bn128", "nPublic": 1,
//!   "vk_alpha_1": ["x", "y", "1"],
//!   "vk_beta_2":  [["x0", "x1"], ["y0", "y1"], ["1", "0"]],
//!   "vk_gamma_2": [...], "vk_delta_2": [...],
//!   "IC": [["x", "y", "1"], ["x", "y", "1"]]
//! }
//! ```
//!
//! Proofs carry `A`, `B`, `C` (or the snarkjs names `pi_a`, `pi_b`, `pi_c`).
//! Metadata fields are optional; when present they must agree with the data.
//! The first failing field aborts decoding.

use g16_curve::PairingBackend;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{DecodeError, DecodeResult};
use crate::point::{decode_g1, decode_g2};
use crate::scalar::{decode_scalar, Scalar};
use crate::types::{Proof, VerificationKey};

pub const PROTOCOL: &str = "groth16";
pub const CURVE: &str = "bn128";
const CURVE_ALIASES: [&str; 3] = ["bn128", "bn254", "alt_bn128"];

/// JSON shape of a verification key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VerificationKeyJson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<String>,
    #[serde(rename = "nPublic", default, skip_serializing_if = "Option::is_none")]
    pub n_public: Option<u64>,
    pub vk_alpha_1: Vec<String>,
    pub vk_beta_2: Vec<Vec<String>>,
    pub vk_gamma_2: Vec<Vec<String>>,
    pub vk_delta_2: Vec<Vec<String>>,
    #[serde(rename = "IC")]
    pub ic: Vec<Vec<String>>,
}

/// JSON shape of a proof.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProofJson {
    #[serde(rename = "pi_a", alias = "A")]
    pub a: Vec<String>,
    #[serde(rename = "pi_b", alias = "B")]
    pub b: Vec<Vec<String>>,
    #[serde(rename = "pi_c", alias = "C")]
    pub c: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<String>,
}

fn parse_document<T: DeserializeOwned>(bytes: &[u8], what: &str) -> DecodeResult<T> {
    serde_json::from_slice(bytes).map_err(|e| DecodeError::structure(what, e.to_string()))
}

fn check_metadata(protocol: Option<&str>, curve: Option<&str>) -> DecodeResult<()> {
    if let Some(p) = protocol {
        if p != PROTOCOL {
            return Err(DecodeError::structure(
                "protocol",
                format!("expected {PROTOCOL:?}, found {p:?}"),
            ));
        }
    }
    if let Some(c) = curve {
        let lower = c.to_ascii_lowercase();
        if !CURVE_ALIASES.contains(&lower.as_str()) {
            return Err(DecodeError::structure(
                "curve",
                format!("unsupported curve {c:?}"),
            ));
        }
    }
    Ok(())
}

impl VerificationKeyJson {
    pub fn to_key<B: PairingBackend>(&self) -> DecodeResult<VerificationKey<B>> {
        check_metadata(self.protocol.as_deref(), self.curve.as_deref())?;
        if let Some(n) = self.n_public {
            if n.checked_add(1) != Some(self.ic.len() as u64) {
                return Err(DecodeError::structure(
                    "nPublic",
                    format!("{n} public inputs but {} IC points", self.ic.len()),
                ));
            }
        }

        let alpha = decode_g1::<B, _>(&self.vk_alpha_1).map_err(|e| e.within("vk_alpha_1"))?;
        let beta = decode_g2::<B, _, _>(&self.vk_beta_2).map_err(|e| e.within("vk_beta_2"))?;
        let gamma = decode_g2::<B, _, _>(&self.vk_gamma_2).map_err(|e| e.within("vk_gamma_2"))?;
        let delta = decode_g2::<B, _, _>(&self.vk_delta_2).map_err(|e| e.within("vk_delta_2"))?;
        let ic = self
            .ic
            .iter()
            .enumerate()
            .map(|(i, p)| decode_g1::<B, _>(p).map_err(|e| e.within(&format!("IC[{i}]"))))
            .collect::<DecodeResult<Vec<_>>>()?;

        Ok(VerificationKey {
            alpha,
            beta,
            gamma,
            delta,
            ic,
        })
    }
}

impl ProofJson {
    pub fn to_proof<B: PairingBackend>(&self) -> DecodeResult<Proof<B>> {
        check_metadata(self.protocol.as_deref(), self.curve.as_deref())?;
        Ok(Proof {
            a: decode_g1::<B, _>(&self.a).map_err(|e| e.within("A"))?,
            b: decode_g2::<B, _, _>(&self.b).map_err(|e| e.within("B"))?,
            c: decode_g1::<B, _>(&self.c).map_err(|e| e.within("C"))?,
        })
    }
}

/// Decode a verification key from its JSON bytes.
#[instrument(level = "debug", skip_all, fields(len = bytes.len()))]
pub fn decode_verification_key<B: PairingBackend>(
    bytes: &[u8],
) -> DecodeResult<VerificationKey<B>> {
    let json: VerificationKeyJson = parse_document(bytes, "verification_key")?;
    let vk = json.to_key()?;
    debug!(ic = vk.ic.len(), "decoded verification key");
    Ok(vk)
}

/// Decode a proof from its JSON bytes.
#[instrument(level = "debug", skip_all, fields(len = bytes.len()))]
pub fn decode_proof<B: PairingBackend>(bytes: &[u8]) -> DecodeResult<Proof<B>> {
    let json: ProofJson = parse_document(bytes, "proof")?;
    json.to_proof()
}

/// Decode public inputs, keeping their order.
pub fn decode_public_inputs<S: AsRef<str>>(inputs: &[S]) -> DecodeResult<Vec<Scalar>> {
    inputs
        .iter()
        .enumerate()
        .map(|(i, s)| {
            decode_scalar(s.as_ref()).map_err(|e| e.within(&format!("public_inputs[{i}]")))
        })
        .collect()
}

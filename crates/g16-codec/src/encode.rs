// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Point / key / proof → snarkjs-style string serialization.
//!
//! The inverse of the decoders, built on the backend's canonical byte
//! layout so that decode → encode → decode reproduces identical bytes.
//!
//! # Forms
//!
//! - **Decimal**: snarkjs projective form. G1 `[x, y, "1"]`, G2
//!   `[[x0, x1], [y0, y1], ["1", "0"]]`. The identity is `["0", "1", "0"]` /
//!   `[["0", "0"], ["1", "0"], ["0", "0"]]`.
//! - **Hex**: `0x` + 64 digits per coordinate, G2 rows in byte-layout
//!   order `[[x1, x0], [y1, y0]]`.
//!
//! A decimal coordinate equal to `1` cannot survive decoding, because the
//! decoder reads `"1"` as zero. Use the hex form for such points.

use g16_curve::{PairingBackend, COORDINATE_LEN};
use num_bigint::BigUint;

use crate::encoding::Encoding;
use crate::json::{ProofJson, VerificationKeyJson, CURVE, PROTOCOL};
use crate::scalar::Scalar;
use crate::types::{Proof, VerificationKey};

fn coordinates(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    bytes.chunks(COORDINATE_LEN)
}

fn decimal(coordinate: &[u8]) -> String {
    BigUint::from_bytes_be(coordinate).to_string()
}

fn hex_coordinate(coordinate: &[u8]) -> String {
    format!("0x{}", hex::encode(coordinate))
}

fn is_identity(bytes: &[u8]) -> bool {
    bytes.iter().all(|b| *b == 0)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

pub fn encode_scalar(value: &Scalar, encoding: Encoding) -> String {
    match encoding {
        Encoding::Decimal => value.to_string(),
        Encoding::Hex => format!("0x{}", value.as_biguint().to_str_radix(16)),
    }
}

pub fn encode_g1<B: PairingBackend>(point: &B::G1, encoding: Encoding) -> Vec<String> {
    let bytes = B::g1_to_bytes(point);
    match encoding {
        Encoding::Hex => coordinates(&bytes).map(hex_coordinate).collect(),
        Encoding::Decimal if is_identity(&bytes) => strings(&["0", "1", "0"]),
        Encoding::Decimal => {
            let mut out: Vec<String> = coordinates(&bytes).map(decimal).collect();
            out.push("1".to_owned());
            out
        }
    }
}

pub fn encode_g2<B: PairingBackend>(point: &B::G2, encoding: Encoding) -> Vec<Vec<String>> {
    let bytes = B::g2_to_bytes(point);
    // layout: x1 x0 y1 y0
    let c: Vec<&[u8]> = coordinates(&bytes).collect();
    match encoding {
        Encoding::Hex => vec![
            vec![hex_coordinate(c[0]), hex_coordinate(c[1])],
            vec![hex_coordinate(c[2]), hex_coordinate(c[3])],
        ],
        Encoding::Decimal if is_identity(&bytes) => vec![
            strings(&["0", "0"]),
            strings(&["1", "0"]),
            strings(&["0", "0"]),
        ],
        Encoding::Decimal => vec![
            vec![decimal(c[1]), decimal(c[0])],
            vec![decimal(c[3]), decimal(c[2])],
            strings(&["1", "0"]),
        ],
    }
}

impl VerificationKeyJson {
    pub fn from_key<B: PairingBackend>(vk: &VerificationKey<B>, encoding: Encoding) -> Self {
        Self {
            protocol: Some(PROTOCOL.to_owned()),
            curve: Some(CURVE.to_owned()),
            n_public: Some(vk.num_inputs() as u64),
            vk_alpha_1: encode_g1::<B>(&vk.alpha, encoding),
            vk_beta_2: encode_g2::<B>(&vk.beta, encoding),
            vk_gamma_2: encode_g2::<B>(&vk.gamma, encoding),
            vk_delta_2: encode_g2::<B>(&vk.delta, encoding),
            ic: vk.ic.iter().map(|p| encode_g1::<B>(p, encoding)).collect(),
        }
    }
}

impl ProofJson {
    pub fn from_proof<B: PairingBackend>(proof: &Proof<B>, encoding: Encoding) -> Self {
        Self {
            a: encode_g1::<B>(&proof.a, encoding),
            b: encode_g2::<B>(&proof.b, encoding),
            c: encode_g1::<B>(&proof.c, encoding),
            protocol: Some(PROTOCOL.to_owned()),
            curve: Some(CURVE.to_owned()),
        }
    }
}

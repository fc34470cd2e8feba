// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # g16-curve
//!
//! Curve boundary for Groth16 verification over BN254.
//!
//! | Module | Purpose |
//! |---|---|
//! | [`backend`] | [`PairingBackend`] capability trait and [`PointError`] |
//! | [`bn254`] | [`ArkBn254`], the arkworks implementation (EIP-197 byte layout) |
//! | [`params`] | Scalar-field modulus `r` |

pub mod backend;
pub mod bn254;
pub mod params;

pub use backend::{PairingBackend, PointError};
pub use bn254::ArkBn254;
pub use params::{scalar_modulus, COORDINATE_LEN, SCALAR_MODULUS_DEC};

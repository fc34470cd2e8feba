// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use g16_codec::{DecodeError, Scalar};

/// Verification failures on well-formed, decoded values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    #[error("arity mismatch: {inputs} public inputs for a key with {ic} IC points")]
    ArityMismatch { inputs: usize, ic: usize },

    #[error("public_inputs[{index}]: {value} is not below the scalar field modulus")]
    InputOutOfField { index: usize, value: Scalar },

    #[error("pairing check failed")]
    PairingCheckFailed,
}

impl VerifyError {
    /// The inputs were well-formed and the proof simply does not verify.
    pub fn is_invalid_proof(&self) -> bool {
        matches!(self, Self::PairingCheckFailed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("decode: {0}")]
    Decode(#[from] DecodeError),

    #[error("verify: {0}")]
    Verify(#[from] VerifyError),
}

impl Error {
    pub fn is_invalid_proof(&self) -> bool {
        matches!(self, Self::Verify(e) if e.is_invalid_proof())
    }
}

pub type VerifyResult<T> = std::result::Result<T, VerifyError>;
pub type Result<T> = std::result::Result<T, Error>;

// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed errors for decoding keys, proofs and public inputs.

use g16_curve::PointError;
use std::fmt;

/// Where in a document a decode error happened, e.g. `vk_beta_2[1][0]`.
///
/// Leaf decoders report paths relative to the value they were given (`[1]`,
/// or empty for the value itself); structural decoders prefix the field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn root() -> Self {
        Self(String::new())
    }

    pub fn named(name: &str) -> Self {
        Self(name.to_owned())
    }

    pub fn index(i: usize) -> Self {
        Self(format!("[{i}]"))
    }

    pub fn index2(i: usize, j: usize) -> Self {
        Self(format!("[{i}][{j}]"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn prefixed(self, parent: &str) -> Self {
        Self(format!("{parent}{}", self.0))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("<value>")
        } else {
            f.write_str(&self.0)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("{field}: malformed base-{radix} integer {value:?}")]
    MalformedInteger {
        field: FieldPath,
        value: String,
        radix: u32,
    },

    #[error("{field}: expected at least {expected} components, found {found}")]
    InsufficientData {
        field: FieldPath,
        expected: usize,
        found: usize,
    },

    #[error("{field}: invalid point: {reason}")]
    InvalidPoint {
        field: FieldPath,
        #[source]
        reason: PointError,
    },

    #[error("{field}: malformed structure: {reason}")]
    MalformedStructure { field: FieldPath, reason: String },
}

impl DecodeError {
    pub fn field(&self) -> &FieldPath {
        match self {
            Self::MalformedInteger { field, .. }
            | Self::InsufficientData { field, .. }
            | Self::InvalidPoint { field, .. }
            | Self::MalformedStructure { field, .. } => field,
        }
    }

    /// Re-root this error under `parent`, so `[1]` inside `vk_beta_2` reads `vk_beta_2[1]`.
    pub fn within(self, parent: &str) -> Self {
        match self {
            Self::MalformedInteger { field, value, radix } => Self::MalformedInteger {
                field: field.prefixed(parent),
                value,
                radix,
            },
            Self::InsufficientData { field, expected, found } => Self::InsufficientData {
                field: field.prefixed(parent),
                expected,
                found,
            },
            Self::InvalidPoint { field, reason } => Self::InvalidPoint {
                field: field.prefixed(parent),
                reason,
            },
            Self::MalformedStructure { field, reason } => Self::MalformedStructure {
                field: field.prefixed(parent),
                reason,
            },
        }
    }

    pub(crate) fn structure(field: &str, reason: impl Into<String>) -> Self {
        Self::MalformedStructure {
            field: FieldPath::named(field),
            reason: reason.into(),
        }
    }
}

pub type DecodeResult<T> = Result<T, DecodeError>;

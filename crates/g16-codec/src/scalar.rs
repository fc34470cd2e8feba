// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Scalar-field integers parsed from decimal or `0x` hex strings.

use num_bigint::BigUint;
use std::fmt;
use std::str::FromStr;

use crate::error::{DecodeError, DecodeResult, FieldPath};

pub(crate) const HEX_PREFIX: &str = "0x";

/// An arbitrary-precision non-negative integer meant to be read modulo `r`.
///
/// Decoding does not reduce or range-check; membership in the field is the
/// verifier's job, so an out-of-range input stays visible as such.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Scalar(BigUint);

impl Scalar {
    pub fn new(value: BigUint) -> Self {
        Self(value)
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    pub fn into_biguint(self) -> BigUint {
        self.0
    }

    /// Strictly below `modulus`.
    pub fn is_below(&self, modulus: &BigUint) -> bool {
        &self.0 < modulus
    }
}

impl From<BigUint> for Scalar {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Scalar {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_scalar(s)
    }
}

/// Parse a public-input style integer: `0x` selects base 16, anything else base 10.
pub fn decode_scalar(s: &str) -> DecodeResult<Scalar> {
    let value = match s.strip_prefix(HEX_PREFIX) {
        Some(digits) => parse_digits(s, digits, 16)?,
        None => parse_digits(s, s, 10)?,
    };
    Ok(Scalar(value))
}

/// Parse bare digits in `radix`. Signs, separators and empty strings are refused.
///
/// `original` is the text reported on failure, so a stripped `0x` stays visible.
pub(crate) fn parse_digits(original: &str, digits: &str, radix: u32) -> DecodeResult<BigUint> {
    let malformed = || DecodeError::MalformedInteger {
        field: FieldPath::root(),
        value: original.to_owned(),
        radix,
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(malformed());
    }
    BigUint::parse_bytes(digits.as_bytes(), radix).ok_or_else(malformed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_and_hex() {
        assert_eq!(decode_scalar("255").unwrap(), Scalar::from(255u64));
        assert_eq!(decode_scalar("0xff").unwrap(), Scalar::from(255u64));
        assert_eq!(decode_scalar("0xFF").unwrap(), Scalar::from(255u64));
        assert_eq!(decode_scalar("0").unwrap(), Scalar::from(0u64));
    }

    #[test]
    fn leading_zeros_allowed() {
        assert_eq!(decode_scalar("007").unwrap(), Scalar::from(7u64));
        assert_eq!(decode_scalar("0x0007").unwrap(), Scalar::from(7u64));
    }

    #[test]
    fn larger_than_u64() {
        let s = "21888242871839275222246405745257275088548364400416034343698204186575808495617";
        assert_eq!(decode_scalar(s).unwrap().to_string(), s);
    }

    #[test]
    fn one_is_not_rewritten() {
        // the "1" placeholder rule belongs to point coordinates only
        assert_eq!(decode_scalar("1").unwrap(), Scalar::from(1u64));
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "0x", "12a", "-5", "+5", "1_000", " 1", "0xzz", "0X10"] {
            match decode_scalar(bad) {
                Err(DecodeError::MalformedInteger { value, .. }) => assert_eq!(value, bad),
                other => panic!("{bad:?} decoded to {other:?}"),
            }
        }
    }

    #[test]
    fn hex_error_reports_radix() {
        match decode_scalar("0xg1") {
            Err(DecodeError::MalformedInteger { radix, .. }) => assert_eq!(radix, 16),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn from_str_matches_decode() {
        let parsed: Scalar = "42".parse().unwrap();
        assert_eq!(parsed, Scalar::from(42u64));
    }
}

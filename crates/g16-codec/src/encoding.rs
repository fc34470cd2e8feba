// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Point text encodings and the two legacy format rules of snarkjs-style keys.
//!
//! A point arrives as a handful of coordinate strings. Either all of them are
//! `0x` hex, in which case the digits are the deserializer's bytes verbatim,
//! or all of them are decimal, in which case each is parsed, padded to one
//! coordinate width and reordered for G2. The two rules below only apply to
//! decimal point coordinates:
//!
//! - [`legacy_placeholder_zero`]: a coordinate written as `"1"` means zero.
//!   Older generators write the point at infinity as `["0", "1", "0"]`.
//! - [`reverse_columns`]: G2 rows `[c0, c1]` are emitted `c1, c0`, which is the
//!   imaginary-first coordinate order of the byte layout.

use g16_curve::{PointError, COORDINATE_LEN};

use crate::error::{DecodeError, DecodeResult, FieldPath};
use crate::scalar::{parse_digits, HEX_PREFIX};

/// How the coordinate strings of one point are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    Decimal,
    Hex,
}

impl Encoding {
    /// Sniff the encoding from the first coordinate of a point.
    pub fn detect(first: &str) -> Self {
        if first.starts_with(HEX_PREFIX) {
            Self::Hex
        } else {
            Self::Decimal
        }
    }
}

/// Decimal coordinate placeholder: `"1"` stands for `"0"`.
pub fn legacy_placeholder_zero(component: &str) -> &str {
    if component == "1" {
        "0"
    } else {
        component
    }
}

/// `[[r0c0, r0c1], [r1c0, r1c1]]` → `[r0c1, r0c0, r1c1, r1c0]`.
pub fn reverse_columns<T>(rows: [[T; 2]; 2]) -> [T; 4] {
    let [[r0c0, r0c1], [r1c0, r1c1]] = rows;
    [r0c1, r0c0, r1c1, r1c0]
}

/// One coordinate string and where it sits inside its point.
#[derive(Clone, Debug)]
pub(crate) struct Component<'a> {
    pub field: FieldPath,
    pub text: &'a str,
}

impl<'a> Component<'a> {
    pub fn at(index: usize, text: &'a str) -> Self {
        Self {
            field: FieldPath::index(index),
            text,
        }
    }

    pub fn at2(row: usize, col: usize, text: &'a str) -> Self {
        Self {
            field: FieldPath::index2(row, col),
            text,
        }
    }
}

/// A point's coordinates, already in deserializer order, tagged by encoding.
#[derive(Debug)]
pub(crate) enum PointText<'a> {
    /// Hex digits with the `0x` prefix removed.
    Hex(Vec<Component<'a>>),
    Decimal(Vec<Component<'a>>),
}

impl<'a> PointText<'a> {
    /// Tag `components` as `encoding`. In hex mode every component must carry
    /// the prefix; encodings never mix inside one point.
    pub fn new(encoding: Encoding, components: Vec<Component<'a>>) -> DecodeResult<Self> {
        match encoding {
            Encoding::Decimal => Ok(Self::Decimal(components)),
            Encoding::Hex => components
                .into_iter()
                .map(|c| match c.text.strip_prefix(HEX_PREFIX) {
                    Some(digits) => Ok(Component { text: digits, ..c }),
                    None => Err(DecodeError::MalformedInteger {
                        field: c.field,
                        value: c.text.to_owned(),
                        radix: 16,
                    }),
                })
                .collect::<DecodeResult<Vec<_>>>()
                .map(Self::Hex),
        }
    }

    /// The byte string handed to the point deserializer.
    pub fn into_bytes(self) -> DecodeResult<Vec<u8>> {
        match self {
            Self::Hex(components) => hex_bytes(&components),
            Self::Decimal(components) => decimal_bytes(&components),
        }
    }
}

fn hex_bytes(components: &[Component<'_>]) -> DecodeResult<Vec<u8>> {
    for c in components {
        if !c.text.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(DecodeError::MalformedInteger {
                field: c.field.clone(),
                value: format!("{HEX_PREFIX}{}", c.text),
                radix: 16,
            });
        }
    }
    // digits are joined before decoding, so only the total length must be even
    let joined: String = components.iter().map(|c| c.text).collect();
    hex::decode(&joined).map_err(|_| DecodeError::MalformedInteger {
        field: FieldPath::root(),
        value: joined,
        radix: 16,
    })
}

fn decimal_bytes(components: &[Component<'_>]) -> DecodeResult<Vec<u8>> {
    let mut out = Vec::with_capacity(components.len() * COORDINATE_LEN);
    for c in components {
        let text = legacy_placeholder_zero(c.text);
        let value = parse_digits(c.text, text, 10).map_err(|e| relocate(e, c))?;
        let bytes = value.to_bytes_be();
        if bytes.len() > COORDINATE_LEN {
            return Err(DecodeError::InvalidPoint {
                field: c.field.clone(),
                reason: PointError::InvalidLength {
                    expected: COORDINATE_LEN,
                    found: bytes.len(),
                },
            });
        }
        out.extend_from_slice(&left_pad(&bytes));
    }
    Ok(out)
}

fn relocate(err: DecodeError, c: &Component<'_>) -> DecodeError {
    err.within(c.field.as_str())
}

/// Zero-pad on the most-significant side to one coordinate width.
fn left_pad(bytes: &[u8]) -> [u8; COORDINATE_LEN] {
    let mut out = [0u8; COORDINATE_LEN];
    out[COORDINATE_LEN - bytes.len()..].copy_from_slice(bytes);
    out
}

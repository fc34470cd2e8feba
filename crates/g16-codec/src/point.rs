// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! G1/G2 point decoding from coordinate strings.

use g16_curve::PairingBackend;

use crate::encoding::{reverse_columns, Component, Encoding, PointText};
use crate::error::{DecodeError, DecodeResult, FieldPath};

/// Coordinates a point needs; anything after them (a projective `z`) is ignored.
const MIN_COMPONENTS: usize = 2;

fn require(found: usize, field: FieldPath) -> DecodeResult<()> {
    if found < MIN_COMPONENTS {
        return Err(DecodeError::InsufficientData {
            field,
            expected: MIN_COMPONENTS,
            found,
        });
    }
    Ok(())
}

fn invalid_point(reason: g16_curve::PointError) -> DecodeError {
    DecodeError::InvalidPoint {
        field: FieldPath::root(),
        reason,
    }
}

/// Decode a G1 point from `[x, y, ...]`.
pub fn decode_g1<B, S>(components: &[S]) -> DecodeResult<B::G1>
where
    B: PairingBackend,
    S: AsRef<str>,
{
    require(components.len(), FieldPath::root())?;
    let x = components[0].as_ref();
    let y = components[1].as_ref();

    let encoding = Encoding::detect(x);
    let text = PointText::new(encoding, vec![Component::at(0, x), Component::at(1, y)])?;
    B::g1_from_bytes(&text.into_bytes()?).map_err(invalid_point)
}

/// Decode a G2 point from `[[x0, x1], [y0, y1], ...]`.
///
/// Hex rows are concatenated in reading order; decimal rows go through
/// [`reverse_columns`].
pub fn decode_g2<B, R, S>(rows: &[R]) -> DecodeResult<B::G2>
where
    B: PairingBackend,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    require(rows.len(), FieldPath::root())?;
    let rows = [g2_row::<R, S>(rows, 0)?, g2_row::<R, S>(rows, 1)?];

    let encoding = Encoding::detect(rows[0][0].text);
    let ordered: Vec<Component<'_>> = match encoding {
        Encoding::Hex => rows.into_iter().flatten().collect(),
        Encoding::Decimal => reverse_columns(rows).into_iter().collect(),
    };
    let text = PointText::new(encoding, ordered)?;
    B::g2_from_bytes(&text.into_bytes()?).map_err(invalid_point)
}

fn g2_row<'a, R, S>(rows: &'a [R], i: usize) -> DecodeResult<[Component<'a>; 2]>
where
    R: AsRef<[S]>,
    S: AsRef<str> + 'a,
{
    let row = rows[i].as_ref();
    require(row.len(), FieldPath::index(i))?;
    Ok([
        Component::at2(i, 0, row[0].as_ref()),
        Component::at2(i, 1, row[1].as_ref()),
    ])
}

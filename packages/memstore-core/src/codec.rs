//! Fixed-width field encoding.
//!
//! Every field in a table is a signed 32-bit integer stored in `FIELD_LEN`
//! bytes. The byte order is chosen by the [`ByteFormat`] type parameter
//! carried by the arena and tables.

use crate::error::{Result, StoreError};

/// Encoding of a single integer field at a byte offset.
pub trait ByteFormat: Copy + std::fmt::Debug + Default + 'static {
    /// Bytes occupied by one field.
    const FIELD_LEN: usize;

    /// Decodes the field starting at `offset`.
    ///
    /// # Panics
    /// Panics if `offset + FIELD_LEN` exceeds `buf.len()`.
    fn read_field(buf: &[u8], offset: usize) -> i32;

    /// Encodes `value` at `offset`.
    ///
    /// # Panics
    /// Panics if `offset + FIELD_LEN` exceeds `buf.len()`.
    fn write_field(buf: &mut [u8], offset: usize, value: i32);
}

/// Network byte order, the default for all tables and loaders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BigEndian;

/// Little-endian byte order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LittleEndian;

impl ByteFormat for BigEndian {
    const FIELD_LEN: usize = 4;

    #[inline]
    fn read_field(buf: &[u8], offset: usize) -> i32 {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(&buf[offset..offset + Self::FIELD_LEN]);
        i32::from_be_bytes(raw)
    }

    #[inline]
    fn write_field(buf: &mut [u8], offset: usize, value: i32) {
        buf[offset..offset + Self::FIELD_LEN].copy_from_slice(&value.to_be_bytes());
    }
}

impl ByteFormat for LittleEndian {
    const FIELD_LEN: usize = 4;

    #[inline]
    fn read_field(buf: &[u8], offset: usize) -> i32 {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(&buf[offset..offset + Self::FIELD_LEN]);
        i32::from_le_bytes(raw)
    }

    #[inline]
    fn write_field(buf: &mut [u8], offset: usize, value: i32) {
        buf[offset..offset + Self::FIELD_LEN].copy_from_slice(&value.to_le_bytes());
    }
}

/// Encodes one row of values into a per-row buffer.
pub fn encode_row<F: ByteFormat>(values: &[i32]) -> Vec<u8> {
    let mut buf = vec![0u8; values.len() * F::FIELD_LEN];
    for (col, &value) in values.iter().enumerate() {
        F::write_field(&mut buf, col * F::FIELD_LEN, value);
    }
    buf
}

/// Decodes the first `num_cols` fields of a per-row buffer.
///
/// `row` is only used to label the error.
pub fn decode_row<F: ByteFormat>(buf: &[u8], num_cols: usize, row: usize) -> Result<Vec<i32>> {
    check_row_len::<F>(buf, num_cols, row)?;
    Ok((0..num_cols)
        .map(|col| F::read_field(buf, col * F::FIELD_LEN))
        .collect())
}

/// Verifies that a row buffer holds at least `num_cols` fields.
pub(crate) fn check_row_len<F: ByteFormat>(buf: &[u8], num_cols: usize, row: usize) -> Result<()> {
    let needed = num_cols
        .checked_mul(F::FIELD_LEN)
        .ok_or(StoreError::CapacityOverflow {
            operation: "row length check",
        })?;
    if buf.len() < needed {
        return Err(StoreError::MalformedRow {
            row,
            reason: format!("expected at least {} bytes, got {}", needed, buf.len()),
        });
    }
    Ok(())
}

//! Loader over rows already held in memory.

use std::marker::PhantomData;

use super::{encode_rows, DataLoader};
use crate::codec::{BigEndian, ByteFormat};
use crate::error::Result;

/// Serves a fixed set of integer rows.
#[derive(Debug, Clone)]
pub struct MemoryLoader<F: ByteFormat = BigEndian> {
    num_cols: usize,
    rows: Vec<Vec<i32>>,
    _format: PhantomData<F>,
}

impl MemoryLoader<BigEndian> {
    /// Creates a big-endian loader for `rows`, each expected to carry
    /// `num_cols` values.
    pub fn new(num_cols: usize, rows: Vec<Vec<i32>>) -> Self {
        Self::with_format(num_cols, rows)
    }

    /// Creates a loader whose column count is the width of the first row.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Self {
        let num_cols = rows.first().map_or(0, Vec::len);
        Self::new(num_cols, rows)
    }
}

impl<F: ByteFormat> MemoryLoader<F> {
    /// Creates a loader encoding rows with format `F`.
    pub fn with_format(num_cols: usize, rows: Vec<Vec<i32>>) -> Self {
        Self {
            num_cols,
            rows,
            _format: PhantomData,
        }
    }
}

impl<F: ByteFormat> DataLoader for MemoryLoader<F> {
    type Format = F;

    fn num_cols(&mut self) -> Result<usize> {
        Ok(self.num_cols)
    }

    fn rows(&mut self) -> Result<Vec<Vec<u8>>> {
        Ok(encode_rows::<F>(&self.rows))
    }
}

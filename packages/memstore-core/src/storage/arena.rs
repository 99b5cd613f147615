//! Owned byte arena holding every field of one table.
//!
//! All offsets are produced by [`FieldArena::offset`]:
//!
//! ```text
//! offset = row * row_stride + col * col_stride
//!
//! RowMajor:    row_stride = FIELD_LEN * num_cols, col_stride = FIELD_LEN
//! ColumnMajor: row_stride = FIELD_LEN,            col_stride = FIELD_LEN * num_rows
//! ```
//!
//! For row-major arenas this is `FIELD_LEN * (row * num_cols + col)`.
//! The buffer length is always `FIELD_LEN * num_rows * num_cols`.

use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::codec::{check_row_len, BigEndian, ByteFormat};
use crate::error::{Result, StoreError};
use crate::loader::DataLoader;

/// Physical placement of fields in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    /// row 0 | row 1 | ... | row n
    RowMajor,
    /// col 0 | col 1 | ... | col m
    ColumnMajor,
}

/// Contiguous fixed-width field storage.
#[derive(Debug, Clone)]
pub struct FieldArena<F: ByteFormat = BigEndian> {
    data: Vec<u8>,
    num_rows: usize,
    num_cols: usize,
    row_stride: usize,
    col_stride: usize,
    order: Order,
    loaded: bool,
    _format: PhantomData<F>,
}

impl<F: ByteFormat> FieldArena<F> {
    /// Creates an empty, unloaded arena.
    pub fn new(order: Order) -> Self {
        Self {
            data: Vec::new(),
            num_rows: 0,
            num_cols: 0,
            row_stride: 0,
            col_stride: 0,
            order,
            loaded: false,
            _format: PhantomData,
        }
    }

    /// Copies every field from `loader` into the arena.
    ///
    /// `on_field(row, col, value)` is called once per field, in row order,
    /// while the arena is being filled. Row lengths are validated before
    /// the first field is copied, so a failing load leaves the arena and
    /// everything `on_field` feeds untouched.
    pub fn fill_from<L, V>(&mut self, loader: &mut L, mut on_field: V) -> Result<()>
    where
        L: DataLoader<Format = F>,
        V: FnMut(usize, usize, i32),
    {
        if self.loaded {
            return Err(StoreError::AlreadyLoaded);
        }

        let num_cols = loader.num_cols()?;
        if num_cols == 0 {
            return Err(StoreError::InvalidColumnCount(num_cols));
        }
        let rows = loader.rows()?;
        let num_rows = rows.len();

        let total_bytes = num_rows
            .checked_mul(num_cols)
            .and_then(|fields| fields.checked_mul(F::FIELD_LEN))
            .ok_or(StoreError::CapacityOverflow {
                operation: "arena allocation",
            })?;

        for (row_id, row) in rows.iter().enumerate() {
            check_row_len::<F>(row, num_cols, row_id)?;
        }

        if num_rows == 0 {
            tracing::warn!("Row source produced no rows ({} columns)", num_cols);
        }

        let (row_stride, col_stride) = match self.order {
            Order::RowMajor => (F::FIELD_LEN * num_cols, F::FIELD_LEN),
            Order::ColumnMajor => (F::FIELD_LEN, F::FIELD_LEN * num_rows),
        };
        self.data = vec![0u8; total_bytes];
        self.num_rows = num_rows;
        self.num_cols = num_cols;
        self.row_stride = row_stride;
        self.col_stride = col_stride;

        for (row_id, row) in rows.iter().enumerate() {
            for col_id in 0..num_cols {
                let value = F::read_field(row, F::FIELD_LEN * col_id);
                let offset = self.offset(row_id, col_id);
                F::write_field(&mut self.data, offset, value);
                on_field(row_id, col_id, value);
            }
        }
        self.loaded = true;

        tracing::debug!(
            "Loaded {} rows x {} columns ({} bytes, {:?})",
            num_rows,
            num_cols,
            total_bytes,
            self.order
        );
        Ok(())
    }

    /// Byte offset of field `(row, col)`. Callers guarantee the position
    /// is in range.
    #[inline]
    pub fn offset(&self, row: usize, col: usize) -> usize {
        row * self.row_stride + col * self.col_stride
    }

    /// Offset of column 0 in `row`.
    #[inline]
    pub fn row_base(&self, row: usize) -> usize {
        self.offset(row, 0)
    }

    /// Offset of `col` within the row starting at `row_base`.
    #[inline]
    pub fn in_row(&self, row_base: usize, col: usize) -> usize {
        row_base + col * self.col_stride
    }

    /// Offset of row 0 in `col`.
    #[inline]
    pub fn column_base(&self, col: usize) -> usize {
        self.offset(0, col)
    }

    /// Offset of `row` within the column starting at `column_base`.
    #[inline]
    pub fn in_column(&self, column_base: usize, row: usize) -> usize {
        column_base + row * self.row_stride
    }

    /// Byte offset of field `(row, col)` after bounds validation.
    pub fn checked_offset(&self, row: usize, col: usize) -> Result<usize> {
        if !self.loaded {
            return Err(StoreError::NotLoaded);
        }
        if row >= self.num_rows || col >= self.num_cols {
            return Err(StoreError::OutOfBounds {
                row,
                col,
                num_rows: self.num_rows,
                num_cols: self.num_cols,
            });
        }
        Ok(self.offset(row, col))
    }

    /// Reads field `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<i32> {
        let offset = self.checked_offset(row, col)?;
        Ok(F::read_field(&self.data, offset))
    }

    /// Overwrites field `(row, col)`.
    pub fn put(&mut self, row: usize, col: usize, value: i32) -> Result<()> {
        let offset = self.checked_offset(row, col)?;
        F::write_field(&mut self.data, offset, value);
        Ok(())
    }

    #[inline]
    pub(crate) fn read_at(&self, offset: usize) -> i32 {
        F::read_field(&self.data, offset)
    }

    #[inline]
    pub(crate) fn write_at(&mut self, offset: usize, value: i32) {
        F::write_field(&mut self.data, offset, value);
    }

    /// Fails unless the arena is loaded with at least `needed` columns.
    pub(crate) fn require_columns(&self, query: &'static str, needed: usize) -> Result<()> {
        if !self.loaded {
            return Err(StoreError::NotLoaded);
        }
        if self.num_cols < needed {
            return Err(StoreError::MissingColumn {
                query,
                column: needed - 1,
                num_cols: self.num_cols,
            });
        }
        Ok(())
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Distance in bytes between consecutive rows of one column.
    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    /// Distance in bytes between consecutive columns of one row.
    pub fn col_stride(&self) -> usize {
        self.col_stride
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Raw encoded fields.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Length of the arena in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

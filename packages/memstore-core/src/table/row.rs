//! Row-major table.
//!
//! Data is laid out as
//!
//! ```text
//! row 0 | row 1 | ... | row n
//! ```
//!
//! and every query is a single linear scan computing each row's base
//! offset once.

use super::TableOps;
use crate::codec::{BigEndian, ByteFormat};
use crate::error::Result;
use crate::loader::DataLoader;
use crate::storage::{FieldArena, Order};

/// Row-major table scanned in full by every query.
#[derive(Debug, Clone)]
pub struct RowTable<F: ByteFormat = BigEndian> {
    arena: FieldArena<F>,
}

impl RowTable<BigEndian> {
    pub fn new() -> Self {
        Self::with_format()
    }
}

impl<F: ByteFormat> Default for RowTable<F> {
    fn default() -> Self {
        Self::with_format()
    }
}

impl<F: ByteFormat> RowTable<F> {
    /// Creates an empty table storing fields with format `F`.
    pub fn with_format() -> Self {
        Self {
            arena: FieldArena::new(Order::RowMajor),
        }
    }

    /// Underlying field storage.
    pub fn arena(&self) -> &FieldArena<F> {
        &self.arena
    }

    /// Loads the table, reporting every copied field to `on_field`.
    pub(crate) fn load_with<L, V>(&mut self, loader: &mut L, on_field: V) -> Result<()>
    where
        L: DataLoader<Format = F>,
        V: FnMut(usize, usize, i32),
    {
        self.arena.fill_from(loader, on_field)
    }
}

impl<F: ByteFormat> TableOps for RowTable<F> {
    type Format = F;

    fn load<L: DataLoader<Format = Self::Format>>(&mut self, loader: &mut L) -> Result<()> {
        self.load_with(loader, |_, _, _| {})
    }

    fn get_int_field(&self, row: usize, col: usize) -> Result<i32> {
        self.arena.get(row, col)
    }

    fn put_int_field(&mut self, row: usize, col: usize, value: i32) -> Result<()> {
        self.arena.put(row, col, value)
    }

    fn column_sum(&self) -> Result<i64> {
        self.arena.require_columns("column_sum", 1)?;

        let mut sum = 0i64;
        for row in 0..self.arena.num_rows() {
            sum += i64::from(self.arena.read_at(self.arena.row_base(row)));
        }
        Ok(sum)
    }

    fn predicated_column_sum(&self, threshold1: i32, threshold2: i32) -> Result<i64> {
        self.arena.require_columns("predicated_column_sum", 3)?;

        let arena = &self.arena;
        let mut sum = 0i64;
        for row in 0..arena.num_rows() {
            let base = arena.row_base(row);
            let col1 = arena.read_at(arena.in_row(base, 1));
            let col2 = arena.read_at(arena.in_row(base, 2));
            if col1 > threshold1 && col2 < threshold2 {
                sum += i64::from(arena.read_at(base));
            }
        }
        Ok(sum)
    }

    fn predicated_all_columns_sum(&self, threshold: i32) -> Result<i64> {
        self.arena.require_columns("predicated_all_columns_sum", 1)?;

        let arena = &self.arena;
        let mut sum = 0i64;
        for row in 0..arena.num_rows() {
            let base = arena.row_base(row);
            if arena.read_at(base) > threshold {
                for col in 0..arena.num_cols() {
                    sum += i64::from(arena.read_at(arena.in_row(base, col)));
                }
            }
        }
        Ok(sum)
    }

    fn predicated_update(&mut self, threshold: i32) -> Result<usize> {
        self.arena.require_columns("predicated_update", 4)?;

        let mut count = 0;
        for row in 0..self.arena.num_rows() {
            let base = self.arena.row_base(row);
            if self.arena.read_at(base) < threshold {
                // Read both operands before col3 is overwritten.
                let col1 = self.arena.read_at(self.arena.in_row(base, 1));
                let col2 = self.arena.read_at(self.arena.in_row(base, 2));
                let target = self.arena.in_row(base, 3);
                self.arena.write_at(target, col1.wrapping_add(col2));
                count += 1;
            }
        }
        tracing::trace!("predicated_update({}) touched {} rows", threshold, count);
        Ok(count)
    }

    fn num_rows(&self) -> usize {
        self.arena.num_rows()
    }

    fn num_cols(&self) -> usize {
        self.arena.num_cols()
    }
}

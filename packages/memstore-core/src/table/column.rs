//! Column-major table.
//!
//! Data is laid out as
//!
//! ```text
//! col 0 | col 1 | ... | col m
//! ```
//!
//! Queries walk whole columns so each pass touches contiguous memory.

use super::TableOps;
use crate::codec::{BigEndian, ByteFormat};
use crate::error::Result;
use crate::loader::DataLoader;
use crate::storage::{FieldArena, Order};

#[derive(Debug, Clone)]
pub struct ColumnTable<F: ByteFormat = BigEndian> {
    arena: FieldArena<F>,
}

impl ColumnTable<BigEndian> {
    pub fn new() -> Self {
        Self::with_format()
    }
}

impl<F: ByteFormat> Default for ColumnTable<F> {
    fn default() -> Self {
        Self::with_format()
    }
}

impl<F: ByteFormat> ColumnTable<F> {
    pub fn with_format() -> Self {
        Self {
            arena: FieldArena::new(Order::ColumnMajor),
        }
    }

    pub fn arena(&self) -> &FieldArena<F> {
        &self.arena
    }

    /// Rows whose col0 satisfies `keep`, from one pass over column 0.
    fn select_rows(&self, keep: impl Fn(i32) -> bool) -> Vec<usize> {
        let arena = &self.arena;
        let col0 = arena.column_base(0);
        (0..arena.num_rows())
            .filter(|&row| keep(arena.read_at(arena.in_column(col0, row))))
            .collect()
    }
}

impl<F: ByteFormat> TableOps for ColumnTable<F> {
    type Format = F;

    fn load<L: DataLoader<Format = Self::Format>>(&mut self, loader: &mut L) -> Result<()> {
        self.arena.fill_from(loader, |_, _, _| {})
    }

    fn get_int_field(&self, row: usize, col: usize) -> Result<i32> {
        self.arena.get(row, col)
    }

    fn put_int_field(&mut self, row: usize, col: usize, value: i32) -> Result<()> {
        self.arena.put(row, col, value)
    }

    fn column_sum(&self) -> Result<i64> {
        self.arena.require_columns("column_sum", 1)?;

        let arena = &self.arena;
        let col0 = arena.column_base(0);
        Ok((0..arena.num_rows())
            .map(|row| i64::from(arena.read_at(arena.in_column(col0, row))))
            .sum())
    }

    fn predicated_column_sum(&self, threshold1: i32, threshold2: i32) -> Result<i64> {
        self.arena.require_columns("predicated_column_sum", 3)?;

        let arena = &self.arena;
        let (col0, col1, col2) = (
            arena.column_base(0),
            arena.column_base(1),
            arena.column_base(2),
        );
        let mut sum = 0i64;
        for row in 0..arena.num_rows() {
            if arena.read_at(arena.in_column(col1, row)) > threshold1
                && arena.read_at(arena.in_column(col2, row)) < threshold2
            {
                sum += i64::from(arena.read_at(arena.in_column(col0, row)));
            }
        }
        Ok(sum)
    }

    fn predicated_all_columns_sum(&self, threshold: i32) -> Result<i64> {
        self.arena.require_columns("predicated_all_columns_sum", 1)?;

        let selected = self.select_rows(|value| value > threshold);
        let arena = &self.arena;
        let mut sum = 0i64;
        for col in 0..arena.num_cols() {
            let base = arena.column_base(col);
            for &row in &selected {
                sum += i64::from(arena.read_at(arena.in_column(base, row)));
            }
        }
        Ok(sum)
    }

    fn predicated_update(&mut self, threshold: i32) -> Result<usize> {
        self.arena.require_columns("predicated_update", 4)?;

        let selected = self.select_rows(|value| value < threshold);
        let (col1, col2, col3) = (
            self.arena.column_base(1),
            self.arena.column_base(2),
            self.arena.column_base(3),
        );
        for &row in &selected {
            let value = self
                .arena
                .read_at(self.arena.in_column(col1, row))
                .wrapping_add(self.arena.read_at(self.arena.in_column(col2, row)));
            let target = self.arena.in_column(col3, row);
            self.arena.write_at(target, value);
        }
        tracing::trace!(
            "predicated_update({}) touched {} rows",
            threshold,
            selected.len()
        );
        Ok(selected.len())
    }

    fn num_rows(&self) -> usize {
        self.arena.num_rows()
    }

    fn num_cols(&self) -> usize {
        self.arena.num_cols()
    }
}

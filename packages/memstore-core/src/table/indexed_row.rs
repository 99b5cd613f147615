//! Row-major table with an ordered index on one column.
//!
//! The index is filled during the load pass and never touched again.
//! `put_int_field` and `predicated_update` write only to the row buffer, so
//! after a write to the indexed column the index still describes the
//! loaded data. `column_sum` on a table indexed on column 0 keeps answering
//! from that loaded state.

use super::row::RowTable;
use super::TableOps;
use crate::codec::{BigEndian, ByteFormat};
use crate::error::{Result, StoreError};
use crate::index::SecondaryIndex;
use crate::loader::DataLoader;

/// Row-major table plus a value -> rows index on `index_column`.
///
/// Only `column_sum` with `index_column == 0` uses the index; every other
/// query is answered by the wrapped [`RowTable`] over the same buffer.
#[derive(Debug, Clone)]
pub struct IndexedRowTable<F: ByteFormat = BigEndian> {
    rows: RowTable<F>,
    index: SecondaryIndex,
    index_column: usize,
}

impl IndexedRowTable<BigEndian> {
    pub fn new(index_column: usize) -> Self {
        Self::with_format(index_column)
    }
}

impl<F: ByteFormat> IndexedRowTable<F> {
    /// Creates an empty table that will index `index_column` on load.
    pub fn with_format(index_column: usize) -> Self {
        Self {
            rows: RowTable::with_format(),
            index: SecondaryIndex::new(),
            index_column,
        }
    }

    pub fn index_column(&self) -> usize {
        self.index_column
    }

    /// Index as built at load time.
    pub fn index(&self) -> &SecondaryIndex {
        &self.index
    }

    /// Row positions whose indexed column held `value` at load time.
    pub fn rows_with_value(&self, value: i32) -> &[usize] {
        self.index.rows_for(value)
    }

    /// Wrapped row-major table sharing this table's buffer.
    pub fn row_table(&self) -> &RowTable<F> {
        &self.rows
    }
}

impl<F: ByteFormat> TableOps for IndexedRowTable<F> {
    type Format = F;

    fn load<L: DataLoader<Format = Self::Format>>(&mut self, loader: &mut L) -> Result<()> {
        let index_column = self.index_column;
        let index = &mut self.index;
        self.rows.load_with(loader, |row, col, value| {
            if col == index_column {
                index.insert(value, row);
            }
        })?;

        let num_cols = self.rows.num_cols();
        if index_column >= num_cols {
            self.rows = RowTable::with_format();
            self.index.clear();
            return Err(StoreError::IndexColumnOutOfRange {
                column: index_column,
                num_cols,
            });
        }

        tracing::debug!(
            "Indexed column {}: {} distinct values over {} rows",
            index_column,
            self.index.distinct_values(),
            self.index.len()
        );
        Ok(())
    }

    fn get_int_field(&self, row: usize, col: usize) -> Result<i32> {
        self.rows.get_int_field(row, col)
    }

    fn put_int_field(&mut self, row: usize, col: usize, value: i32) -> Result<()> {
        self.rows.put_int_field(row, col, value)
    }

    fn column_sum(&self) -> Result<i64> {
        if self.index_column == 0 {
            self.rows.arena().require_columns("column_sum", 1)?;
            tracing::trace!(
                "column_sum answered from index ({} keys)",
                self.index.distinct_values()
            );
            return Ok(self.index.grouped_sum());
        }
        self.rows.column_sum()
    }

    fn predicated_column_sum(&self, threshold1: i32, threshold2: i32) -> Result<i64> {
        self.rows.predicated_column_sum(threshold1, threshold2)
    }

    fn predicated_all_columns_sum(&self, threshold: i32) -> Result<i64> {
        self.rows.predicated_all_columns_sum(threshold)
    }

    fn predicated_update(&mut self, threshold: i32) -> Result<usize> {
        self.rows.predicated_update(threshold)
    }

    fn num_rows(&self) -> usize {
        self.rows.num_rows()
    }

    fn num_cols(&self) -> usize {
        self.rows.num_cols()
    }
}

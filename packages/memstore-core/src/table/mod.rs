//! Table layouts and the query contract they share.
//!
//! Every layout answers the same four queries over its first columns:
//!
//! | query                        | SQL                                                          |
//! |------------------------------|--------------------------------------------------------------|
//! | `column_sum`                 | `SELECT SUM(col0) FROM t`                                    |
//! | `predicated_column_sum`      | `SELECT SUM(col0) FROM t WHERE col1 > t1 AND col2 < t2`      |
//! | `predicated_all_columns_sum` | `SELECT SUM(col0) + ... + SUM(coln) FROM t WHERE col0 > t`   |
//! | `predicated_update`          | `UPDATE t SET col3 = col1 + col2 WHERE col0 < t`             |
//!
//! Results are identical across layouts; only the access pattern differs.

mod column;
mod indexed_row;
mod layout;
mod row;

pub use column::ColumnTable;
pub use indexed_row::IndexedRowTable;
pub use layout::{Layout, Table};
pub use row::RowTable;

use crate::codec::ByteFormat;
use crate::error::Result;
use crate::loader::DataLoader;

/// Operations implemented by every table layout.
pub trait TableOps {
    /// Field encoding of the table and of the loaders it accepts.
    type Format: ByteFormat;

    /// Populates the table from `loader`. Valid once per table.
    fn load<L: DataLoader<Format = Self::Format>>(&mut self, loader: &mut L) -> Result<()>;

    /// Returns the field at `(row, col)`.
    fn get_int_field(&self, row: usize, col: usize) -> Result<i32>;

    /// Overwrites the field at `(row, col)`.
    fn put_int_field(&mut self, row: usize, col: usize, value: i32) -> Result<()>;

    /// Sum of column 0 over all rows.
    fn column_sum(&self) -> Result<i64>;

    /// Sum of column 0 over rows where `col1 > threshold1` and `col2 < threshold2`.
    fn predicated_column_sum(&self, threshold1: i32, threshold2: i32) -> Result<i64>;

    /// Sum of every field in rows where `col0 > threshold`.
    fn predicated_all_columns_sum(&self, threshold: i32) -> Result<i64>;

    /// Sets `col3 = col1 + col2` on rows where `col0 < threshold`.
    ///
    /// Returns the number of rows updated.
    fn predicated_update(&mut self, threshold: i32) -> Result<usize>;

    fn num_rows(&self) -> usize;

    fn num_cols(&self) -> usize;
}

//! Row sources consumed once by `TableOps::load`.
//!
//! A loader reports a column count and hands over every row as a byte
//! buffer encoded with its [`ByteFormat`]. Tables only accept loaders whose
//! format matches their own.

mod csv;
mod memory;
mod random;

pub use csv::{CsvLoader, CsvOptions};
pub use memory::MemoryLoader;
pub use random::RandomizedLoader;

use crate::codec::{encode_row, ByteFormat};
use crate::error::Result;

/// Source of rows for a single table load.
pub trait DataLoader {
    /// Encoding of the row buffers returned by [`DataLoader::rows`].
    type Format: ByteFormat;

    /// Number of columns in every row.
    fn num_cols(&mut self) -> Result<usize>;

    /// All rows in load order, each holding at least `num_cols` fields.
    fn rows(&mut self) -> Result<Vec<Vec<u8>>>;
}

fn encode_rows<F: ByteFormat>(rows: &[Vec<i32>]) -> Vec<Vec<u8>> {
    rows.iter().map(|row| encode_row::<F>(row)).collect()
}

//! In-memory tabular storage engine.
//!
//! One logical relation of fixed-width integer fields can be stored in
//! several physical layouts that answer the same queries:
//!
//! - [`table::RowTable`]: row-major buffer, every query a linear scan
//! - [`table::IndexedRowTable`]: row-major buffer plus an ordered index on
//!   one column, used to answer `column_sum` per distinct value
//! - [`table::ColumnTable`]: column-major buffer scanned column-at-a-time
//!
//! Tables are filled once from a [`loader::DataLoader`] and then read,
//! written and queried in place.

pub mod codec;
pub mod config;
pub mod error;
pub mod index;
pub mod loader;
pub mod storage;
pub mod table;

pub use error::{Result, StoreError};
pub use table::{Layout, Table, TableOps};

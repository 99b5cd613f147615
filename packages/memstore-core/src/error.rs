//! Storage engine error types.

use thiserror::Error;

/// Storage engine errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Field position outside the loaded table
    #[error("Field ({row}, {col}) out of bounds for table of {num_rows} rows x {num_cols} columns")]
    OutOfBounds {
        row: usize,
        col: usize,
        num_rows: usize,
        num_cols: usize,
    },

    /// Query needs a column the table does not have
    #[error("Query '{query}' requires column {column} but table has {num_cols} columns")]
    MissingColumn {
        query: &'static str,
        column: usize,
        num_cols: usize,
    },

    /// Index column selector does not name a loaded column
    #[error("Index column {column} out of range for table with {num_cols} columns")]
    IndexColumnOutOfRange { column: usize, num_cols: usize },

    /// Table used before `load`
    #[error("Table has not been loaded")]
    NotLoaded,

    /// `load` called on a populated table
    #[error("Table is already loaded")]
    AlreadyLoaded,

    /// Row source reported an unusable column count
    #[error("Invalid column count {0}")]
    InvalidColumnCount(usize),

    /// Row source produced a row that cannot be decoded
    #[error("Malformed row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    /// Capacity calculation overflow
    #[error("Capacity overflow during {operation}")]
    CapacityOverflow { operation: &'static str },

    /// Configuration rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error while reading a row source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

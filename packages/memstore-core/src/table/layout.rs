//! Layout selection and static dispatch over the closed set of layouts.

use serde::{Deserialize, Serialize};

use super::{ColumnTable, IndexedRowTable, RowTable, TableOps};
use crate::codec::{BigEndian, ByteFormat};
use crate::config::TableConfig;
use crate::error::Result;
use crate::loader::DataLoader;

/// Physical layout of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    RowMajor,
    IndexedRowMajor,
    ColumnMajor,
}

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::RowMajor, Layout::IndexedRowMajor, Layout::ColumnMajor];
}

/// A table of any layout, chosen at construction.
#[derive(Debug, Clone)]
pub enum Table<F: ByteFormat = BigEndian> {
    RowMajor(RowTable<F>),
    IndexedRowMajor(IndexedRowTable<F>),
    ColumnMajor(ColumnTable<F>),
}

impl Table<BigEndian> {
    /// Creates an empty table of `layout`. `index_column` is used only by
    /// [`Layout::IndexedRowMajor`].
    pub fn new(layout: Layout, index_column: usize) -> Self {
        Self::with_format(layout, index_column)
    }

    /// Creates an empty table from a validated configuration.
    pub fn from_config(config: &TableConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.layout, config.index_column))
    }
}

impl<F: ByteFormat> Table<F> {
    pub fn with_format(layout: Layout, index_column: usize) -> Self {
        match layout {
            Layout::RowMajor => Table::RowMajor(RowTable::with_format()),
            Layout::IndexedRowMajor => {
                Table::IndexedRowMajor(IndexedRowTable::with_format(index_column))
            }
            Layout::ColumnMajor => Table::ColumnMajor(ColumnTable::with_format()),
        }
    }

    pub fn layout(&self) -> Layout {
        match self {
            Table::RowMajor(_) => Layout::RowMajor,
            Table::IndexedRowMajor(_) => Layout::IndexedRowMajor,
            Table::ColumnMajor(_) => Layout::ColumnMajor,
        }
    }
}

macro_rules! dispatch {
    ($table:expr, $inner:ident => $call:expr) => {
        match $table {
            Table::RowMajor($inner) => $call,
            Table::IndexedRowMajor($inner) => $call,
            Table::ColumnMajor($inner) => $call,
        }
    };
}

impl<F: ByteFormat> TableOps for Table<F> {
    type Format = F;

    fn load<L: DataLoader<Format = Self::Format>>(&mut self, loader: &mut L) -> Result<()> {
        dispatch!(self, t => t.load(loader))
    }

    fn get_int_field(&self, row: usize, col: usize) -> Result<i32> {
        dispatch!(self, t => t.get_int_field(row, col))
    }

    fn put_int_field(&mut self, row: usize, col: usize, value: i32) -> Result<()> {
        dispatch!(self, t => t.put_int_field(row, col, value))
    }

    fn column_sum(&self) -> Result<i64> {
        dispatch!(self, t => t.column_sum())
    }

    fn predicated_column_sum(&self, threshold1: i32, threshold2: i32) -> Result<i64> {
        dispatch!(self, t => t.predicated_column_sum(threshold1, threshold2))
    }

    fn predicated_all_columns_sum(&self, threshold: i32) -> Result<i64> {
        dispatch!(self, t => t.predicated_all_columns_sum(threshold))
    }

    fn predicated_update(&mut self, threshold: i32) -> Result<usize> {
        dispatch!(self, t => t.predicated_update(threshold))
    }

    fn num_rows(&self) -> usize {
        dispatch!(self, t => t.num_rows())
    }

    fn num_cols(&self) -> usize {
        dispatch!(self, t => t.num_cols())
    }
}

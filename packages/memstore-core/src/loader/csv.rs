//! Integer CSV row source.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::marker::PhantomData;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{encode_rows, DataLoader};
use crate::codec::{BigEndian, ByteFormat};
use crate::error::{Result, StoreError};

/// CSV parsing options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Cell separator, ASCII only (default: `,`)
    pub delimiter: u8,
    /// Skip the first non-empty line (default: false)
    pub has_header: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_header: false,
        }
    }
}

/// Loads integer rows from delimited text.
///
/// The column count is the number of cells in the header, or in the first
/// record when there is no header. Every record must have exactly that many
/// cells. Blank lines are skipped.
#[derive(Debug, Clone)]
pub struct CsvLoader<F: ByteFormat = BigEndian> {
    num_cols: usize,
    rows: Vec<Vec<i32>>,
    _format: PhantomData<F>,
}

impl CsvLoader<BigEndian> {
    /// Opens and parses the file at `path`.
    pub fn open(path: impl AsRef<Path>, options: &CsvOptions) -> Result<Self> {
        Self::from_reader(BufReader::new(File::open(path.as_ref())?), options)
    }

    /// Parses CSV from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R, options: &CsvOptions) -> Result<Self> {
        Self::with_format(reader, options)
    }
}

impl<F: ByteFormat> CsvLoader<F> {
    /// Parses CSV from `reader`, encoding rows with format `F`.
    pub fn with_format<R: BufRead>(reader: R, options: &CsvOptions) -> Result<Self> {
        if !options.delimiter.is_ascii() {
            return Err(StoreError::InvalidConfig(format!(
                "CSV delimiter must be ASCII, got 0x{:02x}",
                options.delimiter
            )));
        }
        let delimiter = char::from(options.delimiter);
        let mut num_cols = None;
        let mut rows = Vec::new();
        let mut header_pending = options.has_header;

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if header_pending {
                header_pending = false;
                num_cols = Some(line.split(delimiter).count());
                continue;
            }

            let row = rows.len();
            let values = line
                .split(delimiter)
                .map(|cell| {
                    cell.trim()
                        .parse::<i32>()
                        .map_err(|e| StoreError::MalformedRow {
                            row,
                            reason: format!("cell '{}': {}", cell.trim(), e),
                        })
                })
                .collect::<Result<Vec<i32>>>()?;

            let expected = *num_cols.get_or_insert(values.len());
            if values.len() != expected {
                return Err(StoreError::MalformedRow {
                    row,
                    reason: format!("expected {} cells, got {}", expected, values.len()),
                });
            }
            rows.push(values);
        }

        Ok(Self {
            num_cols: num_cols.unwrap_or(0),
            rows,
            _format: PhantomData,
        })
    }
}

impl<F: ByteFormat> DataLoader for CsvLoader<F> {
    type Format = F;

    fn num_cols(&mut self) -> Result<usize> {
        Ok(self.num_cols)
    }

    fn rows(&mut self) -> Result<Vec<Vec<u8>>> {
        Ok(encode_rows::<F>(&self.rows))
    }
}

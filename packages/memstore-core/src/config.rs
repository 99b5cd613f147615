//! Table configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};
use crate::table::Layout;

/// Table configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Physical layout (default: row_major)
    pub layout: Layout,
    /// Column indexed by `indexed_row_major` tables (default: 0)
    pub index_column: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            layout: Layout::RowMajor,
            index_column: 0,
        }
    }
}

impl TableConfig {
    /// Parses configuration from a JSON document.
    ///
    /// Missing keys take their default values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| StoreError::InvalidConfig(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks settings that can be verified before any data is seen.
    ///
    /// Whether `index_column` names a real column is only known at load.
    pub fn validate(&self) -> Result<()> {
        if self.layout != Layout::IndexedRowMajor && self.index_column != 0 {
            return Err(StoreError::InvalidConfig(format!(
                "index_column {} set for unindexed layout {:?}",
                self.index_column, self.layout
            )));
        }
        Ok(())
    }
}

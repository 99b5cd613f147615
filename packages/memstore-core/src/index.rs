//! Ordered secondary index over one column.

use std::collections::BTreeMap;

/// Maps a column value to every row position holding it.
///
/// Built once while a table loads and never updated afterwards. Writes to
/// the indexed column after load are not reflected here.
#[derive(Debug, Clone, Default)]
pub struct SecondaryIndex {
    entries: BTreeMap<i32, Vec<usize>>,
    len: usize,
}

impl SecondaryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `row` holds `value`.
    pub fn insert(&mut self, value: i32, row: usize) {
        self.entries.entry(value).or_default().push(row);
        self.len += 1;
    }

    /// Row positions holding `value`, empty when none do.
    pub fn rows_for(&self, value: i32) -> &[usize] {
        self.entries.get(&value).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &[usize])> + '_ {
        self.entries.iter().map(|(&value, rows)| (value, rows.as_slice()))
    }

    /// `Σ value * |rows with value|`, one step per distinct value.
    pub fn grouped_sum(&self) -> i64 {
        self.entries
            .iter()
            .map(|(&value, rows)| i64::from(value) * rows.len() as i64)
            .sum()
    }

    /// Number of distinct indexed values.
    pub fn distinct_values(&self) -> usize {
        self.entries.len()
    }

    /// Total number of indexed row positions.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.len = 0;
    }
}

//! Layouts loaded from the same generated data give the same answers.

use anyhow::Result;
use ntest::timeout;

use memstore_core::loader::RandomizedLoader;
use memstore_core::table::IndexedRowTable;
use memstore_core::{Layout, Table, TableOps};

const ROWS: usize = 5_000;
const COLS: usize = 8;
const MAX_VALUE: i32 = 1024;
const SEED: u64 = 0x5eed;

fn generated(layout: Layout, index_column: usize) -> Result<Table> {
    let mut table = Table::new(layout, index_column);
    table.load(&mut RandomizedLoader::new(ROWS, COLS, MAX_VALUE, SEED))?;
    Ok(table)
}

#[timeout(10000)]
#[test]
fn test_generated_layouts_agree() -> Result<()> {
    let mut baseline = generated(Layout::RowMajor, 0)?;
    let mut others = vec![generated(Layout::ColumnMajor, 0)?];
    for index_column in 0..COLS {
        others.push(generated(Layout::IndexedRowMajor, index_column)?);
    }

    for (t1, t2) in [(0, MAX_VALUE), (512, 512), (100, 900), (MAX_VALUE, 0)] {
        let expected = baseline.predicated_column_sum(t1, t2)?;
        for table in &others {
            assert_eq!(table.predicated_column_sum(t1, t2)?, expected);
        }
    }

    for threshold in [-1, 0, 300, 700, MAX_VALUE] {
        let expected = baseline.predicated_all_columns_sum(threshold)?;
        for table in &others {
            assert_eq!(table.predicated_all_columns_sum(threshold)?, expected);
        }
    }

    let expected_sum = baseline.column_sum()?;
    for table in &others {
        assert_eq!(table.column_sum()?, expected_sum);
    }

    let expected_updates = baseline.predicated_update(400)?;
    for table in &mut others {
        assert_eq!(table.predicated_update(400)?, expected_updates);
    }
    for table in &others {
        for row in (0..ROWS).step_by(97) {
            assert_eq!(table.get_int_field(row, 3)?, baseline.get_int_field(row, 3)?);
        }
    }
    Ok(())
}

#[timeout(10000)]
#[test]
fn test_index_covers_every_row() -> Result<()> {
    let mut table = IndexedRowTable::new(5);
    table.load(&mut RandomizedLoader::new(ROWS, COLS, MAX_VALUE, SEED))?;

    assert_eq!(table.index().len(), ROWS);
    assert!(table.index().distinct_values() <= MAX_VALUE as usize);
    for (value, rows) in table.index().iter() {
        assert!((0..MAX_VALUE).contains(&value));
        for &row in rows {
            assert_eq!(table.get_int_field(row, 5)?, value);
        }
    }
    Ok(())
}

#[timeout(10000)]
#[test]
fn test_index_goes_stale_after_writes() -> Result<()> {
    let mut indexed = generated(Layout::IndexedRowMajor, 0)?;
    let mut plain = generated(Layout::RowMajor, 0)?;
    let loaded_sum = plain.column_sum()?;

    for row in 0..10 {
        indexed.put_int_field(row, 0, -1)?;
        plain.put_int_field(row, 0, -1)?;
    }

    assert_eq!(indexed.column_sum()?, loaded_sum);
    assert_ne!(plain.column_sum()?, loaded_sum);
    for row in 0..10 {
        assert_eq!(indexed.get_int_field(row, 0)?, -1);
    }
    Ok(())
}

//! End-to-end: CSV file -> configured table -> queries.

use std::io::Write;

use anyhow::Result;
use ntest::timeout;
use tempfile::NamedTempFile;

use memstore_core::config::TableConfig;
use memstore_core::loader::{CsvLoader, CsvOptions};
use memstore_core::{Layout, StoreError, Table, TableOps};

fn write_csv(lines: &[&str]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    for line in lines {
        writeln!(file, "{}", line)?;
    }
    Ok(file)
}

#[timeout(5000)]
#[test]
fn test_csv_into_every_layout() -> Result<()> {
    let file = write_csv(&["c0,c1,c2,c3", "1,2,3,0", "10,2,3,0", "4,8,1,0"])?;
    let options = CsvOptions {
        has_header: true,
        ..Default::default()
    };

    for layout in Layout::ALL {
        let mut table = Table::new(layout, 0);
        table.load(&mut CsvLoader::open(file.path(), &options)?)?;

        assert_eq!(table.num_rows(), 3);
        assert_eq!(table.num_cols(), 4);
        assert_eq!(table.column_sum()?, 15);
        assert_eq!(table.predicated_column_sum(1, 4)?, 15);
        assert_eq!(table.predicated_all_columns_sum(5)?, 15);
        assert_eq!(table.predicated_update(5)?, 2);
        assert_eq!(table.get_int_field(0, 3)?, 5);
        assert_eq!(table.get_int_field(1, 3)?, 0);
        assert_eq!(table.get_int_field(2, 3)?, 9);
    }
    Ok(())
}

#[timeout(5000)]
#[test]
fn test_config_selects_layout() -> Result<()> {
    let config =
        TableConfig::from_json_str(r#"{"layout": "indexed_row_major", "index_column": 1}"#)?;
    let mut table = Table::from_config(&config)?;
    assert_eq!(table.layout(), Layout::IndexedRowMajor);

    let file = write_csv(&["5;7", "6;7", "7;8"])?;
    let options = CsvOptions {
        delimiter: b';',
        has_header: false,
    };
    table.load(&mut CsvLoader::open(file.path(), &options)?)?;

    match &table {
        Table::IndexedRowMajor(indexed) => {
            assert_eq!(indexed.index_column(), 1);
            assert_eq!(indexed.rows_with_value(7), &[0, 1]);
        }
        other => panic!("Expected indexed table, got {:?}", other.layout()),
    }
    assert_eq!(table.column_sum()?, 18);
    Ok(())
}

#[timeout(5000)]
#[test]
fn test_malformed_csv_aborts_load() -> Result<()> {
    let file = write_csv(&["1,2,3,4", "5,six,7,8"])?;
    let result = CsvLoader::open(file.path(), &CsvOptions::default());
    assert!(matches!(result, Err(StoreError::MalformedRow { row: 1, .. })));
    Ok(())
}

#[timeout(5000)]
#[test]
fn test_index_column_beyond_csv_width() -> Result<()> {
    let file = write_csv(&["1,2", "3,4"])?;
    let mut table = Table::new(Layout::IndexedRowMajor, 2);
    let result = table.load(&mut CsvLoader::open(file.path(), &CsvOptions::default())?);
    assert!(matches!(
        result,
        Err(StoreError::IndexColumnOutOfRange { column: 2, num_cols: 2 })
    ));
    Ok(())
}

//! CSV backing file format.
//!
//! ```text
//! Item Name,Quantity,Reorder Level
//! Item A,100,20
//! ```

use std::path::Path;

use stockdesk_core::DomainError;

use crate::error::{InventoryError, InventoryResult};
use crate::record::InventoryRecord;
use crate::table::InventoryTable;

/// Header row of the inventory file, in column order.
pub const HEADER: [&str; 3] = ["Item Name", "Quantity", "Reorder Level"];

/// Read the inventory file into a table.
///
/// A missing file is an empty table. Any other read failure, a foreign
/// header, a malformed row or a repeated item name is an error naming the
/// offending 1-based data row.
pub fn read_table(path: &Path) -> InventoryResult<InventoryTable> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "inventory file not found; using empty table");
            return Ok(InventoryTable::new());
        }
        Err(e) => {
            return Err(InventoryError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes.as_slice());

    let csv_err = |source: csv::Error| InventoryError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let headers = reader.headers().map_err(csv_err)?.clone();
    let found: Vec<&str> = headers
        .iter()
        .enumerate()
        .map(|(idx, h)| if idx == 0 { h.trim_start_matches('\u{feff}') } else { h })
        .collect();
    if found != HEADER {
        return Err(InventoryError::InvalidHeader {
            path: path.to_path_buf(),
            found: found.join(","),
        });
    }

    let mut table = InventoryTable::new();
    for (idx, row) in reader.records().enumerate() {
        let row = row.map_err(csv_err)?;
        let invalid = |source: DomainError| InventoryError::InvalidRow {
            path: path.to_path_buf(),
            row: idx + 1,
            source,
        };

        let field = |i: usize| row.get(i).unwrap_or_default();
        let record = InventoryRecord::parse(field(0), field(1), field(2)).map_err(invalid)?;
        table.insert(record).map_err(invalid)?;
    }

    tracing::debug!(path = %path.display(), records = table.len(), "inventory file loaded");
    Ok(table)
}

/// Overwrite the inventory file with the full table.
///
/// The CSV is rendered in memory first, so a rendering failure never touches
/// the existing file. Missing parent directories are created.
pub fn write_table(path: &Path, table: &InventoryTable) -> InventoryResult<()> {
    let bytes = render(table).map_err(|source| InventoryError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    let write_err = |source: std::io::Error| InventoryError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, bytes).map_err(write_err)?;

    tracing::debug!(path = %path.display(), records = table.len(), "inventory file written");
    Ok(())
}

fn render(table: &InventoryTable) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for record in table {
        writer.serialize(record)?;
    }

    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

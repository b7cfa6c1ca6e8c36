//! Header-addressed CSV reading shared by the data loaders.

use std::path::{Path, PathBuf};

use csv::StringRecord;
use stockdesk_core::{DomainError, DomainResult, parse_count};

use crate::error::{LoadError, LoadResult};

/// A fully read CSV file whose cells are addressed by header name.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    headers: Vec<String>,
    rows: Vec<StringRecord>,
}

impl CsvSource {
    /// Read `path`. Header names are trimmed and stripped of a UTF-8 BOM.
    pub fn open(path: &Path) -> LoadResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LoadError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                LoadError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let csv_err = |source: csv::Error| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(bytes.as_slice());

        let headers = reader
            .headers()
            .map_err(csv_err)?
            .iter()
            .map(|h| h.trim_matches('\u{feff}').trim().to_string())
            .collect();

        let rows = reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .map_err(csv_err)?;

        tracing::debug!(path = %path.display(), rows = rows.len(), "data file read");
        Ok(Self {
            path: path.to_path_buf(),
            headers,
            rows,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column, matched case-insensitively.
    pub fn column(&self, name: &str) -> LoadResult<usize> {
        self.headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| LoadError::MissingColumn {
                column: name.to_string(),
                path: self.path.clone(),
            })
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().enumerate().map(move |(idx, record)| Row {
            source: self,
            number: idx + 1,
            record,
        })
    }
}

/// One data row with typed cell accessors that report row and column on failure.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    source: &'a CsvSource,
    number: usize,
    record: &'a StringRecord,
}

impl<'a> Row<'a> {
    /// 1-based data row number (the header is not counted).
    pub fn number(&self) -> usize {
        self.number
    }

    /// Trimmed cell text; empty when the row is short.
    pub fn text(&self, column: usize) -> &'a str {
        self.record.get(column).unwrap_or_default().trim()
    }

    /// Trimmed cell text that must not be empty.
    pub fn required(&self, column: usize) -> LoadResult<&'a str> {
        let value = self.text(column);
        if value.is_empty() {
            return Err(self.invalid(column, DomainError::validation("value cannot be empty")));
        }
        Ok(value)
    }

    /// Non-negative integer cell.
    pub fn count(&self, column: usize) -> LoadResult<u64> {
        let name = self.header(column);
        parse_count(name, self.text(column)).map_err(|e| self.invalid(column, e))
    }

    /// Non-negative integer cell; `None` when the cell is empty.
    pub fn optional_count(&self, column: usize) -> LoadResult<Option<u64>> {
        if self.text(column).is_empty() {
            return Ok(None);
        }
        self.count(column).map(Some)
    }

    /// Apply a custom cell parser, attributing its failure to this cell.
    pub fn parse<T>(
        &self,
        column: usize,
        parse: impl FnOnce(&str) -> DomainResult<T>,
    ) -> LoadResult<T> {
        parse(self.text(column)).map_err(|e| self.invalid(column, e))
    }

    fn header(&self, column: usize) -> &'a str {
        self.source
            .headers
            .get(column)
            .map(String::as_str)
            .unwrap_or_default()
    }

    fn invalid(&self, column: usize, source: DomainError) -> LoadError {
        LoadError::InvalidValue {
            path: self.source.path.clone(),
            row: self.number,
            column: self.header(column).to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn columns_are_found_by_name_regardless_of_case_and_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "data.csv", "\u{feff}SKU, Name ,stock\nA1,Thing,4\n");
        let source = CsvSource::open(&path).unwrap();

        assert_eq!(source.column("sku").unwrap(), 0);
        assert_eq!(source.column("name").unwrap(), 1);
        assert_eq!(source.column("Stock").unwrap(), 2);
        assert!(matches!(
            source.column("on_demand"),
            Err(LoadError::MissingColumn { .. })
        ));
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = CsvSource::open(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound { .. }));
    }

    #[test]
    fn row_accessors_report_row_and_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "data.csv", "name,stock\nA,1\n,x\n");
        let source = CsvSource::open(&path).unwrap();
        let stock = source.column("stock").unwrap();
        let name = source.column("name").unwrap();

        let rows: Vec<_> = source.rows().collect();
        assert_eq!(rows[0].count(stock).unwrap(), 1);
        assert_eq!(rows[1].number(), 2);

        match rows[1].count(stock).unwrap_err() {
            LoadError::InvalidValue { row, column, .. } => {
                assert_eq!(row, 2);
                assert_eq!(column, "stock");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
        assert!(rows[1].required(name).is_err());
    }

    #[test]
    fn empty_cells_are_absent_counts() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "data.csv", "a,b\n,3\n");
        let source = CsvSource::open(&path).unwrap();
        let row = source.rows().next().unwrap();
        assert_eq!(row.optional_count(0).unwrap(), None);
        assert_eq!(row.optional_count(1).unwrap(), Some(3));
    }

    #[test]
    fn ragged_rows_are_a_csv_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "data.csv", "a,b\n1,2,3\n");
        assert!(matches!(CsvSource::open(&path), Err(LoadError::Csv { .. })));
    }
}

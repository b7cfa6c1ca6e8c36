use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stockdesk_products::{CsvSource, LoadError, LoadResult};

use crate::period::parse_period;

/// Quantity of one product sold in one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub sku: String,
    pub name: String,
    /// First day of the month the quantity was sold in.
    pub period: NaiveDate,
    /// `None` when the cell was left empty (nothing recorded).
    pub quantity: Option<u64>,
}

impl SaleRecord {
    /// Units sold, with an empty cell counting as none.
    pub fn units(&self) -> u64 {
        self.quantity.unwrap_or_default()
    }
}

/// Load the wide `sales_data.csv` and reshape it to long form.
///
/// Id columns are `sku` and `name`; every other column header must be a
/// `MM/YYYY` period. Empty cells become records with no quantity, so totals
/// treat them as zero while averages skip them. Records come out
/// grouped by period column (in header order), then by source row.
pub fn load_sales(path: &Path) -> LoadResult<Vec<SaleRecord>> {
    let source = CsvSource::open(path)?;
    let sku = source.column("sku")?;
    let name = source.column("name")?;

    let mut periods = Vec::new();
    for (idx, header) in source.headers().iter().enumerate() {
        if idx == sku || idx == name {
            continue;
        }
        let period = parse_period(header).map_err(|e| LoadError::UnexpectedColumn {
            column: header.clone(),
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        periods.push((idx, period));
    }

    let mut sales = Vec::with_capacity(periods.len() * source.len());
    for &(column, period) in &periods {
        for row in source.rows() {
            sales.push(SaleRecord {
                sku: row.required(sku)?.to_string(),
                name: row.text(name).to_string(),
                period,
                quantity: row.optional_count(column)?,
            });
        }
    }

    tracing::info!(
        path = %path.display(),
        products = source.len(),
        periods = periods.len(),
        records = sales.len(),
        "sales data loaded"
    );
    Ok(sales)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sales_data.csv");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    fn month(year: i32, month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, 1).unwrap()
    }

    #[test]
    fn melts_wide_rows_into_period_records() {
        let (_dir, path) = write("sku,name,01/2023,02/2023\nA1,Mug,3,4\nB2,Print,,7\n");

        let sales = load_sales(&path).unwrap();
        let flat: Vec<_> = sales
            .iter()
            .map(|s| (s.sku.as_str(), s.period, s.quantity))
            .collect();
        assert_eq!(
            flat,
            vec![
                ("A1", month(2023, 1), Some(3)),
                ("B2", month(2023, 1), None),
                ("A1", month(2023, 2), Some(4)),
                ("B2", month(2023, 2), Some(7)),
            ]
        );
        assert_eq!(sales[1].name, "Print");
        assert_eq!(sales[1].units(), 0);
    }

    #[test]
    fn id_columns_can_appear_anywhere() {
        let (_dir, path) = write("12/2022,name,sku\n5,Mug,A1\n");
        let sales = load_sales(&path).unwrap();
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].period, month(2022, 12));
        assert_eq!(sales[0].quantity, Some(5));
    }

    #[test]
    fn unknown_header_is_rejected() {
        let (_dir, path) = write("sku,name,total\nA1,Mug,3\n");
        match load_sales(&path).unwrap_err() {
            LoadError::UnexpectedColumn { column, .. } => assert_eq!(column, "total"),
            other => panic!("expected UnexpectedColumn, got {other:?}"),
        }
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let (_dir, path) = write("sku,name,01/2023\nA1,Mug,-1\n");
        assert!(matches!(
            load_sales(&path).unwrap_err(),
            LoadError::InvalidValue { row: 1, .. }
        ));
    }

    #[test]
    fn file_without_periods_has_no_sales() {
        let (_dir, path) = write("sku,name\nA1,Mug\n");
        assert!(load_sales(&path).unwrap().is_empty());
    }
}

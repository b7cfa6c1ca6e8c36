use std::path::Path;

use serde::{Deserialize, Serialize};
use stockdesk_core::{DomainError, DomainResult};
use stockdesk_inventory::StockSource;

use crate::csv_source::CsvSource;
use crate::error::LoadResult;

/// One row of `product_data.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRow {
    pub sku: String,
    pub name: String,
    pub stock: u64,
    /// Made to order rather than held in stock.
    pub on_demand: bool,
}

impl StockSource for ProductRow {
    fn sku(&self) -> &str {
        &self.sku
    }

    fn stock(&self) -> u64 {
        self.stock
    }
}

/// Load `product_data.csv` (columns `sku`, `name`, `stock`, `on_demand`).
pub fn load_products(path: &Path) -> LoadResult<Vec<ProductRow>> {
    let source = CsvSource::open(path)?;
    let sku = source.column("sku")?;
    let name = source.column("name")?;
    let stock = source.column("stock")?;
    let on_demand = source.column("on_demand")?;

    let products = source
        .rows()
        .map(|row| {
            Ok(ProductRow {
                sku: row.required(sku)?.to_string(),
                name: row.text(name).to_string(),
                stock: row.count(stock)?,
                on_demand: row.parse(on_demand, parse_on_demand)?,
            })
        })
        .collect::<LoadResult<Vec<_>>>()?;

    tracing::info!(path = %path.display(), products = products.len(), "product data loaded");
    Ok(products)
}

/// `yes` / `no`, case-insensitive.
fn parse_on_demand(text: &str) -> DomainResult<bool> {
    if text.eq_ignore_ascii_case("yes") {
        Ok(true)
    } else if text.eq_ignore_ascii_case("no") {
        Ok(false)
    } else {
        Err(DomainError::validation(format!(
            "on_demand must be 'yes' or 'no' (got '{text}')"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;

    fn write(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("product_data.csv");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_rows_in_file_order() {
        let (_dir, path) = write(
            "sku,name,stock,on_demand,price\n\
             A1,Blue Mug,12,no,4.50\n\
             B2,Custom Print,0,YES,19.99\n",
        );

        let products = load_products(&path).unwrap();
        assert_eq!(
            products,
            vec![
                ProductRow {
                    sku: "A1".to_string(),
                    name: "Blue Mug".to_string(),
                    stock: 12,
                    on_demand: false,
                },
                ProductRow {
                    sku: "B2".to_string(),
                    name: "Custom Print".to_string(),
                    stock: 0,
                    on_demand: true,
                },
            ]
        );
    }

    #[test]
    fn products_feed_inventory_reset() {
        let (_dir, path) = write("sku,name,stock,on_demand\nA1,Mug,5,no\nB2,Print,0,yes\n");
        let products = load_products(&path).unwrap();
        let table = stockdesk_inventory::InventoryTable::from_source(&products).unwrap();

        let rows: Vec<_> = table
            .iter()
            .map(|r| (r.item_name.as_str(), r.quantity, r.reorder_level))
            .collect();
        assert_eq!(rows, vec![("A1", 5, 0), ("B2", 0, 0)]);
    }

    #[test]
    fn missing_column_is_reported() {
        let (_dir, path) = write("sku,name,stock\nA1,Mug,5\n");
        match load_products(&path).unwrap_err() {
            LoadError::MissingColumn { column, .. } => assert_eq!(column, "on_demand"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn bad_flag_and_negative_stock_are_rejected() {
        let (_dir, path) = write("sku,name,stock,on_demand\nA1,Mug,5,maybe\n");
        assert!(matches!(
            load_products(&path).unwrap_err(),
            LoadError::InvalidValue { row: 1, .. }
        ));

        let (_dir, path) = write("sku,name,stock,on_demand\nA1,Mug,5,no\nB2,Print,-3,no\n");
        match load_products(&path).unwrap_err() {
            LoadError::InvalidValue { row, column, .. } => {
                assert_eq!(row, 2);
                assert_eq!(column, "stock");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn empty_sku_is_rejected() {
        let (_dir, path) = write("sku,name,stock,on_demand\n ,Mug,5,no\n");
        assert!(matches!(
            load_products(&path).unwrap_err(),
            LoadError::InvalidValue { .. }
        ));
    }
}

//! Per-column descriptive statistics for an arbitrary CSV file.

use std::path::Path;

use serde::Serialize;
use stockdesk_products::{CsvSource, LoadResult};

use crate::summary::{mean, quantile_sorted, stddev_sample};

/// Count, mean, spread and quartiles of one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStats {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; `None` for a single value.
    pub std: Option<f64>,
    pub min: f64,
    #[serde(rename = "25%")]
    pub q25: f64,
    #[serde(rename = "50%")]
    pub median: f64,
    #[serde(rename = "75%")]
    pub q75: f64,
    pub max: f64,
}

impl ColumnStats {
    fn of(column: &str, mut values: Vec<f64>) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mean = mean(&values);
        let std = stddev_sample(&values, mean);
        values.sort_by(f64::total_cmp);
        Some(Self {
            column: column.to_string(),
            count: values.len(),
            mean,
            std,
            min: values[0],
            q25: quantile_sorted(&values, 0.25),
            median: quantile_sorted(&values, 0.5),
            q75: quantile_sorted(&values, 0.75),
            max: values[values.len() - 1],
        })
    }
}

/// Statistics for every numeric column, in header order.
///
/// A column is numeric when each non-empty cell parses as a number. Empty
/// cells are ignored; a column with no values at all is skipped.
pub fn describe(source: &CsvSource) -> Vec<ColumnStats> {
    source
        .headers()
        .iter()
        .enumerate()
        .filter_map(|(idx, header)| {
            let values = numeric_column(source, idx)?;
            ColumnStats::of(header, values)
        })
        .collect()
}

pub fn describe_file(path: &Path) -> LoadResult<Vec<ColumnStats>> {
    let source = CsvSource::open(path)?;
    let stats = describe(&source);
    tracing::debug!(
        path = %path.display(),
        columns = stats.len(),
        "described numeric columns"
    );
    Ok(stats)
}

fn numeric_column(source: &CsvSource, column: usize) -> Option<Vec<f64>> {
    let mut values = Vec::with_capacity(source.len());
    for row in source.rows() {
        let text = row.text(column);
        if text.is_empty() {
            continue;
        }
        values.push(text.parse::<f64>().ok().filter(|v| v.is_finite())?);
    }
    Some(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn describe_text(contents: &str) -> Vec<ColumnStats> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, contents).unwrap();
        describe_file(&path).unwrap()
    }

    #[test]
    fn skips_text_columns_and_keeps_header_order() {
        let stats = describe_text("sku,name,01/2023,02/2023\nA,Shirt,10,4\nB,Hat,20,6\n");
        let columns: Vec<_> = stats.iter().map(|s| s.column.as_str()).collect();
        assert_eq!(columns, vec!["01/2023", "02/2023"]);
    }

    #[test]
    fn quartiles_match_linear_interpolation() {
        let stats = describe_text("stock\n1\n2\n3\n4\n");
        let s = &stats[0];
        assert_eq!(s.count, 4);
        assert!(close(s.mean, 2.5));
        assert!(close(s.min, 1.0));
        assert!(close(s.q25, 1.75));
        assert!(close(s.median, 2.5));
        assert!(close(s.q75, 3.25));
        assert!(close(s.max, 4.0));
        assert!(close(s.std.unwrap(), (5.0f64 / 3.0).sqrt()));
    }

    #[test]
    fn empty_cells_are_ignored() {
        let stats = describe_text("a,b\n5,\n,\n7,\n");
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].column, "a");
        assert_eq!(stats[0].count, 2);
        assert!(close(stats[0].mean, 6.0));
    }

    #[test]
    fn single_value_has_no_std() {
        let stats = describe_text("a\n3.5\n");
        assert_eq!(stats[0].std, None);
        assert!(close(stats[0].median, 3.5));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(describe_file(&dir.path().join("absent.csv")).is_err());
    }
}

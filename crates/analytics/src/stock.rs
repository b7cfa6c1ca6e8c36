//! Stock-level views over product and material data.

use serde::Serialize;
use stockdesk_products::{MaterialRow, ProductRow};

use crate::summary::SeriesSummary;

/// Colour band of a stock level on the stock charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StockBand {
    Healthy,
    Low,
    Critical,
}

impl StockBand {
    /// Products: healthy above 50, low above 20.
    pub fn for_product(stock: u64) -> Self {
        Self::classify(stock, 50, 20)
    }

    /// Materials: healthy above 100, low above 50.
    pub fn for_material(stock: u64) -> Self {
        Self::classify(stock, 100, 50)
    }

    fn classify(stock: u64, healthy_above: u64, low_above: u64) -> Self {
        if stock > healthy_above {
            StockBand::Healthy
        } else if stock > low_above {
            StockBand::Low
        } else {
            StockBand::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockBand::Healthy => "healthy",
            StockBand::Low => "low",
            StockBand::Critical => "critical",
        }
    }
}

/// Stock of one named product or material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockLevel {
    pub name: String,
    pub stock: u64,
    pub band: StockBand,
}

/// Number of products per on-demand flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagCount {
    pub on_demand: bool,
    pub count: usize,
}

impl FlagCount {
    pub fn label(&self) -> &'static str {
        if self.on_demand { "On Demand" } else { "Regular" }
    }
}

/// Product counts grouped by the on-demand flag, regular first.
///
/// Flags with no products are omitted.
pub fn on_demand_vs_regular(products: &[ProductRow]) -> Vec<FlagCount> {
    [false, true]
        .into_iter()
        .map(|on_demand| FlagCount {
            on_demand,
            count: products.iter().filter(|p| p.on_demand == on_demand).count(),
        })
        .filter(|c| c.count > 0)
        .collect()
}

/// The flag counts with their total and the summary of the counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlagSummary {
    pub counts: Vec<FlagCount>,
    pub total: usize,
    pub summary: Option<SeriesSummary>,
}

impl FlagSummary {
    pub fn of(products: &[ProductRow]) -> Self {
        let counts = on_demand_vs_regular(products);
        let values: Vec<f64> = counts.iter().map(|c| c.count as f64).collect();
        Self {
            total: counts.iter().map(|c| c.count).sum(),
            summary: SeriesSummary::of(&values),
            counts,
        }
    }
}

/// Stock levels of products that are held in stock (not made on demand).
pub fn product_stock(products: &[ProductRow]) -> Vec<StockLevel> {
    products
        .iter()
        .filter(|p| !p.on_demand)
        .map(|p| StockLevel {
            name: p.name.clone(),
            stock: p.stock,
            band: StockBand::for_product(p.stock),
        })
        .collect()
}

pub fn material_stock(materials: &[MaterialRow]) -> Vec<StockLevel> {
    materials
        .iter()
        .map(|m| StockLevel {
            name: m.name.clone(),
            stock: m.stock,
            band: StockBand::for_material(m.stock),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(sku: &str, stock: u64, on_demand: bool) -> ProductRow {
        ProductRow {
            sku: sku.to_string(),
            name: format!("{sku} name"),
            stock,
            on_demand,
        }
    }

    #[test]
    fn product_bands() {
        assert_eq!(StockBand::for_product(51), StockBand::Healthy);
        assert_eq!(StockBand::for_product(50), StockBand::Low);
        assert_eq!(StockBand::for_product(21), StockBand::Low);
        assert_eq!(StockBand::for_product(20), StockBand::Critical);
        assert_eq!(StockBand::for_product(0), StockBand::Critical);
    }

    #[test]
    fn material_bands() {
        assert_eq!(StockBand::for_material(101), StockBand::Healthy);
        assert_eq!(StockBand::for_material(100), StockBand::Low);
        assert_eq!(StockBand::for_material(50), StockBand::Critical);
    }

    #[test]
    fn counts_regular_before_on_demand() {
        let products = vec![
            product("A", 1, true),
            product("B", 1, false),
            product("C", 1, true),
        ];
        let counts = on_demand_vs_regular(&products);
        assert_eq!(
            counts,
            vec![
                FlagCount { on_demand: false, count: 1 },
                FlagCount { on_demand: true, count: 2 },
            ]
        );
        assert_eq!(counts[0].label(), "Regular");
        assert_eq!(counts[1].label(), "On Demand");
    }

    #[test]
    fn absent_flag_is_omitted() {
        let counts = on_demand_vs_regular(&[product("A", 1, false)]);
        assert_eq!(counts, vec![FlagCount { on_demand: false, count: 1 }]);
    }

    #[test]
    fn flag_summary_totals_and_summarizes_counts() {
        let products = vec![
            product("A", 1, false),
            product("B", 1, false),
            product("C", 1, false),
            product("D", 1, true),
        ];
        let flags = FlagSummary::of(&products);
        assert_eq!(flags.total, 4);
        assert_eq!(flags.counts.len(), 2);

        let summary = flags.summary.unwrap();
        assert!((summary.mean - 2.0).abs() < 1e-9);
        assert!((summary.std_dev.unwrap() - 2f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn flag_summary_of_nothing_has_no_summary() {
        let flags = FlagSummary::of(&[]);
        assert_eq!(flags.total, 0);
        assert!(flags.counts.is_empty());
        assert_eq!(flags.summary, None);
    }

    #[test]
    fn product_stock_excludes_on_demand() {
        let levels = product_stock(&[product("A", 60, false), product("B", 5, true)]);
        assert_eq!(
            levels,
            vec![StockLevel {
                name: "A name".to_string(),
                stock: 60,
                band: StockBand::Healthy,
            }]
        );
    }

    #[test]
    fn material_stock_keeps_every_row() {
        let levels = material_stock(&[
            MaterialRow { name: "Cotton".to_string(), stock: 140 },
            MaterialRow { name: "Thread".to_string(), stock: 35 },
        ]);
        let bands: Vec<_> = levels.iter().map(|l| l.band).collect();
        assert_eq!(bands, vec![StockBand::Healthy, StockBand::Critical]);
    }
}

//! The full analysis dashboard as one serializable value.

use serde::Serialize;
use stockdesk_products::{MaterialRow, ProductRow};
use stockdesk_sales::SaleRecord;

use crate::sales::{
    MonthFilter, MonthlyTotal, PeriodTotal, Seasonality, TrendLine, monthly_sales,
    monthly_seasonality, sales_trends,
};
use crate::stock::{FlagSummary, StockLevel, material_stock, product_stock};
use crate::summary::SeriesSummary;

/// A series together with the summary annotated on its chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series<T> {
    pub points: Vec<T>,
    pub summary: Option<SeriesSummary>,
}

impl<T> Series<T> {
    fn new(points: Vec<T>, value: impl Fn(&T) -> f64) -> Self {
        let values: Vec<f64> = points.iter().map(value).collect();
        Self {
            summary: SeriesSummary::of(&values),
            points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    #[serde(serialize_with = "serialize_filter")]
    pub month: MonthFilter,
    pub sales_trends: Series<PeriodTotal>,
    pub sales_trend_line: Option<TrendLine>,
    pub monthly_sales: Series<MonthlyTotal>,
    pub seasonality: Series<Seasonality>,
    pub on_demand_vs_regular: FlagSummary,
    pub product_stock: Series<StockLevel>,
    pub material_stock: Series<StockLevel>,
}

impl Report {
    pub fn build(
        products: &[ProductRow],
        materials: &[MaterialRow],
        sales: &[SaleRecord],
        month: MonthFilter,
    ) -> Self {
        let trends = sales_trends(sales, month);
        let report = Self {
            month,
            sales_trend_line: TrendLine::fit(&trends),
            sales_trends: Series::new(trends, |t| t.quantity as f64),
            monthly_sales: Series::new(monthly_sales(sales, month), |t| t.quantity as f64),
            seasonality: Series::new(monthly_seasonality(sales), |s| s.mean_quantity),
            on_demand_vs_regular: FlagSummary::of(products),
            product_stock: Series::new(product_stock(products), |l| l.stock as f64),
            material_stock: Series::new(material_stock(materials), |l| l.stock as f64),
        };
        tracing::debug!(
            %month,
            periods = report.sales_trends.points.len(),
            products = products.len(),
            materials = materials.len(),
            "report built"
        );
        report
    }
}

fn serialize_filter<S: serde::Serializer>(month: &MonthFilter, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(month)
}

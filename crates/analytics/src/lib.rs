//! `stockdesk-analytics`
//!
//! **Responsibility:** read-only aggregation over loaded data.
//!
//! Nothing here mutates inventory or touches the inventory file. Inputs are
//! the rows produced by the product and sales loaders; outputs are the series
//! a chart or a statistics dialog would display.

pub mod describe;
pub mod report;
pub mod sales;
pub mod stock;
pub mod summary;

pub use describe::{ColumnStats, describe, describe_file};
pub use report::{Report, Series};
pub use sales::{
    MonthFilter, MonthlyTotal, PeriodTotal, Seasonality, TrendLine, fiscal_quarter,
    monthly_sales, monthly_seasonality, sales_trends,
};
pub use stock::{
    FlagCount, FlagSummary, StockBand, StockLevel, material_stock, on_demand_vs_regular,
    product_stock,
};
pub use summary::SeriesSummary;

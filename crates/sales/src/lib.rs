//! Sales data loader.
//!
//! `sales_data.csv` is wide: one row per product with a column per month.
//! [`load_sales`] reshapes it to one [`SaleRecord`] per product and month.

pub mod period;
pub mod sale;

pub use period::{month_label, parse_period};
pub use sale::{SaleRecord, load_sales};

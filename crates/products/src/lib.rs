//! Product and material data loaders.
//!
//! Reads `product_data.csv` and `mat_data.csv` into typed rows. Columns are
//! located by header name, so extra columns and column order do not matter.
//! [`CsvSource`] is shared with the sales loader.

pub mod csv_source;
pub mod error;
pub mod material;
pub mod product;

pub use csv_source::CsvSource;
pub use error::{LoadError, LoadResult};
pub use material::{MaterialRow, load_materials};
pub use product::{ProductRow, load_products};

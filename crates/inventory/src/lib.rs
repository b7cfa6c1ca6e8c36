//! Inventory record store.
//!
//! An ordered, name-keyed table of inventory records mirrored to a CSV file.
//! [`InventoryTable`] holds the pure in-memory rules (uniqueness, validation,
//! ordering); [`InventoryStore`] owns a table and rewrites its backing file
//! after every successful mutation.

pub mod error;
pub mod file;
pub mod record;
pub mod source;
pub mod store;
pub mod table;

pub use error::{ErrorKind, InventoryError, InventoryResult};
pub use file::{HEADER, read_table, write_table};
pub use record::InventoryRecord;
pub use source::StockSource;
pub use store::InventoryStore;
pub use table::InventoryTable;

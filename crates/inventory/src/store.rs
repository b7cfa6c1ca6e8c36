//! File-backed inventory store.

use std::path::{Path, PathBuf};

use stockdesk_core::DomainResult;

use crate::error::InventoryResult;
use crate::file::{read_table, write_table};
use crate::record::InventoryRecord;
use crate::source::StockSource;
use crate::table::InventoryTable;

/// Owns an [`InventoryTable`] and its CSV backing file.
///
/// Every mutator computes the next table on a copy, writes the whole copy to
/// disk, and only then replaces the in-memory table. A failed write leaves
/// both the file and the table as they were.
#[derive(Debug, Clone)]
pub struct InventoryStore {
    path: PathBuf,
    table: InventoryTable,
}

impl InventoryStore {
    /// A store for `path` with an empty in-memory table. Nothing is read.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            table: InventoryTable::new(),
        }
    }

    /// Initialize the backing file, then load it.
    pub fn open(path: impl Into<PathBuf>) -> InventoryResult<Self> {
        let mut store = Self::new(path);
        store.initialize()?;
        store.table = store.load()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn table(&self) -> &InventoryTable {
        &self.table
    }

    /// Records in current order, for display.
    pub fn list(&self) -> &[InventoryRecord] {
        self.table.records()
    }

    /// Create the backing file with the seed records if it does not exist.
    ///
    /// Returns `true` when the file was created. Idempotent.
    pub fn initialize(&self) -> InventoryResult<bool> {
        if self.path.exists() {
            tracing::info!(path = %self.path.display(), "inventory file already exists");
            return Ok(false);
        }
        write_table(&self.path, &InventoryTable::seed())?;
        tracing::info!(path = %self.path.display(), "inventory file created");
        Ok(true)
    }

    /// Read the backing file. A missing file is an empty table.
    pub fn load(&self) -> InventoryResult<InventoryTable> {
        read_table(&self.path)
    }

    /// Overwrite the backing file with `table`.
    pub fn save(&self, table: &InventoryTable) -> InventoryResult<()> {
        write_table(&self.path, table)?;
        tracing::info!(path = %self.path.display(), records = table.len(), "inventory saved");
        Ok(())
    }

    /// Replace the in-memory table with the file contents.
    pub fn reload(&mut self) -> InventoryResult<&InventoryTable> {
        self.table = self.load()?;
        Ok(&self.table)
    }

    /// Re-save the in-memory table as is.
    pub fn flush(&self) -> InventoryResult<()> {
        self.save(&self.table)
    }

    pub fn add(
        &mut self,
        item_name: &str,
        quantity: &str,
        reorder_level: &str,
    ) -> InventoryResult<InventoryRecord> {
        let record = self.commit(|table| table.add(item_name, quantity, reorder_level).cloned())?;
        tracing::info!(item = %record.item_name, "item added to inventory");
        Ok(record)
    }

    /// Set an item's quantity; returns the previous quantity.
    pub fn update(&mut self, item_name: &str, new_quantity: &str) -> InventoryResult<u64> {
        let previous = self.commit(|table| table.update(item_name, new_quantity))?;
        tracing::info!(item = %item_name, previous, "item updated in inventory");
        Ok(previous)
    }

    pub fn remove(&mut self, item_name: &str) -> InventoryResult<InventoryRecord> {
        let removed = self.commit(|table| table.remove(item_name))?;
        tracing::info!(item = %removed.item_name, "item removed from inventory");
        Ok(removed)
    }

    /// [`InventoryStore::update`] addressed by selection index.
    pub fn update_at(
        &mut self,
        index: usize,
        new_quantity: &str,
    ) -> InventoryResult<(String, u64)> {
        let item_name = self.table.record_at(index)?.item_name.clone();
        let previous = self.update(&item_name, new_quantity)?;
        Ok((item_name, previous))
    }

    /// [`InventoryStore::remove`] addressed by selection index.
    pub fn remove_at(&mut self, index: usize) -> InventoryResult<InventoryRecord> {
        let item_name = self.table.record_at(index)?.item_name.clone();
        self.remove(&item_name)
    }

    /// Replace the whole table with one record per product row and persist it.
    ///
    /// Destructive: callers must confirm with the user first.
    pub fn reset_from_source<S: StockSource>(
        &mut self,
        rows: &[S],
    ) -> InventoryResult<&InventoryTable> {
        let next = InventoryTable::from_source(rows)?;
        self.save(&next)?;
        let discarded = core::mem::replace(&mut self.table, next);
        tracing::warn!(
            discarded = discarded.len(),
            records = self.table.len(),
            "inventory reset from product data"
        );
        Ok(&self.table)
    }

    fn commit<T>(
        &mut self,
        op: impl FnOnce(&mut InventoryTable) -> DomainResult<T>,
    ) -> InventoryResult<T> {
        let mut next = self.table.clone();
        let out = op(&mut next)?;
        self.save(&next)?;
        self.table = next;
        Ok(out)
    }
}

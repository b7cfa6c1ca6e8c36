use serde::Serialize;

use stockdesk_core::{DomainError, DomainResult, parse_count};

use crate::record::{InventoryRecord, validate_item_name};
use crate::source::StockSource;

/// Ordered inventory table keyed by item name.
///
/// # Invariants
/// - `item_name` is unique across the table.
/// - Iteration order is insertion order; updates keep a record in place and
///   removals keep the relative order of the rest.
///
/// Every operation either succeeds completely or leaves the table unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InventoryTable {
    records: Vec<InventoryRecord>,
}

impl InventoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three records a fresh inventory file is created with.
    pub fn seed() -> Self {
        let records = [("Item A", 100, 20), ("Item B", 50, 10), ("Item C", 75, 15)]
            .into_iter()
            .map(|(item_name, quantity, reorder_level)| InventoryRecord {
                item_name: item_name.to_string(),
                quantity,
                reorder_level,
            })
            .collect();
        Self { records }
    }

    /// Build a table from records, rejecting duplicate names.
    pub fn from_records(records: impl IntoIterator<Item = InventoryRecord>) -> DomainResult<Self> {
        let mut table = Self::new();
        for record in records {
            table.insert(record)?;
        }
        Ok(table)
    }

    /// Build a table from product rows: `sku` becomes the item name, `stock`
    /// the quantity, and the reorder level is zero.
    pub fn from_source<S: StockSource>(rows: &[S]) -> DomainResult<Self> {
        let mut table = Self::new();
        for (idx, row) in rows.iter().enumerate() {
            let item_name = validate_item_name(row.sku()).map_err(|_| {
                DomainError::validation(format!("product row {} has an empty sku", idx + 1))
            })?;
            table.insert(InventoryRecord {
                item_name,
                quantity: row.stock(),
                reorder_level: 0,
            })?;
        }
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in current order.
    pub fn records(&self) -> &[InventoryRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventoryRecord> {
        self.records.iter()
    }

    pub fn contains(&self, item_name: &str) -> bool {
        self.position(item_name).is_some()
    }

    pub fn get(&self, item_name: &str) -> Option<&InventoryRecord> {
        self.position(item_name).map(|idx| &self.records[idx])
    }

    /// Resolve a zero-based selection index (e.g. a list row) to a record.
    pub fn record_at(&self, index: usize) -> DomainResult<&InventoryRecord> {
        self.records
            .get(index)
            .ok_or_else(|| DomainError::not_found(format!("selection #{index}")))
    }

    /// Records at or below their reorder level, in table order.
    pub fn needs_reorder(&self) -> impl Iterator<Item = &InventoryRecord> {
        self.records.iter().filter(|r| r.needs_reorder())
    }

    /// Append an already-validated record.
    pub fn insert(&mut self, record: InventoryRecord) -> DomainResult<()> {
        if self.contains(&record.item_name) {
            return Err(DomainError::duplicate(record.item_name));
        }
        self.records.push(record);
        Ok(())
    }

    /// Validate caller-supplied text and append a new record.
    ///
    /// Validation runs before the duplicate check, so bad input is reported
    /// as such even when the name is already taken.
    pub fn add(
        &mut self,
        item_name: &str,
        quantity: &str,
        reorder_level: &str,
    ) -> DomainResult<&InventoryRecord> {
        let record = InventoryRecord::parse(item_name, quantity, reorder_level)?;
        self.insert(record)?;
        Ok(&self.records[self.records.len() - 1])
    }

    /// Replace the quantity of an existing record, returning the previous value.
    ///
    /// The quantity text is validated exactly like [`InventoryTable::add`]; the
    /// reorder level is untouched.
    pub fn update(&mut self, item_name: &str, new_quantity: &str) -> DomainResult<u64> {
        let quantity = parse_count("quantity", new_quantity)?;
        let idx = self
            .position(item_name)
            .ok_or_else(|| DomainError::not_found(item_name.trim()))?;
        Ok(core::mem::replace(&mut self.records[idx].quantity, quantity))
    }

    /// Delete a record, returning it.
    pub fn remove(&mut self, item_name: &str) -> DomainResult<InventoryRecord> {
        let idx = self
            .position(item_name)
            .ok_or_else(|| DomainError::not_found(item_name.trim()))?;
        Ok(self.records.remove(idx))
    }

    /// Names are stored trimmed, so lookups trim too.
    fn position(&self, item_name: &str) -> Option<usize> {
        let key = item_name.trim();
        self.records.iter().position(|r| r.item_name == key)
    }
}

impl<'a> IntoIterator for &'a InventoryTable {
    type Item = &'a InventoryRecord;
    type IntoIter = core::slice::Iter<'a, InventoryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

use serde::{Deserialize, Serialize};

use stockdesk_core::{DomainError, DomainResult, parse_count};

/// A single inventory line: an item name with its stock and reorder threshold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub item_name: String,
    pub quantity: u64,
    pub reorder_level: u64,
}

impl InventoryRecord {
    /// Build a record from already-typed values, validating the name.
    pub fn new(
        item_name: impl Into<String>,
        quantity: u64,
        reorder_level: u64,
    ) -> DomainResult<Self> {
        let item_name = validate_item_name(&item_name.into())?;
        Ok(Self {
            item_name,
            quantity,
            reorder_level,
        })
    }

    /// Build a record from caller-supplied text (form fields, CSV cells).
    ///
    /// The name is trimmed and must be non-empty; both counts must be
    /// non-negative integers.
    pub fn parse(item_name: &str, quantity: &str, reorder_level: &str) -> DomainResult<Self> {
        let item_name = validate_item_name(item_name)?;
        let quantity = parse_count("quantity", quantity)?;
        let reorder_level = parse_count("reorder level", reorder_level)?;
        Ok(Self {
            item_name,
            quantity,
            reorder_level,
        })
    }

    /// True when stock has fallen to or below the reorder threshold.
    pub fn needs_reorder(&self) -> bool {
        self.quantity <= self.reorder_level
    }
}

impl core::fmt::Display for InventoryRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} - Qty: {} - Reorder Level: {}",
            self.item_name, self.quantity, self.reorder_level
        )
    }
}

pub(crate) fn validate_item_name(item_name: &str) -> DomainResult<String> {
    let trimmed = item_name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation("item name cannot be empty"));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_valid_text() {
        let record = InventoryRecord::parse("  Widget ", "10", "2").unwrap();
        assert_eq!(record, InventoryRecord::new("Widget", 10, 2).unwrap());
    }

    #[test]
    fn parse_rejects_empty_name() {
        let err = InventoryRecord::parse("   ", "10", "2").unwrap_err();
        assert_eq!(err, DomainError::validation("item name cannot be empty"));
    }

    #[test]
    fn parse_rejects_bad_counts() {
        assert!(InventoryRecord::parse("Widget", "ten", "2").unwrap_err().is_validation());
        assert!(InventoryRecord::parse("Widget", "10", "-1").unwrap_err().is_validation());
        assert!(InventoryRecord::parse("Widget", "", "2").unwrap_err().is_validation());
    }

    #[test]
    fn names_are_case_sensitive() {
        let lower = InventoryRecord::new("widget", 1, 0).unwrap();
        let upper = InventoryRecord::new("Widget", 1, 0).unwrap();
        assert_ne!(lower.item_name, upper.item_name);
    }

    #[test]
    fn needs_reorder_at_or_below_threshold() {
        assert!(InventoryRecord::new("A", 5, 5).unwrap().needs_reorder());
        assert!(InventoryRecord::new("A", 4, 5).unwrap().needs_reorder());
        assert!(!InventoryRecord::new("A", 6, 5).unwrap().needs_reorder());
    }

    #[test]
    fn display_matches_list_line() {
        let record = InventoryRecord::new("Item A", 100, 20).unwrap();
        assert_eq!(record.to_string(), "Item A - Qty: 100 - Reorder Level: 20");
    }
}

//! Seam between the inventory store and the product data loader.

/// A row of product data that can seed the inventory on reset.
///
/// Implemented by the product loader; the store only needs an identifier and
/// a stock count.
pub trait StockSource {
    fn sku(&self) -> &str;
    fn stock(&self) -> u64;
}

impl<S: StockSource + ?Sized> StockSource for &S {
    fn sku(&self) -> &str {
        (**self).sku()
    }

    fn stock(&self) -> u64 {
        (**self).stock()
    }
}

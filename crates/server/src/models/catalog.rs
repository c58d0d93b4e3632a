//! The canonical catalog projection used by the product feed.

use serde::Serialize;

/// One visible, named product as it appears in the feed.
///
/// Produced by normalizing a raw catalog row once at the store boundary
/// (see `db::products`): the brand default, the price coercion, and the
/// image URL absolutization have all already been applied. The feed
/// renderer only escapes and serializes.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    /// Defaults to "Generic" when the row carries no brand.
    pub brand: String,
    /// Product type/category; rendered as a custom label when non-empty.
    pub product_type: Option<String>,
    pub description: String,
    /// Sale price formatted to exactly two decimal places (e.g. "9.50").
    pub price: String,
    /// Absolute image URL, or `None` when the row has no image.
    pub image_url: Option<String>,
    /// Combined shop + warehouse stock.
    pub quantity: i64,
}

impl CatalogItem {
    /// Merchant-feed availability derived from the combined stock quantity.
    #[must_use]
    pub const fn availability(&self) -> &'static str {
        if self.quantity > 0 {
            "in stock"
        } else {
            "out of stock"
        }
    }
}

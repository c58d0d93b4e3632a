//! Product repository and the store-boundary feed normalization.
//!
//! Catalog rows accumulated loose shapes over the years (nullable brands,
//! text prices, relative image paths), so every fallback is applied exactly
//! once here and the rest of the feed pipeline only ever sees the canonical
//! [`CatalogItem`] projection.

use sqlx::PgPool;

use super::RepositoryError;
use crate::models::CatalogItem;

/// Maximum number of catalog rows fetched per feed request.
pub const FEED_ROW_LIMIT: i64 = 5000;

/// Brand substituted when a row carries none.
const DEFAULT_BRAND: &str = "Generic";

/// Feed source query.
///
/// Rows hidden explicitly (`is_visible = FALSE`) are excluded at the source;
/// absent/true visibility is included. Newest products first, capped at the
/// row limit.
const FEED_QUERY: &str = r"
    SELECT id::text AS id,
           name,
           brand,
           product_type,
           description,
           sale_price::text AS sale_price,
           image_url,
           cs_shop::bigint AS shop_quantity,
           cs_war::bigint AS warehouse_quantity,
           is_visible
    FROM product
    WHERE is_visible IS DISTINCT FROM FALSE
    ORDER BY created_at DESC
    LIMIT $1
";

/// One raw catalog row, before normalization.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRow {
    pub id: Option<String>,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub product_type: Option<String>,
    pub description: Option<String>,
    /// Stored loosely (legacy rows hold free text); coerced during normalization.
    pub sale_price: Option<String>,
    pub image_url: Option<String>,
    pub shop_quantity: Option<i64>,
    pub warehouse_quantity: Option<i64>,
    pub is_visible: Option<bool>,
}

/// Repository for catalog read operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch and normalize the rows for one feed render.
    ///
    /// Rows that fail normalization (missing id, blank name, or explicitly
    /// hidden) are dropped; the source order is preserved.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_feed_items(
        &self,
        base_url: &str,
    ) -> Result<Vec<CatalogItem>, RepositoryError> {
        let rows: Vec<ProductRow> = sqlx::query_as(FEED_QUERY)
            .bind(FEED_ROW_LIMIT)
            .fetch_all(self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| normalize_row(row, base_url))
            .collect())
    }
}

/// Normalize one raw row into the canonical feed projection.
///
/// Returns `None` when the row does not qualify for the feed: id absent,
/// name empty after trimming, or visibility explicitly false (re-checked
/// here even though the source query already filters it).
pub(crate) fn normalize_row(row: ProductRow, base_url: &str) -> Option<CatalogItem> {
    if row.is_visible == Some(false) {
        return None;
    }

    let id = row
        .id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())?;
    let name = row
        .name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())?;
    let brand = row
        .brand
        .map(|brand| brand.trim().to_string())
        .filter(|brand| !brand.is_empty())
        .unwrap_or_else(|| DEFAULT_BRAND.to_string());

    Some(CatalogItem {
        name,
        brand,
        product_type: row.product_type,
        description: row.description.unwrap_or_default(),
        price: format_price(row.sale_price.as_deref()),
        image_url: absolutize_image_url(row.image_url.as_deref(), base_url),
        quantity: row.shop_quantity.unwrap_or(0) + row.warehouse_quantity.unwrap_or(0),
        id,
    })
}

/// Coerce a loosely-stored price into a two-decimal fixed-point string.
///
/// Anything that does not parse to a finite number becomes `"0.00"`.
fn format_price(raw: Option<&str>) -> String {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|price| price.is_finite())
        .map_or_else(|| "0.00".to_string(), |price| format!("{price:.2}"))
}

/// Normalize an image URL to an absolute `http(s)` URL.
///
/// Empty values yield `None` (the feed omits the image element). Absolute
/// URLs pass through; site-relative paths are prefixed with the canonical
/// base URL.
fn absolutize_image_url(raw: Option<&str>, base_url: &str) -> Option<String> {
    let url = raw?.trim();
    if url.is_empty() {
        return None;
    }
    if url.starts_with("http://") || url.starts_with("https://") {
        Some(url.to_string())
    } else if url.starts_with('/') {
        Some(format!("{base_url}{url}"))
    } else {
        Some(format!("{base_url}/{url}"))
    }
}

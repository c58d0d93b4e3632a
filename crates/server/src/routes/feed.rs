//! Product feed route handler.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::db::ProductRepository;
use crate::error::AppError;
use crate::services::feed::render_feed;
use crate::state::AppState;

/// Shared caches may serve the feed for an hour and revalidate in the
/// background for another hour.
const FEED_CACHE_CONTROL: &str = "public, s-maxage=3600, stale-while-revalidate=3600";

/// Serve the merchant product feed.
///
/// Each request fetches the catalog fresh; the only caching is the HTTP
/// cache directive on the response. A failing source query responds with a
/// structured JSON error instead of malformed XML.
pub async fn product_feed(State(state): State<AppState>) -> Result<Response, AppError> {
    let base_url = &state.config().base_url;

    let items = ProductRepository::new(state.pool())
        .list_feed_items(base_url)
        .await
        .map_err(AppError::Feed)?;

    tracing::debug!(item_count = items.len(), "Rendering product feed");
    let body = render_feed(&items, base_url);

    Ok((
        [
            (header::CONTENT_TYPE, "text/xml; charset=utf-8"),
            (header::CACHE_CONTROL, FEED_CACHE_CONTROL),
        ],
        body,
    )
        .into_response())
}

//! Full review listing

use axum::extract::State;
use axum::response::Html;
use tracing::error;

use super::{page, review_table, with_cover_art};
use crate::db::query_reviews;
use crate::AppState;

/// GET /readReviews
///
/// Lists every stored review including the description column, each row
/// enriched with cover art.
pub async fn read_reviews(State(state): State<AppState>) -> Html<String> {
    let reviews = query_reviews(&state.db, None).await.unwrap_or_else(|e| {
        error!("Review query failed: {}", e);
        Vec::new()
    });

    let rows = with_cover_art(&state, reviews).await;

    let body = format!(
        r#"<h1>All Reviews</h1>
{table}
<p><a href="/">Home</a></p>"#,
        table = review_table(&rows, true),
    );

    page("All Reviews", &body)
}

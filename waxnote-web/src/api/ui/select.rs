//! Minimum-rating filter form and filtered listing

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use serde::Deserialize;
use tracing::error;

use super::{page, review_table, with_cover_art};
use crate::db::query_reviews;
use crate::AppState;

/// Form payload for the rating filter
#[derive(Debug, Deserialize)]
pub struct RatingFilter {
    pub rating: i64,
}

/// GET /select
pub async fn select_form() -> Html<String> {
    page(
        "Browse Reviews",
        r#"<h1>Browse Reviews</h1>
<form method="post" action="/select">
    <label for="rating">Minimum rating</label>
    <input type="number" id="rating" name="rating" min="0" max="5" required>
    <button type="submit">Show reviews</button>
</form>
<p><a href="/">Home</a></p>"#,
    )
}

/// POST /select
///
/// Lists reviews with `rating >= minimum`, each row enriched with cover
/// art. A query failure is logged and the page renders with an empty table.
pub async fn list_filtered(
    State(state): State<AppState>,
    Form(filter): Form<RatingFilter>,
) -> Html<String> {
    let reviews = query_reviews(&state.db, Some(filter.rating))
        .await
        .unwrap_or_else(|e| {
            error!("Review query failed: {}", e);
            Vec::new()
        });

    let rows = with_cover_art(&state, reviews).await;

    let body = format!(
        r#"<h1>Reviews Rated {min} or Higher</h1>
{table}
<p><a href="/">Home</a> <a href="/select">New filter</a></p>"#,
        min = filter.rating,
        table = review_table(&rows, false),
    );

    page("Browse Reviews", &body)
}

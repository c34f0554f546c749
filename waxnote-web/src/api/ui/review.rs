//! Review submission form and handler

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use serde::Deserialize;
use tracing::{error, info};

use super::{escape_html, page};
use crate::db::{insert_review, Review};
use crate::AppState;

/// Form payload for a review submission
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmission {
    pub album_name: String,
    pub artist: String,
    #[serde(default)]
    pub description: String,
    pub rating: i64,
}

/// GET /review
pub async fn review_form() -> Html<String> {
    page(
        "Submit a Review",
        r#"<h1>Submit a Review</h1>
<form method="post" action="/review">
    <label for="albumName">Album name</label>
    <input type="text" id="albumName" name="albumName" required>
    <label for="artist">Artist</label>
    <input type="text" id="artist" name="artist" required>
    <label for="description">Description</label>
    <textarea id="description" name="description" rows="4"></textarea>
    <label for="rating">Rating (0-5)</label>
    <input type="number" id="rating" name="rating" min="0" max="5" required>
    <button type="submit">Submit</button>
</form>
<p><a href="/">Home</a></p>"#,
    )
}

/// POST /review
///
/// Stores the review with the rating clamped into [0, 5] and renders a
/// confirmation echoing the stored fields. A storage failure is logged and
/// the confirmation still renders, so the user never sees an error page.
pub async fn submit_review(
    State(state): State<AppState>,
    Form(submission): Form<ReviewSubmission>,
) -> Html<String> {
    let review = Review::new(
        submission.album_name,
        submission.artist,
        submission.description,
        submission.rating,
    );

    if let Err(e) = insert_review(&state.db, &review).await {
        error!("Failed to store review: {}", e);
    } else {
        info!(album = %review.album_name, rating = review.rating, "Stored review");
    }

    let body = format!(
        r#"<h1>Review Received</h1>
<table>
    <tr><th>Album</th><td>{album}</td></tr>
    <tr><th>Artist</th><td>{artist}</td></tr>
    <tr><th>Description</th><td>{description}</td></tr>
    <tr><th>Rating</th><td>{rating}</td></tr>
</table>
<p><a href="/">Home</a> <a href="/review">Submit another</a></p>"#,
        album = escape_html(&review.album_name),
        artist = escape_html(&review.artist),
        description = escape_html(&review.description),
        rating = review.rating,
    );

    page("Review Received", &body)
}

//! Landing page

use axum::response::Html;

use super::page;

/// GET /
pub async fn landing_page() -> Html<String> {
    page(
        "Waxnote - Album Reviews",
        r#"<h1>Waxnote</h1>
<p>Submit and browse music album reviews.</p>
<nav>
    <a href="/review">Submit a review</a>
    <a href="/select">Browse by minimum rating</a>
    <a href="/readReviews">All reviews</a>
</nav>"#,
    )
}

//! HTML page handlers
//!
//! Pages are built with `format!` templates around one shared style block.
//! Every dynamic value passes through `escape_html` before it reaches the
//! markup.

pub mod review;
pub mod reviews;
pub mod root;
pub mod select;

use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::db::Review;
use crate::AppState;

/// Build the page routes
pub fn ui_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root::landing_page))
        .route("/review", get(review::review_form).post(review::submit_review))
        .route("/select", get(select::select_form).post(select::list_filtered))
        .route("/readReviews", get(reviews::read_reviews))
}

const STYLE: &str = r#"
    body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
           background-color: #1a1a1a; color: #e0e0e0; line-height: 1.6;
           max-width: 900px; margin: 0 auto; padding: 20px; }
    h1 { color: #4a9eff; margin-bottom: 10px; }
    a { color: #4a9eff; }
    nav a { margin-right: 15px; }
    form { margin-top: 20px; }
    label { display: block; margin-top: 12px; }
    input, textarea { background: #2a2a2a; border: 1px solid #3a3a3a;
                      color: #e0e0e0; padding: 6px; width: 300px; }
    button { margin-top: 15px; padding: 8px 20px; background: #4a9eff;
             border: none; color: #fff; cursor: pointer; }
    table { border-collapse: collapse; margin-top: 20px; }
    th, td { border: 1px solid #3a3a3a; padding: 8px 12px; text-align: left; }
    th { background: #2a2a2a; }
"#;

/// Wrap page content in the shared document shell
pub fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body>
{body}
</body>
</html>"#
    ))
}

/// Escape a dynamic value for interpolation into HTML text or attributes
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Resolve cover art for each review, in submission order
///
/// One lookup per row; the client's rate limiter paces the MusicBrainz
/// calls, and failures come back as the placeholder URL.
pub async fn with_cover_art(state: &AppState, reviews: Vec<Review>) -> Vec<(Review, String)> {
    let mut rows = Vec::with_capacity(reviews.len());
    for review in reviews {
        let cover_url = state.cover_art.lookup(&review.album_name).await;
        rows.push((review, cover_url));
    }
    rows
}

/// Render reviews as an HTML table
///
/// The description column only appears on the full listing page.
pub fn review_table(rows: &[(Review, String)], with_description: bool) -> String {
    let mut table = String::from("<table>\n<tr><th>Album</th><th>Artist</th>");
    if with_description {
        table.push_str("<th>Description</th>");
    }
    table.push_str("<th>Rating</th><th>Cover</th></tr>\n");

    for (review, cover_url) in rows {
        table.push_str("<tr><td>");
        table.push_str(&escape_html(&review.album_name));
        table.push_str("</td><td>");
        table.push_str(&escape_html(&review.artist));
        table.push_str("</td><td>");
        if with_description {
            table.push_str(&escape_html(&review.description));
            table.push_str("</td><td>");
        }
        table.push_str(&review.rating.to_string());
        table.push_str("</td><td><img src=\"");
        table.push_str(&escape_html(cover_url));
        table.push_str("\" alt=\"Album Cover\" width=\"100\"></td></tr>\n");
    }

    table.push_str("</table>");
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_review(album: &str, rating: i64) -> Review {
        Review::new(album.to_string(), "Artist".to_string(), "notes".to_string(), rating)
    }

    #[test]
    fn test_escape_html_passthrough() {
        assert_eq!(escape_html("Kind of Blue"), "Kind of Blue");
    }

    #[test]
    fn test_escape_html_special_characters() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("Mott & Hoople's"), "Mott &amp; Hoople&#39;s");
    }

    #[test]
    fn test_review_table_without_description() {
        let rows = vec![(sample_review("Thriller", 5), "http://img/front.jpg".to_string())];
        let table = review_table(&rows, false);

        assert!(table.contains("<th>Album</th>"));
        assert!(!table.contains("<th>Description</th>"));
        assert!(table.contains("Thriller"));
        assert!(table.contains("<td>5</td>"));
        assert!(table.contains(r#"<img src="http://img/front.jpg""#));
    }

    #[test]
    fn test_review_table_with_description() {
        let rows = vec![(sample_review("Thriller", 5), "http://img/front.jpg".to_string())];
        let table = review_table(&rows, true);

        assert!(table.contains("<th>Description</th>"));
        assert!(table.contains("notes"));
    }

    #[test]
    fn test_review_table_escapes_user_input() {
        let mut review = sample_review("x", 3);
        review.album_name = "<b>bold</b>".to_string();
        let table = review_table(&[(review, crate::services::PLACEHOLDER_URL.to_string())], false);

        assert!(table.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!table.contains("<b>bold</b>"));
    }

    #[test]
    fn test_empty_table_keeps_header_row() {
        let table = review_table(&[], true);
        assert!(table.starts_with("<table>"));
        assert!(table.contains("<th>Rating</th>"));
        assert!(table.ends_with("</table>"));
    }
}

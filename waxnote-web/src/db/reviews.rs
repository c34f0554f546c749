//! Review database operations

use anyhow::Result;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

/// Lowest rating a review can carry
pub const RATING_MIN: i64 = 0;
/// Highest rating a review can carry
pub const RATING_MAX: i64 = 5;

/// A user-submitted album review
#[derive(Debug, Clone)]
pub struct Review {
    pub guid: Uuid,
    pub album_name: String,
    pub artist: String,
    pub description: String,
    pub rating: i64,
}

impl Review {
    /// Create a new review; the rating is clamped into [RATING_MIN, RATING_MAX]
    pub fn new(album_name: String, artist: String, description: String, rating: i64) -> Self {
        Self {
            guid: Uuid::new_v4(),
            album_name,
            artist,
            description,
            rating: rating.clamp(RATING_MIN, RATING_MAX),
        }
    }
}

/// Save a review to the database
pub async fn insert_review(pool: &SqlitePool, review: &Review) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO reviews (guid, album_name, artist, description, rating, created_at)
        VALUES (?, ?, ?, ?, ?, CURRENT_TIMESTAMP)
        "#,
    )
    .bind(review.guid.to_string())
    .bind(&review.album_name)
    .bind(&review.artist)
    .bind(&review.description)
    .bind(review.rating)
    .execute(pool)
    .await?;

    Ok(())
}

/// Load reviews, optionally restricted to `rating >= min_rating`
///
/// The full result set is materialized; this service has no pagination.
pub async fn query_reviews(pool: &SqlitePool, min_rating: Option<i64>) -> Result<Vec<Review>> {
    let rows = match min_rating {
        Some(min) => {
            sqlx::query(
                r#"
                SELECT guid, album_name, artist, description, rating
                FROM reviews
                WHERE rating >= ?
                "#,
            )
            .bind(min)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query(
                r#"
                SELECT guid, album_name, artist, description, rating
                FROM reviews
                "#,
            )
            .fetch_all(pool)
            .await?
        }
    };

    rows.iter().map(row_to_review).collect()
}

fn row_to_review(row: &SqliteRow) -> Result<Review> {
    let guid_str: String = row.get("guid");

    Ok(Review {
        guid: Uuid::parse_str(&guid_str)?,
        album_name: row.get("album_name"),
        artist: row.get("artist"),
        description: row.get("description"),
        rating: row.get("rating"),
    })
}

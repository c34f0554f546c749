//! Database access for waxnote-web

pub mod reviews;

pub use reviews::{insert_review, query_reviews, Review};

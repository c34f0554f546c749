//! Outbound service clients

pub mod cover_art;

pub use cover_art::{CoverArtClient, CoverArtError, PLACEHOLDER_URL};

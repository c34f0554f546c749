//! Database access shared by the waxnote crates

pub mod init;

pub use init::{create_reviews_table, init_database};

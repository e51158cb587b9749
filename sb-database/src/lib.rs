mod database;

pub use database::{Database, MIGRATOR};

/// Discord ID to public ID mapping store.
pub mod ids;

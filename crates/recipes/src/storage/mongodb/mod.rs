//! MongoDB storage backend implementation.
//!
//! Recipes are stored one per document in a single collection, keyed by
//! `_id`. List filters are translated into server-side queries so that only
//! matching documents leave the database.

mod conversions;
mod error;
mod repository;

pub use repository::MongoRepository;

//! Storage backend implementations.
//!
//! Concrete implementations of [`recipes_core::storage::RecipeRepository`],
//! selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): HashMap-backed storage, nothing is persisted
//! - `mongodb`: MongoDB document storage using the official `mongodb` driver
//!
//! These features are mutually exclusive.
//!
//! # Examples
//!
//! Build with MongoDB:
//! ```bash
//! cargo build -p recipes --no-default-features --features mongodb
//! ```

#[cfg(any(feature = "inmemory", test))]
pub mod inmemory;

#[cfg(feature = "mongodb")]
pub mod mongodb;

#[cfg(any(feature = "inmemory", test))]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "mongodb")]
pub use self::mongodb::MongoRepository;

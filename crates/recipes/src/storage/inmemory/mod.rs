//! In-memory storage backend.
//!
//! Stores recipes in a HashMap wrapped in `Arc<RwLock<_>>`. Used for tests and
//! local development where persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use recipes::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;

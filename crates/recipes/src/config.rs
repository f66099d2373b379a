use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string (default: "mongodb://localhost:27017")
    /// Note: Only used when the `mongodb` feature is enabled.
    #[allow(dead_code)]
    pub mongodb_uri: String,
    /// MongoDB database name (default: "recipes")
    #[allow(dead_code)]
    pub mongodb_database: String,
    /// MongoDB collection holding recipe documents (default: "Recipes")
    #[allow(dead_code)]
    pub mongodb_collection: String,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MONGODB_URI` - MongoDB connection string (default: "mongodb://localhost:27017")
    /// - `MONGODB_DATABASE` - Database name (default: "recipes")
    /// - `MONGODB_COLLECTION` - Collection name (default: "Recipes")
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self {
            mongodb_uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongodb_database: env::var("MONGODB_DATABASE")
                .unwrap_or_else(|_| "recipes".to_string()),
            mongodb_collection: env::var("MONGODB_COLLECTION")
                .unwrap_or_else(|_| "Recipes".to_string()),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(10),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

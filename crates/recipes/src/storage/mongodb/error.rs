//! MongoDB error mapping.
//!
//! Maps driver errors to `RepositoryError` from `recipes_core::storage`.

use mongodb::error::{Error, ErrorKind, WriteFailure};
use recipes_core::storage::RepositoryError;

/// Duplicate key violation on a unique index (including `_id`).
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Map an error raised while establishing or checking the connection.
pub fn map_connection_error(err: Error) -> RepositoryError {
    RepositoryError::ConnectionFailed(err.to_string())
}

/// Map an error raised by a read, replace or delete.
pub fn map_query_error(err: Error) -> RepositoryError {
    match err.kind.as_ref() {
        ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) => {
            RepositoryError::ConnectionFailed(err.to_string())
        }
        ErrorKind::BsonSerialization(_) | ErrorKind::BsonDeserialization(_) => {
            RepositoryError::Serialization(err.to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Map an insert error, turning duplicate keys into `AlreadyExists`.
pub fn map_insert_error(err: Error, id: impl Into<String>) -> RepositoryError {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE =>
        {
            RepositoryError::recipe_already_exists(id)
        }
        _ => map_query_error(err),
    }
}

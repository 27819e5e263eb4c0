//! PostgreSQL adapters - sqlx implementations of the store ports.
//!
//! Unique-constraint violations are detected through sqlx's typed error
//! kind and surfaced as `DomainError::duplicate`, so callers never match
//! on driver message strings.

mod catalog_reader;
mod inbox_writer;
mod invite_repository;
mod purchase_repository;
mod session_repository;
mod user_repository;

pub use catalog_reader::PostgresCatalogReader;
pub use inbox_writer::PostgresInboxWriter;
pub use invite_repository::PostgresInviteRepository;
pub use purchase_repository::PostgresPurchaseRepository;
pub use session_repository::PostgresSessionRepository;
pub use user_repository::PostgresUserRepository;

use crate::domain::foundation::DomainError;

/// Maps a sqlx error to the domain taxonomy.
pub(crate) fn store_error(context: &str, e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db) = &e {
        if db.kind() == sqlx::error::ErrorKind::UniqueViolation {
            return DomainError::duplicate(format!("{}: unique constraint violated", context));
        }
    }
    DomainError::database(format!("{}: {}", context, e))
}

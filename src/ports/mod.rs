//! Ports: contracts for every external collaborator.
//!
//! Application handlers depend only on these traits; adapters provide the
//! PostgreSQL, Google, and in-memory implementations.

mod catalog_reader;
mod identity_verifier;
mod inbox_writer;
mod invite_repository;
mod purchase_repository;
mod session_repository;
mod session_validator;
mod user_repository;

pub use catalog_reader::CatalogReader;
pub use identity_verifier::IdentityVerifier;
pub use inbox_writer::InboxWriter;
pub use invite_repository::InviteRepository;
pub use purchase_repository::PurchaseRepository;
pub use session_repository::SessionRepository;
pub use session_validator::SessionValidator;
pub use user_repository::UserRepository;

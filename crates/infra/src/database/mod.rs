//! SQLite persistence: connection pool, schema bootstrap and repositories.

pub mod manager;
pub mod reference_data_repository;
pub mod user_profile_repository;

pub use manager::{DbConnection, DbManager};
pub use reference_data_repository::SqliteReferenceDataRepository;
pub use user_profile_repository::SqliteProfileRepository;

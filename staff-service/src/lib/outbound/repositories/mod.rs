pub mod employee;
pub mod identity;
pub mod memory;
pub mod position;

pub use employee::PostgresEmployeeRepository;
pub use identity::PostgresIdentityRepository;
pub use memory::InMemoryEmployeeRepository;
pub use memory::InMemoryIdentityRepository;
pub use memory::InMemoryPositionRepository;
pub use memory::InMemoryStore;
pub use position::PostgresPositionRepository;

use crate::domain::errors::RepositoryError;

/// Translate a sqlx failure on `table` into a repository error.
///
/// Unique and foreign-key violations carry the offending column, recovered
/// from the `<table>_<column>_key` / `<table>_<column>_fkey` constraint name.
pub(crate) fn database_error(table: &'static str) -> impl Fn(sqlx::Error) -> RepositoryError {
    move |e| {
        if let Some(db_err) = e.as_database_error() {
            let column = db_err
                .constraint()
                .map(|constraint| constraint_column(table, constraint))
                .unwrap_or_default();

            if db_err.is_unique_violation() {
                return RepositoryError::Duplicate(column);
            }
            if db_err.is_foreign_key_violation() {
                return RepositoryError::MissingReference(column);
            }
        }
        RepositoryError::StorageUnavailable(e.to_string())
    }
}

fn constraint_column(table: &str, constraint: &str) -> String {
    let column = constraint
        .strip_prefix(table)
        .and_then(|rest| rest.strip_prefix('_'))
        .unwrap_or(constraint);

    column
        .strip_suffix("_fkey")
        .or_else(|| column.strip_suffix("_key"))
        .unwrap_or(column)
        .to_string()
}

/// Stored rows are re-validated on the way out.
pub(crate) fn invalid_record(e: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::InvalidRecord(e.to_string())
}

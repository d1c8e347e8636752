//! Database access helpers.
//!
//! Queries are plain `sqlx::query` calls instrumented with a `db.query` span.
//! Uniqueness lives in the schema (`db/schema.sql`); the helpers here only
//! translate the resulting constraint violations.

pub mod accounts;
pub mod blogs;
pub mod works;

/// Postgres unique-constraint violation (SQLSTATE 23505).
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().is_some_and(|code| code.as_ref() == "23505")
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_not_unique_violations() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation(&sqlx::Error::PoolClosed));
    }
}

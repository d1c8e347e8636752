//! Credential store: one row per administrative account.

use sqlx::{PgPool, Row};
use tracing::Instrument;
use uuid::Uuid;

use super::is_unique_violation;

/// One administrative account. The hash never leaves the store and auth flow;
/// responses carry a summary view instead.
#[derive(Debug)]
pub struct Account {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Outcome of an insert attempt against the uniqueness constraints.
#[derive(Debug)]
pub enum SignupOutcome {
    Created(Account),
    Conflict,
}

/// Check whether a username or email is already taken.
///
/// Best-effort early exit only: two concurrent signups can both pass this
/// check, and the constraints behind [`insert_account`] settle the race.
///
/// # Errors
///
/// Returns the underlying `sqlx` error on datastore failure.
pub async fn credentials_taken(
    pool: &PgPool,
    username: &str,
    email: &str,
) -> Result<bool, sqlx::Error> {
    let query = "SELECT EXISTS(SELECT 1 FROM accounts WHERE username = $1 OR email = $2) AS exists";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );

    let row = sqlx::query(query)
        .bind(username)
        .bind(email)
        .fetch_one(pool)
        .instrument(span)
        .await?;

    Ok(row.get("exists"))
}

/// Insert a new account, mapping a unique violation to
/// [`SignupOutcome::Conflict`]. This is the authoritative conflict path.
///
/// # Errors
///
/// Returns the underlying `sqlx` error on any other datastore failure.
pub async fn insert_account(
    pool: &PgPool,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<SignupOutcome, sqlx::Error> {
    let query = "INSERT INTO accounts (username, email, password_hash) VALUES ($1, $2, $3) RETURNING id";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "INSERT",
        db.statement = query
    );

    match sqlx::query(query)
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(pool)
        .instrument(span)
        .await
    {
        Ok(row) => Ok(SignupOutcome::Created(Account {
            id: row.get("id"),
            username: username.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        })),
        Err(err) if is_unique_violation(&err) => Ok(SignupOutcome::Conflict),
        Err(err) => Err(err),
    }
}

/// Look up an account by exact username match.
///
/// # Errors
///
/// Returns the underlying `sqlx` error on datastore failure; a missing
/// account is `Ok(None)`.
pub async fn by_username(pool: &PgPool, username: &str) -> Result<Option<Account>, sqlx::Error> {
    let query = "SELECT id, username, email, password_hash FROM accounts WHERE username = $1";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );

    let row = sqlx::query(query)
        .bind(username)
        .fetch_optional(pool)
        .instrument(span)
        .await?;

    Ok(row.map(|row| Account {
        id: row.get("id"),
        username: row.get("username"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
    }))
}

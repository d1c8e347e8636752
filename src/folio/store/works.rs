//! Portfolio work entries.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{postgres::PgRow, PgPool, Row};
use tracing::Instrument;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema, Serialize, Debug)]
pub struct WorkRecord {
    pub id: Uuid,
    /// Account that created the entry, taken from the verified token
    pub account_id: Uuid,
    pub title: String,
    pub tags: Vec<String>,
    pub description: String,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields for a new work row; tags are already split and trimmed.
#[derive(Debug)]
pub struct NewWorkRow {
    pub account_id: Uuid,
    pub title: String,
    pub tags: Vec<String>,
    pub description: String,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
}

fn from_row(row: &PgRow) -> WorkRecord {
    WorkRecord {
        id: row.get("id"),
        account_id: row.get("account_id"),
        title: row.get("title"),
        tags: row.get("tags"),
        description: row.get("description"),
        image_url: row.get("image_url"),
        project_url: row.get("project_url"),
        created_at: row.get("created_at"),
    }
}

/// Insert a work entry and return the stored row.
///
/// # Errors
///
/// Returns the underlying `sqlx` error on datastore failure.
pub async fn insert(pool: &PgPool, new: NewWorkRow) -> Result<WorkRecord, sqlx::Error> {
    let query = "INSERT INTO works (account_id, title, tags, description, image_url, project_url) \
                 VALUES ($1, $2, $3, $4, $5, $6) \
                 RETURNING id, account_id, title, tags, description, image_url, project_url, created_at";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "INSERT",
        db.statement = query
    );

    let row = sqlx::query(query)
        .bind(new.account_id)
        .bind(&new.title)
        .bind(&new.tags)
        .bind(&new.description)
        .bind(new.image_url.as_deref())
        .bind(new.project_url.as_deref())
        .fetch_one(pool)
        .instrument(span)
        .await?;

    Ok(from_row(&row))
}

/// All work entries, newest first.
///
/// # Errors
///
/// Returns the underlying `sqlx` error on datastore failure.
pub async fn list(pool: &PgPool) -> Result<Vec<WorkRecord>, sqlx::Error> {
    let query = "SELECT id, account_id, title, tags, description, image_url, project_url, created_at \
                 FROM works ORDER BY created_at DESC";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );

    let rows = sqlx::query(query).fetch_all(pool).instrument(span).await?;

    Ok(rows.iter().map(from_row).collect())
}

/// A single work entry; a missing id is `Ok(None)`.
///
/// # Errors
///
/// Returns the underlying `sqlx` error on datastore failure.
pub async fn by_id(pool: &PgPool, id: Uuid) -> Result<Option<WorkRecord>, sqlx::Error> {
    let query = "SELECT id, account_id, title, tags, description, image_url, project_url, created_at \
                 FROM works WHERE id = $1";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );

    let row = sqlx::query(query)
        .bind(id)
        .fetch_optional(pool)
        .instrument(span)
        .await?;

    Ok(row.as_ref().map(from_row))
}

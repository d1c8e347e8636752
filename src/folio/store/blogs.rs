//! Blog entries.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{postgres::PgRow, PgPool, Row};
use tracing::Instrument;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema, Serialize, Debug)]
pub struct BlogRecord {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub read_time: Option<i32>,
    pub pinned: bool,
    pub excerpt: String,
    pub content: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields for a new blog row; tags are already split and trimmed.
#[derive(Debug)]
pub struct NewBlogRow {
    pub title: String,
    pub author: String,
    pub read_time: Option<i32>,
    pub pinned: bool,
    pub excerpt: String,
    pub content: String,
    pub tags: Vec<String>,
}

fn from_row(row: &PgRow) -> BlogRecord {
    BlogRecord {
        id: row.get("id"),
        title: row.get("title"),
        author: row.get("author"),
        read_time: row.get("read_time"),
        pinned: row.get("pinned"),
        excerpt: row.get("excerpt"),
        content: row.get("content"),
        tags: row.get("tags"),
        created_at: row.get("created_at"),
    }
}

/// Insert a blog entry and return the stored row.
///
/// # Errors
///
/// Returns the underlying `sqlx` error on datastore failure.
pub async fn insert(pool: &PgPool, new: NewBlogRow) -> Result<BlogRecord, sqlx::Error> {
    let query = "INSERT INTO blogs (title, author, read_time, pinned, excerpt, content, tags) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7) \
                 RETURNING id, title, author, read_time, pinned, excerpt, content, tags, created_at";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "INSERT",
        db.statement = query
    );

    let row = sqlx::query(query)
        .bind(&new.title)
        .bind(&new.author)
        .bind(new.read_time)
        .bind(new.pinned)
        .bind(&new.excerpt)
        .bind(&new.content)
        .bind(&new.tags)
        .fetch_one(pool)
        .instrument(span)
        .await?;

    Ok(from_row(&row))
}

/// All blog entries, newest first.
///
/// # Errors
///
/// Returns the underlying `sqlx` error on datastore failure.
pub async fn list(pool: &PgPool) -> Result<Vec<BlogRecord>, sqlx::Error> {
    let query = "SELECT id, title, author, read_time, pinned, excerpt, content, tags, created_at \
                 FROM blogs ORDER BY created_at DESC";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );

    let rows = sqlx::query(query).fetch_all(pool).instrument(span).await?;

    Ok(rows.iter().map(from_row).collect())
}

/// Pinned blog entries, newest first.
///
/// # Errors
///
/// Returns the underlying `sqlx` error on datastore failure.
pub async fn pinned(pool: &PgPool) -> Result<Vec<BlogRecord>, sqlx::Error> {
    let query = "SELECT id, title, author, read_time, pinned, excerpt, content, tags, created_at \
                 FROM blogs WHERE pinned ORDER BY created_at DESC";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );

    let rows = sqlx::query(query).fetch_all(pool).instrument(span).await?;

    Ok(rows.iter().map(from_row).collect())
}

/// A single blog entry; a missing id is `Ok(None)`.
///
/// # Errors
///
/// Returns the underlying `sqlx` error on datastore failure.
pub async fn by_id(pool: &PgPool, id: Uuid) -> Result<Option<BlogRecord>, sqlx::Error> {
    let query = "SELECT id, title, author, read_time, pinned, excerpt, content, tags, created_at \
                 FROM blogs WHERE id = $1";
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

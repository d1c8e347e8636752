use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sqlx::PgPool;
use tracing::{debug, instrument};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::folio::{
    auth::Identity,
    error::Error,
    handlers::split_tags,
    store::blogs::{self, BlogRecord, NewBlogRow},
};

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct NewBlog {
    title: String,
    author: String,
    read_time: Option<i32>,
    pinned: Option<bool>,
    excerpt: String,
    content: String,
    /// Comma separated, split server side
    tags: Option<String>,
}

#[utoipa::path(
    post,
    path= "/blogs",
    request_body = NewBlog,
    security(("bearer" = [])),
    responses (
        (status = 201, description = "Blog created", body = BlogRecord, content_type = "application/json"),
        (status = 400, description = "Missing required fields"),
        (status = 401, description = "Missing or invalid token"),
    ),
    tag= "blogs"
)]
#[instrument(skip(pool, payload))]
pub async fn create(
    pool: Extension<PgPool>,
    identity: Extension<Identity>,
    payload: Option<Json<NewBlog>>,
) -> Result<(StatusCode, Json<Value>), Error> {
    let Some(Json(new)) = payload else {
        return Err(Error::Validation("Missing payload".to_string()));
    };

    if new.title.trim().is_empty()
        || new.author.trim().is_empty()
        || new.excerpt.trim().is_empty()
        || new.content.trim().is_empty()
    {
        return Err(Error::Validation(
            "title, author, excerpt and content are required".to_string(),
        ));
    }

    let blog = blogs::insert(
        &pool,
        NewBlogRow {
            title: new.title,
            author: new.author,
            read_time: new.read_time,
            pinned: new.pinned.unwrap_or(false),
            excerpt: new.excerpt,
            content: new.content,
            tags: split_tags(new.tags.as_deref()),
        },
    )
    .await?;

    debug!("Blog {} created by {}", blog.id, identity.username);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Blog created successfully", "blog": blog })),
    ))
}

#[utoipa::path(
    get,
    path= "/blogs",
    responses (
        (status = 200, description = "All blog entries, newest first", body = [BlogRecord], content_type = "application/json"),
    ),
    tag= "blogs"
)]
#[instrument(skip(pool))]
pub async fn list(pool: Extension<PgPool>) -> Result<Json<Vec<BlogRecord>>, Error> {
    Ok(Json(blogs::list(&pool).await?))
}

#[utoipa::path(
    get,
    path= "/blogs/pinned",
    responses (
        (status = 200, description = "Pinned blog entries, newest first", body = [BlogRecord], content_type = "application/json"),
    ),
    tag= "blogs"
)]
#[instrument(skip(pool))]
pub async fn pinned(pool: Extension<PgPool>) -> Result<Json<Vec<BlogRecord>>, Error> {
    Ok(Json(blogs::pinned(&pool).await?))
}

#[utoipa::path(
    get,
    path= "/blogs/{id}",
    params(("id" = Uuid, Path, description = "Blog id")),
    responses (
        (status = 200, description = "Blog entry", body = BlogRecord, content_type = "application/json"),
        (status = 404, description = "No blog with that id"),
    ),
    tag= "blogs"
)]
#[instrument(skip(pool))]
pub async fn by_id(
    pool: Extension<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<Json<BlogRecord>, Error> {
    blogs::by_id(&pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| Error::NotFound("Blog not found".to_string()))
}

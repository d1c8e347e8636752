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
    store::works::{self, NewWorkRow, WorkRecord},
};

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct NewWork {
    title: String,
    /// Comma separated, split server side
    tags: Option<String>,
    description: String,
    image_url: Option<String>,
    project_url: Option<String>,
}

#[utoipa::path(
    post,
    path= "/works",
    request_body = NewWork,
    security(("bearer" = [])),
    responses (
        (status = 201, description = "Work created", body = WorkRecord, content_type = "application/json"),
        (status = 400, description = "Missing required fields"),
        (status = 401, description = "Missing or invalid token"),
    ),
    tag= "works"
)]
#[instrument(skip(pool, payload))]
pub async fn create(
    pool: Extension<PgPool>,
    identity: Extension<Identity>,
    payload: Option<Json<NewWork>>,
) -> Result<(StatusCode, Json<Value>), Error> {
    let Some(Json(new)) = payload else {
        return Err(Error::Validation("Missing payload".to_string()));
    };

    if new.title.trim().is_empty() || new.description.trim().is_empty() {
        return Err(Error::Validation(
            "title and description are required".to_string(),
        ));
    }

    // The owning account comes from the verified token, never from the body
    let work = works::insert(
        &pool,
        NewWorkRow {
            account_id: identity.account_id,
            title: new.title,
            tags: split_tags(new.tags.as_deref()),
            description: new.description,
            image_url: new.image_url,
            project_url: new.project_url,
        },
    )
    .await?;

    debug!("Work {} created by {}", work.id, identity.username);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Work created successfully", "work": work })),
    ))
}

#[utoipa::path(
    get,
    path= "/works",
    responses (
        (status = 200, description = "All work entries, newest first", body = [WorkRecord], content_type = "application/json"),
    ),
    tag= "works"
)]
#[instrument(skip(pool))]
pub async fn list(pool: Extension<PgPool>) -> Result<Json<Vec<WorkRecord>>, Error> {
    Ok(Json(works::list(&pool).await?))
}

#[utoipa::path(
    get,
    path= "/works/{id}",
    params(("id" = Uuid, Path, description = "Work id")),
    responses (
        (status = 200, description = "Work entry", body = WorkRecord, content_type = "application/json"),
        (status = 404, description = "No work with that id"),
    ),
    tag= "works"
)]
#[instrument(skip(pool))]
pub async fn by_id(
    pool: Extension<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<Json<WorkRecord>, Error> {
    works::by_id(&pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| Error::NotFound("Work not found".to_string()))
}

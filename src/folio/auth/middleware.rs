//! Bearer-token enforcement for the protected write routes.

use axum::{
    extract::{Extension, Request},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use tracing::debug;
use uuid::Uuid;

use crate::{
    cli::globals::GlobalArgs,
    folio::{auth::token, error::Error},
};

/// Identity attached to a request once its token checks out.
#[derive(Debug, Clone)]
pub struct Identity {
    pub account_id: Uuid,
    pub username: String,
}

/// Reject the request unless it carries a valid bearer token.
///
/// Signature and expiry only; no datastore lookup per request, which trades
/// revocability for simplicity. On success the decoded identity is inserted
/// into the request extensions for the downstream handler.
///
/// # Errors
///
/// `401` when the `Authorization` header is missing, the scheme is not
/// `Bearer`, the signature does not verify, or the token has expired. All
/// four cases share one response body.
pub async fn require_bearer(
    Extension(globals): Extension<GlobalArgs>,
    mut request: Request,
    next: Next,
) -> Result<Response, Error> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(Error::Authentication("Unauthorized"))?;

    let bearer = header
        .strip_prefix("Bearer ")
        .ok_or(Error::Authentication("Unauthorized"))?;

    let claims = token::verify(&globals, bearer).map_err(|err| {
        debug!("Token rejected: {err:?}");
        Error::Authentication("Unauthorized")
    })?;

    let account_id =
        Uuid::parse_str(&claims.sub).map_err(|_| Error::Authentication("Unauthorized"))?;

    request.extensions_mut().insert(Identity {
        account_id,
        username: claims.username,
    });

    Ok(next.run(request).await)
}

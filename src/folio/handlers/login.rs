use axum::{extract::Extension, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sqlx::PgPool;
use tracing::{debug, error, instrument};
use utoipa::ToSchema;

use crate::cli::globals::GlobalArgs;
use crate::folio::{
    auth::{password, token},
    error::Error,
    handlers::signup::AccountSummary,
    store::accounts::{self, Account},
};

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct Login {
    username: String,
    password: String,
}

/// Check a login attempt against the stored account, if any.
///
/// Unknown usernames and wrong passwords take the same exit so the response
/// cannot be used to enumerate accounts.
fn authenticate(account: Option<Account>, password: &str) -> Result<Account, Error> {
    let Some(account) = account else {
        debug!("Unknown username");

        return Err(Error::Authentication("invalid username or password"));
    };

    if !password::verify(password, &account.password_hash) {
        debug!("Password mismatch");

        return Err(Error::Authentication("invalid username or password"));
    }

    Ok(account)
}

#[utoipa::path(
    post,
    path= "/auth/login",
    request_body = Login,
    responses (
        (status = 200, description = "Login successful, token in the body", content_type = "application/json"),
        (status = 400, description = "Missing fields"),
        (status = 401, description = "Unauthorized"),
    ),
    tag= "auth"
)]
#[instrument(skip(pool, globals, payload))]
pub async fn login(
    pool: Extension<PgPool>,
    globals: Extension<GlobalArgs>,
    payload: Option<Json<Login>>,
) -> Result<Json<Value>, Error> {
    let Some(Json(user)) = payload else {
        return Err(Error::Validation("Missing payload".to_string()));
    };

    if user.username.trim().is_empty() || user.password.is_empty() {
        return Err(Error::Validation("All fields required".to_string()));
    }

    let account = authenticate(
        accounts::by_username(&pool, &user.username).await?,
        &user.password,
    )?;

    let claims = token::Claims::new(account.id, account.username.clone());
    let token = token::sign(&globals, &claims).map_err(|err| {
        error!("Error signing session token: {err:?}");
        Error::Internal("token signing failed")
    })?;

    debug!("Login successful");

    Ok(Json(json!({
        "message": "Login successful",
        "token": token,
        "user": AccountSummary::from(&account),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;
    use uuid::Uuid;

    fn account(username: &str, plaintext: &str) -> Account {
        Account {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: format!("{username}@x.com"),
            password_hash: password::hash(plaintext).unwrap(),
        }
    }

    #[test]
    fn test_correct_password_authenticates() {
        let alice = account("alice", "secret123");
        let id = alice.id;

        let authenticated = authenticate(Some(alice), "secret123").unwrap();

        assert_eq!(authenticated.id, id);
        assert_eq!(authenticated.username, "alice");
    }

    #[tokio::test]
    async fn test_unknown_user_and_wrong_password_are_indistinguishable() {
        let unknown_user = authenticate(None, "secret123").unwrap_err();
        let wrong_password =
            authenticate(Some(account("alice", "secret123")), "wrong").unwrap_err();

        let unknown_user = unknown_user.into_response();
        let wrong_password = wrong_password.into_response();

        assert_eq!(unknown_user.status(), wrong_password.status());

        // same status is not enough, the bodies must match byte for byte
        let unknown_user = axum::body::to_bytes(unknown_user.into_body(), usize::MAX)
            .await
            .unwrap();
        let wrong_password = axum::body::to_bytes(wrong_password.into_body(), usize::MAX)
            .await
            .unwrap();

        assert_eq!(unknown_user, wrong_password);
    }
}

use axum::{extract::Extension, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sqlx::PgPool;
use tracing::{debug, error, instrument};
use utoipa::ToSchema;

use crate::folio::{
    auth::password,
    error::Error,
    handlers::valid_email,
    store::accounts::{self, Account, SignupOutcome},
};

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct Signup {
    username: String,
    email: String,
    password: String,
}

/// Non-sensitive view of an account; the password hash never leaves the
/// store and auth flow.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct AccountSummary {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.to_string(),
            username: account.username.clone(),
            email: account.email.clone(),
        }
    }
}

#[utoipa::path(
    post,
    path= "/auth/signup",
    request_body = Signup,
    responses (
        (status = 201, description = "Signup successful", body = AccountSummary, content_type = "application/json"),
        (status = 400, description = "Missing or malformed fields"),
        (status = 409, description = "Account with the specified username or email already exists"),
    ),
    tag= "auth"
)]
#[instrument(skip(pool, payload))]
pub async fn signup(
    pool: Extension<PgPool>,
    payload: Option<Json<Signup>>,
) -> Result<(StatusCode, Json<Value>), Error> {
    let Some(Json(user)) = payload else {
        return Err(Error::Validation("Missing payload".to_string()));
    };

    if user.username.trim().is_empty() || user.email.trim().is_empty() || user.password.is_empty()
    {
        return Err(Error::Validation("All fields required".to_string()));
    }

    if !valid_email(&user.email) {
        return Err(Error::Validation("Invalid email".to_string()));
    }

    // Early exit only; the storage constraints stay authoritative when two
    // signups race past this check.
    if accounts::credentials_taken(&pool, &user.username, &user.email).await? {
        return Err(Error::Conflict("User already exists".to_string()));
    }

    let password_hash = password::hash(&user.password).map_err(|err| {
        error!("Error hashing password: {err:?}");
        Error::Internal("password hashing failed")
    })?;

    let outcome =
        accounts::insert_account(&pool, &user.username, &user.email, &password_hash).await?;

    signup_response(outcome)
}

/// Map the insert outcome to a response. A conflict here means the unique
/// constraint fired after the pre-check passed, which is still a 409.
fn signup_response(outcome: SignupOutcome) -> Result<(StatusCode, Json<Value>), Error> {
    match outcome {
        SignupOutcome::Created(account) => {
            debug!("Account created: {}", account.username);

            Ok((
                StatusCode::CREATED,
                Json(json!({
                    "message": "Signup successful",
                    "user": AccountSummary::from(&account),
                })),
            ))
        }
        SignupOutcome::Conflict => Err(Error::Conflict("User already exists".to_string())),
    }
}

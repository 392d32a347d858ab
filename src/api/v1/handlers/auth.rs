/*
 * Responsibility
 * - Public sign-up / sign-in entry points (the only unguarded mutations)
 * - Credential hashing/verification via services::auth::password
 * - Both return the token contract on success (201)
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::api::v1::dto::auth::{AuthRequest, TokenResponse};
use crate::error::AppError;
use crate::repos::{error::RepoError, user_repo};
use crate::services::auth::password;
use crate::state::AppState;

pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<AuthRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), AppError> {
    req.validate().map_err(AppError::invalid_request)?;

    let hash = password::hash(&req.password)?;

    let user = user_repo::create(&state.db, req.email.trim(), &hash)
        .await
        .map_err(|e| match e {
            RepoError::Conflict => AppError::Conflict("email already registered"),
            other => other.into(),
        })?;

    let access_token = state.auth.issue(user.id, &user.email)?;

    Ok((
        StatusCode::CREATED,
        Json(TokenResponse {
            access_token,
            token_type: "Bearer",
            expires_in: state.auth.ttl_seconds(),
        }),
    ))
}

pub async fn signin(
    State(state): State<AppState>,
    Json(req): Json<AuthRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), AppError> {
    req.validate().map_err(AppError::invalid_request)?;

    // Unknown email and wrong password take the same path to the same body;
    // nothing here may reveal which check failed.
    let user = user_repo::find_by_email(&state.db, req.email.trim())
        .await?
        .ok_or(AppError::Unauthorized)?;

    if !password::verify(&req.password, &user.hash) {
        return Err(AppError::Unauthorized);
    }

    let access_token = state.auth.issue(user.id, &user.email)?;

    Ok((
        StatusCode::CREATED,
        Json(TokenResponse {
            access_token,
            token_type: "Bearer",
            expires_in: state.auth.ttl_seconds(),
        }),
    ))
}

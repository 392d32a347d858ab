/*
 * Responsibility
 * - Own-profile handlers: GET /users/me, PATCH /users
 * - Identity comes only from AuthCtx; no client-supplied user id is accepted
 */
use axum::{Json, extract::State};

use crate::api::v1::dto::users::{EditUserRequest, UserResponse};
use crate::api::v1::extractors::AuthCtxExtractor;
use crate::error::AppError;
use crate::repos::{error::RepoError, user_repo};
use crate::state::AppState;

/// The gate already resolved the caller's row, so this is a pure projection
/// with no second database hit.
pub async fn get_me(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<UserResponse> {
    Json(UserResponse::from(ctx.user))
}

pub async fn edit_user(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Json(req): Json<EditUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    // Rejected here, before any persistence access.
    if req.is_empty() {
        return Err(AppError::invalid_request("no fields to update"));
    }
    req.validate().map_err(AppError::invalid_request)?;

    let first_name = req.first_name.as_ref().map(|inner| inner.as_deref());
    let last_name = req.last_name.as_ref().map(|inner| inner.as_deref());

    let row = user_repo::update(
        &state.db,
        ctx.user.id,
        req.email.as_deref().map(str::trim),
        first_name,
        last_name,
    )
    .await
    .map_err(|e| match e {
        RepoError::Conflict => AppError::Conflict("email already registered"),
        other => other.into(),
    })?
    // The gate resolved this user moments ago; a vanished row means the
    // token went stale mid-request.
    .ok_or(AppError::Unauthorized)?;

    Ok(Json(UserResponse::from(row)))
}

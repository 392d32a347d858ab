/*
 * Responsibility
 * - /bookmarks CRUD handlers
 * - Every repo call is scoped to the authenticated caller from AuthCtx;
 *   a bookmark owned by someone else is indistinguishable from a missing one
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::v1::dto::bookmarks::{
    BookmarkResponse, CreateBookmarkRequest, EditBookmarkRequest,
};
use crate::api::v1::extractors::AuthCtxExtractor;
use crate::error::AppError;
use crate::repos::bookmark_repo;
use crate::state::AppState;

pub async fn list_bookmarks(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<Json<Vec<BookmarkResponse>>, AppError> {
    let rows = bookmark_repo::list_owned(&state.db, ctx.user.id).await?;
    let res = rows.into_iter().map(BookmarkResponse::from).collect();

    Ok(Json(res))
}

/// Returns 200 with a JSON `null` body when the bookmark is absent or owned
/// by another caller, mirroring an owner-filtered lookup.
pub async fn get_bookmark(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(bookmark_id): Path<i64>,
) -> Result<Json<Option<BookmarkResponse>>, AppError> {
    let row = bookmark_repo::get_owned(&state.db, ctx.user.id, bookmark_id).await?;

    Ok(Json(row.map(BookmarkResponse::from)))
}

pub async fn create_bookmark(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Json(req): Json<CreateBookmarkRequest>,
) -> Result<(StatusCode, Json<BookmarkResponse>), AppError> {
    req.validate().map_err(AppError::invalid_request)?;

    let row = bookmark_repo::create_owned(
        &state.db,
        ctx.user.id,
        &req.title,
        req.description.as_deref(),
        &req.link,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(BookmarkResponse::from(row))))
}

pub async fn edit_bookmark(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(bookmark_id): Path<i64>,
    Json(req): Json<EditBookmarkRequest>,
) -> Result<Json<BookmarkResponse>, AppError> {
    req.validate().map_err(AppError::invalid_request)?;

    let description = req.description.as_ref().map(|inner| inner.as_deref());

    let row = bookmark_repo::update_owned(
        &state.db,
        ctx.user.id,
        bookmark_id,
        req.title.as_deref(),
        description,
        req.link.as_deref(),
    )
    .await?
    .ok_or(AppError::not_found("bookmark"))?;

    Ok(Json(BookmarkResponse::from(row)))
}

pub async fn delete_bookmark(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(bookmark_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let deleted = bookmark_repo::delete_owned(&state.db, ctx.user.id, bookmark_id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("bookmark"))
    }
}

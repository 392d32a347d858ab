//! Access-token verification -> AuthCtx into request extensions.
//!
//! Per-request steps, any failure short-circuiting to 401:
//! 1. extract `Authorization: Bearer <token>`
//! 2. verify the token (signature, exp, iss, aud)
//! 3. resolve the subject to a user row; a stale token whose user no longer
//!    exists is treated as invalid, never as a fresh anonymous identity
//! 4. insert AuthCtx so handlers receive the caller through the extractor

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::{AuthCtx, CurrentUser};
use crate::error::AppError;
use crate::repos::user_repo;
use crate::state::AppState;

/// Layer the gate onto a router of protected routes.
///
/// Ex:
/// ```ignore
/// let protected = middleware::auth::apply(protected, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8's from_fn cannot take a State extractor, so state is passed
    // explicitly via from_fn_with_state.
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(req.headers()).ok_or(AppError::Unauthorized)?;

    let verified = match state.auth.verify(token) {
        Ok(verified) => verified,
        Err(err) => {
            tracing::warn!(error = %err, "access token verification failed");
            return Err(AppError::Unauthorized);
        }
    };

    let user = user_repo::get(&state.db, verified.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!(user_id = %verified.user_id, "token subject no longer exists");
            AppError::Unauthorized
        })?;

    let auth_ctx = AuthCtx::new(CurrentUser {
        id: user.id,
        email: user.email,
        first_name: user.first_name,
        last_name: user.last_name,
        created_at: user.created_at,
        updated_at: user.updated_at,
    });

    // middleware -> extractor hand-off
    req.extensions_mut().insert(auth_ctx);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_token_missing_header() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn bearer_token_wrong_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwdw=="),
        );
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn bearer_token_extracts_token() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }
}

use axum::extract::FromRequestParts;
use axum::http::{StatusCode, request::Parts};

use super::AuthCtx;

/// Extractor that hands AuthCtx to a handler.
///
/// Assumes the gate middleware already inserted AuthCtx into
/// request.extensions(); absence means the route is missing its gate and the
/// request is rejected with 401.
pub struct AuthCtxExtractor(pub AuthCtx);

impl<S> FromRequestParts<S> for AuthCtxExtractor
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthCtx>()
            .cloned()
            .map(AuthCtxExtractor)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::v1::extractors::CurrentUser;
    use axum::http::Request;
    use chrono::Utc;
    use uuid::Uuid;

    fn parts_of(req: Request<()>) -> Parts {
        req.into_parts().0
    }

    #[tokio::test]
    async fn missing_ctx_is_rejected_with_401() {
        let mut parts = parts_of(Request::builder().uri("/users/me").body(()).unwrap());

        let res = AuthCtxExtractor::from_request_parts(&mut parts, &()).await;
        assert!(matches!(res, Err(StatusCode::UNAUTHORIZED)));
    }

    #[tokio::test]
    async fn present_ctx_is_extracted() {
        let now = Utc::now();
        let ctx = AuthCtx::new(CurrentUser {
            id: Uuid::new_v4(),
            email: "user@gmail.com".to_string(),
            first_name: None,
            last_name: None,
            created_at: now,
            updated_at: now,
        });

        let mut req = Request::builder().uri("/users/me").body(()).unwrap();
        req.extensions_mut().insert(ctx.clone());
        let mut parts = parts_of(req);

        let extracted = AuthCtxExtractor::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(extracted.0.user.id, ctx.user.id);
        assert_eq!(extracted.0.user.email, "user@gmail.com");
    }
}

/*
 * Responsibility
 * - Define the v1 URL structure
 * - Decide which routes sit behind the authentication gate
 *
 * Routes without the gate are implicitly public; only /health and the
 * sign-up/sign-in entry points belong there.
 */
use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::middleware;
use crate::state::AppState;

use crate::api::v1::handlers::{
    auth::{signin, signup},
    bookmarks::{create_bookmark, delete_bookmark, edit_bookmark, get_bookmark, list_bookmarks},
    health::health,
    users::{edit_user, get_me},
};

pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/health", get(health))
        .route("/auth/signup", post(signup))
        .route("/auth/signin", post(signin));

    let protected = Router::new()
        .route("/users/me", get(get_me))
        .route("/users", patch(edit_user))
        .route("/bookmarks", get(list_bookmarks).post(create_bookmark))
        .route(
            "/bookmarks/{bookmark_id}",
            get(get_bookmark)
                .patch(edit_bookmark)
                .delete(delete_bookmark),
        );
    let protected = middleware::auth::apply(protected, state);

    public.merge(protected)
}

/*!
 * Authentication context extractor
 *
 * Responsibility:
 * - Provide handlers with the authenticated request context (AuthCtx)
 * - HTTP / axum wiring stays in core, the type contract in types
 *
 * Public API:
 * - AuthCtx, CurrentUser
 * - AuthCtxExtractor
 */

mod core;
mod types;

pub use core::AuthCtxExtractor;
pub use types::{AuthCtx, CurrentUser};

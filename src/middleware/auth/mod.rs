/*!
 * Authentication gate
 *
 * Responsibility:
 * - Verify the bearer access token and resolve it to a full user record
 * - Attach the resolved identity (AuthCtx) to request extensions
 * - Reject with a generic 401 at the first failed step
 */

mod access;

pub use access::apply;

/*
 * Responsibility
 * - Liveness probe (no auth, no dependencies)
 */
pub async fn health() -> &'static str {
    "ok"
}

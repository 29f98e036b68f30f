pub mod links;
pub mod today;

use sqlx::PgPool;

/// Shared state handed to every handler: the store connection pool,
/// created once at startup and injected rather than held as a global.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

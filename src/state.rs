// src/state.rs
use sqlx::SqlitePool;

use crate::config::Config;

/// Shared application state, handed to every handler through axum's `State`.
/// The pool is the only cross-request resource; all student/user data lives
/// in the store.
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
}

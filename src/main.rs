// src/main.rs
mod config;
mod error;
mod models;
mod pages;
mod routes;
mod services;
mod session;
mod state;

use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, routes::create_router, state::AppState};

/// Idempotent table definitions, applied on every startup.
pub static SCHEMA: &str = include_str!("../schema/schema.sql");

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("marksheet=info")),
        )
        .init();

    let config = Config::from_env().expect("Failed to load config");

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to DB");

    sqlx::query(SCHEMA)
        .execute(&pool)
        .await
        .expect("Failed to create tables");
    services::auth::ensure_default_admin(&pool)
        .await
        .expect("Failed to seed default admin");

    let addr = config.bind_addr;
    let app_state = Arc::new(AppState { pool, config });
    let app = create_router(app_state).layer(TraceLayer::new_for_http());

    tracing::info!("Server running on {}", addr);
    let listener = TcpListener::bind(addr).await.expect("Failed to bind");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

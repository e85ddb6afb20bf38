use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Internal faults a handler can hit. None of these carry user-facing
/// detail; the browser gets a plain 500 and the cause goes to the log.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("failed to hash password: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("failed to sign session token: {0}")]
    Session(#[from] jsonwebtoken::errors::Error),

    #[error("failed to render page: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {}", self);
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

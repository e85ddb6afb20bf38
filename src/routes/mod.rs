// src/routes/mod.rs
pub mod auth;
pub mod students;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(auth::login_form).post(auth::login))
        .route("/signup", get(auth::signup_form).post(auth::signup))
        .route("/logout", get(auth::logout))
        .route("/students", get(students::list))
        .route("/add", get(students::add_form).post(students::add))
        .route("/edit/:id", get(students::edit_form).post(students::edit))
        .route("/delete/:id", get(students::delete))
        .route("/filter/:status", get(students::filtered))
        .with_state(state)
}

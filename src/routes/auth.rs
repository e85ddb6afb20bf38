// src/routes/auth.rs
use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::{
    error::AppError,
    pages::{render, LoginPage, SignupPage},
    services::auth::{self, SignupError},
    session,
    state::AppState,
};

#[derive(Deserialize)]
pub struct Credentials {
    username: String,
    password: String,
}

pub async fn login_form() -> Result<Html<String>, AppError> {
    render(LoginPage { error: None })
}

/// One generic failure message for both unknown username and wrong
/// password; the two must stay indistinguishable.
pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<Credentials>,
) -> Result<Response, AppError> {
    match auth::verify_login(&state.pool, &form.username, &form.password).await? {
        Some(user) => {
            let token = session::issue(&user.username, user.role, &state.config.session_secret)?;
            let jar = jar.add(session::cookie(token));
            Ok((jar, Redirect::to("/students")).into_response())
        }
        None => Ok(render(LoginPage {
            error: Some("Invalid username or password"),
        })?
        .into_response()),
    }
}

pub async fn signup_form() -> Result<Html<String>, AppError> {
    render(SignupPage { error: None })
}

pub async fn signup(
    State(state): State<Arc<AppState>>,
    Form(form): Form<Credentials>,
) -> Result<Response, AppError> {
    match auth::signup(&state.pool, &form.username, &form.password).await {
        Ok(()) => Ok(Redirect::to("/").into_response()),
        Err(SignupError::UsernameTaken) => Ok(render(SignupPage {
            error: Some("Username already exists"),
        })?
        .into_response()),
        Err(SignupError::Hash(e)) => Err(e.into()),
        Err(SignupError::Store(e)) => Err(e.into()),
    }
}

/// Clears the session cookie whether or not one was present; idempotent.
pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    (jar.remove(session::removal_cookie()), Redirect::to("/"))
}

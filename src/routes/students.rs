use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use crate::{
    error::AppError,
    pages::{render, AddStudentPage, EditStudentPage, StudentsPage},
    services::students::{self, MarksFilter},
    session::Session,
    state::AppState,
};

#[derive(Deserialize)]
pub struct StudentForm {
    name: String,
    marks: String,
}

/// Marks arrive as form text; non-numeric input is rejected here with a 400
/// before anything touches the store.
fn parse_marks(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

fn bad_marks() -> Response {
    (StatusCode::BAD_REQUEST, "marks must be an integer").into_response()
}

/// Both the silent authorization bounce and the post-mutation redirect land
/// here. That they are indistinguishable to the caller is deliberate.
fn to_listing() -> Response {
    Redirect::to("/students").into_response()
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let students = students::list(&state.pool).await?;
    render(StudentsPage {
        students,
        is_admin: session.is_admin(),
    })
}

pub async fn filtered(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(status): Path<String>,
) -> Result<Html<String>, AppError> {
    let students = students::filtered(&state.pool, MarksFilter::from_status(&status)).await?;
    render(StudentsPage {
        students,
        is_admin: session.is_admin(),
    })
}

pub async fn add_form(session: Session) -> Result<Response, AppError> {
    if !session.is_admin() {
        return Ok(to_listing());
    }
    Ok(render(AddStudentPage)?.into_response())
}

pub async fn add(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(form): Form<StudentForm>,
) -> Result<Response, AppError> {
    if !session.is_admin() {
        return Ok(to_listing());
    }
    let Some(marks) = parse_marks(&form.marks) else {
        return Ok(bad_marks());
    };
    students::add(&state.pool, &form.name, marks).await?;
    Ok(to_listing())
}

pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    if !session.is_admin() {
        return Ok(to_listing());
    }
    let student = students::fetch(&state.pool, id).await?;
    Ok(render(EditStudentPage { student })?.into_response())
}

pub async fn edit(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<i64>,
    Form(form): Form<StudentForm>,
) -> Result<Response, AppError> {
    if !session.is_admin() {
        return Ok(to_listing());
    }
    let Some(marks) = parse_marks(&form.marks) else {
        return Ok(bad_marks());
    };
    students::update(&state.pool, id, &form.name, marks).await?;
    Ok(to_listing())
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    if !session.is_admin() {
        return Ok(to_listing());
    }
    students::delete(&state.pool, id).await?;
    Ok(to_listing())
}

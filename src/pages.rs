//! Askama template structs, one per rendered page.

use askama::Template;
use axum::response::Html;

use crate::error::AppError;
use crate::models::student::Student;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage<'a> {
    pub error: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "signup.html")]
pub struct SignupPage<'a> {
    pub error: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "students.html")]
pub struct StudentsPage {
    pub students: Vec<Student>,
    pub is_admin: bool,
}

#[derive(Template)]
#[template(path = "add_student.html")]
pub struct AddStudentPage;

#[derive(Template)]
#[template(path = "edit_student.html")]
pub struct EditStudentPage {
    pub student: Option<Student>,
}

pub fn render<T: Template>(page: T) -> Result<Html<String>, AppError> {
    Ok(Html(page.render()?))
}

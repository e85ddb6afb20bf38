// src/models/user.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Authorization tier. `User` accounts are read-only; `Admin` gets full CRUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// A row from the `users` table. `password` holds the bcrypt hash, never
/// the plaintext.
#[derive(Debug, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub role: Role,
}

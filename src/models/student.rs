use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `students` table. Marks are unbounded by contract;
/// negative or huge values are stored as-is.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub marks: i64,
}

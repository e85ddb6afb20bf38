pub mod auth;
pub mod students;

#[cfg(test)]
pub mod tests {
    use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

    /// In-memory store with the real schema applied.
    pub async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::query(crate::SCHEMA).execute(&pool).await.unwrap();
        pool
    }
}

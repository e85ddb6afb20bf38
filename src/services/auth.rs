use sqlx::SqlitePool;

use crate::models::user::{Role, User};

/// Seed credentials for the bootstrap admin account. Intentionally weak and
/// publicly known; hardening them is out of scope for this service.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Signup failures. Only `UsernameTaken` is ever shown to the user; the
/// other variants surface as a logged 500.
#[derive(thiserror::Error, Debug)]
pub enum SignupError {
    #[error("username already exists")]
    UsernameTaken,

    #[error("failed to hash password: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("failed to insert user: {0}")]
    Store(#[from] sqlx::Error),
}

pub async fn find_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, username, password, role FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await
}

/// Checks a credential pair against the store. Unknown username and wrong
/// password both come back as `None`; callers must not be able to tell them
/// apart.
pub async fn verify_login(
    pool: &SqlitePool,
    username: &str,
    password: &str,
) -> Result<Option<User>, sqlx::Error> {
    let Some(user) = find_user_by_username(pool, username).await? else {
        return Ok(None);
    };
    if bcrypt::verify(password, &user.password).unwrap_or(false) {
        Ok(Some(user))
    } else {
        Ok(None)
    }
}

/// Creates a regular account. The role is fixed to `user`; only the seeded
/// bootstrap account is ever an admin.
pub async fn signup(
    pool: &SqlitePool,
    username: &str,
    password: &str,
) -> Result<(), SignupError> {
    let hashed = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;
    let res = sqlx::query("INSERT INTO users (username, password, role) VALUES (?, ?, ?)")
        .bind(username)
        .bind(hashed)
        .bind(Role::User)
        .execute(pool)
        .await;
    match res {
        Ok(_) => Ok(()),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            Err(SignupError::UsernameTaken)
        }
        Err(e) => Err(SignupError::Store(e)),
    }
}

/// Creates the bootstrap admin account on first startup. A no-op once a
/// user named "admin" exists, so restarting never duplicates or resets it.
pub async fn ensure_default_admin(pool: &SqlitePool) -> Result<(), SignupError> {
    if find_user_by_username(pool, DEFAULT_ADMIN_USERNAME)
        .await?
        .is_some()
    {
        return Ok(());
    }
    tracing::info!("seeding default admin account");
    let hashed = bcrypt::hash(DEFAULT_ADMIN_PASSWORD, bcrypt::DEFAULT_COST)?;
    sqlx::query("INSERT INTO users (username, password, role) VALUES (?, ?, ?)")
        .bind(DEFAULT_ADMIN_USERNAME)
        .bind(hashed)
        .bind(Role::Admin)
        .execute(pool)
        .await?;
    Ok(())
}

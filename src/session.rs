//! Signed-cookie sessions.
//!
//! The session is a JWT carried in a cookie, holding exactly the
//! authenticated username and role. Presence of a verifiable token is the
//! sole authentication signal; there is no server-side session table, no
//! rotation and no expiry (the cookie lives for the browser session, the
//! token for the lifetime of the signing secret).

use std::sync::Arc;

use axum::{
    async_trait, extract::FromRequestParts, http::request::Parts, response::Redirect,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{models::user::Role, state::AppState};

pub const SESSION_COOKIE: &str = "session";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Claims {
    sub: String,
    role: Role,
}

/// An authenticated request context, decoded from the session cookie.
#[derive(Debug, Clone)]
pub struct Session {
    pub username: String,
    pub role: Role,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Signs a fresh session token for a just-authenticated user.
pub fn issue(
    username: &str,
    role: Role,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: username.to_owned(),
        role,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Decodes and verifies a session token. Any failure (bad signature,
/// garbage, missing claims) is treated the same as no session at all.
pub fn verify(token: &str, secret: &str) -> Option<Session> {
    let mut validation = Validation::default();
    // Sessions never expire by contract, so no `exp` claim is issued or
    // required.
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .ok()
    .map(|data| Session {
        username: data.claims.sub,
        role: data.claims.role,
    })
}

/// Builds the cookie that carries a session token.
pub fn cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .build()
}

/// Builds the removal cookie used by logout.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE)
        .path("/")
        .http_only(true)
        .build()
}

/// Extracting a `Session` is how handlers require authentication: requests
/// without a valid session cookie are bounced straight to the login page.
#[async_trait]
impl FromRequestParts<Arc<AppState>> for Session {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        jar.get(SESSION_COOKIE)
            .and_then(|c| verify(c.value(), &state.config.session_secret))
            .ok_or_else(|| Redirect::to("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_then_verify_round_trips() {
        let token = issue("alice", Role::User, "secret123").unwrap();
        let session = verify(&token, "secret123").unwrap();
        assert_eq!(session.username, "alice");
        assert_eq!(session.role, Role::User);
        assert!(!session.is_admin());
    }

    #[test]
    fn admin_role_survives_the_token() {
        let token = issue("admin", Role::Admin, "secret123").unwrap();
        let session = verify(&token, "secret123").unwrap();
        assert!(session.is_admin());
    }

    #[test]
    fn wrong_secret_is_no_session() {
        let token = issue("alice", Role::User, "secret123").unwrap();
        assert!(verify(&token, "another-secret").is_none());
    }

    #[test]
    fn garbage_token_is_no_session() {
        assert!(verify("not-a-token", "secret123").is_none());
        assert!(verify("", "secret123").is_none());
    }
}

//! Session-cookie authentication.
//!
//! Passwords are hashed with bcrypt before they reach the repository.
//! Logins mint an opaque UUID session token stored server-side and handed
//! to the client in an `HttpOnly` cookie; the `AuthUser` extractor resolves
//! that cookie back to a user ID on every protected endpoint.

use std::collections::HashMap;

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use bcrypt::{hash, verify, DEFAULT_COST};
use parking_lot::RwLock;
use uuid::Uuid;

use super::error::AppError;
use super::state::AppState;
use crate::api::UserId;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session_id";

/// Password hashing and verification.
pub struct PasswordService;

impl PasswordService {
    /// Hash a password using bcrypt.
    pub fn hash_password(password: &str) -> Result<String, AppError> {
        hash(password, DEFAULT_COST)
            .map_err(|_| AppError::Internal("Failed to hash password".to_string()))
    }

    /// Verify a password against a stored hash.
    pub fn verify_password(password: &str, hashed: &str) -> Result<bool, AppError> {
        verify(password, hashed)
            .map_err(|_| AppError::Internal("Failed to verify password".to_string()))
    }
}

/// Server-side session token store.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, UserId>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Mint a new session token for a user.
    pub fn create_session(&self, user_id: UserId) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions.write().insert(token.clone(), user_id);
        token
    }

    /// Resolve a session token to its user.
    pub fn resolve(&self, token: &str) -> Option<UserId> {
        self.sessions.read().get(token).copied()
    }

    /// Invalidate a session token. Unknown tokens are ignored.
    pub fn revoke(&self, token: &str) {
        self.sessions.write().remove(token);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// `Set-Cookie` value that establishes a session.
pub fn session_cookie(token: &str) -> String {
    format!("{}={}; HttpOnly; Path=/; SameSite=Lax", SESSION_COOKIE, token)
}

/// `Set-Cookie` value that clears the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{}=; HttpOnly; Path=/; Max-Age=0", SESSION_COOKIE)
}

/// Extract the session token from a `Cookie` header value.
pub fn session_token_from_cookies(cookies: &str) -> Option<&str> {
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE && !value.is_empty()).then_some(value)
    })
}

/// Authenticated user, extracted from the session cookie.
///
/// Rejects with 401 when the cookie is missing or the token is unknown.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: UserId,
    /// The raw session token, kept for logout.
    pub token: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let cookies = parts
            .headers
            .get(COOKIE)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Not logged in".to_string()))?;
        let token = session_token_from_cookies(cookies)
            .ok_or_else(|| AppError::Unauthorized("Not logged in".to_string()))?;
        let user_id = state
            .sessions
            .resolve(token)
            .ok_or_else(|| AppError::Unauthorized("Session expired".to_string()))?;

        Ok(AuthUser {
            user_id,
            token: token.to_string(),
        })
    }
}

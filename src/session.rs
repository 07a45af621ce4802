//! Admin sessions: a shared password exchanged for bearer tokens.

use std::collections::HashSet;

use parking_lot::Mutex;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Admin access is disabled")]
    Disabled,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Missing bearer token")]
    MissingToken,

    #[error("Invalid or expired session")]
    InvalidToken,
}

/// Issues and checks admin session tokens.
///
/// Tokens live in memory only and are dropped on restart or logout.
#[derive(Debug)]
pub struct SessionGate {
    password: Option<String>,
    tokens: Mutex<HashSet<String>>,
}

impl SessionGate {
    /// `None` disables admin login entirely.
    pub fn new(password: Option<String>) -> Self {
        Self {
            password,
            tokens: Mutex::new(HashSet::new()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.password.is_some()
    }

    pub fn login(&self, password: &str) -> Result<String, AuthError> {
        let expected = self.password.as_deref().ok_or(AuthError::Disabled)?;
        if !constant_time_eq(expected.as_bytes(), password.as_bytes()) {
            tracing::warn!("admin login rejected");
            return Err(AuthError::InvalidCredentials);
        }
        let token = Uuid::new_v4().simple().to_string();
        self.tokens.lock().insert(token.clone());
        tracing::info!(sessions = self.session_count(), "admin logged in");
        Ok(token)
    }

    pub fn is_authenticated(&self, token: &str) -> bool {
        self.is_enabled() && self.tokens.lock().contains(token)
    }

    /// Checks an `Authorization` header value of the form `Bearer <token>`.
    pub fn authorize(&self, header: Option<&str>) -> Result<(), AuthError> {
        if !self.is_enabled() {
            return Err(AuthError::Disabled);
        }
        let token = header
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingToken)?;
        if self.is_authenticated(token) {
            Ok(())
        } else {
            Err(AuthError::InvalidToken)
        }
    }

    /// Returns whether the token was live.
    pub fn logout(&self, token: &str) -> bool {
        let removed = self.tokens.lock().remove(token);
        if removed {
            tracing::info!("admin logged out");
        }
        removed
    }

    pub fn session_count(&self) -> usize {
        self.tokens.lock().len()
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

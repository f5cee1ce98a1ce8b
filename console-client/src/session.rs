//! Session store
//!
//! The single authoritative read/write point for the persisted
//! `{ user, token }` pair. Screens receive the session at construction
//! instead of probing browser-style ad-hoc storage; logout is a full
//! clear. Token expiry is detected from the JWT `exp` claim.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::AdminRole;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Signed-in user information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: AdminRole,
}

/// The acting user as seen by view-models: id plus role.
///
/// Used for UI gating only; the server independently authorizes every
/// mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: String,
    pub role: AdminRole,
}

impl Actor {
    pub fn is_super_admin(&self) -> bool {
        self.role == AdminRole::SuperAdmin
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionFile {
    user: Option<UserInfo>,
    token: Option<String>,
}

/// File-backed session store: `{dir}/session.json`
pub struct Session {
    file_path: PathBuf,
    data: SessionFile,
}

impl Session {
    /// Create an empty session rooted at the given directory
    pub fn new(dir: &Path) -> Self {
        Self {
            file_path: dir.join("session.json"),
            data: SessionFile::default(),
        }
    }

    /// Load the session from disk, empty if the file does not exist
    pub fn load(dir: &Path) -> Result<Self, SessionError> {
        let file_path = dir.join("session.json");
        let data = if file_path.exists() {
            let content = std::fs::read_to_string(&file_path)?;
            serde_json::from_str(&content)?
        } else {
            SessionFile::default()
        };
        Ok(Self { file_path, data })
    }

    /// Persist the session to disk
    pub fn save(&self) -> Result<(), SessionError> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.data)?;
        std::fs::write(&self.file_path, content)?;
        Ok(())
    }

    /// Store a signed-in user and token, persisting immediately
    pub fn sign_in(&mut self, user: UserInfo, token: String) -> Result<(), SessionError> {
        self.data.user = Some(user);
        self.data.token = Some(token);
        self.save()
    }

    /// Full clear: drop user and token and remove the file
    pub fn sign_out(&mut self) -> Result<(), SessionError> {
        self.data = SessionFile::default();
        if self.file_path.exists() {
            std::fs::remove_file(&self.file_path)?;
        }
        Ok(())
    }

    pub fn token(&self) -> Option<&str> {
        self.data.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.data.user.as_ref()
    }

    /// The acting user, if signed in
    pub fn actor(&self) -> Option<Actor> {
        self.data.user.as_ref().map(|u| Actor {
            id: u.id.clone(),
            role: u.role,
        })
    }

    /// Whether the stored token has expired (or none is stored).
    /// Tokens without an `exp` claim are treated as unexpired.
    pub fn token_expired(&self, now: DateTime<Utc>) -> bool {
        match self.data.token.as_deref() {
            None => true,
            Some(token) => match parse_jwt_exp(token) {
                Some(exp) => (now.timestamp() as u64) >= exp,
                None => false,
            },
        }
    }
}

/// Parse the expiry time (Unix timestamp) out of a JWT payload.
///
/// Format: header.payload.signature, payload base64url-encoded JSON.
fn parse_jwt_exp(token: &str) -> Option<u64> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
    let payload_bytes = URL_SAFE_NO_PAD.decode(parts[1]).ok()?;
    let payload: serde_json::Value = serde_json::from_slice(&payload_bytes).ok()?;
    payload.get("exp")?.as_u64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn user() -> UserInfo {
        UserInfo {
            id: "a1".to_string(),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            role: AdminRole::Admin,
        }
    }

    fn jwt_with_exp(exp: u64) -> String {
        let payload = URL_SAFE_NO_PAD.encode(format!("{{\"exp\":{}}}", exp));
        format!("eyJhbGciOiJIUzI1NiJ9.{}.sig", payload)
    }

    #[test]
    fn sign_in_persists_and_reloads() {
        let dir = TempDir::new().unwrap();
        let mut session = Session::new(dir.path());
        session.sign_in(user(), "tok-1".to_string()).unwrap();

        let reloaded = Session::load(dir.path()).unwrap();
        assert_eq!(reloaded.token(), Some("tok-1"));
        assert_eq!(reloaded.actor().unwrap().id, "a1");
    }

    #[test]
    fn sign_out_clears_everything() {
        let dir = TempDir::new().unwrap();
        let mut session = Session::new(dir.path());
        session.sign_in(user(), "tok-1".to_string()).unwrap();
        session.sign_out().unwrap();

        assert!(session.token().is_none());
        let reloaded = Session::load(dir.path()).unwrap();
        assert!(reloaded.user().is_none());
    }

    #[test]
    fn expired_jwt_is_detected() {
        let dir = TempDir::new().unwrap();
        let mut session = Session::new(dir.path());
        session.sign_in(user(), jwt_with_exp(1_000)).unwrap();

        let later = Utc.timestamp_opt(2_000, 0).unwrap();
        assert!(session.token_expired(later));

        let earlier = Utc.timestamp_opt(500, 0).unwrap();
        assert!(!session.token_expired(earlier));
    }

    #[test]
    fn opaque_token_never_expires() {
        let dir = TempDir::new().unwrap();
        let mut session = Session::new(dir.path());
        session.sign_in(user(), "not-a-jwt".to_string()).unwrap();
        assert!(!session.token_expired(Utc::now()));
    }

    #[test]
    fn missing_token_counts_as_expired() {
        let dir = TempDir::new().unwrap();
        let session = Session::new(dir.path());
        assert!(session.token_expired(Utc::now()));
    }
}

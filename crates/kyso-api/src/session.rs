//! Persisted login session
//!
//! `kyso login` writes the API URL and bearer token to `~/.kyso/auth.json`
//! (or `$KYSO_HOME/auth.json`). Every other command reads it back.

use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, TimeZone, Utc};
use kyso_fs::{ConfigStore, NormalizedPath, io};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// API used when neither the flag/env nor the session names one.
pub const DEFAULT_API_URL: &str = "https://kyso.io/api/v1";

const SESSION_FILE: &str = "auth.json";

/// What the CLI remembers between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub kyso_install_url: String,
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Claims carried in the platform's JWT.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    pub payload: TokenPayload,
    /// Expiry as seconds since the Unix epoch
    #[serde(default)]
    pub exp: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenPayload {
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl TokenClaims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| Utc.timestamp_opt(exp, 0).single())
    }
}

/// Decode the payload segment of a JWT. The signature is not verified;
/// the server does that on every request.
pub fn decode_claims(token: &str) -> Result<TokenClaims> {
    let invalid = |message: String| Error::InvalidToken { message };
    let mut parts = token.split('.');
    let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return Err(invalid("expected three dot-separated segments".into())),
    };
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| invalid(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| invalid(e.to_string()))
}

impl Session {
    pub fn new(kyso_install_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            kyso_install_url: kyso_install_url.into(),
            token: token.into(),
            username: None,
        }
    }

    /// Directory holding CLI state: `$KYSO_HOME`, else `~/.kyso`.
    pub fn home_dir() -> Result<PathBuf> {
        if let Some(home) = std::env::var_os("KYSO_HOME").filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(home));
        }
        dirs::home_dir()
            .map(|home| home.join(".kyso"))
            .ok_or_else(|| Error::Fs(kyso_fs::Error::NotFound {
                path: PathBuf::from("~"),
            }))
    }

    /// Default session file location.
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::home_dir()?.join(SESSION_FILE))
    }

    /// Read the session at `path`; `None` if there is none.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let session = ConfigStore::new().load(&NormalizedPath::new(path))?;
        Ok(Some(session))
    }

    /// Read the session at `path`, failing if missing or expired.
    pub fn require(path: &Path) -> Result<Self> {
        let session = Self::load(path)?.ok_or(Error::NotLoggedIn)?;
        if session.is_expired(Utc::now()) {
            return Err(Error::SessionExpired);
        }
        Ok(session)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        tracing::debug!(?path, "Saving session");
        ConfigStore::new().save(&NormalizedPath::new(path), self)?;
        Ok(())
    }

    /// Delete the session file. Returns whether one existed.
    pub fn clear(path: &Path) -> Result<bool> {
        Ok(io::remove_if_exists(&NormalizedPath::new(path))?)
    }

    pub fn claims(&self) -> Result<TokenClaims> {
        decode_claims(&self.token)
    }

    /// Expired when the token carries an `exp` at or before `now`. Tokens
    /// that cannot be decoded (opaque access tokens) never expire locally.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.claims()
            .ok()
            .and_then(|claims| claims.expires_at())
            .is_some_and(|expiry| expiry <= now)
    }
}

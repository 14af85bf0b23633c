//! Session and API endpoint resolution
//!
//! Commands never read the session file or environment directly; they ask
//! the [`Context`] for a client.

use std::path::{Path, PathBuf};

use kyso_api::{ApiClient, DEFAULT_API_URL, Session};

use crate::error::Result;

/// Where the session lives and which API the user asked for.
#[derive(Debug, Clone)]
pub struct Context {
    api_override: Option<String>,
    session_path: PathBuf,
}

impl Context {
    /// Context using the default session location (`$KYSO_HOME` or `~/.kyso`).
    pub fn from_env(api_override: Option<String>) -> Result<Self> {
        Ok(Self::new(api_override, Session::default_path()?))
    }

    pub fn new(api_override: Option<String>, session_path: PathBuf) -> Self {
        Self {
            api_override: api_override.filter(|url| !url.trim().is_empty()),
            session_path,
        }
    }

    pub fn session_path(&self) -> &Path {
        &self.session_path
    }

    /// The stored session, if any.
    pub fn session(&self) -> Result<Option<Session>> {
        Ok(Session::load(&self.session_path)?)
    }

    /// `--api`/`KYSO_API`, then the session's install URL, then the default.
    pub fn api_url(&self, session: Option<&Session>) -> String {
        resolve_api_url(self.api_override.as_deref(), session)
    }

    /// Client authenticated with the stored session.
    pub fn client(&self) -> Result<ApiClient> {
        let session = Session::require(&self.session_path)?;
        let url = self.api_url(Some(&session));
        tracing::debug!(%url, "Using authenticated client");
        Ok(ApiClient::new(url)?.with_token(session.token))
    }

    /// Client without credentials, for logging in.
    pub fn anonymous_client(&self, url: &str) -> Result<ApiClient> {
        Ok(ApiClient::new(url)?)
    }
}

fn resolve_api_url(api_override: Option<&str>, session: Option<&Session>) -> String {
    api_override
        .map(str::to_string)
        .or_else(|| session.map(|s| s.kyso_install_url.clone()))
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

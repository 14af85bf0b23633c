//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based input.

use dialoguer::{Confirm, Input, Password, Select};
use kyso_api::{DEFAULT_API_URL, LoginProvider};

use crate::error::Result;

const PROVIDERS: &[&str] = &["Email and password", "Username and access token"];

/// Values collected for `kyso login`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginAnswers {
    pub url: String,
    pub provider: LoginProvider,
    pub username: String,
    pub secret: String,
}

/// Login flags as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct LoginFlags {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub token: Option<String>,
}

impl LoginFlags {
    /// Answers derivable from flags alone, or `None` if a prompt is needed.
    pub fn complete(&self, default_url: &str) -> Option<LoginAnswers> {
        let username = self.username.clone()?;
        let (provider, secret) = match (&self.password, &self.token) {
            (_, Some(token)) => (LoginProvider::AccessToken, token.clone()),
            (Some(password), None) => (LoginProvider::Kyso, password.clone()),
            (None, None) => return None,
        };
        Some(LoginAnswers {
            url: self.url.clone().unwrap_or_else(|| default_url.to_string()),
            provider,
            username,
            secret,
        })
    }
}

/// Prompt for whatever the flags left out.
pub fn prompt_login(flags: &LoginFlags, default_url: &str) -> Result<LoginAnswers> {
    let url = match &flags.url {
        Some(url) => url.clone(),
        None => Input::new()
            .with_prompt("Kyso API URL")
            .default(if default_url.is_empty() {
                DEFAULT_API_URL.to_string()
            } else {
                default_url.to_string()
            })
            .interact_text()?,
    };

    let provider = match (&flags.password, &flags.token) {
        (_, Some(_)) => LoginProvider::AccessToken,
        (Some(_), None) => LoginProvider::Kyso,
        (None, None) => {
            let choice = Select::new()
                .with_prompt("Login method")
                .items(PROVIDERS)
                .default(0)
                .interact()?;
            if choice == 0 {
                LoginProvider::Kyso
            } else {
                LoginProvider::AccessToken
            }
        }
    };

    let username = match &flags.username {
        Some(username) => username.clone(),
        None => Input::new()
            .with_prompt(match provider {
                LoginProvider::Kyso => "Email",
                LoginProvider::AccessToken => "Username",
            })
            .interact_text()?,
    };

    let secret = match (provider, &flags.password, &flags.token) {
        (LoginProvider::AccessToken, _, Some(token)) => token.clone(),
        (LoginProvider::Kyso, Some(password), _) => password.clone(),
        (LoginProvider::AccessToken, _, None) => {
            Password::new().with_prompt("Access token").interact()?
        }
        (LoginProvider::Kyso, None, _) => Password::new().with_prompt("Password").interact()?,
    };

    Ok(LoginAnswers {
        url,
        provider,
        username,
        secret,
    })
}

/// Ask a yes/no question, defaulting to no.
pub fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_flag_selects_access_token_login() {
        let flags = LoginFlags {
            username: Some("jane".into()),
            token: Some("abc".into()),
            ..Default::default()
        };
        let answers = flags.complete(DEFAULT_API_URL).unwrap();
        assert_eq!(answers.provider, LoginProvider::AccessToken);
        assert_eq!(answers.secret, "abc");
        assert_eq!(answers.url, DEFAULT_API_URL);
    }

    #[test]
    fn password_flag_selects_email_login() {
        let flags = LoginFlags {
            url: Some("http://localhost/api/v1".into()),
            username: Some("jane@example.com".into()),
            password: Some("secret".into()),
            ..Default::default()
        };
        let answers = flags.complete(DEFAULT_API_URL).unwrap();
        assert_eq!(answers.provider, LoginProvider::Kyso);
        assert_eq!(answers.url, "http://localhost/api/v1");
    }

    #[test]
    fn missing_secret_needs_prompt() {
        let flags = LoginFlags {
            username: Some("jane".into()),
            ..Default::default()
        };
        assert!(flags.complete(DEFAULT_API_URL).is_none());
    }
}

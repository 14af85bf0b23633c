//! Blocking client for the Kyso REST API
//!
//! Reads are retried with exponential backoff on connection failures and
//! 5xx answers; writes are sent once.

use std::time::Duration;

use backoff::ExponentialBackoff;
use kyso_core::ManifestEntry;
use reqwest::Method;
use reqwest::StatusCode;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::models::{
    Channel, CreateChannelRequest, Envelope, LoginRequest, Organization, Report, Theme,
    UpdateOrganizationRequest, UpdateUserRequest, User,
};
use crate::{Error, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const RETRY_BUDGET: Duration = Duration::from_secs(10);

/// Blocking Kyso API client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    retry_budget: Duration,
}

impl ApiClient {
    /// Create an anonymous client for `base_url` (e.g. `https://kyso.io/api/v1`).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("kyso-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
            retry_budget: RETRY_BUDGET,
        })
    }

    /// Attach a bearer token to every subsequent request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Override how long reads keep retrying.
    pub fn with_retry_budget(mut self, budget: Duration) -> Self {
        self.retry_budget = budget;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    // ------------------------------------------------------------------
    // Auth and users
    // ------------------------------------------------------------------

    /// Exchange credentials for a bearer token.
    pub fn login(&self, request: &LoginRequest) -> Result<String> {
        self.send_json(Method::POST, "/auth/login", request)
    }

    pub fn current_user(&self) -> Result<User> {
        self.get_json("/user", &[])
    }

    pub fn get_user(&self, username: &str) -> Result<User> {
        self.get_json(&format!("/users/{username}"), &[])
    }

    pub fn update_user(&self, id: &str, request: &UpdateUserRequest) -> Result<User> {
        self.send_json(Method::PATCH, &format!("/users/{id}"), request)
    }

    // ------------------------------------------------------------------
    // Organizations, channels and themes
    // ------------------------------------------------------------------

    pub fn list_organizations(&self) -> Result<Vec<Organization>> {
        self.get_json("/organizations", &[])
    }

    pub fn get_organization(&self, slug: &str) -> Result<Organization> {
        self.get_json(&format!("/organizations/slug/{slug}"), &[])
    }

    pub fn update_organization(
        &self,
        id: &str,
        request: &UpdateOrganizationRequest,
    ) -> Result<Organization> {
        self.send_json(Method::PATCH, &format!("/organizations/{id}"), request)
    }

    pub fn list_channels(&self, organization_id: &str) -> Result<Vec<Channel>> {
        self.get_json("/teams", &[("organization_id", organization_id.to_string())])
    }

    pub fn get_channel(&self, organization: &str, channel: &str) -> Result<Channel> {
        self.get_json(&format!("/teams/{organization}/{channel}"), &[])
    }

    pub fn create_channel(&self, request: &CreateChannelRequest) -> Result<Channel> {
        self.send_json(Method::POST, "/teams", request)
    }

    pub fn delete_channel(&self, id: &str) -> Result<()> {
        let url = self.url(&format!("/teams/{id}"));
        tracing::debug!(%url, "DELETE");
        let response = self.authorized(self.client.delete(&url)).send()?;
        check_status(&Method::DELETE, &url, response)?;
        Ok(())
    }

    pub fn list_themes(&self) -> Result<Vec<Theme>> {
        self.get_json("/themes", &[])
    }

    pub fn set_organization_theme(&self, organization_id: &str, theme: &str) -> Result<Organization> {
        self.send_json(
            Method::PATCH,
            &format!("/organizations/{organization_id}/options"),
            &serde_json::json!({ "theme": theme }),
        )
    }

    // ------------------------------------------------------------------
    // Reports
    // ------------------------------------------------------------------

    /// Manifest of a pushed report version; the latest when `version` is `None`.
    pub fn report_files(
        &self,
        organization: &str,
        team: &str,
        slug: &str,
        version: Option<u32>,
    ) -> Result<Vec<ManifestEntry>> {
        let query = version_query(version);
        self.get_json(&format!("/reports/{organization}/{team}/{slug}/files"), &query)
    }

    /// Upload a zipped report. The archive carries its own `kyso.json`/`kyso.yaml`.
    pub fn push_report(&self, archive: Vec<u8>, message: Option<&str>) -> Result<Report> {
        let url = self.url("/reports/kyso");
        let part = Part::bytes(archive)
            .file_name("report.zip")
            .mime_str("application/zip")?;
        let mut form = Form::new().part("file", part);
        if let Some(message) = message {
            form = form.text("message", message.to_string());
        }

        tracing::debug!(%url, "POST multipart");
        let response = self.authorized(self.client.post(&url)).multipart(form).send()?;
        let response = check_status(&Method::POST, &url, response)?;
        parse_envelope(response)
    }

    /// Download a report version as ZIP bytes.
    pub fn pull_report(
        &self,
        organization: &str,
        team: &str,
        slug: &str,
        version: Option<u32>,
    ) -> Result<Vec<u8>> {
        let url = self.url(&format!("/reports/{organization}/{team}/{slug}/pull"));
        let query = version_query(version);
        self.with_retry(|| {
            tracing::debug!(%url, "GET archive");
            let response = self
                .authorized(self.client.get(&url))
                .query(&query)
                .send()?;
            let response = check_status(&Method::GET, &url, response)?;
            Ok(response.bytes()?.to_vec())
        })
    }

    // ------------------------------------------------------------------
    // Plumbing
    // ------------------------------------------------------------------

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = self.url(path);
        self.with_retry(|| {
            tracing::debug!(%url, "GET");
            let response = self.authorized(self.client.get(&url)).query(query).send()?;
            let response = check_status(&Method::GET, &url, response)?;
            parse_envelope(response)
        })
    }

    fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(%url, %method, "Sending");
        let response = self
            .authorized(self.client.request(method.clone(), &url))
            .json(body)
            .send()?;
        let response = check_status(&method, &url, response)?;
        parse_envelope(response)
    }

    fn with_retry<T>(&self, mut op: impl FnMut() -> Result<T>) -> Result<T> {
        let policy = ExponentialBackoff {
            max_elapsed_time: Some(self.retry_budget),
            ..ExponentialBackoff::default()
        };
        backoff::retry(policy, || {
            op().map_err(|e| {
                if e.is_transient() {
                    tracing::warn!("Retrying after transient error: {}", e);
                    backoff::Error::transient(e)
                } else {
                    backoff::Error::permanent(e)
                }
            })
        })
        .map_err(|e| match e {
            backoff::Error::Permanent(err) => err,
            backoff::Error::Transient { err, .. } => err,
        })
    }
}

fn version_query(version: Option<u32>) -> Vec<(&'static str, String)> {
    version
        .map(|v| vec![("version", v.to_string())])
        .unwrap_or_default()
}

fn check_status(method: &Method, url: &str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(error_for_status(method, url, status, &body))
}

fn parse_envelope<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text()?;
    let envelope: Envelope<T> = serde_json::from_str(&body)?;
    Ok(envelope.data)
}

/// Map a failed response to an [`Error`], pulling `message` out of the
/// platform's JSON error body when present.
pub(crate) fn error_for_status(method: &Method, url: &str, status: StatusCode, body: &str) -> Error {
    let message = error_message(body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_string()
    });
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::Unauthorized { message },
        StatusCode::NOT_FOUND => Error::NotFound {
            resource: url.to_string(),
        },
        _ => Error::Http {
            method: method.to_string(),
            url: url.to_string(),
            status: status.as_u16(),
            message,
        },
    }
}

fn error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| match &value["message"] {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Array(items) => Some(
                items
                    .iter()
                    .filter_map(|i| i.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
            _ => None,
        })
        .unwrap_or_else(|| body.chars().take(200).collect());
    Some(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn url_joins_without_double_slash() {
        let client = ApiClient::new("https://kyso.example/api/v1/").unwrap();
        assert_eq!(client.url("/reports/kyso"), "https://kyso.example/api/v1/reports/kyso");
        assert_eq!(client.url("user"), "https://kyso.example/api/v1/user");
    }

    #[test]
    fn with_token_marks_client_authenticated() {
        let client = ApiClient::new("http://localhost").unwrap();
        assert!(!client.has_token());
        assert!(client.with_token("t").has_token());
    }

    #[rstest]
    #[case(StatusCode::UNAUTHORIZED)]
    #[case(StatusCode::FORBIDDEN)]
    fn auth_statuses_are_unauthorized(#[case] status: StatusCode) {
        let err = error_for_status(&Method::GET, "http://x/user", status, r#"{"message":"Invalid jwt"}"#);
        match err {
            Error::Unauthorized { message } => assert_eq!(message, "Invalid jwt"),
            other => panic!("expected Unauthorized, got {other:?}"),
        }
    }

    #[test]
    fn not_found_names_the_url() {
        let err = error_for_status(&Method::GET, "http://x/teams/a/b", StatusCode::NOT_FOUND, "");
        assert!(matches!(err, Error::NotFound { resource } if resource == "http://x/teams/a/b"));
    }

    #[test]
    fn server_errors_are_transient() {
        let err = error_for_status(&Method::GET, "http://x", StatusCode::BAD_GATEWAY, "upstream down");
        assert!(err.is_transient());
        match err {
            Error::Http { status, message, .. } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream down");
            }
            other => panic!("expected Http, got {other:?}"),
        }
    }

    #[test]
    fn client_errors_are_permanent() {
        let err = error_for_status(
            &Method::POST,
            "http://x/teams",
            StatusCode::BAD_REQUEST,
            r#"{"statusCode":400,"message":["display_name should not be empty","visibility must be valid"]}"#,
        );
        assert!(!err.is_transient());
        assert!(err.to_string().contains("display_name should not be empty; visibility must be valid"));
    }

    #[test]
    fn version_query_is_empty_for_latest() {
        assert!(version_query(None).is_empty());
        assert_eq!(version_query(Some(3)), vec![("version", "3".to_string())]);
    }

    #[test]
    fn retry_gives_up_on_permanent_errors_immediately() {
        let client = ApiClient::new("http://localhost").unwrap();
        let mut calls = 0;
        let result: Result<()> = client.with_retry(|| {
            calls += 1;
            Err(Error::NotLoggedIn)
        });
        assert!(matches!(result, Err(Error::NotLoggedIn)));
        assert_eq!(calls, 1);
    }

    #[test]
    fn retry_recovers_from_transient_errors() {
        let client = ApiClient::new("http://localhost")
            .unwrap()
            .with_retry_budget(Duration::from_secs(5));
        let mut calls = 0;
        let result = client.with_retry(|| {
            calls += 1;
            if calls < 2 {
                Err(error_for_status(&Method::GET, "http://x", StatusCode::SERVICE_UNAVAILABLE, ""))
            } else {
                Ok(calls)
            }
        });
        assert_eq!(result.unwrap(), 2);
    }
}

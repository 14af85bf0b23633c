//! Request and response shapes of the Kyso API

use serde::{Deserialize, Serialize};

/// Every JSON response is wrapped in `{ "data": ... }`.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "sluglified_name")]
    pub slug: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelVisibility {
    Public,
    #[default]
    Protected,
    Private,
}

/// A channel ("team" in the API) inside an organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "sluglified_name")]
    pub slug: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub visibility: ChannelVisibility,
    #[serde(default)]
    pub organization_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub id: String,
    /// Report slug
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub team_id: String,
    #[serde(default)]
    pub last_version: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoginProvider {
    /// Email and password
    #[default]
    #[serde(rename = "kyso")]
    Kyso,
    /// Username and personal access token
    #[serde(rename = "kyso-access-token")]
    AccessToken,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub provider: LoginProvider,
    /// Email for `Kyso`, username for `AccessToken`
    pub email: String,
    /// Password or access token
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl UpdateUserRequest {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateOrganizationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl UpdateOrganizationRequest {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateChannelRequest {
    pub organization_id: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub visibility: ChannelVisibility,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn organization_reads_sluglified_name() {
        let json = r#"{"data": {"id": "o1", "sluglified_name": "acme", "display_name": "Acme"}}"#;
        let envelope: Envelope<Organization> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data.slug, "acme");
        assert_eq!(envelope.data.bio, None);
    }

    #[test]
    fn channel_visibility_defaults_to_protected() {
        let channel: Channel = serde_json::from_str(r#"{"sluglified_name": "data"}"#).unwrap();
        assert_eq!(channel.visibility, ChannelVisibility::Protected);
    }

    #[test]
    fn update_request_omits_unset_fields() {
        let request = UpdateUserRequest {
            bio: Some("Data person".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"bio": "Data person"})
        );
        assert!(UpdateUserRequest::default().is_empty());
    }

    #[test]
    fn login_provider_wire_names() {
        let request = LoginRequest {
            provider: LoginProvider::AccessToken,
            email: "jane".into(),
            password: "tok".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["provider"], "kyso-access-token");
    }
}

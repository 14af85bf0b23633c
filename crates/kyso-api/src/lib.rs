//! Kyso API client
//!
//! A small blocking client over the platform's REST API plus the on-disk
//! session the CLI keeps between invocations.

pub mod client;
pub mod error;
pub mod models;
pub mod session;

pub use client::ApiClient;
pub use error::{Error, Result};
pub use models::{
    Channel, ChannelVisibility, CreateChannelRequest, LoginProvider, LoginRequest, Organization,
    Report, Theme, UpdateOrganizationRequest, UpdateUserRequest, User,
};
pub use session::{DEFAULT_API_URL, Session, TokenClaims, decode_claims};

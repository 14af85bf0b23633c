//! Command implementations for kyso-cli

pub mod channels;
pub mod login;
pub mod organizations;
pub mod pull;
pub mod push;
pub mod status;
pub mod themes;
pub mod users;

pub use channels::run_channels;
pub use login::{run_login, run_logout, run_whoami};
pub use organizations::run_organizations;
pub use pull::{run_clone, run_pull};
pub use push::run_push;
pub use status::run_status;
pub use themes::run_themes;
pub use users::{run_profile, run_users};

use serde::Serialize;

use crate::error::Result;

/// Print `value` as pretty JSON for `--json` output.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

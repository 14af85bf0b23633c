//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use kyso_api::ChannelVisibility;

/// Kyso - Publish and manage reports on the Kyso platform
#[derive(Parser, Debug)]
#[command(name = "kyso")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Kyso API URL, overriding the one stored at login
    #[arg(long, global = true, env = "KYSO_API")]
    pub api: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Log in and store the session
    ///
    /// Prompts for anything not given on the command line.
    ///
    /// Examples:
    ///   kyso login
    ///   kyso login --url https://kyso.example/api/v1 --username jane --token <TOKEN>
    Login {
        /// Kyso API URL
        #[arg(long)]
        url: Option<String>,

        /// Email, or username when logging in with an access token
        #[arg(short, long)]
        username: Option<String>,

        /// Account password
        #[arg(short, long, conflicts_with = "token")]
        password: Option<String>,

        /// Personal access token
        #[arg(short, long)]
        token: Option<String>,
    },

    /// Remove the stored session
    Logout,

    /// Show the logged-in user
    Whoami {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Compare local report files against the pushed version
    Status {
        /// Report directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Compare against this version instead of the latest
        #[arg(long)]
        version: Option<u32>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Upload a report (or every report of a meta report)
    Push {
        /// Report directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Message stored with the new version
        #[arg(short, long)]
        message: Option<String>,

        /// List the files that would be uploaded without uploading
        #[arg(long)]
        dry_run: bool,
    },

    /// Download the pushed version of a report over a local directory
    Pull {
        /// Report directory containing kyso.json or kyso.yaml
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Version to download instead of the latest
        #[arg(long)]
        version: Option<u32>,
    },

    /// Download a report into a new directory
    ///
    /// Examples:
    ///   kyso clone acme/data/quarterly-numbers
    ///   kyso clone acme/data/quarterly-numbers --version 3 --path q1
    Clone {
        /// Report address as ORGANIZATION/CHANNEL/REPORT
        report: String,

        /// Version to download instead of the latest
        #[arg(long)]
        version: Option<u32>,

        /// Target directory (defaults to the report slug)
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// Manage organizations
    #[command(alias = "organization")]
    Organizations {
        #[command(subcommand)]
        action: OrganizationAction,
    },

    /// Manage channels (teams)
    #[command(alias = "channel")]
    Channels {
        #[command(subcommand)]
        action: ChannelAction,
    },

    /// Look up users
    #[command(alias = "user")]
    Users {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage organization themes
    #[command(alias = "theme")]
    Themes {
        #[command(subcommand)]
        action: ThemeAction,
    },

    /// Show or edit your own profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   kyso completions bash > ~/.local/share/bash-completion/completions/kyso
    ///   kyso completions zsh > ~/.zfunc/_kyso
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Profile fields shared by `organizations edit` and `profile edit`
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFields {
    /// New display name
    #[arg(long)]
    pub display_name: Option<String>,

    /// New bio
    #[arg(long)]
    pub bio: Option<String>,

    /// New link
    #[arg(long)]
    pub link: Option<String>,

    /// New location
    #[arg(long)]
    pub location: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum OrganizationAction {
    /// List organizations you belong to
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one organization
    Get {
        /// Organization slug
        organization: String,
        #[arg(long)]
        json: bool,
    },
    /// Update an organization's profile
    Edit {
        /// Organization slug
        organization: String,
        #[command(flatten)]
        fields: ProfileFields,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ChannelAction {
    /// List the channels of an organization
    List {
        /// Organization slug
        organization: String,
        #[arg(long)]
        json: bool,
    },
    /// Show one channel
    Get {
        /// Organization slug
        organization: String,
        /// Channel slug
        channel: String,
        #[arg(long)]
        json: bool,
    },
    /// Create a channel
    Create {
        /// Organization slug
        organization: String,
        /// Display name of the new channel
        name: String,
        /// Channel description
        #[arg(long)]
        description: Option<String>,
        /// Who can see the channel
        #[arg(long, value_enum, default_value_t = Visibility::Protected)]
        visibility: Visibility,
    },
    /// Delete a channel
    Delete {
        /// Organization slug
        organization: String,
        /// Channel slug
        channel: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Show a user
    Get {
        username: String,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ThemeAction {
    /// List available themes
    List {
        #[arg(long)]
        json: bool,
    },
    /// Set an organization's theme
    Set {
        /// Organization slug
        organization: String,
        /// Theme name
        theme: String,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ProfileAction {
    /// Show your profile
    Get {
        #[arg(long)]
        json: bool,
    },
    /// Update your profile
    Edit {
        #[command(flatten)]
        fields: ProfileFields,
    },
}

/// Channel visibility as accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

impl From<Visibility> for ChannelVisibility {
    fn from(value: Visibility) -> Self {
        match value {
            Visibility::Public => ChannelVisibility::Public,
            Visibility::Protected => ChannelVisibility::Protected,
            Visibility::Private => ChannelVisibility::Private,
        }
    }
}

//! users and profile

use colored::Colorize;
use kyso_api::{UpdateUserRequest, User};

use super::print_json;
use crate::cli::{ProfileAction, ProfileFields, UserAction};
use crate::context::Context;
use crate::error::{CliError, Result};

/// Run a `users` subcommand
pub fn run_users(context: &Context, action: UserAction) -> Result<()> {
    let client = context.client()?;
    match action {
        UserAction::Get { username, json } => {
            let user = client.get_user(&username)?;
            if json {
                return print_json(&user);
            }
            print_user(&user);
            Ok(())
        }
    }
}

/// Run a `profile` subcommand
pub fn run_profile(context: &Context, action: ProfileAction) -> Result<()> {
    let client = context.client()?;
    match action {
        ProfileAction::Get { json } => {
            let user = client.current_user()?;
            if json {
                return print_json(&user);
            }
            print_user(&user);
            Ok(())
        }
        ProfileAction::Edit { fields } => {
            let request = update_request(fields);
            if request.is_empty() {
                return Err(CliError::user(
                    "Nothing to update. Pass at least one of --display-name, --bio, --link, --location",
                ));
            }
            let me = client.current_user()?;
            let updated = client.update_user(&me.id, &request)?;
            println!("{} Updated profile of {}", "OK".green().bold(), updated.username.cyan());
            Ok(())
        }
    }
}

fn update_request(fields: ProfileFields) -> UpdateUserRequest {
    UpdateUserRequest {
        display_name: fields.display_name,
        bio: fields.bio,
        link: fields.link,
        location: fields.location,
    }
}

fn print_user(user: &User) {
    println!("{}: {}", "Username".dimmed(), user.username.cyan());
    if !user.display_name.is_empty() {
        println!("{}:     {}", "Name".dimmed(), user.display_name);
    }
    if !user.email.is_empty() {
        println!("{}:    {}", "Email".dimmed(), user.email);
    }
    if let Some(bio) = &user.bio {
        println!("{}:      {}", "Bio".dimmed(), bio);
    }
    if let Some(link) = &user.link {
        println!("{}:     {}", "Link".dimmed(), link);
    }
    if let Some(location) = &user.location {
        println!("{}: {}", "Location".dimmed(), location);
    }
}

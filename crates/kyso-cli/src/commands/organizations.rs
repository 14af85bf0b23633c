//! Organization commands

use colored::Colorize;
use kyso_api::{Organization, UpdateOrganizationRequest};

use super::print_json;
use crate::cli::{OrganizationAction, ProfileFields};
use crate::context::Context;
use crate::error::{CliError, Result};

/// Run an `organizations` subcommand
pub fn run_organizations(context: &Context, action: OrganizationAction) -> Result<()> {
    let client = context.client()?;
    match action {
        OrganizationAction::List { json } => {
            let organizations = client.list_organizations()?;
            if json {
                return print_json(&organizations);
            }
            if organizations.is_empty() {
                println!("{}", "No organizations".dimmed());
            }
            for organization in &organizations {
                println!(
                    "  {} {}",
                    organization.slug.cyan(),
                    organization.display_name.dimmed()
                );
            }
            Ok(())
        }
        OrganizationAction::Get { organization, json } => {
            let organization = client.get_organization(&organization)?;
            if json {
                return print_json(&organization);
            }
            print_organization(&organization);
            Ok(())
        }
        OrganizationAction::Edit {
            organization,
            fields,
        } => {
            let request = update_request(fields);
            if request.is_empty() {
                return Err(CliError::user(
                    "Nothing to update. Pass at least one of --display-name, --bio, --link, --location",
                ));
            }
            let current = client.get_organization(&organization)?;
            let updated = client.update_organization(&current.id, &request)?;
            println!("{} Updated {}", "OK".green().bold(), updated.slug.cyan());
            Ok(())
        }
    }
}

fn update_request(fields: ProfileFields) -> UpdateOrganizationRequest {
    UpdateOrganizationRequest {
        display_name: fields.display_name,
        bio: fields.bio,
        link: fields.link,
        location: fields.location,
    }
}

fn print_organization(organization: &Organization) {
    println!("{}:     {}", "Slug".dimmed(), organization.slug.cyan());
    println!("{}:     {}", "Name".dimmed(), organization.display_name);
    if let Some(bio) = &organization.bio {
        println!("{}:      {}", "Bio".dimmed(), bio);
    }
    if let Some(link) = &organization.link {
        println!("{}:     {}", "Link".dimmed(), link);
    }
    if let Some(location) = &organization.location {
        println!("{}: {}", "Location".dimmed(), location);
    }
    if let Some(theme) = &organization.theme {
        println!("{}:    {}", "Theme".dimmed(), theme);
    }
}

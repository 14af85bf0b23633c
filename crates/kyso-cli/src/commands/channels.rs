//! Channel (team) commands

use colored::Colorize;
use kyso_api::{Channel, CreateChannelRequest};

use super::print_json;
use crate::cli::ChannelAction;
use crate::context::Context;
use crate::error::Result;
use crate::interactive;

/// Run a `channels` subcommand
pub fn run_channels(context: &Context, action: ChannelAction) -> Result<()> {
    let client = context.client()?;
    match action {
        ChannelAction::List { organization, json } => {
            let organization = client.get_organization(&organization)?;
            let channels = client.list_channels(&organization.id)?;
            if json {
                return print_json(&channels);
            }
            if channels.is_empty() {
                println!("{}", "No channels".dimmed());
            }
            for channel in &channels {
                print_channel_line(channel);
            }
            Ok(())
        }
        ChannelAction::Get {
            organization,
            channel,
            json,
        } => {
            let channel = client.get_channel(&organization, &channel)?;
            if json {
                return print_json(&channel);
            }
            print_channel_line(&channel);
            if let Some(description) = &channel.description {
                println!("    {}", description.dimmed());
            }
            Ok(())
        }
        ChannelAction::Create {
            organization,
            name,
            description,
            visibility,
        } => {
            let organization = client.get_organization(&organization)?;
            let channel = client.create_channel(&CreateChannelRequest {
                organization_id: organization.id,
                display_name: name,
                description,
                visibility: visibility.into(),
            })?;
            println!(
                "{} Created channel {}/{}",
                "OK".green().bold(),
                organization.slug.cyan(),
                channel.slug.cyan()
            );
            Ok(())
        }
        ChannelAction::Delete {
            organization,
            channel,
            yes,
        } => {
            let target = client.get_channel(&organization, &channel)?;
            let prompt = format!("Delete channel {organization}/{channel} and all its reports?");
            if !yes && !interactive::confirm(&prompt)? {
                println!("{}", "Aborted".dimmed());
                return Ok(());
            }
            client.delete_channel(&target.id)?;
            println!(
                "{} Deleted channel {}/{}",
                "OK".green().bold(),
                organization.cyan(),
                channel.cyan()
            );
            Ok(())
        }
    }
}

fn print_channel_line(channel: &Channel) {
    let visibility = format!("{:?}", channel.visibility).to_lowercase();
    println!(
        "  {} {} ({})",
        channel.slug.cyan(),
        channel.display_name,
        visibility.dimmed()
    );
}

//! Theme commands

use colored::Colorize;

use super::print_json;
use crate::cli::ThemeAction;
use crate::context::Context;
use crate::error::{CliError, Result};

/// Run a `themes` subcommand
pub fn run_themes(context: &Context, action: ThemeAction) -> Result<()> {
    let client = context.client()?;
    match action {
        ThemeAction::List { json } => {
            let themes = client.list_themes()?;
            if json {
                return print_json(&themes);
            }
            for theme in &themes {
                match &theme.description {
                    Some(description) => println!("  {} {}", theme.name.cyan(), description.dimmed()),
                    None => println!("  {}", theme.name.cyan()),
                }
            }
            Ok(())
        }
        ThemeAction::Set {
            organization,
            theme,
        } => {
            let available = client.list_themes()?;
            if !available.iter().any(|t| t.name == theme) {
                let names: Vec<_> = available.iter().map(|t| t.name.as_str()).collect();
                return Err(CliError::user(format!(
                    "Unknown theme '{theme}'. Available: {}",
                    names.join(", ")
                )));
            }
            let organization = client.get_organization(&organization)?;
            client.set_organization_theme(&organization.id, &theme)?;
            println!(
                "{} Theme of {} set to {}",
                "OK".green().bold(),
                organization.slug.cyan(),
                theme.cyan()
            );
            Ok(())
        }
    }
}

//! login, logout and whoami

use colored::Colorize;
use kyso_api::{LoginRequest, Session};
use serde_json::json;

use crate::context::Context;
use crate::error::Result;
use crate::interactive::{self, LoginFlags};

/// Run the login command
pub fn run_login(context: &Context, flags: &LoginFlags) -> Result<()> {
    let previous = context.session().ok().flatten();
    let default_url = context.api_url(previous.as_ref());

    let answers = match flags.complete(&default_url) {
        Some(answers) => answers,
        None => interactive::prompt_login(flags, &default_url)?,
    };

    let client = context.anonymous_client(&answers.url)?;
    let token = client.login(&LoginRequest {
        provider: answers.provider,
        email: answers.username.clone(),
        password: answers.secret,
    })?;

    let mut session = Session::new(client.base_url(), token);
    session.username = session
        .claims()
        .map(|claims| claims.payload.username)
        .ok()
        .or(Some(answers.username));
    session.save(context.session_path())?;

    println!(
        "{} Logged in to {} as {}",
        "OK".green().bold(),
        client.base_url().cyan(),
        session.username.as_deref().unwrap_or_default().bold()
    );
    Ok(())
}

/// Run the logout command
pub fn run_logout(context: &Context) -> Result<()> {
    if Session::clear(context.session_path())? {
        println!("{} Logged out", "OK".green().bold());
    } else {
        println!("{}", "Not logged in".dimmed());
    }
    Ok(())
}

/// Run the whoami command
pub fn run_whoami(context: &Context, json: bool) -> Result<()> {
    let client = context.client()?;
    let user = client.current_user()?;

    if json {
        let output = json!({
            "api": client.base_url(),
            "user": user,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}:     {}", "User".dimmed(), user.username.bold());
    if !user.display_name.is_empty() {
        println!("{}:     {}", "Name".dimmed(), user.display_name);
    }
    if !user.email.is_empty() {
        println!("{}:    {}", "Email".dimmed(), user.email);
    }
    println!("{}:      {}", "API".dimmed(), client.base_url().cyan());
    Ok(())
}

use clap::ArgMatches;
use colored::*;

use crate::client::{RegistrationApi, RegistrationClient};
use crate::config::get_api_base;
use crate::error::IdeatexError;
use crate::formatting::members::print_team;
use crate::interactive::state::is_valid_team_code;
use crate::roster;
use crate::session::Session;

fn client_for(session: &Session) -> Result<RegistrationClient, Box<dyn std::error::Error>> {
    let token = session.require_token()?.to_string();
    Ok(RegistrationClient::new(get_api_base(), token))
}

pub async fn handle_members(_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let session = Session::load();
    let client = client_for(&session)?;

    let team_id = session.require_team()?;
    match roster::fetch_team(&client, team_id).await? {
        Some(team) => print_team(&team),
        None => println!("No team found."),
    }

    Ok(())
}

pub async fn handle_create(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::load();
    let client = client_for(&session)?;

    let name = matches
        .get_one::<String>("name")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| IdeatexError::InvalidInput("Team name is required".to_string()))?;

    let data = client.create_team(name).await?;
    session.set_team(Some(data.team.id.clone()), data.team.leader_id.clone())?;

    println!("{} {}", "✅".green(), "Team created successfully!".green().bold());
    println!("{}: {}", "Name".bold(), name);
    println!("{}: {}", "ID".bold(), data.team.id);
    println!(
        "\nYour team is pending payment. Run {} to activate it.",
        "ideatex pay".bright_magenta().bold()
    );

    Ok(())
}

pub async fn handle_join(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::load();
    let client = client_for(&session)?;

    let code = matches
        .get_one::<String>("code")
        .map(|s| s.to_uppercase())
        .ok_or_else(|| IdeatexError::InvalidInput("Team code is required".to_string()))?;

    if !is_valid_team_code(&code) {
        return Err(IdeatexError::InvalidInput(format!(
            "Team code must be {} characters",
            crate::constants::TEAM_CODE_LEN
        ))
        .into());
    }

    let data = client.join_team(&code).await?;
    session.set_team(Some(data.team.id), Some(data.user_id))?;

    println!("{} {}", "✅".green(), "Joined team successfully!".green().bold());
    println!(
        "Run {} to see your team.",
        "ideatex team members".bright_magenta().bold()
    );

    Ok(())
}

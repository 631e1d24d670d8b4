use clap::ArgMatches;
use colored::*;

use crate::client::{RegistrationApi, RegistrationClient};
use crate::config::get_api_base;
use crate::constants::PLACEHOLDER;
use crate::error::IdeatexError;
use crate::session::Session;

pub async fn handle_whoami(_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let session = Session::load();
    let token = session.require_token()?.to_string();
    let user_id = session
        .user_id()
        .ok_or_else(|| IdeatexError::ConfigError("No user id stored yet".to_string()))?
        .to_string();

    let client = RegistrationClient::new(get_api_base(), token);
    let user = client.user_profile(&user_id).await?;

    let field = |v: Option<String>| v.unwrap_or_else(|| PLACEHOLDER.to_string());
    println!(
        "Logged in as: {} ({})",
        field(user.name).bold(),
        field(user.email)
    );
    println!("{}: {}", "Roll no".bold(), field(user.roll_no));
    println!("{}: {}", "College".bold(), field(user.college));
    println!("{}: {}", "User ID".bold(), user_id);

    Ok(())
}

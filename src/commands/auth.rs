use clap::ArgMatches;
use colored::*;

use crate::client::{RegistrationApi, RegistrationClient};
use crate::config::{get_api_base, load_config, save_config};
use crate::formatting::utils::mask_token;

pub async fn handle_auth(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(token) = matches.get_one::<String>("token") {
        let mut config = load_config();
        config.token = Some(token.clone());
        save_config(&config)?;
        println!("Access token saved successfully!");

        // Probe the token when a user id is already stored.
        if let Some(user_id) = config.user_id {
            let client = RegistrationClient::new(get_api_base(), token.clone());
            match client.user_profile(&user_id).await {
                Ok(user) => println!(
                    "{} Connected as: {}",
                    "✅".green(),
                    user.name.unwrap_or_else(|| "Unknown".to_string())
                ),
                Err(e) => println!("{} Failed to authenticate: {}", "❌".red(), e),
            }
        }
    } else if matches.get_flag("show") {
        let config = load_config();
        match config.token {
            Some(token) => println!("Access token: {}", mask_token(&token)),
            None => println!("No access token configured"),
        }
    } else {
        println!("Usage: ideatex auth --token <TOKEN> or ideatex auth --show");
    }
    Ok(())
}

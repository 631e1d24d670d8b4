use clap::ArgMatches;

use crate::checkout::HostedCheckout;
use crate::client::RegistrationClient;
use crate::config::get_api_base;
use crate::interactive::{self, app::DashboardApp};
use crate::session::Session;

pub async fn handle_dashboard(_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let session = Session::load();
    // Unauthenticated sessions never reach the fetch; send them to auth.
    let token = session.require_token()?.to_string();

    let client = RegistrationClient::new(get_api_base(), token);
    let gateway = HostedCheckout::new();

    let mut app = DashboardApp::new(client, gateway, session)?;
    interactive::run(&mut app).await?;

    Ok(())
}

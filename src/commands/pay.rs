use std::io::{self, BufRead, Write};

use clap::ArgMatches;
use colored::*;

use crate::checkout::{CheckoutOutcome, HostedCheckout, Prefill};
use crate::client::RegistrationClient;
use crate::config::get_api_base;
use crate::constants::DEFAULT_AMOUNT_RUPEES;
use crate::error::IdeatexError;
use crate::models::CheckoutProof;
use crate::payment::{apply_confirmation, PaymentFlow};
use crate::roster;
use crate::session::Session;

/// One payment attempt from the terminal: create the order, open the hosted
/// checkout in the browser, read the proof triple back, verify server-side.
pub async fn handle_pay(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::load();
    let token = session.require_token()?.to_string();
    let client = RegistrationClient::new(get_api_base(), token);
    let gateway = HostedCheckout::new();

    let amount_rupees = matches
        .get_one::<String>("amount")
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_AMOUNT_RUPEES);

    // The dialog needs the team name; membership is the source of truth.
    let team_id = session.require_team()?.to_string();
    let team = roster::fetch_team(&client, &team_id)
        .await?
        .ok_or_else(|| IdeatexError::RequestFailed("No team found".to_string()))?;

    if !team.is_pending_payment {
        println!("{}", "This team's payment is already complete.".green());
        return Ok(());
    }

    let flow = PaymentFlow::new(&client, &gateway, &session);
    let pending = flow
        .begin(&team.name, amount_rupees * 100, Prefill::default())
        .await?;

    println!(
        "Order {} created for {} ({} paise).",
        pending.order.internal_id().bright_magenta(),
        team.name.bold(),
        pending.order.amount
    );
    println!("The checkout page has opened in your browser.");
    println!("Complete the payment there, then paste the proof below.\n");

    let outcome = read_proof_from_stdin()?;

    match flow.resolve(&pending, outcome).await? {
        Some(confirmation) => {
            apply_confirmation(&mut session, &confirmation)?;
            println!(
                "\n{} {}",
                "✅".green(),
                "Payment verified! Your team is active.".green().bold()
            );
            println!(
                "{}: {}",
                "Transaction".bold(),
                confirmation.transaction_id.bright_magenta()
            );
        }
        None => {
            println!("{}", "Checkout abandoned; nothing was charged.".yellow());
        }
    }

    Ok(())
}

fn read_proof_from_stdin() -> Result<CheckoutOutcome, Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut read_field = |label: &str| -> Result<String, Box<dyn std::error::Error>> {
        print!("{}: ", label);
        io::stdout().flush()?;
        Ok(lines
            .next()
            .transpose()?
            .unwrap_or_default()
            .trim()
            .to_string())
    };

    let payment_id = read_field("Payment id (empty to cancel)")?;
    if payment_id.is_empty() {
        return Ok(CheckoutOutcome::Cancelled);
    }
    let order_id = read_field("Order id")?;
    let signature = read_field("Signature")?;

    Ok(CheckoutOutcome::Completed(CheckoutProof {
        razorpay_payment_id: payment_id,
        razorpay_order_id: order_id,
        razorpay_signature: signature,
    }))
}

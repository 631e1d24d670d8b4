use std::process;

use clap::{Arg, Command};

use ideatex_cli::commands;
use ideatex_cli::logging;

#[tokio::main]
async fn main() {
    let _ = logging::init_logging();

    let app = Command::new("ideatex")
        .about("IdeateX CLI - team registration and payment from the command line")
        .version("1.0.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("auth")
                .about("Store the access token issued at login")
                .arg(
                    Arg::new("token")
                        .long("token")
                        .value_name("TOKEN")
                        .help("Set your IdeateX access token")
                        .required(false),
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show the stored access token")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("dashboard").about("Open the interactive team dashboard"),
        )
        .subcommand(
            Command::new("team")
                .about("Team operations")
                .subcommand_required(true)
                .subcommand(Command::new("members").about("Show your team and its members"))
                .subcommand(
                    Command::new("create")
                        .about("Create a new team (payment follows)")
                        .arg(
                            Arg::new("name")
                                .value_name("NAME")
                                .help("Team name")
                                .required(true)
                                .index(1),
                        ),
                )
                .subcommand(
                    Command::new("join")
                        .about("Join a team with its 6-character code")
                        .arg(
                            Arg::new("code")
                                .value_name("CODE")
                                .help("Team code")
                                .required(true)
                                .index(1),
                        ),
                ),
        )
        .subcommand(
            Command::new("pay")
                .about("Complete the registration payment for your team")
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .value_name("RUPEES")
                        .help("Override the registration fee (in rupees)"),
                ),
        )
        .subcommand(Command::new("faq").about("Frequently asked questions"))
        .subcommand(Command::new("whoami").about("Show the stored user's profile"));

    let matches = app.get_matches();

    let result = match matches.subcommand() {
        Some(("auth", sub_matches)) => commands::auth::handle_auth(sub_matches).await,
        Some(("dashboard", sub_matches)) => {
            commands::dashboard::handle_dashboard(sub_matches).await
        }
        Some(("team", sub_matches)) => match sub_matches.subcommand() {
            Some(("members", m)) => commands::team::handle_members(m).await,
            Some(("create", m)) => commands::team::handle_create(m).await,
            Some(("join", m)) => commands::team::handle_join(m).await,
            _ => {
                eprintln!("Unknown team subcommand. Use 'ideatex team --help' for options.");
                process::exit(1);
            }
        },
        Some(("pay", sub_matches)) => commands::pay::handle_pay(sub_matches).await,
        Some(("faq", sub_matches)) => commands::faq::handle_faq(sub_matches).await,
        Some(("whoami", sub_matches)) => commands::whoami::handle_whoami(sub_matches).await,
        _ => {
            eprintln!("Unknown command. Use 'ideatex --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

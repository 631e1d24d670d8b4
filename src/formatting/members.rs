use colored::*;

use crate::formatting::utils::truncate;
use crate::models::Team;

pub fn print_team(team: &Team) {
    println!("\n{}", "─".repeat(80).bright_black());
    println!(
        "{} {} - {}",
        team.name.bold(),
        "│".bright_black(),
        team.code.bright_magenta().bold()
    );
    println!("{}", "─".repeat(80).bright_black());

    if team.is_pending_payment {
        println!(
            "{} {}",
            "⚠".yellow(),
            "Payment pending - complete payment to activate this team".yellow()
        );
    }

    println!(
        "{}: {} ({})",
        "Leader".bold(),
        team.leader.name,
        team.leader.library_id.bright_black()
    );

    print_members(team);
}

pub fn print_members(team: &Team) {
    println!(
        "\n{:<22} {:<10} {:<16} {:<26} {:<12}",
        "Name".bold(),
        "Role".bold(),
        "Contact".bold(),
        "Email".bold(),
        "Roll No".bold()
    );
    println!("{}", "-".repeat(90));

    for member in &team.members {
        let role = if member.role == "LEADER" {
            member.role.bright_magenta().bold()
        } else {
            member.role.normal()
        };
        println!(
            "{:<22} {:<10} {:<16} {:<26} {:<12}",
            truncate(&member.name, 20),
            role,
            member.contact,
            truncate(&member.email, 24),
            member.roll_no
        );
    }
}

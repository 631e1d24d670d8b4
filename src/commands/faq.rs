use clap::ArgMatches;
use colored::*;

use crate::faq::FAQ_ITEMS;

pub async fn handle_faq(_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    println!("\n{}", "ANY QUESTIONS?".bold());
    println!("{}", "═".repeat(40).bright_black());

    for item in FAQ_ITEMS {
        println!("\n{} {}", "▸".bright_magenta(), item.question.bold());
        println!("  {}", item.answer.bright_black());
    }

    Ok(())
}

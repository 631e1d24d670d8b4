use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.ideatex.e-cell.in";
pub const CONFIG_FILE: &str = ".ideatex-cli-config.json";

pub const TOKEN_ENV: &str = "IDEATEX_TOKEN";
pub const API_BASE_ENV: &str = "IDEATEX_API_BASE";

// Hosted checkout script; fetched once per process before any order is created.
pub const CHECKOUT_SCRIPT_URL: &str = "https://checkout.razorpay.com/v1/checkout.js";
pub const CHECKOUT_DISPLAY_NAME: &str = "IdeateX 2025";
pub const CHECKOUT_THEME_COLOR: &str = "#9700d1";

/// Registration fee in rupees. Converted to paise at order-creation time.
pub const DEFAULT_AMOUNT_RUPEES: u64 = 100;

pub const TEAM_CODE_LEN: usize = 6;

/// Delay before the dashboard reloads itself after a successful join.
pub const JOIN_RELOAD_DELAY: Duration = Duration::from_secs(2);

/// Sentinel for profile fields the enrichment fetch could not supply.
pub const PLACEHOLDER: &str = "N/A";

pub const TICK_RATE_MS: u64 = 250;

pub fn checkout_description(team_name: &str) -> String {
    format!("Team registration - {}", team_name)
}

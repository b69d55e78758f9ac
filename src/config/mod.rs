use anyhow::Result;
use dotenvy::dotenv;
use serde::Deserialize;

/// Configuration for the application.
///
/// Loaded from `PM_`-prefixed environment variables; every field has a
/// default, so an empty environment works. None of these settings alter
/// store or report semantics — they only shape the console output and the
/// payment terms stamped on new drafts.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Display currency for amounts
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Days between invoice date and due date on generated drafts
    #[serde(default = "default_payment_terms_days")]
    pub payment_terms_days: u32,
}

fn default_currency() -> String {
    "CHF".to_string()
}

fn default_payment_terms_days() -> u32 {
    30
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// This function will:
    /// 1. Load variables from .env file if it exists
    /// 2. Deserialize environment variables into Config struct
    pub fn load() -> Result<Self> {
        // Load .env file if it exists
        dotenv().ok();

        // Parse environment variables into Config struct
        let config = envy::prefixed("PM_").from_env::<Config>()?;

        Ok(config)
    }
}

/// Initialize environment variables and load configuration
pub fn init() -> Result<Config> {
    // Ensure .env file is loaded
    dotenv().ok();

    // Load the configuration
    let config = Config::load()?;

    Ok(config)
}

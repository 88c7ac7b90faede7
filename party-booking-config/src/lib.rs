use core::fmt::{Debug, Display};

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::Deserialize;

pub const CONFIG_FILE: &str = "party-booking.toml";
pub const ENV_PREFIX: &str = "PARTY_BOOKING_";

/// Variable names the service understood before they were namespaced.
const LEGACY_ENV: [&str; 3] = ["PORT", "DATABASE_URL", "ADMIN_SECRET"];

#[derive(Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Bookings are kept in memory when unset.
    #[serde(default)]
    pub database_url: Option<String>,
    /// Listing bookings is refused with a server error when unset.
    #[serde(default)]
    pub admin_secret: Option<String>,
}

const fn default_port() -> u16 {
    8080
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            database_url: None,
            admin_secret: None,
        }
    }
}

#[derive(thiserror::Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Extract(#[from] figment::Error),
}

impl Debug for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

#[must_use]
pub fn figment() -> Figment {
    Figment::new()
        .merge(Toml::file(CONFIG_FILE))
        .merge(Env::raw().only(&LEGACY_ENV))
        .merge(Env::prefixed(ENV_PREFIX))
}

pub fn get_config() -> Result<Config, ConfigError> {
    Ok(figment().extract()?)
}

// src/config.rs
use std::env;
use std::time::Duration;
use thiserror::Error;
use crate::domain::clock::{AUCTION_DURATION_SECONDS, TICK};

pub const AUCTION_PORT: u16 = 8080;
pub const BILLING_PORT: u16 = 8081;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub auction_seconds: u32,
    pub tick: Duration,
}

impl Settings {
    pub fn with_port(port: u16) -> Self {
        Settings {
            host: "127.0.0.1".to_string(),
            port,
            auction_seconds: AUCTION_DURATION_SECONDS,
            tick: TICK,
        }
    }

    /// Defaults, overridden by `DESK_HOST`, `DESK_PORT` and `AUCTION_SECONDS`.
    pub fn from_env(default_port: u16) -> Result<Self, SettingsError> {
        Self::from_lookup(default_port, |name| env::var(name).ok())
    }

    pub fn from_lookup<F>(default_port: u16, lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::with_port(default_port);

        if let Some(host) = lookup("DESK_HOST") {
            settings.host = host;
        }
        if let Some(port) = lookup("DESK_PORT") {
            settings.port = parse_value("DESK_PORT", port)?;
        }
        if let Some(seconds) = lookup("AUCTION_SECONDS") {
            settings.auction_seconds = parse_value("AUCTION_SECONDS", seconds)?;
        }

        Ok(settings)
    }
}

fn parse_value<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, SettingsError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| SettingsError::InvalidValue { name, value })
}

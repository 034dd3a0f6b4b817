use std::collections::HashMap;

use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    pub server_host: String,
    pub server_port: u16,

    pub database_url: Option<String>,
    pub mysql_host: Option<String>,
    pub mysql_user: Option<String>,
    pub mysql_password: Option<String>,
    pub mysql_database: Option<String>,
    pub mysql_port: u16,
    pub mysql_pool_size: u32,

    pub cron_secret: Option<String>,
    /// Kept as raw text, validated by `ReportWindow`.
    pub report_window_hours: Option<String>,

    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
    pub telegram_api_url: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_env(None)
    }

    /// Builds settings from the process environment, or from `vars` in place of it.
    pub fn from_env(vars: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        let cfg = Config::builder()
            .set_default("server_host", "0.0.0.0")?
            .set_default("server_port", 8080)?
            .set_default("mysql_port", 3306)?
            .set_default("mysql_pool_size", 2)?
            .set_default("telegram_api_url", DEFAULT_TELEGRAM_API_URL)?
            .add_source(Environment::default()
                .ignore_empty(true)
                .source(vars)
            )
            .build()?;

        cfg.try_deserialize()
    }

    /// The shared secret, if one is configured. An empty secret disables the check.
    pub fn cron_secret(&self) -> Option<&str> {
        self.cron_secret.as_deref().filter(|s| !s.is_empty())
    }

    pub fn bot_token(&self) -> Option<&str> {
        self.bot_token.as_deref().filter(|s| !s.is_empty())
    }

    pub fn chat_id(&self) -> Option<&str> {
        self.chat_id.as_deref().filter(|s| !s.is_empty())
    }
}

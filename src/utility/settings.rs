
use thiserror::Error;

use std::env;


const DEFAULT_PREFIX: &str = "pb/";
const DEFAULT_DATABASE: &str = "prebans.db";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
    #[error("environment variable {0} must not be empty")]
    EmptyVar(&'static str),
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub token: String,
    pub database_url: String,
    pub prefix: String,
}

impl Settings {

    /// Reads the bot settings from the environment, loading a `.env` file first if one exists.
    pub fn from_env() -> Result<Settings, ConfigError> {
        let _ = dotenvy::dotenv();
        Settings::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Settings, ConfigError> {
        let token = lookup("DISCORD_TOKEN")
            .ok_or(ConfigError::MissingVar("DISCORD_TOKEN"))?;
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyVar("DISCORD_TOKEN"));
        }

        let prefix = lookup("COMMAND_PREFIX")
            .unwrap_or_else(|| DEFAULT_PREFIX.to_string());
        if prefix.trim().is_empty() {
            return Err(ConfigError::EmptyVar("COMMAND_PREFIX"));
        }

        let database_url = lookup("DATABASE_URL")
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        Ok(Settings {
            token: token.trim().to_string(),
            database_url,
            prefix: prefix.trim().to_string(),
        })
    }

    /// Path of the SQLite file, with any `sqlite:` scheme removed.
    pub fn database_path(&self) -> &str {
        let url = self.database_url.as_str();
        url.strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("sqlite:"))
            .unwrap_or(url)
    }

}

use std::time::Duration;

use anyhow::{Context, Result, bail};
use sqlx::postgres::PgConnectOptions;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database: PgConnectOptions,
    pub max_connections: u32,
    pub query_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    ///
    /// `DATABASE_URL` wins over the individual `DB_*` parts when both are set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .context("Cannot load PORT env variable")?
            .parse()
            .context("PORT must be a number")?;

        let database = match lookup("DATABASE_URL") {
            Some(url) => url
                .parse::<PgConnectOptions>()
                .context("DATABASE_URL is not a valid PostgreSQL URL")?,
            None => Self::database_from_parts(&lookup)?,
        };

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(value) => value
                .parse()
                .context("DB_MAX_CONNECTIONS must be a number")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let query_timeout_secs = match lookup("QUERY_TIMEOUT_SECS") {
            Some(value) => value
                .parse()
                .context("QUERY_TIMEOUT_SECS must be a number")?,
            None => DEFAULT_QUERY_TIMEOUT_SECS,
        };
        if query_timeout_secs == 0 {
            bail!("QUERY_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database,
            max_connections,
            query_timeout: Duration::from_secs(query_timeout_secs),
        })
    }

    fn database_from_parts<F>(lookup: &F) -> Result<PgConnectOptions>
    where
        F: Fn(&str) -> Option<String>,
    {
        let user = lookup("DB_USER").context("Cannot load DATABASE_URL or DB_USER env variable")?;
        let name = lookup("DB_NAME").context("Cannot load DB_NAME env variable")?;
        let host = lookup("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string());
        let port = match lookup("DB_PORT") {
            Some(value) => value.parse().context("DB_PORT must be a number")?,
            None => DEFAULT_DB_PORT,
        };

        let mut options = PgConnectOptions::new()
            .host(&host)
            .port(port)
            .username(&user)
            .database(&name);
        if let Some(password) = lookup("DB_PASSWORD") {
            options = options.password(&password);
        }

        Ok(options)
    }

    /// `host:port/database`, safe to log
    pub fn database_location(&self) -> String {
        format!(
            "{}:{}/{}",
            self.database.get_host(),
            self.database.get_port(),
            self.database.get_database().unwrap_or("")
        )
    }
}

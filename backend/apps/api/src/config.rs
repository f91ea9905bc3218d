//! Server Configuration
//!
//! Everything the binary reads from the environment (after `.env`).

use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::JwtConfig;

const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt: JwtConfig,
    pub port: u16,
    pub frontend_origins: Vec<String>,
    pub seed_demo_users: bool,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let jwt = match lookup("JWT_SECRET") {
            Some(secret) => JwtConfig::new(secret),
            None if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using a random development secret");
                JwtConfig::development()
            }
            None => bail!("JWT_SECRET must be set in production"),
        };

        let defaults = JwtConfig::default();
        let jwt = jwt
            .with_issuer(lookup("JWT_ISSUER").unwrap_or(defaults.issuer))
            .with_audience(lookup("JWT_AUDIENCE").unwrap_or(defaults.audience))
            .with_expiration(Duration::from_secs(parse_or(
                &lookup,
                "JWT_EXPIRY_SECS",
                defaults.expiration.as_secs(),
            )?))
            .with_leeway(Duration::from_secs(parse_or(
                &lookup,
                "JWT_LEEWAY_SECS",
                defaults.leeway.as_secs(),
            )?));

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        Ok(Self {
            database_url,
            database_max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
            jwt,
            port: parse_or(&lookup, "API_PORT", 8080)?,
            frontend_origins,
            seed_demo_users: parse_or(&lookup, "SEED_DEMO_USERS", cfg!(debug_assertions))?,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        None => Ok(default),
    }
}

use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub catalog_path: String,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    /// Postgres like store when set, in-memory otherwise
    pub database_url: Option<String>,
    pub anonymous_sign_ins_enabled: bool,
    /// Per-IP rate limit on the toggle function, off when unset
    pub rate_limit_per_second: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            catalog_path: env::var("CATALOG_PATH")
                .unwrap_or_else(|_| "data/resources.json".to_string()),
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            jwt_issuer: env::var("JWT_ISSUER")
                .unwrap_or_else(|_| "frontend-resources".to_string()),
            database_url: env::var("DATABASE_URL").ok(),
            anonymous_sign_ins_enabled: parse_flag("ANONYMOUS_SIGN_INS_ENABLED", true)?,
            rate_limit_per_second: env::var("RATE_LIMIT_PER_SECOND")
                .ok()
                .map(|v| v.parse())
                .transpose()
                .context("RATE_LIMIT_PER_SECOND must be a valid number")?,
        })
    }
}

/// Configuration of the page-side like client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub rollback_on_failure: bool,
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let _ = dotenv();

        Ok(Self {
            supabase_url: env::var("SUPABASE_URL").context("SUPABASE_URL must be set")?,
            supabase_anon_key: env::var("SUPABASE_ANON_KEY")
                .context("SUPABASE_ANON_KEY must be set")?,
            rollback_on_failure: parse_flag("LIKE_ROLLBACK_ON_FAILURE", false)?,
        })
    }
}

/// Read a boolean flag; accepts true/false/1/0 (case-insensitive)
fn parse_flag(name: &str, default: bool) -> Result<bool> {
    match env::var(name) {
        Ok(value) => parse_bool(&value).with_context(|| format!("{} must be true or false", name)),
        Err(_) => Ok(default),
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(anyhow::anyhow!("invalid boolean: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("TRUE").unwrap());
        assert!(parse_bool(" 1 ").unwrap());
        assert!(!parse_bool("false").unwrap());
        assert!(!parse_bool("no").unwrap());
        assert!(parse_bool("maybe").is_err());
    }
}

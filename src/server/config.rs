use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_DASHBOARD_CACHE_TTL_SECS: u64 = 30;
const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Range bcrypt accepts for its cost factor.
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Browser origin allowed to make credentialed cross-origin requests.
    pub allowed_origin: Option<String>,

    pub bcrypt_cost: u32,
    pub dashboard_cache_ttl_secs: u64,

    /// Username of the admin account created on first start.
    pub admin_username: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: validate_database_url(
                std::env::var("DATABASE_URL")
                    .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            )?,
            bind_address: optional_var("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            allowed_origin: optional_var("ALLOWED_ORIGIN"),
            bcrypt_cost: validate_bcrypt_cost(
                parse_var("BCRYPT_COST")?.unwrap_or(bcrypt::DEFAULT_COST),
            )?,
            dashboard_cache_ttl_secs: parse_var("DASHBOARD_CACHE_TTL_SECS")?
                .unwrap_or(DEFAULT_DASHBOARD_CACHE_TTL_SECS),
            admin_username: optional_var("ADMIN_USERNAME")
                .unwrap_or_else(|| DEFAULT_ADMIN_USERNAME.to_string()),
        })
    }
}

/// Reads a variable, treating unset and blank the same.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    let Some(value) = optional_var(name) else {
        return Ok(None);
    };

    value
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        })
}

/// Only PostgreSQL URLs are accepted; the session store needs a Postgres pool.
fn validate_database_url(url: String) -> Result<String, ConfigError> {
    if url.starts_with("postgres://") || url.starts_with("postgresql://") {
        Ok(url)
    } else {
        Err(ConfigError::InvalidEnvVar {
            name: "DATABASE_URL".to_string(),
            value: url,
        })
    }
}

fn validate_bcrypt_cost(cost: u32) -> Result<u32, ConfigError> {
    if BCRYPT_COST_RANGE.contains(&cost) {
        Ok(cost)
    } else {
        Err(ConfigError::InvalidEnvVar {
            name: "BCRYPT_COST".to_string(),
            value: cost.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_postgres_urls() {
        assert!(validate_database_url("postgres://localhost/mentorship".to_string()).is_ok());
        assert!(validate_database_url("postgresql://u:p@db:5432/m".to_string()).is_ok());

        let err = validate_database_url("sqlite://mentorship.db".to_string()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnvVar { name, value }
                if name == "DATABASE_URL" && value == "sqlite://mentorship.db"
        ));
    }

    #[test]
    fn bcrypt_cost_must_be_in_range() {
        assert_eq!(validate_bcrypt_cost(4).unwrap(), 4);
        assert_eq!(validate_bcrypt_cost(bcrypt::DEFAULT_COST).unwrap(), bcrypt::DEFAULT_COST);
        assert_eq!(validate_bcrypt_cost(31).unwrap(), 31);

        for cost in [0, 3, 32] {
            assert!(matches!(
                validate_bcrypt_cost(cost),
                Err(ConfigError::InvalidEnvVar { name, .. }) if name == "BCRYPT_COST"
            ));
        }
    }
}

use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    /// Argon2 memory cost in KiB.
    pub password_memory_cost: u32,
    /// Argon2 iteration count.
    pub password_iterations: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parse_env_or("PORT", DEFAULT_PORT)?,
            password_memory_cost: parse_env_or(
                "PASSWORD_MEMORY_COST",
                argon2::Params::DEFAULT_M_COST,
            )?,
            password_iterations: parse_env_or("PASSWORD_ITERATIONS", argon2::Params::DEFAULT_T_COST)?,
        })
    }
}

/// Reads an optional environment variable, falling back to `default` when unset.
fn parse_env_or<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
        Err(_) => Ok(default),
    }
}

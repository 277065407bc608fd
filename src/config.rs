use std::env;

use crate::error::{PgBindError, Result};

/// Environment variable holding the connection string.
pub const URL_VAR: &str = "PGBIND_DATABASE_URL";
/// Fallback connection string variable.
pub const FALLBACK_URL_VAR: &str = "DATABASE_URL";
/// Environment variable toggling strict parameter checking.
pub const STRICT_VAR: &str = "PGBIND_STRICT_PARAMS";

/// Settings used by [`PgBindClient::connect_with`](crate::PgBindClient::connect_with).
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub url: String,
    /// Reject parameters that a template never references.
    pub strict_params: bool,
}

impl ClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            strict_params: false,
        }
    }

    pub fn strict_params(mut self, strict: bool) -> Self {
        self.strict_params = strict;
        self
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let url = lookup(URL_VAR)
            .or_else(|| lookup(FALLBACK_URL_VAR))
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                PgBindError::Config(format!("neither {} nor {} is set", URL_VAR, FALLBACK_URL_VAR))
            })?;
        let strict_params = match lookup(STRICT_VAR) {
            None => false,
            Some(flag) => parse_flag(&flag).ok_or_else(|| {
                PgBindError::Config(format!("{} must be true or false, got {:?}", STRICT_VAR, flag))
            })?,
        };
        Ok(Self { url, strict_params })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

use crate::server::{
    error::{config::ConfigError, AppError},
    validation::{CouponRules, DEFAULT_NAME_MAX_LENGTH},
};

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

/// Which coupon repository backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Process-local map, lost on restart.
    Memory,
    /// Relational database reached through `DATABASE_URL`.
    Database,
}

impl StoreKind {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "database" => Ok(Self::Database),
            _ => Err(ConfigError::InvalidEnvVar {
                name: "COUPON_STORE".to_string(),
                value: value.to_string(),
                reason: "expected 'memory' or 'database'".to_string(),
            }),
        }
    }
}

pub struct Config {
    pub store: StoreKind,
    /// Required when `store` is [`StoreKind::Database`].
    pub database_url: Option<String>,
    pub bind_address: String,
    pub coupon_rules: CouponRules,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration with defaults applied to unset variables
    /// - `Err(AppError::ConfigErr)` - A variable is missing or cannot be parsed
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let store = match lookup("COUPON_STORE") {
            Some(value) => StoreKind::parse(&value)?,
            None => StoreKind::Database,
        };

        let database_url = lookup("DATABASE_URL");
        if store == StoreKind::Database && database_url.is_none() {
            return Err(ConfigError::MissingEnvVar("DATABASE_URL".to_string()).into());
        }

        let name_max_length = match lookup("COUPON_NAME_MAX_LENGTH") {
            Some(value) => parse_name_max_length(&value)?,
            None => DEFAULT_NAME_MAX_LENGTH,
        };

        Ok(Self {
            store,
            database_url,
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            coupon_rules: CouponRules {
                name_max_length,
                ..CouponRules::default()
            },
        })
    }
}

fn parse_name_max_length(value: &str) -> Result<usize, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidEnvVar {
        name: "COUPON_NAME_MAX_LENGTH".to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    match value.trim().parse::<usize>() {
        Ok(0) => Err(invalid("must be at least 1")),
        Ok(length) => Ok(length),
        Err(_) => Err(invalid("expected a positive integer")),
    }
}

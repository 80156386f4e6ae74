use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use validator::Validate;

const DEFAULT_DATABASE_URL: &str = "sqlite://hr_manager.db";
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// What happens to child rows when their parent department or employee is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePolicy {
    #[default]
    Restrict,
    Cascade,
}

impl DeletePolicy {
    pub fn as_sql(&self) -> &'static str {
        match self {
            DeletePolicy::Restrict => "RESTRICT",
            DeletePolicy::Cascade => "CASCADE",
        }
    }
}

impl FromStr for DeletePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "restrict" => Ok(DeletePolicy::Restrict),
            "cascade" => Ok(DeletePolicy::Cascade),
            other => Err(ConfigError::Invalid {
                key: "DELETE_POLICY",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for DeletePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeletePolicy::Restrict => write!(f, "restrict"),
            DeletePolicy::Cascade => write!(f, "cascade"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}")]
    Invalid { key: &'static str, value: String },
    #[error("invalid settings: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

#[derive(Debug, Clone, Validate)]
pub struct Settings {
    #[validate(length(min = 1))]
    pub database_url: String,
    #[validate(length(min = 1))]
    pub bind_address: String,
    #[validate(range(min = 1, max = 64))]
    pub max_connections: u32,
    pub delete_policy: DeletePolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            delete_policy: DeletePolicy::default(),
        }
    }
}

impl Settings {
    /// Reads settings from the process environment. Call `dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|_| ConfigError::Invalid {
                key: "DATABASE_MAX_CONNECTIONS",
                value: raw.clone(),
            })?,
            None => defaults.max_connections,
        };

        let delete_policy = match lookup("DELETE_POLICY") {
            Some(raw) => raw.parse::<DeletePolicy>()?,
            None => defaults.delete_policy,
        };

        let settings = Settings {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            bind_address: lookup("BIND_ADDRESS").unwrap_or(defaults.bind_address),
            max_connections,
            delete_policy,
        };

        settings.validate()?;
        Ok(settings)
    }

    pub fn in_memory(delete_policy: DeletePolicy) -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            delete_policy,
            ..Settings::default()
        }
    }
}

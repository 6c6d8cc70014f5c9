use std::env;
use thiserror::Error;

pub const USER_POOL_ID_VAR: &str = "USER_POOL_ID";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
}

/// Settings for the users lambda, resolved once at cold start
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryConfig {
    pub user_pool_id: String,
}

impl DirectoryConfig {
    pub fn new(user_pool_id: impl Into<String>) -> Self {
        Self {
            user_pool_id: user_pool_id.into(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let user_pool_id = lookup(USER_POOL_ID_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::Missing(USER_POOL_ID_VAR))?;
        Ok(Self::new(user_pool_id))
    }
}

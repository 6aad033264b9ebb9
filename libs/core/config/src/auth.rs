use crate::{env_or_default, ConfigError, FromEnv};

/// Development fallback for the shared API secret.
///
/// Matches the default the service has always shipped with; deployments
/// are expected to override it via the `API_KEY` environment variable.
pub const DEFAULT_API_KEY: &str = "secret-key-123";

/// Shared-secret configuration for the API-key gate on mutating routes.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    /// The secret value callers must supply in the `x-api-key` header.
    pub api_key: String,
}

impl FromEnv for AuthConfig {
    /// Reads `API_KEY`, falling back to the development default.
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: env_or_default("API_KEY", DEFAULT_API_KEY),
        })
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_config_from_env_with_value() {
        temp_env::with_var("API_KEY", Some("super-secret"), || {
            let config = AuthConfig::from_env().unwrap();
            assert_eq!(config.api_key, "super-secret");
        });
    }

    #[test]
    fn test_auth_config_from_env_defaults() {
        temp_env::with_var_unset("API_KEY", || {
            let config = AuthConfig::from_env().unwrap();
            assert_eq!(config.api_key, DEFAULT_API_KEY);
        });
    }
}

//! Configuration for the Catalog API

use core_config::{
    app_info, server::ServerConfig, AppInfo, AuthConfig, ConfigError, Environment, FromEnv,
};

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            app: app_info!(),
            server: ServerConfig::from_env()?,
            auth: AuthConfig::from_env()?,
            environment: Environment::from_env(),
        })
    }
}

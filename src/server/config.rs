//! Server configuration loaded from the environment.

use crate::server::error::config::ConfigError;

/// Settings required to hand visitors over to the authentication provider
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the hosted authentication provider, without a trailing slash
    pub auth_provider_url: String,
    /// Public URL of this application, used as the provider's redirect target
    pub app_url: String,
}

impl Config {
    /// Read the configuration from `AUTH_PROVIDER_URL` and `APP_URL`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|var| std::env::var(var).ok())
    }

    /// Build the configuration from any variable source
    pub fn from_vars<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            auth_provider_url: read_url(&get, "AUTH_PROVIDER_URL")?,
            app_url: read_url(&get, "APP_URL")?,
        })
    }
}

fn read_url<F>(get: &F, var: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = get(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))?;
    let value = value.trim().trim_end_matches('/');

    if !(value.starts_with("https://") || value.starts_with("http://")) {
        return Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "expected an http(s) URL".to_string(),
        });
    }

    Ok(value.to_string())
}

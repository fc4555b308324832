use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SITE_DIR: &str = "frontend/dist";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a number between 1 and 65535, got {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Anything other than `development` is treated as production.
    fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("development") => Environment::Development,
            _ => Environment::Production,
        }
    }

    pub fn default_log_filter(self) -> &'static str {
        match self {
            Environment::Development => "debug,hyper=info",
            Environment::Production => "info,qiyoga_site=debug",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    /// Trunk output directory holding `index.html` and the wasm bundle.
    pub site_dir: PathBuf,
    pub environment: Environment,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT").filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) if port > 0 => port,
                _ => return Err(ConfigError::InvalidPort(raw)),
            },
            None => DEFAULT_PORT,
        };
        let site_dir = lookup("SITE_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SITE_DIR));
        let environment = Environment::parse(lookup("ENVIRONMENT").as_deref());

        Ok(Self {
            port,
            site_dir,
            environment,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SiteConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.site_dir, PathBuf::from(DEFAULT_SITE_DIR));
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("PORT", "3100"),
            ("SITE_DIR", "/srv/site"),
            ("ENVIRONMENT", "development"),
        ])
        .unwrap();
        assert_eq!(config.port, 3100);
        assert_eq!(config.site_dir, PathBuf::from("/srv/site"));
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    fn rejects_bad_ports() {
        assert_eq!(
            config_from(&[("PORT", "http")]),
            Err(ConfigError::InvalidPort("http".to_string()))
        );
        assert_eq!(
            config_from(&[("PORT", "0")]),
            Err(ConfigError::InvalidPort("0".to_string()))
        );
        assert!(config_from(&[("PORT", "70000")]).is_err());
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(&[("PORT", " "), ("SITE_DIR", "")]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.site_dir, PathBuf::from(DEFAULT_SITE_DIR));
    }
}

use config::{Config, ConfigError, Environment, File};
use dotenvy::dotenv;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database_url: String,
    pub auth: AuthSettings,
    /// Log file written next to console output.
    pub log_path: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    pub jwt_secret: String,
    pub jwt_expire_secs: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database_url: "postgres://localhost/chorus".to_string(),
            auth: AuthSettings::default(),
            log_path: "app.log".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            jwt_secret: "change-me".to_string(),
            jwt_expire_secs: 24 * 3600,
        }
    }
}

impl AppConfig {
    /// Loads `config/app.toml` (optional) and overrides it with
    /// `CHORUS_`-prefixed environment variables, e.g.
    /// `CHORUS_AUTH__JWT_SECRET` or `CHORUS_DATABASE_URL`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv().ok();
        Config::builder()
            .add_source(File::with_name("config/app").required(false))
            .add_source(Environment::with_prefix("CHORUS").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn jwt_secret(&self) -> &str {
        &self.auth.jwt_secret
    }

    pub fn jwt_expire_secs(&self) -> i64 {
        self.auth.jwt_expire_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.auth.jwt_expire_secs, 24 * 3600);
        assert!(!cfg.database_url.is_empty());
    }
}

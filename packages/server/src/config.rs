use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Secret shipped for local development. Startup warns when it is still in use.
pub const DEV_SECRET_KEY: &str = "dev-secret-key-change-me";

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Secret used to sign the flash cookie.
    pub secret_key: String,
    /// Name of the cookie carrying deferred messages between requests.
    pub flash_cookie: String,
}

impl SessionConfig {
    pub fn uses_dev_secret(&self) -> bool {
        self.secret_key == DEV_SECRET_KEY
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("session.secret_key", DEV_SECRET_KEY)?
            .set_default("session.flash_cookie", "flash")?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., FINPLAN__SESSION__SECRET_KEY)
            .add_source(Environment::with_prefix("FINPLAN").separator("__"))
            .build()?;

        let config: Self = s.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session.secret_key.trim().is_empty() {
            return Err(ConfigError::Message(
                "session.secret_key must not be empty".into(),
            ));
        }
        if self.session.flash_cookie.trim().is_empty() {
            return Err(ConfigError::Message(
                "session.flash_cookie must not be empty".into(),
            ));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

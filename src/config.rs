use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub mail: MailConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MailConfig {
    #[serde(default)]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default)]
    pub recipient: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_host: String::new(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            recipient: String::new(),
        }
    }
}

impl MailConfig {
    /// True once every value needed to open an authenticated SMTP session
    /// and address the notification is present.
    pub fn is_configured(&self) -> bool {
        !self.smtp_host.is_empty()
            && !self.smtp_username.is_empty()
            && !self.smtp_password.is_empty()
            && !self.recipient.is_empty()
    }
}

fn default_smtp_port() -> u16 {
    465
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    /// Trimmed full-field-list validation when true, simple truthiness
    /// checks when false.
    #[serde(default = "default_strict")]
    pub strict: bool,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            strict: default_strict(),
        }
    }
}

fn default_strict() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (QUOTERELAY__MAIL__SMTP_HOST, etc.)
    /// 2. Legacy unprefixed variables (MAIL_HOST, TO_EMAIL, PORT, ...)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // Set defaults
        builder = builder
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5050)?;

        // Load config file if path provided or CONFIG_PATH env var set
        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Try to load config file (optional - ignore if not found)
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        // Override with environment variables (QUOTERELAY__MAIL__SMTP_HOST, etc.)
        builder = builder.add_source(
            Environment::with_prefix("QUOTERELAY")
                .separator("__")
                .try_parsing(true),
        );

        // Also support the legacy environment variables the original
        // deployment was provisioned with
        if let Ok(mail_host) = env::var("MAIL_HOST") {
            builder = builder.set_override("mail.smtp_host", mail_host)?;
        }
        if let Ok(mail_port) = env::var("MAIL_PORT") {
            builder = builder.set_override("mail.smtp_port", mail_port)?;
        }
        if let Ok(mail_user) = env::var("MAIL_USER") {
            builder = builder.set_override("mail.smtp_username", mail_user)?;
        }
        if let Ok(mail_pass) = env::var("MAIL_PASS") {
            builder = builder.set_override("mail.smtp_password", mail_pass)?;
        }
        if let Ok(to_email) = env::var("TO_EMAIL") {
            builder = builder.set_override("mail.recipient", to_email)?;
        }
        if let Ok(port) = env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    ///
    /// Mail settings are deliberately not checked here: an incomplete mail
    /// section surfaces per-request so the site keeps serving.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 5050,
            },
            mail: MailConfig::default(),
            contact: ContactConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = base_config();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_incomplete_mail_passes_validation() {
        let config = base_config();

        assert!(!config.mail.is_configured());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_mail_is_configured() {
        let mail = MailConfig {
            smtp_host: "smtp.example.com".to_string(),
            smtp_port: 465,
            smtp_username: "relay@example.com".to_string(),
            smtp_password: "secret".to_string(),
            recipient: "sales@example.com".to_string(),
        };

        assert!(mail.is_configured());
    }

    #[test]
    fn test_mail_missing_any_value_is_not_configured() {
        let complete = MailConfig {
            smtp_host: "smtp.example.com".to_string(),
            smtp_port: 465,
            smtp_username: "relay@example.com".to_string(),
            smtp_password: "secret".to_string(),
            recipient: "sales@example.com".to_string(),
        };

        for field in ["host", "username", "password", "recipient"] {
            let mut mail = complete.clone();
            match field {
                "host" => mail.smtp_host.clear(),
                "username" => mail.smtp_username.clear(),
                "password" => mail.smtp_password.clear(),
                _ => mail.recipient.clear(),
            }
            assert!(!mail.is_configured(), "expected incomplete for {field}");
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(MailConfig::default().smtp_port, 465);
        assert!(ContactConfig::default().strict);
        assert_eq!(LoggingConfig::default().level, "info");
    }
}

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use folio_contact::{DEFAULT_ACKNOWLEDGMENT_MESSAGE, DEFAULT_ACKNOWLEDGMENT_SUBJECT, Settings};
use folio_notification::{Provider, SendGridConfig, SmtpConfig};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default)]
    pub provider: Provider,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    /// Site owner receiving the inquiries
    #[serde(default)]
    pub owner_address: String,
    #[serde(default = "default_acknowledge")]
    pub acknowledge: bool,
    #[serde(default = "default_acknowledgment_subject")]
    pub acknowledgment_subject: String,
    #[serde(default = "default_acknowledgment_message")]
    pub acknowledgment_message: String,
    #[serde(default)]
    pub notification_template_id: Option<String>,
    #[serde(default)]
    pub sendgrid: SendGridConfig,
    #[serde(default)]
    pub smtp: SmtpConfig,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            from_address: default_from_address(),
            owner_address: String::new(),
            acknowledge: default_acknowledge(),
            acknowledgment_subject: default_acknowledgment_subject(),
            acknowledgment_message: default_acknowledgment_message(),
            notification_template_id: None,
            sendgrid: SendGridConfig::default(),
            smtp: SmtpConfig::default(),
        }
    }
}

impl EmailConfig {
    pub fn settings(&self) -> Settings {
        Settings {
            sender: self.from_address.to_owned(),
            owner: self.owner_address.to_owned(),
            acknowledge: self.acknowledge,
            acknowledgment_subject: self.acknowledgment_subject.to_owned(),
            acknowledgment_message: self.acknowledgment_message.to_owned(),
            notification_template_id: self
                .notification_template_id
                .clone()
                .filter(|id| !id.is_empty()),
        }
    }
}

fn default_from_address() -> String {
    "noreply@folio.local".to_string()
}

fn default_acknowledge() -> bool {
    true
}

fn default_acknowledgment_subject() -> String {
    DEFAULT_ACKNOWLEDGMENT_SUBJECT.to_string()
}

fn default_acknowledgment_message() -> String {
    DEFAULT_ACKNOWLEDGMENT_MESSAGE.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_site_title")]
    pub title: String,
    /// Prefix the site is mounted under
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// Use the matched route name as the page title
    #[serde(default = "default_update_title")]
    pub update_title: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_site_title(),
            base_path: default_base_path(),
            update_title: default_update_title(),
        }
    }
}

fn default_site_title() -> String {
    "Portfolio".to_string()
}

fn default_base_path() -> String {
    "/".to_string()
}

fn default_update_title() -> bool {
    true
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. `SENDGRID_API_KEY`
    /// 2. Environment variables (FOLIO__EMAIL__OWNER_ADDRESS, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored if missing
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FOLIO")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(api_key) = env::var("SENDGRID_API_KEY") {
            builder = builder.set_override("email.sendgrid.api_key", api_key)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.email.owner_address.is_empty() {
            return Err("Email owner_address must be set".to_string());
        }
        if self.email.from_address.is_empty() {
            return Err("Email from_address must be set".to_string());
        }
        match self.email.provider {
            Provider::SendGrid if self.email.sendgrid.api_key.is_empty() => {
                return Err("SendGrid API key is missing (set SENDGRID_API_KEY)".to_string());
            }
            Provider::Smtp if self.email.smtp.host.is_empty() => {
                return Err("SMTP host must be set".to_string());
            }
            Provider::Smtp if self.email.settings().notification_template_id.is_some() => {
                return Err(
                    "Email notification_template_id requires the sendgrid provider".to_string(),
                );
            }
            _ => {}
        }
        if !self.site.base_path.starts_with('/') {
            return Err("Site base_path must start with '/'".to_string());
        }
        Ok(())
    }
}

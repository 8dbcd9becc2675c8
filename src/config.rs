use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use strum::Display;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub booking: BookingConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BookingConfig {
    /// WhatsApp recipient in international format, digits only.
    #[serde(default = "default_whatsapp_number")]
    pub whatsapp_number: String,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: default_whatsapp_number(),
        }
    }
}

fn default_whatsapp_number() -> String {
    "918303860422".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Identifier appended to every outbound inquiry message.
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default)]
    pub loading: LoadingConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            loading: LoadingConfig::default(),
        }
    }
}

fn default_site_name() -> String {
    "MUSICAHOLIC द Band Website".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoadingConfig {
    #[serde(default = "default_loading_duration_ms")]
    pub duration_ms: u64,
    #[serde(default)]
    pub theme: LoadingTheme,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_loading_duration_ms(),
            theme: LoadingTheme::default(),
        }
    }
}

fn default_loading_duration_ms() -> u64 {
    7000
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LoadingTheme {
    #[default]
    Vinyl,
    Equalizer,
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

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MUSICAHOLIC__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional; defaults cover everything.
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MUSICAHOLIC")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.booking.whatsapp_number.is_empty()
            || !self
                .booking
                .whatsapp_number
                .chars()
                .all(|c| c.is_ascii_digit())
        {
            return Err("Booking WhatsApp number must contain digits only".to_string());
        }
        if self.site.loading.duration_ms == 0 {
            return Err("Loading screen duration must be greater than 0".to_string());
        }
        Ok(())
    }
}

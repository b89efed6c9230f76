//! Application configuration settings
//!
//! Defines all configuration structures and loading logic

use crate::providers::BackendKind;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Server configuration
    pub server: ServerConfig,
    /// OpenAI backend configuration
    pub openai: ProviderSettings,
    /// Anthropic backend configuration
    pub anthropic: ProviderSettings,
    /// Generation configuration
    pub generation: GenerationConfig,
    /// Security configuration
    pub security: SecurityConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Deployment environment label reported by the health check
    pub environment: String,
}

/// Upstream provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// API key; `None` leaves the backend unconfigured
    pub api_key: Option<String>,
    /// API base URL
    pub base_url: String,
    /// Model name
    pub model: String,
    /// Request timeout in seconds
    pub timeout: u64,
}

/// Generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Backend tried first when configured
    pub preferred_model: BackendKind,
    /// Caller-side timeout for one generation, in seconds
    pub timeout: u64,
    /// Maximum request body size in bytes
    pub max_request_size: usize,
}

/// Security configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Allowed origins for CORS
    pub allowed_origins: Vec<String>,
    /// Whether CORS is enabled
    pub cors_enabled: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4";
pub const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-sonnet-20240229";

impl Default for Settings {
    /// Defaults with no credentials; only the offline backend is available
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3001,
                environment: "development".to_string(),
            },
            openai: ProviderSettings {
                api_key: None,
                base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
                model: DEFAULT_OPENAI_MODEL.to_string(),
                timeout: 60,
            },
            anthropic: ProviderSettings {
                api_key: None,
                base_url: DEFAULT_ANTHROPIC_BASE_URL.to_string(),
                model: DEFAULT_ANTHROPIC_MODEL.to_string(),
                timeout: 60,
            },
            generation: GenerationConfig {
                preferred_model: BackendKind::OpenAI,
                timeout: 60,
                max_request_size: 10 * 1024 * 1024,
            },
            security: SecurityConfig {
                allowed_origins: vec!["*".to_string()],
                cors_enabled: true,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "text".to_string(),
            },
        }
    }
}

impl Settings {
    /// Create a new configuration instance
    ///
    /// Missing API keys are not an error: they only reduce the set of
    /// available backends.
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let request_timeout: u64 = get_env_or_default("REQUEST_TIMEOUT", "60")
            .parse()
            .context("Invalid timeout value")?;

        let settings = Self {
            server: ServerConfig {
                host: get_env_or_default("SERVER_HOST", "0.0.0.0"),
                port: get_env_or_default("PORT", "3001")
                    .parse()
                    .context("Invalid port number")?,
                environment: std::env::var("APP_ENV")
                    .or_else(|_| std::env::var("NODE_ENV"))
                    .unwrap_or_else(|_| "development".to_string()),
            },
            openai: ProviderSettings {
                api_key: get_optional_env("OPENAI_API_KEY"),
                base_url: get_env_or_default("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
                model: get_env_or_default("OPENAI_MODEL", DEFAULT_OPENAI_MODEL),
                timeout: request_timeout,
            },
            anthropic: ProviderSettings {
                api_key: get_optional_env("ANTHROPIC_API_KEY"),
                base_url: get_env_or_default("ANTHROPIC_BASE_URL", DEFAULT_ANTHROPIC_BASE_URL),
                model: get_env_or_default("ANTHROPIC_MODEL", DEFAULT_ANTHROPIC_MODEL),
                timeout: request_timeout,
            },
            generation: GenerationConfig {
                preferred_model: get_env_or_default("PREFERRED_MODEL", "openai")
                    .parse()
                    .context("Invalid preferred model")?,
                timeout: request_timeout,
                max_request_size: get_env_or_default("MAX_REQUEST_SIZE", "10485760")
                    .parse()
                    .context("Invalid maximum request size")?,
            },
            security: SecurityConfig {
                allowed_origins: get_env_or_default("ALLOWED_ORIGINS", "*")
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .collect(),
                cors_enabled: get_env_or_default("CORS_ENABLED", "true")
                    .parse()
                    .context("Invalid CORS enabled flag")?,
            },
            logging: LoggingConfig {
                level: get_env_or_default("RUST_LOG", "info"),
                format: get_env_or_default("LOG_FORMAT", "text"),
            },
        };

        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration validity
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Port number cannot be 0");
        }

        for (name, provider) in [("OpenAI", &self.openai), ("Anthropic", &self.anthropic)] {
            if let Some(api_key) = &provider.api_key {
                if api_key.contains(char::is_whitespace) {
                    anyhow::bail!("{} API key cannot contain whitespace characters", name);
                }
            }

            if !provider.base_url.starts_with("http") {
                anyhow::bail!("Invalid {} base URL format, should start with 'http'", name);
            }

            if provider.model.trim().is_empty() {
                anyhow::bail!("{} model name cannot be empty", name);
            }

            if provider.timeout == 0 {
                anyhow::bail!("Timeout values cannot be 0");
            }
        }

        if self.generation.timeout == 0 {
            anyhow::bail!("Timeout values cannot be 0");
        }

        if self.generation.max_request_size == 0 {
            anyhow::bail!("Maximum request size cannot be 0");
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            anyhow::bail!("Invalid log level: {}", self.logging.level);
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }
}

/// Get environment variable or default value
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get environment variable, treating blank values as unset
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

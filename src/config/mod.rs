//! Configuration management module
//!
//! Responsible for loading and managing application configuration from environment variables and `.env` files

pub mod settings;

pub use settings::{
    GenerationConfig, LoggingConfig, ProviderSettings, SecurityConfig, ServerConfig, Settings,
};

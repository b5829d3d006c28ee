use serde::Deserialize;
use std::env;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors encountered while loading configuration from environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable was not provided.
    #[error("Missing environment variable: {0}")]
    MissingVariable(String),
    /// Environment variable contained a value that could not be parsed.
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

/// Runtime configuration for the docdigest server.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Base URL of the model sidecar serving summarization, analysis,
    /// translation, and question answering.
    pub model_server_url: String,
    /// Maximum rendered character length of a chunk handed to the summarizer.
    pub max_chunk_chars: usize,
    /// Maximum summary length requested from the summarization model.
    pub summary_max_length: usize,
    /// Minimum summary length requested from the summarization model.
    pub summary_min_length: usize,
    /// Resolution used when rasterizing PDF pages for OCR.
    pub ocr_dpi: u32,
    /// Language hint passed to the OCR engine.
    pub ocr_language: String,
    /// Optional directory containing the pdfium shared library.
    pub pdfium_lib_dir: Option<String>,
    /// Optional override for the HTTP server port.
    pub server_port: Option<u16>,
}

const DEFAULT_MAX_CHUNK_CHARS: usize = 1000;
const DEFAULT_SUMMARY_MAX_LENGTH: usize = 150;
const DEFAULT_SUMMARY_MIN_LENGTH: usize = 50;
const DEFAULT_OCR_DPI: u32 = 300;
const DEFAULT_OCR_LANGUAGE: &str = "eng";

impl Config {
    /// Load configuration from environment variables, performing validation along the way.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            model_server_url: load_env("MODEL_SERVER_URL")?,
            max_chunk_chars: parse_env_or("MAX_CHUNK_CHARS", DEFAULT_MAX_CHUNK_CHARS)?,
            summary_max_length: parse_env_or("SUMMARY_MAX_LENGTH", DEFAULT_SUMMARY_MAX_LENGTH)?,
            summary_min_length: parse_env_or("SUMMARY_MIN_LENGTH", DEFAULT_SUMMARY_MIN_LENGTH)?,
            ocr_dpi: parse_env_or("OCR_DPI", DEFAULT_OCR_DPI)?,
            ocr_language: load_env_optional("OCR_LANGUAGE")
                .unwrap_or_else(|| DEFAULT_OCR_LANGUAGE.to_string()),
            pdfium_lib_dir: load_env_optional("PDFIUM_LIB_DIR"),
            server_port: load_env_optional("SERVER_PORT")
                .map(|value| {
                    value
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".into()))
                })
                .transpose()?,
        })
    }
}

fn load_env(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingVariable(key.to_string()))
}

fn load_env_optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_env_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    load_env_optional(key)
        .map(|value| {
            value
                .parse()
                .map_err(|_| ConfigError::InvalidValue(key.to_string()))
        })
        .transpose()
        .map(|parsed| parsed.unwrap_or(default))
}

/// Global configuration cache populated during process start.
pub static CONFIG: OnceLock<Config> = OnceLock::new();

/// Retrieve the loaded configuration, panicking if initialization has not occurred.
pub fn get_config() -> &'static Config {
    CONFIG.get().expect("Config not initialized")
}

/// Load configuration from the environment and install it in the global cache.
pub fn init_config() {
    dotenvy::dotenv().ok();
    let config = Config::from_env().expect("Failed to load config from environment");
    tracing::debug!(
        model_server_url = %config.model_server_url,
        max_chunk_chars = config.max_chunk_chars,
        ocr_dpi = config.ocr_dpi,
        server_port = ?config.server_port,
        "Loaded configuration"
    );
    CONFIG.set(config).expect("Failed to set config");
}

#[cfg(test)]
mod tests {
    use super::parse_env_or;

    #[test]
    fn parse_env_or_falls_back_to_default() {
        // Key intentionally absent from the test environment.
        let value: usize = parse_env_or("DOCDIGEST_UNSET_TEST_KEY", 42).expect("default");
        assert_eq!(value, 42);
    }
}

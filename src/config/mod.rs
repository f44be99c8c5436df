//! Configuration module for the podgen gateway.
//!
//! Configuration is loaded from environment variables, with `.env` values
//! applied in `main.rs` before loading. Secret fields are zeroized when the
//! configuration is dropped.

use thiserror::Error;
use url::Url;

use crate::core::tts::{OPENAI_TTS_URL, SpeechModel, VoiceType};

/// Default per-call timeout budget for external calls, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("invalid value for {name}: {message}")]
    InvalidVar { name: &'static str, message: String },

    #[error("invalid URL for {name}: {source}")]
    InvalidEndpoint {
        name: &'static str,
        source: url::ParseError,
    },
}

/// Server configuration.
///
/// Contains everything needed to run the gateway:
/// - Server settings (host, port, CORS)
/// - Synthesis provider settings (API key, endpoint, model, default voice)
/// - Upload gateway settings (base URL, optional API token)
/// - Per-call timeout budget for all external calls
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    /// OpenAI API key used for speech synthesis
    pub openai_api_key: String,
    /// Synthesis endpoint; defaults to the OpenAI speech API
    pub tts_endpoint: String,
    /// Synthesis model (tts-1, tts-1-hd, gpt-4o-mini-tts)
    pub tts_model: SpeechModel,
    /// Voice used when a request does not specify one
    pub default_voice: VoiceType,

    /// Base URL of the upload gateway / URL resolver
    pub storage_url: String,
    /// Bearer token for the upload gateway, if it requires one
    pub storage_api_token: Option<String>,

    /// Timeout applied to every external call, in seconds
    pub request_timeout_secs: u64,

    /// CORS allowed origins (comma-separated list or "*" for all)
    /// Default: None (CORS disabled, same-origin only)
    pub cors_allowed_origins: Option<String>,
}

/// Zeroize secret fields when the config is dropped so API keys do not
/// linger in memory after use.
impl Drop for ServerConfig {
    fn drop(&mut self) {
        use zeroize::Zeroize;

        self.openai_api_key.zeroize();
        if let Some(ref mut token) = self.storage_api_token {
            token.zeroize();
        }
    }
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Required: `OPENAI_API_KEY`, `STORAGE_URL`. Everything else has a
    /// default. Endpoint URLs are validated up front so a malformed value
    /// fails at startup rather than on the first request.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env_opt("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match env_opt("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidVar {
                name: "PORT",
                message: e.to_string(),
            })?,
            None => 3000,
        };

        let openai_api_key =
            env_opt("OPENAI_API_KEY").ok_or(ConfigError::MissingVar("OPENAI_API_KEY"))?;
        let tts_endpoint = env_opt("TTS_ENDPOINT").unwrap_or_else(|| OPENAI_TTS_URL.to_string());
        let tts_model = env_opt("TTS_MODEL")
            .map(|m| SpeechModel::from_str_or_default(&m))
            .unwrap_or_default();
        let default_voice = env_opt("DEFAULT_VOICE")
            .map(|v| VoiceType::from_str_or_default(&v))
            .unwrap_or_default();

        let storage_url = env_opt("STORAGE_URL").ok_or(ConfigError::MissingVar("STORAGE_URL"))?;
        let storage_api_token = env_opt("STORAGE_API_TOKEN");

        let request_timeout_secs = match env_opt("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| ConfigError::InvalidVar {
                name: "REQUEST_TIMEOUT_SECS",
                message: e.to_string(),
            })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };
        if request_timeout_secs == 0 {
            return Err(ConfigError::InvalidVar {
                name: "REQUEST_TIMEOUT_SECS",
                message: "timeout must be greater than zero".to_string(),
            });
        }

        let cors_allowed_origins = env_opt("CORS_ALLOWED_ORIGINS");

        Url::parse(&tts_endpoint).map_err(|source| ConfigError::InvalidEndpoint {
            name: "TTS_ENDPOINT",
            source,
        })?;
        Url::parse(&storage_url).map_err(|source| ConfigError::InvalidEndpoint {
            name: "STORAGE_URL",
            source,
        })?;

        Ok(Self {
            host,
            port,
            openai_api_key,
            tts_endpoint,
            tts_model,
            default_voice,
            storage_url,
            storage_api_token,
            request_timeout_secs,
            cors_allowed_origins,
        })
    }

    /// Get the server address as a string in the format "host:port".
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        for name in [
            "HOST",
            "PORT",
            "OPENAI_API_KEY",
            "TTS_ENDPOINT",
            "TTS_MODEL",
            "DEFAULT_VOICE",
            "STORAGE_URL",
            "STORAGE_API_TOKEN",
            "REQUEST_TIMEOUT_SECS",
            "CORS_ALLOWED_ORIGINS",
        ] {
            unsafe { env::remove_var(name) };
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        unsafe {
            env::set_var("OPENAI_API_KEY", "sk-test");
            env::set_var("STORAGE_URL", "https://storage.example.com");
        }

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.tts_endpoint, OPENAI_TTS_URL);
        assert_eq!(config.tts_model, SpeechModel::Tts1);
        assert_eq!(config.default_voice, VoiceType::Alloy);
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
        assert!(config.storage_api_token.is_none());
        assert_eq!(config.address(), "0.0.0.0:3000");
    }

    #[test]
    #[serial]
    fn test_from_env_missing_api_key() {
        clear_env();
        unsafe { env::set_var("STORAGE_URL", "https://storage.example.com") };

        let result = ServerConfig::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::MissingVar("OPENAI_API_KEY"))
        ));
    }

    #[test]
    #[serial]
    fn test_from_env_missing_storage_url() {
        clear_env();
        unsafe { env::set_var("OPENAI_API_KEY", "sk-test") };

        let result = ServerConfig::from_env();
        assert!(matches!(result, Err(ConfigError::MissingVar("STORAGE_URL"))));
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_storage_url() {
        clear_env();
        unsafe {
            env::set_var("OPENAI_API_KEY", "sk-test");
            env::set_var("STORAGE_URL", "not a url");
        }

        let result = ServerConfig::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEndpoint {
                name: "STORAGE_URL",
                ..
            })
        ));
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        unsafe {
            env::set_var("HOST", "127.0.0.1");
            env::set_var("PORT", "8080");
            env::set_var("OPENAI_API_KEY", "sk-test");
            env::set_var("STORAGE_URL", "https://storage.example.com");
            env::set_var("TTS_MODEL", "tts-1-hd");
            env::set_var("DEFAULT_VOICE", "nova");
            env::set_var("REQUEST_TIMEOUT_SECS", "5");
        }

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.address(), "127.0.0.1:8080");
        assert_eq!(config.tts_model, SpeechModel::Tts1Hd);
        assert_eq!(config.default_voice, VoiceType::Nova);
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    #[serial]
    fn test_from_env_zero_timeout_rejected() {
        clear_env();
        unsafe {
            env::set_var("OPENAI_API_KEY", "sk-test");
            env::set_var("STORAGE_URL", "https://storage.example.com");
            env::set_var("REQUEST_TIMEOUT_SECS", "0");
        }

        let result = ServerConfig::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidVar {
                name: "REQUEST_TIMEOUT_SECS",
                ..
            })
        ));
    }
}

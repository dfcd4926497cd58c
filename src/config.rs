//! Service configuration loaded once at startup.
//!
//! The configuration is passed explicitly into state construction; there is
//! no global mutable client state.

use anyhow::{anyhow, Result};

/// Default OpenAI model
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default listen port
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the external text-generation service
    pub api_key: String,
    /// Model identifier sent with every generation request
    pub model: String,
    /// Port the HTTP server binds on
    pub port: u16,
}

impl Config {
    /// Read configuration from environment variables.
    ///
    /// `OPENAI_API_KEY` is required; `OPENAI_MODEL` and `PORT` fall back to
    /// defaults.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| anyhow!("OPENAI_API_KEY environment variable not set"))?;

        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse::<u16>()
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            api_key,
            model,
            port,
        })
    }
}

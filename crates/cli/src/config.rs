//! Configuration from environment variables.

use eyre::WrapErr;
use std::env;
use vocab_client::Url;

pub const API_URL_VAR: &str = "VOCAB_API_URL";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: Url,
}

impl Config {
    /// Reads the config, `.env` should already be loaded at this point.
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_api_url(env::var(API_URL_VAR).ok())
    }

    fn from_api_url(api_url: Option<String>) -> eyre::Result<Self> {
        let api_url = api_url.unwrap_or_else(|| vocab_api::DEFAULT_API_URL.to_string());
        let api_url = Url::parse(&api_url).wrap_err_with(|| format!("Invalid {API_URL_VAR}"))?;
        Ok(Self { api_url })
    }
}

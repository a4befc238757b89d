use serde::Deserialize;

use crate::{api::API_BASE_URL, Error};

fn default_token_type() -> String {
    "Bearer".to_string()
}

fn default_api_base_url() -> String {
    API_BASE_URL.to_string()
}

/// Runtime settings for the http client, read from `SPOTIFY_*` environment variables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Access token obtained from any of the Spotify authorization flows.
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl Config {
    pub fn new<S: Into<String>>(access_token: S) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: default_token_type(),
            api_base_url: default_api_base_url(),
        }
    }

    /// Load the config from the environment, reading a `.env` file first if one exists.
    pub fn from_env() -> Result<Self, Error> {
        if let Err(err) = dotenvy::dotenv() {
            log::debug!("no .env file loaded: {err}");
        }
        Self::from_vars(std::env::vars())
    }

    /// Load the config from an explicit set of `SPOTIFY_*` variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed("SPOTIFY_").from_iter(vars)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_are_filled_in() {
        let config = Config::from_vars(vars(&[("SPOTIFY_ACCESS_TOKEN", "abc")])).unwrap();
        assert_eq!(config, Config::new("abc"));
        assert_eq!(config.api_base_url, "https://api.spotify.com/v1");
    }

    #[test]
    fn overrides_are_read() {
        let config = Config::from_vars(vars(&[
            ("SPOTIFY_ACCESS_TOKEN", "abc"),
            ("SPOTIFY_TOKEN_TYPE", "Basic"),
            ("SPOTIFY_API_BASE_URL", "http://localhost:8080"),
            ("UNRELATED", "value"),
        ]))
        .unwrap();
        assert_eq!(config.token_type, "Basic");
        assert_eq!(config.api_base_url, "http://localhost:8080");
    }

    #[test]
    fn missing_token_is_a_config_error() {
        let result = Config::from_vars(vars(&[("SPOTIFY_TOKEN_TYPE", "Bearer")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}

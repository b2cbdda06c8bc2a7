//! Configuration management for the playlist service.
//!
//! This module resolves all runtime configuration from environment variables
//! (optionally seeded from a `.env` file) into a single [`Config`] value at
//! startup. The Spotify application credentials are required and the service
//! refuses to start without them; the endpoint URLs and the bind address have
//! production defaults and only need to be set for local mocks or
//! non-standard deployments.

use std::{env, net::SocketAddr};

use reqwest::Url;
use thiserror::Error;

const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";

/// Startup failures while resolving the environment.
///
/// Any of these aborts the process before the listener is bound; a service
/// missing its provider credentials can serve nothing useful.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{0} is not a valid URL")]
    InvalidUrl(&'static str),
    #[error("{0} is not a valid socket address")]
    InvalidAddr(&'static str),
}

/// Resolved runtime configuration, read once in `main` and shared through
/// the application state afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Client id of the registered Spotify application.
    pub client_id: String,
    /// Client secret of the registered Spotify application.
    pub client_secret: String,
    /// Redirect URI registered with the provider; the frontend lands here
    /// after the user grants access.
    pub redirect_uri: String,
    /// OAuth authorization endpoint.
    pub auth_url: Url,
    /// OAuth token exchange endpoint.
    pub token_url: Url,
    /// Web API base URL, without a trailing slash.
    pub api_url: String,
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Resolves the configuration from the process environment.
    ///
    /// Required variables:
    /// - `SPOTIFY_API_AUTH_CLIENT_ID`
    /// - `SPOTIFY_API_AUTH_CLIENT_SECRET`
    /// - `SPOTIFY_API_REDIRECT_URI`
    ///
    /// Optional variables (with defaults):
    /// - `SPOTIFY_API_AUTH_URL` (`https://accounts.spotify.com/authorize`)
    /// - `SPOTIFY_API_TOKEN_URL` (`https://accounts.spotify.com/api/token`)
    /// - `SPOTIFY_API_URL` (`https://api.spotify.com/v1`)
    /// - `SERVER_ADDRESS` (`127.0.0.1:8080`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is absent or when a
    /// URL/address variable fails to parse. The caller is expected to treat
    /// any error as fatal.
    ///
    /// # Example
    ///
    /// ```
    /// use focusmix::config::Config;
    ///
    /// let config = Config::from_env().unwrap_or_else(|e| {
    ///     eprintln!("configuration error: {e}");
    ///     std::process::exit(1);
    /// });
    /// ```
    pub fn from_env() -> Result<Self, ConfigError> {
        let client_id =
            required("SPOTIFY_API_AUTH_CLIENT_ID").ok_or(ConfigError::Missing("SPOTIFY_API_AUTH_CLIENT_ID"))?;
        let client_secret = required("SPOTIFY_API_AUTH_CLIENT_SECRET")
            .ok_or(ConfigError::Missing("SPOTIFY_API_AUTH_CLIENT_SECRET"))?;
        let redirect_uri =
            required("SPOTIFY_API_REDIRECT_URI").ok_or(ConfigError::Missing("SPOTIFY_API_REDIRECT_URI"))?;

        let auth_url = optional("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL)
            .parse::<Url>()
            .map_err(|_| ConfigError::InvalidUrl("SPOTIFY_API_AUTH_URL"))?;
        let token_url = optional("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
            .parse::<Url>()
            .map_err(|_| ConfigError::InvalidUrl("SPOTIFY_API_TOKEN_URL"))?;
        let api_url = optional("SPOTIFY_API_URL", DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        let bind_addr = optional("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddr("SERVER_ADDRESS"))?;

        Ok(Config {
            client_id,
            client_secret,
            redirect_uri,
            auth_url,
            token_url,
            api_url,
            bind_addr,
        })
    }
}

/// Reads a required variable; empty values count as unset so that a blank
/// line in a `.env` file does not masquerade as configuration.
fn required(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

fn optional(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

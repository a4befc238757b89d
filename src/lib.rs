use std::fmt::{Display, Formatter};

use color_eyre::{Report, Section};
use reqwest::StatusCode;

pub mod api;
pub mod config;

pub use api::{BrowseApi, Requester, Spotify, SpotifyRequest};
pub use config::Config;

/// Broad category of a failed Spotify Web API request, derived from the response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotifyErrorType {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    RateLimit,
    ServerError,
    Unknown,
}

impl From<StatusCode> for SpotifyErrorType {
    fn from(status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST => Self::BadRequest,
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::FORBIDDEN => Self::Forbidden,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimit,
            s if s.is_server_error() => Self::ServerError,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug)]
pub enum Error {
    /// An argument was rejected before any request was made.
    InvalidArgument(&'static str, String),
    /// The api answered with a non success status.
    Request {
        error_type: SpotifyErrorType,
        code: u16,
        message: String,
    },
    /// The authorization service rejected the request.
    Auth {
        code: u16,
        error: String,
        message: String,
    },
    /// A top level field the endpoint always returns was missing from the body.
    MissingField(&'static str),
    /// The body could not be decoded into the expected shape.
    Json { path: String, message: String },
    Http(reqwest::Error),
    Config(String),
    Custom(String),
}

impl Error {
    pub fn custom<D: Display>(message: D) -> Self {
        Self::Custom(message.to_string())
    }

    /// Convert into a [`Report`] carrying a hint on how to recover.
    pub fn into_report(self) -> Report {
        let suggestion = match &self {
            Error::InvalidArgument(..) => "Check the arguments passed to the request",
            Error::Request { error_type: SpotifyErrorType::Unauthorized, .. }
            | Error::Auth { .. } => "The token is invalid or expired, try requesting a new one",
            Error::Request { error_type: SpotifyErrorType::Forbidden, .. } => {
                "Try adding the missing scope to the OAuth token"
            }
            Error::Request { error_type: SpotifyErrorType::RateLimit, .. } => {
                "Too many requests were made, wait before trying again"
            }
            Error::Config(_) => "Set SPOTIFY_ACCESS_TOKEN in the environment or in a .env file",
            _ => "Try again later",
        };
        Report::new(self).suggestion(suggestion)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidArgument(arg, message) => write!(f, "invalid argument `{arg}`: {message}"),
            Error::Request { error_type, code, message } => {
                write!(f, "[{code}] {error_type:?}: {message}")
            }
            Error::Auth { code, error, message } => write!(f, "[{code}] {error}: {message}"),
            Error::MissingField(field) => write!(f, "response is missing the `{field}` field"),
            Error::Json { path, message } => write!(f, "failed to parse response at `{path}`: {message}"),
            Error::Http(err) => write!(f, "{err}"),
            Error::Config(message) => write!(f, "invalid configuration: {message}"),
            Error::Custom(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Error::Http(value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::Json {
            path: ".".to_string(),
            message: value.to_string(),
        }
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for Error {
    fn from(value: serde_path_to_error::Error<serde_json::Error>) -> Self {
        Error::Json {
            path: value.path().to_string(),
            message: value.into_inner().to_string(),
        }
    }
}

impl From<serde_urlencoded::ser::Error> for Error {
    fn from(value: serde_urlencoded::ser::Error) -> Self {
        Error::custom(value)
    }
}

impl From<envy::Error> for Error {
    fn from(value: envy::Error) -> Self {
        Error::Config(value.to_string())
    }
}

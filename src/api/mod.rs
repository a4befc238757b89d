pub mod auth;
mod browse;
pub mod request;
pub mod response;
mod uri;

use std::future::Future;

pub use auth::Token;
pub use browse::BrowseApi;
pub use request::{BrowseQuery, Market, Params, RecommendationQuery};
pub use reqwest::Method;
pub use uri::{parse_id, Resource, Uri};

use reqwest::{header::AUTHORIZATION, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::{Config, Error, SpotifyErrorType};

pub(crate) static API_BASE_URL: &str = "https://api.spotify.com/v1";

/// A single request against the Web API, relative to the api base url.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotifyRequest {
    pub method: Method,
    pub path: String,
    pub params: Params,
}

impl SpotifyRequest {
    pub fn new<S: AsRef<str>>(method: Method, path: S) -> Self {
        Self {
            method,
            path: path.as_ref().to_string(),
            params: Params::new(),
        }
    }

    /// Add a query parameter. Absent values are skipped.
    pub fn param<K: AsRef<str>, V: IntoSpotifyParam>(mut self, key: K, value: V) -> Self {
        self.params.add_opt(key, value);
        self
    }

    pub fn params(mut self, params: Params) -> Self {
        self.params.extend(params);
        self
    }

    pub fn url(&self, base: &str) -> Result<String, Error> {
        let base = base.trim_end_matches('/');
        Ok(match self.params.is_empty() {
            true => format!("{}/{}", base, self.path),
            false => format!("{}/{}?{}", base, self.path, self.params.encode()?),
        })
    }
}

/// Sends requests to the Web API and hands back the decoded json body.
///
/// Authentication, transport and status handling all belong to the
/// implementation. Errors are surfaced to the caller as is.
pub trait Requester {
    fn send(&self, request: SpotifyRequest) -> impl Future<Output = Result<Value, Error>>;
}

macro_rules! impl_into_spotify_param {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoSpotifyParam for $ty {
                fn into_spotify_param(self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    }
}

/// Value that can be sent as a query parameter. `None` means the parameter is left out.
pub trait IntoSpotifyParam {
    fn into_spotify_param(self) -> Option<String>;
}

impl<T: IntoSpotifyParam> IntoSpotifyParam for Option<T> {
    fn into_spotify_param(self) -> Option<String> {
        self.and_then(IntoSpotifyParam::into_spotify_param)
    }
}

impl_into_spotify_param!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, usize, isize, bool, &str, String, &String);

#[derive(Debug, Deserialize)]
struct ErrorData {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    Auth {
        error: String,
        error_description: String,
    },
    Request {
        error: ErrorData,
    },
}

#[derive(Debug)]
pub struct SpotifyResponse {
    pub status: StatusCode,
    pub body: String,
}

impl SpotifyResponse {
    async fn from_response(response: reqwest::Response) -> Result<Self, Error> {
        let status = response.status();
        let body = response.text().await?;
        Self { status, body }.error_for_status()
    }

    fn error_for_status(self) -> Result<Self, Error> {
        if self.status.is_success() {
            return Ok(self);
        }

        log::error!("[{}] {}", self.status, self.body.replace('\n', ""));
        let code = self.status.as_u16();
        match serde_json::from_str::<ErrorBody>(&self.body) {
            Ok(ErrorBody::Auth { error, error_description }) => Err(Error::Auth {
                code,
                error,
                message: error_description,
            }),
            Ok(ErrorBody::Request { error }) => Err(Error::Request {
                error_type: SpotifyErrorType::from(self.status),
                code,
                message: error.message,
            }),
            Err(_) => Err(Error::Request {
                error_type: SpotifyErrorType::from(self.status),
                code,
                message: self
                    .status
                    .canonical_reason()
                    .unwrap_or("Failed to make spotify request")
                    .to_string(),
            }),
        }
    }

    fn json(&self) -> Result<Value, Error> {
        if self.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Web API client backed by `reqwest`, authorized with a fixed [`Token`].
#[derive(Debug, Clone)]
pub struct Spotify {
    client: reqwest::Client,
    token: Token,
    base_url: String,
}

impl Spotify {
    pub fn new(token: Token) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            base_url: API_BASE_URL.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Token::from(config)).with_base_url(config.api_base_url.as_str())
    }

    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::from_config(&Config::from_env()?))
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn token(&self) -> &Token {
        &self.token
    }
}

impl Requester for Spotify {
    async fn send(&self, request: SpotifyRequest) -> Result<Value, Error> {
        let url = request.url(&self.base_url)?;
        log::debug!("{} {}", request.method, url);

        let response = self
            .client
            .request(request.method, url)
            .header(AUTHORIZATION, self.token.to_header())
            .send()
            .await?;

        SpotifyResponse::from_response(response).await?.json()
    }
}

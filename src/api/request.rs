use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;

use crate::Error;

use super::{
    uri::{parse_id, Resource},
    IntoSpotifyParam,
};

#[macro_export]
macro_rules! spotify_request {
    ($type: ident, $url: literal) => {
        paste::paste! {
            $crate::api::SpotifyRequest::new($crate::api::Method::[<$type:upper>], format!($url))
        }
    };
    ($type: ident, $url: literal, $($param: expr),*) => {
        paste::paste! {
            $crate::api::SpotifyRequest::new($crate::api::Method::[<$type:upper>], format!($url, $($param,)*))
        }
    }
}

#[macro_export]
macro_rules! spotify_request_get {
    ($($rest: tt)*) => {
        $crate::spotify_request!(get, $($rest)*)
    }
}

pub use crate::spotify_request_get as get;

/// Page size used when the caller does not pick one.
pub const DEFAULT_LIMIT: usize = 20;

/// Market value telling the api to use the country of the authenticated user.
pub static FROM_TOKEN: &str = "from_token";

static TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

lazy_static::lazy_static! {
    /// Prefixes a tunable track attribute filter may start with.
    pub static ref RECOMMENDATION_PREFIXES: HashSet<&'static str> = HashSet::from(["min", "max", "target"]);

    /// Tunable track attributes accepted by the recommendations endpoint.
    pub static ref RECOMMENDATION_ATTRIBUTES: HashSet<&'static str> = HashSet::from([
        "acousticness",
        "danceability",
        "duration_ms",
        "energy",
        "instrumentalness",
        "key",
        "liveness",
        "loudness",
        "mode",
        "popularity",
        "speechiness",
        "tempo",
        "time_signature",
        "valence",
    ]);
}

/// Ordered query parameters of a request.
///
/// Absent values are never stored, so they never reach the query string.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing any earlier value for the same key.
    pub fn add<K: AsRef<str>, V: Display>(&mut self, key: K, value: V) -> &mut Self {
        let key = key.as_ref();
        let value = value.to_string();
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value,
            None => self.0.push((key.to_string(), value)),
        }
        self
    }

    pub fn add_opt<K: AsRef<str>, V: IntoSpotifyParam>(&mut self, key: K, value: V) -> &mut Self {
        if let Some(v) = value.into_spotify_param() {
            self.add(key, v);
        }
        self
    }

    pub fn extend(&mut self, other: Params) -> &mut Self {
        for (k, v) in other.0 {
            self.add(k, v);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Url encoded query string, in insertion order.
    pub fn encode(&self) -> Result<String, Error> {
        Ok(serde_urlencoded::to_string(&self.0)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Market {
    /// Use the country associated with the access token.
    FromToken,
    /// An [ISO 3166-1 alpha-2 country code](http://en.wikipedia.org/wiki/ISO_3166-1_alpha-2)
    Country(String),
}

impl Market {
    pub fn country<S: Display>(code: S) -> Self {
        Self::Country(code.to_string())
    }
}

impl Display for Market {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Market::FromToken => write!(f, "{FROM_TOKEN}"),
            Market::Country(code) => write!(f, "{code}"),
        }
    }
}

impl From<&str> for Market {
    fn from(value: &str) -> Self {
        match value {
            v if v == FROM_TOKEN => Self::FromToken,
            code => Self::Country(code.to_string()),
        }
    }
}

impl IntoSpotifyParam for Market {
    fn into_spotify_param(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoSpotifyParam for &Market {
    fn into_spotify_param(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoSpotifyParam for NaiveDateTime {
    fn into_spotify_param(self) -> Option<String> {
        Some(self.format(TIMESTAMP_FORMAT).to_string())
    }
}

/// Shared options of the browse endpoints.
///
/// Each endpoint only sends the options it supports, see the docs on [`crate::BrowseApi`].
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseQuery {
    /// An [ISO 3166-1 alpha-2 country code](http://en.wikipedia.org/wiki/ISO_3166-1_alpha-2).
    pub country: Option<String>,
    /// Lowercase ISO 639-1 language code and uppercase ISO 3166-1 alpha-2 country code joined by an underscore, e.g. `es_MX`.
    pub locale: Option<String>,
    /// The user's local time, used to tailor results to the time of day.
    pub timestamp: Option<NaiveDateTime>,
    /// The maximum number of items to return (1..=50).
    pub limit: usize,
    /// The index of the first item to return.
    pub offset: usize,
}

impl Default for BrowseQuery {
    fn default() -> Self {
        Self {
            country: None,
            locale: None,
            timestamp: None,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl BrowseQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn country<S: Display>(mut self, country: S) -> Self {
        self.country = Some(country.to_string());
        self
    }

    pub fn locale<S: Display>(mut self, locale: S) -> Self {
        self.locale = Some(locale.to_string());
        self
    }

    pub fn timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

/// Check a `<prefix>_<attribute>` filter name.
///
/// Returns `Ok(true)` when both parts are known and `Ok(false)` for a well
/// formed name with an unknown prefix or attribute. Names that can not be
/// split into a prefix and an attribute are an error.
///
/// The name is split on its first underscore only, so `min_duration_ms` and
/// `max_time_signature` are accepted. Any name whose attribute part is a known
/// attribute is well formed, including `foo_duration_ms`, which is then
/// dropped for its unknown prefix. A second underscore in an unknown
/// attribute, as in `foo_bar_baz`, is an error.
pub fn validate_attribute(name: &str) -> Result<bool, Error> {
    let malformed = || {
        Error::InvalidArgument(
            "attributes",
            format!("`{name}` is not of the form <min|max|target>_<attribute>"),
        )
    };

    let (prefix, attribute) = name.split_once('_').ok_or_else(malformed)?;
    if prefix.is_empty() || attribute.is_empty() {
        return Err(malformed());
    }

    if RECOMMENDATION_ATTRIBUTES.contains(attribute) {
        return Ok(RECOMMENDATION_PREFIXES.contains(prefix));
    }

    // Only `duration_ms` and `time_signature` may carry a second underscore
    if attribute.contains('_') {
        return Err(malformed());
    }
    Ok(false)
}

/// Seeds, market and tunable attribute filters for [`crate::BrowseApi::recommendations`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationQuery {
    pub seed_artists: Option<Vec<String>>,
    pub seed_genres: Option<Vec<String>>,
    pub seed_tracks: Option<Vec<String>>,
    /// The target size of the list of recommended tracks (1..=100).
    pub limit: usize,
    /// `None` leaves the market out of the request entirely.
    pub market: Option<Market>,
    /// `<min|max|target>_<attribute>` filters, in the order they were added.
    pub attributes: Vec<(String, f64)>,
}

impl Default for RecommendationQuery {
    fn default() -> Self {
        Self {
            seed_artists: None,
            seed_genres: None,
            seed_tracks: None,
            limit: DEFAULT_LIMIT,
            market: Some(Market::FromToken),
            attributes: Vec::new(),
        }
    }
}

impl RecommendationQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Artist ids, uris or share links
    pub fn artists<S: Display, I: IntoIterator<Item = S>>(mut self, artists: I) -> Self {
        self.seed_artists = Some(artists.into_iter().map(|a| a.to_string()).collect());
        self
    }

    pub fn genres<S: Display, I: IntoIterator<Item = S>>(mut self, genres: I) -> Self {
        self.seed_genres = Some(genres.into_iter().map(|g| g.to_string()).collect());
        self
    }

    /// Track ids, uris or share links
    pub fn tracks<S: Display, I: IntoIterator<Item = S>>(mut self, tracks: I) -> Self {
        self.seed_tracks = Some(tracks.into_iter().map(|t| t.to_string()).collect());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Pass `None` to send no market at all.
    pub fn market<M: Into<Option<Market>>>(mut self, market: M) -> Self {
        self.market = market.into();
        self
    }

    /// Add a filter such as `min_tempo` or `target_energy`.
    pub fn attribute<K: Into<String>, V: Into<f64>>(mut self, name: K, value: V) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn attributes<K, V, I>(mut self, attributes: I) -> Self
    where
        K: Into<String>,
        V: Into<f64>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.attributes
            .extend(attributes.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    fn seed(ids: &Option<Vec<String>>, resource: Option<Resource>) -> Result<Option<String>, Error> {
        let Some(ids) = ids else {
            return Ok(None);
        };

        let ids = match resource {
            Some(resource) => ids
                .iter()
                .map(|id| parse_id(id, resource))
                .collect::<Result<Vec<_>, _>>()?,
            None => ids.clone(),
        };
        Ok(Some(ids.join(",")))
    }

    /// Validate the query and build its parameters.
    ///
    /// Fails on the first malformed attribute name or non-finite value. Unknown but well formed
    /// attribute names are dropped.
    pub fn into_params(&self) -> Result<Params, Error> {
        let mut params = Params::new();
        params
            .add("limit", self.limit)
            .add_opt("seed_artists", Self::seed(&self.seed_artists, Some(Resource::Artist))?)
            .add_opt("seed_genres", Self::seed(&self.seed_genres, None)?)
            .add_opt("seed_tracks", Self::seed(&self.seed_tracks, Some(Resource::Track))?)
            .add_opt("market", self.market.as_ref());

        for (name, value) in self.attributes.iter() {
            if !value.is_finite() {
                return Err(Error::InvalidArgument(
                    "attributes",
                    format!("`{name}` must be a finite number, got {value}"),
                ));
            }
            if validate_attribute(name)? {
                params.add(name, value);
            } else {
                log::warn!("ignoring unrecognized recommendation attribute `{name}`");
            }
        }

        Ok(params)
    }
}

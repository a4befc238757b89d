mod album;
mod artist;
mod category;
mod playlist;
mod recommendation;
mod track;

pub use album::*;
pub use artist::*;
pub use category::*;
pub use playlist::*;
pub use recommendation::*;
pub use track::*;

use std::fmt::Debug;

use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

use crate::Error;

#[macro_export]
macro_rules! pares {
    ($value: expr) => {
        serde_path_to_error::deserialize($value)
    };
    ($type: ty: $value: expr) => {
        serde_path_to_error::deserialize::<_, $type>($value)
    };
}

pub use crate::pares;

/// Take `key` out of a response body and decode it.
pub(crate) fn field<T: DeserializeOwned>(body: &mut Value, key: &'static str) -> Result<T, Error> {
    let value = body
        .get_mut(key)
        .map(Value::take)
        .ok_or(Error::MissingField(key))?;
    Ok(pares!(value)?)
}

pub fn deserialize_date_ymd<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(serde::de::Error::custom)
}

pub fn deserialize_date_ym<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = format!("{}-01", String::deserialize(deserializer)?);
    NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(serde::de::Error::custom)
}

pub fn deserialize_date_y<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = format!("{}-01-01", String::deserialize(deserializer)?);
    NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(serde::de::Error::custom)
}

pub fn deserialize_duration<'de, D>(deserializer: D) -> Result<chrono::Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let ms = i64::deserialize(deserializer)?;
    Ok(chrono::Duration::milliseconds(ms))
}

pub fn deserialize_optional_usize<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<usize>::deserialize(deserializer)?.unwrap_or_default())
}

/// A page of items along with the metadata to request its neighbours.
pub trait Paged {
    type Item;
    fn items(&self) -> &Vec<Self::Item>;
    fn offset(&self) -> usize;
    fn limit(&self) -> usize;
    fn total(&self) -> usize;
    fn next(&self) -> Option<&str>;
    fn prev(&self) -> Option<&str>;

    /// Whether the items of this page reach the end of the collection.
    fn is_last(&self) -> bool {
        self.next().is_none() || self.offset() + self.items().len() >= self.total()
    }
}

#[macro_export]
macro_rules! impl_paged {
    ($name: ident<$typ: ty>) => {
        impl $crate::api::response::Paged for $name {
            type Item = $typ;

            fn items(&self) -> &Vec<Self::Item> {
                &self.items
            }

            fn next(&self) -> Option<&str> {
                self.next.as_deref()
            }

            fn prev(&self) -> Option<&str> {
                self.previous.as_deref()
            }

            fn offset(&self) -> usize {
                self.offset
            }

            fn limit(&self) -> usize {
                self.limit
            }

            fn total(&self) -> usize {
                self.total
            }
        }
    };
}

/// A page returned together with a localized message describing it,
/// e.g. `"Monday morning music, coming right up!"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Featured<T> {
    pub message: Option<String>,
    pub page: T,
}

impl<T: DeserializeOwned> Featured<T> {
    pub(crate) fn from_body(mut body: Value, key: &'static str) -> Result<Self, Error> {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string);
        Ok(Self {
            message,
            page: field(&mut body, key)?,
        })
    }
}

/// External URLs
///
/// Usually just the Spotify URL
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ExternalUrls {
    /// The Spotify URL for the object.
    pub spotify: String,
}

/// Followers for a user profile
#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
pub struct Followers {
    /// The total number of followers.
    pub total: u32,
}

/// Spofiy Image
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Image {
    /// The source URL of the image
    pub url: String,
    /// The image height in pixels.
    #[serde(default, deserialize_with = "deserialize_optional_usize")]
    pub height: usize,
    /// The image width in pixels.
    #[serde(default, deserialize_with = "deserialize_optional_usize")]
    pub width: usize,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionReason {
    /// The content item is explicit and the user's account is set to not play explicit content.
    Explicit,
    /// The content item is not available in the given market.
    Market,
    /// The content item is not available for the user's subscription type.
    Product,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Restrictions {
    pub reason: RestrictionReason,
}

#[derive(Clone, PartialEq, Deserialize)]
#[serde(tag = "release_date_precision", content = "release_date", rename_all = "snake_case")]
pub enum ReleaseDate {
    #[serde(deserialize_with = "deserialize_date_ymd")]
    Day(NaiveDate),
    #[serde(deserialize_with = "deserialize_date_ym")]
    Month(NaiveDate),
    #[serde(deserialize_with = "deserialize_date_y")]
    Year(NaiveDate),
}

impl AsRef<NaiveDate> for ReleaseDate {
    fn as_ref(&self) -> &NaiveDate {
        match self {
            Self::Day(d) => d,
            Self::Month(d) => d,
            Self::Year(d) => d,
        }
    }
}

impl Debug for ReleaseDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Day(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::Month(d) => write!(f, "{}", d.format("%Y-%m")),
            Self::Year(d) => write!(f, "{}", d.format("%Y")),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use serde_json::{json, Value};

    pub fn image() -> Value {
        json!({ "url": "https://i.scdn.co/image/ab67706f", "height": null, "width": null })
    }

    pub fn artist(id: &str) -> Value {
        json!({
            "external_urls": { "spotify": format!("https://open.spotify.com/artist/{id}") },
            "href": format!("https://api.spotify.com/v1/artists/{id}"),
            "id": id,
            "name": "Artist",
            "type": "artist",
            "uri": format!("spotify:artist:{id}")
        })
    }

    pub fn album(id: &str) -> Value {
        json!({
            "album_type": "single",
            "total_tracks": 1,
            "available_markets": ["SE", "NL"],
            "external_urls": { "spotify": format!("https://open.spotify.com/album/{id}") },
            "href": format!("https://api.spotify.com/v1/albums/{id}"),
            "id": id,
            "images": [image()],
            "name": "Album",
            "release_date": "2024-03",
            "release_date_precision": "month",
            "type": "album",
            "uri": format!("spotify:album:{id}"),
            "artists": [artist("a1")]
        })
    }

    pub fn playlist(id: &str) -> Value {
        json!({
            "collaborative": false,
            "description": "The hottest 50",
            "external_urls": { "spotify": format!("https://open.spotify.com/playlist/{id}") },
            "href": format!("https://api.spotify.com/v1/playlists/{id}"),
            "id": id,
            "images": [image()],
            "name": "Today's Top Hits",
            "owner": {
                "external_urls": { "spotify": "https://open.spotify.com/user/spotify" },
                "href": "https://api.spotify.com/v1/users/spotify",
                "id": "spotify",
                "type": "user",
                "uri": "spotify:user:spotify",
                "display_name": "Spotify"
            },
            "public": true,
            "snapshot_id": "MTcwNjgzNjQwMCwwMDAwMDAwMA==",
            "tracks": { "href": format!("https://api.spotify.com/v1/playlists/{id}/tracks"), "total": 50 },
            "type": "playlist",
            "uri": format!("spotify:playlist:{id}")
        })
    }

    pub fn track(id: &str) -> Value {
        json!({
            "artists": [artist("a1")],
            "disc_number": 1,
            "duration_ms": 215000,
            "explicit": false,
            "external_urls": { "spotify": format!("https://open.spotify.com/track/{id}") },
            "href": format!("https://api.spotify.com/v1/tracks/{id}"),
            "id": id,
            "is_playable": true,
            "name": "Track",
            "preview_url": null,
            "track_number": 3,
            "type": "track",
            "uri": format!("spotify:track:{id}"),
            "is_local": false
        })
    }

    /// A paging object holding `items`, with `total` items overall starting at `offset`.
    pub fn page(kind: &str, items: Vec<Value>, offset: usize, total: usize) -> Value {
        let limit = 20;
        let next = match offset + items.len() < total {
            true => Value::from(format!(
                "https://api.spotify.com/v1/browse/{kind}?offset={}&limit={limit}",
                offset + limit
            )),
            false => Value::Null,
        };
        json!({
            "href": format!("https://api.spotify.com/v1/browse/{kind}?offset={offset}&limit={limit}"),
            "limit": limit,
            "next": next,
            "offset": offset,
            "previous": Value::Null,
            "total": total,
            "items": items,
        })
    }
}

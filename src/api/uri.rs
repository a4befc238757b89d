use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

use crate::Error;

static OPEN_SPOTIFY_HOST: &str = "open.spotify.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Artist,
    Album,
    Track,
    Playlist,
    User,
    Show,
    Episode,
}

impl Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Resource::Artist => "artist",
                Resource::Album => "album",
                Resource::Track => "track",
                Resource::Playlist => "playlist",
                Resource::User => "user",
                Resource::Show => "show",
                Resource::Episode => "episode",
            }
        )
    }
}

impl FromStr for Resource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "artist" => Ok(Self::Artist),
            "album" => Ok(Self::Album),
            "track" => Ok(Self::Track),
            "playlist" => Ok(Self::Playlist),
            "user" => Ok(Self::User),
            "show" => Ok(Self::Show),
            "episode" => Ok(Self::Episode),
            other => Err(Error::InvalidArgument(
                "uri",
                format!("unknown spotify resource {other:?}"),
            )),
        }
    }
}

/// The resource identifier of, for example, an artist, album or track.
///
/// Example: spotify:track:6rqhFgbbKwnb9MLmUQDhG6
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uri {
    resource: Resource,
    id: String,
}

impl Uri {
    pub fn new<D: Display>(resource: Resource, id: D) -> Self {
        Self {
            resource,
            id: id.to_string(),
        }
    }

    /// Parse a share link such as `https://open.spotify.com/track/<id>?si=...`.
    pub fn from_url(url: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidArgument("url", format!("not a spotify share link: {url:?}"));

        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .ok_or_else(invalid)?;
        let rest = rest.strip_prefix(OPEN_SPOTIFY_HOST).ok_or_else(invalid)?;
        let path = rest.split(['?', '#']).next().unwrap_or_default();

        // Localized links carry an `intl-xx` segment before the resource
        let segments = path
            .split('/')
            .filter(|s| !s.is_empty() && !s.starts_with("intl-"))
            .collect::<Vec<_>>();

        match segments.as_slice() {
            [resource, id] if !id.is_empty() => Ok(Self::new(resource.parse()?, id)),
            _ => Err(invalid()),
        }
    }

    /// Id of the spotify uri
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Type of the spotify uri
    pub fn resource(&self) -> Resource {
        self.resource
    }
}

impl Display for Uri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "spotify:{}:{}", self.resource, self.id)
    }
}

impl FromStr for Uri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.splitn(3, ':').collect::<Vec<_>>().as_slice() {
            ["spotify", resource, id] if !id.is_empty() => Ok(Self::new(resource.parse()?, id)),
            _ => Err(Error::InvalidArgument(
                "uri",
                format!("expected `spotify:<type>:<id>` but got {s:?}"),
            )),
        }
    }
}

impl Serialize for Uri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

impl<'de> Deserialize<'de> for Uri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

/// Reduce a bare id, a spotify uri, or an open.spotify.com link to the bare id.
///
/// Uris and links must point at `expected`.
pub fn parse_id(value: &str, expected: Resource) -> Result<String, Error> {
    let uri = if value.starts_with("spotify:") {
        value.parse::<Uri>()?
    } else if value.starts_with("http://") || value.starts_with("https://") {
        Uri::from_url(value)?
    } else {
        return Ok(value.to_string());
    };

    if uri.resource() != expected {
        return Err(Error::InvalidArgument(
            "id",
            format!("expected a {expected} but {value:?} is a {}", uri.resource()),
        ));
    }
    Ok(uri.id)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_uri() {
        let uri: Uri = "spotify:track:6rqhFgbbKwnb9MLmUQDhG6".parse().unwrap();
        assert_eq!(uri.resource(), Resource::Track);
        assert_eq!(uri.id(), "6rqhFgbbKwnb9MLmUQDhG6");
        assert_eq!(uri.to_string(), "spotify:track:6rqhFgbbKwnb9MLmUQDhG6");
    }

    #[test]
    fn reject_malformed_uri() {
        assert!("spotify:track".parse::<Uri>().is_err());
        assert!("spotify:podcast:abc".parse::<Uri>().is_err());
        assert!("youtube:track:abc".parse::<Uri>().is_err());
    }

    #[test]
    fn parse_share_links() {
        let uri = Uri::from_url("https://open.spotify.com/artist/0OdUWJ0sBjDrqHygGUXeCF?si=abc").unwrap();
        assert_eq!(uri, Uri::new(Resource::Artist, "0OdUWJ0sBjDrqHygGUXeCF"));

        let uri = Uri::from_url("https://open.spotify.com/intl-de/track/6rqhFgbbKwnb9MLmUQDhG6").unwrap();
        assert_eq!(uri, Uri::new(Resource::Track, "6rqhFgbbKwnb9MLmUQDhG6"));

        assert!(Uri::from_url("https://example.com/track/abc").is_err());
        assert!(Uri::from_url("https://open.spotify.com/track").is_err());
    }

    #[test]
    fn ids_from_any_form() {
        assert_eq!(parse_id("abc", Resource::Artist).unwrap(), "abc");
        assert_eq!(parse_id("spotify:artist:abc", Resource::Artist).unwrap(), "abc");
        assert_eq!(
            parse_id("https://open.spotify.com/artist/abc", Resource::Artist).unwrap(),
            "abc"
        );
        assert!(matches!(
            parse_id("spotify:track:abc", Resource::Artist),
            Err(Error::InvalidArgument("id", _))
        ));
    }
}

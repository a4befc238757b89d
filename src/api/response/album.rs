use serde::{Deserialize, Deserializer};

use crate::{api::Uri, impl_paged};

use super::{ExternalUrls, Image, ReleaseDate, Restrictions, SimplifiedArtist};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlbumType {
    Album,
    Single,
    Compilation,
}

impl<'de> Deserialize<'de> for AlbumType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.to_ascii_lowercase().as_str() {
            "album" => Ok(Self::Album),
            "single" => Ok(Self::Single),
            "compilation" => Ok(Self::Compilation),
            _ => Err(serde::de::Error::custom(format!(
                "Invalid album type {s:?}: expected one of 'album', 'single' or 'compilation' (case-insensitive)"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SimplifiedAlbum {
    /// The type of the album.
    pub album_type: AlbumType,
    /// The number of tracks in the album.
    pub total_tracks: usize,
    /// The markets in which the album is available: [ISO 3166-1 alpha-2 country codes](http://en.wikipedia.org/wiki/ISO_3166-1_alpha-2). _**NOTE:**_ an album is considered available in a market when at least 1 of its tracks is available in that market.
    #[serde(default = "Vec::new")]
    pub available_markets: Vec<String>,
    /// Known external URLs for this album.
    pub external_urls: ExternalUrls,
    /// A link to the Web API endpoint providing full details of the album.
    pub href: String,
    /// The [Spotify ID](https://developer.spotify.com/documentation/web-api/concepts/spotify-uris-ids) for the album.
    pub id: String,
    /// The cover art for the album in various sizes, widest first.
    pub images: Vec<Image>,
    /// The name of the album. In case of an album takedown, the value may be an empty string.
    pub name: String,

    /// The date the album was first released.
    #[serde(flatten)]
    pub release: ReleaseDate,

    /// Included in the response when a content restriction is applied.
    pub restrictions: Option<Restrictions>,
    /// The [Spotify URI](https://developer.spotify.com/documentation/web-api/concepts/spotify-uris-ids) for the album.
    pub uri: Uri,
    /// The artists of the album. Each artist object includes a link in href to more detailed information about the artist.
    pub artists: Vec<SimplifiedArtist>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PagedAlbums {
    /// A link to the Web API endpoint returning the full result of the request
    pub href: String,
    /// The maximum number of items in the response (as set in the query or by default).
    pub limit: usize,
    /// URL to the next page of items. ( `null` if none)
    pub next: Option<String>,
    /// The offset of the items returned (as set in the query or by default)
    pub offset: usize,
    /// URL to the previous page of items. ( `null` if none)
    pub previous: Option<String>,
    /// The total number of items available to return.
    pub total: usize,
    pub items: Vec<SimplifiedAlbum>,
}
impl_paged!(PagedAlbums<SimplifiedAlbum>);

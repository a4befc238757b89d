use serde::Deserialize;

use crate::{api::Uri, impl_paged};

use super::{ExternalUrls, Followers, Image};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TracksLink {
    /// A link to the Web API endpoint where full details of the playlist's tracks can be retrieved.
    pub href: String,
    /// Number of tracks in the playlist.
    pub total: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Owner {
    /// Known public external URLs for this user.
    pub external_urls: ExternalUrls,
    /// Information about the followers of this user.
    pub followers: Option<Followers>,
    /// A link to the Web API endpoint for this user.
    pub href: String,
    /// The [Spotify user ID](https://developer.spotify.com/documentation/web-api/#spotify-uris-and-ids) for the user.
    pub id: String,
    /// The [Spotify URI](https://developer.spotify.com/documentation/web-api/#spotify-uris-and-ids) for the user.
    pub uri: Uri,
    /// The name displayed on the user's profile. null if not available.
    #[serde(rename = "display_name")]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SimplifiedPlaylist {
    /// true if the owner allows other users to modify the playlist.
    #[serde(default)]
    pub collaborative: bool,
    /// The playlist description. Only returned for modified, verified playlists, otherwise null.
    pub description: Option<String>,
    /// Known external URLs for this playlist.
    pub external_urls: ExternalUrls,
    /// A link to the Web API endpoint providing full details of the playlist.
    pub href: String,
    /// The [Spotify ID](https://developer.spotify.com/documentation/web-api/concepts/spotify-uris-ids) for the playlist.
    pub id: String,
    /// Images for the playlist. The array may be empty or contain up to three images.
    #[serde(default = "Vec::new")]
    pub images: Vec<Image>,
    /// The name of the playlist.
    pub name: String,
    /// The user who owns the playlist
    pub owner: Owner,
    /// The playlist's public/private status: true the playlist is public, false the playlist is private, null the playlist status is not relevant.
    pub public: Option<bool>,
    /// The version identifier for the current playlist.
    pub snapshot_id: String,
    pub tracks: TracksLink,
    /// The [Spotify URI](https://developer.spotify.com/documentation/web-api/concepts/spotify-uris-ids) for the playlist.
    pub uri: Uri,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PagedPlaylists {
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
    pub items: Vec<SimplifiedPlaylist>,
}
impl_paged!(PagedPlaylists<SimplifiedPlaylist>);

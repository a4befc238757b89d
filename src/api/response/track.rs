use serde::Deserialize;

use crate::api::Uri;

use super::{deserialize_duration, ExternalUrls, Restrictions, SimplifiedArtist};

/// The originally requested track when [Track Relinking](https://developer.spotify.com/documentation/web-api/concepts/track-relinking) replaced it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinkedTrack {
    pub external_urls: ExternalUrls,
    pub href: String,
    pub id: String,
    pub uri: Uri,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SimplifiedTrack {
    /// The artists who performed the track. Each artist object includes a link in href to more detailed information about the artist.
    pub artists: Vec<SimplifiedArtist>,
    /// A list of the countries in which the track can be played, identified by their [ISO 3166-1 alpha-2 country code](http://en.wikipedia.org/wiki/ISO_3166-1_alpha-2).
    #[serde(default = "Vec::new")]
    pub available_markets: Vec<String>,
    /// The disc number (usually 1 unless the album consists of more than one disc).
    pub disc_number: u32,
    /// The track length in milliseconds.
    #[serde(rename = "duration_ms", deserialize_with = "deserialize_duration")]
    pub duration: chrono::Duration,
    /// Whether or not the track has explicit lyrics ( true = yes it does; false = no it does not OR unknown).
    pub explicit: bool,
    /// Known external URLs for this track.
    pub external_urls: ExternalUrls,
    /// A link to the Web API endpoint providing full details of the track.
    pub href: String,
    /// The [Spotify ID](https://developer.spotify.com/documentation/web-api/concepts/spotify-uris-ids) for the track.
    pub id: String,
    /// Part of the response when [Track Relinking](https://developer.spotify.com/documentation/web-api/concepts/track-relinking) is applied. If true, the track is playable in the given market. Otherwise false.
    #[serde(default = "bool::default")]
    pub is_playable: bool,
    pub linked_from: Option<LinkedTrack>,
    /// Included in the response when a content restriction is applied.
    pub restrictions: Option<Restrictions>,
    /// The name of the track.
    pub name: String,
    /// A link to a 30 second preview (MP3 format) of the track.
    pub preview_url: Option<String>,
    /// The number of the track. If an album has several discs, the track number is the number on the specified disc.
    pub track_number: u32,
    /// The [Spotify URI](https://developer.spotify.com/documentation/web-api/concepts/spotify-uris-ids) for the track.
    pub uri: Uri,
    /// Whether or not the track is from a local file.
    #[serde(default)]
    pub is_local: bool,
}

#[cfg(test)]
mod test {
    use super::super::fixtures;
    use super::*;
    use crate::pares;

    #[test]
    fn duration_from_millis() {
        let track: SimplifiedTrack = pares!(fixtures::track("t1")).unwrap();
        assert_eq!(track.duration, chrono::Duration::milliseconds(215000));
        assert_eq!(track.track_number, 3);
        assert!(track.linked_from.is_none());
    }

    #[test]
    fn large_compilation_track_number() {
        let mut body = fixtures::track("t1");
        body["track_number"] = serde_json::json!(300);
        body["disc_number"] = serde_json::json!(12);

        let track: SimplifiedTrack = pares!(body).unwrap();
        assert_eq!(track.track_number, 300);
        assert_eq!(track.disc_number, 12);
    }
}

use serde::{Deserialize, Deserializer};

use super::SimplifiedTrack;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedType {
    Artist,
    Track,
    Genre,
}

impl<'de> Deserialize<'de> for SeedType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.to_ascii_lowercase().as_str() {
            "artist" => Ok(Self::Artist),
            "track" => Ok(Self::Track),
            "genre" => Ok(Self::Genre),
            _ => Err(serde::de::Error::custom(format!(
                "Invalid seed type {s:?}: expected one of 'artist', 'track' or 'genre' (case-insensitive)"
            ))),
        }
    }
}

/// A seed the recommendations were generated from
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSeed {
    /// The number of tracks available after min_* and max_* filters have been applied.
    pub after_filtering_size: usize,
    /// The number of tracks available after relinking for regional availability.
    pub after_relinking_size: usize,
    /// A link to the full track or artist data for this seed. For genre seeds, this value will be null.
    pub href: Option<String>,
    /// The id used to select this seed. This will be the same as the string used in the `seed_artists`, `seed_tracks` or `seed_genres` parameter.
    pub id: String,
    /// The number of recommended tracks available for this seed.
    pub initial_pool_size: usize,
    #[serde(rename = "type")]
    pub seed_type: SeedType,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recommendations {
    /// The seeds the recommendations were generated from, in request order.
    pub seeds: Vec<RecommendationSeed>,
    /// Recommended tracks, ordered by relevance.
    pub tracks: Vec<SimplifiedTrack>,
}

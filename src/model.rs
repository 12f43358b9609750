use chrono::{DateTime, Utc};
use url::Url;

/// A podcast listing from the directory.
///
/// Values are built by the wire→domain mapping and are not mutated
/// afterwards. URL fields are `None` when the API shipped a string that
/// does not parse as a URL; timestamps are truncated to whole seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Podcast {
    /// Identifier issued by the directory.
    pub id: String,
    pub title: String,
    pub image: Option<Url>,
    pub thumbnail: Option<Url>,
    pub total_episodes: u32,
    pub explicit_content: bool,
    pub description: String,
    /// Spoken language, e.g. `"English"`.
    pub language: String,
    /// Publisher country, e.g. `"United States"`.
    pub country: String,
    pub rss: Option<Url>,
    /// Publication time of the newest episode.
    pub latest_pub_date: DateTime<Utc>,
    /// Publication time of the oldest episode.
    pub earliest_pub_date: DateTime<Utc>,
}

/// A single episode of a podcast.
///
/// Carries no back-reference to its podcast; callers pass the `Podcast`
/// when requesting episodes and keep the association themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct Episode {
    pub id: String,
    pub title: String,
    pub description: String,
    pub pub_date: DateTime<Utc>,
    pub audio: Option<Url>,
    /// Audio duration in seconds.
    pub audio_length_sec: u32,
    pub image: Option<Url>,
    pub thumbnail: Option<Url>,
    /// Set when the directory could not confirm the audio link is playable.
    pub maybe_audio_invalid: bool,
    pub explicit_content: bool,
}

//! Wire-schema structs for the two Listen Notes reply shapes.
//!
//! Every field here is mandatory: a payload missing any of them fails the
//! whole decode. URL and timestamp fields stay raw (`String` / `i64`
//! milliseconds) until the mapping step, which converts them leniently —
//! an unparsable URL becomes `None` without sinking the record. Unknown
//! JSON keys are ignored.

use serde::Deserialize;

use crate::model::{Episode, Podcast};
use crate::util::{datetime_from_ms, lenient_url};

#[derive(Debug, Deserialize)]
pub(crate) struct BestPodcastsReply {
    podcasts: Vec<WirePodcast>,
}

impl BestPodcastsReply {
    /// Maps the reply into domain podcasts, preserving wire order.
    pub(crate) fn into_podcasts(self) -> Vec<Podcast> {
        self.podcasts
            .into_iter()
            .map(WirePodcast::into_podcast)
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct WirePodcast {
    id: String,
    title: String,
    image: String,
    thumbnail: String,
    total_episodes: u32,
    explicit_content: bool,
    description: String,
    language: String,
    country: String,
    rss: String,
    latest_pub_date_ms: i64,
    earliest_pub_date_ms: i64,
}

impl WirePodcast {
    fn into_podcast(self) -> Podcast {
        Podcast {
            id: self.id,
            title: self.title,
            image: lenient_url(&self.image),
            thumbnail: lenient_url(&self.thumbnail),
            total_episodes: self.total_episodes,
            explicit_content: self.explicit_content,
            description: self.description,
            language: self.language,
            country: self.country,
            rss: lenient_url(&self.rss),
            latest_pub_date: datetime_from_ms(self.latest_pub_date_ms),
            earliest_pub_date: datetime_from_ms(self.earliest_pub_date_ms),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PodcastEpisodesReply {
    episodes: Vec<WireEpisode>,
    // Decoded but unused; reserved for pagination continuation.
    #[allow(dead_code)]
    next_episode_pub_date: i64,
}

impl PodcastEpisodesReply {
    /// Maps the reply into domain episodes, preserving wire order.
    pub(crate) fn into_episodes(self) -> Vec<Episode> {
        self.episodes
            .into_iter()
            .map(WireEpisode::into_episode)
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct WireEpisode {
    id: String,
    title: String,
    description: String,
    pub_date_ms: i64,
    audio: String,
    audio_length_sec: u32,
    image: String,
    thumbnail: String,
    maybe_audio_invalid: bool,
    explicit_content: bool,
}

impl WireEpisode {
    fn into_episode(self) -> Episode {
        Episode {
            id: self.id,
            title: self.title,
            description: self.description,
            pub_date: datetime_from_ms(self.pub_date_ms),
            audio: lenient_url(&self.audio),
            audio_length_sec: self.audio_length_sec,
            image: lenient_url(&self.image),
            thumbnail: lenient_url(&self.thumbnail),
            maybe_audio_invalid: self.maybe_audio_invalid,
            explicit_content: self.explicit_content,
        }
    }
}

use anyhow::{Context, Result};
use log::debug;
use reqwest::Client as HttpClient;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};

use crate::config::load_config;
use crate::error::{Error, transport_from_status};
use crate::model::{Episode, Podcast};
use crate::wire::{BestPodcastsReply, PodcastEpisodesReply};

const API_KEY_HEADER: &str = "X-ListenAPI-Key";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base API URL, typically `https://listen-api.listennotes.com`.
    pub url: String,
    /// Listen Notes API key, sent on every request as `X-ListenAPI-Key`.
    pub key: String,
}

/// Client for the Listen Notes podcast directory.
///
/// Holds no mutable per-request state; one instance may serve any number
/// of concurrent calls. Each operation is a single GET round-trip, and
/// dropping the returned future aborts the in-flight request.
#[derive(Debug, Clone)]
pub struct Client {
    url: String,
    key: String,

    http: HttpClient,
}

impl Client {
    /// Creates a client using environment variables and/or `.listenapirc`.
    ///
    /// This is equivalent to `Client::new(None, None)`.
    pub fn from_env() -> Result<Self> {
        Self::new(None, None)
    }

    /// Creates a client using (in order of precedence):
    /// - explicit `url`/`key` arguments
    /// - environment variables `LISTENAPI_URL` / `LISTENAPI_KEY`
    /// - config file from `LISTENAPI_RC` or `.listenapirc`
    pub fn new(url: Option<String>, key: Option<String>) -> Result<Self> {
        let cfg = load_config(url, key)?;
        Self::with_config(cfg)
    }

    /// Creates a client from an explicit configuration value.
    pub fn with_config(cfg: ClientConfig) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("listenapi-rs/{}", env!("CARGO_PKG_VERSION")))
                .unwrap_or(HeaderValue::from_static("listenapi-rs")),
        );

        let http = HttpClient::builder()
            .default_headers(default_headers)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            url: cfg.url.trim_end_matches('/').to_string(),
            key: cfg.key,
            http,
        })
    }

    /// Fetches one page of the curated best-podcasts listing.
    ///
    /// `page` is passed through unvalidated; a server-side rejection
    /// surfaces as [`Error::Transport`] like any other non-2xx reply.
    pub async fn best_podcasts(&self, page: u32) -> Result<Vec<Podcast>, Error> {
        let request = self.build_best_podcasts(page)?;
        let url = request.url().to_string();
        let body = self.api_get(request).await?;

        let reply: BestPodcastsReply = decode(&url, &body)?;
        let podcasts = reply.into_podcasts();
        debug!("best_podcasts page={} -> {} podcast(s)", page, podcasts.len());
        Ok(podcasts)
    }

    /// Fetches the episodes of `podcast`, most recent first.
    pub async fn episodes(&self, podcast: &Podcast) -> Result<Vec<Episode>, Error> {
        let request = self.build_episodes(&podcast.id)?;
        let url = request.url().to_string();
        let body = self.api_get(request).await?;

        let reply: PodcastEpisodesReply = decode(&url, &body)?;
        let episodes = reply.into_episodes();
        debug!("episodes id={} -> {} episode(s)", podcast.id, episodes.len());
        Ok(episodes)
    }

    fn build_best_podcasts(&self, page: u32) -> Result<reqwest::Request, Error> {
        let page = page.to_string();
        self.get(&format!("{}/api/v2/best_podcasts", self.url))
            .query(&[("page", page.as_str()), ("region", "us"), ("safe_mode", "0")])
            .build()
            .map_err(|e| Error::transport(format!("failed to build request: {e}")))
    }

    fn build_episodes(&self, podcast_id: &str) -> Result<reqwest::Request, Error> {
        self.get(&format!("{}/api/v2/podcasts/{}", self.url, podcast_id))
            .query(&[("sort", "recent_first")])
            .build()
            .map_err(|e| Error::transport(format!("failed to build request: {e}")))
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.key)
    }

    /// Executes the request and returns the body of a 2xx reply.
    async fn api_get(&self, request: reqwest::Request) -> Result<String, Error> {
        let url = request.url().to_string();
        debug!("GET {}", url);

        let resp = self
            .http
            .execute(request)
            .await
            .map_err(|e| Error::transport(format!("could not connect: {e}")))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| Error::transport(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            return Err(transport_from_status(status, &url, &text));
        }

        Ok(text)
    }
}

fn decode<T: serde::de::DeserializeOwned>(url: &str, body: &str) -> Result<T, Error> {
    serde_json::from_str(body).map_err(|source| Error::Decode {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    fn client() -> Client {
        Client::with_config(ClientConfig {
            url: "https://listen-api.listennotes.com".to_string(),
            key: "test-key".to_string(),
        })
        .unwrap()
    }

    fn query_pairs(req: &reqwest::Request) -> Vec<(String, String)> {
        req.url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn best_podcasts_request_shape() {
        let req = client().build_best_podcasts(7).unwrap();
        assert_eq!(req.method(), &Method::GET);
        assert_eq!(req.url().path(), "/api/v2/best_podcasts");
        assert_eq!(
            query_pairs(&req),
            vec![
                ("page".to_string(), "7".to_string()),
                ("region".to_string(), "us".to_string()),
                ("safe_mode".to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn best_podcasts_page_is_passed_through_verbatim() {
        let req = client().build_best_podcasts(0).unwrap();
        assert!(req.url().query().unwrap().contains("page=0"));
    }

    #[test]
    fn episodes_request_shape() {
        let req = client().build_episodes("abc123").unwrap();
        assert_eq!(req.method(), &Method::GET);
        assert_eq!(req.url().path(), "/api/v2/podcasts/abc123");
        assert_eq!(
            query_pairs(&req),
            vec![("sort".to_string(), "recent_first".to_string())]
        );
    }

    #[test]
    fn requests_carry_key_and_content_type_headers() {
        let req = client().build_best_podcasts(1).unwrap();
        assert_eq!(req.headers().get(API_KEY_HEADER).unwrap(), "test-key");
        assert_eq!(req.headers().get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn trailing_slash_is_stripped_from_base_url() {
        let client = Client::with_config(ClientConfig {
            url: "http://localhost:3000/".to_string(),
            key: "k".to_string(),
        })
        .unwrap();
        let req = client.build_best_podcasts(1).unwrap();
        assert_eq!(req.url().path(), "/api/v2/best_podcasts");
        assert_eq!(req.url().host_str(), Some("localhost"));
    }
}

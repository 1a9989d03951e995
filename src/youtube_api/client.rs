//! Core YouTube API client functionality and request plumbing.

use crate::youtube_api::search::{SearchListResponse, SearchOrder};
use crate::youtube_api::videos::VideoListResponse;
use eyre::Context;
use tracing::instrument;

/// Client for interacting with the YouTube Data API v3.
///
/// All calls authenticate with an API key sent as the `key` query parameter;
/// no OAuth flow or per-user credentials are involved. The client is cheap to
/// clone since [`reqwest::Client`] is internally reference-counted.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    /// HTTP client for API requests
    http: reqwest::Client,
    /// API key appended to every request
    api_key: String,
    /// Full URL of the `search.list` endpoint
    base_url: String,
}

impl YouTubeClient {
    /// Creates a new client from an API key and the search endpoint URL.
    ///
    /// `base_url` is the full URL of the `search.list` endpoint (normally
    /// `https://www.googleapis.com/youtube/v3/search`); the statistics
    /// endpoint is derived from it, see [`Self::list_statistics`].
    pub fn new(api_key: String, base_url: String, http: reqwest::Client) -> Self {
        Self {
            http,
            api_key,
            base_url,
        }
    }

    /// Searches for videos matching `query`.
    ///
    /// Uses the `search.list` API with `type=video`, requesting a single page
    /// of at most `max_results` items ranked by `order`. When `channel_id` is
    /// given, results are restricted to that channel. The remote ranking is
    /// returned as-is; no client-side re-sort happens anywhere downstream.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/search/list>
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        query: &str,
        max_results: u32,
        order: SearchOrder,
        channel_id: Option<&str>,
    ) -> eyre::Result<SearchListResponse> {
        let max_results_string = max_results.to_string();
        let order_string = order.to_string();
        let mut query_params = vec![
            ("part", "snippet"),
            ("q", query),
            ("type", "video"),
            ("maxResults", max_results_string.as_str()),
            ("order", order_string.as_str()),
        ];
        if let Some(channel_id) = channel_id {
            query_params.push(("channelId", channel_id));
        }

        let body = self.request_json(&self.base_url, &query_params).await?;
        let results: SearchListResponse =
            serde_json::from_value(body).context("parse YouTube search API response as JSON")?;

        tracing::debug!(
            query,
            returned_items = results.items.len(),
            "fetched search results"
        );

        Ok(results)
    }

    /// Fetches statistics for a batch of videos in one request.
    ///
    /// Uses the `videos.list` API with `part=statistics` and a comma-joined
    /// id list. The endpoint URL is derived from the configured search URL by
    /// substituting `search` with `videos`, the two resources being siblings
    /// in the API's path layout.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/videos/list>
    #[instrument(skip(self))]
    pub async fn list_statistics(&self, video_ids: &[String]) -> eyre::Result<VideoListResponse> {
        let url = self.base_url.replace("search", "videos");
        let ids = video_ids.join(",");
        let query_params = [("part", "statistics"), ("id", ids.as_str())];

        let body = self.request_json(&url, &query_params).await?;
        let videos: VideoListResponse =
            serde_json::from_value(body).context("parse YouTube videos API response as JSON")?;

        tracing::debug!(
            requested = video_ids.len(),
            returned_items = videos.items.len(),
            "fetched video statistics"
        );

        Ok(videos)
    }

    /// Makes a GET request to the YouTube API with common error handling.
    ///
    /// This method consolidates the shared logic across all API requests:
    /// - API key query parameter
    /// - Status code validation
    /// - Detection of `error` payloads embedded in 2xx bodies
    ///
    /// The error message is the remote `error.message` when the body carries
    /// one, and `HTTP Error: <status>` otherwise, so callers can surface it
    /// to the user directly.
    async fn request_json(
        &self,
        url: &str,
        query_params: &[(&str, &str)],
    ) -> eyre::Result<serde_json::Value> {
        let response = self
            .http
            .get(url)
            .query(query_params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .with_context(|| format!("send GET request to YouTube API: {url}"))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .context("read YouTube API response body")?;

        let body: serde_json::Value = match serde_json::from_str(&text) {
            Ok(body) => body,
            Err(_) if !status.is_success() => eyre::bail!("HTTP Error: {}", status.as_u16()),
            Err(e) => return Err(e).context("parse YouTube API response as JSON"),
        };

        // The API reports some failures inside a 2xx body, so the embedded
        // error object takes precedence over the status line.
        if let Some(message) = body.pointer("/error/message").and_then(|m| m.as_str()) {
            eyre::bail!("{message}");
        }
        if !status.is_success() {
            eyre::bail!("HTTP Error: {}", status.as_u16());
        }

        Ok(body)
    }
}

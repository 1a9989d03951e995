//! Session state for the browsing screens.
//!
//! [`VideoProvider`] exclusively owns everything the screens render: the
//! categorized home feed (backed by a durable cache), the free-text search
//! results, the loading and error flags, and the selected-video detail
//! snapshot. Screens read through accessors and mutate only by invoking the
//! fetch and selection operations; they never hold state derived from
//! network results themselves.
//!
//! All operations run to completion sequentially on the caller's task. The
//! user-visible error is a single string message, last writer wins.

use crate::config::Config;
use crate::storage::Storage;
use crate::youtube_api::{SearchOrder, VideoItem, VideoStatistics, YouTubeClient};
use indexmap::IndexMap;
use jiff::Timestamp;
use std::collections::HashMap;

/// Home-feed categories, always processed in this order.
pub const CATEGORIES: [&str; 3] = ["REACT-NATIVE", "REACT", "TYPESCRIPT"];

/// Page size requested per category.
const VIDEOS_PER_CATEGORY: u32 = 5;

/// Storage key holding the serialized categorized mapping.
const CACHE_KEY: &str = "@CategorizedVideosCache";

/// Message surfaced when the API key or endpoint URL is not configured.
const MISSING_CONFIG: &str = "No API_KEY or BASE_URL";

/// Mapping from each category label to its ranked videos.
///
/// Iteration order is the fixed category order. After a fully successful
/// fetch every category key is present; after a partial failure the failing
/// category maps to an empty list and categories past the abort point are
/// absent, which consumers must tolerate.
pub type CategorizedVideos = IndexMap<String, Vec<VideoItem>>;

/// Options for a free-text search pass.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// The search query.
    pub query: String,
    /// Result-count cap, sent as `maxResults`.
    pub max_results: u32,
    /// Result ordering.
    pub order: SearchOrder,
    /// Restrict results to one channel.
    pub channel_id: Option<String>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            query: "React Native".to_owned(),
            max_results: 10,
            order: SearchOrder::Relevance,
            channel_id: None,
        }
    }
}

/// Denormalized projection of one video, driving the detail view.
///
/// Created on selection and discarded when the modal closes. It holds copies
/// of the selected video's fields, so the source list stays untouched and
/// reselecting the same video rebuilds the snapshot from scratch.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedVideo {
    pub video_id: String,
    pub title: String,
    pub channel_title: String,
    pub published_at: Timestamp,
    pub description: String,
    pub view_count: Option<String>,
    pub like_count: Option<String>,
    pub comment_count: Option<String>,
}

/// Owner of all mutable browsing state.
///
/// Generic over the [`Storage`] backing the home-feed cache so tests can
/// inject an in-memory store.
pub struct VideoProvider<S> {
    /// Present only when both configuration values were available.
    client: Option<YouTubeClient>,
    storage: S,
    videos: Vec<VideoItem>,
    loading: bool,
    error: Option<String>,
    categorized_videos: Option<CategorizedVideos>,
    cache_loading: bool,
    selected_video: Option<SelectedVideo>,
    video_modal_visible: bool,
}

impl<S: Storage> VideoProvider<S> {
    pub fn new(config: &Config, storage: S) -> Self {
        Self {
            client: config.client(reqwest::Client::new()),
            storage,
            videos: Vec::new(),
            loading: false,
            error: None,
            categorized_videos: None,
            cache_loading: false,
            selected_video: None,
            video_modal_visible: false,
        }
    }

    /// The current free-text search results, in remote ranking order.
    pub fn videos(&self) -> &[VideoItem] {
        &self.videos
    }

    /// Whether a search pass is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The last error message, if the most recent pass failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The published home-feed mapping, once a fetch has produced one.
    pub fn categorized_videos(&self) -> Option<&CategorizedVideos> {
        self.categorized_videos.as_ref()
    }

    /// Whether a home-feed pass is in flight.
    pub fn is_cache_loading(&self) -> bool {
        self.cache_loading
    }

    /// The detail snapshot for the currently selected video.
    pub fn selected_video(&self) -> Option<&SelectedVideo> {
        self.selected_video.as_ref()
    }

    /// Whether the detail view is open.
    pub fn is_video_modal_visible(&self) -> bool {
        self.video_modal_visible
    }

    /// Populate the home-feed mapping, preferring the durable cache.
    ///
    /// A cached mapping is adopted verbatim with no staleness check; the
    /// only invalidation is deleting the stored blob externally. On a cache
    /// miss each category is searched in fixed order, ranked by view count
    /// on the remote side. The first category failure records an empty list
    /// for that category, captures its message as the error, and abandons
    /// the loop, so later categories stay absent from the published mapping.
    /// A fully successful pass is enriched with statistics in one batched
    /// request and persisted best-effort; a partial pass is published as-is
    /// and never cached, so the next session retries.
    pub async fn fetch_categorized_videos(&mut self) {
        self.cache_loading = true;
        self.error = None;

        if let Some(cached) = self.load_cached_videos().await {
            self.categorized_videos = Some(cached);
            self.cache_loading = false;
            return;
        }

        let Some(client) = self.client.clone() else {
            self.error = Some(MISSING_CONFIG.to_owned());
            self.cache_loading = false;
            return;
        };

        let mut fresh = CategorizedVideos::new();
        let mut all_succeeded = true;
        let mut all_video_ids = Vec::new();

        for category in CATEGORIES {
            match client
                .search(category, VIDEOS_PER_CATEGORY, SearchOrder::ViewCount, None)
                .await
            {
                Ok(response) => {
                    all_video_ids.extend(
                        response
                            .items
                            .iter()
                            .filter_map(|video| video.id.video_id.clone()),
                    );
                    fresh.insert(category.to_owned(), response.items);
                }
                Err(e) => {
                    tracing::error!(category, error = %e, "failed to load category");
                    fresh.insert(category.to_owned(), Vec::new());
                    self.error = Some(e.to_string());
                    all_succeeded = false;
                    break;
                }
            }
        }

        if all_succeeded && !fresh.is_empty() {
            let stats = fetch_statistics_for_videos(&client, &all_video_ids).await;
            for videos in fresh.values_mut() {
                merge_statistics(videos, &stats);
            }
            self.save_cached_videos(&fresh).await;
            self.categorized_videos = Some(fresh);
        } else if !fresh.is_empty() {
            self.categorized_videos = Some(fresh);
        }

        self.cache_loading = false;
    }

    /// Run a free-text search and publish the enriched results.
    ///
    /// The remote ranking is preserved as-is. Enrichment always runs when
    /// the search returned any video ids; its failure degrades to results
    /// without statistics. A failed search clears the previous result list
    /// so stale results are never shown next to a fresh error.
    pub async fn fetch_videos(&mut self, options: SearchOptions) {
        let Some(client) = self.client.clone() else {
            self.error = Some(MISSING_CONFIG.to_owned());
            return;
        };

        self.loading = true;
        self.error = None;

        match client
            .search(
                &options.query,
                options.max_results,
                options.order,
                options.channel_id.as_deref(),
            )
            .await
        {
            Ok(response) => {
                let mut results = response.items;
                let video_ids: Vec<String> = results
                    .iter()
                    .filter_map(|video| video.id.video_id.clone())
                    .collect();
                if !video_ids.is_empty() {
                    let stats = fetch_statistics_for_videos(&client, &video_ids).await;
                    merge_statistics(&mut results, &stats);
                }
                self.videos = results;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load search results");
                self.error = Some(e.to_string());
                self.videos.clear();
            }
        }

        self.loading = false;
    }

    /// Open the detail view for `video`, replacing any previous selection.
    pub fn select_video(&mut self, video: &VideoItem) {
        let statistics = video.statistics.as_ref();
        self.selected_video = Some(SelectedVideo {
            video_id: video.id.video_id.clone().unwrap_or_default(),
            title: video.snippet.title.clone(),
            channel_title: video.snippet.channel_title.clone(),
            published_at: video.snippet.published_at,
            description: video.snippet.description.clone(),
            view_count: statistics.and_then(|s| s.view_count.clone()),
            like_count: statistics.and_then(|s| s.like_count.clone()),
            comment_count: statistics.and_then(|s| s.comment_count.clone()),
        });
        self.video_modal_visible = true;
    }

    /// Close the detail view and discard the snapshot.
    pub fn close_video_modal(&mut self) {
        self.video_modal_visible = false;
        self.selected_video = None;
    }

    async fn load_cached_videos(&self) -> Option<CategorizedVideos> {
        let blob = match self.storage.get(CACHE_KEY).await {
            Ok(blob) => blob?,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read cached videos");
                return None;
            }
        };
        match serde_json::from_str(&blob) {
            Ok(cached) => {
                tracing::debug!("loaded categorized videos from cache");
                Some(cached)
            }
            Err(e) => {
                // A corrupt cache is a miss, not an error; the pass refetches.
                tracing::warn!(error = %e, "failed to parse cached videos");
                None
            }
        }
    }

    async fn save_cached_videos(&self, videos: &CategorizedVideos) {
        let blob = match serde_json::to_string(videos) {
            Ok(blob) => blob,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize videos for caching");
                return;
            }
        };
        if let Err(e) = self.storage.set(CACHE_KEY, &blob).await {
            tracing::warn!(error = %e, "failed to write cached videos");
        } else {
            tracing::debug!("saved categorized videos to cache");
        }
    }
}

/// Fetch view/like/comment counts for a batch of videos in one request.
///
/// Enrichment is best-effort: any fetch or parse failure is logged and
/// degrades to an empty map, never a fatal error for the calling pass.
async fn fetch_statistics_for_videos(
    client: &YouTubeClient,
    video_ids: &[String],
) -> HashMap<String, VideoStatistics> {
    if video_ids.is_empty() {
        return HashMap::new();
    }
    match client.list_statistics(video_ids).await {
        Ok(response) => response
            .items
            .into_iter()
            .filter_map(|video| Some((video.id, video.statistics?)))
            .collect(),
        Err(e) => {
            tracing::error!(error = %e, "failed to fetch video statistics");
            HashMap::new()
        }
    }
}

/// Merge fetched statistics into videos by id.
///
/// Videos whose id has no entry in `stats` keep whatever statistics they
/// already had.
fn merge_statistics(videos: &mut [VideoItem], stats: &HashMap<String, VideoStatistics>) {
    for video in videos {
        if let Some(video_id) = video.id.video_id.as_deref()
            && let Some(found) = stats.get(video_id)
        {
            video.statistics = Some(found.clone());
        }
    }
}

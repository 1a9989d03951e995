//! YouTube Data API v3 client library.
//!
//! Typed client for the two endpoints this crate consumes: `search.list` for
//! the category and free-text queries, and `videos.list` for the statistics
//! enrichment pass. All requests authenticate with an API key passed as a
//! query parameter; responses are validated into typed models at this
//! boundary, and failures (transport errors, non-2xx statuses, or an `error`
//! payload embedded in a 2xx body) surface as errors carrying the remote
//! message where one is available.

pub mod client;
pub mod search;
pub mod types;
pub mod videos;

// Re-export main types for convenience
pub use client::YouTubeClient;
pub use search::{
    SearchListResponse, SearchOrder, Thumbnail, Thumbnails, VideoId, VideoItem, VideoSnippet,
};
pub use types::PageInfo;
pub use videos::{Video, VideoListResponse, VideoStatistics};

//! Core of a YouTube browsing app, minus the screens.
//!
//! The crate provides everything such an app needs behind its UI:
//!
//! - [`AuthGate`]: a guest-login gate with a durably recorded flag.
//! - [`VideoProvider`]: the single owner of all browsing state, covering the
//!   categorized home feed (served from a durable cache when one exists),
//!   free-text search with statistics enrichment, and the selected-video
//!   detail snapshot.
//! - [`youtube_api`]: a typed YouTube Data API v3 client for the `search`
//!   and `videos` endpoints.
//! - [`Storage`]: the key-value persistence seam, with file-backed and
//!   in-memory implementations.
//!
//! Screens are expected to hold a `VideoProvider`, read state through its
//! accessors, and trigger fetches from user events. All operations run
//! sequentially to completion; there is no background work.

pub mod auth;
pub mod config;
pub mod provider;
pub mod storage;
pub mod youtube_api;

pub use auth::AuthGate;
pub use config::Config;
pub use provider::{CATEGORIES, CategorizedVideos, SearchOptions, SelectedVideo, VideoProvider};
pub use storage::{FileStore, MemoryStore, Storage};
pub use youtube_api::{SearchOrder, VideoItem, YouTubeClient};

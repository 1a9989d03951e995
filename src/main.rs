use std::io::IsTerminal;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tubefeed::{AuthGate, Config, FileStore, SearchOptions, VideoProvider};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_ansi(std::io::stdout().is_terminal())
        .init();

    let config = Config::from_env();
    let store = FileStore::in_data_dir().unwrap_or_else(|| FileStore::new("."));

    let mut gate = AuthGate::restore(store.clone()).await;
    if !gate.is_logged_in() {
        gate.guest_login().await;
    }

    let mut provider = VideoProvider::new(&config, store);

    provider.fetch_categorized_videos().await;
    if let Some(error) = provider.error() {
        eprintln!("home feed failed: {error}");
    }
    if let Some(categorized) = provider.categorized_videos() {
        for (category, videos) in categorized {
            eprintln!("==> {category}");
            for video in videos {
                let views = video
                    .statistics
                    .as_ref()
                    .and_then(|stats| stats.view_count.as_deref())
                    .unwrap_or("N/A");
                eprintln!("  {views:>12} views  {}", video.snippet.title);
            }
        }
    }

    if let Some(query) = std::env::args().nth(1) {
        provider
            .fetch_videos(SearchOptions {
                query: query.clone(),
                ..SearchOptions::default()
            })
            .await;
        if let Some(error) = provider.error() {
            eprintln!("search failed: {error}");
        }
        eprintln!("==> results for {query:?}");
        for video in provider.videos() {
            let views = video
                .statistics
                .as_ref()
                .and_then(|stats| stats.view_count.as_deref())
                .unwrap_or("N/A");
            eprintln!("  {views:>12} views  {}", video.snippet.title);
        }
    }

    Ok(())
}

//! Configuration sourced from the environment.

use crate::youtube_api::YouTubeClient;

/// External configuration for the YouTube Data API.
///
/// Both values come from the environment: `API_KEY` holds the Data API key
/// and `BASE_URL` the full URL of the `search.list` endpoint. Either may be
/// absent; that is a recoverable configuration error surfaced by the
/// routines that need the network, not a crash at startup.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// YouTube Data API key.
    pub api_key: Option<String>,
    /// Full URL of the `search.list` endpoint.
    pub base_url: Option<String>,
}

impl Config {
    /// Reads `API_KEY` and `BASE_URL` from the process environment.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("API_KEY").ok().filter(|v| !v.is_empty()),
            base_url: std::env::var("BASE_URL").ok().filter(|v| !v.is_empty()),
        }
    }

    /// Build an API client, when both required values are present.
    pub fn client(&self, http: reqwest::Client) -> Option<YouTubeClient> {
        match (&self.api_key, &self.base_url) {
            (Some(api_key), Some(base_url)) => Some(YouTubeClient::new(
                api_key.clone(),
                base_url.clone(),
                http,
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_requires_both_values() {
        let http = reqwest::Client::new();

        assert!(Config::default().client(http.clone()).is_none());
        assert!(
            Config {
                api_key: Some("k".into()),
                base_url: None,
            }
            .client(http.clone())
            .is_none()
        );
        assert!(
            Config {
                api_key: None,
                base_url: Some("https://example.com/search".into()),
            }
            .client(http.clone())
            .is_none()
        );
        assert!(
            Config {
                api_key: Some("k".into()),
                base_url: Some("https://example.com/search".into()),
            }
            .client(http)
            .is_some()
        );
    }
}

//! Shared types for the YouTube API client.

/// Paging details for lists of resources.
///
/// Includes the total number of items available and the number of resources
/// returned in a single page response.
///
/// See: <https://developers.google.com/youtube/v3/docs/pageInfo>
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PageInfo {
    /// The total number of results in the result set.
    #[serde(rename = "totalResults")]
    pub total_results: u32,
    /// The number of results included in the API response.
    #[serde(rename = "resultsPerPage")]
    pub results_per_page: u32,
}

//! YouTube Videos API types used for statistics enrichment.

use crate::youtube_api::types::PageInfo;
use serde::{Deserialize, Serialize};

/// Response structure for the `videos.list` API call.
///
/// Contains a list of [`Video`] resources that match the requested ids,
/// along with pagination information in [`PageInfo`].
///
/// See: <https://developers.google.com/youtube/v3/docs/videos/list>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#videoListResponse`.
    pub kind: String,
    /// A list of videos that match the request criteria.
    #[serde(default)]
    pub items: Vec<Video>,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
    /// Token that can be used as the value of the pageToken parameter to retrieve the next page in the result set.
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// A `video` resource, reduced to the statistics this crate reads.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#resource>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    /// The ID that YouTube uses to uniquely identify the video.
    pub id: String,
    /// Contains statistics about the video.
    ///
    /// May be absent for videos the API returned without statistics; such
    /// entries are skipped by the enrichment merge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<VideoStatistics>,
}

/// Statistics about the video, as decimal strings.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#statistics>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoStatistics {
    /// The number of times the video has been viewed.
    #[serde(rename = "viewCount", default, skip_serializing_if = "Option::is_none")]
    pub view_count: Option<String>,
    /// The number of users who have indicated that they liked the video.
    #[serde(rename = "likeCount", default, skip_serializing_if = "Option::is_none")]
    pub like_count: Option<String>,
    /// The number of comments for the video.
    #[serde(
        rename = "commentCount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub comment_count: Option<String>,
}

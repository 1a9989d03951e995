//! YouTube Search API types.

use crate::youtube_api::types::PageInfo;
use crate::youtube_api::videos::VideoStatistics;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Response structure for the `search.list` API call.
///
/// Contains a list of [`VideoItem`] resources that match the search criteria,
/// along with pagination information in [`PageInfo`].
///
/// See: <https://developers.google.com/youtube/v3/docs/search/list>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#searchListResponse`.
    pub kind: String,
    /// A list of results that match the search criteria.
    #[serde(default)]
    pub items: Vec<VideoItem>,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
    /// Token that can be used as the value of the pageToken parameter to retrieve the next page in the result set.
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// A search result representing a YouTube video.
///
/// The snippet is immutable once fetched. `statistics` is not part of the
/// search response; it starts out absent and is merged in by the statistics
/// enrichment pass, keyed by video id.
///
/// See: <https://developers.google.com/youtube/v3/docs/search#resource>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoItem {
    /// Identifies the matched resource.
    pub id: VideoId,
    /// Contains basic details about the video.
    pub snippet: VideoSnippet,
    /// View/like/comment counts merged in after fetching, if enrichment ran
    /// and the statistics response contained this video's id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<VideoStatistics>,
}

/// Identifier of one search result.
///
/// See: <https://developers.google.com/youtube/v3/docs/search#id>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoId {
    /// The type of the API resource, e.g. `youtube#video`.
    pub kind: String,
    /// The ID that YouTube uses to uniquely identify the video.
    ///
    /// Present when the matched resource is a video, which all requests made
    /// by this crate ask for via `type=video`.
    #[serde(rename = "videoId", default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

/// The snippet object contains basic details about the matched video.
///
/// This is a subset of the full snippet data available from the YouTube API,
/// containing only the fields currently needed by this implementation.
///
/// See: <https://developers.google.com/youtube/v3/docs/search#snippet>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    /// The date and time that the video was published.
    ///
    /// The value is specified in ISO 8601 format.
    pub published_at: Timestamp,
    /// The ID of the channel that published the video.
    pub channel_id: String,
    /// The video's title.
    pub title: String,
    /// A description of the video.
    pub description: String,
    /// The title of the channel that published the video.
    pub channel_title: String,
    /// Thumbnail images at the three standard resolutions.
    ///
    /// May be absent for results the API returns without thumbnails.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<Thumbnails>,
    /// Whether the video is an upcoming or active live broadcast.
    ///
    /// The value is `upcoming`, `live`, or `none`.
    pub live_broadcast_content: String,
    /// The date and time that the video was published.
    ///
    /// For search results this carries the same value as `published_at`.
    pub publish_time: Timestamp,
}

/// Thumbnail images associated with a search result.
///
/// See: <https://developers.google.com/youtube/v3/docs/search#snippet.thumbnails>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thumbnails {
    /// The default thumbnail image, 120x90 for videos.
    pub default: Thumbnail,
    /// A higher resolution version, 320x180 for videos.
    pub medium: Thumbnail,
    /// A high resolution version, 480x360 for videos.
    pub high: Thumbnail,
}

/// A single thumbnail image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thumbnail {
    /// The image's URL.
    pub url: String,
    /// The image's width in pixels.
    pub width: u32,
    /// The image's height in pixels.
    pub height: u32,
}

/// Result ordering for the `search.list` call.
///
/// See: <https://developers.google.com/youtube/v3/docs/search/list#order>
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchOrder {
    /// Reverse chronological order (newest first).
    Date,
    /// Highest view count first.
    ViewCount,
    /// Relevance to the search query.
    #[default]
    Relevance,
    /// Oldest first.
    ///
    /// Not among the documented `order` values; the value is sent on the
    /// wire verbatim and the API decides what to do with it.
    Oldest,
}

impl fmt::Display for SearchOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date => write!(f, "date"),
            Self::ViewCount => write!(f, "viewCount"),
            Self::Relevance => write!(f, "relevance"),
            Self::Oldest => write!(f, "oldest"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn search_order_wire_values() {
        assert_eq!(SearchOrder::Date.to_string(), "date");
        assert_eq!(SearchOrder::ViewCount.to_string(), "viewCount");
        assert_eq!(SearchOrder::Relevance.to_string(), "relevance");
        assert_eq!(SearchOrder::Oldest.to_string(), "oldest");

        // the serde representation matches the query-parameter form
        assert_eq!(
            serde_json::to_value(SearchOrder::ViewCount).unwrap(),
            json!("viewCount")
        );
    }

    #[test]
    fn search_order_defaults_to_relevance() {
        assert_eq!(SearchOrder::default(), SearchOrder::Relevance);
    }

    #[test]
    fn video_item_parses_api_shape() {
        let item: VideoItem = serde_json::from_value(json!({
            "id": { "kind": "youtube#video", "videoId": "dQw4w9WgXcQ" },
            "snippet": {
                "publishedAt": "2024-05-01T10:00:00Z",
                "channelId": "UC-chan",
                "title": "A title",
                "description": "A description",
                "channelTitle": "A channel",
                "thumbnails": {
                    "default": { "url": "https://i.ytimg.com/d.jpg", "width": 120, "height": 90 },
                    "medium": { "url": "https://i.ytimg.com/m.jpg", "width": 320, "height": 180 },
                    "high": { "url": "https://i.ytimg.com/h.jpg", "width": 480, "height": 360 }
                },
                "liveBroadcastContent": "none",
                "publishTime": "2024-05-01T10:00:00Z"
            }
        }))
        .expect("valid search item");

        assert_eq!(item.id.video_id.as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(item.snippet.channel_title, "A channel");
        assert_eq!(item.statistics, None);
        assert_eq!(
            item.snippet.thumbnails.as_ref().map(|t| t.medium.width),
            Some(320)
        );
    }

    #[test]
    fn video_item_round_trips_camel_case_keys() {
        let item: VideoItem = serde_json::from_value(json!({
            "id": { "kind": "youtube#video", "videoId": "abc" },
            "snippet": {
                "publishedAt": "2024-05-01T10:00:00Z",
                "channelId": "UC-chan",
                "title": "t",
                "description": "d",
                "channelTitle": "c",
                "liveBroadcastContent": "none",
                "publishTime": "2024-05-01T10:00:00Z"
            }
        }))
        .expect("valid search item");

        let value = serde_json::to_value(&item).expect("serializable");
        assert!(value.pointer("/snippet/channelTitle").is_some());
        assert!(value.pointer("/snippet/publishTime").is_some());
        // absent optional fields stay out of the serialized blob
        assert!(value.pointer("/snippet/thumbnails").is_none());
        assert!(value.pointer("/statistics").is_none());
    }

    #[test]
    fn missing_items_defaults_to_empty() {
        let response: SearchListResponse = serde_json::from_value(json!({
            "kind": "youtube#searchListResponse",
            "pageInfo": { "totalResults": 0, "resultsPerPage": 0 }
        }))
        .expect("valid response");
        assert!(response.items.is_empty());
    }
}

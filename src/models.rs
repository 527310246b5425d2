use serde::{Deserialize, Serialize};

use crate::date::DateFormatter;
use crate::error::DateError;
use crate::reading_time::ReadingTimeEstimator;

/// One fragment of a rich-text block body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTextSpan {
    #[serde(default)]
    pub text: String,
}

/// A section of post content as returned by the content API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawContentBlock {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub body: Vec<RawTextSpan>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPostData {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub author: Option<String>,
}

/// A listing record from the content API.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPost {
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub first_publication_date: Option<String>,
    #[serde(default)]
    pub data: RawPostData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBanner {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPostDetailData {
    pub title: Option<String>,
    #[serde(default)]
    pub banner: RawBanner,
    pub author: Option<String>,
    #[serde(default)]
    pub content: Vec<RawContentBlock>,
}

/// A single-post response from the content API.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPostDetail {
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub first_publication_date: Option<String>,
    #[serde(default)]
    pub data: RawPostDetailData,
}

/// One page of a paginated listing query.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFeedResponse {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub results_per_page: Option<u32>,
    #[serde(default)]
    pub total_results_size: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub results: Vec<RawPost>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSlugRecord {
    #[serde(default)]
    pub slugs: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPathsResponse {
    #[serde(default)]
    pub results: Vec<RawSlugRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: Option<String>,
    pub publication_date: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDetail {
    /// Raw ISO 8601 timestamp, formatted at render time.
    pub publication_date: Option<String>,
    pub title: String,
    pub banner_url: String,
    pub author: String,
    pub content: Vec<RawContentBlock>,
}

impl PostDetail {
    pub fn reading_time(&self, estimator: &ReadingTimeEstimator) -> u32 {
        estimator.estimate(&self.content)
    }

    pub fn formatted_date(&self, dates: &DateFormatter) -> Result<Option<String>, DateError> {
        dates.detail(self.publication_date.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedPage {
    pub next_page_token: Option<String>,
    pub results: Vec<PostSummary>,
}

impl FeedPage {
    pub fn new(next_page_token: Option<String>, results: Vec<PostSummary>) -> Self {
        Self {
            next_page_token,
            results,
        }
    }

    /// True when the token points at another page.
    pub fn has_next(&self) -> bool {
        self.next_page_token
            .as_deref()
            .map_or(false, |token| !token.is_empty())
    }
}

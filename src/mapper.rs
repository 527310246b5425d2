use tracing::{debug, warn};

use crate::date::DateFormatter;
use crate::error::MappingError;
use crate::models::{
    FeedPage, PostDetail, PostSummary, RawFeedResponse, RawPathsResponse, RawPost,
    RawPostDetail,
};

/// Converts content API records into listing and detail view models.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostMapper {
    dates: DateFormatter,
}

impl PostMapper {
    pub fn new(dates: DateFormatter) -> Self {
        Self { dates }
    }

    pub fn dates(&self) -> &DateFormatter {
        &self.dates
    }

    /// Maps one listing record.
    /// Title, subtitle and author pass through untouched; the publication
    /// date is rendered in the listing pattern, `None` stays `None`.
    pub fn map(&self, raw: &RawPost) -> Result<PostSummary, MappingError> {
        let data = &raw.data;
        let title = required(&data.title, "title", &raw.uid)?;
        let subtitle = required(&data.subtitle, "subtitle", &raw.uid)?;
        let author = required(&data.author, "author", &raw.uid)?;
        let publication_date = self.dates.listing(raw.first_publication_date.as_deref())?;

        Ok(PostSummary {
            id: raw.uid.clone(),
            publication_date,
            title,
            subtitle,
            author,
        })
    }

    /// Maps a listing page, skipping records that fail to map.
    pub fn map_response(&self, response: &RawFeedResponse) -> FeedPage {
        let mut results = Vec::with_capacity(response.results.len());

        for raw in &response.results {
            match self.map(raw) {
                Ok(summary) => results.push(summary),
                Err(e) => warn!(uid = ?raw.uid, error = %e, "skipping post that failed to map"),
            }
        }

        debug!(
            mapped = results.len(),
            received = response.results.len(),
            next_page = ?response.next_page,
            "mapped feed page"
        );

        FeedPage::new(response.next_page.clone(), results)
    }

    /// Like [`map_response`](Self::map_response) but fails on the first bad record.
    pub fn try_map_response(&self, response: &RawFeedResponse) -> Result<FeedPage, MappingError> {
        let results = response
            .results
            .iter()
            .map(|raw| self.map(raw))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FeedPage::new(response.next_page.clone(), results))
    }

    /// Maps a single-post response. The publication date stays raw.
    pub fn map_detail(&self, raw: &RawPostDetail) -> Result<PostDetail, MappingError> {
        let data = &raw.data;
        let title = required(&data.title, "title", &raw.uid)?;
        let author = required(&data.author, "author", &raw.uid)?;
        let banner_url = required(&data.banner.url, "banner.url", &raw.uid)?;

        Ok(PostDetail {
            publication_date: raw.first_publication_date.clone(),
            title,
            banner_url,
            author,
            content: data.content.clone(),
        })
    }
}

/// Slugs for static path generation, first slug of each document.
pub fn static_paths(response: &RawPathsResponse) -> Vec<String> {
    response
        .results
        .iter()
        .filter_map(|record| record.slugs.first())
        .filter(|slug| !slug.is_empty())
        .cloned()
        .collect()
}

fn required(
    value: &Option<String>,
    field: &'static str,
    uid: &Option<String>,
) -> Result<String, MappingError> {
    value.clone().ok_or_else(|| MappingError::MissingField {
        field,
        uid: uid.clone(),
    })
}

#[cfg(test)]
#[path = "mapper_tests.rs"]
mod tests;

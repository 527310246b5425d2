use std::fmt::Display;

use tracing::{debug, warn};

use crate::feed::PaginatedFeed;
use crate::models::FeedPage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Failed(String),
    Exhausted,
}

/// Guards the "load more" trigger around a [`PaginatedFeed`].
///
/// Only one fetch may be in flight. A failed fetch leaves the feed as it was
/// and re-enables the trigger; nothing is retried automatically.
#[derive(Debug, Clone)]
pub struct FeedSession {
    feed: PaginatedFeed,
    state: LoadState,
}

impl FeedSession {
    pub fn new(feed: PaginatedFeed) -> Self {
        let state = if feed.has_more() {
            LoadState::Idle
        } else {
            LoadState::Exhausted
        };
        Self { feed, state }
    }

    pub fn feed(&self) -> &PaginatedFeed {
        &self.feed
    }

    pub fn into_feed(self) -> PaginatedFeed {
        self.feed
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn can_load_more(&self) -> bool {
        matches!(self.state, LoadState::Idle | LoadState::Failed(_)) && self.feed.has_more()
    }

    /// Claims the trigger and returns the cursor to fetch.
    /// Returns `None` while a fetch is in flight or when the feed is exhausted.
    pub fn begin_load(&mut self) -> Option<String> {
        if !self.can_load_more() {
            debug!(state = ?self.state, "load more ignored");
            return None;
        }
        let token = self.feed.next_page_token()?.to_string();
        self.state = LoadState::Loading;
        Some(token)
    }

    /// Records the outcome of the fetch started by [`begin_load`](Self::begin_load).
    /// An outcome arriving with no fetch in flight is dropped.
    pub fn finish_load<E: Display>(&mut self, outcome: Result<FeedPage, E>) {
        if self.state != LoadState::Loading {
            warn!(state = ?self.state, "dropping load result without a fetch in flight");
            return;
        }

        match outcome {
            Ok(page) => {
                self.feed.append(page);
                self.state = if self.feed.has_more() {
                    LoadState::Idle
                } else {
                    LoadState::Exhausted
                };
            }
            Err(e) => {
                warn!(error = %e, "failed to load next page");
                self.state = LoadState::Failed(e.to_string());
            }
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;

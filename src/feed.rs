use crate::models::{FeedPage, PostSummary};

/// Pages of a listing accumulated by "load more".
///
/// Pages are append-only: nothing is ever removed or reordered, so the
/// flattened results before an append are always a prefix of the results
/// after it. The cursor is the last page's next-page token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatedFeed {
    pages: Vec<FeedPage>,
}

impl PaginatedFeed {
    pub fn new(seed: FeedPage) -> Self {
        Self { pages: vec![seed] }
    }

    /// Adds a page to the end of the feed.
    /// The token is not compared with earlier ones; avoiding repeated
    /// fetches of the same cursor is up to the caller.
    pub fn append(&mut self, page: FeedPage) {
        self.pages.push(page);
    }

    pub fn flattened_results(&self) -> Vec<PostSummary> {
        self.results().cloned().collect()
    }

    pub fn results(&self) -> impl Iterator<Item = &PostSummary> {
        self.pages.iter().flat_map(|page| page.results.iter())
    }

    pub fn has_more(&self) -> bool {
        self.last_page().has_next()
    }

    /// The cursor for the next fetch, if any.
    pub fn next_page_token(&self) -> Option<&str> {
        let page = self.last_page();
        if page.has_next() {
            page.next_page_token.as_deref()
        } else {
            None
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn len(&self) -> usize {
        self.pages.iter().map(|page| page.results.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn last_page(&self) -> &FeedPage {
        // `new` seeds one page and nothing removes pages
        &self.pages[self.pages.len() - 1]
    }
}

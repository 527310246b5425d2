use crate::models::RawContentBlock;

/// Average reading speed used for estimates, in words per minute.
pub const WORDS_PER_MINUTE: u32 = 200;

/// Estimates how long a post takes to read from its rich-text blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingTimeEstimator {
    words_per_minute: u32,
}

impl ReadingTimeEstimator {
    /// A rate of zero is clamped to one word per minute.
    pub fn new(words_per_minute: u32) -> Self {
        Self {
            words_per_minute: words_per_minute.max(1),
        }
    }

    pub fn words_per_minute(&self) -> u32 {
        self.words_per_minute
    }

    /// Returns the estimated reading time in whole minutes, rounded up.
    pub fn estimate(&self, content: &[RawContentBlock]) -> u32 {
        let words = total_words(content);
        let minutes = words.div_ceil(self.words_per_minute as usize);
        u32::try_from(minutes).unwrap_or(u32::MAX)
    }
}

impl Default for ReadingTimeEstimator {
    fn default() -> Self {
        Self::new(WORDS_PER_MINUTE)
    }
}

/// Shorthand for [`ReadingTimeEstimator::default`].
pub fn estimate_reading_time(content: &[RawContentBlock]) -> u32 {
    ReadingTimeEstimator::default().estimate(content)
}

/// Words in every heading plus every block body, in reading order.
pub fn total_words(content: &[RawContentBlock]) -> usize {
    content.iter().map(block_words).sum()
}

fn block_words(block: &RawContentBlock) -> usize {
    let heading = block.heading.as_deref().map_or(0, count_words);
    // Fragments are concatenated as-is; spacing comes from the text itself.
    let body = block
        .body
        .iter()
        .map(|span| span.text.as_str())
        .collect::<String>();
    heading + count_words(&body)
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
#[path = "reading_time_tests.rs"]
mod tests;

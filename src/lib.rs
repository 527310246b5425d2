//! Display logic for a headless-CMS blog: post summaries, reading time and
//! "load more" pagination over raw content API responses.

pub mod config;
pub mod date;
pub mod dump;
pub mod error;
pub mod feed;
pub mod fetcher;
pub mod mapper;
pub mod models;
pub mod reading_time;
pub mod session;

pub use config::Settings;
pub use date::DateFormatter;
pub use error::{DateError, MappingError};
pub use feed::PaginatedFeed;
pub use mapper::{static_paths, PostMapper};
pub use models::{FeedPage, PostDetail, PostSummary, RawContentBlock};
pub use reading_time::{estimate_reading_time, ReadingTimeEstimator, WORDS_PER_MINUTE};
pub use session::{FeedSession, LoadState};

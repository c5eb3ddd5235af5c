//! Kernel module - server infrastructure and dependencies.

pub mod content_extractor;
pub mod deps;
pub mod page_fetcher;
pub mod summarizer;
pub mod test_dependencies;
pub mod traits;

pub use content_extractor::{extract_content, ContentStrategy, MAX_CONTENT_CHARS};
pub use deps::ServerDeps;
pub use page_fetcher::HttpPageFetcher;
pub use summarizer::{DeepSeekSummarizer, DEEPSEEK_BASE_URL, DEEPSEEK_MODEL};
pub use test_dependencies::{MockPageFetcher, MockSummarizer, TestDependencies};
pub use traits::*;

//! Insights requests: scrape a storefront and its competitors, persist the
//! records, and summarize them.

pub mod error;
pub mod pipeline;
pub mod summary;

pub use error::InsightsError;
pub use pipeline::{fetch_insights, scrape_competitors, InsightsOptions};
pub use summary::{
    build_prompt, ConfiguredSummarizer, DisabledSummarizer, GeminiSummarizer, Summarizer,
    ANALYSIS_FAILED_PREFIX,
};

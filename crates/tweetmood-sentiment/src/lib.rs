//! Sentiment pipeline for searched posts.
//!
//! Cleans post text, scores it with a lexicon polarity analyzer, classifies
//! it as positive/neutral/negative, deduplicates retweets, and appends the
//! results to flat files.

pub mod classify;
pub mod error;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod scorer;
pub mod summary;
pub mod types;

pub use classify::classify;
pub use error::SentimentError;
pub use normalize::clean;
pub use output::{append_lines, negative_posts, write_outputs, OutputPaths, WriteSummary};
pub use pipeline::{collect_posts, display_text, run, RunOutcome};
pub use scorer::{lexicon_polarity, LexiconAnalyzer, PolarityAnalyzer};
pub use summary::SentimentSummary;
pub use types::{ParsedPost, Sentiment};

use crate::types::{ParsedPost, Sentiment};

/// Per-label counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentSummary {
    pub total: usize,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentSummary {
    #[must_use]
    pub fn from_posts(posts: &[ParsedPost]) -> Self {
        posts.iter().fold(Self::default(), |mut acc, post| {
            acc.total += 1;
            match post.sentiment {
                Sentiment::Positive => acc.positive += 1,
                Sentiment::Neutral => acc.neutral += 1,
                Sentiment::Negative => acc.negative += 1,
            }
            acc
        })
    }

    #[must_use]
    pub fn count(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    /// Share of posts with `sentiment`, in percent. `0.0` for an empty run.
    #[must_use]
    pub fn percentage(&self, sentiment: Sentiment) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let pct = 100.0 * self.count(sentiment) as f64 / self.total as f64;
        pct
    }
}

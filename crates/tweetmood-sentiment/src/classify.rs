use crate::normalize::clean;
use crate::scorer::PolarityAnalyzer;
use crate::types::Sentiment;

/// Cleans `text`, scores it with `analyzer`, and thresholds the polarity.
#[must_use]
pub fn classify<A>(analyzer: &A, text: &str) -> Sentiment
where
    A: PolarityAnalyzer + ?Sized,
{
    Sentiment::from_polarity(analyzer.polarity(&clean(text)))
}

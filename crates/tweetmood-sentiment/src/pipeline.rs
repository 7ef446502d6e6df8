//! Sentiment pipeline orchestration.

use std::collections::HashSet;

use futures::{Stream, StreamExt};
use tweetmood_search::{Post, SearchClient, SearchError};

use crate::classify::classify;
use crate::scorer::PolarityAnalyzer;
use crate::types::ParsedPost;

/// What one pipeline run produced.
///
/// Posts collected before a search failure are kept alongside the error, so
/// callers can tell an empty result set from a failed one and still use the
/// partial data.
#[derive(Debug)]
pub struct RunOutcome {
    /// Parsed posts in fetch order.
    pub posts: Vec<ParsedPost>,
    /// The error that ended the run early, if any.
    pub error: Option<SearchError>,
}

impl RunOutcome {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Drops partial results on failure.
    ///
    /// # Errors
    ///
    /// Returns the [`SearchError`] that ended the run early, if any.
    pub fn into_result(self) -> Result<Vec<ParsedPost>, SearchError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.posts),
        }
    }
}

/// The text written out for a post: the original post's text for retweets,
/// the post's own text otherwise, with newlines flattened to spaces.
#[must_use]
pub fn display_text(post: &Post) -> String {
    let text = post
        .retweeted_status
        .as_ref()
        .map_or(post.full_text.as_str(), |original| original.full_text.as_str());
    text.replace('\n', " ")
}

/// Search for `query` and run every result through [`collect_posts`].
pub async fn run<A>(client: &SearchClient, query: &str, count: usize, analyzer: &A) -> RunOutcome
where
    A: PolarityAnalyzer + ?Sized,
{
    tracing::info!(query, count, "starting search run");
    collect_posts(client.search(query, count), analyzer).await
}

/// Classify and deduplicate a stream of fetched posts.
///
/// 1. Build the display text (see [`display_text`]).
/// 2. Classify the post's own `full_text`. For retweets this is the wrapper
///    text (`RT @user: ...`), not the display text.
/// 3. Posts with `retweet_count > 0` are dropped when an identical
///    [`ParsedPost`] was already collected. Posts with no retweets are always
///    kept.
///
/// Output order is fetch order. The first stream error stops collection and
/// is returned in [`RunOutcome::error`] together with everything collected
/// before it.
pub async fn collect_posts<S, A>(posts: S, analyzer: &A) -> RunOutcome
where
    S: Stream<Item = Result<Post, SearchError>>,
    A: PolarityAnalyzer + ?Sized,
{
    let mut posts = std::pin::pin!(posts);
    let mut collected: Vec<ParsedPost> = Vec::new();
    let mut seen: HashSet<ParsedPost> = HashSet::new();
    let mut fetched = 0_usize;

    while let Some(item) = posts.next().await {
        let post = match item {
            Ok(post) => post,
            Err(e) => {
                tracing::debug!(
                    fetched,
                    kept = collected.len(),
                    error = %e,
                    "search stream failed"
                );
                return RunOutcome {
                    posts: collected,
                    error: Some(e),
                };
            }
        };
        fetched += 1;

        let parsed = ParsedPost {
            text: display_text(&post),
            sentiment: classify(analyzer, &post.full_text),
        };

        if post.retweet_count > 0 && seen.contains(&parsed) {
            tracing::debug!(id = post.id, "skipping duplicate retweeted post");
            continue;
        }

        seen.insert(parsed.clone());
        collected.push(parsed);
    }

    tracing::info!(fetched, kept = collected.len(), "search run complete");

    RunOutcome {
        posts: collected,
        error: None,
    }
}

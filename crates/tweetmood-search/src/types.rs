use serde::Deserialize;

/// One status returned by the search endpoint (requested with `tweet_mode=extended`).
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub id: u64,
    pub full_text: String,
    #[serde(default)]
    pub retweet_count: u64,
    /// Present when this post is a retweet of another user's post.
    #[serde(default)]
    pub retweeted_status: Option<ResharedPost>,
}

impl Post {
    #[must_use]
    pub fn is_reshare(&self) -> bool {
        self.retweeted_status.is_some()
    }
}

/// The original post embedded inside a retweet.
#[derive(Debug, Clone, Deserialize)]
pub struct ResharedPost {
    pub id: u64,
    pub full_text: String,
}

/// `search/tweets.json` response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub(crate) statuses: Vec<Post>,
}

/// Error envelope: `{"errors": [{"code": 32, "message": "..."}]}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    #[serde(default)]
    pub(crate) errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorDetail {
    #[serde(default)]
    pub(crate) code: i64,
    pub(crate) message: String,
}

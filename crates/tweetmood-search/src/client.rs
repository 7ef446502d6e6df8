//! HTTP client for the v1.1 `search/tweets.json` endpoint.
//!
//! Every request is signed with the user's OAuth 1.0a credentials. The client
//! holds its configuration immutably; build a new one to change credentials.

use std::collections::VecDeque;
use std::time::Duration;

use futures::stream::{self, Stream};
use reqwest::{Client, StatusCode, Url};
use tweetmood_core::config::DEFAULT_API_BASE_URL;
use tweetmood_core::Credentials;

use crate::error::SearchError;
use crate::oauth::{authorization_header, encode, RequestStamp};
use crate::types::{ApiErrorResponse, Post, SearchResponse};

const SEARCH_PATH: &str = "search/tweets.json";

/// Largest `count` the standard search endpoint honours per request.
pub const MAX_PAGE_SIZE: usize = 100;

/// Authenticated client for the standard search API.
///
/// Use [`SearchClient::authenticate`] for production or
/// [`SearchClient::with_base_url`] to point at a mock server in tests.
pub struct SearchClient {
    client: Client,
    credentials: Credentials,
    search_url: Url,
}

/// Paging state carried between pages of one [`SearchClient::search`] call.
struct Cursor {
    remaining: usize,
    max_id: Option<u64>,
    buffered: VecDeque<Post>,
}

impl SearchClient {
    /// Binds `credentials` to a client for the production API.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Authentication`] if any credential is blank.
    /// - [`SearchError::Http`] if the underlying `reqwest::Client` cannot be built.
    pub fn authenticate(
        credentials: Credentials,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, SearchError> {
        Self::with_base_url(credentials, timeout_secs, user_agent, DEFAULT_API_BASE_URL)
    }

    /// Binds `credentials` to a client for a custom base URL.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Authentication`] if any credential is blank.
    /// - [`SearchError::InvalidBaseUrl`] if `base_url` does not parse.
    /// - [`SearchError::Http`] if the underlying `reqwest::Client` cannot be built.
    pub fn with_base_url(
        credentials: Credentials,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, SearchError> {
        check_credentials(&credentials)?;

        // Exactly one trailing slash so the join appends instead of replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let search_url = Url::parse(&normalised)
            .and_then(|base| base.join(SEARCH_PATH))
            .map_err(|e| SearchError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: e.to_string(),
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        tracing::debug!(url = %search_url, "search client ready");

        Ok(Self {
            client,
            credentials,
            search_url,
        })
    }

    /// Fetches a single page of search results.
    ///
    /// Retweets are included and full (untruncated) text is requested. When
    /// `max_id` is set only posts with an id at or below it are returned.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Authentication`] on HTTP 401.
    /// - [`SearchError::Api`] on any other non-2xx status.
    /// - [`SearchError::Http`] on network failure.
    /// - [`SearchError::Deserialize`] if the body does not match the expected shape.
    pub async fn fetch_page(
        &self,
        query: &str,
        count: usize,
        max_id: Option<u64>,
    ) -> Result<Vec<Post>, SearchError> {
        let mut params: Vec<(&str, String)> = vec![
            ("q", query.to_string()),
            ("count", count.to_string()),
            ("include_rts", "true".to_string()),
            ("tweet_mode", "extended".to_string()),
        ];
        if let Some(id) = max_id {
            params.push(("max_id", id.to_string()));
        }

        let authorization = authorization_header(
            &self.credentials,
            "GET",
            self.search_url.as_str(),
            &params,
            &RequestStamp::now(),
        );

        let response = self
            .client
            .get(self.page_url(&params))
            .header(reqwest::header::AUTHORIZATION, authorization)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = api_error_message(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());
            if status == StatusCode::UNAUTHORIZED {
                return Err(SearchError::Authentication(message));
            }
            return Err(SearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Deserialize {
                context: format!("search page (q={query})"),
                source: e,
            })?;

        tracing::debug!(
            query,
            count,
            max_id,
            returned = parsed.statuses.len(),
            "fetched search page"
        );

        Ok(parsed.statuses)
    }

    /// Lazily yields up to `limit` posts for `query`, paging as needed.
    ///
    /// Pages are requested newest-first; each follow-up page asks for ids
    /// strictly below the oldest post seen so far. The stream ends on an empty
    /// page, after `limit` posts, or right after yielding the first error.
    /// It cannot be restarted.
    pub fn search<'a>(
        &'a self,
        query: &'a str,
        limit: usize,
    ) -> impl Stream<Item = Result<Post, SearchError>> + 'a {
        let cursor = Cursor {
            remaining: limit,
            max_id: None,
            buffered: VecDeque::new(),
        };
        stream::try_unfold(cursor, move |cursor| self.advance(query, cursor))
    }

    async fn advance(
        &self,
        query: &str,
        mut cursor: Cursor,
    ) -> Result<Option<(Post, Cursor)>, SearchError> {
        if cursor.remaining == 0 {
            return Ok(None);
        }

        if cursor.buffered.is_empty() {
            let count = cursor.remaining.min(MAX_PAGE_SIZE);
            let page = self.fetch_page(query, count, cursor.max_id).await?;
            let Some(oldest) = page.iter().map(|post| post.id).min() else {
                return Ok(None);
            };
            cursor.max_id = Some(oldest.saturating_sub(1));
            cursor.buffered.extend(page);
        }

        let Some(post) = cursor.buffered.pop_front() else {
            return Ok(None);
        };
        cursor.remaining -= 1;
        Ok(Some((post, cursor)))
    }

    /// Search URL with RFC 3986 encoded query parameters, so the wire query
    /// matches the signed parameter string byte for byte.
    fn page_url(&self, params: &[(&str, String)]) -> String {
        let query = params
            .iter()
            .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.search_url)
    }
}

fn check_credentials(credentials: &Credentials) -> Result<(), SearchError> {
    let fields = [
        ("consumer key", &credentials.consumer_key),
        ("consumer secret", &credentials.consumer_secret),
        ("access token", &credentials.access_token),
        ("access token secret", &credentials.access_token_secret),
    ];
    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(SearchError::Authentication(format!("{name} is empty")));
        }
    }
    Ok(())
}

/// First message from an `{"errors": [...]}` body, if the body has one.
fn api_error_message(body: &str) -> Option<String> {
    let parsed: ApiErrorResponse = serde_json::from_str(body).ok()?;
    parsed
        .errors
        .into_iter()
        .next()
        .map(|e| format!("{} (code {})", e.message, e.code))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

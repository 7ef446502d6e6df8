//! Client for the Twitter v1.1 standard search API.
//!
//! Signs every request with OAuth 1.0a user credentials and exposes the
//! result set as a lazy, paged [`futures::Stream`] of [`Post`]s.

pub mod client;
pub mod error;
pub mod types;

mod oauth;

pub use client::SearchClient;
pub use error::SearchError;
pub use types::{Post, ResharedPost};

//! # ctfz-client: Content Delivery API Client
//!
//! Fetches the content model of one space environment over HTTP so the
//! generator can run against a live space instead of an exported file.
//!
//! ## Behavior
//!
//! - Requests `GET {base}/spaces/{space}/environments/{env}/content_types`
//!   with a bearer token, paging with `limit`/`skip` until every content
//!   type reported by `total` has been collected.
//! - Transport failures and `429 Too Many Requests` are retried (see
//!   [`retry`]); a 429 waits out `X-Contentful-RateLimit-Reset`. Other
//!   non-2xx statuses are returned at once as [`ContentfulError::Api`] with
//!   the response body.
//! - The access token never appears in `Debug` output.

pub mod client;
pub mod config;
pub mod error;
pub(crate) mod retry;

pub use client::{ContentfulClient, PAGE_LIMIT};
pub use config::{
    ConfigError, ContentfulConfig, DEFAULT_BASE_URL, DEFAULT_ENVIRONMENT, DEFAULT_TIMEOUT_SECS,
};
pub use error::ContentfulError;

//! Content-type listing client.

use std::time::Duration;

use ctfz_core::{ContentType, ContentTypeCollection};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use url::Url;

use crate::config::{ConfigError, ContentfulConfig};
use crate::error::ContentfulError;
use crate::retry::send_with_retry;

/// Page size requested from the API (its maximum).
pub const PAGE_LIMIT: u64 = 1000;

/// Client for one space environment.
///
/// Cheap to clone; the inner `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct ContentfulClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ContentfulClient {
    /// Build a client, validating the configuration up front.
    pub fn new(config: &ContentfulConfig) -> Result<Self, ContentfulError> {
        config.validate()?;
        let endpoint = content_types_endpoint(config)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", config.access_token))
                .map_err(|_| ConfigError::InvalidAccessToken)?,
        );

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(ContentfulError::Build)?;

        Ok(Self { http, endpoint })
    }

    /// The content-types listing URL this client pages through.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch every content type of the environment, following pagination.
    ///
    /// Items are returned in API order. Paging stops once `total` items have
    /// been collected or a page comes back empty.
    pub async fn content_types(&self) -> Result<Vec<ContentType>, ContentfulError> {
        let mut items = Vec::new();
        let mut skip = 0u64;

        loop {
            let page = self.fetch_page(skip).await?;
            let received = page.items.len() as u64;
            tracing::debug!(skip, received, total = page.total, "fetched content-type page");

            items.extend(page.items);
            skip += received;
            if received == 0 || skip >= page.total {
                break;
            }
        }

        tracing::info!(count = items.len(), "fetched content types");
        Ok(items)
    }

    async fn fetch_page(&self, skip: u64) -> Result<ContentTypeCollection, ContentfulError> {
        let endpoint = self.endpoint.to_string();
        let limit = PAGE_LIMIT.to_string();
        let skip = skip.to_string();

        let resp = send_with_retry(&endpoint, || {
            self.http
                .get(self.endpoint.clone())
                .query(&[("limit", limit.as_str()), ("skip", skip.as_str())])
                .send()
        })
        .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ContentfulError::Api {
                endpoint,
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<ContentTypeCollection>()
            .await
            .map_err(|source| ContentfulError::Deserialization { endpoint, source })
    }
}

fn content_types_endpoint(config: &ContentfulConfig) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: config.base_url.clone(),
        reason,
    };

    let mut url =
        Url::parse(config.base_url.trim_end_matches('/')).map_err(|e| invalid(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| invalid("URL cannot be a base".into()))?
        .pop_if_empty()
        .extend([
            "spaces",
            config.space_id.as_str(),
            "environments",
            config.environment.as_str(),
            "content_types",
        ]);
    Ok(url)
}

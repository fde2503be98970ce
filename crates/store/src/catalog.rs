//! Remote catalog client: the one-shot fetch of the initial cart contents.
//!
//! A single unauthenticated GET against a fixed endpoint returning a JSON
//! array of items. No retry, no pagination, no streaming; the caller invokes
//! it once at startup and feeds the outcome to
//! [`CartStore::apply_fetch`](crate::store::CartStore::apply_fetch).

use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, instrument};
use url::Url;

use cartwheel_core::CartItem;

use crate::config::CartConfig;

/// Errors that can occur when fetching from the remote catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to decode the response body.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the remote catalog endpoint.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl CatalogClient {
    /// Create a new catalog client.
    ///
    /// The request timeout comes from configuration; when absent the client
    /// has none, and a hung catalog call keeps the cart loading forever.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &CartConfig) -> Result<Self, CatalogError> {
        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.catalog_url.clone(),
        })
    }

    /// Fetch the initial cart contents.
    ///
    /// `query` is a free-form hint accepted from the consumer; the endpoint
    /// takes no parameters, so it is logged and not transmitted. Validation
    /// of the hint is the remote source's concern, not this layer's.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the response status is not
    /// successful, or the body is not a JSON array of items.
    #[instrument(skip(self))]
    pub async fn fetch_initial_items(&self, query: &str) -> Result<Vec<CartItem>, CatalogError> {
        if !query.is_empty() {
            debug!(query, "catalog query hint accepted but not transmitted");
        }

        let response = self.client.get(self.endpoint.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            });
        }

        // Read the body as text first for better error diagnostics
        let body = response.text().await?;
        let items: Vec<CartItem> = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(200).collect::<String>(),
                "Failed to decode catalog response"
            );
            e
        })?;

        debug!(count = items.len(), "Fetched initial cart items");
        Ok(items)
    }
}

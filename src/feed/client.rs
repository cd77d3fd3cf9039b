use reqwest::Client;

use crate::feed::error::FeedError;
use crate::feed::item::HealthItem;

/// The health/recipe listing the screen shows by default.
pub const DEFAULT_ENDPOINT: &str = "https://api.sampleapis.com/health/recipes";

/// The screen never shows more than this many items.
pub const MAX_ITEMS: usize = 10;

/// Plain GET client for the item listing: no auth, no extra headers, no
/// timeouts.
#[derive(Clone, Debug)]
pub struct FeedClient {
    client: Client,
    endpoint: String,
}

impl FeedClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, FeedError> {
        let client = Client::builder().build().map_err(FeedError::Client)?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the listing and keep its first [`MAX_ITEMS`] entries.
    ///
    /// Only the kept entries are decoded as items, so a malformed entry
    /// further down the listing does not fail the fetch. A body that is not
    /// a JSON array is still a decode error.
    pub async fn fetch(&self) -> Result<Vec<HealthItem>, FeedError> {
        tracing::debug!(endpoint = %self.endpoint, "Fetching item listing");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|source| FeedError::Request {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| FeedError::Request {
            endpoint: self.endpoint.clone(),
            source,
        })?;

        let mut entries: Vec<serde_json::Value> =
            serde_json::from_slice(&body).map_err(|source| FeedError::Decode {
                endpoint: self.endpoint.clone(),
                source,
            })?;
        let received = entries.len();
        entries.truncate(MAX_ITEMS);

        let items = entries
            .into_iter()
            .map(serde_json::from_value::<HealthItem>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| FeedError::Decode {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        tracing::info!(received, kept = items.len(), "Item listing received");
        Ok(items)
    }
}

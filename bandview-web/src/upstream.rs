//! Upstream music-group API client
//!
//! Fetches the four source collections and joins them into the
//! in-memory catalog. The fetches run concurrently and the load fails
//! as a unit: no catalog is produced from partial source data.

use std::time::Duration;

use bandview_common::model::{ArtistRecord, DatesRecord, Index, LocationsRecord, RelationRecord};
use bandview_common::{Catalog, Error, Result};
use serde::de::DeserializeOwned;

const USER_AGENT: &str = concat!("bandview/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the upstream music-group API
pub struct UpstreamClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Upstream(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET one collection and decode it
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);

        tracing::debug!(url = %url, "Querying upstream API");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Upstream(format!("{} returned HTTP {}", url, status)));
        }

        response
            .json()
            .await
            .map_err(|e| Error::Decode(format!("{}: {}", url, e)))
    }

    /// Fetch the `/artists` collection
    pub async fn artists(&self) -> Result<Vec<ArtistRecord>> {
        self.get_json("artists").await
    }

    /// Fetch the `/locations` index
    pub async fn locations(&self) -> Result<Vec<LocationsRecord>> {
        let envelope: Index<LocationsRecord> = self.get_json("locations").await?;
        Ok(envelope.index)
    }

    /// Fetch the `/dates` index
    pub async fn dates(&self) -> Result<Vec<DatesRecord>> {
        let envelope: Index<DatesRecord> = self.get_json("dates").await?;
        Ok(envelope.index)
    }

    /// Fetch the `/relation` index
    pub async fn relations(&self) -> Result<Vec<RelationRecord>> {
        let envelope: Index<RelationRecord> = self.get_json("relation").await?;
        Ok(envelope.index)
    }

    /// Fetch all four collections concurrently and join them.
    ///
    /// Any fetch or decode failure aborts the whole load.
    pub async fn fetch_catalog(&self) -> Result<Catalog> {
        let (artists, locations, dates, relations) = tokio::try_join!(
            self.artists(),
            self.locations(),
            self.dates(),
            self.relations()
        )?;

        tracing::info!(
            artists = artists.len(),
            locations = locations.len(),
            dates = dates.len(),
            relations = relations.len(),
            "Fetched upstream collections"
        );

        Ok(Catalog::build(artists, locations, dates, relations))
    }
}

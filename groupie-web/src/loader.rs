//! Startup loader
//!
//! Fetches each resource kind in turn and builds the data store. The first
//! failure aborts the load; no store exists until every fetch has succeeded.

use crate::client::{ApiClient, ClientError};
use crate::store::DataStore;
use groupie_common::config::{LoadProfile, ResourceUrls};
use groupie_common::ResourceKind;
use thiserror::Error;
use tracing::{info, warn};

/// Startup load failure for one resource kind
#[derive(Debug, Error)]
#[error("Failed to load {kind}: {source}")]
pub struct LoadError {
    pub kind: ResourceKind,
    #[source]
    pub source: ClientError,
}

impl LoadError {
    fn for_kind(kind: ResourceKind) -> impl FnOnce(ClientError) -> Self {
        move |source| {
            warn!(resource = %kind, error = %source, "Upstream fetch failed");
            Self { kind, source }
        }
    }
}

/// Fetch every collection `profile` asks for and build the store
pub async fn load_all(
    client: &ApiClient,
    urls: &ResourceUrls,
    profile: LoadProfile,
) -> Result<DataStore, LoadError> {
    let artists = client
        .fetch_artists(urls.get(ResourceKind::Artists))
        .await
        .map_err(LoadError::for_kind(ResourceKind::Artists))?;
    info!(resource = %ResourceKind::Artists, count = artists.len(), "Loaded");

    if profile == LoadProfile::ArtistsOnly {
        return Ok(DataStore::artists_only(artists));
    }

    let locations = client
        .fetch_locations(urls.get(ResourceKind::Locations))
        .await
        .map_err(LoadError::for_kind(ResourceKind::Locations))?;
    info!(resource = %ResourceKind::Locations, count = locations.len(), "Loaded");

    let dates = client
        .fetch_dates(urls.get(ResourceKind::Dates))
        .await
        .map_err(LoadError::for_kind(ResourceKind::Dates))?;
    info!(resource = %ResourceKind::Dates, count = dates.len(), "Loaded");

    let relations = client
        .fetch_relations(urls.get(ResourceKind::Relations))
        .await
        .map_err(LoadError::for_kind(ResourceKind::Relations))?;
    info!(resource = %ResourceKind::Relations, count = relations.len(), "Loaded");

    Ok(DataStore::new(artists, locations, dates, relations))
}

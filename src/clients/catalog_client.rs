//! # Catalog Client
//!
//! Provides a high-level API for the catalog actor.
use crate::catalog_actor::CatalogError;
use crate::model::{CategoryFilter, MenuItem, MenuItemCreate, MenuItemId};
use async_trait::async_trait;
use store_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<MenuItem>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }

    /// Appends a new item under a fresh id.
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn add_item(&self, params: MenuItemCreate) -> Result<MenuItemId, CatalogError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Items matching `filter`, in catalog order.
    #[instrument(skip(self))]
    pub async fn list_filtered(&self, filter: CategoryFilter) -> Result<Vec<MenuItem>, CatalogError> {
        let mut items = self.list().await?;
        items.retain(|item| filter.matches(item));
        Ok(items)
    }

    /// Removes the item if present. Absent ids are not an error.
    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: MenuItemId) -> Result<bool, CatalogError> {
        let removed = self.delete(id).await?;
        if !removed {
            debug!("Menu item not present");
        }
        Ok(removed)
    }

    /// Re-reads the persisted menu. Returns its size.
    #[instrument(skip(self))]
    pub async fn reload(&self) -> Result<usize, CatalogError> {
        self.inner.reload().await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<MenuItem> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<CatalogError>()
            .unwrap_or_else(|e| CatalogError::ActorCommunicationError(e.to_string()))
    }
}

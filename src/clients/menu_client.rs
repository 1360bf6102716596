//! # Menu Client
//!
//! Provides a high-level API for interacting with the `MenuItem` actor.
//! It wraps a `ResourceClient<MenuItem>` and exposes catalog operations plus the
//! price snapshot the ledger needs.
use crate::menu_actor::{MenuAction, MenuError, MenuQuery, MenuQueryResult};
use crate::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate, PriceSnapshot};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Client for interacting with the Menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<MenuError>() {
            Ok(entity) => entity,
            Err(FrameworkError::NotFound(id)) => MenuError::NotFound(id),
            Err(other) => MenuError::Persistence(other.to_string()),
        }
    }
}

impl MenuClient {
    #[instrument(skip(self))]
    pub async fn create_item(&self, params: MenuItemCreate) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        id: MenuItemId,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, MenuError> {
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Soft-deletes an item. It stays readable through `get` but can no longer
    /// be listed or ordered.
    #[instrument(skip(self))]
    pub async fn deactivate(&self, id: MenuItemId) -> Result<MenuItem, MenuError> {
        self.inner
            .perform_action(id, MenuAction::Deactivate)
            .await
            .map_err(Self::map_error)
    }

    /// Active items ordered by category, then name.
    #[instrument(skip(self))]
    pub async fn list_active(&self) -> Result<Vec<MenuItem>, MenuError> {
        match self.inner.query(MenuQuery::Active).await {
            Ok(MenuQueryResult::Active(items)) => Ok(items),
            Ok(_) => unreachable!("Active query must return Active result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Resolves current prices for every id in one read of the catalog.
    ///
    /// # Errors
    /// `UnknownMenuItem` carrying the smallest id that is missing or inactive.
    #[instrument(skip(self))]
    pub async fn resolve(&self, ids: BTreeSet<MenuItemId>) -> Result<PriceSnapshot, MenuError> {
        debug!(count = ids.len(), "Resolving prices");
        match self.inner.query(MenuQuery::Snapshot(ids)).await {
            Ok(MenuQueryResult::Snapshot(prices)) => Ok(prices),
            Ok(_) => unreachable!("Snapshot query must return Snapshot result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

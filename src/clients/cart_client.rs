//! # Cart Client
//!
//! Provides a high-level API for the cart actor. Adding an item looks it up in the
//! catalog first; quantity changes and removals on items not in the cart are no-ops.
use crate::cart_actor::{CartAction, CartError};
use crate::clients::CatalogClient;
use crate::model::{cart_total, item_count, CartLine, CartLineCreate, MenuItemId};
use async_trait::async_trait;
use store_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<CartLine>,
    catalog: CatalogClient,
}

impl CartClient {
    pub fn new(inner: ResourceClient<CartLine>, catalog: CatalogClient) -> Self {
        Self { inner, catalog }
    }

    /// Adds one unit of a menu item. Returns `false` if the item is not on the menu.
    #[instrument(skip(self))]
    pub async fn add_item(&self, id: MenuItemId) -> Result<bool, CartError> {
        let item = self
            .catalog
            .get(id)
            .await
            .map_err(|e| CartError::Catalog(e.to_string()))?;
        let Some(item) = item else {
            debug!("Item not on the menu");
            return Ok(false);
        };

        self.inner
            .create(CartLineCreate { item })
            .await
            .map_err(Self::map_error)?;
        Ok(true)
    }

    /// New quantity, or `None` if the item is not in the cart.
    #[instrument(skip(self))]
    pub async fn increase(&self, id: MenuItemId) -> Result<Option<u32>, CartError> {
        self.change(id, CartAction::Increase).await
    }

    /// New quantity (never below 1), or `None` if the item is not in the cart.
    #[instrument(skip(self))]
    pub async fn decrease(&self, id: MenuItemId) -> Result<Option<u32>, CartError> {
        self.change(id, CartAction::Decrease).await
    }

    async fn change(&self, id: MenuItemId, action: CartAction) -> Result<Option<u32>, CartError> {
        match self.inner.perform_action(id, action).await {
            Ok(quantity) => Ok(Some(quantity)),
            Err(e) if e.is_not_found() => {
                debug!("Item not in cart");
                Ok(None)
            }
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Drops the line. Returns `false` if the item was not in the cart.
    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: MenuItemId) -> Result<bool, CartError> {
        self.delete(id).await
    }

    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<(), CartError> {
        self.inner.clear().await.map_err(Self::map_error)
    }

    /// Σ price × quantity.
    pub async fn total(&self) -> Result<f64, CartError> {
        Ok(cart_total(&self.list().await?))
    }

    /// Σ quantity.
    pub async fn count(&self) -> Result<u32, CartError> {
        Ok(item_count(&self.list().await?))
    }
}

#[async_trait]
impl ActorClient<CartLine> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<CartLine> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<CartError>()
            .unwrap_or_else(|e| CartError::ActorCommunicationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_actor::default_menu;
    use crate::model::MenuItem;
    use store_actor::mock::{create_mock_client, expect_action, expect_create, MockClient};

    #[tokio::test]
    async fn test_add_unknown_item_never_reaches_cart() {
        let mut catalog = MockClient::<MenuItem>::new();
        catalog.expect_get(MenuItemId(99)).return_ok(None);
        let cart_mock = MockClient::<CartLine>::new();

        let cart = CartClient::new(cart_mock.client(), CatalogClient::new(catalog.client()));
        assert!(!cart.add_item(MenuItemId(99)).await.unwrap());

        catalog.verify();
        cart_mock.verify();
    }

    #[tokio::test]
    async fn test_add_sends_catalog_copy_of_item() {
        let butter_chicken = default_menu().remove(2);
        let mut catalog = MockClient::<MenuItem>::new();
        catalog
            .expect_get(MenuItemId(3))
            .return_ok(Some(butter_chicken.clone()));

        let (client, mut receiver) = create_mock_client::<CartLine>(10);
        let cart = CartClient::new(client, CatalogClient::new(catalog.client()));
        let task = tokio::spawn(async move { cart.add_item(MenuItemId(3)).await });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.item, butter_chicken);
        responder.send(Ok(MenuItemId(3))).unwrap();

        assert!(task.await.unwrap().unwrap());
    }

    #[tokio::test]
    async fn test_decrease_sends_decrease_action() {
        let catalog = MockClient::<MenuItem>::new();
        let (client, mut receiver) = create_mock_client::<CartLine>(10);
        let cart = CartClient::new(client, CatalogClient::new(catalog.client()));
        let task = tokio::spawn(async move { cart.decrease(MenuItemId(5)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, MenuItemId(5));
        assert_eq!(action, CartAction::Decrease);
        responder.send(Ok(1)).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), Some(1));
    }

    #[tokio::test]
    async fn test_missing_line_is_a_silent_no_op() {
        let catalog = MockClient::<MenuItem>::new();
        let mut cart_mock = MockClient::<CartLine>::new();
        cart_mock
            .expect_action(MenuItemId(7))
            .return_err(FrameworkError::NotFound("7".into()));
        cart_mock.expect_delete(MenuItemId(7)).return_ok(false);

        let cart = CartClient::new(cart_mock.client(), CatalogClient::new(catalog.client()));
        assert_eq!(cart.increase(MenuItemId(7)).await.unwrap(), None);
        assert!(!cart.remove_item(MenuItemId(7)).await.unwrap());
        cart_mock.verify();
    }
}

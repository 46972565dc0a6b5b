use crate::checkout::{self, CheckoutError, CheckoutForm};
use crate::clients::{CartClient, CatalogClient, OrderClient};
use crate::config::AppConfig;
use crate::model::{cart_total, CartLine, CategoryFilter, MenuItem, MenuItemId, OrderId};
use crate::notice::{Notice, NoticeBoard, NoticeLevel};
use crate::{cart_actor::CartError, catalog_actor::CatalogError};
use std::time::Duration;
use store_actor::{ActorClient, SharedStore};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::{join_all, ShutdownError};

/// The customer page: menu, cart and checkout.
///
/// Owns its own catalog, cart and order actors over the shared backing store. Every cart
/// mutation refreshes the badge count held here.
///
/// # Example
///
/// ```ignore
/// let mut shop = Storefront::start(&config, store).await?;
/// let menu = shop.load_menu(CategoryFilter::All).await?;
/// shop.add_to_cart(menu[0].id).await?;
/// let order_id = shop.place_order(&form).await?;
/// shop.shutdown().await?;
/// ```
pub struct Storefront {
    pub catalog: CatalogClient,
    pub cart: CartClient,
    pub orders: OrderClient,
    notices: NoticeBoard,
    badge: u32,
    menu_delay: Duration,
    handles: Vec<JoinHandle<()>>,
}

impl Storefront {
    /// Spawns the actors, each of which loads its collection from `store`.
    pub async fn start(config: &AppConfig, store: SharedStore) -> Result<Self, CartError> {
        let capacity = config.channel_capacity;
        let (catalog_actor, catalog) = crate::catalog_actor::new(capacity, store.clone());
        let (cart_actor, cart) = crate::cart_actor::new(capacity, store.clone(), catalog.clone());
        let (order_actor, orders) = crate::order_actor::new(capacity, store);

        let handles = vec![
            tokio::spawn(catalog_actor.run(())),
            tokio::spawn(cart_actor.run(())),
            tokio::spawn(order_actor.run(())),
        ];

        let mut storefront = Self {
            catalog,
            cart,
            orders,
            notices: NoticeBoard::new(config.notice_ttl),
            badge: 0,
            menu_delay: config.menu_delay,
            handles,
        };
        storefront.refresh_badge().await?;
        info!(badge = storefront.badge, "Storefront started");
        Ok(storefront)
    }

    /// The menu, optionally narrowed to one category. Waits for the configured menu delay
    /// first.
    pub async fn load_menu(&self, filter: CategoryFilter) -> Result<Vec<MenuItem>, CatalogError> {
        if !self.menu_delay.is_zero() {
            debug!(delay_ms = self.menu_delay.as_millis() as u64, "Simulating menu load");
            tokio::time::sleep(self.menu_delay).await;
        }
        self.catalog.list_filtered(filter).await
    }

    /// Returns `false` (and posts nothing) if the item is not on the menu.
    pub async fn add_to_cart(&mut self, id: MenuItemId) -> Result<bool, CartError> {
        let added = self.cart.add_item(id).await?;
        if added {
            self.notices.post(NoticeLevel::Success, "Item added to cart!");
            self.refresh_badge().await?;
        }
        Ok(added)
    }

    pub async fn increase(&mut self, id: MenuItemId) -> Result<Option<u32>, CartError> {
        let quantity = self.cart.increase(id).await?;
        self.refresh_badge().await?;
        Ok(quantity)
    }

    pub async fn decrease(&mut self, id: MenuItemId) -> Result<Option<u32>, CartError> {
        let quantity = self.cart.decrease(id).await?;
        self.refresh_badge().await?;
        Ok(quantity)
    }

    pub async fn remove_from_cart(&mut self, id: MenuItemId) -> Result<bool, CartError> {
        let removed = self.cart.remove_item(id).await?;
        if removed {
            self.notices.post(NoticeLevel::Info, "Item removed from cart");
            self.refresh_badge().await?;
        }
        Ok(removed)
    }

    pub async fn cart_lines(&self) -> Result<Vec<CartLine>, CartError> {
        self.cart.list().await
    }

    pub async fn cart_total(&self) -> Result<f64, CartError> {
        self.cart.total().await
    }

    /// Item count on the cart badge as of the last cart mutation.
    pub fn badge(&self) -> u32 {
        self.badge
    }

    /// Opens checkout: the cart total, or [`CheckoutError::EmptyCart`] with a warning.
    pub async fn begin_checkout(&mut self) -> Result<f64, CheckoutError> {
        let lines = self.cart.list().await?;
        if lines.is_empty() {
            self.notices.post(NoticeLevel::Warning, "Your cart is empty!");
            return Err(CheckoutError::EmptyCart);
        }
        Ok(cart_total(&lines))
    }

    pub async fn place_order(&mut self, form: &CheckoutForm) -> Result<OrderId, CheckoutError> {
        match checkout::place_order(&self.cart, &self.orders, form).await {
            Ok(id) => {
                self.notices.post(
                    NoticeLevel::Success,
                    format!("Order placed successfully! Order ID: {id}"),
                );
                if let Err(e) = self.refresh_badge().await {
                    warn!(order_id = %id, error = %e, "Badge not refreshed after checkout");
                }
                Ok(id)
            }
            Err(e @ (CheckoutError::EmptyCart | CheckoutError::Invalid(_))) => {
                self.notices.post(NoticeLevel::Warning, e.to_string());
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    pub fn notices(&mut self) -> &[Notice] {
        self.notices.active()
    }

    async fn refresh_badge(&mut self) -> Result<(), CartError> {
        self.badge = self.cart.count().await?;
        Ok(())
    }

    /// Closes every actor channel and waits for the actors to drain.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down storefront...");
        drop(self.cart);
        drop(self.catalog);
        drop(self.orders);
        join_all(self.handles).await?;
        info!("Storefront shutdown complete.");
        Ok(())
    }
}

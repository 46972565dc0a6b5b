//! # Cart Actor
//!
//! Owns the customer's cart: an ordered list of [`CartLine`]s persisted under `cart`.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](store_actor::ActorEntity) implementation for [`CartLine`]
//! - [`error`] - [`CartError`]
//! - [`actions`] - [`CartAction`] for quantity changes
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Adding twice
//!
//! A cart line is keyed by its menu item id (its *natural id*). Creating a line for an
//! item that is already in the cart is routed to `on_merge`, which bumps the quantity.
//! The increment-or-append decision therefore happens inside the actor, in one message:
//!
//! ```rust,ignore
//! cart.add(item.clone()).await?; // quantity 1
//! cart.add(item).await?;         // same line, quantity 2
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::{CartClient, CatalogClient};
use crate::model::CartLine;
use store_actor::{ResourceActor, SharedStore};

/// Creates a new cart actor and its client. Adds look items up through `catalog`.
pub fn new(
    buffer_size: usize,
    store: SharedStore,
    catalog: CatalogClient,
) -> (ResourceActor<CartLine>, CartClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, store);
    (actor, CartClient::new(generic_client, catalog))
}

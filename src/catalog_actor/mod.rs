//! # Catalog Actor
//!
//! Owns the menu: the list of [`MenuItem`]s persisted under `menuItems`.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](store_actor::ActorEntity) implementation for [`MenuItem`]
//! - [`error`] - [`CatalogError`]
//! - [`seed`] - the default menu installed on first run
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, client) = catalog_actor::new(32, store);
//! tokio::spawn(actor.run(()));
//!
//! let menu = client.list_filtered(CategoryFilter::All).await?;
//! ```
//!
//! Menu items have no custom actions; they are only added and removed.

pub mod entity;
pub mod error;
pub mod seed;

pub use error::*;
pub use seed::default_menu;

use crate::clients::CatalogClient;
use crate::model::MenuItem;
use store_actor::{ResourceActor, SharedStore};

/// Creates a new catalog actor and its client.
pub fn new(buffer_size: usize, store: SharedStore) -> (ResourceActor<MenuItem>, CatalogClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, store);
    (actor, CatalogClient::new(generic_client))
}

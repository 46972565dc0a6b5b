//! # Order Actor
//!
//! Owns the order log persisted under `orders`. Orders are only ever appended.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](store_actor::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Read-modify-write
//!
//! The storefront appends orders while the admin console reads them, each through its own
//! actor. The order entity sets `REFRESH_BEFORE_CREATE`, so the actor re-reads the stored log
//! right before every append instead of writing back a stale copy.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use store_actor::{ResourceActor, SharedStore};

/// Creates a new order actor and its client.
pub fn new(buffer_size: usize, store: SharedStore) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, store);
    (actor, OrderClient::new(generic_client))
}

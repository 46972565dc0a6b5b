//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every persisted resource (menu item, cart line,
//! order) implements so a generic [`ResourceActor`](crate::ResourceActor) can own its
//! collection. It names the storage key, the id type, the creation payload, the custom
//! actions, the injected context and the error type, and it provides lifecycle hooks.
//!
//! # Provided Methods (Hooks)
//! Only [`ActorEntity::id`], [`ActorEntity::from_create_params`] and
//! [`ActorEntity::handle_action`] are required. The rest default to "do nothing":
//! - [`ActorEntity::natural_id`]: derive the id from the payload instead of the clock.
//! - [`ActorEntity::seed`]: initial collection when storage is empty or unreadable.
//! - [`ActorEntity::validate`]: shape check applied to every entity read from storage.
//! - [`ActorEntity::on_create`], [`ActorEntity::on_merge`], [`ActorEntity::on_delete`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any persisted entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks may await other actors. The `Context` type is
/// injected into every hook at `run()` time ("late binding" of dependencies).
#[async_trait]
pub trait ActorEntity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Identifier of the entity. Generated ids are millisecond timestamps, hence the `u64`
    /// conversions in both directions.
    type Id: Eq + Hash + Copy + Send + Sync + Display + Debug + From<u64> + Into<u64>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Enum of entity-specific operations (e.g. `Increase`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Backing-store key holding the serialized collection.
    const STORAGE_KEY: &'static str;

    /// Re-read the backing store before each create, so an append never clobbers entries
    /// written by another controller since this actor loaded.
    const REFRESH_BEFORE_CREATE: bool = false;

    fn id(&self) -> Self::Id;

    /// Construct the full entity from the id and payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Id carried by the payload itself. When `Some`, the actor uses it instead of
    /// generating one, and routes a collision to [`ActorEntity::on_merge`].
    fn natural_id(_params: &Self::Create) -> Option<Self::Id> {
        None
    }

    /// Collection installed (and persisted, if non-empty) when nothing usable is stored.
    fn seed() -> Vec<Self> {
        Vec::new()
    }

    /// Checks an entity read back from storage. Any failure makes the whole blob corrupt.
    fn validate(&self) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction, before the entity is appended.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when a create carries a natural id that already exists.
    /// Return `Ok(true)` once the payload is folded into `self`; `Ok(false)` rejects the
    /// create as a duplicate.
    async fn on_merge(
        &mut self,
        _params: Self::Create,
        _ctx: &Self::Context,
    ) -> Result<bool, Self::Error> {
        Ok(false)
    }

    /// Called immediately before the entity is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom entity-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}

//! # Store Actor
//!
//! Building blocks for owning persisted collections with actors. Each collection (a menu,
//! a cart, an order log) lives in exactly one [`ResourceActor`] running in its own Tokio
//! task. The actor loads the collection from a [`KeyValueStore`] when it starts, answers
//! requests one at a time, and writes the whole collection back after every change.
//!
//! ## Why actors over a key/value store?
//!
//! - **No ambient globals**: the collection is owned by the task; everyone else holds a
//!   cloneable [`ResourceClient`].
//! - **No locks**: requests are processed sequentially, so read-modify-write on the
//!   collection is never interleaved.
//! - **Fail closed on read**: blobs are parsed into typed entities and validated; anything
//!   malformed is discarded and the entity's seed collection installed instead.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the persisted type, its storage key, ids, actions
//! 2. **Runtime Layer** ([`ResourceActor`]) - message loop, persistence, id generation
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe requests
//! 4. **Storage Layer** ([`KeyValueStore`]) - [`MemoryStore`] or [`FileStore`]
//!
//! ```rust,ignore
//! let store = MemoryStore::new().shared();
//! let (actor, client) = ResourceActor::<MenuItem>::new(32, store);
//! tokio::spawn(actor.run(()));
//!
//! let id = client.create(MenuItemCreate { .. }).await?;
//! let menu = client.list().await?;
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are passed to `run(context)`, not to `new()`, and reach every hook as
//! `&T::Context`. Entities without dependencies use `()`.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers client requests from queued expectations, so domain clients
//! can be tested without actors or storage.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod storage;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use storage::{FileStore, KeyValueStore, MemoryStore, SharedStore, StorageError};

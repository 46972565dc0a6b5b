//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, which owns one persisted collection. It loads
//! the collection from the backing store when it starts, processes requests sequentially,
//! and writes the whole collection back after every mutation.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::storage::{SharedStore, StorageError};
use chrono::Utc;
use std::collections::HashSet;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// The generic actor that owns an ordered collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the collection (`items`), the
/// receiver end of the channel and a handle to the backing store.
///
/// **Concurrency Model**:
/// Each actor processes its own messages *sequentially*, so the collection needs no
/// `Mutex`. Two actors over the same storage key (say, a storefront catalog and an admin
/// catalog) do not coordinate: the last full write wins.
///
/// # Persistence
///
/// * **Start**: the blob under [`ActorEntity::STORAGE_KEY`] is parsed and every entity
///   validated. A missing, malformed or invalid blob is replaced by [`ActorEntity::seed`].
/// * **Mutation**: the collection is serialized and written in full. If the write fails the
///   in-memory collection is rolled back, so memory and storage never drift apart.
///
/// # Ids
///
/// Generated ids are millisecond timestamps, bumped to `last + 1` when the clock has not
/// advanced, so they stay unique and increasing even within one millisecond.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: SharedStore,
    items: Vec<T>,
    last_id: u64,
}

/// Why a stored blob was rejected.
#[derive(Debug, thiserror::Error)]
enum DecodeError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid entity {id}: {reason}")]
    Invalid { id: String, reason: String },
    #[error("duplicate id {0}")]
    Duplicate(String),
}

fn decode<T: ActorEntity>(raw: &str) -> Result<Vec<T>, DecodeError> {
    let items: Vec<T> = serde_json::from_str(raw)?;
    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
        let id = item.id();
        item.validate().map_err(|e| DecodeError::Invalid {
            id: id.to_string(),
            reason: e.to_string(),
        })?;
        if !seen.insert(id) {
            return Err(DecodeError::Duplicate(id.to_string()));
        }
    }
    Ok(items)
}

fn entity_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> FrameworkError {
    FrameworkError::EntityError(Box::new(e))
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// Nothing is read from `store` until [`ResourceActor::run`] starts.
    pub fn new(buffer_size: usize, store: SharedStore) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store,
            items: Vec::new(),
            last_id: 0,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Loads the collection, then runs the event loop until every client is dropped.
    ///
    /// The `context` argument is injected into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "MenuItem" instead of "restaurant_ordering::model::MenuItem")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");

        match self.hydrate(entity_type).await {
            Ok(size) => info!(entity_type, key = T::STORAGE_KEY, size, "Actor started"),
            Err(e) => {
                error!(entity_type, key = T::STORAGE_KEY, error = %e, "Load failed, starting from seed");
                self.items = T::seed();
            }
        }

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context, entity_type).await;
                    if let Err(e) = &result {
                        warn!(entity_type, error = %e, "Create failed");
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.position(id).map(|pos| self.items[pos].clone());
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.items.len(), "List");
                    let _ = respond_to.send(Ok(self.items.clone()));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(id, &context, entity_type).await;
                    if let Err(e) = &result {
                        warn!(entity_type, %id, error = %e, "Delete failed");
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = self.act(id, action, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Clear { respond_to } => {
                    let snapshot = std::mem::take(&mut self.items);
                    let result = self.commit(snapshot).await;
                    match &result {
                        Ok(()) => info!(entity_type, "Cleared"),
                        Err(e) => warn!(entity_type, error = %e, "Clear failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Reload { respond_to } => {
                    let result = self.hydrate(entity_type).await.map_err(FrameworkError::from);
                    if let Ok(size) = &result {
                        debug!(entity_type, size, "Reloaded");
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.items.len(), "Shutdown");
    }

    /// Replaces the in-memory collection with what the backing store holds.
    async fn hydrate(&mut self, entity_type: &str) -> Result<usize, StorageError> {
        let stored = match self.store.get(T::STORAGE_KEY).await? {
            Some(raw) => match decode::<T>(&raw) {
                Ok(items) => Some(items),
                Err(reason) => {
                    warn!(entity_type, key = T::STORAGE_KEY, %reason, "Discarding unreadable collection");
                    None
                }
            },
            None => None,
        };

        match stored {
            Some(items) => self.items = items,
            None => {
                self.items = T::seed();
                if !self.items.is_empty() {
                    self.persist().await?;
                    info!(entity_type, size = self.items.len(), "Seeded");
                }
            }
        }

        let highest = self.items.iter().map(|item| item.id().into()).max().unwrap_or(0);
        self.last_id = self.last_id.max(highest);
        Ok(self.items.len())
    }

    async fn persist(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.items)?;
        self.store.set(T::STORAGE_KEY, raw).await
    }

    /// Writes the collection; on failure restores `snapshot` so memory matches storage.
    async fn commit(&mut self, snapshot: Vec<T>) -> Result<(), FrameworkError> {
        if let Err(e) = self.persist().await {
            error!(key = T::STORAGE_KEY, error = %e, "Persist failed, rolling back");
            self.items = snapshot;
            return Err(e.into());
        }
        Ok(())
    }

    fn position(&self, id: T::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn next_id(&mut self) -> T::Id {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let id = now.max(self.last_id + 1);
        self.last_id = id;
        T::Id::from(id)
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
        entity_type: &str,
    ) -> Result<T::Id, FrameworkError> {
        if T::REFRESH_BEFORE_CREATE {
            self.hydrate(entity_type).await?;
        }

        let natural = T::natural_id(&params);
        if let Some(pos) = natural.and_then(|id| self.position(id)) {
            let id = self.items[pos].id();
            let snapshot = self.items.clone();
            match self.items[pos].on_merge(params, context).await {
                Ok(true) => {}
                Ok(false) => {
                    self.items = snapshot;
                    return Err(FrameworkError::AlreadyExists(id.to_string()));
                }
                Err(e) => {
                    self.items = snapshot;
                    return Err(entity_error(e));
                }
            }
            self.commit(snapshot).await?;
            info!(entity_type, %id, "Merged");
            return Ok(id);
        }

        let id = match natural {
            Some(id) => id,
            None => self.next_id(),
        };
        let mut item = T::from_create_params(id, params).map_err(entity_error)?;
        item.on_create(context).await.map_err(entity_error)?;

        let snapshot = self.items.clone();
        self.items.push(item);
        self.commit(snapshot).await?;
        info!(entity_type, %id, size = self.items.len(), "Created");
        Ok(id)
    }

    async fn delete(
        &mut self,
        id: T::Id,
        context: &T::Context,
        entity_type: &str,
    ) -> Result<bool, FrameworkError> {
        let Some(pos) = self.position(id) else {
            debug!(entity_type, %id, "Nothing to delete");
            return Ok(false);
        };
        self.items[pos].on_delete(context).await.map_err(entity_error)?;

        let snapshot = self.items.clone();
        self.items.remove(pos);
        self.commit(snapshot).await?;
        info!(entity_type, %id, size = self.items.len(), "Deleted");
        Ok(true)
    }

    async fn act(
        &mut self,
        id: T::Id,
        action: T::Action,
        context: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        let pos = self
            .position(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;

        let snapshot = self.items.clone();
        let result = match self.items[pos].handle_action(action, context).await {
            Ok(result) => result,
            Err(e) => {
                self.items = snapshot;
                return Err(entity_error(e));
            }
        };
        self.commit(snapshot).await?;
        Ok(result)
    }
}

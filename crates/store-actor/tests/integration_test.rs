use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use store_actor::{
    ActorEntity, FrameworkError, KeyValueStore, MemoryStore, ResourceActor, ResourceClient,
    SharedStore, StorageError,
};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Tally {
    id: u64,
    label: String,
    count: u32,
}

#[derive(Debug)]
struct TallyCreate {
    key: Option<u64>,
    label: String,
}

#[derive(Debug)]
enum TallyAction {
    Bump,
    Reject,
}

#[derive(Debug, thiserror::Error)]
enum TallyError {
    #[error("count must be positive")]
    ZeroCount,
    #[error("rejected")]
    Rejected,
}

#[async_trait]
impl ActorEntity for Tally {
    type Id = u64;
    type Create = TallyCreate;
    type Action = TallyAction;
    type ActionResult = u32;
    type Context = ();
    type Error = TallyError;

    const STORAGE_KEY: &'static str = "tallies";

    fn id(&self) -> u64 {
        self.id
    }

    fn from_create_params(id: u64, params: TallyCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            label: params.label,
            count: 1,
        })
    }

    fn natural_id(params: &TallyCreate) -> Option<u64> {
        params.key
    }

    fn seed() -> Vec<Self> {
        vec![Tally {
            id: 1,
            label: "seed".to_string(),
            count: 1,
        }]
    }

    fn validate(&self) -> Result<(), Self::Error> {
        if self.count == 0 {
            return Err(TallyError::ZeroCount);
        }
        Ok(())
    }

    async fn on_merge(&mut self, _params: TallyCreate, _ctx: &()) -> Result<bool, Self::Error> {
        self.count += 1;
        Ok(true)
    }

    async fn handle_action(&mut self, action: TallyAction, _ctx: &()) -> Result<u32, Self::Error> {
        match action {
            TallyAction::Bump => {
                self.count += 1;
                Ok(self.count)
            }
            TallyAction::Reject => {
                self.count = 99;
                Err(TallyError::Rejected)
            }
        }
    }
}

/// Store whose writes can be switched off to exercise rollback.
#[derive(Clone, Default)]
struct FlakyStore {
    inner: MemoryStore,
    fail_writes: Arc<AtomicBool>,
}

#[async_trait]
impl KeyValueStore for FlakyStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Io(std::io::Error::other("disk full")));
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key).await
    }
}

fn start(store: SharedStore) -> ResourceClient<Tally> {
    let (actor, client) = ResourceActor::<Tally>::new(10, store);
    tokio::spawn(actor.run(()));
    client
}

async fn stored(store: &MemoryStore) -> Vec<Tally> {
    let raw = store.get("tallies").await.unwrap().expect("collection persisted");
    serde_json::from_str(&raw).unwrap()
}

// --- Tests ---

#[tokio::test]
async fn test_first_run_installs_and_persists_seed() {
    let store = MemoryStore::new();
    let client = start(store.shared());

    let items = client.list().await.unwrap();
    assert_eq!(items, Tally::seed());
    assert_eq!(stored(&store).await, Tally::seed());
}

#[tokio::test]
async fn test_full_lifecycle_persists_every_mutation() {
    let store = MemoryStore::new();
    let client = start(store.shared());

    // 1. Create with a generated id
    let id = client
        .create(TallyCreate {
            key: None,
            label: "lunch".into(),
        })
        .await
        .unwrap();
    assert!(id > 1, "generated ids come from the clock");
    assert_eq!(stored(&store).await.len(), 2);

    // 2. Action
    let count = client.perform_action(id, TallyAction::Bump).await.unwrap();
    assert_eq!(count, 2);
    assert_eq!(stored(&store).await[1].count, 2);

    // 3. Delete present and absent ids
    assert!(client.delete(id).await.unwrap());
    assert!(!client.delete(id).await.unwrap());
    assert_eq!(stored(&store).await, Tally::seed());

    // 4. Clear
    client.clear().await.unwrap();
    assert!(client.list().await.unwrap().is_empty());
    assert!(stored(&store).await.is_empty());
}

#[tokio::test]
async fn test_natural_id_merges_instead_of_duplicating() {
    let store = MemoryStore::new();
    let client = start(store.shared());

    for _ in 0..3 {
        let id = client
            .create(TallyCreate {
                key: Some(42),
                label: "fries".into(),
            })
            .await
            .unwrap();
        assert_eq!(id, 42);
    }

    let items = client.list().await.unwrap();
    assert_eq!(items.iter().filter(|t| t.id == 42).count(), 1);
    assert_eq!(items.iter().find(|t| t.id == 42).unwrap().count, 3);
    assert_eq!(stored(&store).await, items);
}

#[tokio::test]
async fn test_generated_ids_are_unique_and_increasing() {
    let client = start(MemoryStore::new().shared());

    let mut ids = Vec::new();
    for n in 0..20 {
        let id = client
            .create(TallyCreate {
                key: None,
                label: format!("burst {n}"),
            })
            .await
            .unwrap();
        ids.push(id);
    }

    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[tokio::test]
async fn test_action_on_unknown_id_is_not_found() {
    let client = start(MemoryStore::new().shared());

    let result = client.perform_action(777, TallyAction::Bump).await;
    assert!(matches!(result, Err(ref e) if e.is_not_found()));
}

#[tokio::test]
async fn test_failed_action_leaves_entity_untouched() {
    let store = MemoryStore::new();
    let client = start(store.shared());

    let result = client.perform_action(1, TallyAction::Reject).await;
    assert!(matches!(result, Err(FrameworkError::EntityError(_))));

    let seed = client.get(1).await.unwrap().unwrap();
    assert_eq!(seed.count, 1);
}

#[tokio::test]
async fn test_corrupt_blobs_are_replaced_by_seed() {
    let blobs = [
        "not json at all",
        r#"[{"id": 5, "label": "zero", "count": 0}]"#,
        r#"[{"id": 5, "label": "a", "count": 1}, {"id": 5, "label": "b", "count": 1}]"#,
    ];

    for blob in blobs {
        let store = MemoryStore::new();
        store.set("tallies", blob.to_string()).await.unwrap();

        let client = start(store.shared());
        assert_eq!(client.list().await.unwrap(), Tally::seed(), "blob: {blob}");
        assert_eq!(stored(&store).await, Tally::seed());
    }
}

#[tokio::test]
async fn test_reload_picks_up_writes_from_another_actor() {
    let store = MemoryStore::new();
    let first = start(store.shared());
    let second = start(store.shared());

    // Both loaded the seed; the second one adds an entry.
    assert_eq!(first.list().await.unwrap().len(), 1);
    second
        .create(TallyCreate {
            key: Some(8),
            label: "dessert".into(),
        })
        .await
        .unwrap();

    assert_eq!(first.list().await.unwrap().len(), 1);
    assert_eq!(first.reload().await.unwrap(), 2);
    assert!(first.get(8).await.unwrap().is_some());
}

#[tokio::test]
async fn test_failed_write_rolls_back_memory() {
    let store = FlakyStore::default();
    let client = start(Arc::new(store.clone()));
    assert_eq!(client.list().await.unwrap().len(), 1);

    store.fail_writes.store(true, Ordering::SeqCst);
    let result = client
        .create(TallyCreate {
            key: None,
            label: "lost".into(),
        })
        .await;
    assert!(matches!(result, Err(FrameworkError::Storage(_))));
    assert!(client.clear().await.is_err());

    // Memory still matches what storage holds.
    assert_eq!(client.list().await.unwrap(), Tally::seed());
}

#[tokio::test]
async fn test_closed_actor_reports_actor_closed() {
    let (actor, client) = ResourceActor::<Tally>::new(10, MemoryStore::new().shared());
    drop(actor);

    let result = client.list().await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}

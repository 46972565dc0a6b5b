//! # Controllers & Lifecycle
//!
//! The two controllers of the application. Each one creates its actors, injects their
//! context, spawns them, and shuts them down by dropping the clients and awaiting the
//! task handles.
//!
//! - [`Storefront`]: catalog, cart and order actors behind the customer page.
//! - [`AdminConsole`]: catalog and order actors plus the admin session.
//!
//! The controllers share nothing but the backing store. Each actor loads its collection
//! when it starts, so a controller sees what was persisted, never another controller's
//! memory:
//!
//! ```rust,ignore
//! let store = config.open_store().await?;
//! let mut shop = Storefront::start(&config, store.clone()).await?;
//! let mut admin = AdminConsole::start(&config, store, MemoryStore::new().shared()).await?;
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. Drop all clients, closing the sender side of each channel.
//! 2. Each actor's `recv()` returns `None`; it logs its final size and exits.
//! 3. Await every task; a panicked actor surfaces as [`ShutdownError`].
//!
//! The cart actor's catalog client is held by the cart client, not by an actor context, so
//! dropping the cart client releases it.

pub mod admin_console;
pub mod storefront;

pub use admin_console::*;
pub use storefront::*;

use tokio::task::{JoinError, JoinHandle};
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum ShutdownError {
    #[error("Actor task failed: {0}")]
    TaskFailed(#[from] JoinError),
}

async fn join_all(handles: Vec<JoinHandle<()>>) -> Result<(), ShutdownError> {
    for handle in handles {
        if let Err(e) = handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(e.into());
        }
    }
    Ok(())
}

//! # Generic Messages
//!
//! Requests sent from a [`ResourceClient`](crate::ResourceClient) to a
//! [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request processed by a resource actor.
///
/// The variants cover what a persisted collection needs: append (`Create`), read one
/// (`Get`), read all in order (`List`), remove (`Delete`), entity-specific mutation
/// (`Action`), empty the collection (`Clear`) and re-hydrate from the backing store
/// (`Reload`). There is no generic update: entities change only through their actions.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    /// Responds `true` when something was removed; absent ids are not an error.
    Delete {
        id: T::Id,
        respond_to: Response<bool>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Clear {
        respond_to: Response<()>,
    },
    /// Responds with the collection size after reloading.
    Reload {
        respond_to: Response<usize>,
    },
}

use thiserror::Error;

use trialdesk_client::error::ApiError;
use trialdesk_core::error::CoreError;

#[derive(Debug, Error)]
pub enum ViewError {
    /// A mutating request is already in flight for this session.
    #[error("a commit is already in flight")]
    CommitInFlight,

    #[error("no add, edit, or delete session is open")]
    NothingToCommit,

    /// The entity has no server id yet.
    #[error("entity is unsaved")]
    Unsaved,

    #[error("draft encode error: {0}")]
    Encode(serde_json::Error),

    #[error(transparent)]
    Entity(#[from] CoreError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("snapshot decode error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BusinessError {
    #[error("Failed to parse state snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

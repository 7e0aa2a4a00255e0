use thiserror::Error;

/// Error type that captures catalog persistence failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

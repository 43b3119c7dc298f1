use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashTableError {
    #[error("invalid hash table capacity {capacity}: capacity must be at least 1 and allocatable")]
    InvalidConfig { capacity: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("unknown vertex `{0}`")]
    UnknownVertex(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] HashTableError),
}

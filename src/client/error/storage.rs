use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Durable storage is not available on this platform")]
    Unavailable,
    #[error("Failed to write {key:?} to durable storage: {reason}")]
    WriteFailed { key: String, reason: String },
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[cfg(not(target_arch = "wasm32"))]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

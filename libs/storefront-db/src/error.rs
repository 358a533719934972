use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {collection}: {source}")]
    Io {
        collection: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize {collection}: {source}")]
    Serialize {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{collection} already contains a record with key {key}")]
    Duplicate { collection: &'static str, key: String },
}

pub type Result<T> = std::result::Result<T, StoreError>;

use crate::post::post_model::StoredPost;
use log::{debug, error};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed posts file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Flat JSON file holding the whole post collection.
pub struct PostStore {
    path: PathBuf,
}

impl PostStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        PostStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the collection. A file that does not exist yet is an empty collection.
    pub async fn load(&self) -> Result<Vec<StoredPost>, StoreError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Posts file {} does not exist yet", self.path.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_slice(&raw).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite the file with the full collection, pretty-printed.
    pub async fn save(&self, posts: &[StoredPost]) -> Result<(), StoreError> {
        let body = serde_json::to_string_pretty(posts).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })?;

        tokio::fs::write(&self.path, body)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })
    }

    /// Like `load`, but failures are logged and read as an empty collection.
    pub async fn read(&self) -> Vec<StoredPost> {
        self.load().await.unwrap_or_else(|e| {
            error!("Error reading posts file: {}", e);
            Vec::new()
        })
    }

    /// Like `save`, but failures are only logged.
    pub async fn write(&self, posts: &[StoredPost]) {
        if let Err(e) = self.save(posts).await {
            error!("Error writing posts file: {}", e);
        }
    }
}

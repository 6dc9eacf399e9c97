//! JSON File Repository
//!
//! Keeps the list as one JSON array in a single file, rewritten in full on
//! every persist. Writes go to `<file>.tmp` and are renamed over the target.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::domain::{Entity, DomainError, DomainResult};
use super::traits::ListRepository;

/// File-backed list repository
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Staging file next to the target, replaced onto it by rename
    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl<T> ListRepository<T> for JsonFileRepository
where
    T: Entity + Serialize + DeserializeOwned + 'static,
{
    async fn load(&self) -> DomainResult<Vec<T>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| DomainError::Load(format!("{}: {}", self.path.display(), e)))?;

        serde_json::from_str(&content)
            .map_err(|e| DomainError::Load(format!("{}: {}", self.path.display(), e)))
    }

    async fn persist(&self, items: &[T]) -> DomainResult<()> {
        let json = serde_json::to_string(items)
            .map_err(|e| DomainError::Internal(format!("Failed to serialize list: {}", e)))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| DomainError::Persist(format!("{}: {}", parent.display(), e)))?;
            }
        }

        // Write a sibling file first so a crash never leaves a truncated list behind
        let tmp_path = self.tmp_path();
        tokio::fs::write(&tmp_path, json)
            .await
            .map_err(|e| DomainError::Persist(format!("{}: {}", tmp_path.display(), e)))?;

        if let Err(e) = tokio::fs::rename(&tmp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(DomainError::Persist(format!("{}: {}", self.path.display(), e)));
        }
        Ok(())
    }
}

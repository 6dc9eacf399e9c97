//! In-Memory Repository
//!
//! Holds the "persisted" list in process memory. Used by tests and by
//! shells that do not want a file.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Mutex;

use crate::domain::{Entity, DomainError, DomainResult};
use super::traits::ListRepository;

pub struct MemoryRepository<T> {
    saved: Mutex<Option<Vec<T>>>,
    persist_calls: AtomicUsize,
    fail_persist: AtomicBool,
}

impl<T: Entity> MemoryRepository<T> {
    /// Repository with nothing saved yet
    pub fn new() -> Self {
        Self {
            saved: Mutex::new(None),
            persist_calls: AtomicUsize::new(0),
            fail_persist: AtomicBool::new(false),
        }
    }

    /// Repository that already holds `items`
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            saved: Mutex::new(Some(items)),
            ..Self::new()
        }
    }

    /// Last persisted list, if any
    pub async fn snapshot(&self) -> Option<Vec<T>> {
        self.saved.lock().await.clone()
    }

    /// Number of `persist` calls, failed ones included
    pub fn persist_calls(&self) -> usize {
        self.persist_calls.load(Ordering::SeqCst)
    }

    /// Make subsequent persists fail (simulates a write error)
    pub fn set_fail_persist(&self, fail: bool) {
        self.fail_persist.store(fail, Ordering::SeqCst);
    }
}

impl<T: Entity> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity + 'static> ListRepository<T> for MemoryRepository<T> {
    async fn load(&self) -> DomainResult<Vec<T>> {
        self.saved
            .lock()
            .await
            .clone()
            .ok_or_else(|| DomainError::Load("Nothing saved yet".to_string()))
    }

    async fn persist(&self, items: &[T]) -> DomainResult<()> {
        self.persist_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_persist.load(Ordering::SeqCst) {
            return Err(DomainError::Persist("Simulated write failure".to_string()));
        }
        *self.saved.lock().await = Some(items.to_vec());
        Ok(())
    }
}

//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for list persistence.
//! Implementations can use a JSON file, in-memory, etc.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// Stores an ordered list of entities as a single unit
///
/// There are no per-entity writes: every `persist` replaces the whole list.
/// All operations are async to support various backends.
#[async_trait]
pub trait ListRepository<T: Entity>: Send + Sync {
    /// Read the full persisted list
    ///
    /// Returns `DomainError::Load` when nothing was saved yet or the stored
    /// data is not a valid list.
    async fn load(&self) -> DomainResult<Vec<T>>;

    /// Overwrite the persisted list with `items`
    async fn persist(&self, items: &[T]) -> DomainResult<()>;
}

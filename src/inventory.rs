//! Inventory Store
//!
//! Owns the ordered picolé list and mirrors it to a `ListRepository` after
//! every mutation. Persist failures never roll back the in-memory list, so the
//! two may differ until the next successful persist.

use crate::domain::{DomainError, DomainResult, Picole, PicoleDraft};
use crate::repository::ListRepository;

pub struct Inventory<R> {
    items: Vec<Picole>,
    repo: R,
}

impl<R: ListRepository<Picole>> Inventory<R> {
    /// Empty inventory; call `load` to read what was saved
    pub fn new(repo: R) -> Self {
        Self {
            items: Vec::new(),
            repo,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn items(&self) -> &[Picole] {
        &self.items
    }

    pub fn get(&self, id: u32) -> Option<&Picole> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Id the next created item will get: last item's id + 1, or 1.
    /// `None` once the last id is `u32::MAX`.
    pub fn next_id(&self) -> Option<u32> {
        match self.items.last() {
            Some(item) => item.id.checked_add(1),
            None => Some(1),
        }
    }

    /// Replace the in-memory list with the persisted one.
    ///
    /// On failure the list is left empty and the error is returned for the
    /// caller to ignore or report.
    pub async fn load(&mut self) -> DomainResult<&[Picole]> {
        match self.repo.load().await {
            Ok(items) => {
                log::info!("Loaded {} picoles", items.len());
                self.items = items;
                Ok(self.items.as_slice())
            }
            Err(e) => {
                log::warn!("No saved picoles or failed to read them: {}", e);
                self.items.clear();
                Err(e)
            }
        }
    }

    /// Create (no `editing_id`) or replace (with `editing_id`) an item, then
    /// persist the full list.
    ///
    /// An incomplete draft is rejected without touching the list or the
    /// repository. An `editing_id` that matches nothing leaves the list as it
    /// was but still persists it.
    pub async fn upsert(
        &mut self,
        draft: &PicoleDraft,
        editing_id: Option<u32>,
    ) -> DomainResult<&[Picole]> {
        if !draft.is_complete() {
            return Err(DomainError::InvalidInput(format!(
                "Missing fields: {}",
                draft.missing_fields().join(", ")
            )));
        }

        match editing_id {
            Some(id) => {
                if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
                    *item = Picole::from_draft(id, draft);
                    log::debug!("Updated picole {}", id);
                } else {
                    log::debug!("Picole {} not in list, nothing to update", id);
                }
            }
            None => {
                let id = self
                    .next_id()
                    .ok_or_else(|| DomainError::Internal("id space exhausted".to_string()))?;
                self.items.push(Picole::from_draft(id, draft));
                log::debug!("Created picole {}", id);
            }
        }

        self.persist().await?;
        Ok(self.items.as_slice())
    }

    /// Drop the item with `id` (if any) and persist the full list
    pub async fn remove(&mut self, id: u32) -> DomainResult<&[Picole]> {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            log::debug!("Picole {} not in list, nothing to remove", id);
        }

        self.persist().await?;
        Ok(self.items.as_slice())
    }

    /// Overwrite the repository with the current list
    pub async fn persist(&self) -> DomainResult<()> {
        self.repo.persist(&self.items).await.map_err(|e| {
            log::error!("Failed to save picoles: {}", e);
            e
        })
    }
}

//! Picole App
//!
//! Glues the form state to the inventory: submit, edit and delete flows as
//! the single screen drives them.

use crate::domain::{DomainError, DomainResult, Picole};
use crate::form::PicoleForm;
use crate::inventory::Inventory;
use crate::repository::ListRepository;

pub struct PicoleApp<R> {
    inventory: Inventory<R>,
    form: PicoleForm,
}

impl<R: ListRepository<Picole>> PicoleApp<R> {
    pub fn new(repo: R) -> Self {
        Self {
            inventory: Inventory::new(repo),
            form: PicoleForm::new(),
        }
    }

    /// Load saved items once at startup. A missing or unreadable file means
    /// an empty inventory; returns the number of items loaded.
    pub async fn start(&mut self) -> usize {
        match self.inventory.load().await {
            Ok(items) => items.len(),
            Err(_) => 0,
        }
    }

    pub fn items(&self) -> &[Picole] {
        self.inventory.items()
    }

    pub fn inventory(&self) -> &Inventory<R> {
        &self.inventory
    }

    pub fn form(&self) -> &PicoleForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PicoleForm {
        &mut self.form
    }

    /// Create or update from the form.
    ///
    /// The form is cleared once the list changed, even when saving it failed;
    /// that failure is still returned. A rejected submit (incomplete form, no
    /// id left) keeps the form as typed.
    pub async fn submit(&mut self) -> DomainResult<()> {
        let draft = self.form.draft();
        let result = self
            .inventory
            .upsert(&draft, self.form.editing_id)
            .await
            .map(|_| ());

        if matches!(result, Ok(()) | Err(DomainError::Persist(_))) {
            self.form.clear();
        }
        result
    }

    /// Load an item into the form for editing
    pub fn edit(&mut self, id: u32) -> DomainResult<&PicoleForm> {
        let picole = self
            .inventory
            .get(id)
            .ok_or_else(|| DomainError::NotFound(format!("Picole {}", id)))?;
        self.form.begin_edit(picole);
        Ok(&self.form)
    }

    /// Delete an item; clears the form if it was editing that item
    pub async fn delete(&mut self, id: u32) -> DomainResult<()> {
        let result = self.inventory.remove(id).await.map(|_| ());
        if self.form.editing_id == Some(id) {
            self.form.clear();
        }
        result
    }

    /// Drop the pending edit without saving
    pub fn cancel_edit(&mut self) {
        self.form.clear();
    }
}

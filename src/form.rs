//! Picole Form State
//!
//! Non-visual state behind the create/edit form: four text fields plus the id
//! of the item being edited, if any.

use serde::{Deserialize, Serialize};

use crate::domain::{Picole, PicoleDraft};

pub const CREATE_LABEL: &str = "Cadastrar Picolé";
pub const UPDATE_LABEL: &str = "Atualizar Picolé";

/// Form field identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Price,
    Flavor,
    Quantity,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PicoleForm {
    pub name: String,
    pub price: String,
    pub flavor: String,
    pub quantity: String,
    /// Item targeted by the next submit (None = create)
    pub editing_id: Option<u32>,
}

impl PicoleForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Price => self.price = value,
            FormField::Flavor => self.flavor = value,
            FormField::Quantity => self.quantity = value,
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Price => &self.price,
            FormField::Flavor => &self.flavor,
            FormField::Quantity => &self.quantity,
        }
    }

    /// Fill the form from an existing item and target it for update
    pub fn begin_edit(&mut self, picole: &Picole) {
        self.name = picole.name.clone();
        self.price = picole.price.clone();
        self.flavor = picole.flavor.clone();
        self.quantity = picole.quantity.clone();
        self.editing_id = Some(picole.id);
    }

    /// Empty every field and go back to create mode
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn draft(&self) -> PicoleDraft {
        PicoleDraft::new(
            self.name.as_str(),
            self.price.as_str(),
            self.flavor.as_str(),
            self.quantity.as_str(),
        )
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            UPDATE_LABEL
        } else {
            CREATE_LABEL
        }
    }
}

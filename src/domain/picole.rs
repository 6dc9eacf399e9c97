//! Picole Entity
//!
//! One popsicle inventory record. Price and quantity are kept as the text the
//! user typed; nothing parses them.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A popsicle in the inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picole {
    /// Unique identifier, assigned by the inventory
    pub id: u32,
    pub name: String,
    /// Numeric-looking text, stored as typed
    pub price: String,
    pub flavor: String,
    /// Numeric-looking text, stored as typed
    pub quantity: String,
}

impl Picole {
    /// Build a record from a draft under the given id
    pub fn from_draft(id: u32, draft: &PicoleDraft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            price: draft.price.clone(),
            flavor: draft.flavor.clone(),
            quantity: draft.quantity.clone(),
        }
    }

    /// The editable fields of this record
    pub fn to_draft(&self) -> PicoleDraft {
        PicoleDraft {
            name: self.name.clone(),
            price: self.price.clone(),
            flavor: self.flavor.clone(),
            quantity: self.quantity.clone(),
        }
    }
}

impl Entity for Picole {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// The four user-entered values before they become a `Picole`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PicoleDraft {
    pub name: String,
    pub price: String,
    pub flavor: String,
    pub quantity: String,
}

impl PicoleDraft {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        flavor: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            flavor: flavor.into(),
            quantity: quantity.into(),
        }
    }

    /// True when every field has a value. Whitespace counts as a value.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Names of the empty fields, in form order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("price", &self.price),
            ("flavor", &self.flavor),
            ("quantity", &self.quantity),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

//! Domain Layer
//!
//! Contains the inventory entity and core abstractions.
//! This layer has NO external dependencies (except serde and thiserror).

mod entity;
mod picole;

pub use entity::{Entity, DomainError, DomainResult};
pub use picole::{Picole, PicoleDraft};

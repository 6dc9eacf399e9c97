//! Commands Layer
//!
//! Command handlers that bridge the mobile shell to the inventory.

mod picole_cmd;

pub use picole_cmd::*;

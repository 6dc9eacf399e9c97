//! Repository Layer
//!
//! Whole-list persistence abstractions and implementations.

mod traits;
mod json_file;
mod memory;

#[cfg(test)]
mod tests;

pub use traits::ListRepository;
pub use json_file::JsonFileRepository;
pub use memory::MemoryRepository;

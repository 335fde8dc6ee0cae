//! Storage abstraction and implementations for Stride.
//!
//! This crate provides a trait-based storage interface with an in-memory
//! state container and a JSON-file reference implementation, plus the
//! completion-log service that toggles daily completions on top of it.

#![warn(missing_docs)]

pub mod trait_;
pub mod memory;
pub mod json_storage;
pub mod log;

pub use trait_::{CompletionFilter, Result, Storage, StorageError};
pub use memory::MemoryStorage;
pub use json_storage::JsonStorage;
pub use log::CompletionLog;

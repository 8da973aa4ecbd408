//! Configuration and domain models shared by the service.

pub mod config;
pub mod models;

pub use models::{Todo, TodoPatch};

//! Shared types for the AlgoCDK client: wire models and the error taxonomy.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;

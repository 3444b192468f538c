//! FitForge Shared Library
//!
//! Wire types, domain constants and validation helpers used by the backend
//! and by any Rust client of its API.

pub mod errors;
pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use models::*;
pub use types::*;

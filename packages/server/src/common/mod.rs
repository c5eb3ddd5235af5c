// Common types and errors shared across the application

pub mod errors;
pub mod types;

pub use errors::*;
pub use types::*;

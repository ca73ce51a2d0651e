/// Shared utilities: error types, the crate-wide `Result` alias and
/// file-safety checks used by the filesystem adapters.
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;

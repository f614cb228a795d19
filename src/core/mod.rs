// Public modules
pub mod config;
pub mod error;
pub mod rename;

// Internal modules - not part of public API
pub(crate) mod paths;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use rename::{Registry, RenameRule, RenameTable, TableSpec};

/*!
 * Core Module
 * Fundamental types, configuration, and error handling
 */

pub mod config;
pub mod errors;
pub mod serde;
pub mod types;

// Re-export for convenience
pub use config::ManagerConfig;
pub use errors::*;
pub use types::*;

//! Bootstrap lint, format and test tooling into a React project.
//!
//! The library holds every step of the setup so the binary stays a thin
//! wrapper and the steps can be exercised against a temporary directory.

pub mod bootstrap;
pub mod config;
pub mod configs;
pub mod hooks;
pub mod installer;
pub mod manifest;
pub mod platform;

mod log;

// Re-export commonly used types
pub use bootstrap::Report;
pub use config::{Config, EslintFlavor};
pub use platform::Platform;

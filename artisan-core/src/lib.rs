pub mod config;
pub mod prompt;
pub mod types;

// Keep the public surface small and intentional.
pub use config::*;
pub use prompt::*;
pub use types::*;

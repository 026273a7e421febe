pub mod command;
pub mod error;
pub mod output_macros;
pub mod platform;
pub mod validation;

// Re-export the subprocess seam for convenience
pub use command::{CommandRunner, SystemRunner};

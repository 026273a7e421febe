//! django-forge application library.
//!
//! Scaffolds a new Django backend: collects a project name, creates a
//! virtual environment, installs a fixed dependency set, and drives
//! Django's project/app generators. All subprocess execution goes
//! through the `CommandRunner` seam in `forge-core`.

pub mod cli;
pub mod dependencies;
pub mod generator;
pub mod prompt;

// Re-export key types for tests and external use
pub use generator::{ProjectGenerator, MAX_NAME_ATTEMPTS};
pub use prompt::{InputSource, ScriptedInput, StdinInput};

//! Shared bootstrap utilities for tracker front-ends.
//!
//! Provides configuration loading, content assembly, and tracker setup that
//! can be reused by the CLI host or any other front-end.
pub mod builder;
pub mod config;
pub mod dirs;

pub use builder::{TrackerSetup, TrackerSetupBuilder};
pub use config::CliConfig;

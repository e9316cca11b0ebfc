//! # Chattia Core
//!
//! Shared foundation for the Chattia workspace: the error taxonomy and the
//! TOML configuration system. Every other crate depends on this one and
//! nothing here depends on anything else in the workspace.

pub mod config;
pub mod error;

pub use config::ChattiaConfig;
pub use error::{ChattiaError, Result};

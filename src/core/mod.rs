//! # Core Module
//!
//! Process-level configuration shared by the binaries.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod config;

pub use config::Config;

//! StudioDesk Core Library
//!
//! This crate provides shared types, errors, configuration, and logging
//! setup for StudioDesk.

pub mod config;
pub mod error;
pub mod logging;

pub use config::AppConfig;
pub use error::{StudioDeskError, StudioDeskResult};

//! Shared utilities for edita
//!
//! This crate provides common functionality used across the edita workspace:
//! logging setup and environment-driven configuration.

pub mod config;
pub mod logging;

pub use config::{Config, ConfigError};
pub use logging::{init_tracing, init_tracing_with};

//! Core abstractions for edita
//!
//! This crate defines the [`Agent`] trait and the error type shared by tools,
//! agents and the runner.

pub mod agent;
pub mod error;

pub use agent::Agent;
pub use error::{Error, Result};

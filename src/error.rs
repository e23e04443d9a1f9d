//! Error types for memgrid operations.
//!
//! This module provides the main error type [`MemgridError`] which wraps the
//! error conditions that can occur while computing or exporting a schematic.

use std::io;

use thiserror::Error;

use crate::config::ConfigError;

/// The main error type for memgrid operations.
///
/// Layout errors are all-or-nothing: a failing spec never produces a
/// partial command sequence, so callers can surface the message and return
/// to input collection without cleanup.
#[derive(Debug, Error)]
pub enum MemgridError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The four memory/chip parameters cannot produce a chip grid.
    #[error("invalid memory configuration: {0}")]
    InvalidSpec(String),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for MemgridError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

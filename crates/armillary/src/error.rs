//! Error types for Armillary operations.
//!
//! This module provides the main error type [`ArmillaryError`] which wraps
//! the error conditions that can occur while building and rendering a
//! diagram.

use std::io;

use thiserror::Error;

use armillary_core::model::ModelError;

/// The main error type for Armillary operations.
#[derive(Debug, Error)]
pub enum ArmillaryError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for ArmillaryError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

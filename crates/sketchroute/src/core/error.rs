//! Core error types for diagram generation
//!
//! This module defines the error types used throughout the classify → build →
//! serialize pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Core error types for diagram generation
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("Build error ({archetype}): {message}")]
    Build { archetype: String, message: String },

    #[error("Invalid model: {message}")]
    InvalidModel { message: String },

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    #[error("IO error writing '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown diagram type: {diagram_type}")]
    UnknownArchetype { diagram_type: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl DiagramError {
    /// Create a new build error for the given archetype
    pub fn build_error(archetype: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Build {
            archetype: archetype.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid model error
    pub fn invalid_model(message: impl Into<String>) -> Self {
        Self::InvalidModel {
            message: message.into(),
        }
    }

    /// Create a new IO error tied to a destination path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a new invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

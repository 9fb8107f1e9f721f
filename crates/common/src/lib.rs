//! Common types and utilities for cloud-api-models
//!
//! This crate contains the shared value types and error taxonomy used by the
//! provider and CLI crates.

mod service;

pub use service::Service;

use std::path::PathBuf;
use thiserror::Error;

/// JSON object as decoded from a description file (key order preserved)
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Errors that can occur while resolving service descriptions
///
/// A missing file is not an error; lookups report absence through `Option`
/// or an empty [`JsonMap`] instead. `MalformedDescription` is reserved for
/// JSON syntax errors; a well-formed document that cannot be read as a
/// mapping (a bare string, number or boolean) is `UnexpectedDocument`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Malformed description {}: {message}", path.display())]
    MalformedDescription { path: PathBuf, message: String },

    #[error("Unexpected document in {}: expected an object, found {found}", path.display())]
    UnexpectedDocument { path: PathBuf, found: &'static str },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    pub fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ApiError::MalformedDescription {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ApiError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for lookup operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Kinds of per-service, per-version files found in a model directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptionKind {
    /// Human-readable API description (`.normal.json`)
    Api,
    /// Whitespace-stripped API description (`.normal.min.json`)
    MinifiedApi,
    /// Pagination config (`.paginators.json`)
    Paginators,
    /// Waiter config (`.waiters.json`)
    Waiters,
}

impl DescriptionKind {
    /// File name suffix, including the leading dot
    pub const fn extension(self) -> &'static str {
        match self {
            DescriptionKind::Api => ".normal.json",
            DescriptionKind::MinifiedApi => ".normal.min.json",
            DescriptionKind::Paginators => ".paginators.json",
            DescriptionKind::Waiters => ".waiters.json",
        }
    }

    /// API description kind for the given minified flag
    pub const fn api(minified: bool) -> Self {
        if minified {
            DescriptionKind::MinifiedApi
        } else {
            DescriptionKind::Api
        }
    }
}

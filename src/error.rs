//! Sitemap writer error types

use thiserror::Error;

/// Errors surfaced while producing sitemap documents
///
/// The write path performs no semantic validation of its own; the only
/// failures it produces come from the output stream or from route
/// resolution. [`SitemapError::InvalidValue`] is raised exclusively by
/// the opt-in checks in [`crate::validation`].
#[derive(Error, Debug)]
pub enum SitemapError {
    /// IO error from the underlying output stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A route could not be resolved into an absolute URL
    #[error("route resolution failed: {0}")]
    RouteResolution(String),

    /// A field value failed an opt-in validation check
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type alias using SitemapError
pub type Result<T> = std::result::Result<T, SitemapError>;

//! Error types for the snapshot renderer

use thiserror::Error;

/// Result type alias for renderer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or delivering a snapshot
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to allocate the off-screen drawing surface
    #[error("Surface allocation failed: {0}")]
    Surface(String),

    /// Invalid renderer configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Failed to render content
    #[error("Rendering failed: {0}")]
    Render(String),

    /// Failed to encode the surface as PNG
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    /// The share attempt was rejected (always masked by the download fallback)
    #[cfg(feature = "share")]
    #[error("Share failed: {0}")]
    Share(String),

    /// Failed to write the snapshot to disk
    #[error("Download failed: {0}")]
    Download(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

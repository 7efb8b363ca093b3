//! Error types for terrain curve generation

use thiserror::Error;

/// Errors that can occur while generating or triangulating terrain
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TerrainError {
    /// A call received arguments it cannot work with
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Configuration validation failed
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Ear clipping found no ear to cut (self-intersecting or degenerate input)
    ///
    /// The triangles emitted before the triangulator gave up are kept so the
    /// caller can still render a partial fill if it wants to.
    #[error(
        "degenerate polygon: no ear left among {remaining} vertices after {} triangles",
        .triangles.len()
    )]
    DegeneratePolygon {
        /// Vertices still left in the polygon when clipping stopped
        remaining: usize,
        /// Triangles found before clipping stopped
        triangles: Vec<[usize; 3]>,
    },
}

/// Result type alias for terrain operations
pub type Result<T> = std::result::Result<T, TerrainError>;

//! Error types for triangle net operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for triangle net operations.
pub type NetResult<T> = Result<T, NetError>;

/// Errors that can occur while building or querying a triangle net.
#[derive(Debug, Error)]
pub enum NetError {
    /// Flat triangle list whose length is not a multiple of 3.
    #[error("triangle list has {len} points, expected a multiple of 3")]
    InvalidInput { len: usize },

    /// A point with a NaN or infinite coordinate.
    #[error("point {position} has a non-finite coordinate")]
    NonFiniteCoordinate { position: usize },

    /// A coordinate too large to key at the net's precision.
    #[error("point {position} is out of range at {precision} decimal places")]
    CoordinateOutOfRange { position: usize, precision: u32 },

    /// Vertex index past the end of the vertex list.
    #[error("vertex index {index} out of range (net has {count} vertices)")]
    IndexOutOfRange { index: u32, count: usize },

    /// Error reading from a file.
    #[error("failed to read triangles from {path}: {source}")]
    IoRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error writing to a file.
    #[error("failed to write {path}: {source}")]
    IoWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing a triangle file.
    #[error("failed to parse triangles from {path}: {details}")]
    ParseError { path: PathBuf, details: String },

    /// Unsupported file format.
    #[error("unsupported triangle format: {extension:?}")]
    UnsupportedFormat { extension: Option<String> },

    /// File contained no triangles.
    #[error("no triangles found: {details}")]
    EmptyInput { details: String },

    /// Invalid configuration.
    #[error("invalid configuration: {details}")]
    Config { details: String },
}

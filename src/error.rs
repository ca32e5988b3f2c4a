use macroquad::prelude::IVec2;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading maps or configs and while indexing the grid.
#[derive(Debug, Error)]
pub enum MapError {
    /// The map or config file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The map text had no rows or only zero-width rows.
    #[error("map {source_name} is empty")]
    EmptyMap {
        /// Path or label of the map text.
        source_name: String,
    },
    /// Row-major tiles could not be reshaped into whole rows.
    #[error("cannot reshape {tiles} tiles into rows of {columns} columns")]
    Shape {
        /// Number of tiles built.
        tiles: usize,
        /// Requested row width.
        columns: usize,
    },
    /// A grid index outside `[0, size)`.
    #[error("cell ({}, {}) is outside the {}x{} map", .cell.x, .cell.y, .size.x, .size.y)]
    OutOfBounds {
        /// Requested cell.
        cell: IVec2,
        /// Current map size.
        size: IVec2,
    },
    /// The config file is not valid JSON for [`crate::IsoConfig`].
    #[error("failed to parse config {path}: {source}")]
    Json {
        /// Config file path.
        path: PathBuf,
        /// Underlying serde error.
        source: serde_json::Error,
    },
}

impl MapError {
    /// True for the unreadable/empty map-file class of errors.
    pub fn is_format_error(&self) -> bool {
        matches!(self, MapError::Io { .. } | MapError::EmptyMap { .. })
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, MapError>;

use std::io;

use ndarray_npy::{ReadNpyError, WriteNpyError};
use thiserror::Error;

use tadtool_core::TadError;

/// Error type for tadtool-io operations.
#[derive(Error, Debug)]
pub enum TadIoError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A line of a text file could not be parsed.
    #[error("Failed to parse {path}, line {line}: {message}")]
    Parse {
        path: String,
        line: usize,
        message: String,
    },

    #[error("Failed to read npy file: {0}")]
    ReadNpy(#[from] ReadNpyError),

    #[error("Failed to write npy file: {0}")]
    WriteNpy(#[from] WriteNpyError),

    #[error("Invalid array shape: {0}")]
    Shape(#[from] ndarray::ShapeError),

    /// Loaded data violates a shape or parameter constraint.
    #[error(transparent)]
    Core(#[from] TadError),

    /// The file contains no values.
    #[error("No values found in {0}")]
    EmptyMatrix(String),
}

/// Result type alias for tadtool-io operations.
pub type Result<T> = std::result::Result<T, TadIoError>;

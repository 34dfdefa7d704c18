//! # Input/Output utilities for tadtool.
//!
//! Readers for the inputs of a TAD calling run and writers for its results:
//!
//! - contact matrices as `.npy` or (optionally gzipped) delimited text
//! - precomputed index data, one row per window size
//! - window size specifications from the command line or a list file
//! - called domains as BED and index values as bedGraph
//!
pub mod bed;
pub mod data;
pub mod error;
pub mod matrix;
pub mod utils;
pub mod windows;

// re-expose core functions
pub use bed::*;
pub use data::*;
pub use error::*;
pub use matrix::*;
pub use windows::*;

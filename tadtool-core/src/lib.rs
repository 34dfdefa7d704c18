//! Core data model for tadtool.
//!
//! Hi-C contact matrices are stored alongside the ordered list of genomic bins
//! (regions) that label their rows and columns. Index calculators produce one
//! [`IndexSignal`](models::IndexSignal) per window size, and TAD callers turn a
//! signal into a list of domains, each a plain [`GenomicRegion`](models::GenomicRegion).
//!
//! # Example
//!
//! ```no_run
//! use tadtool_core::models::{ContactMatrix, RegionSet};
//!
//! let regions = RegionSet::try_from("regions.bed").unwrap();
//! let n = regions.len();
//! let matrix = ContactMatrix::new(ndarray::Array2::zeros((n, n))).unwrap();
//!
//! matrix.check_regions(&regions).unwrap();
//! for chromosome in regions.chromosomes() {
//!     println!("{}: {} bins", chromosome.chr, chromosome.bins.len());
//! }
//! ```

pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use errors::{RegionSetError, TadError};

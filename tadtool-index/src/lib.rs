//! Index signals over Hi-C contact matrices.
//!
//! This crate computes one value per genomic bin characterizing the contacts
//! around that bin:
//!
//! - the insulation index: log2 mean contact frequency across the boundary
//!   after each bin, low at domain boundaries
//! - the normalised insulation index: the insulation index relative to a
//!   chromosome-wide or sliding baseline
//! - the directionality index: signed chi-square statistic comparing
//!   upstream and downstream contacts, switching sign at domain boundaries
//!
//! [`data_array`] runs an algorithm over a batch of window sizes in parallel.
//!
//! # Example
//!
//! ```no_run
//! use tadtool_core::models::{ContactMatrix, RegionSet};
//! use tadtool_index::{data_array, IndexAlgorithm, IndexConfig};
//!
//! let regions = RegionSet::try_from("regions.bed").unwrap();
//! let n = regions.len();
//! let matrix = ContactMatrix::new(ndarray::Array2::zeros((n, n))).unwrap();
//!
//! let config = IndexConfig::new(IndexAlgorithm::Insulation);
//! let index = data_array(&matrix, &regions, &config, &[100_000, 200_000, 500_000]).unwrap();
//! let signal = index.signal(200_000).unwrap();
//! ```

pub mod aggregate;
pub mod algorithm;
pub mod band;
pub mod directionality;
pub mod insulation;
pub mod window;

// re-exports
pub use aggregate::data_array;
pub use algorithm::{IndexAlgorithm, IndexConfig};
pub use directionality::directionality_index;
pub use insulation::{NormalisationWindow, insulation_index, normalised_insulation_index};

use tadtool_core::TadError;
use tadtool_core::models::{ContactMatrix, RegionSet};

/// Shape and parameter checks shared by every index calculator.
pub(crate) fn check_inputs(
    matrix: &ContactMatrix,
    regions: &RegionSet,
    window_size: u32,
) -> Result<(), TadError> {
    matrix.check_regions(regions)?;
    if window_size == 0 {
        return Err(TadError::InvalidWindowSize(0));
    }
    Ok(())
}

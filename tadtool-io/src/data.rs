use std::path::Path;

use log::debug;
use ndarray::Array2;
use ndarray_npy::{read_npy, write_npy};

use tadtool_core::models::IndexMatrix;

use crate::error::{Result, TadIoError};
use crate::matrix::{read_text_rows, write_text_matrix};
use crate::utils::is_npy;

///
/// Read precomputed index values: one row per window size, one column per
/// region. `.npy` files are read directly, anything else as delimited text.
///
/// # Arguments
/// - path: path to the index data file
/// - window_sizes: window size of each row, in order
/// - n_regions: number of regions the values were computed on
///
pub fn read_index_matrix<P: AsRef<Path>>(
    path: P,
    window_sizes: Vec<u32>,
    n_regions: usize,
) -> Result<IndexMatrix> {
    let path = path.as_ref();

    let values: Array2<f64> = if is_npy(path) {
        read_npy(path)?
    } else {
        let rows = read_text_rows(path)?;
        let n_cols = match rows.first() {
            Some(row) => row.len(),
            None => return Err(TadIoError::EmptyMatrix(path.display().to_string())),
        };
        let n_rows = rows.len();
        Array2::from_shape_vec((n_rows, n_cols), rows.into_iter().flatten().collect())?
    };

    debug!(
        "Read {}x{} index values from {}",
        values.nrows(),
        values.ncols(),
        path.display()
    );
    Ok(IndexMatrix::new(values, window_sizes, n_regions)?)
}

///
/// Write index values, as `.npy` if the name says so, otherwise as tab
/// separated text with `nan` for missing values.
///
pub fn write_index_matrix<P: AsRef<Path>>(path: P, matrix: &IndexMatrix) -> Result<()> {
    let path = path.as_ref();

    if is_npy(path) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        write_npy(path, &matrix.values())?;
    } else {
        write_text_matrix(path, matrix.values())?;
    }

    Ok(())
}

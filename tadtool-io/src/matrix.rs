use std::io::Write;
use std::path::Path;

use log::debug;
use ndarray::{Array2, ArrayView2};
use ndarray_npy::read_npy;

use tadtool_core::models::ContactMatrix;
use tadtool_core::utils::{data_lines, get_dynamic_reader};

use crate::error::{Result, TadIoError};
use crate::utils::{format_value, is_gzipped, is_npy, write_output};

///
/// Read a Hi-C contact matrix.
///
/// `.npy` files are read with `ndarray-npy` and must hold a 2D `f64` array.
/// Anything else is parsed as whitespace delimited text (gzip compressed if
/// the name ends in `.gz`), one matrix row per line; `#` comment lines and
/// blank lines are skipped, and `nan`/`inf` are accepted.
///
/// # Arguments
/// - path: path to the matrix file
///
pub fn read_contact_matrix<P: AsRef<Path>>(path: P) -> Result<ContactMatrix> {
    let path = path.as_ref();

    let matrix = if is_npy(path) {
        let data: Array2<f64> = read_npy(path)?;
        ContactMatrix::new(data)?
    } else {
        let rows = read_text_rows(path)?;
        if rows.is_empty() {
            return Err(TadIoError::EmptyMatrix(path.display().to_string()));
        }
        ContactMatrix::from_rows(rows)?
    };

    debug!(
        "Read {0}x{0} contact matrix from {1}",
        matrix.dimension(),
        path.display()
    );
    Ok(matrix)
}

///
/// Parse a delimited text file into rows of equal length.
///
pub fn read_text_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<f64>>> {
    let path = path.as_ref();
    let reader = get_dynamic_reader(path)?;

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for line in data_lines(reader) {
        let (line_number, line) = line?;

        let row = line
            .split_whitespace()
            .map(|field| {
                field.parse::<f64>().map_err(|_| TadIoError::Parse {
                    path: path.display().to_string(),
                    line: line_number,
                    message: format!("'{}' is not a number", field),
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                return Err(TadIoError::Parse {
                    path: path.display().to_string(),
                    line: line_number,
                    message: format!("expected {} values, found {}", first.len(), row.len()),
                });
            }
        }
        rows.push(row);
    }

    Ok(rows)
}

///
/// Write a matrix as tab separated text, gzip compressed if the name ends in
/// `.gz`. Missing values are written as `nan`.
///
pub fn write_text_matrix<P: AsRef<Path>>(path: P, matrix: ArrayView2<'_, f64>) -> Result<()> {
    let path = path.as_ref();
    write_output(path, is_gzipped(path), |writer| {
        for row in matrix.rows() {
            let line: Vec<String> = row.iter().map(|&value| format_value(value)).collect();
            writeln!(writer, "{}", line.join("\t"))?;
        }
        Ok(())
    })?;
    Ok(())
}

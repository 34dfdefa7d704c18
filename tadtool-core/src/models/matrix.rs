use ndarray::{Array2, ArrayView2};

use crate::errors::TadError;
use crate::models::RegionSet;

///
/// Square Hi-C contact matrix. Row and column `i` both correspond to region `i`
/// of the accompanying [RegionSet].
///
/// Symmetry and non-negativity are the loader's contract and are not
/// re-checked here. Non-finite entries are treated as missing contacts by the
/// index calculators.
///
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMatrix {
    data: Array2<f64>,
}

impl ContactMatrix {
    pub fn new(data: Array2<f64>) -> Result<Self, TadError> {
        let (rows, cols) = data.dim();
        if rows != cols {
            return Err(TadError::NotSquare { rows, cols });
        }
        Ok(ContactMatrix { data })
    }

    ///
    /// Build a matrix from nested rows, e.g. parsed text lines.
    ///
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, TadError> {
        let n_rows = rows.len();
        if let Some(bad) = rows.iter().find(|row| row.len() != n_rows) {
            return Err(TadError::NotSquare {
                rows: n_rows,
                cols: bad.len(),
            });
        }

        let values: Vec<f64> = rows.into_iter().flatten().collect();
        let data = Array2::from_shape_vec((n_rows, n_rows), values).map_err(|_| {
            TadError::NotSquare {
                rows: n_rows,
                cols: n_rows,
            }
        })?;

        Ok(ContactMatrix { data })
    }

    /// Number of bins on each axis.
    pub fn dimension(&self) -> usize {
        self.data.nrows()
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[[row, col]]
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    pub fn into_inner(self) -> Array2<f64> {
        self.data
    }

    ///
    /// Fail unless there is exactly one region per matrix row.
    ///
    pub fn check_regions(&self, regions: &RegionSet) -> Result<(), TadError> {
        if regions.is_empty() {
            return Err(TadError::EmptyRegionSet);
        }
        if regions.len() != self.dimension() {
            return Err(TadError::DimensionMismatch {
                regions: regions.len(),
                dimension: self.dimension(),
            });
        }
        Ok(())
    }
}

impl TryFrom<Array2<f64>> for ContactMatrix {
    type Error = TadError;

    fn try_from(value: Array2<f64>) -> Result<Self, Self::Error> {
        ContactMatrix::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GenomicRegion;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn regions(n: usize) -> RegionSet {
        RegionSet::from(
            (0..n as u32)
                .map(|i| GenomicRegion::new("chr1", i * 1000, (i + 1) * 1000))
                .collect::<Vec<_>>(),
        )
    }

    #[rstest]
    fn test_new_rejects_non_square() {
        let result = ContactMatrix::new(Array2::zeros((3, 4)));
        assert_eq!(result, Err(TadError::NotSquare { rows: 3, cols: 4 }));
    }

    #[rstest]
    fn test_from_rows() {
        let matrix = ContactMatrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 3.0]]).unwrap();
        assert_eq!(matrix.dimension(), 2);
        assert_eq!(matrix.get(1, 0), 2.0);
    }

    #[rstest]
    fn test_from_rows_ragged() {
        let result = ContactMatrix::from_rows(vec![vec![1.0, 2.0], vec![2.0]]);
        assert_eq!(result, Err(TadError::NotSquare { rows: 2, cols: 1 }));
    }

    #[rstest]
    fn test_check_regions_mismatch() {
        let matrix = ContactMatrix::new(Array2::zeros((11, 11))).unwrap();
        assert_eq!(
            matrix.check_regions(&regions(10)),
            Err(TadError::DimensionMismatch {
                regions: 10,
                dimension: 11
            })
        );
        assert!(matrix.check_regions(&regions(11)).is_ok());
    }

    #[rstest]
    fn test_check_regions_empty() {
        let matrix = ContactMatrix::new(Array2::zeros((0, 0))).unwrap();
        assert_eq!(
            matrix.check_regions(&RegionSet::default()),
            Err(TadError::EmptyRegionSet)
        );
    }
}

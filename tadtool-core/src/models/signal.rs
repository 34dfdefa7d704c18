use ndarray::{Array2, ArrayView2, Axis};

use crate::errors::TadError;
use crate::models::RegionSet;

///
/// One index value per region. `NaN` marks bins where no value could be
/// computed (usually because the window does not fit near a chromosome end).
///
#[derive(Debug, Clone, Default)]
pub struct IndexSignal {
    values: Vec<f64>,
}

impl IndexSignal {
    pub fn new(values: Vec<f64>) -> Self {
        IndexSignal { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at bin `i`, `None` if it is missing or out of range.
    pub fn get(&self, i: usize) -> Option<f64> {
        self.values.get(i).copied().filter(|v| !v.is_nan())
    }

    pub fn is_defined(&self, i: usize) -> bool {
        self.get(i).is_some()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    pub fn defined_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_nan()).count()
    }

    ///
    /// Fail unless the signal has exactly one value per region.
    ///
    pub fn check_regions(&self, regions: &RegionSet) -> Result<(), TadError> {
        if regions.is_empty() {
            return Err(TadError::EmptyRegionSet);
        }
        if self.len() != regions.len() {
            return Err(TadError::BinCountMismatch {
                cols: self.len(),
                regions: regions.len(),
            });
        }
        Ok(())
    }
}

impl From<Vec<f64>> for IndexSignal {
    fn from(values: Vec<f64>) -> Self {
        IndexSignal::new(values)
    }
}

///
/// Index values for several window sizes: one row per window size, one column
/// per region.
///
#[derive(Debug, Clone)]
pub struct IndexMatrix {
    window_sizes: Vec<u32>,
    values: Array2<f64>,
}

impl IndexMatrix {
    ///
    /// Wrap precomputed index rows, checking rows against the window sizes and
    /// columns against the number of regions.
    ///
    pub fn new(
        values: Array2<f64>,
        window_sizes: Vec<u32>,
        n_regions: usize,
    ) -> Result<Self, TadError> {
        let (rows, cols) = values.dim();
        if rows != window_sizes.len() {
            return Err(TadError::WindowCountMismatch {
                rows,
                window_sizes: window_sizes.len(),
            });
        }
        if cols != n_regions {
            return Err(TadError::BinCountMismatch {
                cols,
                regions: n_regions,
            });
        }
        Ok(IndexMatrix {
            window_sizes,
            values,
        })
    }

    ///
    /// Stack signals computed for `window_sizes`, in the same order.
    ///
    pub fn from_signals(
        signals: Vec<IndexSignal>,
        window_sizes: Vec<u32>,
    ) -> Result<Self, TadError> {
        let n_bins = signals.first().map_or(0, IndexSignal::len);
        let rows = signals.len();

        let mut values = Array2::<f64>::from_elem((rows, n_bins), f64::NAN);
        for (mut row, signal) in values.axis_iter_mut(Axis(0)).zip(signals.iter()) {
            if signal.len() != n_bins {
                return Err(TadError::BinCountMismatch {
                    cols: signal.len(),
                    regions: n_bins,
                });
            }
            for (cell, value) in row.iter_mut().zip(signal.values()) {
                *cell = *value;
            }
        }

        IndexMatrix::new(values, window_sizes, n_bins)
    }

    pub fn window_sizes(&self) -> &[u32] {
        &self.window_sizes
    }

    pub fn n_bins(&self) -> usize {
        self.values.ncols()
    }

    pub fn values(&self) -> ArrayView2<'_, f64> {
        self.values.view()
    }

    /// Signal of the `idx`-th window size, if present.
    pub fn row(&self, idx: usize) -> Option<IndexSignal> {
        if idx >= self.values.nrows() {
            return None;
        }
        Some(IndexSignal::new(self.values.row(idx).to_vec()))
    }

    ///
    /// Signal computed for `window_size`.
    ///
    pub fn signal(&self, window_size: u32) -> Result<IndexSignal, TadError> {
        self.window_sizes
            .iter()
            .position(|&w| w == window_size)
            .and_then(|idx| self.row(idx))
            .ok_or(TadError::WindowNotFound(window_size))
    }
}

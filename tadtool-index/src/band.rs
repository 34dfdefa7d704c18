//! Prefix sums along the diagonals of a contact matrix.
//!
//! Every bin window of the insulation index is a block above the main
//! diagonal whose entries lie on a small number of diagonals. Keeping one
//! prefix sum per diagonal turns each block sum into one subtraction per
//! diagonal instead of one addition per matrix entry.

use std::ops::Range;

use ndarray::Array2;
use tadtool_core::models::ContactMatrix;

/// Sum and number of finite entries of a matrix block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockSum {
    pub sum: f64,
    pub count: u32,
}

impl BlockSum {
    /// Mean of the finite entries, `None` if there are none.
    pub fn mean(&self) -> Option<f64> {
        match self.count {
            0 => None,
            count => Some(self.sum / f64::from(count)),
        }
    }
}

///
/// Prefix sums of finite entries along diagonals `0..=max_offset`.
///
/// Row `d`, column `k` of `sums` holds the sum of `M[t][t + d]` for `t < k`;
/// `counts` holds the number of finite entries in the same range.
///
/// Block sums are differences of prefix sums, so their absolute error scales
/// with the prefix total of the diagonal (about `1e-16` times the sum of a
/// whole diagonal). Windows that are equal in exact arithmetic can differ in
/// the last bits, and small blocks on diagonals with very large totals lose
/// relative precision. Consumers comparing block means should allow for
/// rounding.
///
#[derive(Debug, Clone)]
pub struct DiagonalSums {
    sums: Array2<f64>,
    counts: Array2<u32>,
}

impl DiagonalSums {
    pub fn new(matrix: &ContactMatrix, max_offset: usize) -> Self {
        let n = matrix.dimension();
        let max_offset = max_offset.min(n.saturating_sub(1));

        let mut sums = Array2::<f64>::zeros((max_offset + 1, n + 1));
        let mut counts = Array2::<u32>::zeros((max_offset + 1, n + 1));

        for d in 0..=max_offset {
            let mut sum = 0.0;
            let mut count = 0u32;
            for t in 0..n {
                if t + d < n {
                    let value = matrix.get(t, t + d);
                    if value.is_finite() {
                        sum += value;
                        count += 1;
                    }
                }
                sums[[d, t + 1]] = sum;
                counts[[d, t + 1]] = count;
            }
        }

        DiagonalSums { sums, counts }
    }

    /// Largest diagonal offset covered.
    pub fn max_offset(&self) -> usize {
        self.sums.nrows() - 1
    }

    ///
    /// Sum of the block `rows x cols`, which must lie entirely above the main
    /// diagonal (`rows.end <= cols.start`).
    ///
    /// # Panics
    ///
    /// If the block reaches a diagonal beyond [DiagonalSums::max_offset].
    ///
    pub fn block(&self, rows: Range<usize>, cols: Range<usize>) -> BlockSum {
        debug_assert!(rows.end <= cols.start, "block must lie above the diagonal");

        let mut sum = 0.0;
        let mut count = 0u32;
        if rows.is_empty() || cols.is_empty() {
            return BlockSum { sum, count };
        }

        let min_offset = cols.start - (rows.end - 1);
        let max_offset = (cols.end - 1) - rows.start;

        for d in min_offset..=max_offset {
            // rows r of the block whose entry M[r][r + d] falls inside cols
            let lo = rows.start.max(cols.start.saturating_sub(d));
            let hi = rows.end.min(cols.end - d);
            if lo < hi {
                sum += self.sums[[d, hi]] - self.sums[[d, lo]];
                count += self.counts[[d, hi]] - self.counts[[d, lo]];
            }
        }

        // prefix differences can dip below zero by rounding
        BlockSum {
            sum: sum.max(0.0),
            count,
        }
    }
}

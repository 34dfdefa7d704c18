use std::num::NonZeroUsize;

use tadtool_core::TadError;
use tadtool_core::models::{ContactMatrix, IndexSignal, RegionSet};

use crate::band::DiagonalSums;
use crate::check_inputs;
use crate::window::{BinWindow, WindowAnchor, bin_windows, max_span};

/// Region over which the baseline of the normalised insulation index is
/// computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalisationWindow {
    /// Mean over the whole chromosome of each bin.
    #[default]
    Chromosome,
    /// Mean over a sliding window of this many regions centered on each bin,
    /// clipped to the chromosome.
    Regions(NonZeroUsize),
}

impl NormalisationWindow {
    ///
    /// Map an optional region count from user input: `None` is the whole
    /// chromosome, zero is rejected.
    ///
    pub fn from_regions(regions: Option<usize>) -> Result<Self, TadError> {
        match regions {
            None => Ok(NormalisationWindow::Chromosome),
            Some(n) => NonZeroUsize::new(n)
                .map(NormalisationWindow::Regions)
                .ok_or(TadError::InvalidNormalisationWindow),
        }
    }
}

///
/// Insulation index of every bin.
///
/// For bin `i` the window is the block of contacts between the bins upstream
/// of (and including) `i` and the bins downstream of `i`, each reaching
/// `window_size` bp from the boundary after bin `i`. The value is the log2 mean
/// of the finite contacts in that block. Bins whose window does not fit inside
/// the chromosome get `NaN`.
///
pub fn insulation_index(
    matrix: &ContactMatrix,
    regions: &RegionSet,
    window_size: u32,
) -> Result<IndexSignal, TadError> {
    check_inputs(matrix, regions, window_size)?;

    let windows = bin_windows(regions, window_size, WindowAnchor::Boundary);
    let sums = DiagonalSums::new(matrix, max_span(&windows));

    Ok(log2_signal(&raw_insulation(&windows, &sums)))
}

///
/// Insulation index relative to a local baseline:
/// `log2(mean_i / baseline_i)`, where the baseline is the average raw
/// insulation mean inside `normalisation_window`.
///
pub fn normalised_insulation_index(
    matrix: &ContactMatrix,
    regions: &RegionSet,
    window_size: u32,
    normalisation_window: NormalisationWindow,
) -> Result<IndexSignal, TadError> {
    check_inputs(matrix, regions, window_size)?;

    let windows = bin_windows(regions, window_size, WindowAnchor::Boundary);
    let sums = DiagonalSums::new(matrix, max_span(&windows));

    Ok(normalise(
        &raw_insulation(&windows, &sums),
        regions,
        normalisation_window,
    ))
}

/// Mean contact frequency in each bin's window, `NaN` without a window.
pub(crate) fn raw_insulation(windows: &[Option<BinWindow>], sums: &DiagonalSums) -> Vec<f64> {
    windows
        .iter()
        .enumerate()
        .map(|(i, window)| match window {
            Some(window) => sums
                .block(window.first..i + 1, i + 1..window.last + 1)
                .mean()
                .unwrap_or(f64::NAN),
            None => f64::NAN,
        })
        .collect()
}

/// log2 of each mean; a zero mean becomes `-inf`.
pub(crate) fn log2_signal(means: &[f64]) -> IndexSignal {
    IndexSignal::new(means.iter().map(|mean| mean.log2()).collect())
}

pub(crate) fn normalise(
    means: &[f64],
    regions: &RegionSet,
    normalisation_window: NormalisationWindow,
) -> IndexSignal {
    let mut normalised = vec![f64::NAN; means.len()];

    for chromosome in regions.chromosomes() {
        let offset = chromosome.bins.start;
        let values = &means[chromosome.bins.clone()];

        // prefix sums over defined values only
        let mut prefix_sums = Vec::with_capacity(values.len() + 1);
        let mut prefix_counts = Vec::with_capacity(values.len() + 1);
        let (mut sum, mut count) = (0.0, 0usize);
        prefix_sums.push(sum);
        prefix_counts.push(count);
        for value in values {
            if value.is_finite() {
                sum += value;
                count += 1;
            }
            prefix_sums.push(sum);
            prefix_counts.push(count);
        }

        for (local, &value) in values.iter().enumerate() {
            if value.is_nan() {
                continue;
            }

            let (lo, hi) = match normalisation_window {
                NormalisationWindow::Chromosome => (0, values.len()),
                NormalisationWindow::Regions(n) => {
                    let lo = local.saturating_sub(n.get() / 2);
                    (lo, (lo + n.get()).min(values.len()))
                }
            };

            let n_defined = prefix_counts[hi] - prefix_counts[lo];
            if n_defined == 0 {
                continue;
            }
            let baseline = (prefix_sums[hi] - prefix_sums[lo]) / n_defined as f64;
            if baseline > 0.0 {
                normalised[offset + local] = (value / baseline).log2();
            }
        }
    }

    IndexSignal::new(normalised)
}

use log::debug;

use tadtool_core::TadError;
use tadtool_core::models::{GenomicRegion, IndexSignal, RegionSet};

use crate::segment::{check_signal, segment};

///
/// Boundary bins of an insulation signal: local minima with a value at or
/// below `cutoff`.
///
/// Minima are searched per chromosome. A run of equal values counts as one
/// minimum, located at its leftmost bin, if the bins on both sides of the run
/// are defined and strictly greater. Values differing only by rounding
/// (relative difference up to 1e-9) are treated as equal.
///
pub fn insulation_boundaries(
    signal: &IndexSignal,
    cutoff: f64,
    regions: &RegionSet,
) -> Result<Vec<usize>, TadError> {
    check_signal(signal, cutoff, regions)?;

    let mut boundaries = Vec::new();
    for chromosome in regions.chromosomes() {
        let offset = chromosome.bins.start;
        let values = &signal.values()[chromosome.bins];
        boundaries.extend(
            local_minima(values)
                .into_iter()
                .filter(|&i| values[i] <= cutoff)
                .map(|i| offset + i),
        );
    }

    Ok(boundaries)
}

///
/// Call TADs from an insulation index signal.
///
/// Each chromosome is split after every boundary from [insulation_boundaries].
/// Domains spanning a single bin, or only bins without an index value, are not
/// reported.
///
/// # Arguments
/// - signal: insulation (or normalised insulation) index, one value per region
/// - cutoff: largest index value accepted at a boundary
/// - regions: bins the signal was computed on
///
pub fn call_tads_insulation_index(
    signal: &IndexSignal,
    cutoff: f64,
    regions: &RegionSet,
) -> Result<Vec<GenomicRegion>, TadError> {
    let boundaries = insulation_boundaries(signal, cutoff, regions)?;
    debug!(
        "Found {} insulation boundaries at cutoff {}",
        boundaries.len(),
        cutoff
    );

    Ok(segment(signal, regions, &boundaries))
}

/// Relative tolerance under which two index values count as the same level.
const LEVEL_TOLERANCE: f64 = 1e-9;

/// Equal up to rounding. Infinite values only match themselves, NaN nothing.
fn same_level(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    (a - b).abs() <= LEVEL_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

/// `a` lies clearly above `b`; false if either is NaN.
fn above(a: f64, b: f64) -> bool {
    a > b && !same_level(a, b)
}

fn local_minima(values: &[f64]) -> Vec<usize> {
    let n = values.len();
    let mut minima = Vec::new();

    let mut i = 1;
    while i < n {
        let value = values[i];
        if value.is_nan() {
            i += 1;
            continue;
        }

        // compare against the first bin so a run cannot drift
        let mut last = i;
        while last + 1 < n && same_level(values[last + 1], value) {
            last += 1;
        }

        let left_higher = above(values[i - 1], value);
        let right_higher = values.get(last + 1).is_some_and(|&right| above(right, value));
        if left_higher && right_higher {
            minima.push(i);
        }

        i = last + 1;
    }

    minima
}

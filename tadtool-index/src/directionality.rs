use tadtool_core::TadError;
use tadtool_core::models::{ContactMatrix, IndexSignal, RegionSet};

use crate::check_inputs;
use crate::window::{BinWindow, WindowAnchor, bin_windows};

///
/// Directionality index of every bin (Dixon et al. 2012).
///
/// With `A` the contacts of bin `i` with the bins upstream within
/// `window_size`, `B` those with the bins downstream, and `E = (A + B) / 2`:
///
/// `DI = sign(B - A) * ((A - E)^2 / E + (B - E)^2 / E)`
///
/// Positive values mean downstream contacts dominate. Bins without room for a
/// full window on both sides get `NaN`; bins without any contact get 0.
///
pub fn directionality_index(
    matrix: &ContactMatrix,
    regions: &RegionSet,
    window_size: u32,
) -> Result<IndexSignal, TadError> {
    check_inputs(matrix, regions, window_size)?;

    let windows = bin_windows(regions, window_size, WindowAnchor::Bin);
    Ok(directionality_from_windows(matrix, &windows))
}

pub(crate) fn directionality_from_windows(
    matrix: &ContactMatrix,
    windows: &[Option<BinWindow>],
) -> IndexSignal {
    let values = windows
        .iter()
        .enumerate()
        .map(|(i, window)| match window {
            Some(window) => {
                let upstream = finite_sum((window.first..i).map(|j| matrix.get(j, i)));
                let downstream = finite_sum((i + 1..=window.last).map(|j| matrix.get(i, j)));
                directionality(upstream, downstream)
            }
            None => f64::NAN,
        })
        .collect();

    IndexSignal::new(values)
}

fn finite_sum<I: Iterator<Item = f64>>(values: I) -> f64 {
    values.filter(|v| v.is_finite()).sum()
}

fn directionality(upstream: f64, downstream: f64) -> f64 {
    let expected = (upstream + downstream) / 2.0;
    if expected <= 0.0 || upstream == downstream {
        return 0.0;
    }

    let chi_square =
        (upstream - expected).powi(2) / expected + (downstream - expected).powi(2) / expected;

    if downstream > upstream {
        chi_square
    } else {
        -chi_square
    }
}

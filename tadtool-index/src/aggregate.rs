use log::debug;
use rayon::prelude::*;

use tadtool_core::TadError;
use tadtool_core::models::{ContactMatrix, IndexMatrix, IndexSignal, RegionSet};

use crate::algorithm::{IndexAlgorithm, IndexConfig};
use crate::band::DiagonalSums;
use crate::window::{BinWindow, bin_windows, max_span};

///
/// Run the configured index algorithm once per window size.
///
/// Every window size is validated before any computation starts: it must be
/// positive and no larger than the largest chromosome. Window sizes are
/// processed in parallel on the current rayon pool; rows of the returned
/// [IndexMatrix] follow the order of `window_sizes`.
///
/// # Arguments
/// - matrix: contact matrix, one row per region
/// - regions: bins labelling the matrix rows
/// - config: index algorithm and its parameters
/// - window_sizes: window sizes in base pairs
///
pub fn data_array(
    matrix: &ContactMatrix,
    regions: &RegionSet,
    config: &IndexConfig,
    window_sizes: &[u32],
) -> Result<IndexMatrix, TadError> {
    matrix.check_regions(regions)?;
    check_window_sizes(regions, window_sizes)?;

    let windows: Vec<Vec<Option<BinWindow>>> = window_sizes
        .iter()
        .map(|&window_size| bin_windows(regions, window_size, config.algorithm.anchor()))
        .collect();

    // one set of prefix sums serves every window size
    let sums = match config.algorithm {
        IndexAlgorithm::Directionality => None,
        IndexAlgorithm::Insulation | IndexAlgorithm::NormalisedInsulation => {
            let max_offset = windows.iter().map(|w| max_span(w)).max().unwrap_or(0);
            debug!(
                "Building diagonal prefix sums for {} bins up to offset {}",
                matrix.dimension(),
                max_offset
            );
            Some(DiagonalSums::new(matrix, max_offset))
        }
    };

    debug!(
        "Computing {} index for {} window sizes",
        config.algorithm,
        window_sizes.len()
    );
    let signals: Vec<IndexSignal> = windows
        .par_iter()
        .map(|w| config.compute_windows(matrix, regions, w, sums.as_ref()))
        .collect();

    IndexMatrix::from_signals(signals, window_sizes.to_vec())
}

fn check_window_sizes(regions: &RegionSet, window_sizes: &[u32]) -> Result<(), TadError> {
    if window_sizes.is_empty() {
        return Err(TadError::InvalidWindowSpec(
            "at least one window size is required".to_string(),
        ));
    }

    let extent = regions.max_chromosome_extent();
    for &window_size in window_sizes {
        if window_size == 0 {
            return Err(TadError::InvalidWindowSize(0));
        }
        if window_size > extent {
            return Err(TadError::WindowExceedsChromosome {
                window_size,
                extent,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{block_matrix, decay_matrix, regions};
    use crate::insulation::NormalisationWindow;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(IndexAlgorithm::Insulation)]
    #[case(IndexAlgorithm::NormalisedInsulation)]
    #[case(IndexAlgorithm::Directionality)]
    fn test_rows_follow_window_order(#[case] algorithm: IndexAlgorithm) {
        let matrix = decay_matrix(30);
        let regions = regions(30);
        let config = IndexConfig::new(algorithm);
        let window_sizes = [5000, 1000, 3000, 2000];

        let index = data_array(&matrix, &regions, &config, &window_sizes).unwrap();

        assert_eq!(index.window_sizes(), &window_sizes);
        assert_eq!(index.values().dim(), (4, 30));
        for (row, &window_size) in window_sizes.iter().enumerate() {
            let expected = config.compute(&matrix, &regions, window_size).unwrap();
            let actual = index.row(row).unwrap();
            for i in 0..30 {
                match (expected.get(i), actual.get(i)) {
                    (Some(a), Some(b)) => assert!((a - b).abs() < 1e-9),
                    (None, None) => {}
                    other => panic!("window {} bin {} differs: {:?}", window_size, i, other),
                }
            }
        }
    }

    #[rstest]
    fn test_single_window_block_matrix() {
        let matrix = block_matrix(&[5, 5], 10.0, 0.01);
        let config = IndexConfig::new(IndexAlgorithm::Insulation)
            .with_normalisation_window(NormalisationWindow::Chromosome);

        let index = data_array(&matrix, &regions(10), &config, &[2000]).unwrap();
        let signal = index.signal(2000).unwrap();

        let minimum = (0..10)
            .filter_map(|i| signal.get(i).map(|v| (i, v)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .unwrap();
        assert_eq!(minimum.0, 4);
    }

    #[rstest]
    #[case(&[], TadError::InvalidWindowSpec("at least one window size is required".to_string()))]
    #[case(&[1000, 0], TadError::InvalidWindowSize(0))]
    #[case(
        &[1000, 20_000],
        TadError::WindowExceedsChromosome { window_size: 20_000, extent: 10_000 }
    )]
    fn test_invalid_window_sizes(#[case] window_sizes: &[u32], #[case] expected: TadError) {
        let matrix = decay_matrix(10);
        let config = IndexConfig::default();

        let result = data_array(&matrix, &regions(10), &config, window_sizes);
        assert_eq!(result.unwrap_err(), expected);
    }

    #[rstest]
    fn test_shape_mismatch_before_window_checks() {
        let matrix = decay_matrix(11);
        let config = IndexConfig::default();

        let result = data_array(&matrix, &regions(10), &config, &[0]);
        assert_eq!(
            result.unwrap_err(),
            TadError::DimensionMismatch {
                regions: 10,
                dimension: 11
            }
        );
    }
}

use std::fmt::{self, Display};
use std::str::FromStr;

use tadtool_core::TadError;
use tadtool_core::models::{ContactMatrix, IndexSignal, RegionSet};

use crate::band::DiagonalSums;
use crate::directionality::{directionality_from_windows, directionality_index};
use crate::insulation::{
    NormalisationWindow, insulation_index, log2_signal, normalise, normalised_insulation_index,
    raw_insulation,
};
use crate::window::{BinWindow, WindowAnchor};

/// The recognized index algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexAlgorithm {
    Insulation,
    NormalisedInsulation,
    Directionality,
}

impl IndexAlgorithm {
    pub const ALL: [IndexAlgorithm; 3] = [
        IndexAlgorithm::Insulation,
        IndexAlgorithm::NormalisedInsulation,
        IndexAlgorithm::Directionality,
    ];

    /// Name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            IndexAlgorithm::Insulation => "insulation",
            IndexAlgorithm::NormalisedInsulation => "ninsulation",
            IndexAlgorithm::Directionality => "directionality",
        }
    }

    pub(crate) fn anchor(&self) -> WindowAnchor {
        match self {
            IndexAlgorithm::Insulation | IndexAlgorithm::NormalisedInsulation => {
                WindowAnchor::Boundary
            }
            IndexAlgorithm::Directionality => WindowAnchor::Bin,
        }
    }
}

impl FromStr for IndexAlgorithm {
    type Err = TadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "insulation" => Ok(IndexAlgorithm::Insulation),
            "ninsulation" => Ok(IndexAlgorithm::NormalisedInsulation),
            "directionality" => Ok(IndexAlgorithm::Directionality),
            _ => Err(TadError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl Display for IndexAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

///
/// An index algorithm together with its parameters.
///
/// `normalisation_window` only affects [IndexAlgorithm::NormalisedInsulation].
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexConfig {
    pub algorithm: IndexAlgorithm,
    pub normalisation_window: NormalisationWindow,
}

impl IndexConfig {
    pub fn new(algorithm: IndexAlgorithm) -> Self {
        IndexConfig {
            algorithm,
            normalisation_window: NormalisationWindow::Chromosome,
        }
    }

    pub fn with_normalisation_window(mut self, normalisation_window: NormalisationWindow) -> Self {
        self.normalisation_window = normalisation_window;
        self
    }

    ///
    /// Compute the configured index for a single window size.
    ///
    pub fn compute(
        &self,
        matrix: &ContactMatrix,
        regions: &RegionSet,
        window_size: u32,
    ) -> Result<IndexSignal, TadError> {
        match self.algorithm {
            IndexAlgorithm::Insulation => insulation_index(matrix, regions, window_size),
            IndexAlgorithm::NormalisedInsulation => {
                normalised_insulation_index(matrix, regions, window_size, self.normalisation_window)
            }
            IndexAlgorithm::Directionality => directionality_index(matrix, regions, window_size),
        }
    }

    /// Compute from already resolved windows. Inputs are assumed valid.
    pub(crate) fn compute_windows(
        &self,
        matrix: &ContactMatrix,
        regions: &RegionSet,
        windows: &[Option<BinWindow>],
        sums: Option<&DiagonalSums>,
    ) -> IndexSignal {
        match (self.algorithm, sums) {
            (IndexAlgorithm::Directionality, _) => directionality_from_windows(matrix, windows),
            (IndexAlgorithm::Insulation, Some(sums)) => {
                log2_signal(&raw_insulation(windows, sums))
            }
            (IndexAlgorithm::NormalisedInsulation, Some(sums)) => normalise(
                &raw_insulation(windows, sums),
                regions,
                self.normalisation_window,
            ),
            (_, None) => {
                let max_offset = crate::window::max_span(windows);
                let sums = DiagonalSums::new(matrix, max_offset);
                self.compute_windows(matrix, regions, windows, Some(&sums))
            }
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig::new(IndexAlgorithm::Insulation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{decay_matrix, regions};
    use crate::window::{bin_windows, max_span};

    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::num::NonZeroUsize;

    #[rstest]
    #[case("insulation", IndexAlgorithm::Insulation)]
    #[case("ninsulation", IndexAlgorithm::NormalisedInsulation)]
    #[case("Directionality", IndexAlgorithm::Directionality)]
    fn test_parse_algorithm(#[case] name: &str, #[case] expected: IndexAlgorithm) {
        assert_eq!(name.parse::<IndexAlgorithm>().unwrap(), expected);
    }

    #[rstest]
    fn test_parse_unknown_algorithm() {
        assert_eq!(
            "bogus".parse::<IndexAlgorithm>(),
            Err(TadError::UnknownAlgorithm("bogus".to_string()))
        );
    }

    #[rstest]
    fn test_name_round_trip() {
        for algorithm in IndexAlgorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<IndexAlgorithm>().unwrap(), algorithm);
        }
    }

    #[rstest]
    #[case(IndexConfig::new(IndexAlgorithm::Insulation))]
    #[case(IndexConfig::new(IndexAlgorithm::NormalisedInsulation))]
    #[case(IndexConfig::new(IndexAlgorithm::NormalisedInsulation)
        .with_normalisation_window(NormalisationWindow::Regions(NonZeroUsize::new(5).unwrap())))]
    #[case(IndexConfig::new(IndexAlgorithm::Directionality))]
    fn test_prepared_matches_direct(#[case] config: IndexConfig) {
        let matrix = decay_matrix(30);
        let regions = regions(30);

        let direct = config.compute(&matrix, &regions, 4000).unwrap();

        let windows = bin_windows(&regions, 4000, config.algorithm.anchor());
        let sums = DiagonalSums::new(&matrix, max_span(&windows) + 3);
        let prepared = config.compute_windows(&matrix, &regions, &windows, Some(&sums));

        assert_eq!(direct.len(), prepared.len());
        for i in 0..direct.len() {
            match (direct.get(i), prepared.get(i)) {
                (Some(a), Some(b)) => assert!((a - b).abs() < 1e-9),
                (None, None) => {}
                other => panic!("bin {} differs: {:?}", i, other),
            }
        }
    }
}

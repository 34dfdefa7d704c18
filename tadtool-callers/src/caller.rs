use std::fmt::{self, Display};
use std::str::FromStr;

use tadtool_core::TadError;
use tadtool_core::models::{GenomicRegion, IndexSignal, RegionSet};
use tadtool_index::IndexAlgorithm;

use crate::directionality::{call_tads_directionality_index, directionality_boundaries};
use crate::insulation::{call_tads_insulation_index, insulation_boundaries};

/// The recognized TAD callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TadCaller {
    Insulation,
    Directionality,
}

impl TadCaller {
    /// Name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            TadCaller::Insulation => "insulation",
            TadCaller::Directionality => "directionality",
        }
    }

    ///
    /// Call domains from `signal` with this caller.
    ///
    pub fn call(
        &self,
        signal: &IndexSignal,
        cutoff: f64,
        regions: &RegionSet,
    ) -> Result<Vec<GenomicRegion>, TadError> {
        match self {
            TadCaller::Insulation => call_tads_insulation_index(signal, cutoff, regions),
            TadCaller::Directionality => call_tads_directionality_index(signal, cutoff, regions),
        }
    }

    /// Boundary bins only, without segmenting.
    pub fn boundaries(
        &self,
        signal: &IndexSignal,
        cutoff: f64,
        regions: &RegionSet,
    ) -> Result<Vec<usize>, TadError> {
        match self {
            TadCaller::Insulation => insulation_boundaries(signal, cutoff, regions),
            TadCaller::Directionality => directionality_boundaries(signal, cutoff, regions),
        }
    }
}

impl From<IndexAlgorithm> for TadCaller {
    fn from(algorithm: IndexAlgorithm) -> Self {
        match algorithm {
            IndexAlgorithm::Insulation | IndexAlgorithm::NormalisedInsulation => {
                TadCaller::Insulation
            }
            IndexAlgorithm::Directionality => TadCaller::Directionality,
        }
    }
}

impl FromStr for TadCaller {
    type Err = TadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "insulation" => Ok(TadCaller::Insulation),
            "directionality" => Ok(TadCaller::Directionality),
            _ => Err(TadError::UnknownCaller(s.to_string())),
        }
    }
}

impl Display for TadCaller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

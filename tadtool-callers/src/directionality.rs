use log::debug;

use tadtool_core::TadError;
use tadtool_core::models::{GenomicRegion, IndexSignal, RegionSet};

use crate::segment::{check_signal, segment};

/// Consecutive non-zero values of one sign.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SignRun {
    positive: bool,
    /// Last bin of the run, relative to the chromosome.
    last: usize,
    /// Largest magnitude inside the run.
    peak: f64,
    /// No missing value separates this run from the previous one.
    follows_previous: bool,
}

fn sign_runs(values: &[f64]) -> Vec<SignRun> {
    let mut runs: Vec<SignRun> = Vec::new();
    let mut broken = true;

    for (i, &value) in values.iter().enumerate() {
        if value.is_nan() {
            broken = true;
            continue;
        }
        if value == 0.0 {
            continue;
        }

        let positive = value > 0.0;
        let same_run = !broken && runs.last().is_some_and(|run| run.positive == positive);
        if same_run {
            if let Some(run) = runs.last_mut() {
                run.last = i;
                run.peak = run.peak.max(value.abs());
            }
        } else {
            runs.push(SignRun {
                positive,
                last: i,
                peak: value.abs(),
                follows_previous: !broken,
            });
        }
        broken = false;
    }

    runs
}

///
/// Boundary bins of a directionality index signal.
///
/// Non-zero values are grouped into runs of equal sign; zeros do not
/// interrupt a run, missing values do. Where a negative run is immediately
/// followed by a positive run and both peak above `|cutoff|`, the last bin of
/// the negative run is a boundary.
///
pub fn directionality_boundaries(
    signal: &IndexSignal,
    cutoff: f64,
    regions: &RegionSet,
) -> Result<Vec<usize>, TadError> {
    check_signal(signal, cutoff, regions)?;
    let threshold = cutoff.abs();

    let mut boundaries = Vec::new();
    for chromosome in regions.chromosomes() {
        let offset = chromosome.bins.start;
        let runs = sign_runs(&signal.values()[chromosome.bins]);

        boundaries.extend(
            runs.windows(2)
                .filter(|pair| {
                    let (upstream, downstream) = (&pair[0], &pair[1]);
                    !upstream.positive
                        && downstream.positive
                        && downstream.follows_previous
                        && upstream.peak > threshold
                        && downstream.peak > threshold
                })
                .map(|pair| offset + pair[0].last),
        );
    }

    Ok(boundaries)
}

///
/// Call TADs from a directionality index signal.
///
/// Domains end where upstream-biased contacts switch to downstream-biased
/// contacts (see [directionality_boundaries]). Single-bin domains and domains
/// without any index value are not reported.
///
pub fn call_tads_directionality_index(
    signal: &IndexSignal,
    cutoff: f64,
    regions: &RegionSet,
) -> Result<Vec<GenomicRegion>, TadError> {
    let boundaries = directionality_boundaries(signal, cutoff, regions)?;
    debug!(
        "Found {} directionality boundaries at cutoff {}",
        boundaries.len(),
        cutoff
    );

    Ok(segment(signal, regions, &boundaries))
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::Array2;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use tadtool_core::models::ContactMatrix;
    use tadtool_index::directionality_index;

    const NAN: f64 = f64::NAN;

    fn regions(chromosomes: &[(&str, usize)]) -> RegionSet {
        let mut all = Vec::new();
        for &(chr, n) in chromosomes {
            for i in 0..n as u32 {
                all.push(GenomicRegion::new(chr, i * 1000, (i + 1) * 1000));
            }
        }
        RegionSet::from(all)
    }

    fn three_blocks() -> ContactMatrix {
        let data = Array2::from_shape_fn((15, 15), |(i, j)| {
            if i / 5 == j / 5 { 10.0 } else { 0.1 }
        });
        ContactMatrix::new(data).unwrap()
    }

    #[rstest]
    fn test_sign_runs() {
        let runs = sign_runs(&[NAN, -1.0, 0.0, -3.0, 2.0, NAN, 4.0, -1.0]);
        let summary: Vec<(bool, usize, f64, bool)> = runs
            .iter()
            .map(|r| (r.positive, r.last, r.peak, r.follows_previous))
            .collect();
        assert_eq!(
            summary,
            vec![
                (false, 3, 3.0, false),
                (true, 4, 2.0, true),
                (true, 6, 4.0, false),
                (false, 7, 1.0, true),
            ]
        );
    }

    #[rstest]
    #[case(10.0, vec![4, 9])]
    #[case(-10.0, vec![4, 9])]
    #[case(25.0, vec![])]
    fn test_three_block_boundaries(#[case] cutoff: f64, #[case] expected: Vec<usize>) {
        let regions = regions(&[("chr1", 15)]);
        let signal = directionality_index(&three_blocks(), &regions, 2000).unwrap();

        assert_eq!(
            directionality_boundaries(&signal, cutoff, &regions).unwrap(),
            expected
        );
    }

    #[rstest]
    fn test_three_block_domains() {
        let regions = regions(&[("chr1", 15)]);
        let signal = directionality_index(&three_blocks(), &regions, 2000).unwrap();

        let domains = call_tads_directionality_index(&signal, 10.0, &regions).unwrap();
        assert_eq!(
            domains,
            vec![
                GenomicRegion::new("chr1", 0, 5000),
                GenomicRegion::new("chr1", 5000, 10000),
                GenomicRegion::new("chr1", 10000, 15000),
            ]
        );

        let domains = call_tads_directionality_index(&signal, 25.0, &regions).unwrap();
        assert_eq!(domains, vec![GenomicRegion::new("chr1", 0, 15000)]);
    }

    #[rstest]
    fn test_missing_value_blocks_switch() {
        let regions = regions(&[("chr1", 6)]);

        let connected = IndexSignal::from(vec![-5.0, -5.0, 0.0, 5.0, 5.0, 1.0]);
        assert_eq!(
            directionality_boundaries(&connected, 1.0, &regions).unwrap(),
            vec![1]
        );

        let separated = IndexSignal::from(vec![-5.0, -5.0, NAN, 5.0, 5.0, 1.0]);
        assert_eq!(
            directionality_boundaries(&separated, 1.0, &regions).unwrap(),
            vec![]
        );
    }

    #[rstest]
    fn test_runs_do_not_cross_chromosomes() {
        let regions = regions(&[("chr1", 3), ("chr2", 3)]);
        let signal = IndexSignal::from(vec![1.0, -4.0, -4.0, 4.0, 4.0, 1.0]);

        assert_eq!(
            directionality_boundaries(&signal, 1.0, &regions).unwrap(),
            vec![]
        );
    }

    #[rstest]
    fn test_cutoff_monotonicity() {
        let regions = regions(&[("chr1", 15)]);
        let signal = directionality_index(&three_blocks(), &regions, 2000).unwrap();

        let mut previous = directionality_boundaries(&signal, 0.0, &regions).unwrap();
        for cutoff in [1.0, 5.0, 10.0, 19.0, 20.0, 50.0] {
            let boundaries = directionality_boundaries(&signal, cutoff, &regions).unwrap();
            assert!(boundaries.iter().all(|b| previous.contains(b)));
            previous = boundaries;
        }
    }

    #[rstest]
    fn test_invalid_cutoff() {
        let regions = regions(&[("chr1", 4)]);
        let signal = IndexSignal::from(vec![0.0; 4]);

        assert!(matches!(
            call_tads_directionality_index(&signal, f64::NAN, &regions),
            Err(TadError::InvalidCutoff(_))
        ));
    }
}

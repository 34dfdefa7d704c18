use tadtool_core::TadError;
use tadtool_core::models::{GenomicRegion, IndexSignal, RegionSet};

/// Checks shared by both callers: one value per region and a usable cutoff.
pub(crate) fn check_signal(
    signal: &IndexSignal,
    cutoff: f64,
    regions: &RegionSet,
) -> Result<(), TadError> {
    signal.check_regions(regions)?;
    if cutoff.is_nan() {
        return Err(TadError::InvalidCutoff(cutoff));
    }
    Ok(())
}

///
/// Cut every chromosome after each boundary bin and return the resulting
/// domains in region order.
///
/// `boundaries` must be ascending. The last domain of a chromosome runs from
/// the bin after its last boundary to the chromosome end. Single-bin domains
/// and domains whose bins all lack an index value are skipped.
///
pub fn segment(
    signal: &IndexSignal,
    regions: &RegionSet,
    boundaries: &[usize],
) -> Vec<GenomicRegion> {
    let mut domains = Vec::new();
    let mut boundaries = boundaries.iter().copied().peekable();

    for chromosome in regions.chromosomes() {
        let mut first = chromosome.bins.start;

        while let Some(boundary) = boundaries.next_if(|&b| b < chromosome.bins.end) {
            if boundary < first {
                continue;
            }
            push_domain(&mut domains, signal, regions, first, boundary);
            first = boundary + 1;
        }

        if first < chromosome.bins.end {
            push_domain(&mut domains, signal, regions, first, chromosome.bins.end - 1);
        }
    }

    domains
}

fn push_domain(
    domains: &mut Vec<GenomicRegion>,
    signal: &IndexSignal,
    regions: &RegionSet,
    first: usize,
    last: usize,
) {
    if first == last {
        return;
    }
    if !(first..=last).any(|i| signal.is_defined(i)) {
        return;
    }

    let start = &regions.regions[first];
    let end = &regions.regions[last];
    domains.push(GenomicRegion::new(start.chr.clone(), start.start, end.end));
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn regions(chromosomes: &[(&str, usize)]) -> RegionSet {
        let mut all = Vec::new();
        for &(chr, n) in chromosomes {
            for i in 0..n as u32 {
                all.push(GenomicRegion::new(chr, i * 100, (i + 1) * 100));
            }
        }
        RegionSet::from(all)
    }

    #[rstest]
    fn test_segment_single_chromosome() {
        let regions = regions(&[("chr1", 8)]);
        let signal = IndexSignal::from(vec![1.0; 8]);

        let domains = segment(&signal, &regions, &[2, 5]);
        assert_eq!(
            domains,
            vec![
                GenomicRegion::new("chr1", 0, 300),
                GenomicRegion::new("chr1", 300, 600),
                GenomicRegion::new("chr1", 600, 800),
            ]
        );
    }

    #[rstest]
    fn test_segment_without_boundaries() {
        let regions = regions(&[("chr1", 4), ("chr2", 3)]);
        let signal = IndexSignal::from(vec![1.0; 7]);

        let domains = segment(&signal, &regions, &[]);
        assert_eq!(
            domains,
            vec![
                GenomicRegion::new("chr1", 0, 400),
                GenomicRegion::new("chr2", 0, 300),
            ]
        );
    }

    #[rstest]
    fn test_segment_drops_single_bin_and_undefined_domains() {
        let regions = regions(&[("chr1", 6), ("chr2", 4)]);
        let nan = f64::NAN;
        let signal = IndexSignal::from(vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.0, nan, nan, nan, nan]);

        // [0..=3] kept, [4] single bin, [5] single bin, chr2 all undefined
        let domains = segment(&signal, &regions, &[3, 4]);
        assert_eq!(domains, vec![GenomicRegion::new("chr1", 0, 400)]);
    }

    #[rstest]
    fn test_segment_domains_stay_within_chromosomes() {
        let regions = regions(&[("chr1", 5), ("chr2", 5)]);
        let signal = IndexSignal::from(vec![0.5; 10]);

        let domains = segment(&signal, &regions, &[1, 6]);
        assert_eq!(
            domains,
            vec![
                GenomicRegion::new("chr1", 0, 200),
                GenomicRegion::new("chr1", 200, 500),
                GenomicRegion::new("chr2", 0, 200),
                GenomicRegion::new("chr2", 200, 500),
            ]
        );
    }

    #[rstest]
    fn test_check_signal() {
        let regions = regions(&[("chr1", 3)]);
        let signal = IndexSignal::from(vec![0.0; 3]);

        assert!(check_signal(&signal, 0.5, &regions).is_ok());
        assert!(matches!(
            check_signal(&signal, f64::NAN, &regions),
            Err(TadError::InvalidCutoff(_))
        ));
        assert_eq!(
            check_signal(&IndexSignal::from(vec![0.0; 4]), 0.5, &regions),
            Err(TadError::BinCountMismatch {
                cols: 4,
                regions: 3
            })
        );
    }
}

//! Conversion of base-pair window sizes into per-bin ranges of matrix rows.
//!
//! Bins may have variable widths, so the same base-pair window covers a
//! different number of bins around each locus. Windows never cross a
//! chromosome boundary, and a bin only gets a window if the full base-pair
//! distance fits inside its chromosome on both sides.

use tadtool_core::models::RegionSet;

/// Reference point of the window around bin `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowAnchor {
    /// The boundary between bin `i` and bin `i + 1`. Bin `i` is on the
    /// upstream side.
    Boundary,
    /// Bin `i` itself, excluded from both sides.
    Bin,
}

/// Inclusive range of bins covered by the window around one bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinWindow {
    pub first: usize,
    pub last: usize,
}

impl BinWindow {
    /// Largest diagonal offset between two bins of the window.
    pub fn span(&self) -> usize {
        self.last - self.first
    }
}

///
/// Resolve `window_size` (bp) into one optional [BinWindow] per region.
///
/// Upstream bins are those starting at or after `anchor - window_size`,
/// downstream bins those ending at or before `end + window_size`, where
/// `anchor` is the end of bin `i` for [WindowAnchor::Boundary] and its start
/// for [WindowAnchor::Bin]. `None` marks bins whose window does not fit the
/// chromosome or has an empty side.
///
pub fn bin_windows(
    regions: &RegionSet,
    window_size: u32,
    anchor: WindowAnchor,
) -> Vec<Option<BinWindow>> {
    let mut windows: Vec<Option<BinWindow>> = vec![None; regions.len()];
    let window_size = u64::from(window_size);

    for chromosome in regions.chromosomes() {
        let offset = chromosome.bins.start;
        let bins = &regions.regions[chromosome.bins.clone()];
        let chrom_start = u64::from(chromosome.start);
        let chrom_end = u64::from(chromosome.end);

        for (local, region) in bins.iter().enumerate() {
            let i = offset + local;
            let upstream_ref = match anchor {
                WindowAnchor::Boundary => u64::from(region.end),
                WindowAnchor::Bin => u64::from(region.start),
            };
            let downstream_ref = u64::from(region.end);

            if upstream_ref < chrom_start + window_size
                || downstream_ref + window_size > chrom_end
            {
                continue;
            }
            let lower = upstream_ref - window_size;
            let upper = downstream_ref + window_size;

            let first = offset + bins.partition_point(|r| u64::from(r.start) < lower);
            let n_within = bins.partition_point(|r| u64::from(r.end) <= upper);
            if n_within == 0 {
                continue;
            }
            let last = offset + n_within - 1;

            let complete = match anchor {
                WindowAnchor::Boundary => first <= i && last > i,
                WindowAnchor::Bin => first < i && last > i,
            };
            if complete {
                windows[i] = Some(BinWindow { first, last });
            }
        }
    }

    windows
}

/// Largest [BinWindow::span] over all bins, 0 if no bin has a window.
pub fn max_span(windows: &[Option<BinWindow>]) -> usize {
    windows.iter().flatten().map(BinWindow::span).max().unwrap_or(0)
}

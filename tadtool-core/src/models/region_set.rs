use std::collections::HashSet;
use std::io::BufRead;
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::errors::RegionSetError;
use crate::models::GenomicRegion;
use crate::utils::get_dynamic_reader;

///
/// RegionSet struct, the ordered list of bins labelling the rows and columns
/// of a contact matrix.
///
/// Order is significant: region `i` describes matrix row `i`, so a RegionSet
/// is never re-sorted after loading.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegionSet {
    pub regions: Vec<GenomicRegion>,
    pub path: Option<PathBuf>,
}

/// The contiguous run of bins belonging to one chromosome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChromosomeBins {
    pub chr: String,
    /// Bin (matrix row) indices of this chromosome.
    pub bins: Range<usize>,
    /// Start of the first bin.
    pub start: u32,
    /// End of the last bin.
    pub end: u32,
}

impl ChromosomeBins {
    /// Genomic distance covered by the bins of this chromosome.
    pub fn extent(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }
}

pub struct RegionSetIterator<'a> {
    region_set: &'a RegionSet,
    index: usize,
}

impl TryFrom<&Path> for RegionSet {
    type Error = RegionSetError;

    ///
    /// Create a new [RegionSet] from a BED3 file (plain or gzipped).
    ///
    /// Columns beyond the third are ignored. `browser`, `track` and `#` lines
    /// are skipped, as is a column header on the first line.
    ///
    /// # Arguments:
    /// - value: path to bed file on disk.
    fn try_from(value: &Path) -> Result<Self, Self::Error> {
        let reader = get_dynamic_reader(value)
            .map_err(|e| RegionSetError::FileReadError(format!("{}: {}", value.display(), e)))?;

        let mut regions: Vec<GenomicRegion> = Vec::new();
        let mut first_line = true;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = idx + 1;

            if line.trim().is_empty()
                || line.starts_with("browser")
                || line.starts_with("track")
                || line.starts_with('#')
            {
                continue;
            }

            let parts: Vec<&str> = line.split('\t').collect();

            // Handling column headers like `chr start end` without #
            if first_line {
                first_line = false;
                if parts.len() >= 3 && parts[1].trim().parse::<u32>().is_err() {
                    continue;
                }
            }

            if parts.len() < 3 {
                return Err(RegionSetError::RegionParseError {
                    line: line_number,
                    message: format!("expected at least 3 columns, found {}", parts.len()),
                });
            }

            let start = parse_position(parts[1], line_number, "start")?;
            let end = parse_position(parts[2], line_number, "end")?;

            if end <= start {
                return Err(RegionSetError::RegionParseError {
                    line: line_number,
                    message: format!("end ({}) must be greater than start ({})", end, start),
                });
            }

            regions.push(GenomicRegion::new(parts[0].trim(), start, end));
        }

        if regions.is_empty() {
            return Err(RegionSetError::EmptyRegionSet(value.display().to_string()));
        }

        let rs = RegionSet {
            regions,
            path: Some(value.to_owned()),
        };
        rs.validate()?;

        Ok(rs)
    }
}

fn parse_position(field: &str, line: usize, name: &str) -> Result<u32, RegionSetError> {
    field
        .trim()
        .parse::<u32>()
        .map_err(|_| RegionSetError::RegionParseError {
            line,
            message: format!("invalid {} position '{}'", name, field),
        })
}

impl TryFrom<&str> for RegionSet {
    type Error = RegionSetError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        RegionSet::try_from(Path::new(value))
    }
}

impl TryFrom<String> for RegionSet {
    type Error = RegionSetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RegionSet::try_from(Path::new(&value))
    }
}

impl TryFrom<PathBuf> for RegionSet {
    type Error = RegionSetError;

    fn try_from(value: PathBuf) -> Result<Self, Self::Error> {
        RegionSet::try_from(value.as_path())
    }
}

impl From<Vec<GenomicRegion>> for RegionSet {
    fn from(regions: Vec<GenomicRegion>) -> Self {
        RegionSet {
            regions,
            path: None,
        }
    }
}

impl<'a> Iterator for RegionSetIterator<'a> {
    type Item = &'a GenomicRegion;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.region_set.regions.len() {
            let region = &self.region_set.regions[self.index];
            self.index += 1;
            Some(region)
        } else {
            None
        }
    }
}

impl<'a> IntoIterator for &'a RegionSet {
    type Item = &'a GenomicRegion;
    type IntoIter = RegionSetIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        RegionSetIterator {
            region_set: self,
            index: 0,
        }
    }
}

impl RegionSet {
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> RegionSetIterator<'_> {
        self.into_iter()
    }

    ///
    /// Check that the regions can label a contact matrix: every chromosome
    /// occupies a single run of bins, and bins within a chromosome are
    /// ascending and non-overlapping.
    ///
    pub fn validate(&self) -> Result<(), RegionSetError> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut previous: Option<&GenomicRegion> = None;

        for (idx, region) in self.regions.iter().enumerate() {
            match previous {
                Some(prev) if prev.chr == region.chr => {
                    if region.start < prev.end {
                        return Err(RegionSetError::UnsortedRegions(format!(
                            "region {} ({}) starts before the end of region {} ({})",
                            idx,
                            region,
                            idx - 1,
                            prev
                        )));
                    }
                }
                _ => {
                    if !seen.insert(region.chr.as_str()) {
                        return Err(RegionSetError::UnsortedRegions(format!(
                            "chromosome {} appears in more than one block (region {})",
                            region.chr, idx
                        )));
                    }
                }
            }
            previous = Some(region);
        }

        Ok(())
    }

    ///
    /// Split the bins into per-chromosome runs, in matrix order.
    ///
    pub fn chromosomes(&self) -> Vec<ChromosomeBins> {
        let mut chromosomes: Vec<ChromosomeBins> = Vec::new();

        for (idx, region) in self.regions.iter().enumerate() {
            match chromosomes.last_mut() {
                Some(current) if current.chr == region.chr => {
                    current.bins.end = idx + 1;
                    current.end = current.end.max(region.end);
                }
                _ => chromosomes.push(ChromosomeBins {
                    chr: region.chr.clone(),
                    bins: idx..idx + 1,
                    start: region.start,
                    end: region.end,
                }),
            }
        }

        chromosomes
    }

    ///
    /// Largest genomic extent covered by a single chromosome, 0 if empty.
    ///
    pub fn max_chromosome_extent(&self) -> u32 {
        self.chromosomes()
            .iter()
            .map(ChromosomeBins::extent)
            .max()
            .unwrap_or(0)
    }
}

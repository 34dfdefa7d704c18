use std::fmt::{self, Display};

///
/// GenomicRegion struct, one bin of a Hi-C matrix or one called domain.
///
/// Coordinates follow the BED convention: 0-based, half-open `[start, end)`.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct GenomicRegion {
    pub chr: String,
    pub start: u32,
    pub end: u32,
}

impl GenomicRegion {
    pub fn new<S: Into<String>>(chr: S, start: u32, end: u32) -> Self {
        GenomicRegion {
            chr: chr.into(),
            start,
            end,
        }
    }

    ///
    /// Get length of the region in base pairs
    ///
    pub fn width(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    ///
    /// Get BED3 line of the region
    ///
    pub fn as_string(&self) -> String {
        format!("{}\t{}\t{}", self.chr, self.start, self.end)
    }
}

impl Display for GenomicRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

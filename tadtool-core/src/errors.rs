use thiserror::Error;

/// Shape and parameter errors raised by the index calculators, the
/// aggregator and the TAD callers. Every variant is detected before any
/// matrix computation starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TadError {
    #[error("Contact matrix is not square: {rows} rows x {cols} columns")]
    NotSquare { rows: usize, cols: usize },

    #[error("Number of regions ({regions}) does not match matrix dimension ({dimension})")]
    DimensionMismatch { regions: usize, dimension: usize },

    #[error("Index matrix has {rows} rows but {window_sizes} window sizes were supplied")]
    WindowCountMismatch { rows: usize, window_sizes: usize },

    #[error("Index data has {cols} columns but there are {regions} regions")]
    BinCountMismatch { cols: usize, regions: usize },

    #[error("Window size must be a positive integer, got {0}")]
    InvalidWindowSize(i64),

    #[error("Window size {window_size} exceeds the largest chromosome extent ({extent} bp)")]
    WindowExceedsChromosome { window_size: u32, extent: u32 },

    #[error("Normalisation window must span at least one region")]
    InvalidNormalisationWindow,

    #[error(
        "Unknown index algorithm '{0}'. Valid options: insulation, ninsulation, directionality"
    )]
    UnknownAlgorithm(String),

    #[error("Unknown TAD caller '{0}'. Valid options: insulation, directionality")]
    UnknownCaller(String),

    #[error("Invalid window size specification: {0}")]
    InvalidWindowSpec(String),

    #[error("Window size {0} not found in index matrix")]
    WindowNotFound(u32),

    #[error("Region set is empty")]
    EmptyRegionSet,

    #[error("Cutoff must be a number, got {0}")]
    InvalidCutoff(f64),
}

#[derive(Error, Debug)]
pub enum RegionSetError {
    #[error("Can't read file: {0}")]
    FileReadError(String),

    #[error("Error parsing region on line {line}: {message}")]
    RegionParseError { line: usize, message: String },

    #[error("Regions are not in matrix order: {0}")]
    UnsortedRegions(String),

    #[error("Corrupted file. 0 regions found in the file: {0}")]
    EmptyRegionSet(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

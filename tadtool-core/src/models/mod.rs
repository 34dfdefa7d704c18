pub mod matrix;
pub mod region;
pub mod region_set;
pub mod signal;

// re-export for cleaner imports
pub use self::matrix::ContactMatrix;
pub use self::region::GenomicRegion;
pub use self::region_set::{ChromosomeBins, RegionSet};
pub use self::signal::{IndexMatrix, IndexSignal};

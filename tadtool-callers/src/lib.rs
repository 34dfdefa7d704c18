//! Cutoff-based TAD calling.
//!
//! A TAD caller scans one index signal for boundary candidates, keeps the
//! candidates that pass a cutoff, and cuts every chromosome after each
//! accepted boundary bin. Two callers are provided:
//!
//! - [call_tads_insulation_index]: local minima of the insulation index at or
//!   below the cutoff
//! - [call_tads_directionality_index]: negative-to-positive switches of the
//!   directionality index whose magnitude exceeds the cutoff on both sides
//!
//! The trailing domain of each chromosome is always emitted; domains of a
//! single bin and domains without any defined index value are dropped.

pub mod caller;
pub mod directionality;
pub mod insulation;
pub mod segment;

// re-exports
pub use caller::TadCaller;
pub use directionality::{call_tads_directionality_index, directionality_boundaries};
pub use insulation::{call_tads_insulation_index, insulation_boundaries};

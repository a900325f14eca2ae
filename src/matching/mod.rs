//! Primer/target comparison.
//!
//! - [`mismatch`]: ambiguity-aware recount of primer mismatches

pub mod mismatch;

pub use mismatch::{count_mismatches, recalculate_mismatches, Side, ValidationError};

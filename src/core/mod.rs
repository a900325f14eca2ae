//! Core data types for ipcress results.
//!
//! - [`alphabet`]: IUPAC nucleotide codes and the "base satisfies code" predicate
//! - [`IpcressResult`]: one primer-pair hit parsed from a report
//! - [`ResultCollection`]: all hits of a report, in report order
//! - [`PrimerSet`]: a primer pair in ipcress input-file syntax

pub mod alphabet;
pub mod primer_set;
pub mod result;

pub use primer_set::{DistanceBounds, PrimerSet};
pub use result::{IpcressResult, ResultCollection};

//! # bio-ipcress
//!
//! A library for running the ipcress in-silico PCR tool and reading its reports.
//!
//! ipcress writes a human-readable report with one block per primer-pair hit.
//! `bio-ipcress` turns that report into structured [`IpcressResult`] records and
//! can recount primer mismatches from the printed alignments.
//!
//! ## Features
//!
//! - **Strict report parsing**: Every field is read from a fixed line of its
//!   block; a malformed block fails the whole report
//! - **Wobble-aware mismatch counts**: ipcress counts every IUPAC ambiguity code
//!   in a primer as a mismatch; recalculation only counts bases that do not
//!   satisfy the code
//! - **ipcress invocation**: Write the primer file, run the tool, parse stdout
//!
//! ## Example
//!
//! ```rust
//! use bio_ipcress::parsing::ipcress::parse_report;
//! use bio_ipcress::matching::mismatch::recalculate_mismatches;
//!
//! let report = "
//! Ipcress result
//! --------------
//!  Experiment: AE12_pmid21856836_16S
//!     Primers: A B
//!      Target: gi|335929284|gb|JN048683.1|:filter(unmasked) Methanocella conradii
//!     Matches: 19/20 14/15
//!     Product: 502 bp (range 2-10000)
//! Result type: forward
//!
//! ...AAACTTAAAGGAATTGGCGG......................... # forward
//!    ||||| ||| |||||| |||-->
//! 5'-AAACTYAAAKGAATTGRCGG-3' 3'-CRTGTGTGGCGGGCA-5' # primers
//!                            <--| |||||||||||||
//! ..............................CGTGTGTGGCGGGCA... # revcomp
//! --
//! ipcress: gi|335929284|gb|JN048683.1|:filter(unmasked) AE12_pmid21856836_16S 502 A 826 1 B 1313 1 forward
//! -- completed ipcress analysis";
//!
//! let results = parse_report(report).unwrap();
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].forward_mismatches, 1);
//! assert_eq!(recalculate_mismatches(&results[0]).unwrap(), (0, 0));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Result records, primer sets and the IUPAC alphabet
//! - [`parsing`]: ipcress report parser and FASTA checks
//! - [`matching`]: Mismatch recalculation
//! - [`runner`]: ipcress invocation
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod runner;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::primer_set::{DistanceBounds, PrimerSet};
pub use crate::core::result::{IpcressResult, ResultCollection};
pub use crate::matching::mismatch::recalculate_mismatches;
pub use crate::parsing::ipcress::{parse_report, ParseError};
pub use crate::runner::{run, ExecutionError, RunOptions};

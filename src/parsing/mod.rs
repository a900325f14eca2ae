//! Parsers for ipcress reports and the sequence files handed to ipcress.
//!
//! - **ipcress reports**: Split a report into result blocks and read each
//!   block into an [`IpcressResult`](crate::core::result::IpcressResult)
//! - **FASTA files**: Check a sequence database before running ipcress
//!
//! ## Example
//!
//! ```rust
//! use bio_ipcress::parsing::ipcress::parse_report;
//!
//! let results = parse_report("-- completed ipcress analysis\n").unwrap();
//! assert!(results.is_empty());
//! ```

pub mod fasta;
pub mod ipcress;

pub use ipcress::{parse_report, parse_report_file, Field, ParseError};

//! FASTA sequence database checks using noodles.
//!
//! ipcress reads the database itself; this only confirms that the file is a
//! readable FASTA with at least one record before the tool is launched, so a
//! bad path or format surfaces as a clear error instead of an empty report.
//! Only the first record is read, whatever the size of the database.

use std::io::{BufRead, BufReader};
use std::path::Path;

use noodles::fasta;

use crate::parsing::ipcress::ParseError;

/// Name and length of the first record in a FASTA file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaHead {
    pub name: String,
    pub length: u64,
}

/// Check that a file is a FASTA with at least one record.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened, `ParseError::Noodles`
/// if the first record cannot be parsed, or `ParseError::EmptyFasta` if the
/// file has no records.
pub fn check_fasta_file(path: &Path) -> Result<FastaHead, ParseError> {
    let file = std::fs::File::open(path)?;
    let mut reader = fasta::io::Reader::new(BufReader::new(file));

    first_record(&mut reader)?.ok_or_else(|| ParseError::EmptyFasta(path.display().to_string()))
}

fn first_record<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<Option<FastaHead>, ParseError> {
    let Some(result) = reader.records().next() else {
        return Ok(None);
    };
    let record =
        result.map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

    Ok(Some(FastaHead {
        name: String::from_utf8_lossy(record.name()).to_string(),
        length: record.sequence().len() as u64,
    }))
}

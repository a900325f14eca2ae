//! Invoke the ipcress executable and parse its report.
//!
//! The primer set is written to a temporary ipcress input file, then
//! `ipcress [--mismatch N] <primer file> <fasta>` is run and its standard
//! output handed to [`parse_report`].

use std::ffi::OsString;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;
use tracing::{debug, info};

use crate::core::primer_set::{DistanceBounds, PrimerSet};
use crate::core::result::ResultCollection;
use crate::parsing::fasta::check_fasta_file;
use crate::parsing::ipcress::{parse_report, ParseError};

/// Executable looked up on `PATH` when no explicit path is configured
pub const DEFAULT_IPCRESS_PATH: &str = "ipcress";

/// Settings for one ipcress invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// ipcress executable
    pub ipcress_path: PathBuf,
    /// Product length range written into the primer file
    pub bounds: DistanceBounds,
    /// Mismatches allowed per primer (ipcress default when unset)
    pub mismatches: Option<u32>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            ipcress_path: PathBuf::from(DEFAULT_IPCRESS_PATH),
            bounds: DistanceBounds::default(),
            mismatches: None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Sequence database not found: {0}")]
    FastaNotFound(String),

    #[error("Invalid sequence database '{path}': {source}")]
    InvalidFasta { path: String, source: ParseError },

    #[error("Failed to write ipcress primer file: {0}")]
    PrimerFile(#[source] std::io::Error),

    #[error("ipcress executable not found: {0}")]
    ToolNotFound(String),

    #[error("Could not run ipcress executable '{executable}': {source}")]
    Spawn {
        executable: String,
        source: std::io::Error,
    },

    #[error("ipcress failed ({status}): {stderr}")]
    Failed { status: String, stderr: String },

    #[error("ipcress produced no output")]
    EmptyOutput,

    #[error("ipcress output is not valid UTF-8: {0}")]
    NonUtf8Output(#[source] std::string::FromUtf8Error),

    #[error("Failed to parse ipcress output: {0}")]
    Parse(#[from] ParseError),
}

/// Run ipcress for one primer set against a FASTA sequence database.
///
/// A report without hits yields an empty collection.
///
/// # Errors
///
/// Returns `ExecutionError::FastaNotFound` or `ExecutionError::InvalidFasta`
/// for an unusable database, `ExecutionError::ToolNotFound` or
/// `ExecutionError::Spawn` if ipcress cannot be started,
/// `ExecutionError::Failed` on a non-zero exit, `ExecutionError::EmptyOutput`
/// if nothing was written to stdout, `ExecutionError::NonUtf8Output` if the
/// report is not UTF-8, and `ExecutionError::Parse` if it is malformed.
pub fn run(
    primers: &PrimerSet,
    fasta: &Path,
    options: &RunOptions,
) -> Result<ResultCollection, ExecutionError> {
    if !fasta.is_file() {
        return Err(ExecutionError::FastaNotFound(fasta.display().to_string()));
    }

    let head = check_fasta_file(fasta).map_err(|source| ExecutionError::InvalidFasta {
        path: fasta.display().to_string(),
        source,
    })?;
    debug!(
        fasta = %fasta.display(),
        first_record = %head.name,
        first_length = head.length,
        "Checked sequence database"
    );

    let mut primer_file = tempfile::Builder::new()
        .prefix("ipcress_primers_")
        .suffix(".txt")
        .tempfile()
        .map_err(ExecutionError::PrimerFile)?;
    writeln!(primer_file, "{}", primers.to_ipcress_format(options.bounds))
        .and_then(|()| primer_file.flush())
        .map_err(ExecutionError::PrimerFile)?;

    let args = build_args(primer_file.path(), fasta, options);
    let executable = options.ipcress_path.display().to_string();
    info!(
        executable = %executable,
        primer_set = %primers.id,
        fasta = %fasta.display(),
        "Running ipcress"
    );

    let output = Command::new(&options.ipcress_path)
        .args(&args)
        .output()
        .map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ExecutionError::ToolNotFound(executable.clone())
            } else {
                ExecutionError::Spawn {
                    executable: executable.clone(),
                    source: e,
                }
            }
        })?;

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if !output.status.success() {
        return Err(ExecutionError::Failed {
            status: output.status.to_string(),
            stderr,
        });
    }
    if !stderr.is_empty() {
        debug!(stderr = %stderr, "ipcress stderr");
    }

    let stdout = String::from_utf8(output.stdout).map_err(ExecutionError::NonUtf8Output)?;
    if stdout.trim().is_empty() {
        return Err(ExecutionError::EmptyOutput);
    }

    let results = parse_report(&stdout)?;
    info!(results = results.len(), "ipcress finished");
    Ok(results)
}

/// Command-line arguments passed to ipcress
fn build_args(primer_file: &Path, fasta: &Path, options: &RunOptions) -> Vec<OsString> {
    let mut args = Vec::new();
    if let Some(mismatches) = options.mismatches {
        args.push(OsString::from("--mismatch"));
        args.push(OsString::from(mismatches.to_string()));
    }
    args.push(primer_file.as_os_str().to_owned());
    args.push(fasta.as_os_str().to_owned());
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RunOptions::default();
        assert_eq!(options.ipcress_path, PathBuf::from("ipcress"));
        assert_eq!(options.bounds.min_distance, 100);
        assert_eq!(options.bounds.max_distance, 1000);
        assert!(options.mismatches.is_none());
    }

    #[test]
    fn test_build_args() {
        let options = RunOptions::default();
        let args = build_args(Path::new("primers.txt"), Path::new("db.fa"), &options);
        assert_eq!(args, vec![OsString::from("primers.txt"), OsString::from("db.fa")]);

        let options = RunOptions {
            mismatches: Some(2),
            ..RunOptions::default()
        };
        let args = build_args(Path::new("primers.txt"), Path::new("db.fa"), &options);
        assert_eq!(
            args,
            vec![
                OsString::from("--mismatch"),
                OsString::from("2"),
                OsString::from("primers.txt"),
                OsString::from("db.fa"),
            ]
        );
    }

    #[test]
    fn test_missing_fasta() {
        let primers = PrimerSet::new("GGTCACTGCTA", "GGCTACCTTGTTACGACTTAAC");
        let result = run(
            &primers,
            Path::new("notafasta_file_fo_so.fa"),
            &RunOptions::default(),
        );
        assert!(matches!(result, Err(ExecutionError::FastaNotFound(_))));
    }
}

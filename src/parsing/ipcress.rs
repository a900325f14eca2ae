//! Parser for ipcress text reports.
//!
//! A report is a banner followed by zero or more result blocks, each introduced
//! by the header
//!
//! ```text
//!
//! Ipcress result
//! --------------
//! ```
//!
//! Inside a block every field sits at a fixed line offset (after trimming):
//!
//! | Offset | Content |
//! |--------|---------|
//! | 0  | `Experiment: <name>` |
//! | 1  | `Primers: <primers>` |
//! | 2  | `Target: <target>` |
//! | 3  | `Matches: <matches>` |
//! | 4  | `Product: <product>` |
//! | 5  | `Result type: <type>` |
//! | 7  | `...<sequence>.... # forward` |
//! | 9  | `5'-<forward primer>-3' 3'-<reverse primer>-5' # primers` |
//! | 11 | `....<sequence>... # revcomp` |
//! | 13 | `ipcress: <target> <experiment> <length> <A\|B> <start> <mm> <A\|B> <coord> <mm> <type>` |
//!
//! Lines 6, 8, 10 and 12 (blank lines, alignment bars, `--`) are skipped.
//! The header is the only block boundary: target and product descriptions
//! may contain any punctuation.

use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::core::result::{IpcressResult, ResultCollection};
use crate::matching::mismatch::Side;
use crate::utils::validation::check_result_limit;

/// Literal text separating result blocks
pub const BLOCK_SEPARATOR: &str = "\nIpcress result\n--------------\n";

const EXPERIMENT_LINE: usize = 0;
const PRIMERS_LINE: usize = 1;
const TARGET_LINE: usize = 2;
const MATCHES_LINE: usize = 3;
const PRODUCT_LINE: usize = 4;
const RESULT_TYPE_LINE: usize = 5;
const FORWARD_ALIGNMENT_LINE: usize = 7;
const PRIMER_ALIGNMENT_LINE: usize = 9;
const REVERSE_ALIGNMENT_LINE: usize = 11;
const SUMMARY_LINE: usize = 13;

/// Number of tokens following `ipcress:` on the summary line
const SUMMARY_TOKENS: usize = 10;

/// A field extracted from a result block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Experiment,
    Primers,
    Target,
    Matches,
    Product,
    ResultType,
    ForwardAlignment,
    PrimerAlignment,
    ReverseAlignment,
    Summary,
    Length,
    Start,
    ForwardMismatches,
    ReverseMismatches,
}

impl Field {
    /// Label that introduces a labelled header line
    fn label(self) -> Option<&'static str> {
        match self {
            Self::Experiment => Some("Experiment: "),
            Self::Primers => Some("Primers: "),
            Self::Target => Some("Target: "),
            Self::Matches => Some("Matches: "),
            Self::Product => Some("Product: "),
            Self::ResultType => Some("Result type: "),
            _ => None,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Experiment => "Experiment",
            Self::Primers => "Primers",
            Self::Target => "Target",
            Self::Matches => "Matches",
            Self::Product => "Product",
            Self::ResultType => "Result type",
            Self::ForwardAlignment => "forward alignment",
            Self::PrimerAlignment => "primer alignment",
            Self::ReverseAlignment => "revcomp alignment",
            Self::Summary => "ipcress summary",
            Self::Length => "product length",
            Self::Start => "product start",
            Self::ForwardMismatches => "forward mismatches",
            Self::ReverseMismatches => "reverse mismatches",
        };
        write!(f, "{name}")
    }
}

/// Errors raised while reading an ipcress report.
///
/// Block numbers are 1-based; line numbers are offsets within the block.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Result block {block}: missing {field} line (expected at line {line} of the block)")]
    MissingLine {
        block: usize,
        line: usize,
        field: Field,
    },

    #[error("Result block {block}, line {line}: malformed {field} line: '{content}'")]
    InvalidFormat {
        block: usize,
        line: usize,
        field: Field,
        content: String,
    },

    #[error("Result block {block}: invalid {field} '{value}'")]
    InvalidNumber {
        block: usize,
        field: Field,
        value: String,
    },

    #[error(
        "Result block {block}: {side} matching sequence has {sequence_len} bases but primer has {primer_len}"
    )]
    AlignmentLengthMismatch {
        block: usize,
        side: Side,
        sequence_len: usize,
        primer_len: usize,
    },

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("No sequences found in FASTA file: {0}")]
    EmptyFasta(String),

    #[error("Too many results: {0} exceeds maximum allowed (1000000)")]
    TooManyResults(usize),
}

/// Parse an ipcress report file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or any error from
/// [`parse_report`].
pub fn parse_report_file(path: &Path) -> Result<ResultCollection, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_report(&content)
}

/// Parse a full ipcress report into its results, in report order.
///
/// Text before the first block header is ignored, as is anything after the
/// summary line of a block (e.g. `-- completed ipcress analysis`). A report
/// without any block yields an empty collection.
///
/// # Errors
///
/// Fails on the first block that does not follow the expected layout; no
/// partial collection is returned. Returns `ParseError::TooManyResults` if
/// the report exceeds `MAX_RESULTS` blocks.
pub fn parse_report(text: &str) -> Result<ResultCollection, ParseError> {
    let mut results = ResultCollection::new();

    for (index, segment) in text.split(BLOCK_SEPARATOR).enumerate().skip(1) {
        if check_result_limit(results.len()).is_some() {
            return Err(ParseError::TooManyResults(results.len()));
        }

        let result = BlockCursor::new(index, segment).parse()?;
        debug!(
            block = index,
            experiment = %result.experiment_name,
            result_type = %result.result_type,
            length = result.length,
            "Parsed ipcress result block"
        );
        results.push(result);
    }

    debug!(results = results.len(), "Parsed ipcress report");
    Ok(results)
}

/// Walks the trimmed lines of one result block
struct BlockCursor<'a> {
    block: usize,
    lines: Vec<&'a str>,
}

impl<'a> BlockCursor<'a> {
    fn new(block: usize, segment: &'a str) -> Self {
        Self {
            block,
            lines: segment.lines().map(str::trim).collect(),
        }
    }

    fn parse(&self) -> Result<IpcressResult, ParseError> {
        let experiment_name = self.labelled(EXPERIMENT_LINE, Field::Experiment)?;
        let primers = self.labelled(PRIMERS_LINE, Field::Primers)?;
        let target = self.labelled(TARGET_LINE, Field::Target)?;
        let matches = self.labelled(MATCHES_LINE, Field::Matches)?;
        let product = self.labelled(PRODUCT_LINE, Field::Product)?;
        let result_type = self.labelled(RESULT_TYPE_LINE, Field::ResultType)?;

        let forward_matching_sequence = self.extract(
            FORWARD_ALIGNMENT_LINE,
            Field::ForwardAlignment,
            forward_alignment,
        )?;
        let (forward_primer_sequence, reverse_primer_sequence) =
            self.extract(PRIMER_ALIGNMENT_LINE, Field::PrimerAlignment, primer_alignment)?;
        let reverse_matching_sequence = self.extract(
            REVERSE_ALIGNMENT_LINE,
            Field::ReverseAlignment,
            reverse_alignment,
        )?;

        self.check_alignment(
            Side::Forward,
            forward_matching_sequence,
            forward_primer_sequence,
        )?;
        self.check_alignment(
            Side::Reverse,
            reverse_matching_sequence,
            reverse_primer_sequence,
        )?;

        let summary = self.extract(SUMMARY_LINE, Field::Summary, summary_tokens)?;
        // Target, experiment, second coordinate and result type repeat the
        // header or are not kept.
        self.number::<u64>(summary[7], Field::Summary)?;

        Ok(IpcressResult {
            experiment_name: experiment_name.to_string(),
            primers: primers.to_string(),
            target: target.to_string(),
            matches: matches.to_string(),
            product: product.to_string(),
            result_type: result_type.to_string(),
            forward_matching_sequence: forward_matching_sequence.to_string(),
            reverse_matching_sequence: reverse_matching_sequence.to_string(),
            forward_primer_sequence: forward_primer_sequence.to_string(),
            reverse_primer_sequence: reverse_primer_sequence.to_string(),
            length: self.number(summary[2], Field::Length)?,
            start: self.number(summary[4], Field::Start)?,
            forward_mismatches: self.number(summary[5], Field::ForwardMismatches)?,
            reverse_mismatches: self.number(summary[8], Field::ReverseMismatches)?,
        })
    }

    fn line(&self, line: usize, field: Field) -> Result<&'a str, ParseError> {
        self.lines
            .get(line)
            .copied()
            .ok_or(ParseError::MissingLine {
                block: self.block,
                line,
                field,
            })
    }

    /// Apply `extract` to the line at `line`, reporting a format error if it
    /// does not match
    fn extract<T>(
        &self,
        line: usize,
        field: Field,
        extract: impl Fn(&'a str) -> Option<T>,
    ) -> Result<T, ParseError> {
        let content = self.line(line, field)?;
        extract(content).ok_or_else(|| ParseError::InvalidFormat {
            block: self.block,
            line,
            field,
            content: content.to_string(),
        })
    }

    /// Value of a `Label: value` line
    fn labelled(&self, line: usize, field: Field) -> Result<&'a str, ParseError> {
        self.extract(line, field, |content| {
            let label = field.label()?;
            content.strip_prefix(label).filter(|value| !value.is_empty())
        })
    }

    fn number<T: std::str::FromStr>(&self, token: &str, field: Field) -> Result<T, ParseError> {
        if !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(self.invalid_number(token, field));
        }
        token
            .parse()
            .map_err(|_| self.invalid_number(token, field))
    }

    fn invalid_number(&self, token: &str, field: Field) -> ParseError {
        ParseError::InvalidNumber {
            block: self.block,
            field,
            value: token.to_string(),
        }
    }

    fn check_alignment(&self, side: Side, sequence: &str, primer: &str) -> Result<(), ParseError> {
        if sequence.len() == primer.len() {
            Ok(())
        } else {
            Err(ParseError::AlignmentLengthMismatch {
                block: self.block,
                side,
                sequence_len: sequence.len(),
                primer_len: primer.len(),
            })
        }
    }
}

fn is_sequence(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// `...ACGT...... # forward`: exactly three leading dots, then the matched
/// bases, then at least one dot
fn forward_alignment(line: &str) -> Option<&str> {
    let body = line.strip_suffix(" # forward")?.strip_prefix("...")?;
    let sequence = body.trim_end_matches('.');
    (sequence.len() < body.len() && is_sequence(sequence)).then_some(sequence)
}

/// `......ACGT... # revcomp`: at least one leading dot, the matched bases,
/// then exactly three dots
fn reverse_alignment(line: &str) -> Option<&str> {
    let body = line.strip_suffix(" # revcomp")?.strip_suffix("...")?;
    let sequence = body.trim_start_matches('.');
    (sequence.len() < body.len() && is_sequence(sequence)).then_some(sequence)
}

/// `5'-<forward>-3' 3'-<reverse>-5' # primers`
fn primer_alignment(line: &str) -> Option<(&str, &str)> {
    let body = line.strip_suffix(" # primers")?;
    let (forward, reverse) = body.split_once(' ')?;
    let forward = forward.strip_prefix("5'-")?.strip_suffix("-3'")?;
    let reverse = reverse.strip_prefix("3'-")?.strip_suffix("-5'")?;
    (is_sequence(forward) && is_sequence(reverse)).then_some((forward, reverse))
}

/// Tokens of the `ipcress:` summary line, with both primer labels checked
fn summary_tokens(line: &str) -> Option<Vec<&str>> {
    let tokens: Vec<&str> = line.strip_prefix("ipcress: ")?.split_whitespace().collect();
    let is_primer_label = |token: &str| matches!(token, "A" | "B");

    (tokens.len() == SUMMARY_TOKENS && is_primer_label(tokens[3]) && is_primer_label(tokens[6]))
        .then_some(tokens)
}

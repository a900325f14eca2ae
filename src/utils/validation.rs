//! Centralized validation and helper functions.

use crate::core::alphabet::is_valid_code;

/// Maximum number of results accepted from a single report (DOS protection)
pub const MAX_RESULTS: usize = 1_000_000;

/// Maximum primer length accepted on the command line
pub const MAX_PRIMER_LENGTH: usize = 1_000;

/// Check if adding another result would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new result.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_result_limit(count: usize) -> Option<String> {
    if count >= MAX_RESULTS {
        Some(format!(
            "Too many results: adding another would exceed maximum of {MAX_RESULTS}"
        ))
    } else {
        None
    }
}

/// Primer input validation errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PrimerError {
    #[error("Primer sequence is empty")]
    Empty,

    #[error("Primer sequence is too long ({0} bases, maximum 1000)")]
    TooLong(usize),

    #[error("Primer sequence has invalid character '{character}' at position {position}")]
    InvalidCharacter { position: usize, character: char },
}

/// Validate a primer and normalize it to upper case.
///
/// ipcress reads the primer file as whitespace-separated tokens, so anything
/// outside the IUPAC nucleotide alphabet would corrupt the input line.
///
/// # Examples
///
/// ```
/// use bio_ipcress::utils::validation::validate_primer;
///
/// assert_eq!(validate_primer("acgtRY").unwrap(), "ACGTRY");
/// assert!(validate_primer("ACG T").is_err());
/// ```
///
/// # Errors
///
/// Returns `PrimerError::Empty` for an empty primer, `PrimerError::TooLong`
/// above `MAX_PRIMER_LENGTH`, or `PrimerError::InvalidCharacter` for the
/// first non-IUPAC character.
pub fn validate_primer(primer: &str) -> Result<String, PrimerError> {
    let primer = primer.trim();
    if primer.is_empty() {
        return Err(PrimerError::Empty);
    }

    let length = primer.chars().count();
    if length > MAX_PRIMER_LENGTH {
        return Err(PrimerError::TooLong(length));
    }

    if let Some((position, character)) = primer
        .chars()
        .enumerate()
        .find(|&(_, c)| !c.is_ascii() || !is_valid_code(c as u8))
    {
        return Err(PrimerError::InvalidCharacter {
            position,
            character,
        });
    }

    Ok(primer.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_result_limit() {
        assert!(check_result_limit(100).is_none());
        assert!(check_result_limit(MAX_RESULTS - 1).is_none());
        assert!(check_result_limit(MAX_RESULTS).is_some());
        assert!(check_result_limit(MAX_RESULTS + 1).is_some());
    }

    #[test]
    fn test_validate_primer() {
        assert_eq!(validate_primer("GGTCACTGCTA").unwrap(), "GGTCACTGCTA");
        assert_eq!(validate_primer("  aaactyaaa ").unwrap(), "AAACTYAAA");
        assert_eq!(validate_primer(""), Err(PrimerError::Empty));
        assert_eq!(validate_primer("   "), Err(PrimerError::Empty));
        assert_eq!(
            validate_primer("ACGXT"),
            Err(PrimerError::InvalidCharacter {
                position: 3,
                character: 'X'
            })
        );
        assert!(validate_primer("ACGÅ").is_err());

        let long = "A".repeat(MAX_PRIMER_LENGTH + 1);
        assert_eq!(
            validate_primer(&long),
            Err(PrimerError::TooLong(MAX_PRIMER_LENGTH + 1))
        );
    }
}

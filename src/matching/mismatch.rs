//! Mismatch recalculation from primer alignments.
//!
//! ipcress counts any IUPAC wobble in a primer as at least one mismatch, even
//! when the observed base satisfies it. Recounting from the aligned sequences
//! gives the number of positions that really disagree.

use thiserror::Error;

use crate::core::alphabet::{is_valid_code, satisfies};
use crate::core::result::IpcressResult;

/// Which primer of the pair an alignment belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Forward,
    Reverse,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Reverse => write!(f, "reverse"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "{side} alignment length mismatch: matching sequence has {sequence_len} bases, primer has {primer_len}"
    )]
    LengthMismatch {
        side: Side,
        sequence_len: usize,
        primer_len: usize,
    },

    #[error("{side} primer has invalid character '{character}' at position {position}")]
    InvalidPrimerCharacter {
        side: Side,
        position: usize,
        character: char,
    },

    #[error("{side} matching sequence has invalid character '{character}' at position {position}")]
    InvalidSequenceCharacter {
        side: Side,
        position: usize,
        character: char,
    },
}

/// Count positions where the observed `sequence` does not satisfy `primer`.
///
/// Both strings must have the same length. A position matches when the bases
/// behind the observed letter are all accepted by the primer code, so an
/// observed `N` only matches a primer `N`.
///
/// # Errors
///
/// Returns `ValidationError::LengthMismatch` for unequal lengths, and
/// `ValidationError::InvalidPrimerCharacter` or
/// `ValidationError::InvalidSequenceCharacter` for characters outside the
/// IUPAC nucleotide alphabet.
pub fn count_mismatches(sequence: &str, primer: &str, side: Side) -> Result<u32, ValidationError> {
    let sequence = sequence.as_bytes();
    let primer = primer.as_bytes();

    if sequence.len() != primer.len() {
        return Err(ValidationError::LengthMismatch {
            side,
            sequence_len: sequence.len(),
            primer_len: primer.len(),
        });
    }

    let mut mismatches = 0;
    for (position, (&observed, &code)) in sequence.iter().zip(primer).enumerate() {
        if !is_valid_code(code) {
            return Err(ValidationError::InvalidPrimerCharacter {
                side,
                position,
                character: char::from(code),
            });
        }

        if !is_valid_code(observed) {
            return Err(ValidationError::InvalidSequenceCharacter {
                side,
                position,
                character: char::from(observed),
            });
        }

        if satisfies(code, observed) != Some(true) {
            mismatches += 1;
        }
    }

    Ok(mismatches)
}

/// Recompute `(forward_mismatches, reverse_mismatches)` for a result from its
/// stored alignments. The result itself is not modified.
///
/// # Errors
///
/// Returns the first `ValidationError` hit on the forward pair, then the
/// reverse pair.
pub fn recalculate_mismatches(result: &IpcressResult) -> Result<(u32, u32), ValidationError> {
    let forward = count_mismatches(
        &result.forward_matching_sequence,
        &result.forward_primer_sequence,
        Side::Forward,
    )?;
    let reverse = count_mismatches(
        &result.reverse_matching_sequence,
        &result.reverse_primer_sequence,
        Side::Reverse,
    )?;
    Ok((forward, reverse))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::result::tests::sample_result;

    #[test]
    fn test_no_ambiguity_no_differences() {
        assert_eq!(
            count_mismatches("ACGTACGT", "ACGTACGT", Side::Forward),
            Ok(0)
        );
    }

    #[test]
    fn test_satisfied_wobbles_are_not_mismatches() {
        let result = sample_result();
        assert_eq!(recalculate_mismatches(&result), Ok((0, 0)));
    }

    #[test]
    fn test_unsatisfied_reverse_base() {
        let mut result = sample_result();
        result.reverse_primer_sequence = "CRTGTGTGGCGGGCT".to_string();
        assert_eq!(recalculate_mismatches(&result), Ok((0, 1)));
    }

    #[test]
    fn test_unsatisfied_forward_wobble() {
        let mut result = sample_result();
        result.forward_primer_sequence = "AAACTRAAAKGAATTGRCGG".to_string();
        assert_eq!(recalculate_mismatches(&result), Ok((1, 0)));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(count_mismatches("acgt", "ACGY", Side::Reverse), Ok(0));
        assert_eq!(count_mismatches("ACGT", "acgr", Side::Reverse), Ok(1));
    }

    #[test]
    fn test_identical_ambiguity_letters_match() {
        assert_eq!(count_mismatches("ANGR", "ANGR", Side::Forward), Ok(0));
        assert_eq!(count_mismatches("angr", "ANGR", Side::Reverse), Ok(0));
    }

    #[test]
    fn test_observed_ambiguity_within_primer_code() {
        assert_eq!(count_mismatches("R", "N", Side::Forward), Ok(0));
        assert_eq!(count_mismatches("RY", "DB", Side::Forward), Ok(0));
        assert_eq!(count_mismatches("N", "R", Side::Forward), Ok(1));
        assert_eq!(count_mismatches("ANGT", "ACGT", Side::Reverse), Ok(1));
    }

    #[test]
    fn test_uracil_and_thymine_are_interchangeable() {
        assert_eq!(count_mismatches("ACGU", "ACGT", Side::Forward), Ok(0));
        assert_eq!(count_mismatches("ACGT", "ACGU", Side::Reverse), Ok(0));
        assert_eq!(count_mismatches("ACGU", "ACGW", Side::Reverse), Ok(0));
        assert_eq!(count_mismatches("ACGU", "ACGS", Side::Forward), Ok(1));
    }

    #[test]
    fn test_length_mismatch() {
        let err = count_mismatches("ACGT", "ACG", Side::Reverse).unwrap_err();
        assert_eq!(
            err,
            ValidationError::LengthMismatch {
                side: Side::Reverse,
                sequence_len: 4,
                primer_len: 3,
            }
        );

        let mut result = sample_result();
        result.forward_matching_sequence.pop();
        assert!(matches!(
            recalculate_mismatches(&result),
            Err(ValidationError::LengthMismatch {
                side: Side::Forward,
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_characters() {
        let err = count_mismatches("ACGT", "ACXT", Side::Forward).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidPrimerCharacter {
                side: Side::Forward,
                position: 2,
                character: 'X',
            }
        );
        assert!(err.to_string().contains("primer"));

        let err = count_mismatches("AC.T", "ACGT", Side::Reverse).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidSequenceCharacter {
                side: Side::Reverse,
                position: 2,
                ..
            }
        ));
    }
}

//! IUPAC nucleotide alphabet and ambiguity ("wobble") codes.
//!
//! Each code maps to the set of bases it accepts:
//!
//! | Code | Bases | Code | Bases |
//! |------|-------|------|-------|
//! | A    | A     | K    | G, T  |
//! | C    | C     | M    | A, C  |
//! | G    | G     | B    | C, G, T |
//! | T/U  | T     | D    | A, G, T |
//! | R    | A, G  | H    | A, C, T |
//! | Y    | C, T  | V    | A, C, G |
//! | S    | C, G  | N    | A, C, G, T |
//! | W    | A, T  |      |       |
//!
//! Lookups are case-insensitive. `U` is treated as `T`.

const BASE_A: u8 = 1;
const BASE_C: u8 = 2;
const BASE_G: u8 = 4;
const BASE_T: u8 = 8;

/// A set of concrete nucleotides, stored as a bitmask over A, C, G and T
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BaseSet(u8);

impl BaseSet {
    pub const A: Self = Self(BASE_A);
    pub const C: Self = Self(BASE_C);
    pub const G: Self = Self(BASE_G);
    pub const T: Self = Self(BASE_T);
    pub const ANY: Self = Self(BASE_A | BASE_C | BASE_G | BASE_T);

    /// Whether every base in `other` is also in this set
    #[must_use]
    pub fn covers(self, other: Self) -> bool {
        other.0 & !self.0 == 0
    }

    /// Number of bases accepted by this set
    #[must_use]
    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True for codes that accept more than one base
    #[must_use]
    pub fn is_ambiguous(self) -> bool {
        self.len() > 1
    }
}

impl std::ops::BitOr for BaseSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Look up the bases accepted by an IUPAC code. Returns `None` for characters
/// outside the nucleotide alphabet.
#[must_use]
pub fn ambiguity_set(code: u8) -> Option<BaseSet> {
    use BaseSet as B;

    let set = match code.to_ascii_uppercase() {
        b'A' => B::A,
        b'C' => B::C,
        b'G' => B::G,
        b'T' | b'U' => B::T,
        b'R' => B::A | B::G,
        b'Y' => B::C | B::T,
        b'S' => B::C | B::G,
        b'W' => B::A | B::T,
        b'K' => B::G | B::T,
        b'M' => B::A | B::C,
        b'B' => B::C | B::G | B::T,
        b'D' => B::A | B::G | B::T,
        b'H' => B::A | B::C | B::T,
        b'V' => B::A | B::C | B::G,
        b'N' => B::ANY,
        _ => return None,
    };
    Some(set)
}

/// Whether `code` is a recognized nucleotide or ambiguity letter
#[must_use]
pub fn is_valid_code(code: u8) -> bool {
    ambiguity_set(code).is_some()
}

/// Does the observed `base` satisfy the (possibly ambiguous) `code`?
///
/// Returns `None` when `code` is not part of the alphabet. An observed
/// ambiguity letter satisfies a code only if every base it stands for is
/// accepted by the code: `R` satisfies `R`, `D` and `N`, but not `A`.
/// Observed characters outside the alphabet never satisfy a code.
#[must_use]
pub fn satisfies(code: u8, base: u8) -> Option<bool> {
    let accepted = ambiguity_set(code)?;
    Some(ambiguity_set(base).is_some_and(|observed| accepted.covers(observed)))
}

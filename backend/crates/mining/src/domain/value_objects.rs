//! Domain Value Objects
//!
//! Immutable value types for the mining domain.

use std::fmt;

/// Number of leading `'0'` hex characters a record hash must carry.
///
/// Zero accepts any hash. Anything above [`Difficulty::MAX_SATISFIABLE`] is
/// representable but can never be met, so every search under it runs into
/// the deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Difficulty(usize);

impl Difficulty {
    pub const DEFAULT: Difficulty = Difficulty(4);
    /// Length of a hex encoded SHA-256 digest
    pub const MAX_SATISFIABLE: usize = 64;

    pub const fn new(leading_zeros: usize) -> Self {
        Self(leading_zeros)
    }

    pub const fn is_satisfiable(&self) -> bool {
        self.0 <= Self::MAX_SATISFIABLE
    }

    /// Lexicographic check on the hex string, not a numeric comparison.
    pub fn is_met_by(&self, hash: &str) -> bool {
        hash.as_bytes()
            .get(..self.0)
            .is_some_and(|prefix| prefix.iter().all(|&c| c == b'0'))
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

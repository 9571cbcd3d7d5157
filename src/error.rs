//! Error type shared by every enumerator.

use num_bigint::BigUint;
use thiserror::Error;

/// Invalid arguments passed to a rank, unrank or successor function.
///
/// Running out of objects is not an error: successor functions report it as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A universe size (`n` or `m`) was zero.
    #[error("universe must not be empty")]
    EmptyUniverse,

    /// A size parameter does not fit inside the universe (`k > n`, `k == 0`, or `n > m`).
    #[error("size {size} is not in 1..={limit}")]
    SizeExceedsUniverse {
        /// The offending size
        size: usize,
        /// The largest size allowed
        limit: usize,
    },

    /// A rank was not smaller than the number of objects in the domain.
    #[error("rank {rank} out of range for a domain of {count} objects")]
    RankOutOfRange {
        /// The rank that was passed
        rank: BigUint,
        /// Size of the domain
        count: BigUint,
    },

    /// An element of a subset or permutation lies outside `1..=n`.
    #[error("element {element} is not in 1..={n}")]
    ElementOutOfRange {
        /// The offending element
        element: usize,
        /// Size of the ground set
        n: usize,
    },

    /// A sequence had the wrong number of entries.
    #[error("expected {expected} entries, found {found}")]
    WrongLength {
        /// Required length
        expected: usize,
        /// Actual length
        found: usize,
    },

    /// A k-subset was not strictly increasing.
    #[error("sequence is not strictly increasing at index {index}")]
    NotIncreasing {
        /// First index whose value is not larger than its predecessor
        index: usize,
    },

    /// A sequence is not a bijection onto `1..=n`.
    #[error("not a permutation of 1..={n}")]
    NotAPermutation {
        /// Length of the sequence
        n: usize,
    },

    /// A partition violated one of its invariants.
    #[error("malformed partition: {0}")]
    MalformedPartition(&'static str),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn check_rank(rank: &BigUint, count: BigUint) -> Result<()> {
    if *rank < count {
        Ok(())
    } else {
        Err(Error::RankOutOfRange { rank: rank.clone(), count })
    }
}

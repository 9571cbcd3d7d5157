#![deny(missing_docs)]

//! The **combinatorial-ranking** crate provides rank, unrank and successor
//! functions for four families of combinatorial objects, each under one or more
//! fixed total orders:
//!
//! - subsets of `{1..n}`: binary (lexicographic) and Gray code order, in `subset`
//! - k-element subsets of `{1..n}`: lexicographic, colexicographic and
//!   revolving-door order, in `ksubset`
//! - permutations of `{1..n}`: lexicographic and Trotter-Johnson order, plus
//!   parity and Heap's algorithm, in `permutation`
//! - integer partitions: generation, conjugation, counting and lexicographic
//!   order over partitions into exactly `n` parts, in `partition`
//!
//! Ranks are 0-based positions and are represented as `BigUint`, so every result is exact.
//! Ranking uses the combinatorial number system (binomial coefficients, factorials
//! and the partition-count table) rather than enumeration.
//!
//! See D. L. Kreher and D. R. Stinson, *Combinatorial Algorithms: Generation,
//! Enumeration and Search*, chapters 2 and 3, for a description of the algorithms used here.
//!
//! # How to use
//!
//! Each module exposes free functions such as `ksubset::lex_rank`, which take the
//! universe parameters explicitly and never mutate their input.
//! Successor functions return `Ok(None)` once the last object of the order is reached.
//!
//! Alternatively, construct one of the order types (`KSubsetLex`, `TrotterJohnson`, ...)
//! and use the `Ranking` trait; `Ranking::iter` walks the whole domain in order.
//!
//! ```
//! use combinatorial_ranking::{Ranking, KSubsetRevolvingDoor};
//!
//! let order = KSubsetRevolvingDoor::new(5, 3).unwrap();
//! let all: Vec<Vec<usize>> = order.iter().collect();
//! assert_eq!(all.len(), 10);
//! assert_eq!(all[0], vec![1, 2, 3]);
//! assert_eq!(all[1], vec![1, 3, 4]);
//! ```

pub use num_bigint::BigUint;
use num_traits::Zero;

pub use crate::error::{Error, Result};
pub use crate::ksubset::{KSubsetColex, KSubsetLex, KSubsetRevolvingDoor};
pub use crate::partition::PartitionLex;
pub use crate::permutation::{HeapPermutations, PermutationLex, TrotterJohnson};
pub use crate::subset::{SubsetGray, SubsetLex};

// every order is checked against the same set of properties
#[cfg(test)]
macro_rules! ranking_tests {
    ($name:ident, $order:expr) => {
        mod $name {
            #[allow(unused_imports)]
            use super::*;
            use crate::Ranking;
            use num_bigint::BigUint;

            #[test]
            fn successors_follow_ranks() {
                let order = $order;
                let mut r = BigUint::from(0u32);
                let mut last = None;
                for item in order.iter() {
                    assert_eq!(order.rank(&item).unwrap(), r);
                    assert_eq!(order.unrank(&r).unwrap(), item);
                    r += 1u32;
                    last = Some(item);
                }
                assert_eq!(r, order.count());
                assert_eq!(order.successor(&last.unwrap()).unwrap(), None);
            }

            #[test]
            fn first_has_rank_zero() {
                let order = $order;
                let first = order.first().unwrap();
                assert_eq!(order.rank(&first).unwrap(), BigUint::from(0u32));
            }

            #[test]
            fn rank_out_of_range() {
                let order = $order;
                let count = order.count();
                assert!(matches!(order.unrank(&count), Err(crate::Error::RankOutOfRange { .. })));
            }
        }
    }
}

pub mod arith;
pub mod error;
pub mod ksubset;
pub mod partition;
pub mod permutation;
pub mod subset;

/// A total order over a finite domain of combinatorial objects.
///
/// Implemented by the order types of each module, which carry the universe
/// parameters and delegate to the module's free functions.
pub trait Ranking
{
    /// The objects being ordered
    type Item: Clone;

    /// Number of objects in the domain
    fn count(&self) -> BigUint;

    /// Position of `item` in the order, in `[0, count)`
    fn rank(&self, item: &Self::Item) -> Result<BigUint>;

    /// The object at position `rank`
    fn unrank(&self, rank: &BigUint) -> Result<Self::Item>;

    /// The next object in the order, or `None` if `item` is the last one
    fn successor(&self, item: &Self::Item) -> Result<Option<Self::Item>>;

    /// The object of rank zero
    fn first(&self) -> Result<Self::Item> {
        self.unrank(&BigUint::zero())
    }

    /// Iterate over the whole domain in order, starting at `first`.
    fn iter(&self) -> Successors<'_, Self>
        where Self: Sized
    {
        Successors {order: self, next: self.first().ok()}
    }
}

/// Iterator returned by `Ranking::iter`, which repeatedly applies `Ranking::successor`.
#[derive(Clone)]
pub struct Successors<'a, R: Ranking>
{
    order: &'a R,
    next: Option<R::Item>
}

impl<'a, R: Ranking> Iterator for Successors<'a, R>
{
    type Item = R::Item;

    fn next(&mut self) -> Option<R::Item> {
        let item = self.next.take()?;
        // items come from the order itself, so successor cannot fail here
        self.next = self.order.successor(&item).unwrap_or(None);
        Some(item)
    }
}

//! Subsets of `{1..n}` in binary (lexicographic) and Gray code order.
//!
//! Subsets are `BTreeSet<usize>`s. In binary order the rank of `S` is the
//! characteristic bit vector of `S` read with element 1 as the most
//! significant bit; in Gray code order consecutive subsets differ by exactly one element.

use std::collections::BTreeSet;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::arith::power_of_two;
use crate::error::{check_rank, Error, Result};
use crate::Ranking;

fn check_universe(n: usize) -> Result<()>
{
    if n == 0 {
        Err(Error::EmptyUniverse)
    } else {
        Ok(())
    }
}

fn check_subset(n: usize, s: &BTreeSet<usize>) -> Result<()>
{
    check_universe(n)?;
    match s.iter().find(|&&x| x == 0 || x > n) {
        Some(&element) => Err(Error::ElementOutOfRange {element, n}),
        None => Ok(())
    }
}

/// Number of subsets of `{1..n}`
pub fn count(n: usize) -> BigUint
{
    power_of_two(n)
}

/// Rank of `s` in binary order: the sum of `2^(n - i)` over `i` in `s`.
pub fn lex_rank(n: usize, s: &BTreeSet<usize>) -> Result<BigUint>
{
    check_subset(n, s)?;
    let mut r = BigUint::zero();
    for &i in s {
        r.set_bit((n - i) as u64, true);
    }
    Ok(r)
}

/// Subset of rank `r` in binary order.
pub fn lex_unrank(n: usize, r: &BigUint) -> Result<BTreeSet<usize>>
{
    check_universe(n)?;
    check_rank(r, count(n))?;
    Ok((1..=n).filter(|&i| r.bit((n - i) as u64)).collect())
}

/// Next subset in binary order, or `None` for `{1..n}`.
pub fn lex_successor(n: usize, s: &BTreeSet<usize>) -> Result<Option<BTreeSet<usize>>>
{
    check_subset(n, s)?;
    // binary increment: clear the trailing run of members, then add the element before it
    let mut next = s.clone();
    let mut i = n;
    while i >= 1 && next.remove(&i) {
        i -= 1;
    }
    if i == 0 {
        return Ok(None);
    }
    next.insert(i);
    Ok(Some(next))
}

/// Next subset in Gray code order, or `None` for `{1}`, the last one.
///
/// If `|s|` is even, `n` is toggled; otherwise the element just below `max(s)` is toggled.
pub fn gray_successor(n: usize, s: &BTreeSet<usize>) -> Result<Option<BTreeSet<usize>>>
{
    check_subset(n, s)?;
    let toggled = if s.len() % 2 == 0 {
        n
    } else {
        match s.last() {
            Some(&1) | None => return Ok(None),
            Some(&j) => j - 1
        }
    };

    let mut next = s.clone();
    if !next.remove(&toggled) {
        next.insert(toggled);
    }
    Ok(Some(next))
}

/// Rank of `s` in Gray code order.
pub fn gray_rank(n: usize, s: &BTreeSet<usize>) -> Result<BigUint>
{
    check_subset(n, s)?;
    let mut r = BigUint::zero();
    let mut b = false;
    for i in (0..n).rev() {
        if s.contains(&(n - i)) {
            b = !b;
        }
        if b {
            r.set_bit(i as u64, true);
        }
    }
    Ok(r)
}

/// Subset of rank `r` in Gray code order.
pub fn gray_unrank(n: usize, r: &BigUint) -> Result<BTreeSet<usize>>
{
    check_universe(n)?;
    check_rank(r, count(n))?;
    let mut s = BTreeSet::new();
    let mut prev = false;
    for i in (0..n).rev() {
        let b = r.bit(i as u64);
        if b != prev {
            s.insert(n - i);
        }
        prev = b;
    }
    Ok(s)
}

/// Subsets of `{1..n}` in binary order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubsetLex
{
    n: usize
}

impl SubsetLex
{
    /// Binary order over the subsets of `{1..n}`; `n` must be positive.
    pub fn new(n: usize) -> Result<Self> {
        check_universe(n)?;
        Ok(SubsetLex {n})
    }
}

impl Ranking for SubsetLex
{
    type Item = BTreeSet<usize>;

    fn count(&self) -> BigUint {
        count(self.n)
    }

    fn rank(&self, s: &BTreeSet<usize>) -> Result<BigUint> {
        lex_rank(self.n, s)
    }

    fn unrank(&self, r: &BigUint) -> Result<BTreeSet<usize>> {
        lex_unrank(self.n, r)
    }

    fn successor(&self, s: &BTreeSet<usize>) -> Result<Option<BTreeSet<usize>>> {
        lex_successor(self.n, s)
    }
}

/// Subsets of `{1..n}` in Gray code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubsetGray
{
    n: usize
}

impl SubsetGray
{
    /// Gray code order over the subsets of `{1..n}`; `n` must be positive.
    pub fn new(n: usize) -> Result<Self> {
        check_universe(n)?;
        Ok(SubsetGray {n})
    }
}

impl Ranking for SubsetGray
{
    type Item = BTreeSet<usize>;

    fn count(&self) -> BigUint {
        count(self.n)
    }

    fn rank(&self, s: &BTreeSet<usize>) -> Result<BigUint> {
        gray_rank(self.n, s)
    }

    fn unrank(&self, r: &BigUint) -> Result<BTreeSet<usize>> {
        gray_unrank(self.n, r)
    }

    fn successor(&self, s: &BTreeSet<usize>) -> Result<Option<BTreeSet<usize>>> {
        gray_successor(self.n, s)
    }
}

//! Permutations of `{1..n}` in lexicographic and Trotter-Johnson order.
//!
//! A permutation is a sequence of length `n` containing each of `1..=n` once.
//! The Trotter-Johnson order is a minimal-change order: consecutive
//! permutations differ by one transposition of adjacent positions.
//!
//! `HeapPermutations` lists all permutations with one transposition per step,
//! but in an order that has no rank function.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::arith::{digit, factorial, falling_factorial};
use crate::error::{check_rank, Error, Result};
use crate::Ranking;

fn check_size(n: usize) -> Result<()>
{
    if n == 0 {
        Err(Error::EmptyUniverse)
    } else {
        Ok(())
    }
}

fn check_permutation(p: &[usize]) -> Result<()>
{
    let n = p.len();
    check_size(n)?;
    let mut seen = vec![false; n];
    for &x in p {
        if x == 0 || x > n || seen[x - 1] {
            return Err(Error::NotAPermutation {n});
        }
        seen[x - 1] = true;
    }
    Ok(())
}

/// Number of permutations of `{1..n}`
pub fn count(n: usize) -> BigUint
{
    factorial(n)
}

/// Next permutation in lexicographic order, or `None` for `[n, .., 1]`.
pub fn lex_successor(p: &[usize]) -> Result<Option<Vec<usize>>>
{
    check_permutation(p)?;
    let n = p.len();

    // pivot: last position followed by a larger value
    let i = match (0..n - 1).rev().find(|&i| p[i] < p[i + 1]) {
        Some(i) => i,
        None => return Ok(None)
    };
    let mut u = p.to_vec();
    let mut j = n - 1;
    while u[j] < u[i] {
        j -= 1;
    }
    u.swap(i, j);
    u[i + 1..].reverse();
    Ok(Some(u))
}

/// Rank of `p` in lexicographic order.
pub fn lex_rank(p: &[usize]) -> Result<BigUint>
{
    check_permutation(p)?;
    let n = p.len();
    let mut u = p.to_vec();
    let mut r = BigUint::zero();
    for j in 0..n {
        r += factorial(n - j - 1) * (u[j] - 1);
        // relabel the remaining values onto 1..=n-j-1
        for i in (j + 1)..n {
            if u[i] > u[j] {
                u[i] -= 1;
            }
        }
    }
    Ok(r)
}

/// Permutation of rank `r` in lexicographic order.
pub fn lex_unrank(n: usize, r: &BigUint) -> Result<Vec<usize>>
{
    check_size(n)?;
    check_rank(r, count(n))?;

    let mut r = r.clone();
    let mut p = vec![0; n];
    p[n - 1] = 1;
    for j in 1..n {
        // factorial base digit of weight j!
        let d = digit(&(&r % (j + 1)));
        r /= j + 1;
        p[n - j - 1] = d + 1;
        for x in &mut p[n - j..] {
            if *x > d {
                *x += 1;
            }
        }
    }
    Ok(p)
}

/// Rank of `p` in Trotter-Johnson order.
pub fn trotter_johnson_rank(p: &[usize]) -> Result<BigUint>
{
    check_permutation(p)?;
    let n = p.len();
    let mut r = BigUint::zero();
    for j in 2..=n {
        // 1-based position of j among the values 1..=j
        let k = 1 + p.iter().take_while(|&&x| x != j).filter(|&&x| x < j).count();
        r = if r.bit(0) {
            r * j + (k - 1)
        } else {
            r * j + (j - k)
        };
    }
    Ok(r)
}

/// Permutation of rank `r` in Trotter-Johnson order.
pub fn trotter_johnson_unrank(n: usize, r: &BigUint) -> Result<Vec<usize>>
{
    check_size(n)?;
    check_rank(r, count(n))?;

    let mut p = Vec::with_capacity(n);
    p.push(1);
    let mut r2 = BigUint::zero();
    for j in 2..=n {
        // rank of the restriction of the result to 1..=j
        let r1 = r / falling_factorial(n, j);
        let k = digit(&(&r1 - &r2 * j));
        let at = if r2.bit(0) { k } else { j - k - 1 };
        p.insert(at, j);
        r2 = r1;
    }
    Ok(p)
}

/// Parity of `p`: 0 for an even permutation, 1 for an odd one.
///
/// Computed as `(n - c) mod 2`, where `c` is the number of cycles.
pub fn parity(p: &[usize]) -> Result<usize>
{
    check_permutation(p)?;
    Ok(cycle_parity(p))
}

fn cycle_parity(p: &[usize]) -> usize
{
    let n = p.len();
    let mut visited = vec![false; n];
    let mut cycles = 0;
    for j in 0..n {
        if !visited[j] {
            cycles += 1;
            let mut i = j;
            while !visited[i] {
                visited[i] = true;
                i = p[i] - 1;
            }
        }
    }
    (n - cycles) % 2
}

/// Next permutation in Trotter-Johnson order, or `None` for `[2, 1, 3, .., n]`.
///
/// The successor differs from `p` by one adjacent transposition.
pub fn trotter_johnson_successor(p: &[usize]) -> Result<Option<Vec<usize>>>
{
    check_permutation(p)?;
    let mut work = p.to_vec();
    let mut next = p.to_vec();

    // window next[start..start + m] holds the values 1..=m
    let mut start = 0;
    let mut m = p.len();
    while m > 1 {
        let d = match work.iter().position(|&x| x == m) {
            Some(d) => d,
            None => return Err(Error::NotAPermutation {n: p.len()})
        };
        work.remove(d);

        // m sweeps right to left over an even remainder, left to right over an odd one
        if cycle_parity(&work) == 1 {
            if d == m - 1 {
                m -= 1;
            } else {
                next.swap(start + d, start + d + 1);
                return Ok(Some(next));
            }
        } else if d == 0 {
            m -= 1;
            start += 1;
        } else {
            next.swap(start + d, start + d - 1);
            return Ok(Some(next));
        }
    }
    Ok(None)
}

/// All permutations of `{1..n}` by Heap's algorithm.
///
/// Each permutation differs from the previous one by a single transposition.
/// Starts at the identity and yields `n!` permutations.
#[derive(Debug, Clone)]
pub struct HeapPermutations
{
    a: Vec<usize>,
    c: Vec<usize>,
    i: usize,
    started: bool
}

impl HeapPermutations
{
    /// Generator over the permutations of `{1..n}`; `n` must be positive.
    pub fn new(n: usize) -> Result<Self> {
        check_size(n)?;
        Ok(HeapPermutations {a: (1..=n).collect(), c: vec![0; n], i: 1, started: false})
    }

    /// Size of the permutations being generated
    pub fn size(&self) -> usize {
        self.a.len()
    }
}

impl Iterator for HeapPermutations
{
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if !self.started {
            self.started = true;
            return Some(self.a.clone());
        }

        let n = self.a.len();
        while self.i < n {
            let i = self.i;
            if self.c[i] < i {
                // a sub-array of odd length i + 1 always swaps its first element
                if i % 2 == 0 {
                    self.a.swap(0, i);
                } else {
                    self.a.swap(self.c[i], i);
                }
                self.c[i] += 1;
                self.i = 1;
                return Some(self.a.clone());
            }
            self.c[i] = 0;
            self.i += 1;
        }
        None
    }
}

/// Permutations of `{1..n}` in lexicographic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PermutationLex
{
    n: usize
}

/// Permutations of `{1..n}` in Trotter-Johnson order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrotterJohnson
{
    n: usize
}

macro_rules! permutation_order {
    ($name:ident, $rank:ident, $unrank:ident, $successor:ident) => {
        impl $name
        {
            /// Order over the permutations of `{1..n}`; `n` must be positive.
            pub fn new(n: usize) -> Result<Self> {
                check_size(n)?;
                Ok($name {n})
            }

            fn check_len(&self, p: &[usize]) -> Result<()> {
                if p.len() == self.n {
                    Ok(())
                } else {
                    Err(Error::WrongLength {expected: self.n, found: p.len()})
                }
            }
        }

        impl Ranking for $name
        {
            type Item = Vec<usize>;

            fn count(&self) -> BigUint {
                count(self.n)
            }

            fn rank(&self, p: &Vec<usize>) -> Result<BigUint> {
                self.check_len(p)?;
                $rank(p)
            }

            fn unrank(&self, r: &BigUint) -> Result<Vec<usize>> {
                $unrank(self.n, r)
            }

            fn successor(&self, p: &Vec<usize>) -> Result<Option<Vec<usize>>> {
                self.check_len(p)?;
                $successor(p)
            }
        }
    }
}

permutation_order!(PermutationLex, lex_rank, lex_unrank, lex_successor);
permutation_order!(TrotterJohnson, trotter_johnson_rank, trotter_johnson_unrank, trotter_johnson_successor);

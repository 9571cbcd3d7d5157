//! k-element subsets of `{1..n}` in lexicographic, colexicographic and
//! revolving-door order.
//!
//! A k-subset is always given and returned as a strictly increasing sequence
//! of `k` values in `1..=n`.
//!
//! The revolving-door order is a minimal-change order: consecutive subsets differ
//! by removing one element and adding another. It starts at `[1, 2, .., k]` and
//! ends at `[1, 2, .., k - 1, n]`.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::arith::binomial;
use crate::error::{check_rank, Error, Result};
use crate::Ranking;

fn check_params(n: usize, k: usize) -> Result<()>
{
    if n == 0 {
        return Err(Error::EmptyUniverse);
    }
    if k == 0 || k > n {
        return Err(Error::SizeExceedsUniverse {size: k, limit: n});
    }
    Ok(())
}

fn check_subset(t: &[usize], n: usize) -> Result<()>
{
    check_params(n, t.len())?;
    if let Some(&element) = t.iter().find(|&&x| x == 0 || x > n) {
        return Err(Error::ElementOutOfRange {element, n});
    }
    match t.windows(2).position(|w| w[0] >= w[1]) {
        Some(i) => Err(Error::NotIncreasing {index: i + 1}),
        None => Ok(())
    }
}

/// Number of k-subsets of `{1..n}`
pub fn count(n: usize, k: usize) -> BigUint
{
    binomial(n, k)
}

/// Next k-subset in lexicographic order, or `None` for `[n - k + 1, .., n]`.
pub fn lex_successor(t: &[usize], n: usize) -> Result<Option<Vec<usize>>>
{
    check_subset(t, n)?;
    let k = t.len();

    // the 1-based position i holds its largest possible value n - k + i
    let mut i = k;
    while i >= 1 && t[i - 1] == n - k + i {
        i -= 1;
    }
    if i == 0 {
        return Ok(None);
    }

    let mut u = t.to_vec();
    u[i - 1] += 1;
    for j in i..k {
        u[j] = u[j - 1] + 1;
    }
    Ok(Some(u))
}

/// Rank of `t` in lexicographic order.
pub fn lex_rank(t: &[usize], n: usize) -> Result<BigUint>
{
    check_subset(t, n)?;
    let k = t.len();
    let mut r = BigUint::zero();
    let mut prev = 0;
    for (i, &x) in (1..=k).zip(t) {
        // every value skipped at position i starts a block of C(n - j, k - i) subsets
        for j in (prev + 1)..x {
            r += binomial(n - j, k - i);
        }
        prev = x;
    }
    Ok(r)
}

/// k-subset of rank `r` in lexicographic order.
pub fn lex_unrank(r: &BigUint, k: usize, n: usize) -> Result<Vec<usize>>
{
    check_params(n, k)?;
    check_rank(r, count(n, k))?;

    let mut r = r.clone();
    let mut t = Vec::with_capacity(k);
    let mut x = 1;
    for i in 1..=k {
        loop {
            let c = binomial(n - x, k - i);
            if c > r {
                break;
            }
            r -= c;
            x += 1;
        }
        t.push(x);
        x += 1;
    }
    Ok(t)
}

/// Next k-subset in colexicographic order, or `None` for `[n - k + 1, .., n]`.
///
/// Colex order compares the largest elements first.
pub fn colex_successor(t: &[usize], n: usize) -> Result<Option<Vec<usize>>>
{
    check_subset(t, n)?;
    let k = t.len();

    // lowest position that can grow without reaching its right neighbour (or n + 1)
    let i = match (0..k).find(|&i| t[i] + 1 < t.get(i + 1).map_or(n + 1, |&y| y)) {
        Some(i) => i,
        None => return Ok(None)
    };

    let mut u = t.to_vec();
    u[i] += 1;
    for (j, v) in u[..i].iter_mut().enumerate() {
        *v = j + 1;
    }
    Ok(Some(u))
}

/// Rank of `t` in colexicographic order: the sum of `C(t_i - 1, i)` over 1-based positions `i`.
pub fn colex_rank(t: &[usize], n: usize) -> Result<BigUint>
{
    check_subset(t, n)?;
    Ok((1..=t.len()).zip(t).map(|(i, &x)| binomial(x - 1, i)).sum())
}

/// k-subset of rank `r` in colexicographic order.
pub fn colex_unrank(r: &BigUint, k: usize, n: usize) -> Result<Vec<usize>>
{
    check_params(n, k)?;
    check_rank(r, count(n, k))?;

    let mut r = r.clone();
    let mut t = vec![0; k];
    let mut x = n;
    for i in (1..=k).rev() {
        // largest x with C(x, i) <= r; C(i - 1, i) == 0 stops the search
        let mut c = binomial(x, i);
        while c > r {
            x -= 1;
            c = binomial(x, i);
        }
        t[i - 1] = x + 1;
        r -= c;
    }
    Ok(t)
}

/// Rank of `t` in revolving-door order.
///
/// This is the alternating sum `C(t_k, k) - C(t_(k-1), k - 1) + ...`, minus one
/// when `k` is odd.
pub fn rev_door_rank(t: &[usize], n: usize) -> Result<BigUint>
{
    check_subset(t, n)?;
    let k = t.len();
    let mut plus = BigUint::zero();
    let mut minus = BigUint::from(k % 2);
    for i in (1..=k).rev() {
        let c = binomial(t[i - 1], i);
        if (k - i) % 2 == 0 {
            plus += c;
        } else {
            minus += c;
        }
    }
    Ok(plus - minus)
}

/// k-subset of rank `r` in revolving-door order.
pub fn rev_door_unrank(r: &BigUint, k: usize, n: usize) -> Result<Vec<usize>>
{
    check_params(n, k)?;
    check_rank(r, count(n, k))?;

    let mut r = r.clone();
    let mut t = vec![0; k];
    let mut x = n;
    for i in (1..=k).rev() {
        while binomial(x, i) > r {
            x -= 1;
        }
        t[i - 1] = x + 1;
        // C(x, i) <= r < C(x + 1, i), so this stays non-negative
        r = binomial(x + 1, i) - r - 1u32;
    }
    Ok(t)
}

/// Next k-subset in revolving-door order, or `None` for `[1, .., k - 1, n]`.
///
/// Exactly one element is swapped out for another at every step.
pub fn rev_door_successor(t: &[usize], n: usize) -> Result<Option<Vec<usize>>>
{
    check_subset(t, n)?;
    let k = t.len();
    if t[k - 1] == n && t[..k - 1].iter().enumerate().all(|(i, &x)| x == i + 1) {
        return Ok(None);
    }

    // 1-based working copy; w[0] absorbs writes to position zero, w[k + 1] is the n + 1 sentinel
    let mut w = Vec::with_capacity(k + 2);
    w.push(0);
    w.extend_from_slice(t);
    w.push(n + 1);

    let mut j = 1;
    while j <= k && w[j] == j {
        j += 1;
    }

    if (k + j) % 2 == 1 {
        if j == 1 {
            w[1] -= 1;
        } else {
            w[j - 1] = j;
            w[j - 2] = j - 1;
        }
    } else if w[j + 1] != w[j] + 1 {
        w[j - 1] = w[j];
        w[j] += 1;
    } else {
        w[j + 1] = w[j];
        w[j] = j;
    }

    Ok(Some(w[1..=k].to_vec()))
}

macro_rules! ksubset_order {
    ($(#[$doc:meta])* $name:ident, $rank:ident, $unrank:ident, $successor:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name
        {
            n: usize,
            k: usize
        }

        impl $name
        {
            /// Order over the k-subsets of `{1..n}`; requires `1 <= k <= n`.
            pub fn new(n: usize, k: usize) -> Result<Self> {
                check_params(n, k)?;
                Ok($name {n, k})
            }
        }

        impl Ranking for $name
        {
            type Item = Vec<usize>;

            fn count(&self) -> BigUint {
                count(self.n, self.k)
            }

            fn rank(&self, t: &Vec<usize>) -> Result<BigUint> {
                if t.len() != self.k {
                    return Err(Error::WrongLength {expected: self.k, found: t.len()});
                }
                $rank(t, self.n)
            }

            fn unrank(&self, r: &BigUint) -> Result<Vec<usize>> {
                $unrank(r, self.k, self.n)
            }

            fn successor(&self, t: &Vec<usize>) -> Result<Option<Vec<usize>>> {
                if t.len() != self.k {
                    return Err(Error::WrongLength {expected: self.k, found: t.len()});
                }
                $successor(t, self.n)
            }
        }
    }
}

ksubset_order!(
    /// k-subsets of `{1..n}` in lexicographic order.
    KSubsetLex, lex_rank, lex_unrank, lex_successor);
ksubset_order!(
    /// k-subsets of `{1..n}` in colexicographic order.
    KSubsetColex, colex_rank, colex_unrank, colex_successor);
ksubset_order!(
    /// k-subsets of `{1..n}` in revolving-door order.
    KSubsetRevolvingDoor, rev_door_rank, rev_door_unrank, rev_door_successor);

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    ranking_tests!(lex_5_3, KSubsetLex::new(5, 3).unwrap());
    ranking_tests!(lex_7_1, KSubsetLex::new(7, 1).unwrap());
    ranking_tests!(lex_6_6, KSubsetLex::new(6, 6).unwrap());
    ranking_tests!(colex_5_3, KSubsetColex::new(5, 3).unwrap());
    ranking_tests!(colex_8_4, KSubsetColex::new(8, 4).unwrap());
    ranking_tests!(colex_4_4, KSubsetColex::new(4, 4).unwrap());
    ranking_tests!(rev_door_5_3, KSubsetRevolvingDoor::new(5, 3).unwrap());
    ranking_tests!(rev_door_8_4, KSubsetRevolvingDoor::new(8, 4).unwrap());
    ranking_tests!(rev_door_6_1, KSubsetRevolvingDoor::new(6, 1).unwrap());
    ranking_tests!(rev_door_5_5, KSubsetRevolvingDoor::new(5, 5).unwrap());

    fn rank(x: u32) -> BigUint {
        BigUint::from(x)
    }

    #[test]
    fn lex_examples() {
        assert_eq!(lex_successor(&[2, 3, 4], 5).unwrap(), Some(vec![2, 3, 5]));
        assert_eq!(lex_successor(&[1, 4, 5], 5).unwrap(), Some(vec![2, 3, 4]));
        assert_eq!(lex_successor(&[3, 4, 5], 5).unwrap(), None);
        assert_eq!(lex_rank(&[2, 3, 4], 5).unwrap(), rank(6));
        assert_eq!(lex_unrank(&rank(5), 3, 5).unwrap(), vec![1, 4, 5]);
    }

    #[test]
    fn lex_matches_brute_force() {
        for n in 1..=8 {
            for k in 1..=n {
                let order = KSubsetLex::new(n, k).unwrap();
                let walked: Vec<_> = order.iter().collect();
                let expected: Vec<_> = (1..=n).combinations(k).collect();
                assert_eq!(walked, expected);
            }
        }
    }

    #[test]
    fn colex_examples() {
        // [1, 2, 5] is the decreasing-form [5, 2, 1]
        assert_eq!(colex_rank(&[1, 2, 5], 5).unwrap(), rank(4));
        assert_eq!(colex_unrank(&rank(4), 3, 5).unwrap(), vec![1, 2, 5]);
        assert_eq!(colex_successor(&[1, 2, 5], 5).unwrap(), Some(vec![1, 3, 5]));
        assert_eq!(colex_successor(&[2, 3, 4], 5).unwrap(), Some(vec![1, 2, 5]));
        assert_eq!(colex_successor(&[3, 4, 5], 5).unwrap(), None);
    }

    #[test]
    fn colex_matches_brute_force() {
        for n in 1..=8 {
            for k in 1..=n {
                let order = KSubsetColex::new(n, k).unwrap();
                let walked: Vec<_> = order.iter().collect();
                let mut expected: Vec<Vec<usize>> = (1..=n).combinations(k).collect();
                expected.sort_by(|a, b| a.iter().rev().cmp(b.iter().rev()));
                assert_eq!(walked, expected);
            }
        }
    }

    #[test]
    fn rev_door_examples() {
        let order = KSubsetRevolvingDoor::new(5, 3).unwrap();
        let walked: Vec<_> = order.iter().collect();
        assert_eq!(walked, vec![
            vec![1, 2, 3], vec![1, 3, 4], vec![2, 3, 4], vec![1, 2, 4], vec![1, 4, 5],
            vec![2, 4, 5], vec![3, 4, 5], vec![1, 3, 5], vec![2, 3, 5], vec![1, 2, 5],
        ]);
        assert_eq!(rev_door_rank(&[1, 4, 5], 5).unwrap(), rank(4));
        assert_eq!(rev_door_unrank(&rank(4), 3, 5).unwrap(), vec![1, 4, 5]);
        assert_eq!(rev_door_successor(&[1, 4, 5], 5).unwrap(), Some(vec![2, 4, 5]));
        assert_eq!(rev_door_successor(&[1, 2, 5], 5).unwrap(), None);
    }

    #[test]
    fn rev_door_is_minimal_change() {
        for n in 1..=9 {
            for k in 1..=n {
                let order = KSubsetRevolvingDoor::new(n, k).unwrap();
                let walked: Vec<_> = order.iter().collect();
                assert_eq!(BigUint::from(walked.len()), count(n, k));
                assert_eq!(walked.iter().unique().count(), walked.len());
                for w in walked.windows(2) {
                    let removed = w[0].iter().filter(|&x| !w[1].contains(x)).count();
                    assert_eq!(removed, 1, "{:?} -> {:?}", w[0], w[1]);
                }
            }
        }
    }

    #[test]
    fn invalid_arguments() {
        assert_eq!(lex_rank(&[3, 2], 5), Err(Error::NotIncreasing {index: 1}));
        assert_eq!(colex_rank(&[1, 6], 5), Err(Error::ElementOutOfRange {element: 6, n: 5}));
        assert_eq!(KSubsetLex::new(3, 4), Err(Error::SizeExceedsUniverse {size: 4, limit: 3}));
        assert_eq!(KSubsetColex::new(0, 0), Err(Error::EmptyUniverse));
        assert!(matches!(rev_door_unrank(&rank(10), 3, 5), Err(Error::RankOutOfRange {..})));
        let order = KSubsetRevolvingDoor::new(5, 3).unwrap();
        assert_eq!(order.rank(&vec![1, 2]), Err(Error::WrongLength {expected: 3, found: 2}));
    }

    #[test]
    fn large_universe_is_exact() {
        let n = 100;
        let k = 50;
        let last = count(n, k) - 1u32;
        let t = lex_unrank(&last, k, n).unwrap();
        assert_eq!(t, (51..=100).collect::<Vec<_>>());
        assert_eq!(colex_rank(&t, n).unwrap(), last);
        assert_eq!(rev_door_rank(&rev_door_unrank(&last, k, n).unwrap(), n).unwrap(), last);
    }
}

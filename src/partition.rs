//! Integer partitions: generation, conjugation, counting, and lexicographic
//! rank/unrank/successor over partitions into exactly `n` parts.
//!
//! Partitions are sequences of positive parts, largest part first.
//!
//! The lexicographic order over partitions of `m` into `n` parts compares the
//! parts from the smallest (last) one upwards, so for `m = 6`, `n = 3` it is
//! `[4, 1, 1]`, `[3, 2, 1]`, `[2, 2, 2]`.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::{check_rank, Error, Result};
use crate::Ranking;

fn check_params(m: usize, n: usize) -> Result<()>
{
    if m == 0 {
        return Err(Error::EmptyUniverse);
    }
    if n == 0 || n > m {
        return Err(Error::SizeExceedsUniverse {size: n, limit: m});
    }
    Ok(())
}

fn check_partition(m: usize, n: usize, a: &[usize]) -> Result<()>
{
    check_params(m, n)?;
    if a.len() != n {
        return Err(Error::WrongLength {expected: n, found: a.len()});
    }
    check_parts(a)?;
    if a.iter().sum::<usize>() != m {
        return Err(Error::MalformedPartition("parts do not add up to m"));
    }
    Ok(())
}

fn check_parts(a: &[usize]) -> Result<()>
{
    if a.contains(&0) {
        return Err(Error::MalformedPartition("parts must be positive"));
    }
    if a.windows(2).any(|w| w[0] < w[1]) {
        return Err(Error::MalformedPartition("parts must be non-increasing"));
    }
    Ok(())
}

/// All partitions of `m` whose parts are at most `bound`.
///
/// Each partition is non-increasing, and the list is in decreasing
/// lexicographic order, so `[m]` comes first when `bound >= m`.
/// The partition of zero is the empty partition.
pub fn partitions_bounded(m: usize, bound: usize) -> Vec<Vec<usize>>
{
    if m == 0 {
        return vec![Vec::new()];
    }
    let mut out = Vec::new();
    for first in (1..=bound.min(m)).rev() {
        for rest in partitions_bounded(m - first, first) {
            let mut p = Vec::with_capacity(rest.len() + 1);
            p.push(first);
            p.extend(rest);
            out.push(p);
        }
    }
    out
}

/// All partitions of `m`, in decreasing lexicographic order.
pub fn partitions(m: usize) -> Vec<Vec<usize>>
{
    partitions_bounded(m, m)
}

/// All partitions of `m` whose largest part is exactly `n`.
pub fn partitions_with_largest_part(m: usize, n: usize) -> Result<Vec<Vec<usize>>>
{
    check_params(m, n)?;
    Ok(partitions_bounded(m - n, n).into_iter().map(|rest| {
        let mut p = Vec::with_capacity(rest.len() + 1);
        p.push(n);
        p.extend(rest);
        p
    }).collect())
}

/// Conjugate of a partition: the transpose of its Young diagram.
///
/// Part `i` of the result counts the parts of `a` larger than `i` (0-based).
pub fn conjugate(a: &[usize]) -> Result<Vec<usize>>
{
    check_parts(a)?;
    let mut b = vec![0; a.first().copied().unwrap_or(0)];
    for &x in a {
        for bi in &mut b[..x] {
            *bi += 1;
        }
    }
    Ok(b)
}

/// All partitions of `m` into exactly `n` parts, as conjugates of the
/// partitions whose largest part is `n`.
pub fn partitions_with_parts(m: usize, n: usize) -> Result<Vec<Vec<usize>>>
{
    partitions_with_largest_part(m, n)?.iter().map(|p| conjugate(p)).collect()
}

/// Table `P[i][j]` of the number of partitions of `i` into exactly `j` parts,
/// for `0 <= i <= m` and `0 <= j <= n`.
pub fn count_table(m: usize, n: usize) -> Vec<Vec<BigUint>>
{
    let mut p = vec![vec![BigUint::zero(); n + 1]; m + 1];
    p[0][0] = BigUint::one();
    for i in 1..=m {
        for j in 1..=i.min(n) {
            // either the smallest part is 1, or one can be taken from every part
            let mut c = p[i - 1][j - 1].clone();
            if i >= 2 * j {
                c += &p[i - j][j];
            }
            p[i][j] = c;
        }
    }
    p
}

/// Number of partitions of `m` into exactly `n` parts.
pub fn partition_count(m: usize, n: usize) -> BigUint
{
    if n > m {
        return BigUint::zero();
    }
    count_table(m, n).swap_remove(m).swap_remove(n)
}

/// The partition numbers `p(0), p(1), .., p(m)`.
///
/// Uses Euler's pentagonal number recurrence, where `p(i)` is the signed sum of
/// `p(i - w)` over the generalized pentagonal numbers `w <= i`.
pub fn partition_numbers(m: usize) -> Vec<BigUint>
{
    let mut p = Vec::with_capacity(m + 1);
    p.push(BigUint::one());
    for i in 1..=m {
        let mut plus = BigUint::zero();
        let mut minus = BigUint::zero();
        let mut j = 1;
        // w = j(3j - 1)/2, and w + j = j(3j + 1)/2
        let mut w = 1;
        while w <= i {
            let acc = if j % 2 == 1 { &mut plus } else { &mut minus };
            *acc += &p[i - w];
            if w + j <= i {
                *acc += &p[i - w - j];
            }
            w += 3 * j + 1;
            j += 1;
        }
        p.push(plus - minus);
    }
    p
}

/// The number of partitions of `m`, `p(m)`.
pub fn partition_number(m: usize) -> BigUint
{
    partition_numbers(m).swap_remove(m)
}

/// Next partition of `m` into `n` parts in lexicographic order, or `None` for the last one.
pub fn lex_successor(m: usize, n: usize, a: &[usize]) -> Result<Option<Vec<usize>>>
{
    check_partition(m, n, a)?;

    // smallest index whose part can grow while the first part still absorbs the difference
    let mut i = 1;
    while i < n && a[0] <= a[i] + 1 {
        i += 1;
    }
    if i == n {
        return Ok(None);
    }

    let mut b = a.to_vec();
    b[i] += 1;
    let v = b[i];
    let mut surplus = 0;
    for x in &mut b[1..i] {
        surplus += *x - v;
        *x = v;
    }
    // a[0] >= a[i] + 2, so this never goes below v
    b[0] = b[0] + surplus - 1;
    Ok(Some(b))
}

/// Rank of a partition of `m` into `n` parts in lexicographic order.
pub fn lex_rank(m: usize, n: usize, a: &[usize]) -> Result<BigUint>
{
    check_partition(m, n, a)?;
    let p = count_table(m, n);
    let mut b = a.to_vec();
    let (mut m, mut n) = (m, n);
    let mut r = BigUint::zero();
    while m > 0 {
        if b[n - 1] == 1 {
            m -= 1;
            n -= 1;
        } else {
            // skip every partition whose smallest part is 1
            for x in &mut b[..n] {
                *x -= 1;
            }
            r += &p[m - 1][n - 1];
            m -= n;
        }
    }
    Ok(r)
}

/// Partition of `m` into `n` parts of rank `r` in lexicographic order.
pub fn lex_unrank(m: usize, n: usize, r: &BigUint) -> Result<Vec<usize>>
{
    check_params(m, n)?;
    let p = count_table(m, n);
    check_rank(r, p[m][n].clone())?;

    let mut a = vec![0; n];
    let mut r = r.clone();
    let (mut m, mut n) = (m, n);
    while m > 0 {
        let c = &p[m - 1][n - 1];
        if r < *c {
            a[n - 1] += 1;
            m -= 1;
            n -= 1;
        } else {
            for x in &mut a[..n] {
                *x += 1;
            }
            r -= c;
            m -= n;
        }
    }
    Ok(a)
}

/// Partitions of `m` into exactly `n` parts in lexicographic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PartitionLex
{
    m: usize,
    n: usize
}

impl PartitionLex
{
    /// Order over the partitions of `m` into `n` parts; requires `1 <= n <= m`.
    pub fn new(m: usize, n: usize) -> Result<Self> {
        check_params(m, n)?;
        Ok(PartitionLex {m, n})
    }
}

impl Ranking for PartitionLex
{
    type Item = Vec<usize>;

    fn count(&self) -> BigUint {
        partition_count(self.m, self.n)
    }

    fn rank(&self, a: &Vec<usize>) -> Result<BigUint> {
        lex_rank(self.m, self.n, a)
    }

    fn unrank(&self, r: &BigUint) -> Result<Vec<usize>> {
        lex_unrank(self.m, self.n, r)
    }

    fn successor(&self, a: &Vec<usize>) -> Result<Option<Vec<usize>>> {
        lex_successor(self.m, self.n, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    ranking_tests!(lex_6_3, PartitionLex::new(6, 3).unwrap());
    ranking_tests!(lex_17_5, PartitionLex::new(17, 5).unwrap());
    ranking_tests!(lex_9_1, PartitionLex::new(9, 1).unwrap());
    ranking_tests!(lex_7_7, PartitionLex::new(7, 7).unwrap());
    ranking_tests!(lex_20_4, PartitionLex::new(20, 4).unwrap());

    #[test]
    fn generation() {
        let all = partitions(6);
        assert_eq!(all.len(), 11);
        assert_eq!(all[0], vec![6]);
        assert_eq!(all[1], vec![5, 1]);
        assert_eq!(all[10], vec![1, 1, 1, 1, 1, 1]);
        for w in all.windows(2) {
            assert!(w[0] > w[1]);
        }
        for p in &all {
            assert_eq!(p.iter().sum::<usize>(), 6);
            assert!(p.windows(2).all(|w| w[0] >= w[1]));
        }
        assert_eq!(partitions_bounded(5, 2), vec![vec![2, 2, 1], vec![2, 1, 1, 1], vec![1, 1, 1, 1, 1]]);
        assert_eq!(partitions(0), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn generation_matches_partition_numbers() {
        let numbers = partition_numbers(20);
        for m in 0..=20 {
            assert_eq!(BigUint::from(partitions(m).len()), numbers[m]);
        }
    }

    #[test]
    fn fixed_largest_part() {
        assert_eq!(partitions_with_largest_part(6, 4).unwrap(), vec![vec![4, 2], vec![4, 1, 1]]);
        assert_eq!(partitions_with_parts(6, 4).unwrap(), vec![vec![2, 2, 1, 1], vec![3, 1, 1, 1]]);
        for m in 1..=12 {
            for n in 1..=m {
                let with_parts = partitions_with_parts(m, n).unwrap();
                assert_eq!(BigUint::from(with_parts.len()), partition_count(m, n));
                assert!(with_parts.iter().all(|p| p.len() == n && p.iter().sum::<usize>() == m));
            }
        }
    }

    #[test]
    fn conjugates() {
        assert_eq!(conjugate(&[4, 2, 1]).unwrap(), vec![3, 2, 1, 1]);
        assert_eq!(conjugate(&[3, 2, 1, 1]).unwrap(), vec![4, 2, 1]);
        assert_eq!(conjugate(&[]).unwrap(), Vec::<usize>::new());
        for p in partitions(9) {
            let c = conjugate(&p).unwrap();
            assert_eq!(c.iter().sum::<usize>(), 9);
            assert_eq!(conjugate(&c).unwrap(), p);
        }
    }

    #[test]
    fn count_table_rows_sum_to_partition_numbers() {
        let m = 30;
        let table = count_table(m, m);
        let numbers = partition_numbers(m);
        for i in 0..=m {
            let row: BigUint = table[i].iter().sum();
            assert_eq!(row, numbers[i]);
        }
        assert_eq!(table[10][3], BigUint::from(8u32));
    }

    #[test]
    fn partition_numbers_known_values() {
        let expected = [1u32, 1, 2, 3, 5, 7, 11, 15, 22, 30, 42, 56, 77, 101, 135, 176];
        let numbers = partition_numbers(15);
        for (i, &e) in expected.iter().enumerate() {
            assert_eq!(numbers[i], BigUint::from(e));
        }
        assert_eq!(partition_number(30), BigUint::from(5604u32));
        assert_eq!(partition_number(100), BigUint::from(190569292u32));
        let p1000: BigUint = "24061467864032622473692149727991".parse().unwrap();
        assert_eq!(partition_number(1000), p1000);
    }

    #[test]
    fn lex_examples() {
        assert_eq!(lex_successor(17, 5, &[5, 5, 4, 2, 1]).unwrap(), Some(vec![7, 3, 3, 3, 1]));
        assert_eq!(lex_rank(17, 5, &[5, 5, 4, 2, 1]).unwrap(), BigUint::from(28u32));
        assert_eq!(lex_unrank(17, 5, &BigUint::from(28u32)).unwrap(), vec![5, 5, 4, 2, 1]);
        let walked: Vec<_> = PartitionLex::new(6, 3).unwrap().iter().collect();
        assert_eq!(walked, vec![vec![4, 1, 1], vec![3, 2, 1], vec![2, 2, 2]]);
    }

    #[test]
    fn lex_order_compares_smallest_parts_first() {
        let walked: Vec<_> = PartitionLex::new(15, 4).unwrap().iter().collect();
        for w in walked.windows(2) {
            assert!(w[0].iter().rev().lt(w[1].iter().rev()));
        }
        let mut expected = partitions_with_parts(15, 4).unwrap();
        expected.sort_by(|a, b| a.iter().rev().cmp(b.iter().rev()));
        assert_eq!(walked, expected);
    }

    #[test]
    fn invalid_arguments() {
        assert_eq!(conjugate(&[1, 2]), Err(Error::MalformedPartition("parts must be non-increasing")));
        assert_eq!(conjugate(&[2, 0]), Err(Error::MalformedPartition("parts must be positive")));
        assert_eq!(lex_rank(6, 3, &[3, 2, 2]), Err(Error::MalformedPartition("parts do not add up to m")));
        assert_eq!(lex_rank(6, 3, &[5, 1]), Err(Error::WrongLength {expected: 3, found: 2}));
        assert_eq!(PartitionLex::new(3, 4), Err(Error::SizeExceedsUniverse {size: 4, limit: 3}));
        assert_eq!(partitions_with_largest_part(0, 0), Err(Error::EmptyUniverse));
        assert!(matches!(lex_unrank(6, 3, &BigUint::from(3u32)), Err(Error::RankOutOfRange {..})));
    }
}

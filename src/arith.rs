//! Exact binomial coefficients and factorials.
//!
//! Everything here returns a `BigUint`, so the enumerators never overflow
//! regardless of how large `n` gets.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

/// Binomial coefficient `C(a, b)`, which is zero when `b > a`.
pub fn binomial(a: usize, b: usize) -> BigUint
{
    if b > a {
        return BigUint::zero();
    }
    let b = b.min(a - b);
    let mut r = BigUint::one();
    for i in 0..b {
        // exact: r * (a - i) is always divisible by i + 1 at this point
        r *= a - i;
        r /= i + 1;
    }
    r
}

/// `n!`
pub fn factorial(n: usize) -> BigUint
{
    falling_factorial(n, 0)
}

/// `n! / j!`, the product `(j + 1) * ... * n`; one when `j >= n`.
pub fn falling_factorial(n: usize, j: usize) -> BigUint
{
    ((j + 1)..=n).fold(BigUint::one(), |acc, i| acc * i)
}

/// `2^n`
pub fn power_of_two(n: usize) -> BigUint
{
    BigUint::one() << n
}

// Only used where the value is known to be a small digit (below `n`).
pub(crate) fn digit(x: &BigUint) -> usize
{
    x.to_usize().expect("digit does not fit in usize")
}

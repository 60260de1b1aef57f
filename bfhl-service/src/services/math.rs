//! Integer routines behind the `fibonacci`, `prime`, `lcm` and `hcf` keys.

use serde::Serialize;

/// A result that stays exact while it fits a 64-bit integer and degrades to
/// a double beyond that. Non-finite doubles serialize as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Numeric {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

impl Numeric {
    pub fn as_f64(self) -> f64 {
        match self {
            Numeric::Unsigned(n) => n as f64,
            Numeric::Signed(n) => n as f64,
            Numeric::Float(f) => f,
        }
    }

    fn add(self, other: Numeric) -> Numeric {
        if let (Numeric::Unsigned(a), Numeric::Unsigned(b)) = (self, other) {
            if let Some(sum) = a.checked_add(b) {
                return Numeric::Unsigned(sum);
            }
        }
        Numeric::Float(self.as_f64() + other.as_f64())
    }
}

/// First `n` terms of 0, 1, 1, 2, 3, ...
///
/// Terms are exact up to index 93 (the last one that fits a `u64`) and
/// approximate after that.
pub fn fibonacci(n: usize) -> Vec<Numeric> {
    let mut terms = Vec::new();
    let (mut current, mut next) = (Numeric::Unsigned(0), Numeric::Unsigned(1));
    for _ in 0..n {
        terms.push(current);
        let following = current.add(next);
        current = next;
        next = following;
    }
    terms
}

/// Trial division up to the square root.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Primes from `values`, in their original order.
pub fn filter_primes(values: &[i64]) -> Vec<i64> {
    values.iter().copied().filter(|&n| is_prime(n)).collect()
}

/// Euclid's algorithm; `gcd(a, 0) == a`. Signs follow the remainder chain,
/// so negative inputs may yield a negative divisor.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let r = a.wrapping_rem(b);
        a = b;
        b = r;
    }
    a
}

/// Euclid on doubles, for accumulators that already left the `i64` range.
/// Non-finite input yields NaN.
fn gcd_f64(a: f64, b: f64) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return f64::NAN;
    }
    let (mut a, mut b) = (a, b);
    while b != 0.0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// `a * b / gcd(a, b)`. `lcm(0, 0) == 0`.
pub fn lcm(a: Numeric, b: i64) -> Numeric {
    if let Numeric::Signed(a) = a {
        let g = gcd(a, b);
        if g == 0 {
            return Numeric::Signed(0);
        }
        if let Some(exact) = a.checked_div(g).and_then(|q| q.checked_mul(b)) {
            return Numeric::Signed(exact);
        }
        return Numeric::Float(a as f64 * b as f64 / g as f64);
    }

    let a = a.as_f64();
    let b = b as f64;
    Numeric::Float(a * b / gcd_f64(a, b))
}

/// Left fold of [`lcm`]; `None` for an empty slice.
pub fn lcm_all(values: &[i64]) -> Option<Numeric> {
    let (first, rest) = values.split_first()?;
    Some(rest.iter().fold(Numeric::Signed(*first), |acc, &v| lcm(acc, v)))
}

/// Left fold of [`gcd`]; `None` for an empty slice.
pub fn hcf_all(values: &[i64]) -> Option<i64> {
    let (first, rest) = values.split_first()?;
    Some(rest.iter().fold(*first, |acc, &v| gcd(acc, v)))
}

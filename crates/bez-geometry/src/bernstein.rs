//! Bernstein polynomial basis.

use bez_core::{BezError, Result};

/// Binomial coefficient C(n, k), computed by exact integer accumulation.
///
/// Each partial product in the multiplicative formula is itself a binomial
/// coefficient, so the division is always exact. Returns 0 when `k > n`.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut res = 1u128;
    let n = n as u128;
    for i in 0..k as u128 {
        res = res * (n - i) / (i + 1);
    }
    res as f64
}

/// Evaluate the Bernstein basis polynomial `B_{i,n}(t) = C(n,i) t^i (1-t)^(n-i)`.
///
/// Fails with [`BezError::NumericDomain`] when `i > n`. The function is pure
/// algebra: `t` may lie outside `[0, 1]` (only there are the values guaranteed
/// non-negative). `powi` keeps the `t = 0` and `t = 1` endpoints exact, with
/// the usual `0^0 = 1` convention.
pub fn bernstein(i: usize, n: usize, t: f64) -> Result<f64> {
    if i > n {
        return Err(BezError::NumericDomain(format!(
            "basis index {} out of range for degree {}",
            i, n
        )));
    }
    Ok(binomial(n, i) * t.powi(i as i32) * (1.0 - t).powi((n - i) as i32))
}

/// All `n + 1` Bernstein basis values of degree `n` at parameter `t`.
///
/// The row is a partition of unity: it sums to 1 for every `t`.
pub fn bernstein_row(n: usize, t: f64) -> Vec<f64> {
    (0..=n)
        .map(|i| binomial(n, i) * t.powi(i as i32) * (1.0 - t).powi((n - i) as i32))
        .collect()
}

/// Percentile computation.
///
/// Uses linear interpolation between closest ranks: the rank of quantile
/// `q` over `n` sorted values is `q * (n - 1)`, and a fractional rank
/// interpolates between its floor and ceiling neighbors. This matches the
/// semantics the cleaning bounds were defined against.

use crate::model::PageView;

/// Compute the `q`-quantile (`q` in `[0, 1]`) of an ascending-sorted slice.
///
/// Returns NaN for an empty slice. Deterministic: identical input always
/// yields an identical bound.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    if n == 1 {
        return sorted[0];
    }

    let q = q.clamp(0.0, 1.0);
    let idx = q * ((n - 1) as f64);
    let lo = idx.floor() as usize;
    let hi = idx.ceil() as usize;

    if lo == hi {
        sorted[lo]
    } else {
        let w = idx - (lo as f64);
        sorted[lo] * (1.0 - w) + sorted[hi] * w
    }
}

/// Collect the value column into an ascending-sorted vector.
pub fn sorted_values(rows: &[PageView]) -> Vec<f64> {
    let mut values: Vec<f64> = rows.iter().map(|r| r.value).collect();
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    values
}

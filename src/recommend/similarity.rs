//! Cosine similarity kernels.

use crate::error::{Result, SonanceError};
use crate::primitives::{Matrix, Vector};

/// Norms at or below this count as zero in [`cosine_similarities`], whose
/// inputs are standardized (unit scale per column).
pub const ZERO_NORM_TOLERANCE: f32 = 1e-6;

/// Cosine similarity of two equal-length slices, computed in f64.
///
/// Returns `None` if either slice has zero norm (the angle is undefined).
/// The result is clamped to [-1, 1].
///
/// # Examples
///
/// ```
/// use sonance::recommend::cosine_similarity;
///
/// let s = cosine_similarity(&[1.0, 0.0], &[-2.0, 0.0]).unwrap();
/// assert!((s + 1.0).abs() < 1e-6);
/// assert!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]).is_none());
/// ```
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Option<f32> {
    cosine_above(a, b, 0.0)
}

/// Cosine similarity, `None` unless both norms exceed `min_norm`.
fn cosine_above(a: &[f32], b: &[f32], min_norm: f64) -> Option<f32> {
    debug_assert_eq!(a.len(), b.len());

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let (norm_a, norm_b) = (norm_a.sqrt(), norm_b.sqrt());
    if norm_a <= min_norm || norm_b <= min_norm {
        return None;
    }

    let sim = dot / (norm_a * norm_b);
    Some(sim.clamp(-1.0, 1.0) as f32)
}

/// Cosine similarity between `query` and every row of `rows`.
///
/// Rows with a norm at or below [`ZERO_NORM_TOLERANCE`] score 0.0.
///
/// # Errors
///
/// - [`SonanceError::DimensionMismatch`] if the query length differs from
///   the row width
/// - [`SonanceError::ZeroVector`] if the query norm is at or below
///   [`ZERO_NORM_TOLERANCE`] (or not finite)
pub fn cosine_similarities(query: &Vector<f32>, rows: &Matrix<f32>) -> Result<Vec<f32>> {
    if query.len() != rows.n_cols() {
        return Err(SonanceError::dimension_mismatch(
            "query",
            rows.n_cols(),
            query.len(),
        ));
    }

    let query_norm = query.norm();
    if query_norm <= ZERO_NORM_TOLERANCE || !query_norm.is_finite() {
        return Err(SonanceError::ZeroVector);
    }

    let min_norm = f64::from(ZERO_NORM_TOLERANCE);
    Ok(rows
        .rows_iter()
        .map(|row| cosine_above(query.as_slice(), row, min_norm).unwrap_or(0.0))
        .collect())
}

//! String similarity scores in [0, 100], built on normalized Levenshtein
//! similarity from `strsim`.
//!
//! All public scorers normalize their inputs first: lowercase, punctuation
//! replaced by spaces, whitespace collapsed.

use std::collections::BTreeSet;

/// Lowercases, turns punctuation into spaces and collapses whitespace.
pub(crate) fn normalize(s: &str) -> String {
    let mapped: String = s
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn ratio_normalized(a: &str, b: &str) -> f32 {
    (strsim::normalized_levenshtein(a, b) * 100.0) as f32
}

/// Best [`ratio_normalized`] of the shorter string against every window of
/// the same char length in the longer one.
fn partial_ratio_normalized(a: &str, b: &str) -> f32 {
    let (la, lb) = (a.chars().count(), b.chars().count());
    let (short, long, width, long_len) = if la <= lb {
        (a, b, la, lb)
    } else {
        (b, a, lb, la)
    };
    if width == 0 {
        return if long_len == 0 { 100.0 } else { 0.0 };
    }
    if width == long_len {
        return ratio_normalized(short, long);
    }

    // Byte offset of every char boundary, end included
    let bounds: Vec<usize> = long
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(long.len()))
        .collect();

    let mut best = 0.0_f64;
    for start in 0..=long_len - width {
        let window = &long[bounds[start]..bounds[start + width]];
        best = best.max(strsim::normalized_levenshtein(short, window));
        if best >= 1.0 {
            break;
        }
    }
    (best * 100.0) as f32
}

fn token_set_ratio_normalized(a: &str, b: &str) -> f32 {
    let ta: BTreeSet<&str> = a.split(' ').filter(|t| !t.is_empty()).collect();
    let tb: BTreeSet<&str> = b.split(' ').filter(|t| !t.is_empty()).collect();
    if ta.is_empty() || tb.is_empty() {
        return if ta.is_empty() && tb.is_empty() { 100.0 } else { 0.0 };
    }

    let join = |set: BTreeSet<&&str>| set.into_iter().copied().collect::<Vec<_>>().join(" ");
    let sect = join(ta.intersection(&tb).collect());
    let diff_ab = join(ta.difference(&tb).collect());
    let diff_ba = join(tb.difference(&ta).collect());

    // One side's tokens all appear in the other
    if !sect.is_empty() && (diff_ab.is_empty() || diff_ba.is_empty()) {
        return 100.0;
    }

    let combine = |diff: &str| {
        if sect.is_empty() {
            diff.to_string()
        } else {
            format!("{sect} {diff}")
        }
    };
    let combined_ab = combine(&diff_ab);
    let combined_ba = combine(&diff_ba);

    let mut best = ratio_normalized(&combined_ab, &combined_ba);
    if !sect.is_empty() {
        best = best
            .max(ratio_normalized(&sect, &combined_ab))
            .max(ratio_normalized(&sect, &combined_ba));
    }
    best
}

pub(crate) fn weighted_ratio_normalized(a: &str, b: &str) -> f32 {
    let (la, lb) = (a.chars().count(), b.chars().count());
    if la == 0 || lb == 0 {
        return 0.0;
    }

    let base = ratio_normalized(a, b);
    let len_ratio = la.max(lb) as f32 / la.min(lb) as f32;

    if len_ratio < 1.5 {
        return base.max(token_set_ratio_normalized(a, b) * 0.95);
    }

    let partial_scale = if len_ratio < 8.0 { 0.9 } else { 0.6 };
    base.max(partial_ratio_normalized(a, b) * partial_scale)
        .max(token_set_ratio_normalized(a, b) * 0.95 * partial_scale)
}

/// Whole-string similarity.
///
/// ```
/// use sonance::search::ratio;
///
/// assert_eq!(ratio("Hello", "hello!"), 100.0);
/// assert!(ratio("kitten", "sitting") < 60.0);
/// ```
#[must_use]
pub fn ratio(a: &str, b: &str) -> f32 {
    ratio_normalized(&normalize(a), &normalize(b))
}

/// Best similarity of the shorter string against any equally long window of
/// the longer one.
#[must_use]
pub fn partial_ratio(a: &str, b: &str) -> f32 {
    partial_ratio_normalized(&normalize(a), &normalize(b))
}

/// Similarity of the token sets, ignoring word order and repeats.
#[must_use]
pub fn token_set_ratio(a: &str, b: &str) -> f32 {
    token_set_ratio_normalized(&normalize(a), &normalize(b))
}

/// Best of [`ratio`], [`partial_ratio`] and [`token_set_ratio`], with the
/// partial and token scores discounted as the lengths diverge.
#[must_use]
pub fn weighted_ratio(a: &str, b: &str) -> f32 {
    weighted_ratio_normalized(&normalize(a), &normalize(b))
}

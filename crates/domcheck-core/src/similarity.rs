//! String similarity primitives
//!
//! All scores are on a 0-100 scale and operate on Unicode scalar values.
//!
//! - [`ratio`] - normalized InDel similarity, `200 * LCS / (len_a + len_b)`
//! - [`partial_ratio`] - best [`ratio`] of the shorter string against any
//!   equally long window of the longer one (plus partial windows at both ends)
//! - [`token_sort_ratio`] - [`ratio`] after sorting whitespace tokens

/// Last row of the LCS table: `row[j]` is the LCS length of `a` and `b[..j]`.
fn lcs_row(a: &[char], b: &[char]) -> Vec<usize> {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev
}

/// Length of the longest common subsequence.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    lcs_row(a, b)[b.len()]
}

#[inline]
fn indel_score(lcs: usize, total: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    200.0 * lcs as f64 / total as f64
}

fn ratio_chars(a: &[char], b: &[char]) -> f64 {
    indel_score(lcs_len(a, b), a.len() + b.len())
}

/// Normalized InDel similarity (0-100).
///
/// Two empty strings are identical (100); one empty string scores 0.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio_chars(&a, &b)
}

/// Best alignment of `short` inside `long`, where `short.len() <= long.len()`.
fn best_window(short: &[char], long: &[char]) -> f64 {
    let m = short.len();
    let n = long.len();
    let mut best = 0.0f64;

    for start in 0..=(n - m) {
        best = best.max(ratio_chars(short, &long[start..start + m]));
        if best >= 100.0 {
            return 100.0;
        }
    }

    // Windows hanging off either end of the longer string. One table pass
    // gives every prefix; the suffixes come from the reversed pair, since
    // LCS(a, b) == LCS(rev a, rev b).
    let prefixes = lcs_row(short, long);
    let short_rev: Vec<char> = short.iter().rev().copied().collect();
    let long_rev: Vec<char> = long.iter().rev().copied().collect();
    let suffixes = lcs_row(&short_rev, &long_rev);

    for len in 1..m {
        best = best
            .max(indel_score(prefixes[len], m + len))
            .max(indel_score(suffixes[len], m + len));
    }

    best
}

/// Similarity (0-100) of the best-aligned substring match.
///
/// Tolerates one string being a fragment of the other:
/// `partial_ratio("acme", "acmecorp") == 100.0`.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() || b.is_empty() {
        return if a.is_empty() && b.is_empty() { 100.0 } else { 0.0 };
    }

    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
    let score = best_window(short, long);

    if short.len() == long.len() && score < 100.0 {
        score.max(best_window(long, short))
    } else {
        score
    }
}

/// Sort whitespace-separated tokens and rejoin them with single spaces.
fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Word-order-insensitive similarity (0-100).
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

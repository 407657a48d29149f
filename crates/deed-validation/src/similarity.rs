//! Sequence similarity: Ratcliff/Obershelp ratio.
//!
//! Score is `2 * M / (len(a) + len(b))` where `M` is the total length of the
//! matched blocks: the longest common substring, then recursively the
//! longest common substrings of the pieces to its left and right. This is
//! the county resolver's policy metric; the 0.6 cutoff is calibrated to it,
//! so it must not be swapped for an edit-distance family metric.

/// Similarity of two strings on a 0.0 to 1.0 scale.
///
/// Two empty strings are identical (1.0); an empty string matches nothing
/// else (0.0). Ties for the longest block keep the earliest positions, so
/// the score is deterministic.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matches = matching_len(&a, &b);
    2.0 * matches as f64 / total as f64
}

fn matching_len(a: &[char], b: &[char]) -> usize {
    let (ai, bi, size) = longest_match(a, b);
    if size == 0 {
        return 0;
    }
    matching_len(&a[..ai], &b[..bi]) + size + matching_len(&a[ai + size..], &b[bi + size..])
}

/// Longest common substring as `(start_a, start_b, length)`.
///
/// Dynamic programming over match lengths ending at each index pair; only a
/// strictly longer block replaces the current best, which keeps the earliest
/// block on ties.
fn longest_match(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut prev = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        let mut curr = vec![0usize; b.len() + 1];
        for (j, &cb) in b.iter().enumerate() {
            if ca == cb {
                let len = prev[j] + 1;
                curr[j + 1] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            }
        }
        prev = curr;
    }
    best
}

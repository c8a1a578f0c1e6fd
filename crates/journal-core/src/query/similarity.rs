//! Ratcliff/Obershelp string similarity.
//!
//! The ratio is `2 * M / (|a| + |b|)` where `M` is the total number of
//! matching characters found by recursively taking the longest common
//! substring and matching the pieces to its left and right. Comparison is
//! case-sensitive and operates on characters, not bytes.

/// Normalized similarity of two strings, in `[0.0, 1.0]`.
///
/// `1.0` for identical strings (including two empty strings), `0.0` when no
/// character matches.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

/// Total matched characters between two slices.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let (a_start, b_start, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }
    len + matching_chars(&a[..a_start], &b[..b_start])
        + matching_chars(&a[a_start + len..], &b[b_start + len..])
}

/// Longest common contiguous block, as `(start_in_a, start_in_b, length)`.
///
/// Among equally long blocks the earliest in `a`, then in `b`, wins.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    // lengths[j] = length of the common suffix ending at a[i], b[j]
    let mut lengths = vec![0usize; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        // Walk right-to-left so the previous row is still intact.
        for j in (0..b.len()).rev() {
            if b[j] == ca {
                let len = lengths[j] + 1;
                lengths[j + 1] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            } else {
                lengths[j + 1] = 0;
            }
        }
    }
    best
}

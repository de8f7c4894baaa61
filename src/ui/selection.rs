//! Bounds-safe circular cursor arithmetic.
//!
//! Every function here is total: `n == 0` and out-of-range indices resolve to
//! `0` or a clamped value, never a panic. Both surfaces route their selection
//! moves through these helpers.

/// Next index with wrap-around from last to first.
pub fn next(i: usize, n: usize) -> usize {
    if n == 0 { 0 } else { (i + 1) % n }
}

/// Previous index with wrap-around from first to last.
pub fn previous(i: usize, n: usize) -> usize {
    if n == 0 {
        0
    } else {
        (i + n - 1) % n
    }
}

/// Clamp a possibly-stale index after the collection shrank.
pub fn clamp(i: usize, n: usize) -> usize {
    if n == 0 { 0 } else { i.min(n - 1) }
}

/// Explicit set (pointer click), clamped to the collection bounds.
pub fn set_index(i: usize, n: usize) -> usize {
    clamp(i, n)
}

/// Apply a signed delta with wrap-around. Convenience for key repeat and the
/// palette's move messages.
pub fn step(i: usize, n: usize, delta: i32) -> usize {
    if n == 0 {
        return 0;
    }
    let i = clamp(i, n);
    (i as i64 + delta as i64).rem_euclid(n as i64) as usize
}

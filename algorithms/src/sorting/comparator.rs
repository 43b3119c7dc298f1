//! Sorting with caller-supplied orderings. Both sorts are stable.

use std::cmp::Ordering;

fn numeric(a: &i64, b: &i64) -> Ordering {
    a.cmp(b)
}

pub fn sort_numeric(arr: &mut [i64]) {
    arr.sort_by(numeric);
}

/// Order strings by character count, keeping input order among equals.
pub fn sort_by_length<S: AsRef<str>>(items: &mut [S]) {
    items.sort_by_key(|s| s.as_ref().chars().count());
}

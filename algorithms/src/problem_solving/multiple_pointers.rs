//! Two-pointer exercises over sorted input. Each pointer only moves one way,
//! so every function is O(N).

use std::cmp::Ordering;

/// Number of distinct values in a sorted slice.
pub fn count_unique_values<T: PartialEq>(arr: &[T]) -> usize {
    if arr.is_empty() {
        return 0;
    }
    let mut i = 0;
    let mut count = 1;
    for j in 1..arr.len() {
        if arr[i] != arr[j] {
            i = j;
            count += 1;
        }
    }
    count
}

/// First pair (from the outside in) of a sorted slice that sums to zero.
pub fn sum_zero(arr: &[i64]) -> Option<(i64, i64)> {
    if arr.len() < 2 {
        return None;
    }
    let (mut left, mut right) = (0, arr.len() - 1);
    while left < right {
        let sum = i128::from(arr[left]) + i128::from(arr[right]);
        match sum.cmp(&0) {
            Ordering::Equal => return Some((arr[left], arr[right])),
            Ordering::Greater => right -= 1,
            Ordering::Less => left += 1,
        }
    }
    None
}

/// True if some pair in the sorted slice averages exactly `target`.
pub fn average_pair(arr: &[i64], target: f64) -> bool {
    if arr.len() < 2 {
        return false;
    }
    let (mut left, mut right) = (0, arr.len() - 1);
    while left < right {
        let average = (arr[left] as f64 + arr[right] as f64) / 2.0;
        match average.partial_cmp(&target) {
            Some(Ordering::Equal) => return true,
            Some(Ordering::Greater) => right -= 1,
            _ => left += 1,
        }
    }
    false
}

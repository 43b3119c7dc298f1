//! Merge sort.
//!
//! Equations:
//!   merge(a, b):  repeatedly take min(a[i], b[j]), ties from a   O(|a|+|b|)
//!   sort(x):      |x| <= 1 => x
//!                 else merge(sort(x[..m]), sort(x[m..])), m = |x|/2
//!   T(N) = 2T(N/2) + O(N) = O(N log N), stable

/// Merge two sorted slices into one sorted vector.
pub fn merge_arrays<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut results = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            results.push(left[i].clone());
            i += 1;
        } else {
            results.push(right[j].clone());
            j += 1;
        }
    }
    results.extend_from_slice(&left[i..]);
    results.extend_from_slice(&right[j..]);
    results
}

pub fn merge_sort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
    if arr.len() <= 1 {
        return arr.to_vec();
    }
    let middle = arr.len() / 2;
    let left = merge_sort(&arr[..middle]);
    let right = merge_sort(&arr[middle..]);
    merge_arrays(&left, &right)
}

/// Largest sum of `n` consecutive elements, keeping a running window sum.
/// `None` when `n` is 0 or longer than the slice. O(N).
pub fn max_subarray_sum(arr: &[i64], n: usize) -> Option<i64> {
    if n == 0 || n > arr.len() {
        return None;
    }
    let mut window: i64 = arr[..n].iter().sum();
    let mut max = window;
    for i in n..arr.len() {
        window = window - arr[i - n] + arr[i];
        max = max.max(window);
    }
    Some(max)
}

/// Same result as [`max_subarray_sum`], re-summing every window. O(N * n).
pub fn max_subarray_sum_naive(arr: &[i64], n: usize) -> Option<i64> {
    if n == 0 {
        return None;
    }
    arr.windows(n).map(|w| w.iter().sum()).max()
}

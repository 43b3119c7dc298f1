pub fn quick_sort<T: Ord>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    let p = pivot(arr);
    let (left, right) = arr.split_at_mut(p);
    quick_sort(left);
    quick_sort(&mut right[1..]);
}

/// Partition around `arr[0]`: smaller values move in front of it and the
/// pivot lands at its final sorted index, which is returned.
pub fn pivot<T: Ord>(arr: &mut [T]) -> usize {
    if arr.is_empty() {
        return 0;
    }
    let mut swap_idx = 0;
    for i in 1..arr.len() {
        if arr[i] < arr[0] {
            swap_idx += 1;
            arr.swap(swap_idx, i);
        }
    }
    arr.swap(0, swap_idx);
    swap_idx
}

/// Repeatedly swap adjacent out-of-order pairs. Each pass bubbles the largest
/// remaining value to the end; stops early once a pass makes no swaps.
pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    for end in (1..=arr.len()).rev() {
        let mut swapped = false;
        for j in 0..end - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

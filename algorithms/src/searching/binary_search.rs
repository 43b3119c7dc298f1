//! Binary search over a sorted slice.
//!
//! Variables:
//!   [min, max]  - inclusive window still possibly holding the target
//!
//! Equations:
//!   middle = min + (max - min) / 2
//!   arr[middle] < t  => min = middle + 1
//!   arr[middle] > t  => max = middle - 1
//!   loop while min <= max                            O(log N)

use std::cmp::Ordering;

pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    if arr.is_empty() {
        return None;
    }
    let (mut min, mut max) = (0, arr.len() - 1);
    while min <= max {
        let middle = min + (max - min) / 2;
        match arr[middle].cmp(target) {
            Ordering::Less => min = middle + 1,
            Ordering::Greater => {
                if middle == 0 {
                    return None;
                }
                max = middle - 1;
            }
            Ordering::Equal => return Some(middle),
        }
    }
    None
}

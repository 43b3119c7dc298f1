//! Binary max-heap.
//!
//! Variables:
//!   values : Vec<T>  - heap array, 0-indexed
//!   N      : usize   - current size
//!
//! Equations:
//!   parent(i)      = (i - 1) / 2
//!   left_child(i)  = 2*i + 1
//!   right_child(i) = 2*i + 2
//!
//!   Heap invariant: values[parent(i)] >= values[i]  for all i > 0
//!
//!   insert(x):     values[N] = x,  bubble_up(N),  N' = N+1     O(log N)
//!   extract_max(): swap(0, N-1), N' = N-1, sink_down(0)        O(log N)
//!   from_vec(v):   sink_down(i) for i = N/2-1 down to 0        O(N)

pub struct MaxBinaryHeap<T: Ord> {
    values: Vec<T>,
}

impl<T: Ord> MaxBinaryHeap<T> {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn from_vec(values: Vec<T>) -> Self {
        let mut heap = Self { values };
        for i in (0..heap.values.len() / 2).rev() {
            heap.sink_down(i);
        }
        heap
    }

    pub fn insert(&mut self, val: T) {
        self.values.push(val);
        self.bubble_up(self.values.len() - 1);
    }

    pub fn extract_max(&mut self) -> Option<T> {
        if self.values.is_empty() {
            return None;
        }
        let n = self.values.len() - 1;
        self.values.swap(0, n);
        let max = self.values.pop();
        if !self.values.is_empty() {
            self.sink_down(0);
        }
        max
    }

    pub fn peek(&self) -> Option<&T> {
        self.values.first()
    }
    /// Heap array in storage order.
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn bubble_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = (i - 1) / 2;
            if self.values[i] <= self.values[p] {
                break;
            }
            self.values.swap(p, i);
            i = p;
        }
    }

    fn sink_down(&mut self, mut i: usize) {
        let n = self.values.len();
        loop {
            let mut largest = i;
            let l = 2 * i + 1;
            let r = 2 * i + 2;
            if l < n && self.values[l] > self.values[largest] {
                largest = l;
            }
            if r < n && self.values[r] > self.values[largest] {
                largest = r;
            }
            if largest == i {
                break;
            }
            self.values.swap(i, largest);
            i = largest;
        }
    }
}

impl<T: Ord> Default for MaxBinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holds_invariant<T: Ord>(values: &[T]) -> bool {
        (1..values.len()).all(|i| values[(i - 1) / 2] >= values[i])
    }

    #[test]
    fn heapify_then_drain_descends() {
        let mut heap = MaxBinaryHeap::from_vec(vec![3, 9, 1, 7, 7, 2, 8]);
        assert!(holds_invariant(heap.as_slice()));
        let mut drained = Vec::new();
        while let Some(v) = heap.extract_max() {
            assert!(holds_invariant(heap.as_slice()));
            drained.push(v);
        }
        assert_eq!(drained, vec![9, 8, 7, 7, 3, 2, 1]);
    }
}

//! Queue: unbounded FIFO over a growable ring buffer.
//!
//! Variables:
//!   buf  : Vec<Option<T>>  - circular backing array, length C
//!   head : usize           - index of next dequeue
//!   tail : usize           - index of next enqueue
//!   len  : usize           - current occupancy
//!
//! Equations:
//!   enqueue(x): len == C  => grow (C' = max(2C, 4), unwrap ring to 0..len)
//!               buf[tail] = x,  tail = (tail+1) mod C,  len += 1  O(1) amortised
//!   dequeue():  x = buf[head],  head = (head+1) mod C,  len -= 1  O(1)
//!   empty iff len == 0

const MIN_CAPACITY: usize = 4;

pub struct Queue<T> {
    buf: Vec<Option<T>>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self { buf: Vec::new(), head: 0, tail: 0, len: 0 }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut buf = Vec::with_capacity(capacity);
        buf.resize_with(capacity, || None);
        Self { buf, head: 0, tail: 0, len: 0 }
    }

    /// Add to the back; returns the new size.
    pub fn enqueue(&mut self, val: T) -> usize {
        if self.len == self.buf.len() {
            self.grow();
        }
        self.buf[self.tail] = Some(val);
        self.tail = (self.tail + 1) % self.buf.len();
        self.len += 1;
        self.len
    }

    pub fn dequeue(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let val = self.buf[self.head].take();
        self.head = (self.head + 1) % self.buf.len();
        self.len -= 1;
        val
    }

    pub fn peek(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.buf[self.head].as_ref()
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub fn len(&self) -> usize {
        self.len
    }

    fn grow(&mut self) {
        let old_cap = self.buf.len();
        let new_cap = (old_cap * 2).max(MIN_CAPACITY);
        let mut new_buf = Vec::with_capacity(new_cap);
        for i in 0..self.len {
            new_buf.push(self.buf[(self.head + i) % old_cap].take());
        }
        new_buf.resize_with(new_cap, || None);
        self.buf = new_buf;
        self.head = 0;
        self.tail = self.len;
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

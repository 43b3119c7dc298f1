//! Doubly-linked list over an index slab.
//!
//! Nodes live in a `Vec` and link to each other by slot index, so both
//! directions are plain `Option<usize>` and no node is shared.
//!
//! Variables:
//!   slots : Vec<Option<Node<T>>>  - node storage, None = free slot
//!   free  : Vec<usize>            - reusable slot indices
//!   head  : Option<usize>         - slot of position 0
//!   tail  : Option<usize>         - slot of position N-1
//!   N     : usize                 - number of live nodes
//!
//! Equations:
//!   push / pop / shift / unshift                           O(1)
//!   get(i):  i <= N/2  => walk i links forward from head
//!            i >  N/2  => walk N-1-i links back from tail  O(min(i, N-i))
//!   insert(i,x): before = get(i-1), after = before.next,
//!                before.next = new = after.prev            O(min(i, N-i))

struct Node<T> {
    val: T,
    prev: Option<usize>,
    next: Option<usize>,
}

pub struct DoublyLinkedList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> Self {
        Self { slots: Vec::new(), free: Vec::new(), head: None, tail: None, len: 0 }
    }

    pub fn push(&mut self, val: T) {
        let idx = self.alloc(Node { val, prev: self.tail, next: None });
        match self.tail {
            Some(t) => {
                if let Some(old_tail) = self.node_mut(t) {
                    old_tail.next = Some(idx);
                }
            }
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    pub fn pop(&mut self) -> Option<T> {
        let t = self.tail?;
        let node = self.release(t)?;
        self.tail = node.prev;
        match node.prev {
            Some(p) => {
                if let Some(new_tail) = self.node_mut(p) {
                    new_tail.next = None;
                }
            }
            None => self.head = None,
        }
        self.len -= 1;
        Some(node.val)
    }

    pub fn shift(&mut self) -> Option<T> {
        let h = self.head?;
        let node = self.release(h)?;
        self.head = node.next;
        match node.next {
            Some(n) => {
                if let Some(new_head) = self.node_mut(n) {
                    new_head.prev = None;
                }
            }
            None => self.tail = None,
        }
        self.len -= 1;
        Some(node.val)
    }

    pub fn unshift(&mut self, val: T) {
        let idx = self.alloc(Node { val, prev: None, next: self.head });
        match self.head {
            Some(h) => {
                if let Some(old_head) = self.node_mut(h) {
                    old_head.prev = Some(idx);
                }
            }
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
    }

    pub fn get(&self, idx: usize) -> Option<&T> {
        let slot = self.slot_at(idx)?;
        self.node(slot).map(|n| &n.val)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        let slot = self.slot_at(idx)?;
        self.node_mut(slot).map(|n| &mut n.val)
    }

    pub fn set(&mut self, idx: usize, val: T) -> bool {
        match self.get_mut(idx) {
            Some(slot) => {
                *slot = val;
                true
            }
            None => false,
        }
    }

    /// Insert so that the new value ends up at `idx`; `idx == len` appends.
    pub fn insert(&mut self, idx: usize, val: T) -> bool {
        if idx > self.len {
            return false;
        }
        if idx == 0 {
            self.unshift(val);
            return true;
        }
        if idx == self.len {
            self.push(val);
            return true;
        }
        let before = match self.slot_at(idx - 1) {
            Some(before) => before,
            None => return false,
        };
        let after = self.node(before).and_then(|n| n.next);
        let new = self.alloc(Node { val, prev: Some(before), next: after });
        if let Some(b) = self.node_mut(before) {
            b.next = Some(new);
        }
        if let Some(a) = after {
            if let Some(a) = self.node_mut(a) {
                a.prev = Some(new);
            }
        }
        self.len += 1;
        true
    }

    pub fn remove(&mut self, idx: usize) -> Option<T> {
        if idx >= self.len {
            return None;
        }
        if idx == 0 {
            return self.shift();
        }
        if idx == self.len - 1 {
            return self.pop();
        }
        let slot = self.slot_at(idx)?;
        let node = self.release(slot)?;
        if let Some(p) = node.prev {
            if let Some(p) = self.node_mut(p) {
                p.next = node.next;
            }
        }
        if let Some(n) = node.next {
            if let Some(n) = self.node_mut(n) {
                n.prev = node.prev;
            }
        }
        self.len -= 1;
        Some(node.val)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { list: self, front: self.head, back: self.tail, remaining: self.len }
    }

    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn slot_at(&self, idx: usize) -> Option<usize> {
        if idx >= self.len {
            return None;
        }
        if idx <= self.len / 2 {
            let mut cur = self.head?;
            for _ in 0..idx {
                cur = self.node(cur)?.next?;
            }
            Some(cur)
        } else {
            let mut cur = self.tail?;
            for _ in 0..(self.len - 1 - idx) {
                cur = self.node(cur)?.prev?;
            }
            Some(cur)
        }
    }

    fn node(&self, slot: usize) -> Option<&Node<T>> {
        self.slots.get(slot)?.as_ref()
    }

    fn node_mut(&mut self, slot: usize) -> Option<&mut Node<T>> {
        self.slots.get_mut(slot)?.as_mut()
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                slot
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, slot: usize) -> Option<Node<T>> {
        let node = self.slots.get_mut(slot)?.take()?;
        self.free.push(slot);
        Some(node)
    }
}

impl<T: Clone> DoublyLinkedList<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.val)
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.val)
    }
}

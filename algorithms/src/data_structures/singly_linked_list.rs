//! Singly-linked list with owned nodes.
//!
//! Variables:
//!   head : Option<Box<Node<T>>>  - first node, None if empty
//!   N    : usize                 - number of nodes
//!
//! Equations:
//!   unshift(x):   new.next = head, head = new,  N' = N+1      O(1)
//!   shift():      head = head.next,  N' = N-1                O(1)
//!   push(x):      walk to tail, tail.next = new, N' = N+1    O(N)
//!   pop():        walk to node N-2, cut its next, N' = N-1   O(N)
//!   get(i):       walk i links, i < N                        O(i)
//!   insert(i,x):  walk to i-1, splice new after it, i <= N   O(i)
//!   remove(i):    walk to i-1, unlink its next, i < N        O(i)
//!   reverse():    flip every next pointer in one pass        O(N)

struct Node<T> {
    val: T,
    next: Option<Box<Node<T>>>,
}

pub struct SinglyLinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Append to the tail.
    pub fn push(&mut self, val: T) {
        let new_node = Box::new(Node { val, next: None });
        let mut cur = &mut self.head;
        while let Some(node) = cur {
            cur = &mut node.next;
        }
        *cur = Some(new_node);
        self.len += 1;
    }

    /// Remove and return the tail.
    pub fn pop(&mut self) -> Option<T> {
        if self.len <= 1 {
            return self.shift();
        }
        let mut cur = self.head.as_mut()?;
        for _ in 0..self.len - 2 {
            cur = cur.next.as_mut()?;
        }
        let tail = cur.next.take()?;
        self.len -= 1;
        Some(tail.val)
    }

    /// Remove and return the head.
    pub fn shift(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.len -= 1;
            node.val
        })
    }

    /// Prepend to the head.
    pub fn unshift(&mut self, val: T) {
        let node = Box::new(Node { val, next: self.head.take() });
        self.head = Some(node);
        self.len += 1;
    }

    pub fn get(&self, idx: usize) -> Option<&T> {
        self.iter().nth(idx)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.node_mut(idx).map(|node| &mut node.val)
    }

    /// Replace the value at `idx`; false if out of range.
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
        let prev = match self.node_mut(idx - 1) {
            Some(prev) => prev,
            None => return false,
        };
        let next = prev.next.take();
        prev.next = Some(Box::new(Node { val, next }));
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
        let prev = self.node_mut(idx - 1)?;
        let removed = prev.next.take()?;
        let Node { val, next } = *removed;
        prev.next = next;
        self.len -= 1;
        Some(val)
    }

    pub fn reverse(&mut self) {
        let mut prev: Option<Box<Node<T>>> = None;
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        self.head = prev;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: self.head.as_deref() }
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.head.as_ref().map(|n| &n.val)
    }

    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn node_mut(&mut self, idx: usize) -> Option<&mut Box<Node<T>>> {
        if idx >= self.len {
            return None;
        }
        let mut cur = self.head.as_mut()?;
        for _ in 0..idx {
            cur = cur.next.as_mut()?;
        }
        Some(cur)
    }
}

impl<T: Clone> SinglyLinkedList<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlink iteratively so long lists don't overflow the stack on drop.
impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.val
        })
    }
}

//! Binary search tree with breadth- and depth-first traversals.
//!
//! Variables:
//!   root : Option<Box<Node<T>>>
//!   N    : usize                  - number of distinct values
//!
//! Equations:
//!   BST invariant: left subtree < node.value < right subtree
//!   insert(x) / find(x): descend left if x < node, right if x > node
//!                        O(h), h = tree height (N in the degenerate case)
//!   bfs():           level order via FIFO queue       O(N)
//!   dfs_pre_order:   node, left, right
//!   dfs_post_order:  left, right, node
//!   dfs_in_order:    left, node, right  (ascending)

use std::cmp::Ordering;
use std::collections::VecDeque;

struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Box<Self> {
        Box::new(Self { value, left: None, right: None })
    }
}

pub struct BinarySearchTree<T: Ord> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T: Ord> BinarySearchTree<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Insert `value`; a value already in the tree is left untouched and
    /// `false` is returned.
    pub fn insert(&mut self, value: T) -> bool {
        let mut cur = &mut self.root;
        while let Some(node) = cur {
            cur = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *cur = Some(Node::leaf(value));
        self.len += 1;
        true
    }

    pub fn find(&self, value: &T) -> Option<&T> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T: Ord + Clone> BinarySearchTree<T> {
    pub fn bfs(&self) -> Vec<T> {
        let mut data = Vec::with_capacity(self.len);
        let mut queue: VecDeque<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            data.push(node.value.clone());
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
        data
    }

    pub fn dfs_pre_order(&self) -> Vec<T> {
        fn visit<T: Clone>(node: Option<&Node<T>>, out: &mut Vec<T>) {
            if let Some(node) = node {
                out.push(node.value.clone());
                visit(node.left.as_deref(), out);
                visit(node.right.as_deref(), out);
            }
        }

        let mut data = Vec::with_capacity(self.len);
        visit(self.root.as_deref(), &mut data);
        data
    }

    pub fn dfs_post_order(&self) -> Vec<T> {
        fn visit<T: Clone>(node: Option<&Node<T>>, out: &mut Vec<T>) {
            if let Some(node) = node {
                visit(node.left.as_deref(), out);
                visit(node.right.as_deref(), out);
                out.push(node.value.clone());
            }
        }

        let mut data = Vec::with_capacity(self.len);
        visit(self.root.as_deref(), &mut data);
        data
    }

    pub fn dfs_in_order(&self) -> Vec<T> {
        fn visit<T: Clone>(node: Option<&Node<T>>, out: &mut Vec<T>) {
            if let Some(node) = node {
                visit(node.left.as_deref(), out);
                out.push(node.value.clone());
                visit(node.right.as_deref(), out);
            }
        }

        let mut data = Vec::with_capacity(self.len);
        visit(self.root.as_deref(), &mut data);
        data
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

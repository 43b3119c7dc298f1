//! # Algorithms Crate
//!
//! A fixed-capacity hash table with separate chaining, plus a collection of
//! independent algorithm exercises organized by category.
//!
//! ## Modules
//!
//! - `data_structures` – Hash table, singly/doubly linked list, queue, max binary heap, binary search tree
//! - `sorting` – Bubble, selection, insertion, merge, quick, radix and comparator sorts
//! - `searching` – Linear and binary search
//! - `graph` – Undirected adjacency-list graph with BFS / DFS
//! - `problem_solving` – Frequency counters, multiple pointers, sliding window, recursion
//! - `numerical` – Closed-form summation and timing
//! - `config` / `error` / `logger` – Table configuration, error types, log setup
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use algorithms::HashTable;
//!
//! let mut table = HashTable::new(17).unwrap();
//! table.set("03", "Trees");
//! assert_eq!(table.get("03"), Some(&"Trees"));
//! assert_eq!(table.get("hello"), None);
//! ```
//!
//! ---
//!
//! None of the exercise modules depend on the hash table or on each other.

pub mod computation_map;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod graph;
pub mod logger;
pub mod numerical;
pub mod problem_solving;
pub mod searching;
pub mod sorting;

pub use config::{DuplicateKeyPolicy, HashTableConfig};
pub use data_structures::hash_table::{polynomial_hash, Entry, HashTable};
pub use error::{ConfigError, GraphError, HashTableError};

pub mod binary_search_tree;
pub mod doubly_linked_list;
pub mod hash_table;
pub mod max_binary_heap;
pub mod queue;
pub mod singly_linked_list;

/// Mapping of modules in algorithms/src to type of computation
/// and whether deterministic or stochastic
pub const ALGORITHMS_COMPUTATION_MAP: &[(&str, &str, &str)] = &[
    // Data structures
    (
        "data_structures/hash_table.rs",
        "Hashing / separate chaining",
        "Deterministic",
    ),
    (
        "data_structures/singly_linked_list.rs",
        "Data structure operations",
        "Deterministic",
    ),
    (
        "data_structures/doubly_linked_list.rs",
        "Data structure operations",
        "Deterministic",
    ),
    (
        "data_structures/queue.rs",
        "Data structure operations",
        "Deterministic",
    ),
    (
        "data_structures/max_binary_heap.rs",
        "Priority ordering",
        "Deterministic",
    ),
    (
        "data_structures/binary_search_tree.rs",
        "Tree search / traversal",
        "Deterministic",
    ),
    // Graph
    ("graph/adj_list.rs", "Graph representation", "Deterministic"),
    ("graph/traversal.rs", "Graph traversal", "Deterministic"),
    // Sorting
    ("sorting/bubble_sort.rs", "Sorting", "Deterministic"),
    ("sorting/selection_sort.rs", "Sorting", "Deterministic"),
    ("sorting/insertion_sort.rs", "Sorting", "Deterministic"),
    ("sorting/merge_sort.rs", "Sorting", "Deterministic"),
    ("sorting/quick_sort.rs", "Sorting", "Deterministic"),
    ("sorting/radix_sort.rs", "Non-comparison sorting", "Deterministic"),
    ("sorting/comparator.rs", "Sorting", "Deterministic"),
    // Searching
    ("searching/binary_search.rs", "Search", "Deterministic"),
    ("searching/linear_search.rs", "Search", "Deterministic"),
    // Problem solving
    (
        "problem_solving/frequency_counter.rs",
        "Counting",
        "Deterministic",
    ),
    (
        "problem_solving/multiple_pointers.rs",
        "Two-pointer scan",
        "Deterministic",
    ),
    (
        "problem_solving/sliding_window.rs",
        "Windowed aggregation",
        "Deterministic",
    ),
    ("problem_solving/recursion.rs", "Recursion", "Deterministic"),
    // Numerical
    (
        "numerical/add_up_to.rs",
        "Numerical computation",
        "Deterministic",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn every_mapped_module_exists() {
        let src = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
        for (path, _, _) in ALGORITHMS_COMPUTATION_MAP {
            assert!(src.join(path).is_file(), "{path} is listed but missing");
        }
    }
}

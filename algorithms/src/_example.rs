//! Standalone runner that replays the driver examples for every module in `algorithms/src`

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use algorithms::computation_map::ALGORITHMS_COMPUTATION_MAP;
use algorithms::logger::initialize_logger;
use algorithms::{polynomial_hash, HashTable, HashTableConfig};

#[derive(Parser)]
#[command(name = "algorithms-example", about = "Replays the algorithm exercise drivers", version)]
struct Cli {
    /// JSON hash table config
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the configured hash table capacity
    #[arg(long)]
    capacity: Option<usize>,
    #[arg(long, value_enum, default_value_t = Section::All)]
    section: Section,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum Section {
    All,
    HashTable,
    Sorting,
    Searching,
    DataStructures,
    Graph,
    ProblemSolving,
    Numerical,
}

impl Section {
    fn includes(self, other: Section) -> bool {
        self == Section::All || self == other
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    initialize_logger();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => HashTableConfig::load(path)?,
        None => HashTableConfig::default(),
    };
    if let Some(capacity) = cli.capacity {
        config.capacity = capacity;
    }

    if cli.section == Section::All {
        println!("=== Algorithms Computation Map ===");
        for (path, comp_type, determinism) in ALGORITHMS_COMPUTATION_MAP.iter() {
            println!("{:<45} | {:<28} | {}", path, comp_type, determinism);
        }
    }

    println!("\n=== Sanity Check Examples ===");

    if cli.section.includes(Section::HashTable) {
        hash_table_examples(&config)?;
    }
    if cli.section.includes(Section::Sorting) {
        sorting_examples();
    }
    if cli.section.includes(Section::Searching) {
        searching_examples();
    }
    if cli.section.includes(Section::DataStructures) {
        data_structure_examples();
    }
    if cli.section.includes(Section::Graph) {
        graph_examples()?;
    }
    if cli.section.includes(Section::ProblemSolving) {
        problem_solving_examples();
    }
    if cli.section.includes(Section::Numerical) {
        numerical_examples();
    }
    Ok(())
}

fn hash_table_examples(config: &HashTableConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("\n--- Hash table ---");
    for key in ["hello", "goodbye", "sidney"] {
        println!("hash({key:?}, 13) = {}", polynomial_hash(key, 13));
    }

    let mut ht = HashTable::with_config(config)?;
    ht.set("01", "Cats");
    ht.set("06", "Cats");
    ht.set("02", "Dogs");
    ht.set("03", "Trees");
    ht.set("04", "Flowers");
    ht.set("05", "Coffee");

    println!("{ht:?}");
    println!("get(\"03\") = {:?}", ht.get("03"));
    println!("get(\"hello\") = {:?}", ht.get("hello"));
    println!("values() = {:?}", ht.values());
    println!("keys() = {:?}", ht.keys());
    Ok(())
}

fn sorting_examples() {
    use algorithms::sorting::bubble_sort::bubble_sort;
    use algorithms::sorting::comparator::{sort_by_length, sort_numeric};
    use algorithms::sorting::insertion_sort::insertion_sort;
    use algorithms::sorting::merge_sort::{merge_arrays, merge_sort};
    use algorithms::sorting::quick_sort::{pivot, quick_sort};
    use algorithms::sorting::radix_sort::radix_sort;
    use algorithms::sorting::selection_sort::selection_sort;

    println!("\n--- Sorting ---");
    let mut arr = [10, 5, 4, 30, 2];
    bubble_sort(&mut arr);
    println!("Bubble sort: {arr:?}");

    let mut arr = [34, 22, 10, 19, 17];
    selection_sort(&mut arr);
    println!("Selection sort: {arr:?}");

    let mut arr = [34, 22, 10, 19, 17];
    insertion_sort(&mut arr);
    println!("Insertion sort: {arr:?}");

    println!("Merge arrays: {:?}", merge_arrays(&[1, 2, 3], &[5, 10, 15, 20]));
    println!("Merge sort: {:?}", merge_sort(&[10, 24, 76, 73, 72, 1, 9]));

    println!("Pivot index: {}", pivot(&mut [5, 2, 1, 8, 4, 7, 6, 3]));
    let mut arr = [4, 6, 9, 1, 2, 5, 3];
    quick_sort(&mut arr);
    println!("Quick sort: {arr:?}");

    println!("Radix sort: {:?}", radix_sort(&[23, 345, 54678, 12, 2345, 9852]));

    let mut nums = [6, 15, 4, 10];
    sort_numeric(&mut nums);
    println!("Numeric comparator: {nums:?}");
    let mut words = ["Zebra", "Coconut", "Apple", "Pine", "Woods"];
    sort_by_length(&mut words);
    println!("Length comparator: {words:?}");
}

fn searching_examples() {
    use algorithms::searching::binary_search::binary_search;
    use algorithms::searching::linear_search::linear_search;

    println!("\n--- Searching ---");
    println!("Linear search 15: {:?}", linear_search(&[10, 15, 20, 25, 30], &15));
    println!("Linear search 6: {:?}", linear_search(&[1, 2, 3, 4, 5], &6));

    let sorted = [5, 6, 10, 13, 14, 18, 30, 34, 35, 37, 40, 44, 64, 79, 84, 86, 95, 96, 98, 99];
    println!("Binary search 10: {:?}", binary_search(&sorted, &10));
    println!("Binary search 95: {:?}", binary_search(&sorted, &95));
    println!("Binary search 100: {:?}", binary_search(&sorted, &100));
}

fn data_structure_examples() {
    use algorithms::data_structures::binary_search_tree::BinarySearchTree;
    use algorithms::data_structures::doubly_linked_list::DoublyLinkedList;
    use algorithms::data_structures::max_binary_heap::MaxBinaryHeap;
    use algorithms::data_structures::queue::Queue;
    use algorithms::data_structures::singly_linked_list::SinglyLinkedList;

    println!("\n--- Data structures ---");
    let mut list = SinglyLinkedList::new();
    for v in [100, 200, 300, 400] {
        list.push(v);
    }
    println!("Singly linked list: {:?}", list.to_vec());
    list.reverse();
    println!("Reversed: {:?}", list.to_vec());

    let mut dll = DoublyLinkedList::new();
    for v in [100, 200, 300, 400] {
        dll.push(v);
    }
    println!("Doubly linked list insert(1, 150): {}", dll.insert(1, 150));
    println!("Doubly linked list: {:?}", dll.to_vec());

    let mut q = Queue::new();
    q.enqueue(100);
    q.enqueue(200);
    q.enqueue(300);
    println!("Queue enqueue(400) -> size {}", q.enqueue(400));
    println!("Queue dequeue -> {:?}", q.dequeue());

    let mut heap = MaxBinaryHeap::from_vec(vec![41, 39, 33, 18, 27, 12]);
    heap.insert(55);
    println!("Max binary heap after insert(55): {:?}", heap.as_slice());

    let mut tree = BinarySearchTree::new();
    for v in [10, 5, 13, 7, 2] {
        tree.insert(v);
    }
    println!("BFS: {:?}", tree.bfs());
    println!("DFS PreOrder: {:?}", tree.dfs_pre_order());
    println!("DFS PostOrder: {:?}", tree.dfs_post_order());
    println!("DFS InOrder: {:?}", tree.dfs_in_order());
}

fn graph_examples() -> Result<(), Box<dyn std::error::Error>> {
    use algorithms::graph::traversal::{bfs, dfs_iterative, dfs_recursive};
    use algorithms::graph::Graph;

    println!("\n--- Graph ---");
    let mut g = Graph::new();
    for v in ["Apple", "Bread", "Eggs", "Grapes", "Potato Chips"] {
        g.add_vertex(v);
    }
    g.add_edge("Apple", "Bread")?;
    g.add_edge("Potato Chips", "Grapes")?;
    g.add_edge("Grapes", "Eggs")?;
    g.add_edge("Eggs", "Bread")?;
    g.add_edge("Apple", "Grapes")?;

    println!("BFS from Apple: {:?}", bfs(&g, "Apple")?);
    println!("DFS (recursive) from Apple: {:?}", dfs_recursive(&g, "Apple")?);
    println!("DFS (iterative) from Apple: {:?}", dfs_iterative(&g, "Apple")?);

    g.remove_vertex("Apple")?;
    println!("{g:?}");
    Ok(())
}

fn problem_solving_examples() {
    use algorithms::problem_solving::frequency_counter::{char_count, same, same_frequency, valid_anagram};
    use algorithms::problem_solving::multiple_pointers::{average_pair, count_unique_values, sum_zero};
    use algorithms::problem_solving::recursion::{collect_odd_values, product_of_array, reverse};
    use algorithms::problem_solving::sliding_window::max_subarray_sum;

    println!("\n--- Problem solving ---");
    println!("same([1,2,3,2], [9,1,4,4]) = {}", same(&[1, 2, 3, 2], &[9, 1, 4, 4]));
    for (a, b) in [("anagram", "nagaram"), ("rat", "car"), ("aaz", "zza")] {
        println!("valid_anagram({a:?}, {b:?}) = {}", valid_anagram(a, b));
    }
    println!("char_count(\"HELLO world\") = {:?}", char_count("HELLO world"));
    println!("same_frequency(182, 281) = {}", same_frequency(182, 281));

    println!("count_unique_values = {}", count_unique_values(&[1, 2, 3, 4, 4, 4, 7, 7, 12, 12, 13]));
    println!("sum_zero = {:?}", sum_zero(&[-3, -2, -1, 0, 1, 2, 3]));
    println!("average_pair(8) = {}", average_pair(&[1, 3, 3, 5, 6, 7, 10, 12, 19], 8.0));

    println!("max_subarray_sum(n=2) = {:?}", max_subarray_sum(&[1, 2, 5, 2, 8, 1, 5], 2));

    println!("product_of_array([1,2,3,10]) = {}", product_of_array(&[1, 2, 3, 10]));
    println!("reverse(\"awesome\") = {}", reverse("awesome"));
    println!("collect_odd_values = {:?}", collect_odd_values(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]));
}

fn numerical_examples() {
    use algorithms::numerical::add_up_to::{add_up_to, timed};

    println!("\n--- Numerical ---");
    let (sum, elapsed) = timed(|| add_up_to(10_000_000_000));
    println!("add_up_to(10_000_000_000) = {sum} in {:.6} seconds", elapsed.as_secs_f64());
}

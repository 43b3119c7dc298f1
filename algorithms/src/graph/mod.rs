pub mod adj_list;
pub mod traversal;

pub use adj_list::Graph;

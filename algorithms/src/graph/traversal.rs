//! Breadth- and depth-first traversal of a [`Graph`] from a start vertex.
//!
//! Neighbours are explored in adjacency order; each vertex is emitted once.

use std::collections::{HashSet, VecDeque};

use super::adj_list::Graph;
use crate::error::GraphError;

pub fn bfs(graph: &Graph, start: &str) -> Result<Vec<String>, GraphError> {
    graph.require(start)?;
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue = VecDeque::new();
    let mut order = Vec::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(vertex) = queue.pop_front() {
        order.push(vertex.to_string());
        for n in graph.neighbours(vertex).unwrap_or_default() {
            if visited.insert(n.as_str()) {
                queue.push_back(n.as_str());
            }
        }
    }
    Ok(order)
}

pub fn dfs_recursive(graph: &Graph, start: &str) -> Result<Vec<String>, GraphError> {
    fn visit<'a>(vertex: &'a str, graph: &'a Graph, visited: &mut HashSet<&'a str>, out: &mut Vec<String>) {
        visited.insert(vertex);
        out.push(vertex.to_string());
        for n in graph.neighbours(vertex).unwrap_or_default() {
            if !visited.contains(n.as_str()) {
                visit(n, graph, visited, out);
            }
        }
    }

    graph.require(start)?;
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    visit(start, graph, &mut visited, &mut order);
    Ok(order)
}

/// Stack-based DFS. Neighbours are pushed in adjacency order, so the last
/// neighbour is explored first; the order differs from [`dfs_recursive`].
pub fn dfs_iterative(graph: &Graph, start: &str) -> Result<Vec<String>, GraphError> {
    graph.require(start)?;
    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack = vec![start];
    let mut order = Vec::new();

    visited.insert(start);
    while let Some(vertex) = stack.pop() {
        order.push(vertex.to_string());
        for n in graph.neighbours(vertex).unwrap_or_default() {
            if visited.insert(n.as_str()) {
                stack.push(n.as_str());
            }
        }
    }
    Ok(order)
}

//! Undirected adjacency-list graph keyed by vertex name.
//!
//! Variables:
//!   V       = number of vertices
//!   E       = number of undirected edges
//!   adj[u]  = Vec<String> of neighbours of u, in edge insertion order
//!
//! Equations:
//!   add_edge(u, v):    adj[u].push(v), adj[v].push(u),  E += 1
//!   remove_edge(u, v): adj[u] -= {v}, adj[v] -= {u}     O(deg u + deg v)
//!   remove_vertex(u):  remove_edge(u, w) for w in adj[u], drop adj[u]
//!   E = (sum_u |adj[u]|) / 2
//!
//! Vertices are kept in a BTreeMap, so `vertices()` is in name order.

use std::collections::BTreeMap;

use log::warn;

use crate::error::GraphError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adj: BTreeMap<String, Vec<String>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `vertex` with no edges. Returns false if it already exists.
    pub fn add_vertex(&mut self, vertex: impl Into<String>) -> bool {
        let vertex = vertex.into();
        if self.adj.contains_key(&vertex) {
            return false;
        }
        self.adj.insert(vertex, Vec::new());
        true
    }

    /// Add an undirected edge between two existing vertices.
    pub fn add_edge(&mut self, v1: &str, v2: &str) -> Result<(), GraphError> {
        self.require(v1)?;
        self.require(v2)?;
        if let Some(list) = self.adj.get_mut(v1) {
            list.push(v2.to_string());
        }
        if let Some(list) = self.adj.get_mut(v2) {
            list.push(v1.to_string());
        }
        Ok(())
    }

    pub fn remove_edge(&mut self, v1: &str, v2: &str) -> Result<(), GraphError> {
        self.require(v1)?;
        self.require(v2)?;
        if let Some(list) = self.adj.get_mut(v1) {
            list.retain(|v| v != v2);
        }
        if let Some(list) = self.adj.get_mut(v2) {
            list.retain(|v| v != v1);
        }
        Ok(())
    }

    /// Remove `vertex` and every edge touching it.
    pub fn remove_vertex(&mut self, vertex: &str) -> Result<(), GraphError> {
        self.require(vertex)?;
        let neighbours = self.adj.remove(vertex).unwrap_or_default();
        for n in &neighbours {
            if let Some(list) = self.adj.get_mut(n) {
                list.retain(|v| v != vertex);
            }
        }
        Ok(())
    }

    pub fn neighbours(&self, vertex: &str) -> Option<&[String]> {
        self.adj.get(vertex).map(Vec::as_slice)
    }

    pub fn contains_vertex(&self, vertex: &str) -> bool {
        self.adj.contains_key(vertex)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &str> + '_ {
        self.adj.keys().map(String::as_str)
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.values().map(|n| n.len()).sum::<usize>() / 2
    }

    pub(crate) fn require(&self, vertex: &str) -> Result<(), GraphError> {
        if self.adj.contains_key(vertex) {
            return Ok(());
        }
        warn!("unknown vertex `{}`", vertex);
        Err(GraphError::UnknownVertex(vertex.to_string()))
    }
}

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Undirected graph over integer vertex identifiers.
///
/// The adjacency relation is stored in both directions; `verify` checks that
/// invariant once at the ingestion boundary, after which the graph is treated
/// as immutable for the lifetime of a protocol session. Sorted containers keep
/// vertex and edge iteration deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    vertices: BTreeSet<u32>,
    adjacency: BTreeMap<u32, BTreeSet<u32>>,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    /// Registers a vertex. Idempotent.
    pub fn add_vertex(&mut self, v: u32) {
        self.vertices.insert(v);
    }

    /// Stores the edge in both directions. Idempotent. Does not register the
    /// endpoints as vertices; `verify` rejects edges that touch unregistered
    /// vertices.
    pub fn add_edge(&mut self, a: u32, b: u32) {
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
    }

    pub fn has_vertex(&self, v: u32) -> bool {
        self.vertices.contains(&v)
    }

    pub fn has_edge(&self, a: u32, b: u32) -> bool {
        self.adjacency
            .get(&a)
            .is_some_and(|neighbors| neighbors.contains(&b))
    }

    pub fn vertices(&self) -> Vec<u32> {
        self.vertices.iter().copied().collect()
    }

    /// Every undirected edge exactly once, as a sorted `(min, max)` pair.
    pub fn edges(&self) -> Vec<(u32, u32)> {
        let mut edges = Vec::new();
        for (&a, neighbors) in &self.adjacency {
            for &b in neighbors {
                if a <= b {
                    edges.push((a, b));
                }
            }
        }
        edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Walks the adjacency structure and fails if any stored edge lacks its
    /// mirror or references an unregistered vertex. Run once after
    /// construction (or after deserializing a peer's announcement); a graph
    /// that passes is never partially valid afterwards.
    pub fn verify(&self) -> Result<()> {
        for (&a, neighbors) in &self.adjacency {
            if !self.vertices.contains(&a) {
                return Err(Error::InvalidGraph(format!(
                    "edge endpoint {a} is not a registered vertex"
                )));
            }
            for &b in neighbors {
                if !self.vertices.contains(&b) {
                    return Err(Error::InvalidGraph(format!(
                        "edge ({a}, {b}) references unregistered vertex {b}"
                    )));
                }
                if !self.has_edge(b, a) {
                    return Err(Error::InvalidGraph(format!(
                        "edge ({a}, {b}) is missing its mirror ({b}, {a})"
                    )));
                }
            }
        }
        Ok(())
    }
}

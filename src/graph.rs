//! # Graph
//!
//! An undirected weighted graph and the cut objectives built on it. The
//! graph stores each edge once with its endpoints normalized, so the cut
//! weight of an assignment is a single pass over the edge list.
//!
//! ## Example
//!
//! ```rust
//! use glsearch::graph::Graph;
//!
//! let mut graph = Graph::new(3).unwrap();
//! graph.add_edge(0, 1, 1.0).unwrap();
//! graph.add_edge(1, 2, 2.0).unwrap();
//!
//! // Putting node 1 alone on one side cuts both edges.
//! assert_eq!(graph.cut_weight(&[false, true, false]), 3.0);
//! ```

use crate::error::{Result, SearchError};
use crate::objective::Objective;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Edge {
    a: usize,
    b: usize,
    weight: f64,
}

/// An undirected weighted graph over nodes `0..node_count`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    nodes: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates a graph with `nodes` nodes and no edges.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Configuration` if `nodes` is zero.
    pub fn new(nodes: usize) -> Result<Self> {
        if nodes == 0 {
            return Err(SearchError::Configuration(
                "Graph must have at least one node".to_string(),
            ));
        }
        Ok(Self {
            nodes,
            edges: Vec::new(),
        })
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Returns the number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Adds an undirected edge between `a` and `b`. Adding an edge that
    /// already exists accumulates the weight onto it.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Configuration` if either endpoint is out of
    /// range, if `a == b`, or if `weight` is not finite.
    pub fn add_edge(&mut self, a: usize, b: usize, weight: f64) -> Result<()> {
        if a >= self.nodes || b >= self.nodes {
            return Err(SearchError::Configuration(format!(
                "Edge ({}, {}) is out of range for a graph with {} nodes",
                a, b, self.nodes
            )));
        }
        if a == b {
            return Err(SearchError::Configuration(format!(
                "Self-loop on node {} is not allowed",
                a
            )));
        }
        if !weight.is_finite() {
            return Err(SearchError::Configuration(format!(
                "Edge weight must be finite, got {}",
                weight
            )));
        }

        let (a, b) = if a < b { (a, b) } else { (b, a) };
        if let Some(edge) = self.edges.iter_mut().find(|e| e.a == a && e.b == b) {
            edge.weight += weight;
        } else {
            self.edges.push(Edge { a, b, weight });
        }
        Ok(())
    }

    /// Sums the weights of the edges whose endpoints fall on different sides
    /// of the assignment. Each edge contributes at most once.
    ///
    /// `bits` must have one entry per node.
    pub fn cut_weight(&self, bits: &[bool]) -> f64 {
        debug_assert_eq!(bits.len(), self.nodes);
        self.edges
            .iter()
            .filter(|e| bits[e.a] != bits[e.b])
            .map(|e| e.weight)
            .sum()
    }
}

/// The raw cut weight as an objective.
///
/// Note that the unconstrained optimum is degenerate: an assignment with all
/// nodes on one side cuts nothing. Use [`BalancedCut`] unless balance is
/// handled elsewhere.
impl Objective for Graph {
    fn assignment_len(&self) -> usize {
        self.nodes
    }

    fn evaluate(&self, bits: &[bool]) -> f64 {
        self.cut_weight(bits)
    }
}

/// Cut weight plus a soft balance penalty: each node of side-count
/// difference adds `penalty` to the score, steering the search toward even
/// bipartitions without forbidding uneven ones.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BalancedCut {
    graph: Graph,
    penalty: f64,
}

impl BalancedCut {
    /// Wraps a graph with a per-node imbalance penalty.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Configuration` if `penalty` is not finite and
    /// positive.
    pub fn new(graph: Graph, penalty: f64) -> Result<Self> {
        if !penalty.is_finite() || penalty <= 0.0 {
            return Err(SearchError::Configuration(format!(
                "Balance penalty must be finite and positive, got {}",
                penalty
            )));
        }
        Ok(Self { graph, penalty })
    }

    /// Returns the wrapped graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }
}

impl Objective for BalancedCut {
    fn assignment_len(&self) -> usize {
        self.graph.node_count()
    }

    fn evaluate(&self, bits: &[bool]) -> f64 {
        let ones = bits.iter().filter(|&&b| b).count();
        let zeros = bits.len() - ones;
        let imbalance = ones.abs_diff(zeros) as f64;
        self.graph.cut_weight(bits) + self.penalty * imbalance
    }
}

//! Weighted node/link graphs built from traced partner chains.

mod builder;
pub mod palette;
pub mod visualizer;

pub use builder::{GraphBuilder, build};
pub use palette::Palette;

use serde::{Deserialize, Serialize};

/// A directed, weighted link between two labels of a [`FlowGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEdge {
    /// Index of the source label.
    pub source: usize,
    /// Index of the target label.
    pub target: usize,
    /// How many traced chains pass through this link.
    pub weight: u32,
}

/// A flow diagram graph: unique labels, aligned colors, and weighted edges.
///
/// Every edge index is a valid position into `labels`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowGraph {
    pub labels: Vec<String>,
    pub colors: Vec<String>,
    pub edges: Vec<FlowEdge>,
}

impl FlowGraph {
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.edges.is_empty()
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// The color assigned to `label`, if it is part of the graph.
    pub fn color_of(&self, label: &str) -> Option<&str> {
        self.index_of(label).map(|i| self.colors[i].as_str())
    }

    /// The weight of the link `source -> target`, if present.
    pub fn weight(&self, source: &str, target: &str) -> Option<u32> {
        let (s, t) = (self.index_of(source)?, self.index_of(target)?);
        self.edges
            .iter()
            .find(|e| e.source == s && e.target == t)
            .map(|e| e.weight)
    }

    /// All links leaving `label`.
    pub fn outgoing(&self, label: &str) -> Vec<FlowEdge> {
        match self.index_of(label) {
            Some(i) => self.edges.iter().filter(|e| e.source == i).copied().collect(),
            None => Vec::new(),
        }
    }

    /// All links entering `label`.
    pub fn incoming(&self, label: &str) -> Vec<FlowEdge> {
        match self.index_of(label) {
            Some(i) => self.edges.iter().filter(|e| e.target == i).copied().collect(),
            None => Vec::new(),
        }
    }

    /// Source indices, aligned with [`FlowGraph::targets`] and [`FlowGraph::values`].
    pub fn sources(&self) -> Vec<usize> {
        self.edges.iter().map(|e| e.source).collect()
    }

    pub fn targets(&self) -> Vec<usize> {
        self.edges.iter().map(|e| e.target).collect()
    }

    pub fn values(&self) -> Vec<u32> {
        self.edges.iter().map(|e| e.weight).collect()
    }
}

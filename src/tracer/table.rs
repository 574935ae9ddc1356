use crate::relation::Direction;
use ahash::AHashMap;
use itertools::Itertools;
use serde::Serialize;

/// How a single partner was first reached during a trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitRecord {
    /// The partner that was discovered.
    pub name: String,
    /// The level at which it was discovered; direct partners of the root are at level 1.
    #[serde(rename = "level")]
    pub depth: usize,
    /// The reporters walked from the root up to, but excluding, `name`.
    pub chain: Vec<String>,
}

impl VisitRecord {
    /// The chain followed by the record's own name: root first, `name` last.
    pub fn full_chain(&self) -> impl Iterator<Item = &str> {
        self.chain
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.name.as_str()))
    }
}

/// Every partner reachable from a root, keyed by name, in discovery order.
#[derive(Debug, Clone, Serialize)]
pub struct TraceTable {
    root: String,
    trade: Direction,
    records: Vec<VisitRecord>,
    #[serde(skip)]
    index: AHashMap<String, usize>,
    truncated: bool,
}

impl PartialEq for TraceTable {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
            && self.trade == other.trade
            && self.records == other.records
            && self.truncated == other.truncated
    }
}

impl TraceTable {
    pub fn new(root: impl Into<String>, trade: Direction) -> Self {
        Self {
            root: root.into(),
            trade,
            records: Vec::new(),
            index: AHashMap::new(),
            truncated: false,
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn trade(&self) -> Direction {
        self.trade
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `true` if discovery stopped early because the node cap was reached.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&VisitRecord> {
        self.index.get(name).map(|&i| &self.records[i])
    }

    /// Discovery depth of `name`, if it was discovered.
    pub fn depth_of(&self, name: &str) -> Option<usize> {
        self.get(name).map(|record| record.depth)
    }

    /// The stored chain of `name`; empty for the root and unknown names.
    pub fn chain_of(&self, name: &str) -> &[String] {
        self.get(name)
            .map(|record| record.chain.as_slice())
            .unwrap_or_default()
    }

    /// Records in the order they were discovered.
    pub fn records(&self) -> &[VisitRecord] {
        &self.records
    }

    /// Records ordered by level, ties kept in discovery order.
    ///
    /// This is the order the table is displayed in and the order the graph
    /// builder consumes it in.
    pub fn rows(&self) -> Vec<&VisitRecord> {
        self.records
            .iter()
            .sorted_by_key(|record| record.depth)
            .collect()
    }

    /// Inserts a record unless its name is already present. First discovery wins.
    pub(crate) fn insert(&mut self, record: VisitRecord) -> bool {
        if self.index.contains_key(&record.name) {
            return false;
        }
        self.index.insert(record.name.clone(), self.records.len());
        self.records.push(record);
        true
    }

    pub(crate) fn mark_truncated(&mut self) {
        self.truncated = true;
    }
}

use super::palette::Palette;
use super::{FlowEdge, FlowGraph};
use crate::tracer::TraceTable;
use ahash::AHashMap;
use itertools::Itertools;

/// Responsible for turning a [`TraceTable`] into a [`FlowGraph`].
///
/// Each record contributes its full chain (root, ..., name). Every consecutive
/// pair in that chain is a link, so a link's weight ends up being the number
/// of records whose chain runs through it.
pub struct GraphBuilder<'a> {
    table: &'a TraceTable,
    palette: &'a Palette,
    labels: Vec<&'a str>,
    index: AHashMap<&'a str, usize>,
    /// Per source label: (target label, weight) in the order first linked.
    links: Vec<Vec<(usize, u32)>>,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(table: &'a TraceTable, palette: &'a Palette) -> Self {
        Self {
            table,
            palette,
            labels: Vec::new(),
            index: AHashMap::new(),
            links: Vec::new(),
        }
    }

    pub fn build(mut self) -> FlowGraph {
        let table = self.table;
        for record in table.rows() {
            for (parent, child) in record.full_chain().tuple_windows() {
                self.link(parent, child);
            }
        }

        let colors = self
            .labels
            .iter()
            .map(|label| self.color_for(label).to_string())
            .collect();

        let edges = self
            .links
            .iter()
            .enumerate()
            .flat_map(|(source, targets)| {
                targets.iter().map(move |&(target, weight)| FlowEdge {
                    source,
                    target,
                    weight,
                })
            })
            .collect::<Vec<_>>();

        log::debug!(
            "Built flow graph for '{}': {} nodes, {} links",
            self.table.root(),
            self.labels.len(),
            edges.len()
        );

        FlowGraph {
            labels: self.labels.iter().map(|l| l.to_string()).collect(),
            colors,
            edges,
        }
    }

    /// Returns the label index of `label`, registering it on first sight.
    fn register(&mut self, label: &'a str) -> usize {
        if let Some(&i) = self.index.get(label) {
            return i;
        }
        let i = self.labels.len();
        self.labels.push(label);
        self.index.insert(label, i);
        self.links.push(Vec::new());
        i
    }

    fn link(&mut self, parent: &'a str, child: &'a str) {
        let source = self.register(parent);
        let target = self.register(child);
        let targets = &mut self.links[source];
        match targets.iter_mut().find(|(t, _)| *t == target) {
            Some((_, weight)) => *weight += 1,
            None => targets.push((target, 1)),
        }
    }

    fn color_for(&self, label: &str) -> &'a str {
        let palette = self.palette;
        if label == self.table.root() {
            return palette.root();
        }
        match self.table.depth_of(label) {
            Some(depth) => palette.for_depth(depth),
            None => palette.root(),
        }
    }
}

/// Builds the flow graph of `table`, coloring nodes with `palette`.
pub fn build(table: &TraceTable, palette: &Palette) -> FlowGraph {
    GraphBuilder::new(table, palette).build()
}

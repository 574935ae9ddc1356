//! Partner-chain discovery.
//!
//! Starting from a root reporter, the tracer follows the reporter -> partner
//! relation depth first and records, for every partner it reaches, the level
//! at which it was first found and the chain of reporters that led to it.
//! A name is recorded at most once, which is also what guarantees termination
//! on cyclic relations.

mod formatter;
mod table;

pub use formatter::TraceFormatter;
pub use table::{TraceTable, VisitRecord};

use crate::relation::PartnerSource;
use ahash::AHashSet;

/// Level assigned to the root's direct partners.
pub const FIRST_LEVEL: usize = 1;

/// A configured chain tracer.
#[derive(Debug, Clone, Copy)]
pub struct Tracer {
    max_depth: usize,
    node_limit: Option<usize>,
}

impl Tracer {
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            node_limit: None,
        }
    }

    /// Stops discovery once the table holds `limit` records.
    pub fn with_node_limit(mut self, limit: usize) -> Self {
        self.node_limit = Some(limit);
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn node_limit(&self) -> Option<usize> {
        self.node_limit
    }

    /// Traces every partner reachable from `root` in `relation`.
    ///
    /// The walk is the depth-first recursion "record all new partners of the
    /// current reporter, then descend into each of them in order", unrolled
    /// onto an explicit stack. Partners of a reporter at level `d` are
    /// recorded at level `d`; reporters beyond `max_depth` are not expanded.
    /// The root is visited from the start, so it never shows up as a record
    /// even when some partner reports it back.
    pub fn trace<'a, S>(&self, relation: &'a S, root: &'a str) -> TraceTable
    where
        S: PartnerSource + ?Sized,
    {
        let mut table = TraceTable::new(root, relation.direction());
        let mut visited: AHashSet<&'a str> = AHashSet::new();
        visited.insert(root);

        let mut stack: Vec<(&'a str, usize)> = vec![(root, FIRST_LEVEL)];

        'walk: while let Some((current, depth)) = stack.pop() {
            if depth > self.max_depth {
                continue;
            }

            let mut chain = table.chain_of(current).to_vec();
            chain.push(current.to_string());

            let mut discovered: Vec<&'a str> = Vec::new();
            for partner in relation.partners_of(current) {
                if visited.contains(partner.as_str()) {
                    continue;
                }
                if self.node_limit.is_some_and(|limit| table.len() >= limit) {
                    table.mark_truncated();
                    break 'walk;
                }

                visited.insert(partner.as_str());
                table.insert(VisitRecord {
                    name: partner.clone(),
                    depth,
                    chain: chain.clone(),
                });
                discovered.push(partner.as_str());
            }

            // Reversed so the first discovered partner is expanded first.
            stack.extend(discovered.into_iter().rev().map(|p| (p, depth + 1)));
        }

        log::debug!(
            "Traced {} {} partner(s) from '{}' (max depth {}{})",
            table.len(),
            table.trade(),
            root,
            self.max_depth,
            if table.is_truncated() { ", truncated" } else { "" }
        );
        table
    }
}

/// Traces `root` through `relation`, expanding at most `max_depth` levels.
pub fn trace<S>(relation: &S, root: &str, max_depth: usize) -> TraceTable
where
    S: PartnerSource + ?Sized,
{
    Tracer::new(max_depth).trace(relation, root)
}

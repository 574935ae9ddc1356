use super::definition::{Direction, RelationRow};
use ahash::AHashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Anything the chain tracer can ask "who are the partners of this reporter?".
///
/// Partners must be returned in a stable order; the tracer's discovery order
/// (and therefore depths, colors and label order) follows it.
pub trait PartnerSource {
    /// The trade direction every relationship in this source shares.
    fn direction(&self) -> Direction;

    /// The partners of `reporter`, or an empty slice if it never reports.
    fn partners_of(&self, reporter: &str) -> &[String];
}

/// The in-memory table of trade relationships for all directions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationStore {
    rows: Vec<RelationRow>,
}

impl RelationStore {
    pub fn new(rows: Vec<RelationRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[RelationRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push(&mut self, row: RelationRow) {
        self.rows.push(row);
    }

    /// All distinct reporter names across every direction, sorted.
    pub fn reporters(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.reporter.as_str())
            .unique()
            .sorted()
            .map(str::to_string)
            .collect()
    }

    /// Builds the adjacency view for one direction.
    ///
    /// Rows are ordered by value, largest first; rows with equal values keep
    /// the order in which they were loaded.
    pub fn view(&self, direction: Direction) -> RelationView {
        let mut partners: AHashMap<String, Vec<String>> = AHashMap::new();
        let ordered = self
            .rows
            .iter()
            .filter(|row| row.direction == direction)
            .sorted_by(|a, b| b.value.total_cmp(&a.value));

        for row in ordered {
            partners
                .entry(row.reporter.clone())
                .or_default()
                .push(row.partner.clone());
        }

        RelationView {
            direction,
            partners,
        }
    }
}

impl FromIterator<RelationRow> for RelationStore {
    fn from_iter<I: IntoIterator<Item = RelationRow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// The relation store filtered to a single direction, indexed by reporter.
#[derive(Debug, Clone)]
pub struct RelationView {
    direction: Direction,
    partners: AHashMap<String, Vec<String>>,
}

impl RelationView {
    /// Number of distinct reporters in this view.
    pub fn reporter_count(&self) -> usize {
        self.partners.len()
    }
}

impl PartnerSource for RelationView {
    fn direction(&self) -> Direction {
        self.direction
    }

    fn partners_of(&self, reporter: &str) -> &[String] {
        self.partners
            .get(reporter)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

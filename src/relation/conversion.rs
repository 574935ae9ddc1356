use super::definition::RelationRow;
use super::store::RelationStore;

/// A trait for custom trade data models that can be converted into relation rows.
///
/// This is the extension point for feeding the tracer from a source other than
/// the bundled trade-summary loader. Implement it on your own record type and
/// collect the rows into a [`RelationStore`].
///
/// # Example
///
/// ```rust
/// use tradeflow::relation::{Direction, IntoRelations, RelationRow, RelationStore};
///
/// struct Shipment { from: String, to: String, tonnes: f64 }
/// struct Manifest(Vec<Shipment>);
///
/// impl IntoRelations for Manifest {
///     fn into_relations(self) -> Vec<RelationRow> {
///         self.0
///             .into_iter()
///             .map(|s| RelationRow::new(s.from, s.to, Direction::Export, s.tonnes))
///             .collect()
///     }
/// }
///
/// let manifest = Manifest(vec![Shipment { from: "X".into(), to: "Y".into(), tonnes: 4.0 }]);
/// let store = RelationStore::from_relations(manifest);
/// assert_eq!(store.len(), 1);
/// ```
pub trait IntoRelations {
    /// Consumes the object and converts it into normalized relation rows.
    fn into_relations(self) -> Vec<RelationRow>;
}

impl IntoRelations for Vec<RelationRow> {
    fn into_relations(self) -> Vec<RelationRow> {
        self
    }
}

impl RelationStore {
    pub fn from_relations(source: impl IntoRelations) -> Self {
        Self::new(source.into_relations())
    }
}

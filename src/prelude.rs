//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the tradeflow crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use tradeflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let config = FlowConfig::from_file("tradeflow.json")?;
//! let store = config.loader().load("data/")?;
//!
//! let orchestrator = Orchestrator::builder(store).with_config(&config).build();
//! if let Some(output) = orchestrator.run("China", "Export") {
//!     println!("{}", TraceFormatter::format_table(&output.trace, config.table_rows));
//!     println!("{}", output.diagram.to_sankey_figure());
//! }
//! # Ok(())
//! # }
//! ```

// Querying
pub use crate::orchestrator::{Orchestrator, OrchestratorBuilder, WorkloadOutput};

// Relation data
pub use crate::relation::{
    DatasetLoader, Direction, IntoRelations, PartnerSource, RawTradeRecord, RelationRow,
    RelationStore, RelationView,
};

// Tracing and graph building
pub use crate::diagram::DiagramPayload;
pub use crate::graph::{FlowEdge, FlowGraph, Palette};
pub use crate::tracer::{TraceFormatter, TraceTable, Tracer, VisitRecord};

// Configuration and errors
pub use crate::config::FlowConfig;
pub use crate::error::{ConfigError, DatasetError, DirectionParseError, SnapshotError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

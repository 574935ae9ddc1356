//! # tradeflow - Trade Partner Chains as Flow Diagrams
//!
//! **tradeflow** discovers how trade spreads from one country through its
//! top partners, their top partners, and so on, and turns the result into a
//! weighted node/link graph ready for a Sankey diagram.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Data**: Build a [`relation::RelationStore`] with the
//!     [`relation::DatasetLoader`], from a binary snapshot, or from your own
//!     records through the [`relation::IntoRelations`] trait.
//! 2.  **Create an Orchestrator**: `Orchestrator::builder(store)` builds the
//!     per-direction views once. Tune the depth bound, node cap and palette
//!     on the builder or through a [`config::FlowConfig`].
//! 3.  **Query**: `run(country, direction)` traces the partner chains,
//!     builds the flow graph and assembles the titled diagram payload.
//!
//! ## Quick Start
//!
//! ```rust
//! use tradeflow::prelude::*;
//!
//! let store: RelationStore = vec![
//!     RelationRow::new("X", "Y", Direction::Export, 10.0),
//!     RelationRow::new("Y", "Z", Direction::Export, 4.0),
//! ]
//! .into_iter()
//! .collect();
//!
//! let orchestrator = Orchestrator::builder(store).with_max_depth(10).build();
//! let output = orchestrator.run("X", "Export").expect("known direction");
//!
//! assert_eq!(output.diagram.title, "X, (Export), (3)");
//! assert_eq!(output.diagram.graph.labels, ["X", "Y", "Z"]);
//! assert_eq!(output.trace.depth_of("Z"), Some(2));
//!
//! // Unknown directions produce nothing to render rather than an error.
//! assert!(orchestrator.run("X", "Transit").is_none());
//! ```

pub mod config;
pub mod diagram;
pub mod error;
pub mod graph;
pub mod orchestrator;
pub mod prelude;
pub mod relation;
pub mod tracer;

#[cfg(feature = "python-bindings")]
mod python;

use crate::config::{DEFAULT_MAX_DEPTH, FlowConfig};
use crate::diagram::{self, DiagramPayload};
use crate::graph::{self, Palette};
use crate::relation::{Direction, PartnerSource, RelationStore, RelationView};
use crate::tracer::{TraceTable, Tracer};
use serde::Serialize;

/// Everything one query produces: the diagram and the trace it was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkloadOutput {
    pub diagram: DiagramPayload,
    pub trace: TraceTable,
}

/// Answers "which partner chains start at this country?" queries.
///
/// The relation views are built once at construction and only read
/// afterwards; every query owns its own trace and graph.
pub struct Orchestrator {
    import_view: RelationView,
    export_view: RelationView,
    countries: Vec<String>,
    tracer: Tracer,
    palette: Palette,
}

pub struct OrchestratorBuilder {
    store: RelationStore,
    max_depth: usize,
    node_limit: Option<usize>,
    palette: Palette,
}

impl OrchestratorBuilder {
    pub fn new(store: RelationStore) -> Self {
        Self {
            store,
            max_depth: DEFAULT_MAX_DEPTH,
            node_limit: None,
            palette: Palette::default(),
        }
    }

    /// Applies the tracing and coloring settings of `config`.
    pub fn with_config(mut self, config: &FlowConfig) -> Self {
        self.max_depth = config.max_depth;
        self.node_limit = config.node_limit;
        self.palette = config.palette.clone();
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_node_limit(mut self, limit: usize) -> Self {
        self.node_limit = Some(limit);
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn build(self) -> Orchestrator {
        let mut tracer = Tracer::new(self.max_depth);
        if let Some(limit) = self.node_limit {
            tracer = tracer.with_node_limit(limit);
        }

        let orchestrator = Orchestrator {
            import_view: self.store.view(Direction::Import),
            export_view: self.store.view(Direction::Export),
            countries: self.store.reporters(),
            tracer,
            palette: self.palette,
        };
        log::debug!(
            "Orchestrator ready: {} countries, {} import / {} export reporters",
            orchestrator.countries.len(),
            orchestrator.import_view.reporter_count(),
            orchestrator.export_view.reporter_count()
        );
        orchestrator
    }
}

impl Orchestrator {
    pub fn builder(store: RelationStore) -> OrchestratorBuilder {
        OrchestratorBuilder::new(store)
    }

    /// An orchestrator with the default depth bound and palette.
    pub fn new(store: RelationStore) -> Self {
        Self::builder(store).build()
    }

    /// Every reporter in the store, sorted; the choices a UI offers.
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// The direction tokens [`Orchestrator::run`] accepts.
    pub fn directions(&self) -> Vec<&'static str> {
        Direction::ALL.iter().map(Direction::as_str).collect()
    }

    pub fn view(&self, direction: Direction) -> &RelationView {
        match direction {
            Direction::Import => &self.import_view,
            Direction::Export => &self.export_view,
        }
    }

    /// Runs one query from UI tokens.
    ///
    /// Returns `None` when `direction` is not a known trade direction, which
    /// callers should treat as "nothing to render". An unknown country is not
    /// an error: it produces an empty trace and an empty graph.
    pub fn run(&self, country: &str, direction: &str) -> Option<WorkloadOutput> {
        match direction.parse::<Direction>() {
            Ok(direction) => Some(self.run_direction(country, direction)),
            Err(e) => {
                log::warn!("Nothing to render for '{}': {}", country, e);
                None
            }
        }
    }

    /// Traces `country`, builds its flow graph and assembles the diagram.
    pub fn run_direction(&self, country: &str, direction: Direction) -> WorkloadOutput {
        let view = self.view(direction);
        let trace = self.tracer.trace(view, country);
        let graph = graph::build(&trace, &self.palette);
        let node_count = graph.node_count();
        let diagram = diagram::assemble(graph, country, view.direction(), node_count);

        log::info!(
            "Query '{}' ({}): {} partners traced, {} nodes, {} links",
            country,
            direction,
            trace.len(),
            node_count,
            diagram.graph.edges.len()
        );

        WorkloadOutput { diagram, trace }
    }
}

use crate::config::FlowConfig;
use crate::orchestrator::{Orchestrator, WorkloadOutput};
use crate::relation::RelationStore;
use crate::tracer::TraceFormatter;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

impl<'py> IntoPyObject<'py> for WorkloadOutput {
    type Target = PyDict;
    type Output = Bound<'py, Self::Target>;
    type Error = PyErr;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let dict = PyDict::new(py);

        dict.set_item("title", &self.diagram.title)?;
        dict.set_item("figure", self.diagram.to_sankey_figure().to_string())?;

        let rows = PyList::empty(py);
        for record in self.trace.rows() {
            let row = PyDict::new(py);
            row.set_item("name", &record.name)?;
            row.set_item("level", record.depth)?;
            row.set_item("chain", TraceFormatter::format_chain(&record.chain))?;
            row.set_item("root", self.trace.root())?;
            row.set_item("trade", self.trace.trade().as_str())?;
            rows.append(row)?;
        }
        dict.set_item("table", rows)?;
        dict.set_item("truncated", self.trace.is_truncated())?;

        Ok(dict)
    }
}

/// Trade partner chain discovery for a loaded dataset.
///
/// The dataset is loaded once on construction; `run` can then be called
/// for every selection change of a UI.
#[pyclass(name = "TradeFlow")]
struct TradeFlowPy {
    orchestrator: Orchestrator,
}

#[pymethods]
impl TradeFlowPy {
    /// Loads a dataset and prepares the query engine.
    ///
    /// Args:
    ///     dataset_path (str): A CSV or JSON trade-summary file, a directory of them,
    ///         or a `.bin` relation snapshot.
    ///     config_path (str | None): Optional JSON configuration file.
    ///
    /// Raises:
    ///     ValueError: If the dataset or the configuration cannot be read.
    #[new]
    #[pyo3(signature = (dataset_path, config_path=None))]
    fn new(dataset_path: &str, config_path: Option<&str>) -> PyResult<Self> {
        let to_value_error = |e: String| PyErr::new::<pyo3::exceptions::PyValueError, _>(e);

        let config = match config_path {
            Some(path) => FlowConfig::from_file(path).map_err(|e| to_value_error(e.to_string()))?,
            None => FlowConfig::default(),
        };

        let store = if dataset_path.ends_with(".bin") {
            RelationStore::from_file(dataset_path).map_err(|e| to_value_error(e.to_string()))?
        } else {
            config
                .loader()
                .load(dataset_path)
                .map_err(|e| to_value_error(e.to_string()))?
        };

        let orchestrator = Orchestrator::builder(store).with_config(&config).build();
        Ok(TradeFlowPy { orchestrator })
    }

    /// Traces a country's partner chains.
    ///
    /// Args:
    ///     country (str): The root reporter.
    ///     trade (str): "Import" or "Export".
    ///
    /// Returns:
    ///     dict | None: `None` for an unknown trade direction, otherwise a dict
    ///         with "title", "figure" (Sankey figure JSON), "table" (list of
    ///         row dicts) and "truncated".
    fn run(&self, country: &str, trade: &str) -> Option<WorkloadOutput> {
        self.orchestrator.run(country, trade)
    }

    /// Every reporter in the dataset, sorted.
    fn countries(&self) -> Vec<String> {
        self.orchestrator.countries().to_vec()
    }

    /// The accepted trade direction tokens.
    fn trades(&self) -> Vec<&'static str> {
        self.orchestrator.directions()
    }
}

/// Trade partner chain discovery and Sankey graph construction.
#[pymodule]
fn tradeflow(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<TradeFlowPy>()?;
    Ok(())
}

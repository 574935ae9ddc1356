use super::definition::{Direction, RelationRow};
use super::store::RelationStore;
use crate::error::DatasetError;
use ahash::AHashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_YEAR: &str = "2019";
pub const EXPORT_PARTNER_INDICATOR: &str = "Trade (US$ Mil)-Top 5 Export Partner";
pub const IMPORT_PARTNER_INDICATOR: &str = "Trade (US$ Mil)-Top 5 Import Partner";
pub const DEFAULT_IGNORED: [&str; 2] = ["World", "Unspecified"];

/// One row of a per-country trade summary, as exported by the statistics portal.
///
/// All named columns are optional so that incomplete rows can be dropped
/// instead of failing the whole file. Every other column (the years) lands in
/// `values`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTradeRecord {
    #[serde(rename = "Reporter", alias = "reporter", default)]
    pub reporter: Option<String>,
    #[serde(rename = "Partner", alias = "partner", default)]
    pub partner: Option<String>,
    #[serde(rename = "Indicator", alias = "indicator", default)]
    pub indicator: Option<String>,
    #[serde(rename = "Indicator Type", alias = "indicator_type", default)]
    pub indicator_type: Option<String>,
    #[serde(flatten)]
    pub values: AHashMap<String, serde_json::Value>,
}

impl RawTradeRecord {
    /// The numeric value recorded for `year`, if present.
    ///
    /// Numbers and numeric strings are accepted; null, blank and anything
    /// else count as missing.
    pub fn value_for(&self, year: &str) -> Option<f64> {
        let value = match self.values.get(year)? {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };
        // "NaN" and "inf" parse as floats but are missing values in the exports.
        value.filter(|v| v.is_finite())
    }

    /// Builds a record from one CSV row, using `headers` as column names.
    ///
    /// Blank cells are left out, so they read as missing.
    fn from_csv_row(headers: &[String], row: &csv::ByteRecord) -> Self {
        let mut record = Self::default();
        for (header, cell) in headers.iter().zip(row.iter()) {
            let cell = String::from_utf8_lossy(cell);
            if cell.trim().is_empty() {
                continue;
            }
            let cell = cell.into_owned();
            match header.trim_start_matches('\u{feff}').trim() {
                "Reporter" => record.reporter = Some(cell),
                "Partner" => record.partner = Some(cell),
                "Indicator" => record.indicator = Some(cell),
                "Indicator Type" => record.indicator_type = Some(cell),
                column => {
                    record
                        .values
                        .insert(column.to_string(), serde_json::Value::String(cell));
                }
            }
        }
        record
    }
}

/// Turns raw trade-summary records into a [`RelationStore`].
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    year: String,
    indicators: Vec<String>,
    ignored: Vec<String>,
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR.to_string(),
            indicators: vec![
                EXPORT_PARTNER_INDICATOR.to_string(),
                IMPORT_PARTNER_INDICATOR.to_string(),
            ],
            ignored: DEFAULT_IGNORED.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl DatasetLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects which year column provides the relation value.
    pub fn with_year(mut self, year: &str) -> Self {
        self.year = year.to_string();
        self
    }

    /// Replaces the set of indicators whose rows are kept.
    pub fn with_indicators<I, S>(mut self, indicators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.indicators = indicators.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the set of aggregate names dropped as reporter or partner.
    pub fn with_ignored<I, S>(mut self, ignored: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored = ignored.into_iter().map(Into::into).collect();
        self
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    /// Filters and cleans raw records into relation rows.
    pub fn normalize<I>(&self, records: I) -> Vec<RelationRow>
    where
        I: IntoIterator<Item = RawTradeRecord>,
    {
        let mut dropped = 0usize;
        let rows: Vec<RelationRow> = records
            .into_iter()
            .filter_map(|record| {
                let row = self.normalize_record(&record);
                if row.is_none() {
                    dropped += 1;
                }
                row
            })
            .collect();

        log::debug!(
            "Normalized {} relation rows for year {} ({} records dropped)",
            rows.len(),
            self.year,
            dropped
        );
        rows
    }

    fn normalize_record(&self, record: &RawTradeRecord) -> Option<RelationRow> {
        let indicator = record.indicator.as_deref()?.trim();
        if !self.indicators.iter().any(|i| i == indicator) {
            return None;
        }

        let value = record.value_for(&self.year)?;
        let reporter = record.reporter.as_deref()?.trim();
        let partner = record.partner.as_deref()?.trim();
        if reporter.is_empty() || partner.is_empty() {
            return None;
        }
        if self.is_ignored(reporter) || self.is_ignored(partner) {
            return None;
        }

        let direction: Direction = match record.indicator_type.as_deref()?.parse() {
            Ok(direction) => direction,
            Err(e) => {
                log::debug!("Skipping record {} -> {}: {}", reporter, partner, e);
                return None;
            }
        };

        Some(RelationRow::new(reporter, partner, direction, value))
    }

    fn is_ignored(&self, name: &str) -> bool {
        self.ignored.iter().any(|ignored| ignored == name)
    }

    pub fn load_records<I>(&self, records: I) -> RelationStore
    where
        I: IntoIterator<Item = RawTradeRecord>,
    {
        RelationStore::new(self.normalize(records))
    }

    /// Loads a single dataset file or every dataset file of a directory.
    ///
    /// `.csv` files are read as the portal's CSV exports; anything else is
    /// read as a JSON array of records.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<RelationStore, DatasetError> {
        let path = path.as_ref();
        if path.is_dir() {
            self.load_dir(path)
        } else if path.is_file() {
            self.load_file(path)
        } else {
            Err(DatasetError::InvalidSource(path.to_path_buf()))
        }
    }

    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<RelationStore, DatasetError> {
        let records = read_records(path.as_ref())?;
        Ok(self.load_records(records))
    }

    /// Loads every `*.csv` and `*.json` file directly inside `dir`, in file-name order.
    pub fn load_dir(&self, dir: impl AsRef<Path>) -> Result<RelationStore, DatasetError> {
        let dir = dir.as_ref();
        let io_err = |source| DatasetError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if !path.is_file() {
                continue;
            }
            if DatasetFormat::of(&path).is_some() {
                files.push(path);
            } else {
                log::debug!("Skipping '{}': not a dataset file", path.display());
            }
        }
        if files.is_empty() {
            log::warn!("No .csv or .json dataset files found in '{}'", dir.display());
        }

        let mut records = Vec::new();
        for file in files.into_iter().sorted() {
            let file_records = read_records(&file)?;
            log::debug!(
                "Read {} records from '{}'",
                file_records.len(),
                file.display()
            );
            records.extend(file_records);
        }

        Ok(self.load_records(records))
    }
}

/// The on-disk formats a dataset file can come in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DatasetFormat {
    Csv,
    Json,
}

impl DatasetFormat {
    fn of(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("csv") {
            Some(DatasetFormat::Csv)
        } else if ext.eq_ignore_ascii_case("json") {
            Some(DatasetFormat::Json)
        } else {
            None
        }
    }
}

fn read_records(path: &Path) -> Result<Vec<RawTradeRecord>, DatasetError> {
    match DatasetFormat::of(path).unwrap_or(DatasetFormat::Json) {
        DatasetFormat::Csv => read_csv_records(path),
        DatasetFormat::Json => read_json_records(path),
    }
}

fn read_json_records(path: &Path) -> Result<Vec<RawTradeRecord>, DatasetError> {
    let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a CSV export. Non-UTF-8 cells are decoded lossily.
fn read_csv_records(path: &Path) -> Result<Vec<RawTradeRecord>, DatasetError> {
    let csv_err = |source| DatasetError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;

    let headers: Vec<String> = reader
        .byte_headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| String::from_utf8_lossy(h).into_owned())
        .collect();

    let mut records = Vec::new();
    for row in reader.byte_records() {
        let row = row.map_err(csv_err)?;
        records.push(RawTradeRecord::from_csv_row(&headers, &row));
    }
    Ok(records)
}

//! Common test utilities for building relation stores and raw records.
use tradeflow::prelude::*;

/// Builds a store from `(reporter, partner, direction, value)` tuples.
#[allow(dead_code)]
pub fn store_from(rows: &[(&str, &str, Direction, f64)]) -> RelationStore {
    rows.iter()
        .map(|&(reporter, partner, direction, value)| {
            RelationRow::new(reporter, partner, direction, value)
        })
        .collect()
}

/// A single export link: `X -> Y`.
#[allow(dead_code)]
pub fn single_link_store() -> RelationStore {
    store_from(&[("X", "Y", Direction::Export, 10.0)])
}

/// A two-country export cycle: `X -> Y -> X`.
#[allow(dead_code)]
pub fn two_cycle_store() -> RelationStore {
    store_from(&[
        ("X", "Y", Direction::Export, 5.0),
        ("Y", "X", Direction::Export, 5.0),
    ])
}

/// Two branches converging on `Z`: `X -> A -> Z` and `X -> B -> Z`.
#[allow(dead_code)]
pub fn converging_store() -> RelationStore {
    store_from(&[
        ("X", "A", Direction::Export, 9.0),
        ("X", "B", Direction::Export, 8.0),
        ("A", "Z", Direction::Export, 7.0),
        ("B", "Z", Direction::Export, 6.0),
    ])
}

/// Three branches converging on `Z`, which has a partner of its own: `Z -> W`.
#[allow(dead_code)]
pub fn three_parent_store() -> RelationStore {
    store_from(&[
        ("X", "A", Direction::Export, 30.0),
        ("X", "B", Direction::Export, 20.0),
        ("X", "C", Direction::Export, 10.0),
        ("A", "Z", Direction::Export, 5.0),
        ("B", "Z", Direction::Export, 5.0),
        ("C", "Z", Direction::Export, 5.0),
        ("Z", "W", Direction::Export, 1.0),
    ])
}

/// A denser export relation with cycles, a self-loop and a link back to the root.
///
/// Partner order per reporter (value descending):
/// A: B, C | B: C, D | C: A, E | D: B, F | E: E | F: A
#[allow(dead_code)]
pub fn dense_store() -> RelationStore {
    store_from(&[
        ("A", "B", Direction::Export, 9.0),
        ("A", "C", Direction::Export, 8.0),
        ("B", "C", Direction::Export, 7.0),
        ("B", "D", Direction::Export, 6.0),
        ("C", "A", Direction::Export, 5.0),
        ("C", "E", Direction::Export, 4.0),
        ("D", "B", Direction::Export, 3.0),
        ("E", "E", Direction::Export, 2.0),
        ("D", "F", Direction::Export, 1.0),
        ("F", "A", Direction::Export, 1.0),
        // Import rows must never leak into export traces.
        ("A", "Q", Direction::Import, 100.0),
        ("Q", "R", Direction::Import, 50.0),
    ])
}

/// Builds a raw record as the statistics portal exports it.
#[allow(dead_code)]
pub fn raw_record(
    reporter: &str,
    partner: &str,
    indicator: &str,
    indicator_type: &str,
    year_value: serde_json::Value,
) -> RawTradeRecord {
    let mut record = RawTradeRecord {
        reporter: Some(reporter.to_string()),
        partner: Some(partner.to_string()),
        indicator: Some(indicator.to_string()),
        indicator_type: Some(indicator_type.to_string()),
        ..Default::default()
    };
    record.values.insert("2019".to_string(), year_value);
    record
}

/// A small trade-summary file body in the portal's JSON export format.
#[allow(dead_code)]
pub const TRADE_SUMMARY_JSON: &str = r#"[
    {"Reporter": " Aland ", "Partner": "Borduria ", "Indicator": "Trade (US$ Mil)-Top 5 Export Partner", "Indicator Type": "Export ", "2018": 3.0, "2019": 12.5},
    {"Reporter": "Aland", "Partner": "Carpania", "Indicator": "Trade (US$ Mil)-Top 5 Export Partner", "Indicator Type": "Export", "2019": "40.25"},
    {"Reporter": "Aland", "Partner": " World", "Indicator": "Trade (US$ Mil)-Top 5 Export Partner", "Indicator Type": "Export", "2019": 900.0},
    {"Reporter": "Aland", "Partner": "Unspecified", "Indicator": "Trade (US$ Mil)-Top 5 Import Partner", "Indicator Type": "Import", "2019": 1.0},
    {"Reporter": "Aland", "Partner": "Dunland", "Indicator": "Trade (US$ Mil)-Top 5 Import Partner", "Indicator Type": "Import", "2019": null},
    {"Reporter": "Aland", "Partner": "Dunland", "Indicator": "Trade (US$ Mil)-Top 5 Import Partner", "Indicator Type": "Import", "2019": 7.0},
    {"Reporter": "Aland", "Partner": "Borduria", "Indicator": "Exports (US$ Mil)", "Indicator Type": "Export", "2019": 55.0},
    {"Reporter": "Aland", "Partner": "Eastland", "Indicator": "Trade (US$ Mil)-Top 5 Export Partner", "Indicator Type": "Transit", "2019": 2.0},
    {"Partner": "Eastland", "Indicator": "Trade (US$ Mil)-Top 5 Export Partner", "Indicator Type": "Export", "2019": 2.0}
]"#;

/// The same kind of data as the portal's CSV export, quoting included.
#[allow(dead_code)]
pub const TRADE_SUMMARY_CSV: &str = "\
Reporter,Partner,Product categories,Indicator Type,Indicator,2018,2019
Borduria ,\"Korea, Rep.\",All Products,Export,Trade (US$ Mil)-Top 5 Export Partner,1.5,22.5
Borduria,Aland,All Products,Export,Trade (US$ Mil)-Top 5 Export Partner,3.0,
Borduria, World,All Products,Export,Trade (US$ Mil)-Top 5 Export Partner,100,900
Borduria,Aland,All Products,Import ,Trade (US$ Mil)-Top 5 Import Partner,4,8.75
Borduria,Carpania,All Products,Export,Exports (US$ Mil),4,5
";

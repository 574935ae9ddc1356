use super::table::TraceTable;
use itertools::Itertools;
use std::fmt::Write;

const HEADERS: [&str; 5] = ["name", "level", "chain", "root", "trade"];

/// Formats trace tables into human-readable text.
pub struct TraceFormatter;

impl TraceFormatter {
    /// Renders the first `max_rows` rows of a trace table as an aligned text table.
    pub fn format_table(table: &TraceTable, max_rows: usize) -> String {
        let rows: Vec<[String; 5]> = table
            .rows()
            .into_iter()
            .take(max_rows)
            .map(|record| {
                [
                    record.name.clone(),
                    record.depth.to_string(),
                    Self::format_chain(&record.chain),
                    table.root().to_string(),
                    table.trade().to_string(),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut output = String::new();
        Self::write_row(&mut output, &HEADERS.map(str::to_string), &widths);
        let rule = widths.iter().map(|w| "-".repeat(*w)).join("-+-");
        writeln!(&mut output, "{}", rule).unwrap();
        for row in &rows {
            Self::write_row(&mut output, row, &widths);
        }

        let omitted = table.len().saturating_sub(rows.len());
        if omitted > 0 {
            writeln!(&mut output, "... {} more row(s) not shown", omitted).unwrap();
        }
        output
    }

    /// Joins a chain the way the table displays it.
    pub fn format_chain(chain: &[String]) -> String {
        chain.join(", ")
    }

    fn write_row(output: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
        let line = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .join(" | ");
        writeln!(output, "{}", line.trim_end()).unwrap();
    }
}

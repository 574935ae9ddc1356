use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};
use serde_json::json;
use std::fs;
use tradeflow::relation::RawTradeRecord;
use tradeflow::relation::loader::{
    DEFAULT_YEAR, EXPORT_PARTNER_INDICATOR, IMPORT_PARTNER_INDICATOR,
};

const TOP_PARTNERS: usize = 5;

/// A CLI tool to generate a synthetic trade-summary dataset for tradeflow
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_trade.json")]
    output: String,

    /// The number of reporting countries to generate
    #[arg(short, long, default_value_t = 40)]
    countries: usize,

    /// The year column to fill in
    #[arg(long, default_value = DEFAULT_YEAR)]
    year: String,

    /// Probability that a partner row has no value for the year
    #[arg(long, default_value_t = 0.05)]
    missing: f64,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if cli.countries <= TOP_PARTNERS {
        eprintln!(
            "Error: --countries ({}) must be greater than {} so every reporter has distinct partners",
            cli.countries, TOP_PARTNERS
        );
        std::process::exit(1);
    }
    if !(0.0..=1.0).contains(&cli.missing) {
        eprintln!("Error: --missing ({}) must be between 0 and 1", cli.missing);
        std::process::exit(1);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!(
        "Generating trade summaries for {} countries (year {})...",
        cli.countries, cli.year
    );

    let names: Vec<String> = (1..=cli.countries)
        .map(|i| format!("Country {:03}", i))
        .collect();

    let mut records = Vec::new();
    for reporter in &names {
        for (indicator, indicator_type) in [
            (EXPORT_PARTNER_INDICATOR, "Export"),
            (IMPORT_PARTNER_INDICATOR, "Import"),
        ] {
            records.extend(generate_partner_rows(
                &mut rng,
                reporter,
                &names,
                indicator,
                indicator_type,
                &cli,
            ));
        }
    }
    log::info!("Generated {} records", records.len());

    let json_output = serde_json::to_string_pretty(&records)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved trade data to '{}'",
        cli.output
    );

    Ok(())
}

/// Generates one reporter's top partners for one indicator.
///
/// Besides the partners, every reporter also gets a "World" aggregate row
/// (with padded names) so the loader's cleanup has something to do.
fn generate_partner_rows(
    rng: &mut StdRng,
    reporter: &str,
    names: &[String],
    indicator: &str,
    indicator_type: &str,
    cli: &Cli,
) -> Vec<RawTradeRecord> {
    let candidates: Vec<&String> = names.iter().filter(|n| n.as_str() != reporter).collect();
    let mut rows: Vec<RawTradeRecord> = sample(rng, candidates.len(), TOP_PARTNERS)
        .into_iter()
        .map(|i| {
            let value = if rng.random_bool(cli.missing) {
                serde_json::Value::Null
            } else {
                json!((rng.random_range(1.0..50_000.0_f64) * 100.0).round() / 100.0)
            };
            record(reporter, candidates[i], indicator, indicator_type, &cli.year, value)
        })
        .collect();

    let world_total = json!((rng.random_range(50_000.0..500_000.0_f64)).round());
    rows.push(record(
        &format!(" {} ", reporter),
        " World",
        indicator,
        indicator_type,
        &cli.year,
        world_total,
    ));
    rows
}

fn record(
    reporter: &str,
    partner: &str,
    indicator: &str,
    indicator_type: &str,
    year: &str,
    value: serde_json::Value,
) -> RawTradeRecord {
    let mut record = RawTradeRecord {
        reporter: Some(reporter.to_string()),
        partner: Some(partner.to_string()),
        indicator: Some(indicator.to_string()),
        indicator_type: Some(indicator_type.to_string()),
        ..Default::default()
    };
    record.values.insert(year.to_string(), value);
    record
}

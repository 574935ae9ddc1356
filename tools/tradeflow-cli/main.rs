use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, Write};
use std::time::Instant;
use tradeflow::graph::visualizer::visualize_graph;
use tradeflow::prelude::*;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum TradeCli {
    Import,
    Export,
}

impl From<TradeCli> for Direction {
    fn from(trade: TradeCli) -> Self {
        match trade {
            TradeCli::Import => Direction::Import,
            TradeCli::Export => Direction::Export,
        }
    }
}

/// Trace a country's top trade partners, their partners, and so on, as a flow diagram
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Dataset to load: a CSV or JSON trade-summary file, a directory of them, or a .bin snapshot
    dataset_path: Option<String>,

    /// The root country of the trace
    #[arg(short, long)]
    country: Option<String>,

    /// The trade direction to follow
    #[arg(short, long, value_enum)]
    trade: Option<TradeCli>,

    /// Optional JSON configuration file
    #[arg(long)]
    config: Option<String>,

    /// Override the configured depth bound
    #[arg(long)]
    max_depth: Option<usize>,

    /// Override the configured cap on traced partners
    #[arg(long)]
    node_limit: Option<usize>,

    /// Number of trace rows to print
    #[arg(long)]
    rows: Option<usize>,

    /// Write the Sankey figure JSON to this path
    #[arg(short, long)]
    output: Option<String>,

    /// Save the loaded relation store as a binary snapshot to this path
    #[arg(long)]
    snapshot: Option<String>,

    /// List the countries in the dataset and exit
    #[arg(long)]
    list: bool,

    /// Print every node and link of the resulting graph
    #[arg(short, long)]
    graph: bool,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if cli.human {
        run_interactive(cli);
    } else {
        run_non_interactive(cli);
    }
}

fn load_config(cli: &Cli) -> FlowConfig {
    let mut config = match &cli.config {
        Some(path) => FlowConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => FlowConfig::default(),
    };
    if let Some(max_depth) = cli.max_depth {
        config.max_depth = max_depth;
    }
    if let Some(limit) = cli.node_limit {
        config.node_limit = Some(limit);
    }
    if let Some(rows) = cli.rows {
        config.table_rows = rows;
    }
    config
}

fn load_store(dataset_path: &str, config: &FlowConfig) -> RelationStore {
    let store = if dataset_path.ends_with(".bin") {
        RelationStore::from_file(dataset_path).unwrap_or_else(|e| {
            exit_with_error(&format!(
                "Failed to load snapshot '{}': {}",
                dataset_path, e
            ))
        })
    } else {
        config.loader().load(dataset_path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load dataset: {}", e))
        })
    };
    log::info!(
        "Loaded {} relation rows from '{}'",
        store.len(),
        dataset_path
    );
    store
}

fn run_query(
    orchestrator: &Orchestrator,
    config: &FlowConfig,
    country: &str,
    trade: &str,
    output_path: Option<&str>,
    show_graph: bool,
) {
    let query_start = Instant::now();
    let Some(output) = orchestrator.run(country, trade) else {
        println!("\nNothing to render: '{}' is not a trade direction.", trade);
        return;
    };
    let query_duration = query_start.elapsed();

    println!("\n{}", output.diagram.title);
    if output.trace.is_empty() {
        println!("  -> No partners found for '{}'", country);
    } else {
        println!(
            "{}",
            TraceFormatter::format_table(&output.trace, config.table_rows)
        );
    }
    if output.trace.is_truncated() {
        println!("  -> Trace stopped early at the node limit");
    }

    if show_graph {
        println!(
            "{}",
            visualize_graph(&output.diagram.graph, &output.diagram.title)
        );
    }

    if let Some(path) = output_path {
        let figure = serde_json::to_string_pretty(&output.diagram.to_sankey_figure())
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize figure: {}", e)));
        fs::write(path, figure).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to write figure to '{}': {}", path, e))
        });
        println!("  -> Wrote Sankey figure to '{}'", path);
    }

    println!("\n--- Query Summary ---");
    println!("Partners Traced:  {}", output.trace.len());
    println!("Graph Nodes:      {}", output.diagram.graph.node_count());
    println!("Graph Links:      {}", output.diagram.graph.edges.len());
    println!("Query Time:       {:?}", query_duration);
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: Cli) {
    let dataset_path = cli.dataset_path.clone().unwrap_or_else(|| {
        exit_with_error("Dataset path is required in non-interactive mode.");
    });
    let config = load_config(&cli);

    let load_start = Instant::now();
    let store = load_store(&dataset_path, &config);
    if let Some(snapshot) = &cli.snapshot {
        store
            .save(snapshot)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to save snapshot: {}", e)));
        println!("  -> Saved relation snapshot to '{}'", snapshot);
    }
    let orchestrator = Orchestrator::builder(store).with_config(&config).build();
    log::info!("Dataset ready in {:?}", load_start.elapsed());

    if cli.list {
        for country in orchestrator.countries() {
            println!("{}", country);
        }
        return;
    }

    let country = cli.country.clone().unwrap_or_else(|| {
        exit_with_error("A country is required in non-interactive mode (use --country).");
    });
    let trade = Direction::from(cli.trade.unwrap_or(TradeCli::Export));

    run_query(
        &orchestrator,
        &config,
        &country,
        trade.as_str(),
        cli.output.as_deref(),
        cli.graph,
    );
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(cli: Cli) {
    println!("--- tradeflow Interactive Mode ---");

    let dataset_path = match cli.dataset_path.clone() {
        Some(path) => path,
        None => prompt_for_input("Enter dataset path", Some("data/")),
    };
    let config = load_config(&cli);
    let store = load_store(&dataset_path, &config);
    let orchestrator = Orchestrator::builder(store).with_config(&config).build();

    let default_country = orchestrator.countries().first().cloned();
    println!(
        "{} countries available. Enter 'q' to quit.",
        orchestrator.countries().len()
    );

    loop {
        let country = prompt_for_input("Enter country", default_country.as_deref());
        if country.is_empty() || country == "q" {
            break;
        }
        let trade = prompt_for_input(
            &format!("Enter trade ({})", orchestrator.directions().join("/")),
            Some(Direction::Export.as_str()),
        );

        run_query(
            &orchestrator,
            &config,
            &country,
            &trade,
            cli.output.as_deref(),
            cli.graph,
        );
        println!();
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout()
        .flush()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to flush stdout: {}", e)));

    match io::stdin().read_line(&mut line) {
        Ok(0) => return String::new(),
        Ok(_) => {}
        Err(e) => exit_with_error(&format!("Failed to read line: {}", e)),
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}

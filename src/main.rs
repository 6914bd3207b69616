use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use schematic_vision_analyzer::{
    analysis::Analyzer,
    config::Config,
    model::ModelClient,
    query::QueryOutcome,
};

/// Analyze a hydraulic schematic design and query its connection graph
#[derive(Debug, Parser)]
#[command(name = "schematic-vision-analyzer", version)]
struct Cli {
    /// Design to analyze (defaults to the first catalog entry)
    #[arg(long)]
    design: Option<String>,

    /// List the known designs and exit
    #[arg(long)]
    list_designs: bool,

    /// Write the full connection graph as Graphviz DOT to this path
    #[arg(long)]
    dot: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Schematic vision analyzer starting..."
    );

    let client = ModelClient::new(&config.azure, config.request.clone())?;
    info!(endpoint = %config.azure.endpoint, deployment = %config.azure.deployment, "Model client initialized");

    let analyzer = Analyzer::new(client, &config);

    if cli.list_designs {
        for design in analyzer.designs() {
            println!("{}", design);
        }
        return Ok(());
    }

    let design = match cli.design {
        Some(design) => design,
        None => analyzer
            .designs()
            .first()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("design catalog is empty"))?,
    };

    println!("Selected Design: {}", design);
    let session = analyzer.analyze(&design).await?;

    println!("\nIdentified Connection types:");
    println!("{}", session.legend_table());
    println!("Identified Connections:");
    println!("{}", session.connection_summary());

    if let Some(path) = &cli.dot {
        std::fs::write(path, session.graph.to_dot())?;
        println!("Connection graph written to {}", path.display());
    }

    query_loop(&session)?;

    info!(session_id = %session.id, "Session ended");
    Ok(())
}

/// Interactive query loop over the analysis session.
///
/// Each line of input is a free-text component query; EOF or "quit" ends
/// the session.
fn query_loop(session: &schematic_vision_analyzer::AnalysisSession) -> anyhow::Result<()> {
    println!("Enter the name (or part) of a component to see its relationships:");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("query> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim_end_matches('\n');
        if input == "quit" {
            break;
        }

        match session.query(input) {
            Ok(QueryOutcome::Found(report)) => {
                println!("Relationship graph for '{}':", input.trim());
                println!("{}", report.summary);
                println!("{}", report.subgraph.to_dot());
            }
            Ok(QueryOutcome::NoMatch) => {
                println!("No relationships were found for the specified component.");
            }
            Err(e) => {
                println!("Please enter the name of a component. ({})", e);
            }
        }
    }

    Ok(())
}

/// Initialize tracing/logging
fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        schematic_vision_analyzer::config::LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        schematic_vision_analyzer::config::LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

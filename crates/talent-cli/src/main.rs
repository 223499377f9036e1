mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{chart::ChartSubcommand, config::ConfigSubcommand, table::TableSubcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hub",
    about = "Internal talent and bench dashboard: serve, render, and inspect the dataset",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .talent/ or .git/)
    #[arg(long, global = true, env = "HUB_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize .talent/ with a config and the built-in dataset
    Init,

    /// Start the dashboard server
    Serve {
        /// Port to listen on (default: server.port from config)
        #[arg(long)]
        port: Option<u16>,

        /// Don't open browser automatically
        #[arg(long)]
        no_open: bool,
    },

    /// Render the dashboard to a static HTML file
    Render {
        /// Output file (default: stdout)
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,

        /// Service line codes or names, comma-separated (default: all)
        #[arg(long)]
        sl: Option<String>,

        /// Date range in days: 30 or 90
        #[arg(long)]
        range: Option<String>,
    },

    /// Print a chart definition
    Chart {
        #[command(subcommand)]
        subcommand: ChartSubcommand,
    },

    /// Print a dashboard table
    Table {
        #[command(subcommand)]
        subcommand: TableSubcommand,
    },

    /// Validate the config and dataset
    Validate,

    /// Inspect the configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::Serve { port, no_open } => cmd::serve::run(&root, port, no_open),
        Commands::Render { out, sl, range } => {
            cmd::render::run(&root, out.as_deref(), sl.as_deref(), range.as_deref())
        }
        Commands::Chart { subcommand } => cmd::chart::run(&root, subcommand, cli.json),
        Commands::Table { subcommand } => cmd::table::run(&root, subcommand, cli.json),
        Commands::Validate => cmd::validate::run(&root, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

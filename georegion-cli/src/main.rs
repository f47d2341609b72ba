//! georegion - classify coordinates into region codes
//!
//! Usage:
//!   georegion classify <lat> <lng> [--json] [--explain]
//!   georegion node-id <lat> <lng> --key <text> | --key-file <path>
//!   georegion regions [--json]
//!   georegion lookup <code>
//!   georegion neighbors <code>
//!   georegion latency <code> <code>
//!   georegion airport <lat> <lng>
//!   georegion grid [--format geojson|svg|png] [--boxes] [--output <path>]
//!
//! Logs go to stderr; set `RUST_LOG` or pass `-v` for more.

mod cli;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use cli::{KeySource, OutputFormat, Settings};

#[derive(Parser)]
#[command(name = "georegion", version)]
#[command(about = "Classify coordinates into region codes and derive node identifiers")]
struct Cli {
    /// YAML settings file
    #[arg(long, global = true, env = "GEOREGION_CONFIG")]
    config: Option<PathBuf>,

    /// GeoJSON country boundaries (overrides the config file)
    #[arg(long, global = true)]
    boundaries: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify a coordinate
    Classify {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
        /// Print JSON
        #[arg(long)]
        json: bool,
        /// Show which stage decided the code
        #[arg(long)]
        explain: bool,
    },

    /// Classify a coordinate and derive the node identifier for a key
    NodeId {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
        /// Key material as text
        #[arg(long, conflicts_with = "key_file", required_unless_present = "key_file")]
        key: Option<String>,
        /// Read key material from a file (raw bytes)
        #[arg(long)]
        key_file: Option<PathBuf>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// List every region code
    Regions {
        #[arg(long)]
        json: bool,
    },

    /// Describe a region code (number or dotted path)
    Lookup { code: String },

    /// Regions whose boxes touch the given region
    Neighbors {
        code: String,
        #[arg(long)]
        json: bool,
    },

    /// Estimated latency between two regions
    Latency { from: String, to: String },

    /// Nearest major airport hub
    Airport {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
        #[arg(long)]
        json: bool,
    },

    /// Classify every grid cell and export the merged overlay
    Grid {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Geojson)]
        format: OutputFormat,
        /// Also draw the region box outlines
        #[arg(long)]
        boxes: bool,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(args: Cli) -> Result<()> {
    let settings = Settings::load_or_default(args.config.as_deref())?;
    let table = settings.build_table(args.boundaries.as_deref())?;
    let config = settings.classifier;

    match args.command {
        Command::Classify { lat, lng, json, explain } => {
            cli::cmd_classify(&table, config, lat, lng, json, explain)
        }
        Command::NodeId { lat, lng, key, key_file, json } => {
            let source = match (&key, &key_file) {
                (Some(text), _) => KeySource::Text(text),
                (None, Some(path)) => KeySource::File(path),
                (None, None) => anyhow::bail!("either --key or --key-file is required"),
            };
            cli::cmd_node_id(&table, config, lat, lng, source, json)
        }
        Command::Regions { json } => cli::cmd_regions(&table, json),
        Command::Lookup { code } => cli::cmd_lookup(&table, &code),
        Command::Neighbors { code, json } => cli::cmd_neighbors(&table, &code, json),
        Command::Latency { from, to } => cli::cmd_latency(&table, &from, &to),
        Command::Airport { lat, lng, json } => cli::cmd_airport(lat, lng, json),
        Command::Grid { format, boxes, output } => {
            cli::cmd_grid(&table, config, &settings.grid, format, boxes, output.as_deref())
        }
    }
}

fn main() {
    let args = Cli::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

//! truckload CLI entry point

mod cli;

use clap::{Parser, Subcommand};
use cli::context::CommandContext;
use cli::pack::{PackOptions, run_pack};
use cli::shapes::run_shapes;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use truckload::types::{OutputFormat, PackMode};

#[derive(Parser)]
#[command(name = "truckload", version, about = "Load parcel shapes into trucks")]
struct Cli {
    /// Config file (default: <config dir>/truckload/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON shape catalog (overrides config; built-in shapes otherwise)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Log placement decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load parcels into trucks and print the layout
    Pack {
        /// Truck capacities, e.g. 5x5,6x6
        #[arg(short, long)]
        trucks: String,

        /// Packing mode: simple or complex
        #[arg(short, long)]
        mode: Option<PackMode>,

        /// Output format: text or json
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Comma-separated shape names from the catalog (all when empty)
        #[arg(short, long, default_value = "")]
        names: String,

        /// Ad-hoc parcel form such as 999:999:999 (repeatable)
        #[arg(short, long = "parcel")]
        parcels: Vec<String>,

        /// Write JSON output to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List catalog shapes, or print one by name
    Shapes {
        /// Shape name
        name: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "truckload=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = CommandContext::new(cli.config.as_deref(), cli.catalog.as_deref())?;

    match cli.command {
        Commands::Pack {
            trucks,
            mode,
            format,
            names,
            parcels,
            output,
        } => run_pack(
            &ctx,
            PackOptions {
                trucks,
                mode,
                format,
                names,
                parcels,
                output,
            },
        )?,
        Commands::Shapes { name } => run_shapes(&ctx, name.as_deref()),
    }

    Ok(())
}

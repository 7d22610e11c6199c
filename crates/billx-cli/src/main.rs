//! CLI application for batch billing extraction from zipped PDF invoices.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{config, fields, run, scan};

/// Extract billing fields from zipped PDF invoices into a CSV table
#[derive(Parser)]
#[command(name = "billx")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Unpack an invoice archive and extract billing fields from every PDF
    Run(run::RunArgs),

    /// Extract billing fields from an already unpacked directory
    Scan(scan::ScanArgs),

    /// Show the fields detected in a text file
    Fields(fields::FieldsArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Warnings and errors are the per-file diagnostics, so they stay visible
    // by default.
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Run(args) => run::run(args, cli.config.as_deref()),
        Commands::Scan(args) => scan::run(args, cli.config.as_deref()),
        Commands::Fields(args) => fields::run(args),
        Commands::Config(args) => config::run(args, cli.config.as_deref()),
    }
}

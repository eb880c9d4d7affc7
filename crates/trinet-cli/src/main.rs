//! Command-line front end for trinet.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use trinet::NetConfig;

mod commands;
mod output;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "trinet", version, about = "Merge triangle soups and trace their boundary polygon")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format.
    #[arg(long, value_enum, global = true, default_value = "text")]
    format: OutputFormat,

    /// Suppress normal output.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Settings file (.toml or .json).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show vertex and triangle counts.
    Info {
        input: PathBuf,
    },

    /// Report boundary and internal edges and vertices.
    Validate {
        input: PathBuf,
    },

    /// Trace the boundary polygon.
    Polygon {
        input: PathBuf,

        /// Write the polygon as JSON.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Snap a point to the nearest vertex.
    Snap {
        input: PathBuf,

        #[arg(allow_negative_numbers = true)]
        x: f64,

        #[arg(allow_negative_numbers = true)]
        y: f64,

        /// Snap radius (defaults to the configured snap distance).
        #[arg(long)]
        max_distance: Option<f64>,
    },

    /// Render the net and its polygon to SVG.
    Render {
        input: PathBuf,

        #[arg(short, long)]
        output: PathBuf,

        /// Draw the polygon only up to this vertex.
        #[arg(long)]
        until: Option<usize>,

        /// Draw vertex indices and edge counts.
        #[arg(long)]
        labels: bool,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => NetConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => NetConfig::default(),
    };
    debug!("Using {:?}", config);

    let ctx = commands::Session {
        config,
        format: cli.format,
        quiet: cli.quiet,
    };

    match cli.command {
        Command::Info { input } => commands::info::run(&ctx, &input),
        Command::Validate { input } => commands::validate::run(&ctx, &input),
        Command::Polygon { input, output } => {
            commands::polygon::run(&ctx, &input, output.as_deref())
        }
        Command::Snap {
            input,
            x,
            y,
            max_distance,
        } => commands::snap::run(&ctx, &input, x, y, max_distance),
        Command::Render {
            input,
            output,
            until,
            labels,
        } => commands::render::run(&ctx, &input, &output, until, labels),
    }
}

//! route-bundler CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use route_bundler::bundle_json;
use route_bundler::config::BundleConfig;

/// Split port-to-port routes into control points for force-directed edge bundling.
#[derive(Parser, Debug)]
#[command(
    name = "route-bundler",
    version = env!("ROUTE_BUNDLER_VERSION"),
    about = "Split port-to-port routes into control points for edge bundling"
)]
struct Cli {
    /// Input network JSON (reads from stdin if not provided)
    input: Option<String>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Pretty-print the output JSON
    #[arg(long)]
    pretty: bool,

    /// Canvas width in projected units
    #[arg(long, default_value_t = 1000.0)]
    width: f64,

    /// Canvas height in projected units
    #[arg(long, default_value_t = 510.0)]
    height: f64,

    /// Fewest control points per route
    #[arg(long = "min-segments", default_value_t = 1)]
    min_segments: u32,

    /// Most control points per route
    #[arg(long = "max-segments", default_value_t = 10)]
    max_segments: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let text = if let Some(ref path) = cli.input {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: cannot read stdin: {}", e);
            process::exit(1);
        }
        buf
    };

    let config = BundleConfig {
        width: cli.width,
        height: cli.height,
        min_segments: cli.min_segments,
        max_segments: cli.max_segments,
    };
    info!(diagonal = config.diagonal(), "bundling routes");

    let rendered = match bundle_json(&text, &config, cli.pretty) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            eprintln!("error: cannot write '{}': {}", path, e);
            process::exit(1);
        }
    } else {
        println!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}

//! penrose - generate Penrose P3 tilings as SVG
//!
//! Usage:
//!   penrose [generate] [options]    Build a tiling and write it as SVG
//!   penrose shapes                  List available seed shapes
//!   penrose config                  Print an example configuration file

use std::env;

use tracing_subscriber::EnvFilter;

use penrose::SeedShape;

mod cli;

use cli::{cmd_config, cmd_generate};

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let prog = args.first().map(String::as_str).unwrap_or("penrose");

    let result = match args.get(1).map(String::as_str) {
        None => cmd_generate(&[]),
        Some("generate") => cmd_generate(&args[2..]),
        Some("shapes") => {
            cmd_shapes();
            Ok(())
        }
        Some("config") => {
            cmd_config();
            Ok(())
        }
        Some("help" | "--help" | "-h") => {
            print_usage(prog);
            Ok(())
        }
        // Bare flags mean `generate`.
        Some(flag) if flag.starts_with('-') => cmd_generate(&args[1..]),
        Some(other) => Err(format!("unknown command '{}' (try '{} help')", other, prog)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so an SVG written to stdout stays clean.
/// `RUST_LOG` overrides the default `info` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("penrose=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_shapes() {
    println!("Available seed shapes:");
    for shape in SeedShape::all() {
        println!("  {:<6} {}", shape.name(), shape.description());
    }
}

fn print_usage(prog: &str) {
    eprintln!("penrose - Penrose P3 rhombus tilings as SVG");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {} [generate] [options]         Build a tiling", prog);
    eprintln!("  {} shapes                       List seed shapes", prog);
    eprintln!("  {} config                       Print an example config file", prog);
    eprintln!();
    eprintln!("Generate options:");
    eprintln!("  -n, --generations <n>   Inflation steps (default: 5)");
    eprintln!("  -s, --scale <n>         Figure radius in user units (default: 100)");
    eprintln!("  --shape <name>          Seed shape: star, sun (default: star)");
    eprintln!("  -c, --config <file>     YAML or JSON config file");
    eprintln!("  --set <key=value>       Override one config key (repeatable)");
    eprintln!("  -o, --output <file>     Output SVG (- for stdout, default: penrose.svg)");
    eprintln!("  --png <file>            Also rasterize to PNG");
    eprintln!("  --png-scale <n>         PNG pixels per user unit (default: 4)");
    eprintln!("  --json <file>           Also export the tiles as JSON");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} -n 6 --shape sun -o sun.svg", prog);
    eprintln!("  {} --set draw-arcs=true --set draw-tiles=false -o - > arcs.svg", prog);
    eprintln!("  {} config > penrose.yaml && {} -c penrose.yaml", prog, prog);
    eprintln!();
    eprintln!("Set RUST_LOG=debug for per-generation tile counts.");
}

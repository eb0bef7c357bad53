//! The `generate` command: seed, build, render, write.

use std::fs;
use std::io::{self, Write};
use std::str::FromStr;

use tracing::info;

use penrose::{Config, PenroseTiling, SeedShape};

use super::config::load_config;
use super::export::{write_json, write_png, TilingExport};

/// Parsed `generate` options.
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    pub generations: u32,
    pub scale: f64,
    pub shape: SeedShape,
    pub config_path: Option<String>,
    pub overrides: Vec<(String, String)>,
    pub output: String,
    pub png_output: Option<String>,
    pub png_scale: f64,
    pub json_output: Option<String>,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            generations: 5,
            scale: 100.0,
            shape: SeedShape::Star,
            config_path: None,
            overrides: Vec::new(),
            output: "penrose.svg".to_string(),
            png_output: None,
            png_scale: 4.0,
            json_output: None,
        }
    }
}

impl GenerateArgs {
    /// Parse the arguments following `generate`.
    ///
    /// Returns `Ok(None)` when help was requested.
    pub fn parse(args: &[String]) -> Result<Option<Self>, String> {
        let mut parsed = Self::default();

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            let mut value = || {
                i += 1;
                args.get(i).map(String::as_str).ok_or_else(|| format!("{} needs a value", flag))
            };

            match flag {
                "-n" | "--generations" => parsed.generations = parse_number(flag, value()?)?,
                "-s" | "--scale" => parsed.scale = parse_number(flag, value()?)?,
                "--shape" => {
                    let name = value()?;
                    parsed.shape = SeedShape::from_name(name).ok_or_else(|| {
                        let known: Vec<&str> = SeedShape::all().iter().map(|s| s.name()).collect();
                        format!("Unknown shape: {}. Use one of: {}", name, known.join(", "))
                    })?;
                }
                "-c" | "--config" => parsed.config_path = Some(value()?.to_string()),
                "--set" => {
                    let pair = value()?;
                    let (key, val) = pair
                        .split_once('=')
                        .ok_or_else(|| format!("--set expects key=value, got '{}'", pair))?;
                    parsed.overrides.push((key.trim().to_string(), val.to_string()));
                }
                "-o" | "--output" => parsed.output = value()?.to_string(),
                "--png" => parsed.png_output = Some(value()?.to_string()),
                "--png-scale" => parsed.png_scale = parse_number(flag, value()?)?,
                "--json" => parsed.json_output = Some(value()?.to_string()),
                "-h" | "--help" => return Ok(None),
                other => return Err(format!("Unknown option: {}", other)),
            }
            i += 1;
        }

        if !(parsed.png_scale.is_finite() && parsed.png_scale > 0.0) {
            return Err(format!("--png-scale must be positive, got {}", parsed.png_scale));
        }
        Ok(Some(parsed))
    }

    /// File config (if any) with the `--set` overrides applied on top.
    pub fn config(&self) -> Result<Config, String> {
        let base = match &self.config_path {
            Some(path) => load_config(path)?,
            None => Config::default(),
        };
        base.with_overrides(self.overrides.iter().map(|(k, v)| (k, v)))
            .map_err(|e| e.to_string())
    }
}

fn parse_number<T: FromStr>(flag: &str, value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("Invalid value for {}: '{}'", flag, value))
}

/// Execute the generate command.
pub fn cmd_generate(args: &[String]) -> Result<(), String> {
    let Some(args) = GenerateArgs::parse(args)? else {
        print_usage();
        return Ok(());
    };

    let config = args.config()?;
    let mut tiling = PenroseTiling::new(args.scale, args.generations, config).map_err(|e| e.to_string())?;
    tiling
        .set_initial_tiles(args.shape.tiles(args.scale))
        .map_err(|e| e.to_string())?;
    tiling.build().map_err(|e| e.to_string())?;
    let svg = tiling.render().map_err(|e| e.to_string())?;

    if args.output == "-" {
        io::stdout()
            .write_all(svg.as_bytes())
            .map_err(|e| format!("Failed to write to stdout: {}", e))?;
    } else {
        fs::write(&args.output, &svg).map_err(|e| format!("Failed to write {}: {}", args.output, e))?;
        info!(path = %args.output, tiles = tiling.len(), "wrote SVG");
    }

    if let Some(png_path) = &args.png_output {
        let (width, height) = write_png(&svg, png_path, args.png_scale)?;
        info!(path = %png_path, width, height, "wrote PNG");
    }

    if let Some(json_path) = &args.json_output {
        write_json(&TilingExport::new(&tiling, args.shape), json_path)?;
        info!(path = %json_path, "wrote JSON");
    }

    Ok(())
}

/// Print usage information.
pub fn print_usage() {
    eprintln!("penrose generate - Build a Penrose P3 tiling");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    penrose generate [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -n, --generations <n>  Inflation steps (default: 5)");
    eprintln!("    -s, --scale <n>        Figure radius (default: 100)");
    eprintln!("    --shape <name>         star or sun (default: star)");
    eprintln!("    -c, --config <file>    YAML or JSON config (.json by extension)");
    eprintln!("    --set <key=value>      Override a config key, repeatable");
    eprintln!("    -o, --output <file>    Output SVG, - for stdout (default: penrose.svg)");
    eprintln!("    --png <file>           Also generate PNG output");
    eprintln!("    --png-scale <n>        Pixels per user unit (default: 4)");
    eprintln!("    --json <file>          Also export tiles as JSON");
    eprintln!();
    eprintln!("CONFIG KEYS:");
    for chunk in penrose::config::KEYS.chunks(4) {
        eprintln!("    {}", chunk.join(", "));
    }
}

// ============================================================================
// TESTS
// ============================================================================

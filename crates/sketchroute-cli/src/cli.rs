//! Command-line interface for the sketchroute utility
//!
//! Classifies text descriptions and writes Excalidraw scenes from upstream
//! element lists.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use sketchroute::core::logging::init_logging;
use sketchroute::plugins::Orchestrator;
use sketchroute::{Archetype, DiagramInput};

/// Sketchroute - Route text descriptions to Excalidraw diagrams
#[derive(Parser)]
#[command(name = "sketchroute")]
#[command(about = "Classify a text description and lay it out as an Excalidraw diagram")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a description and print the result as JSON
    Detect {
        /// Text describing what to diagram
        #[arg(short, long)]
        text: String,

        /// Include every archetype's score breakdown
        #[arg(long)]
        scores: bool,
    },

    /// Build a diagram and write it as an Excalidraw scene
    Generate {
        /// Text describing what to diagram
        #[arg(short, long)]
        text: String,

        /// Output path without extension; `.excalidraw` is appended
        #[arg(short, long)]
        output: PathBuf,

        /// Force an archetype instead of classifying the text
        #[arg(long = "type", value_name = "ARCHETYPE")]
        archetype: Option<Archetype>,

        /// JSON file with elements and connections (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Include the classification in the printed result
        #[arg(long)]
        debug: bool,
    },

    /// Show supported diagram types
    Types {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Main CLI application
pub struct SketchrouteApp {
    orchestrator: Orchestrator,
}

impl SketchrouteApp {
    /// Create a new application instance with every plugin registered
    pub fn new() -> Self {
        Self {
            orchestrator: Orchestrator::with_all_plugins(),
        }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over the flag defaults
        let log_level = std::env::var("SKETCHROUTE_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| cli.log_level.as_str().to_string());
        let log_format = std::env::var("SKETCHROUTE_LOG_FORMAT")
            .ok()
            .unwrap_or_else(|| cli.log_format.as_str().to_string());

        if let Err(e) = init_logging(Some(&log_level), Some(&log_format)) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Sketchroute v{}", env!("CARGO_PKG_VERSION"));
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        match cli.command {
            Commands::Detect { text, scores } => self.detect_command(&text, scores, &mut out),
            Commands::Generate {
                text,
                output,
                archetype,
                input,
                debug,
            } => self.generate_command(&text, &output, archetype, input, debug, cli.verbose, &mut out),
            Commands::Types { json } => self.types_command(json, &mut out),
        }
    }

    /// Handle the detect command
    fn detect_command(&self, text: &str, scores: bool, out: &mut impl Write) -> Result<()> {
        let result = self.orchestrator.classify(text);
        let mut value = serde_json::to_value(&result)?;
        if scores {
            let breakdown = self.orchestrator.classifier().scores(text);
            value["scores"] = serde_json::to_value(breakdown)?;
        }
        write_json(out, &value)
    }

    /// Handle the generate command
    #[allow(clippy::too_many_arguments)]
    fn generate_command(
        &self,
        text: &str,
        output: &Path,
        archetype: Option<Archetype>,
        input: Option<PathBuf>,
        debug: bool,
        verbose: bool,
        out: &mut impl Write,
    ) -> Result<()> {
        let input = match input {
            Some(path) => read_input(&path)?,
            None => DiagramInput::new(),
        };
        if verbose {
            eprintln!(
                "Read {} elements and {} connections",
                input.elements.len(),
                input.connections.len()
            );
        }

        let result = self.orchestrator.generate(text, &input, archetype, output)?;
        if result.fell_back {
            eprintln!("Warning: {} layout failed, wrote a simple diagram", result.classification.archetype);
        }

        let mut value = json!({
            "excalidraw": result.scene_path.display().to_string(),
            "type": result.archetype,
        });
        if debug {
            value["analysis"] = serde_json::to_value(&result.classification)?;
        }
        write_json(out, &value)
    }

    /// Handle the types command
    fn types_command(&self, json: bool, out: &mut impl Write) -> Result<()> {
        if json {
            let types: Vec<Value> = Archetype::ALL
                .iter()
                .map(|archetype| {
                    json!({
                        "name": archetype.as_str(),
                        "description": archetype.description(),
                        "detectable": Archetype::DETECTABLE.contains(archetype),
                    })
                })
                .collect();
            let total = types.len();
            return write_json(out, &json!({ "supported_types": types, "total": total }));
        }

        writeln!(out, "Supported diagram types:")?;
        for archetype in Archetype::ALL {
            writeln!(out, "  {:<13} - {}", archetype.as_str(), archetype.description())?;
        }
        writeln!(out)?;
        writeln!(out, "Total: {} diagram types supported", Archetype::ALL.len())?;
        Ok(())
    }

    /// Get a reference to the orchestrator (for testing)
    #[cfg(test)]
    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }
}

impl Default for SketchrouteApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Read the element/connection document from a file or stdin
pub fn read_input(path: &Path) -> Result<DiagramInput> {
    let content = if path.to_string_lossy() == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        content
    } else {
        fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e))?
    };

    debug!(bytes = content.len(), "Read element list");
    DiagramInput::from_json(&content)
        .with_context(|| format!("Failed to parse input file '{}'", path.display()))
}

fn write_json(out: &mut impl Write, value: &Value) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    out.flush()?;
    Ok(())
}

//! gqlkit command-line interface

use anyhow::Result;
use clap::{Parser, Subcommand};
use gqlkit::cli::check::{self, Position};
use gqlkit::cli::inspect::{self, InspectConfig};
use gqlkit::cli::output::{self, OutputFormat};
use gqlkit::cli::schema;
use gqlkit::cli::wrap::{self, WrapConfig};
use std::path::PathBuf;

/// GraphQL type tool
#[derive(Parser)]
#[command(name = "gqlkit")]
#[command(author, version, about = "GraphQL wrapping-type tools", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format for reports
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Pretty, global = true)]
    format: OutputFormat,

    /// Schema file (JSON); falls back to GQLKIT_SCHEMA
    #[arg(short, long, global = true)]
    schema: Option<PathBuf>,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify type references such as `[User!]!`
    Inspect {
        /// Type references to inspect
        #[arg(required = true)]
        type_refs: Vec<String>,
    },

    /// Wrap a named type with a spec of `]` and `!` markers
    Wrap {
        /// Registered named type
        name: String,

        /// Wrapping spec, innermost marker first (e.g. `!]!`)
        spec: String,
    },

    /// Check that type references are legal in an input or output position
    Check {
        /// Position to check against
        #[arg(short, long, value_enum)]
        position: Position,

        /// Type references to check
        #[arg(required = true)]
        type_refs: Vec<String>,
    },
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(&cli.color);

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}", output::format_error(&e));
            std::process::exit(1);
        }
    }
}

/// Run the selected command; `Ok(false)` means the command reported failures
fn run(cli: Cli) -> Result<bool> {
    let registry = schema::load_registry(cli.schema.as_deref())?;

    match cli.command {
        Commands::Inspect { type_refs } => {
            let config = InspectConfig {
                type_refs,
                format: cli.format,
            };
            println!("{}", inspect::inspect(&registry, &config)?);
            Ok(true)
        }

        Commands::Wrap { name, spec } => {
            let ty = wrap::wrap(&registry, &WrapConfig { name, spec })?;
            match cli.format {
                OutputFormat::Pretty => println!("{ty}"),
                format => println!("{}", output::format_reports(&[ty.classify()], format)?),
            }
            Ok(true)
        }

        Commands::Check {
            position,
            type_refs,
        } => {
            let report = check::check(&registry, position, &type_refs);
            if report.is_success() {
                println!("{}", report.render());
            } else {
                eprintln!("{}", report.render());
            }
            Ok(report.is_success())
        }
    }
}

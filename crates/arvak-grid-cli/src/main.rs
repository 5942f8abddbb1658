//! Arvak Grid Engine command-line tool.
//!
//! Shows what would be submitted to an SGE-family cluster for a task, and
//! decodes captured `qsub`/`qstat` output. It never runs scheduler commands
//! itself.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::common::SpecArgs;
use commands::{directives, job_id, kill, script, status, submit, version};

/// Arvak Grid - Grid Engine submission and status translation
#[derive(Parser)]
#[command(name = "arvak-grid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (YAML)
    #[arg(short, long, global = true, env = "ARVAK_GRID_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the #$ directive header for a task
    Directives {
        #[command(flatten)]
        spec: SpecArgs,
    },

    /// Write a batch script into the task work directory and make it submittable
    Script {
        #[command(flatten)]
        spec: SpecArgs,

        /// Script body (shell commands)
        #[arg(long, conflicts_with = "body_file")]
        body: Option<String>,

        /// Read the script body from a file
        #[arg(long)]
        body_file: Option<PathBuf>,
    },

    /// Print the qsub invocation for a script
    SubmitCommand {
        /// Script file name (defaults to the configured name)
        #[arg(short, long)]
        script: Option<String>,

        /// Stream the script on stdin instead of passing the file
        #[arg(long)]
        pipe: bool,
    },

    /// Parse qsub output into a job ID
    ParseJobId {
        /// Read output from a file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Parse qstat output into job states
    ParseStatus {
        /// Read output from a file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Print the qdel invocation for one or more jobs
    KillCommand {
        /// Job IDs
        #[arg(required = true)]
        job_ids: Vec<String>,
    },

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();

    // Execute command
    let result = match cli.command {
        Commands::Directives { spec } => directives::execute(config, &spec),

        Commands::Script {
            spec,
            body,
            body_file,
        } => script::execute(config, &spec, body.as_deref(), body_file.as_deref()).await,

        Commands::SubmitCommand { script, pipe } => {
            submit::execute(config, script.as_deref(), pipe)
        }

        Commands::ParseJobId { input } => job_id::execute(input.as_deref()),

        Commands::ParseStatus { input, format } => status::execute(input.as_deref(), &format),

        Commands::KillCommand { job_ids } => kill::execute(&job_ids),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

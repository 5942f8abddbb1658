//! Shared helpers for CLI commands.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use arvak_grid::sge::templates::sanitize_job_name;
use arvak_grid::{GridConfig, SgeExecutor, TaskResourceSpec, parse_memory, parse_wall_time};

/// Task resource options shared by commands that build directives.
#[derive(Args, Debug, Clone)]
pub struct SpecArgs {
    /// Job name
    #[arg(short, long)]
    pub name: String,

    /// Task work directory
    #[arg(short, long)]
    pub work_dir: PathBuf,

    /// Target queue
    #[arg(short, long)]
    pub queue: Option<String>,

    /// Parallel environment (e.g. smp)
    #[arg(long)]
    pub pe: Option<String>,

    /// Number of CPUs (slots)
    #[arg(long, default_value = "1")]
    pub cpus: u32,

    /// Wall time limit (HH:MM:SS)
    #[arg(short, long)]
    pub time: Option<String>,

    /// Memory limit (e.g. 4GiB)
    #[arg(short, long)]
    pub memory: Option<String>,

    /// Replace characters Grid Engine rejects in job names
    #[arg(long)]
    pub sanitize_name: bool,
}

/// Load the adapter configuration (file, then environment overrides).
pub fn load_config(path: Option<&Path>) -> Result<GridConfig> {
    let config = GridConfig::load(path).with_context(|| match path {
        Some(p) => format!("Failed to load config: {}", p.display()),
        None => "Failed to load config from environment".to_string(),
    })?;
    tracing::debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

/// Create an executor from the configuration.
pub fn create_executor(config_path: Option<&Path>) -> Result<SgeExecutor> {
    Ok(SgeExecutor::new(load_config(config_path)?))
}

/// Build a resource spec from command-line options.
pub fn build_spec(executor: &SgeExecutor, args: &SpecArgs) -> Result<TaskResourceSpec> {
    let name = if args.sanitize_name {
        sanitize_job_name(&args.name)
    } else {
        args.name.clone()
    };

    let mut spec = executor
        .task_spec(name, args.work_dir.clone())
        .with_cpus(args.cpus);

    if let Some(ref queue) = args.queue {
        spec = spec.with_queue(queue);
    }
    if let Some(ref pe) = args.pe {
        spec = spec.with_parallel_environment(pe);
    }
    if let Some(ref time) = args.time {
        spec = spec.with_wall_time(parse_wall_time(time)?);
    }
    if let Some(ref memory) = args.memory {
        spec = spec.with_memory(parse_memory(memory)?);
    }

    spec.validate()?;
    Ok(spec)
}

/// Read captured command output from a file, or stdin if no file is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => fs::read_to_string(p)
            .with_context(|| format!("Failed to read file: {}", p.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

//! Script command implementation.
//!
//! Writes a batch script into the task work directory and applies the
//! permissions file-based submission needs.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use arvak_grid::GridExecutor;

use super::common::{SpecArgs, build_spec, create_executor};

/// Default body when none is given: run the task's command script.
const DEFAULT_BODY: &str = "bash .command.sh";

/// Execute the script command.
pub async fn execute(
    config: Option<&Path>,
    args: &SpecArgs,
    body: Option<&str>,
    body_file: Option<&Path>,
) -> Result<()> {
    let executor = create_executor(config)?;
    let spec = build_spec(&executor, args)?;

    let body = match (body, body_file) {
        (Some(b), _) => b.to_string(),
        (None, Some(path)) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read body file: {}", path.display()))?,
        (None, None) => DEFAULT_BODY.to_string(),
    };

    tokio::fs::create_dir_all(&spec.work_dir)
        .await
        .with_context(|| format!("Failed to create {}", spec.work_dir.display()))?;

    let script_path = spec.work_file(&executor.config().script_file_name);
    tokio::fs::write(&script_path, executor.script(&spec, &body))
        .await
        .with_context(|| format!("Failed to write {}", script_path.display()))?;

    executor
        .prepare_script(&script_path)
        .await
        .with_context(|| format!("Failed to prepare {}", script_path.display()))?;

    tracing::info!("Wrote batch script {}", script_path.display());

    let command = executor.submit_command(&executor.config().script_file_name);
    println!(
        "{} Script written: {}",
        style("✓").green().bold(),
        style(script_path.display()).cyan()
    );
    println!("  Submit with: {}", style(command.join(" ")).yellow());

    Ok(())
}

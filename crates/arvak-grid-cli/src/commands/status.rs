//! Status command implementation.
//!
//! Decode captured `qstat` output into job states.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use arvak_grid::sge::parse_qstat_output;
use arvak_grid::{QueueSnapshot, QueueStatus};

use super::common::read_input;

/// Execute the parse-status command.
pub fn execute(input: Option<&Path>, format: &str) -> Result<()> {
    let output = read_input(input)?;
    let snapshot = parse_qstat_output(&output);

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&snapshot)
                .context("Failed to serialize snapshot")?;
            println!("{json}");
        }
        "table" => print_table(&snapshot),
        other => anyhow::bail!("Unknown format: '{other}'. Available: table, json"),
    }

    Ok(())
}

fn print_table(snapshot: &QueueSnapshot) {
    if snapshot.is_empty() {
        println!("No jobs found.");
        return;
    }

    println!("{} {} job(s):\n", style("→").cyan().bold(), snapshot.len());
    println!(
        "  {:<20}  {}",
        style("JOB ID").bold(),
        style("STATUS").bold()
    );
    println!("  {}", "-".repeat(32));

    for (job_id, status) in snapshot.iter() {
        let name = status.name();
        let styled = match status {
            QueueStatus::Running => style(name).cyan(),
            QueueStatus::Pending => style(name).yellow(),
            QueueStatus::Hold => style(name).magenta(),
            QueueStatus::Error => style(name).red(),
            QueueStatus::Unknown => style(name).dim(),
        };
        println!("  {:<20}  {}", job_id, styled);
    }
}

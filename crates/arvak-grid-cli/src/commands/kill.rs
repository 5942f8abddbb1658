//! Kill command implementation.

use anyhow::Result;

use arvak_grid::{GridExecutor, JobId, SgeExecutor};

/// Execute the kill-command command.
pub fn execute(job_ids: &[String]) -> Result<()> {
    let ids: Vec<JobId> = job_ids.iter().map(|id| JobId::new(id.as_str())).collect();
    let command = SgeExecutor::default().kill_command_for(&ids);

    println!("{}", command.join(" "));
    Ok(())
}

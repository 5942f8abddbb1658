//! Job ID parsing command implementation.

use std::path::Path;

use anyhow::{Context, Result};

use arvak_grid::sge::parse_qsub_output;

use super::common::read_input;

/// Execute the parse-job-id command.
pub fn execute(input: Option<&Path>) -> Result<()> {
    let output = read_input(input)?;
    let job_id = parse_qsub_output(&output).context("qsub output not recognised")?;

    println!("{job_id}");
    Ok(())
}

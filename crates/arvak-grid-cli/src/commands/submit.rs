//! Submit command implementation.

use std::path::Path;

use anyhow::Result;

use arvak_grid::{GridExecutor, SgeExecutor};

use super::common::{create_executor, load_config};

/// Execute the submit-command command.
pub fn execute(config: Option<&Path>, script: Option<&str>, pipe: bool) -> Result<()> {
    let executor = if pipe {
        let mut cfg = load_config(config)?;
        cfg.pipe_launcher = true;
        SgeExecutor::new(cfg)
    } else {
        create_executor(config)?
    };

    let script = script.unwrap_or(&executor.config().script_file_name);
    println!("{}", executor.submit_command(script).join(" "));
    Ok(())
}

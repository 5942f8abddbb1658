//! Directives command implementation.

use std::path::Path;

use anyhow::Result;

use arvak_grid::GridExecutor;

use super::common::{SpecArgs, build_spec, create_executor};

/// Execute the directives command.
pub fn execute(config: Option<&Path>, args: &SpecArgs) -> Result<()> {
    let executor = create_executor(config)?;
    let spec = build_spec(&executor, args)?;

    print!("{}", executor.headers(&spec));
    Ok(())
}

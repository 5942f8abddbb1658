//! Grid Engine (SGE/OGE) executor.

use std::path::Path;

use tokio::fs;
use tracing::debug;

use crate::config::GridConfig;
use crate::error::GridResult;
use crate::executor::GridExecutor;
use crate::job::{JobId, TaskResourceSpec};
use crate::sge::commands;
use crate::sge::directives::{DirectiveSequence, build_directives};
use crate::sge::parser;
use crate::sge::templates;
use crate::snapshot::QueueSnapshot;

/// Permission bits a submitted script needs: `rwxr-xr-x`.
pub const SCRIPT_MODE: u32 = 0o755;

/// Executor for Sun/Oracle/Open Grid Engine clusters.
#[derive(Debug, Clone, Default)]
pub struct SgeExecutor {
    config: GridConfig,
}

impl SgeExecutor {
    /// Create an executor with the given configuration.
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Resource spec for a task, using the configured log file name.
    pub fn task_spec(
        &self,
        job_name: impl Into<String>,
        work_dir: impl Into<std::path::PathBuf>,
    ) -> TaskResourceSpec {
        TaskResourceSpec::new(job_name, work_dir).with_log_file_name(&self.config.log_file_name)
    }

    /// Full batch script for a task: shebang, directive header, body.
    pub fn script(&self, spec: &TaskResourceSpec, body: &str) -> String {
        templates::generate_script(&self.headers(spec), body)
    }

    /// Make a script file submittable.
    ///
    /// Grid Engine refuses to run a script file that is not executable, so
    /// file-based submission sets [`SCRIPT_MODE`] first. Piped submission
    /// never touches the file.
    pub async fn prepare_script(&self, script_path: &Path) -> GridResult<()> {
        if self.config.pipe_launcher {
            return Ok(());
        }

        set_script_permissions(script_path).await
    }
}

#[cfg(unix)]
async fn set_script_permissions(script_path: &Path) -> GridResult<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(script_path, std::fs::Permissions::from_mode(SCRIPT_MODE)).await?;
    debug!("Set mode {:o} on {}", SCRIPT_MODE, script_path.display());
    Ok(())
}

#[cfg(not(unix))]
async fn set_script_permissions(script_path: &Path) -> GridResult<()> {
    // Only checks the script exists; there are no mode bits to set.
    fs::metadata(script_path).await?;
    Ok(())
}

impl GridExecutor for SgeExecutor {
    fn name(&self) -> &str {
        "sge"
    }

    fn directives(&self, spec: &TaskResourceSpec) -> DirectiveSequence {
        build_directives(spec)
    }

    fn headers(&self, spec: &TaskResourceSpec) -> String {
        templates::render_headers(
            &self.directives(spec),
            self.config.cluster_options.as_deref(),
        )
    }

    fn submit_command(&self, script_file_name: &str) -> Vec<String> {
        let command = commands::submit_command(self.config.pipe_launcher, script_file_name);
        debug!("Submit command: {}", command.join(" "));
        command
    }

    fn parse_job_id(&self, output: &str) -> GridResult<JobId> {
        parser::parse_qsub_output(output)
    }

    fn kill_command(&self) -> Vec<String> {
        commands::kill_command()
    }

    fn queue_status_command(&self, _queue: Option<&str>) -> Vec<String> {
        // qstat lists every queue; callers filter the snapshot.
        commands::queue_status_command()
    }

    fn parse_queue_status(&self, output: &str) -> QueueSnapshot {
        parser::parse_qstat_output(output)
    }
}

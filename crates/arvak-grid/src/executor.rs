//! Batch executor abstraction.

use crate::error::GridResult;
use crate::job::{JobId, TaskResourceSpec};
use crate::sge::DirectiveSequence;
use crate::snapshot::QueueSnapshot;

/// Translation layer between task resources and a batch scheduler's
/// command-line vocabulary.
///
/// Implementations only build and parse text. Running the commands,
/// capturing their output and deciding when to poll is up to the caller.
pub trait GridExecutor: Send + Sync {
    /// Scheduler family name.
    fn name(&self) -> &str;

    /// Ordered submission directives for a task.
    fn directives(&self, spec: &TaskResourceSpec) -> DirectiveSequence;

    /// Rendered directive header for the task's batch script.
    fn headers(&self, spec: &TaskResourceSpec) -> String;

    /// Submission command for a script.
    fn submit_command(&self, script_file_name: &str) -> Vec<String>;

    /// Extract the job id from submission output.
    fn parse_job_id(&self, output: &str) -> GridResult<JobId>;

    /// Command that removes jobs; ids are appended by the caller.
    fn kill_command(&self) -> Vec<String>;

    /// Command that lists queued jobs.
    fn queue_status_command(&self, queue: Option<&str>) -> Vec<String>;

    /// Decode a queue listing.
    fn parse_queue_status(&self, output: &str) -> QueueSnapshot;

    /// Kill command with the given job ids appended.
    fn kill_command_for(&self, job_ids: &[JobId]) -> Vec<String> {
        let mut command = self.kill_command();
        command.extend(job_ids.iter().map(ToString::to_string));
        command
    }
}

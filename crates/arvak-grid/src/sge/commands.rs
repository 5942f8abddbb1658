//! Grid Engine command lines.

/// Submission command.
pub const QSUB: &str = "qsub";

/// Status listing command.
pub const QSTAT: &str = "qstat";

/// Job removal command.
pub const QDEL: &str = "qdel";

/// Build the qsub invocation.
///
/// With a piped launcher the script is streamed on stdin (`qsub -`).
/// Otherwise the script file is passed with `-terse`; the file must be
/// executable before submission.
pub fn submit_command(pipe_launcher: bool, script_file_name: &str) -> Vec<String> {
    if pipe_launcher {
        vec![QSUB.to_string(), "-".to_string()]
    } else {
        vec![
            QSUB.to_string(),
            "-terse".to_string(),
            script_file_name.to_string(),
        ]
    }
}

/// Command to remove jobs. Job ids are appended by the caller.
pub fn kill_command() -> Vec<String> {
    vec![QDEL.to_string()]
}

/// Command to list queued jobs.
///
/// No queue filter is added, even when the caller knows the queue.
pub fn queue_status_command() -> Vec<String> {
    vec![QSTAT.to_string()]
}

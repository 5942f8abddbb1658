//! Parsers for Grid Engine command output.

use tracing::{debug, trace};

use crate::error::{GridError, GridResult};
use crate::job::JobId;
use crate::sge::status::map_status_code;
use crate::snapshot::QueueSnapshot;

/// Minimum number of whitespace-separated columns in a `qstat` job row.
const QSTAT_MIN_COLUMNS: usize = 6;

/// Column holding the job id.
const QSTAT_JOB_ID_COLUMN: usize = 0;

/// Column holding the state code.
const QSTAT_STATE_COLUMN: usize = 4;

/// Parse qsub output to extract the job ID.
///
/// Only the last non-empty line is considered, so warnings printed before
/// it are ignored. Two forms are accepted:
/// - terse: `12345`
/// - verbose: `Your job 12345 ("name") has been submitted`
pub fn parse_qsub_output(output: &str) -> GridResult<JobId> {
    let entry = output
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .next_back()
        .unwrap_or_default();

    if !entry.is_empty() && entry.chars().all(|c| c.is_ascii_digit()) {
        debug!("Parsed terse qsub job id {}", entry);
        return Ok(JobId::new(entry));
    }

    if entry.starts_with("Your job") && entry.ends_with("has been submitted") {
        if let Some(id) = entry.split_whitespace().nth(2) {
            debug!("Parsed verbose qsub job id {}", id);
            return Ok(JobId::new(id));
        }
    }

    Err(GridError::InvalidSubmitResponse(output.to_string()))
}

/// Parse default `qstat` output into a queue snapshot.
///
/// ```text
/// job-ID  prior   name       user         state submit/start at     queue                          slots ja-task-ID
/// -----------------------------------------------------------------------------------------------------------------
///  7548   0.50500 nf-hello   pditommaso   r     02/10/2014 12:30:51 long.q@node-12.local               1
///  7549   0.00000 nf-world   pditommaso   qw    02/10/2014 12:30:42                                    1
/// ```
///
/// The first two lines are always skipped. Rows with fewer than six columns
/// are dropped; a repeated job id keeps its first position and takes the
/// last state.
pub fn parse_qstat_output(output: &str) -> QueueSnapshot {
    let mut snapshot = QueueSnapshot::new();

    for line in output.lines().skip(2) {
        let line = line.trim();

        let columns: Vec<&str> = line.split_whitespace().collect();
        if columns.len() < QSTAT_MIN_COLUMNS {
            if !line.is_empty() {
                trace!("Skipping short qstat row: {}", line);
            }
            continue;
        }

        let job_id = JobId::new(columns[QSTAT_JOB_ID_COLUMN]);
        let status = map_status_code(columns[QSTAT_STATE_COLUMN]);
        snapshot.insert(job_id, status);
    }

    debug!("Parsed qstat snapshot with {} job(s)", snapshot.len());
    snapshot
}

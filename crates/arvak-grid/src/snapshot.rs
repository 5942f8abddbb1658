//! Queue state as reported by one status query.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::job::JobId;

/// Decoded state of a job in the scheduler queue.
///
/// Whether a state is terminal is decided by the caller's job state machine.
/// `Unknown` means "re-query", never "finished".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueueStatus {
    /// Job is executing.
    Running,
    /// Job is waiting to be scheduled.
    Pending,
    /// Job is held or suspended.
    Hold,
    /// Job is in an error state.
    Error,
    /// Status code not recognised.
    Unknown,
}

impl QueueStatus {
    /// Upper-case name of the state.
    pub fn name(&self) -> &'static str {
        match self {
            QueueStatus::Running => "RUNNING",
            QueueStatus::Pending => "PENDING",
            QueueStatus::Hold => "HOLD",
            QueueStatus::Error => "ERROR",
            QueueStatus::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for QueueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Job states from a single `qstat` run, in first-seen order.
///
/// Re-inserting an existing job replaces its state but keeps its position.
/// No history is kept between queries; a job missing from a snapshot has
/// unknown status, it has not necessarily finished.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueSnapshot {
    entries: Vec<(JobId, QueueStatus)>,
    index: FxHashMap<JobId, usize>,
}

impl QueueSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state of a job, returning the previous state if it was
    /// already present.
    pub fn insert(&mut self, job_id: JobId, status: QueueStatus) -> Option<QueueStatus> {
        if let Some(&pos) = self.index.get(&job_id) {
            let previous = std::mem::replace(&mut self.entries[pos].1, status);
            return Some(previous);
        }

        self.index.insert(job_id.clone(), self.entries.len());
        self.entries.push((job_id, status));
        None
    }

    /// State of a job, if it appeared in the listing.
    pub fn get(&self, job_id: &JobId) -> Option<QueueStatus> {
        self.index.get(job_id).map(|&pos| self.entries[pos].1)
    }

    /// Whether the job appeared in the listing.
    pub fn contains(&self, job_id: &JobId) -> bool {
        self.index.contains_key(job_id)
    }

    /// Number of distinct jobs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no jobs were listed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate jobs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&JobId, QueueStatus)> {
        self.entries.iter().map(|(id, status)| (id, *status))
    }

    /// Job ids in first-seen order.
    pub fn job_ids(&self) -> impl Iterator<Item = &JobId> {
        self.entries.iter().map(|(id, _)| id)
    }
}

impl IntoIterator for QueueSnapshot {
    type Item = (JobId, QueueStatus);
    type IntoIter = std::vec::IntoIter<(JobId, QueueStatus)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(JobId, QueueStatus)> for QueueSnapshot {
    fn from_iter<I: IntoIterator<Item = (JobId, QueueStatus)>>(iter: I) -> Self {
        let mut snapshot = QueueSnapshot::new();
        for (id, status) in iter {
            snapshot.insert(id, status);
        }
        snapshot
    }
}

impl Serialize for QueueSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, status) in &self.entries {
            map.serialize_entry(id, status)?;
        }
        map.end()
    }
}

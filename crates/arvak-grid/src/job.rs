//! Job types for the grid engine adapter.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use bytesize::ByteSize;
use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

/// Default name of the merged stdout/stderr log inside a task work directory.
pub const DEFAULT_LOG_FILE_NAME: &str = ".command.log";

/// Scheduler-assigned job identifier.
///
/// Always kept as the literal text the scheduler printed, so numeric ids
/// never lose precision and callers compare one stable type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
    /// Create a job ID from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for JobId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for JobId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Resources requested for one task submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResourceSpec {
    /// Name the job is listed under in `qstat`.
    pub job_name: String,

    /// Task working directory; the log file lives here. Must be valid UTF-8
    /// to appear in the `-o` directive unchanged, see [`Self::validate`].
    pub work_dir: PathBuf,

    /// Log file name relative to `work_dir`.
    #[serde(default = "default_log_file_name")]
    pub log_file_name: String,

    /// Target queue.
    #[serde(default)]
    pub queue: Option<String>,

    /// Parallel environment for multi-slot jobs.
    #[serde(default)]
    pub parallel_environment: Option<String>,

    /// Number of CPUs (slots). Always at least 1.
    #[serde(default = "default_cpus")]
    pub cpus: u32,

    /// Wall clock limit.
    #[serde(default)]
    pub wall_time: Option<Duration>,

    /// Memory limit.
    #[serde(default)]
    pub memory: Option<ByteSize>,
}

fn default_log_file_name() -> String {
    DEFAULT_LOG_FILE_NAME.to_string()
}

fn default_cpus() -> u32 {
    1
}

impl TaskResourceSpec {
    /// Create a spec with one CPU and no optional resources.
    pub fn new(job_name: impl Into<String>, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            job_name: job_name.into(),
            work_dir: work_dir.into(),
            log_file_name: default_log_file_name(),
            queue: None,
            parallel_environment: None,
            cpus: default_cpus(),
            wall_time: None,
            memory: None,
        }
    }

    /// Set the log file name.
    pub fn with_log_file_name(mut self, name: impl Into<String>) -> Self {
        self.log_file_name = name.into();
        self
    }

    /// Set the target queue.
    pub fn with_queue(mut self, queue: impl Into<String>) -> Self {
        self.queue = Some(queue.into());
        self
    }

    /// Request a parallel environment.
    pub fn with_parallel_environment(mut self, pe: impl Into<String>) -> Self {
        self.parallel_environment = Some(pe.into());
        self
    }

    /// Set the CPU count. Zero is raised to one.
    pub fn with_cpus(mut self, cpus: u32) -> Self {
        self.cpus = cpus.max(1);
        self
    }

    /// Set the wall clock limit.
    pub fn with_wall_time(mut self, wall_time: Duration) -> Self {
        self.wall_time = Some(wall_time);
        self
    }

    /// Set the memory limit.
    pub fn with_memory(mut self, memory: ByteSize) -> Self {
        self.memory = Some(memory);
        self
    }

    /// Check the log path can be written into a directive verbatim.
    pub fn validate(&self) -> GridResult<()> {
        let log_path = self.log_path();
        if log_path.to_str().is_none() {
            return Err(GridError::NonUtf8Path(log_path.to_string_lossy().into_owned()));
        }
        Ok(())
    }

    /// Full path of the job log.
    pub fn log_path(&self) -> PathBuf {
        self.work_dir.join(&self.log_file_name)
    }

    /// Path of a file inside the work directory.
    pub fn work_file(&self, name: impl AsRef<Path>) -> PathBuf {
        self.work_dir.join(name)
    }
}

/// Format a duration as `HH:MM:SS`. Hours are not wrapped at 24.
pub fn format_wall_time(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Parse a wall time given as `HH:MM:SS`, `MM:SS` or plain seconds.
pub fn parse_wall_time(s: &str) -> GridResult<Duration> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(GridError::InvalidWallTime(s.to_string()));
    }

    let parts = trimmed
        .split(':')
        .map(|p| p.parse::<u64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| GridError::InvalidWallTime(s.to_string()))?;

    let secs = match parts.as_slice() {
        [secs] => *secs,
        [m, sec] if *sec < 60 => m * 60 + sec,
        [h, m, sec] if *m < 60 && *sec < 60 => h * 3600 + m * 60 + sec,
        _ => return Err(GridError::InvalidWallTime(s.to_string())),
    };

    Ok(Duration::from_secs(secs))
}

/// Parse a memory size such as `4GiB` or `512 MB`.
pub fn parse_memory(s: &str) -> GridResult<ByteSize> {
    s.trim()
        .parse::<ByteSize>()
        .map_err(|e| GridError::InvalidMemory(format!("{s}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_id_display() {
        let id = JobId::new("12345");
        assert_eq!(id.to_string(), "12345");
        assert_eq!(id.as_str(), "12345");
        assert_eq!(JobId::from("12345"), id);
    }

    #[test]
    fn test_job_id_serializes_as_string() {
        let id = JobId::new("98765");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"98765\"");
    }

    #[test]
    fn test_spec_defaults() {
        let spec = TaskResourceSpec::new("nf-align", "/scratch/work/ab/12");
        assert_eq!(spec.cpus, 1);
        assert_eq!(spec.log_file_name, DEFAULT_LOG_FILE_NAME);
        assert!(spec.queue.is_none());
        assert!(spec.parallel_environment.is_none());
        assert!(spec.wall_time.is_none());
        assert!(spec.memory.is_none());
        assert_eq!(
            spec.log_path(),
            PathBuf::from("/scratch/work/ab/12/.command.log")
        );
    }

    #[test]
    fn test_spec_builder() {
        let spec = TaskResourceSpec::new("job", "/w")
            .with_queue("long")
            .with_parallel_environment("smp")
            .with_cpus(8)
            .with_wall_time(Duration::from_secs(90))
            .with_memory(ByteSize::gib(4))
            .with_log_file_name("job.log");

        assert_eq!(spec.queue.as_deref(), Some("long"));
        assert_eq!(spec.parallel_environment.as_deref(), Some("smp"));
        assert_eq!(spec.cpus, 8);
        assert_eq!(spec.wall_time, Some(Duration::from_secs(90)));
        assert_eq!(spec.memory, Some(ByteSize::gib(4)));
        assert_eq!(spec.log_path(), PathBuf::from("/w/job.log"));
    }

    #[test]
    fn test_zero_cpus_clamped() {
        let spec = TaskResourceSpec::new("job", "/w").with_cpus(0);
        assert_eq!(spec.cpus, 1);
    }

    #[test]
    fn test_validate_utf8_work_dir() {
        assert!(TaskResourceSpec::new("job", "/home/me/my work").validate().is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_rejects_non_utf8_work_dir() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let work_dir = PathBuf::from(OsStr::from_bytes(b"/scratch/w\xff"));
        let err = TaskResourceSpec::new("job", work_dir).validate().unwrap_err();
        assert!(matches!(err, GridError::NonUtf8Path(_)));
    }

    #[test]
    fn test_format_wall_time() {
        assert_eq!(format_wall_time(Duration::from_secs(0)), "00:00:00");
        assert_eq!(format_wall_time(Duration::from_secs(3661)), "01:01:01");
        assert_eq!(format_wall_time(Duration::from_secs(30 * 3600)), "30:00:00");
        assert_eq!(format_wall_time(Duration::from_millis(1999)), "00:00:01");
        assert_eq!(
            format_wall_time(Duration::from_secs(120 * 3600 + 59)),
            "120:00:59"
        );
    }

    #[test]
    fn test_parse_wall_time() {
        assert_eq!(
            parse_wall_time("01:30:00").unwrap(),
            Duration::from_secs(5400)
        );
        assert_eq!(
            parse_wall_time("48:00:00").unwrap(),
            Duration::from_secs(48 * 3600)
        );
        assert_eq!(parse_wall_time("05:30").unwrap(), Duration::from_secs(330));
        assert_eq!(parse_wall_time("600").unwrap(), Duration::from_secs(600));
    }

    #[test]
    fn test_parse_wall_time_invalid() {
        assert!(parse_wall_time("").is_err());
        assert!(parse_wall_time("1:xx:00").is_err());
        assert!(parse_wall_time("01:75:00").is_err());
        assert!(parse_wall_time("1:2:3:4").is_err());
    }

    #[test]
    fn test_parse_memory() {
        assert_eq!(parse_memory("4GiB").unwrap(), ByteSize::gib(4));
        assert_eq!(parse_memory(" 512 MiB ").unwrap(), ByteSize::mib(512));
        assert!(parse_memory("lots").is_err());
    }
}

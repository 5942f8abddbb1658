//! Arvak Grid Engine Adapter
//!
//! This crate translates abstract compute-task resource requests into the
//! submission syntax of SGE-family batch schedulers, and translates the
//! scheduler's textual replies back into job ids and queue states.
//!
//! # Overview
//!
//! A submission round trip looks like this:
//! 1. **Directives**: build the ordered `#$` header from a [`TaskResourceSpec`]
//! 2. **Submit**: pick the `qsub` invocation (piped or file based)
//! 3. **Job id**: parse whatever `qsub` printed into a [`JobId`]
//! 4. **Poll**: decode `qstat` listings into a [`QueueSnapshot`]
//! 5. **Kill**: `qdel <job id...>`
//!
//! Running the commands is left to the caller; everything here is plain
//! text transformation, safe to call from any thread.
//!
//! | Concern | Command | Output grammar |
//! |---------|---------|----------------|
//! | Submit | `qsub -terse <script>` / `qsub -` | `12345` or `Your job 12345 ("name") has been submitted` |
//! | Status | `qstat` | two header lines, then whitespace-separated rows |
//! | Kill | `qdel <id...>` | not parsed |
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use arvak_grid::{GridExecutor, QueueStatus, SgeExecutor, TaskResourceSpec};
//!
//! let executor = SgeExecutor::default();
//! let spec = TaskResourceSpec::new("nf-align", "/scratch/work/3f/a1b2")
//!     .with_queue("long.q")
//!     .with_cpus(4)
//!     .with_wall_time(Duration::from_secs(2 * 3600));
//!
//! let headers = executor.headers(&spec);
//! assert!(headers.starts_with("#$ -N nf-align\n"));
//!
//! let command = executor.submit_command(".command.run");
//! assert_eq!(command, ["qsub", "-terse", ".command.run"]);
//!
//! let job_id = executor.parse_job_id("4711\n").unwrap();
//! assert_eq!(job_id.as_str(), "4711");
//!
//! let listing = "job-ID prior name user state\n----\n4711 0.5 nf-align me r 01/01/2024 10:00:00 1\n";
//! let snapshot = executor.parse_queue_status(listing);
//! assert_eq!(snapshot.get(&job_id), Some(QueueStatus::Running));
//! ```

pub mod config;
pub mod error;
pub mod executor;
pub mod job;
pub mod sge;
pub mod snapshot;

// Re-exports
pub use config::GridConfig;
pub use error::{GridError, GridResult};
pub use executor::GridExecutor;
pub use job::{JobId, TaskResourceSpec, format_wall_time, parse_memory, parse_wall_time};
pub use sge::{Directive, DirectiveSequence, SgeExecutor};
pub use snapshot::{QueueSnapshot, QueueStatus};

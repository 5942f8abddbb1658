//! Grid Engine (SGE/OGE/UGE) integration.
//!
//! Translates task resource requests into `#$` directives and `qsub`
//! invocations, and decodes `qsub`/`qstat` output back into job ids and
//! queue states. Commands are built here but executed by the caller.

mod adapter;
pub mod commands;
mod directives;
pub mod parser;
mod status;
pub mod templates;

pub use adapter::{SCRIPT_MODE, SgeExecutor};
pub use directives::{Directive, DirectiveSequence, build_directives};
pub use parser::{parse_qstat_output, parse_qsub_output};
pub use status::{STATUS_CODES, map_status_code};
pub use templates::{DIRECTIVE_MARKER, quote_path, render_headers};

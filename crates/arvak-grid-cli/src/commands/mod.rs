//! CLI command implementations.

pub mod common;
pub mod directives;
pub mod job_id;
pub mod kill;
pub mod script;
pub mod status;
pub mod submit;
pub mod version;
